//! Complex polynomial helpers.
//!
//! Coefficients are stored in descending powers: `c[0] x^n + ... + c[n]`.

use num_complex::Complex64;

use crate::error::{DesignError, Result};

/// Largest imaginary residue, relative to the biggest coefficient magnitude,
/// accepted when collapsing an expanded polynomial to real coefficients.
pub const IMAGINARY_TOLERANCE: f64 = 1e-10;

/// Product of two polynomials
pub fn multiply(lhs: &[Complex64], rhs: &[Complex64]) -> Vec<Complex64> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }

    let mut out = vec![Complex64::new(0.0, 0.0); lhs.len() + rhs.len() - 1];
    for (i, a) in lhs.iter().enumerate() {
        for (j, b) in rhs.iter().enumerate() {
            out[i + j] += a * b;
        }
    }
    out
}

/// Monic polynomial whose roots are `roots`: `(x - r0)(x - r1)...`
///
/// An empty root set expands to the constant polynomial `1`.
pub fn expand_roots(roots: &[Complex64]) -> Vec<Complex64> {
    let one = Complex64::new(1.0, 0.0);
    roots
        .iter()
        .fold(vec![one], |acc, root| multiply(&acc, &[one, -*root]))
}

/// Evaluate complex coefficients at `x` (Horner)
pub fn evaluate(coeffs: &[Complex64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, c| acc * x + c)
}

/// Evaluate real coefficients at a complex point (Horner)
pub fn evaluate_real(coeffs: &[f64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}

/// Collapse coefficients to their real parts.
///
/// Conjugate root pairs cancel exactly in exact arithmetic, so anything
/// above [`IMAGINARY_TOLERANCE`] (relative to the largest coefficient) means
/// the root set was not conjugate-symmetric.
pub fn into_real(coeffs: &[Complex64]) -> Result<Vec<f64>> {
    // f64::max drops NaN, so overflowed expansions are caught up front
    if let Some(bad) = coeffs.iter().find(|c| !(c.re.is_finite() && c.im.is_finite())) {
        return Err(DesignError::NumericalInstability {
            residual: bad.im.abs(),
            tolerance: IMAGINARY_TOLERANCE,
        });
    }

    let scale = coeffs.iter().map(|c| c.norm()).fold(1.0_f64, f64::max);
    let residual = coeffs.iter().map(|c| c.im.abs()).fold(0.0_f64, f64::max);
    let tolerance = IMAGINARY_TOLERANCE * scale;

    if !(residual <= tolerance) {
        return Err(DesignError::NumericalInstability {
            residual,
            tolerance,
        });
    }
    if residual > tolerance * 1e-2 {
        tracing::warn!(residual, tolerance, "imaginary residue close to tolerance");
    }

    Ok(coeffs.iter().map(|c| c.re).collect())
}
