//! Bilinear transform from the s-plane to the z-plane.
//!
//! The substitution `s = (2/T) (z - 1) / (z + 1)` maps each root as
//!
//! ```text
//! z = (2 + s T) / (2 - s T)
//! ```
//!
//! and sends zeros at infinity to `z = -1`.

use num_complex::Complex64;

use crate::design::polynomial;
use crate::design::prototype::prewarp;
use crate::error::{DesignError, Result};
use crate::types::{DiscreteTransferFunction, Zpk};

/// Analog frequency (rad/s) whose bilinear image is the normalized cutoff `w`
pub fn prewarp_cutoff(w: f64, sampling_time: f64) -> f64 {
    2.0 / sampling_time * prewarp(w)
}

/// Map an analog zero/pole/gain set to the z-plane
///
/// # Arguments
/// * `analog` - s-plane set with at least one pole and no more zeros than poles
/// * `sampling_time` - Sampling period `T` (inverse of the sampling rate)
pub fn bilinear(analog: Zpk, sampling_time: f64) -> Result<Zpk> {
    if analog.poles.is_empty() || analog.zeros.len() > analog.poles.len() {
        return Err(DesignError::InvalidTransferFunction {
            zeros: analog.zeros.len(),
            poles: analog.poles.len(),
        });
    }
    if !(sampling_time.is_finite() && sampling_time > 0.0) {
        return Err(DesignError::spec(format!(
            "sampling time must be positive, got {}",
            sampling_time
        )));
    }

    let t = sampling_time;
    let missing = analog.relative_degree();
    let to_z = |r: &Complex64| (2.0 + r * t) / (2.0 - r * t);
    let scale = |r: &Complex64| (2.0 - r * t) / t;

    let num: Complex64 = analog.zeros.iter().map(scale).product();
    let den: Complex64 = analog.poles.iter().map(scale).product();
    let gain = (analog.gain * num / den).re;

    let mut zeros: Vec<Complex64> = analog.zeros.iter().map(to_z).collect();
    zeros.extend(std::iter::repeat_n(Complex64::new(-1.0, 0.0), missing));
    let poles: Vec<Complex64> = analog.poles.iter().map(to_z).collect();

    tracing::trace!(?zeros, ?poles, gain, "bilinear transform");

    Ok(Zpk::new(zeros, poles, gain))
}

/// Expand a discrete zero/pole/gain set into `b`/`a` coefficients
pub fn to_transfer_function(discrete: &Zpk) -> Result<DiscreteTransferFunction> {
    if discrete.zeros.len() != discrete.poles.len() {
        return Err(DesignError::InvalidTransferFunction {
            zeros: discrete.zeros.len(),
            poles: discrete.poles.len(),
        });
    }

    let numerator: Vec<f64> = polynomial::into_real(&polynomial::expand_roots(&discrete.zeros))?
        .into_iter()
        .map(|b| discrete.gain * b)
        .collect();
    if let Some(bad) = numerator.iter().find(|b| !b.is_finite()) {
        return Err(DesignError::NumericalInstability {
            residual: bad.abs(),
            tolerance: polynomial::IMAGINARY_TOLERANCE,
        });
    }
    let denominator = polynomial::into_real(&polynomial::expand_roots(&discrete.poles))?;

    DiscreteTransferFunction::new(numerator, denominator)
}
