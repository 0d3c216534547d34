use num_complex::Complex64;
use std::f64::consts::PI;

use crate::design::polynomial;
use crate::error::{DesignError, Result};

/// Discrete transfer function in expanded coefficient form.
///
/// `H(z) = (b[0] + b[1] z^-1 + ... + b[N] z^-N) / (1 + a[1] z^-1 + ... + a[N] z^-N)`
///
/// Both sequences have length `order + 1` and `denominator[0]` is exactly 1.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteTransferFunction {
    numerator: Vec<f64>,
    denominator: Vec<f64>,
}

impl DiscreteTransferFunction {
    /// Build from raw coefficients, normalizing so `denominator[0] == 1`
    ///
    /// # Arguments
    /// * `numerator` - Feed-forward coefficients `b`
    /// * `denominator` - Feedback coefficients `a`, same length as `b`
    pub fn new(numerator: Vec<f64>, denominator: Vec<f64>) -> Result<Self> {
        if numerator.is_empty() || numerator.len() != denominator.len() {
            return Err(DesignError::InvalidTransferFunction {
                zeros: numerator.len().saturating_sub(1),
                poles: denominator.len().saturating_sub(1),
            });
        }

        let a0 = denominator[0];
        if !a0.is_finite() || a0 == 0.0 {
            return Err(DesignError::spec(format!(
                "leading denominator coefficient must be finite and non-zero, got {}",
                a0
            )));
        }

        let numerator = numerator.into_iter().map(|b| b / a0).collect();
        let mut denominator: Vec<f64> = denominator.into_iter().map(|a| a / a0).collect();
        denominator[0] = 1.0;

        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn order(&self) -> usize {
        self.denominator.len() - 1
    }

    /// Feed-forward coefficients `b`
    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    /// Feedback coefficients `a`
    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Complex response at normalized frequency `f`.
    ///
    /// `f` uses the design edge scale: the response is taken at
    /// `z = exp(i * pi * f)`, so `f = 0` is DC.
    pub fn frequency_response(&self, f: f64) -> Complex64 {
        let z = Complex64::from_polar(1.0, PI * f);
        polynomial::evaluate_real(&self.numerator, z) / polynomial::evaluate_real(&self.denominator, z)
    }

    /// Gain in dB at normalized frequency `f` (negative means attenuation)
    pub fn gain_db(&self, f: f64) -> f64 {
        20.0 * self.frequency_response(f).norm().log10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_leading_denominator() {
        let tf = DiscreteTransferFunction::new(vec![1.0, 2.0], vec![2.0, -1.0]).unwrap();
        assert_eq!(tf.denominator(), &[1.0, -0.5]);
        assert_eq!(tf.numerator(), &[0.5, 1.0]);
        assert_eq!(tf.order(), 1);
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        assert!(DiscreteTransferFunction::new(vec![1.0, 2.0, 3.0], vec![1.0, 0.5]).is_err());
        assert!(DiscreteTransferFunction::new(vec![], vec![]).is_err());
    }

    #[test]
    fn test_rejects_zero_leading_coefficient() {
        assert!(DiscreteTransferFunction::new(vec![1.0, 1.0], vec![0.0, 1.0]).is_err());
    }

    #[test]
    fn test_dc_gain_of_moving_average() {
        // y[n] = (x[n] + x[n-1]) / 2 has unit DC gain and a null at Nyquist
        let tf = DiscreteTransferFunction::new(vec![0.5, 0.5], vec![1.0, 0.0]).unwrap();
        assert!((tf.frequency_response(0.0).norm() - 1.0).abs() < 1e-15);
        assert!(tf.frequency_response(1.0).norm() < 1e-15);
        assert!(tf.gain_db(0.0).abs() < 1e-12);
    }
}
