use thiserror::Error;

/// Errors raised by the filter design pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// Malformed or contradictory band edges, ripple or attenuation
    #[error("invalid filter specification: {0}")]
    InvalidSpecification(String),

    /// Zero/pole set that the bilinear stage cannot realize
    #[error("invalid transfer function: {zeros} zeros for {poles} poles")]
    InvalidTransferFunction { zeros: usize, poles: usize },

    /// Imaginary residue left after expanding conjugate root pairs
    #[error("numerical instability: imaginary residue {residual:e} exceeds {tolerance:e}")]
    NumericalInstability { residual: f64, tolerance: f64 },
}

impl DesignError {
    pub(crate) fn spec(msg: impl Into<String>) -> Self {
        DesignError::InvalidSpecification(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DesignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DesignError::spec("ripple must be positive");
        assert_eq!(
            err.to_string(),
            "invalid filter specification: ripple must be positive"
        );

        let err = DesignError::InvalidTransferFunction { zeros: 3, poles: 2 };
        assert_eq!(err.to_string(), "invalid transfer function: 3 zeros for 2 poles");
    }
}
