use crate::error::{DesignError, Result};
use crate::types::band::{BandType, Edges};

/// Selectivity specification for a Butterworth design.
///
/// Edges are normalized frequencies in `(0, 0.5)`. A value `f` is realized at
/// `z = exp(i * pi * f)`, so it is a fraction of the Nyquist rate; an edge of
/// `hz` at sampling rate `fs` is `2 * hz / fs`.
/// The constructor validates everything once; a `FilterSpec` that exists is
/// always consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    band: BandType,
    passband: Edges,
    stopband: Edges,
    ripple_db: f64,
    attenuation_db: f64,
}

impl FilterSpec {
    /// Create and validate a specification
    ///
    /// # Arguments
    /// * `band` - Band shape
    /// * `passband` - Passband edge(s)
    /// * `stopband` - Stopband edge(s)
    /// * `ripple_db` - Maximum passband loss in dB
    /// * `attenuation_db` - Minimum stopband attenuation in dB
    pub fn new(
        band: BandType,
        passband: Edges,
        stopband: Edges,
        ripple_db: f64,
        attenuation_db: f64,
    ) -> Result<Self> {
        let spec = Self {
            band,
            passband,
            stopband,
            ripple_db,
            attenuation_db,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn lowpass(passband: f64, stopband: f64, ripple_db: f64, attenuation_db: f64) -> Result<Self> {
        Self::new(
            BandType::Lowpass,
            Edges::Single(passband),
            Edges::Single(stopband),
            ripple_db,
            attenuation_db,
        )
    }

    pub fn highpass(passband: f64, stopband: f64, ripple_db: f64, attenuation_db: f64) -> Result<Self> {
        Self::new(
            BandType::Highpass,
            Edges::Single(passband),
            Edges::Single(stopband),
            ripple_db,
            attenuation_db,
        )
    }

    pub fn bandpass(
        passband: (f64, f64),
        stopband: (f64, f64),
        ripple_db: f64,
        attenuation_db: f64,
    ) -> Result<Self> {
        Self::new(
            BandType::Bandpass,
            Edges::Pair(passband.0, passband.1),
            Edges::Pair(stopband.0, stopband.1),
            ripple_db,
            attenuation_db,
        )
    }

    pub fn bandstop(
        passband: (f64, f64),
        stopband: (f64, f64),
        ripple_db: f64,
        attenuation_db: f64,
    ) -> Result<Self> {
        Self::new(
            BandType::Bandstop,
            Edges::Pair(passband.0, passband.1),
            Edges::Pair(stopband.0, stopband.1),
            ripple_db,
            attenuation_db,
        )
    }

    pub fn band(&self) -> BandType {
        self.band
    }

    pub fn passband(&self) -> Edges {
        self.passband
    }

    pub fn stopband(&self) -> Edges {
        self.stopband
    }

    pub fn ripple_db(&self) -> f64 {
        self.ripple_db
    }

    pub fn attenuation_db(&self) -> f64 {
        self.attenuation_db
    }

    fn validate(&self) -> Result<()> {
        if !(self.ripple_db.is_finite() && self.ripple_db > 0.0) {
            return Err(DesignError::spec(format!(
                "passband ripple must be positive, got {}",
                self.ripple_db
            )));
        }
        if !(self.attenuation_db.is_finite() && self.attenuation_db > self.ripple_db) {
            return Err(DesignError::spec(format!(
                "stopband attenuation ({} dB) must exceed passband ripple ({} dB)",
                self.attenuation_db, self.ripple_db
            )));
        }

        let expected = self.band.edge_count();
        if self.passband.len() != expected || self.stopband.len() != expected {
            return Err(DesignError::spec(format!(
                "{} filter needs {} passband and {} stopband frequencies",
                self.band, expected, expected
            )));
        }

        for f in self.passband.to_vec().into_iter().chain(self.stopband.to_vec()) {
            if !(f.is_finite() && f > 0.0 && f < 0.5) {
                return Err(DesignError::spec(format!(
                    "frequency {} is outside (0, 0.5)",
                    f
                )));
            }
        }

        let ordered = match (self.passband, self.stopband) {
            (Edges::Single(p), Edges::Single(s)) => match self.band {
                BandType::Lowpass => p < s,
                _ => p > s,
            },
            (Edges::Pair(p1, p2), Edges::Pair(s1, s2)) => match self.band {
                BandType::Bandpass => s1 < p1 && p1 < p2 && p2 < s2,
                _ => p1 < s1 && s1 < s2 && s2 < p2,
            },
            _ => false,
        };
        if !ordered {
            return Err(DesignError::spec(format!(
                "edge ordering passband={} stopband={} is not valid for a {} filter",
                self.passband, self.stopband, self.band
            )));
        }

        Ok(())
    }
}
