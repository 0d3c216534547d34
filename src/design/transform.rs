//! Lowpass-prototype to lowpass/highpass/bandpass/bandstop transforms.
//!
//! Each transform consumes the prototype and returns a new zero/pole/gain
//! set. Roots are substituted in ascending index order; for the band forms
//! all `+` images come first, then all `-` images. The gain is adjusted by
//! the same substitution so the reference-band gain is unchanged.
//!
//! Zeros that the prototype leaves at infinity are placed explicitly by one
//! `pad_for_*` function per band type.

use num_complex::Complex64;

use crate::error::{DesignError, Result};
use crate::types::{BandType, Zpk};

/// Target band with analog (prewarped, rad/s) cutoff frequencies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalogBand {
    Lowpass(f64),
    Highpass(f64),
    Bandpass { low: f64, high: f64 },
    Bandstop { low: f64, high: f64 },
}

impl AnalogBand {
    pub fn band_type(&self) -> BandType {
        match self {
            AnalogBand::Lowpass(_) => BandType::Lowpass,
            AnalogBand::Highpass(_) => BandType::Highpass,
            AnalogBand::Bandpass { .. } => BandType::Bandpass,
            AnalogBand::Bandstop { .. } => BandType::Bandstop,
        }
    }

    fn validate(&self) -> Result<()> {
        let valid = |w: f64| w.is_finite() && w > 0.0;
        let ok = match *self {
            AnalogBand::Lowpass(wc) | AnalogBand::Highpass(wc) => valid(wc),
            AnalogBand::Bandpass { low, high } | AnalogBand::Bandstop { low, high } => {
                valid(low) && valid(high) && low < high
            }
        };
        if ok {
            Ok(())
        } else {
            Err(DesignError::spec(format!("invalid analog cutoff {:?}", self)))
        }
    }
}

/// Move a normalized lowpass prototype to the requested band
pub fn transform(prototype: Zpk, band: AnalogBand) -> Result<Zpk> {
    band.validate()?;

    let zpk = match band {
        AnalogBand::Lowpass(wc) => to_lowpass(prototype, wc),
        AnalogBand::Highpass(wc) => to_highpass(prototype, wc),
        AnalogBand::Bandpass { low, high } => to_bandpass(prototype, low, high),
        AnalogBand::Bandstop { low, high } => to_bandstop(prototype, low, high),
    };

    tracing::debug!(
        band = %band.band_type(),
        zeros = zpk.zeros.len(),
        poles = zpk.poles.len(),
        gain = zpk.gain,
        "band transform"
    );

    Ok(zpk)
}

/// `s -> s / wc`
pub fn to_lowpass(prototype: Zpk, wc: f64) -> Zpk {
    let missing = prototype.relative_degree();
    let zeros = prototype.zeros.into_iter().map(|z| z * wc).collect();
    let poles = prototype.poles.into_iter().map(|p| p * wc).collect();
    let gain = prototype.gain * wc.powi(missing as i32);

    Zpk::new(pad_for_lowpass(zeros), poles, gain)
}

/// `s -> wc / s`
pub fn to_highpass(prototype: Zpk, wc: f64) -> Zpk {
    let missing = prototype.relative_degree();
    let gain = prototype.gain * negated_root_ratio(&prototype);
    let zeros = prototype.zeros.into_iter().map(|z| wc / z).collect();
    let poles = prototype.poles.into_iter().map(|p| wc / p).collect();

    Zpk::new(pad_for_highpass(zeros, missing), poles, gain)
}

/// `s -> (s^2 + wc1 wc2) / (s (wc2 - wc1))`
pub fn to_bandpass(prototype: Zpk, low: f64, high: f64) -> Zpk {
    let width = high - low;
    let center_sqr = low * high;
    let missing = prototype.relative_degree();

    let split = |roots: Vec<Complex64>| {
        mirrored_pairs(roots.into_iter().map(|r| r * width / 2.0).collect(), center_sqr)
    };
    let zeros = split(prototype.zeros);
    let poles = split(prototype.poles);
    let gain = prototype.gain * width.powi(missing as i32);

    Zpk::new(pad_for_bandpass(zeros, missing), poles, gain)
}

/// `s -> s (wc2 - wc1) / (s^2 + wc1 wc2)`
pub fn to_bandstop(prototype: Zpk, low: f64, high: f64) -> Zpk {
    let width = high - low;
    let center_sqr = low * high;
    let missing = prototype.relative_degree();
    let gain = prototype.gain * negated_root_ratio(&prototype);

    let split = |roots: Vec<Complex64>| {
        mirrored_pairs(roots.into_iter().map(|r| (width / 2.0) / r).collect(), center_sqr)
    };
    let zeros = split(prototype.zeros);
    let poles = split(prototype.poles);

    Zpk::new(pad_for_bandstop(zeros, missing, center_sqr.sqrt()), poles, gain)
}

/// Lowpass adds no zeros here. Its zeros at infinity stay implicit and
/// `bilinear` places them at `z = -1`.
pub fn pad_for_lowpass(zeros: Vec<Complex64>) -> Vec<Complex64> {
    zeros
}

/// Zeros at infinity become zeros at the origin
pub fn pad_for_highpass(mut zeros: Vec<Complex64>, missing: usize) -> Vec<Complex64> {
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), missing));
    zeros
}

/// Each zero at infinity becomes one zero at the origin (the other image
/// stays at infinity)
pub fn pad_for_bandpass(mut zeros: Vec<Complex64>, missing: usize) -> Vec<Complex64> {
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), missing));
    zeros
}

/// Each zero at infinity becomes the pair `+i w0`, `-i w0` at the band center
pub fn pad_for_bandstop(mut zeros: Vec<Complex64>, missing: usize, center: f64) -> Vec<Complex64> {
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, center), missing));
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, -center), missing));
    zeros
}

/// `r ± sqrt(r^2 - w0^2)` for every root, all `+` images first
fn mirrored_pairs(scaled: Vec<Complex64>, center_sqr: f64) -> Vec<Complex64> {
    let offsets: Vec<Complex64> = scaled.iter().map(|r| (r * r - center_sqr).sqrt()).collect();
    let plus = scaled.iter().zip(&offsets).map(|(r, d)| r + d);
    let minus = scaled.iter().zip(&offsets).map(|(r, d)| r - d);
    plus.chain(minus).collect()
}

/// `Re(prod(-z) / prod(-p))`, the gain correction for inverting transforms
fn negated_root_ratio(zpk: &Zpk) -> f64 {
    let num: Complex64 = zpk.zeros.iter().map(|z| -*z).product();
    let den: Complex64 = zpk.poles.iter().map(|p| -*p).product();
    (num / den).re
}
