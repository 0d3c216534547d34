//! Butterworth order selection and the normalized analog prototype.
//!
//! Edges are prewarped with `tan(pi * f / 2)` before the order inequality is
//! solved, so the digital filter produced by the bilinear stage meets the
//! specification exactly at the requested edges:
//!
//! ```text
//! N >= log10((10^(As/10) - 1) / (10^(Ap/10) - 1)) / (2 * log10(k))
//! ```
//!
//! where `k` is the selectivity ratio of the prewarped edges. The natural
//! frequency is then solved so the passband edge loses exactly `Ap` dB.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{DesignError, Result};
use crate::types::{AnalogPrototype, BandType, Edges, FilterSpec};

/// Minimal order and normalized cutoff(s) meeting a specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrototypeOrder {
    /// Order of the lowpass prototype (band forms realize twice this)
    pub order: usize,
    /// Normalized cutoff, one value for lowpass/highpass, two for band forms
    pub cutoff: Edges,
}

/// Map a normalized frequency to the prewarped analog axis
pub fn prewarp(f: f64) -> f64 {
    (PI * f / 2.0).tan()
}

/// Inverse of [`prewarp`]
pub fn unwarp(omega: f64) -> f64 {
    2.0 / PI * omega.atan()
}

/// Smallest Butterworth order and its cutoff frequency for `spec`
pub fn butterworth_order(spec: &FilterSpec) -> Result<PrototypeOrder> {
    let band = spec.band();
    let passband = spec.passband().map(prewarp);
    let stopband = spec.stopband().map(prewarp);

    let selectivity = selectivity_ratio(band, passband, stopband)?;
    if !(selectivity.is_finite() && selectivity > 1.0) {
        return Err(DesignError::spec(format!(
            "degenerate selectivity ratio {} for passband={} stopband={}",
            selectivity,
            spec.passband(),
            spec.stopband()
        )));
    }

    let gpass = 10.0_f64.powf(0.1 * spec.ripple_db());
    let gstop = 10.0_f64.powf(0.1 * spec.attenuation_db());
    let required = ((gstop - 1.0) / (gpass - 1.0)).log10() / (2.0 * selectivity.log10());
    if !required.is_finite() {
        return Err(DesignError::spec(format!(
            "cannot solve order for ripple {} dB and attenuation {} dB",
            spec.ripple_db(),
            spec.attenuation_db()
        )));
    }
    let order = (required.ceil().max(1.0)) as usize;

    let natural = (gpass - 1.0).powf(-1.0 / (2.0 * order as f64));
    let cutoff = natural_cutoff(band, natural, passband)?.map(unwarp);

    tracing::debug!(%band, order, %cutoff, selectivity, "selected butterworth order");

    Ok(PrototypeOrder { order, cutoff })
}

fn selectivity_ratio(band: BandType, passband: Edges, stopband: Edges) -> Result<f64> {
    match (band, passband, stopband) {
        (BandType::Lowpass, Edges::Single(p), Edges::Single(s)) => Ok(s / p),
        (BandType::Highpass, Edges::Single(p), Edges::Single(s)) => Ok(p / s),
        (BandType::Bandpass, Edges::Pair(p1, p2), Edges::Pair(s1, s2)) => Ok([s1, s2]
            .iter()
            .map(|s| ((s * s - p1 * p2) / (s * (p1 - p2))).abs())
            .fold(f64::INFINITY, f64::min)),
        (BandType::Bandstop, Edges::Pair(p1, p2), Edges::Pair(s1, s2)) => Ok([s1, s2]
            .iter()
            .map(|s| (s * (p1 - p2) / (s * s - p1 * p2)).abs())
            .fold(f64::INFINITY, f64::min)),
        _ => Err(DesignError::spec(format!(
            "edge shape does not match a {} filter",
            band
        ))),
    }
}

/// Analog cutoff(s) putting the passband edge(s) at exactly the ripple loss
fn natural_cutoff(band: BandType, natural: f64, passband: Edges) -> Result<Edges> {
    match (band, passband) {
        (BandType::Lowpass, Edges::Single(p)) => Ok(Edges::Single(natural * p)),
        (BandType::Highpass, Edges::Single(p)) => Ok(Edges::Single(p / natural)),
        (BandType::Bandpass, Edges::Pair(p1, p2)) => {
            let width = p2 - p1;
            let root = (natural * natural / 4.0 * (width * width) + p1 * p2).sqrt();
            let a = (natural * width / 2.0 + root).abs();
            let b = (-natural * width / 2.0 + root).abs();
            Ok(Edges::Pair(a.min(b), a.max(b)))
        }
        (BandType::Bandstop, Edges::Pair(p1, p2)) => {
            let width = p2 - p1;
            let discr = (width * width + 4.0 * (natural * natural) * p1 * p2).sqrt();
            let a = ((width + discr) / (2.0 * natural)).abs();
            let b = ((width - discr) / (2.0 * natural)).abs();
            Ok(Edges::Pair(a.min(b), a.max(b)))
        }
        _ => Err(DesignError::spec(format!(
            "edge shape does not match a {} filter",
            band
        ))),
    }
}

/// Normalized (1 rad/s) Butterworth lowpass prototype of the given order.
///
/// Poles sit on the unit circle at `pi/2 + (2k + 1) * pi / (2N)`. The gain is
/// `Re(prod(-p))`, which gives unit DC gain for every order.
pub fn butterworth_prototype(order: usize) -> Result<AnalogPrototype> {
    if order == 0 {
        return Err(DesignError::spec("filter order must be at least 1"));
    }

    let n = order as f64;
    let poles: Vec<Complex64> = (0..order)
        .map(|k| {
            let theta = PI / 2.0 + (2 * k + 1) as f64 * PI / (2.0 * n);
            Complex64::from_polar(1.0, theta)
        })
        .collect();
    let gain = poles.iter().map(|p| -*p).product::<Complex64>().re;

    tracing::trace!(order, ?poles, gain, "butterworth prototype");

    Ok(AnalogPrototype::new(Vec::new(), poles, gain))
}
