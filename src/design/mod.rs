//! Butterworth IIR design pipeline.
//!
//! ```text
//! FilterSpec -> order/cutoff -> analog prototype -> band transform
//!            -> bilinear (z-plane ZPK) -> b/a coefficients
//! ```
//!
//! Every stage is a pure function over owned values.

pub mod bilinear;
pub mod polynomial;
pub mod prototype;
pub mod transform;

use crate::error::{DesignError, Result};
use crate::types::{BandType, DiscreteTransferFunction, Edges, FilterSpec, Zpk};

pub use prototype::PrototypeOrder;
pub use transform::AnalogBand;

/// Design the minimal-order Butterworth filter meeting `spec`
///
/// # Arguments
/// * `spec` - Validated selectivity specification
/// * `sampling_time` - Sampling period `T`; the coefficients do not depend on
///   it beyond rounding, but it fixes the analog frequency scale
pub fn design_filter(spec: &FilterSpec, sampling_time: f64) -> Result<DiscreteTransferFunction> {
    let discrete = design_filter_zpk(spec, sampling_time)?;
    bilinear::to_transfer_function(&discrete)
}

/// Same as [`design_filter`] but stops before polynomial expansion
pub fn design_filter_zpk(spec: &FilterSpec, sampling_time: f64) -> Result<Zpk> {
    let PrototypeOrder { order, cutoff } = prototype::butterworth_order(spec)?;
    butter_zpk(order, cutoff, spec.band(), sampling_time)
}

/// Design a Butterworth filter of a given prototype order and cutoff
///
/// # Arguments
/// * `order` - Prototype order (band forms realize `2 * order`)
/// * `cutoff` - Normalized cutoff: single for lowpass/highpass, pair for bands
/// * `band` - Band shape
/// * `sampling_time` - Sampling period `T`
pub fn butter(
    order: usize,
    cutoff: Edges,
    band: BandType,
    sampling_time: f64,
) -> Result<DiscreteTransferFunction> {
    let discrete = butter_zpk(order, cutoff, band, sampling_time)?;
    bilinear::to_transfer_function(&discrete)
}

/// z-plane zero/pole/gain set of a Butterworth filter
pub fn butter_zpk(order: usize, cutoff: Edges, band: BandType, sampling_time: f64) -> Result<Zpk> {
    let analog_band = analog_band(band, cutoff, sampling_time)?;
    let prototype = prototype::butterworth_prototype(order)?;
    let analog = transform::transform(prototype, analog_band)?;
    bilinear::bilinear(analog, sampling_time)
}

/// Prewarp normalized cutoff(s) into the analog band for `band`
pub fn analog_band(band: BandType, cutoff: Edges, sampling_time: f64) -> Result<AnalogBand> {
    for w in cutoff.to_vec() {
        if !(w.is_finite() && w > 0.0 && w < 1.0) {
            return Err(DesignError::spec(format!(
                "normalized cutoff {} is outside (0, 1)",
                w
            )));
        }
    }

    let warp = |w: f64| bilinear::prewarp_cutoff(w, sampling_time);
    match (band, cutoff) {
        (BandType::Lowpass, Edges::Single(w)) => Ok(AnalogBand::Lowpass(warp(w))),
        (BandType::Highpass, Edges::Single(w)) => Ok(AnalogBand::Highpass(warp(w))),
        (BandType::Bandpass, Edges::Pair(low, high)) => Ok(AnalogBand::Bandpass {
            low: warp(low),
            high: warp(high),
        }),
        (BandType::Bandstop, Edges::Pair(low, high)) => Ok(AnalogBand::Bandstop {
            low: warp(low),
            high: warp(high),
        }),
        _ => Err(DesignError::spec(format!(
            "{} filter needs {} cutoff frequencies, got {}",
            band,
            band.edge_count(),
            cutoff.len()
        ))),
    }
}
