//! Butterworth IIR filter design and streaming.
//!
//! A [`FilterSpec`] (band edges, passband ripple, stopband attenuation) is
//! turned into the minimal-order Butterworth filter meeting it, expressed as
//! normalized direct-form coefficients. [`create_online_filter`] then runs
//! those coefficients over a sample stream.
//!
//! ```rust,ignore
//! use butterworth_iir::{create_online_filter, design_filter, FilterSpec};
//!
//! let spec = FilterSpec::lowpass(0.1, 0.125, 5.0, 6.0)?;
//! let tf = design_filter(&spec, 1.0 / 20000.0)?;
//! let mut filter = create_online_filter(tf);
//! let y = filter.process_sample(0.5);
//! ```

pub mod config;
pub mod design;
pub mod dsp;
pub mod error;
pub mod logging;
pub mod types;

pub use design::{butter, design_filter, design_filter_zpk};
pub use dsp::{create_online_filter, OnlineRecursiveFilter};
pub use error::{DesignError, Result};
pub use types::{BandType, DiscreteTransferFunction, Edges, FilterSpec, Zpk};
