pub mod band;
pub mod spec;
pub mod transfer;
pub mod zpk;

pub use band::{BandType, Edges};
pub use spec::FilterSpec;
pub use transfer::DiscreteTransferFunction;
pub use zpk::{AnalogPrototype, Zpk};
