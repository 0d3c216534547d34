use serde::{Deserialize, Serialize};

/// Supported band shapes for a designed filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandType {
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

impl Default for BandType {
    fn default() -> Self {
        BandType::Lowpass
    }
}

impl BandType {
    /// True for the two-edge forms (bandpass and bandstop)
    pub fn is_band(self) -> bool {
        matches!(self, BandType::Bandpass | BandType::Bandstop)
    }

    /// Number of frequencies per edge (passband or stopband)
    pub fn edge_count(self) -> usize {
        if self.is_band() { 2 } else { 1 }
    }

    /// Order of the realized filter for a prototype of the given order
    pub fn realized_order(self, prototype_order: usize) -> usize {
        prototype_order * self.edge_count()
    }

    pub fn name(self) -> &'static str {
        match self {
            BandType::Lowpass => "lowpass",
            BandType::Highpass => "highpass",
            BandType::Bandpass => "bandpass",
            BandType::Bandstop => "bandstop",
        }
    }
}

impl std::fmt::Display for BandType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One frequency or an ordered (low, high) pair.
///
/// Used for passband/stopband edges as well as for designed cutoffs. Values
/// are normalized frequencies, fractions of the Nyquist rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edges {
    Single(f64),
    Pair(f64, f64),
}

impl Edges {
    pub fn len(&self) -> usize {
        match self {
            Edges::Single(_) => 1,
            Edges::Pair(..) => 2,
        }
    }

    /// Frequencies in ascending index order
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            Edges::Single(f) => vec![f],
            Edges::Pair(low, high) => vec![low, high],
        }
    }

    /// The single frequency, if this is not a pair
    pub fn single(&self) -> Option<f64> {
        match *self {
            Edges::Single(f) => Some(f),
            Edges::Pair(..) => None,
        }
    }

    /// The (low, high) pair, if this is not a single frequency
    pub fn pair(&self) -> Option<(f64, f64)> {
        match *self {
            Edges::Single(_) => None,
            Edges::Pair(low, high) => Some((low, high)),
        }
    }

    /// Apply `f` to every frequency, keeping the shape
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Edges::Single(w) => Edges::Single(f(w)),
            Edges::Pair(low, high) => Edges::Pair(f(low), f(high)),
        }
    }
}

impl std::fmt::Display for Edges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edges::Single(w) => write!(f, "{}", w),
            Edges::Pair(low, high) => write!(f, "[{}, {}]", low, high),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_count() {
        assert_eq!(BandType::Lowpass.edge_count(), 1);
        assert_eq!(BandType::Highpass.edge_count(), 1);
        assert_eq!(BandType::Bandpass.edge_count(), 2);
        assert_eq!(BandType::Bandstop.edge_count(), 2);
    }

    #[test]
    fn test_realized_order_doubles_for_bands() {
        assert_eq!(BandType::Lowpass.realized_order(3), 3);
        assert_eq!(BandType::Bandstop.realized_order(3), 6);
    }

    #[test]
    fn test_edges_shape() {
        let single = Edges::Single(0.1);
        assert_eq!(single.len(), 1);
        assert_eq!(single.single(), Some(0.1));
        assert_eq!(single.pair(), None);

        let pair = Edges::Pair(0.1, 0.2).map(|w| w * 2.0);
        assert_eq!(pair.to_vec(), vec![0.2, 0.4]);
        assert_eq!(pair.to_string(), "[0.2, 0.4]");
    }

    #[test]
    fn test_band_type_yaml_names() {
        let band: BandType = serde_yaml::from_str("bandstop").unwrap();
        assert_eq!(band, BandType::Bandstop);
        assert_eq!(band.to_string(), "bandstop");
    }
}
