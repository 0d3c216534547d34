use num_complex::Complex64;

/// Transfer function in factored zero/pole/gain form.
///
/// `H(x) = gain * prod(x - zeros[i]) / prod(x - poles[i])`, where `x` is `s`
/// for analog sets and `z` for discrete ones. Roots are kept in a fixed order
/// so every stage pairs them the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Zpk {
    pub zeros: Vec<Complex64>,
    pub poles: Vec<Complex64>,
    pub gain: f64,
}

/// Normalized analog lowpass prototype (cutoff 1 rad/s)
pub type AnalogPrototype = Zpk;

impl Zpk {
    pub fn new(zeros: Vec<Complex64>, poles: Vec<Complex64>, gain: f64) -> Self {
        Self { zeros, poles, gain }
    }

    /// Filter order (number of poles)
    pub fn order(&self) -> usize {
        self.poles.len()
    }

    /// Number of zeros implicitly located at infinity
    pub fn relative_degree(&self) -> usize {
        self.poles.len().saturating_sub(self.zeros.len())
    }

    /// Evaluate the transfer function at `x`
    pub fn evaluate(&self, x: Complex64) -> Complex64 {
        let num: Complex64 = self.zeros.iter().map(|z| x - z).product();
        let den: Complex64 = self.poles.iter().map(|p| x - p).product();
        self.gain * num / den
    }

    /// True when every pole lies strictly inside the unit circle.
    ///
    /// Only meaningful for discrete (z-plane) sets.
    pub fn is_stable(&self) -> bool {
        self.poles.iter().all(|p| p.norm() < 1.0)
    }
}
