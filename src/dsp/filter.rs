use crate::types::DiscreteTransferFunction;

/// Direct-form recursive filter driven one sample at a time
///
/// `y[n] = (sum b[i] x[n-i] - sum a[i] y[n-i]) / a[0]`
///
/// History starts at zero (system at rest). Unstable coefficients are not
/// rejected; their output simply diverges.
#[derive(Debug, Clone)]
pub struct OnlineRecursiveFilter {
    transfer_function: DiscreteTransferFunction,
    /// Past inputs, most recent first
    inputs: Vec<f64>,
    /// Past outputs, most recent first
    outputs: Vec<f64>,
}

impl OnlineRecursiveFilter {
    /// Create a filter at rest from designed coefficients
    pub fn new(transfer_function: DiscreteTransferFunction) -> Self {
        let order = transfer_function.order();
        Self {
            transfer_function,
            inputs: vec![0.0; order],
            outputs: vec![0.0; order],
        }
    }

    /// Process one sample through the filter
    pub fn process_sample(&mut self, input: f64) -> f64 {
        let b = self.transfer_function.numerator();
        let a = self.transfer_function.denominator();

        let feed_forward = b[1..]
            .iter()
            .zip(&self.inputs)
            .fold(b[0] * input, |acc, (bi, xi)| acc + bi * xi);
        let feedback = a[1..]
            .iter()
            .zip(&self.outputs)
            .fold(0.0, |acc, (ai, yi)| acc + ai * yi);
        let output = (feed_forward - feedback) / a[0];

        if !self.inputs.is_empty() {
            self.inputs.rotate_right(1);
            self.inputs[0] = input;
            self.outputs.rotate_right(1);
            self.outputs[0] = output;
        }

        output
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.inputs.fill(0.0);
        self.outputs.fill(0.0);
    }

    pub fn order(&self) -> usize {
        self.transfer_function.order()
    }

    pub fn transfer_function(&self) -> &DiscreteTransferFunction {
        &self.transfer_function
    }
}

/// Wrap designed coefficients in a filter ready for streaming
pub fn create_online_filter(transfer_function: DiscreteTransferFunction) -> OnlineRecursiveFilter {
    OnlineRecursiveFilter::new(transfer_function)
}
