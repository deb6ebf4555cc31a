/// First stage of every network: copies the sample into its activations.
/// Holds no learnable parameters and is never visited by the backward pass.
#[derive(Debug, Clone)]
pub struct InputLayer {
    pub size: usize,
    pub input_size: usize,
    activations: Vec<f64>,
}

impl InputLayer {
    pub fn new(size: usize, input_size: usize) -> InputLayer {
        InputLayer {
            size,
            input_size,
            activations: vec![0.0; size],
        }
    }

    /// # Panics
    /// Panics if `input.len() != self.size`.
    pub fn forward(&mut self, input: &[f64]) -> &[f64] {
        assert_eq!(input.len(), self.size, "input layer fed a vector of the wrong length");
        self.activations.copy_from_slice(input);
        &self.activations
    }

    pub fn activations(&self) -> &[f64] {
        &self.activations
    }
}
