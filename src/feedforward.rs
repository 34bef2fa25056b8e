//! Fixed-topology feed-forward networks.
//!
//! The simpler sibling of [`crate::retentive::RetentiveNet`]: layer sizes
//! are fixed at construction, there is no structural mutation, and a pass
//! carries no state from previous passes.

use crate::activation::Activation;
use ndarray::{Array1, Array2};
use rand::Rng;

/// A single dense layer
#[derive(Clone, Debug)]
pub struct Layer {
    pub weights: Array2<f32>,
    pub biases: Array1<f32>,
}

/// Fixed-topology feed-forward network
#[derive(Clone, Debug)]
pub struct FeedForwardNet {
    /// Number of input neurons
    pub n_inputs: usize,
    /// Number of output neurons
    pub n_outputs: usize,
    /// Hidden layer sizes
    pub hidden_sizes: Vec<usize>,
    /// Network layers
    pub layers: Vec<Layer>,
    /// Activation applied to every hidden layer
    pub hidden_activation: Activation,
    /// Activation applied to the output layer
    pub output_activation: Activation,
}

impl FeedForwardNet {
    /// Create a network with the given layer sizes (inputs first, outputs
    /// last, at least two entries) and random weights
    pub fn new<R: Rng + ?Sized>(
        layer_sizes: &[usize],
        hidden_activation: Activation,
        output_activation: Activation,
        rng: &mut R,
    ) -> Self {
        debug_assert!(layer_sizes.len() >= 2);

        let mut layers = Vec::with_capacity(layer_sizes.len() - 1);
        for window in layer_sizes.windows(2) {
            let (from, to) = (window[0], window[1]);
            let weights = Array2::from_shape_fn((from, to), |_| rng.gen_range(-0.5..0.5));
            let biases = Array1::zeros(to);
            layers.push(Layer { weights, biases });
        }

        Self {
            n_inputs: layer_sizes[0],
            n_outputs: layer_sizes[layer_sizes.len() - 1],
            hidden_sizes: layer_sizes[1..layer_sizes.len() - 1].to_vec(),
            layers,
            hidden_activation,
            output_activation,
        }
    }

    /// Perform a forward pass through the network
    #[inline]
    pub fn forward(&self, inputs: &[f32]) -> Vec<f32> {
        debug_assert_eq!(inputs.len(), self.n_inputs);

        let mut activation = Array1::from_vec(inputs.to_vec());
        let last = self.layers.len() - 1;

        for (index, layer) in self.layers.iter().enumerate() {
            activation = activation.dot(&layer.weights) + &layer.biases;
            let function = if index == last {
                self.output_activation
            } else {
                self.hidden_activation
            };
            activation.mapv_inplace(|x| function.apply(x));
        }

        activation.to_vec()
    }

    /// Get total number of parameters (weights + biases)
    pub fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .map(|l| l.weights.len() + l.biases.len())
            .sum()
    }

    /// Check if network is valid (no NaN/Inf)
    pub fn is_valid(&self) -> bool {
        for layer in &self.layers {
            if layer.weights.iter().any(|&w| !w.is_finite()) {
                return false;
            }
            if layer.biases.iter().any(|&b| !b.is_finite()) {
                return false;
            }
        }
        true
    }
}
