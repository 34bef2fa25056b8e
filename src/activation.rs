//! Scalar activation functions.

use serde::{Deserialize, Serialize};

/// Named activation function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Relu,
    LeakyRelu,
    Sigmoid,
    Tanh,
    /// Pass the value through unchanged
    Identity,
}

impl Activation {
    /// Apply the function to a single value
    #[inline]
    pub fn apply(self, value: f32) -> f32 {
        match self {
            Activation::Relu => value.max(0.0),
            Activation::LeakyRelu => {
                if value < 0.0 {
                    value * 0.1
                } else {
                    value
                }
            }
            Activation::Sigmoid => sigmoid(value),
            Activation::Tanh => value.tanh(),
            Activation::Identity => value,
        }
    }
}

/// Logistic sigmoid, `1 / (1 + e^-x)`
#[inline]
pub fn sigmoid(value: f32) -> f32 {
    1.0 / (1.0 + (-value).exp())
}
