//! Evolvable retentive networks.
//!
//! A retentive network keeps neuron values between passes and lets links
//! connect any neuron to any neuron, cycles included. The structure is
//! meant to resemble an actual brain more closely than a layered network
//! and lets information persist inside the network across passes:
//! - Persistent per-neuron state with configurable decay (retention)
//! - Structural mutations (add neuron, add/remove link)
//! - Parametric mutations (weights, biases, retention)

mod mutations;
mod network;

pub use network::{Link, Neuron, RetentiveNet};
