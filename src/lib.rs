//! # retentive
//!
//! Evolvable recurrent neural networks with persistent neuron state, for
//! neuroevolution experiments where topology and parameters change through
//! random mutation rather than gradient descent.
//!
//! ## Features
//!
//! - **Retentive networks**: neuron values persist between passes and decay
//!   through a per-neuron retention factor, so the link graph doubles as
//!   short-term memory
//! - **Evolvable**: structural mutations (add neuron, add/remove link) and
//!   Gaussian parametric mutations, all individually invocable
//! - **Reproducible**: every randomized operation takes an explicit
//!   generator; seeded `ChaCha8` streams make runs replayable and let each
//!   genotype in a parallel population own its own stream
//! - **Configurable**: YAML configuration files with sensible defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use retentive::{Config, RetentiveNet};
//!
//! let config = Config::default();
//! let mut rng = retentive::rng::seeded(42);
//!
//! let mut brain = RetentiveNet::new(&config, &mut rng);
//!
//! // One simulated time-step per prepare/pass cycle
//! for _ in 0..10 {
//!     brain.prepare();
//!     brain.set_input(0, 1.0);
//!     brain.pass();
//!     let _steering = brain.get_output(0);
//! }
//!
//! // Reproduce and mutate the offspring; the parent is untouched
//! let mut child = brain.clone();
//! child.mutate(&config, &mut rng);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use retentive::Config;
//!
//! let mut config = Config::default();
//! config.mutation.intensity = 2.0;
//! config.mutation.new_link_chance = 0.5;
//! assert!(config.validate().is_ok());
//! ```

pub mod activation;
pub mod config;
pub mod feedforward;
pub mod retentive;
pub mod rng;

// Re-export main types
pub use activation::Activation;
pub use config::Config;
pub use feedforward::FeedForwardNet;
pub use retentive::{Link, Neuron, RetentiveNet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
