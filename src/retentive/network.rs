//! Retentive network structure and forward propagation.
//!
//! Neuron values are not cleared between passes, activation is applied only
//! to output neurons, and links may connect any neuron to any neuron. Cycles
//! are allowed; a signal advances one link-hop per pass, so the link graph
//! doubles as short-term memory.

use crate::activation::sigmoid;
use crate::config::{Config, GenesisConfig, LinkCollision};
use rand::Rng;

/// One neuron of a retentive network.
///
/// `retention` is the fraction of `value` that survives between passes:
/// 0 = none, 1 = all. It is nominally within [0, 1] but mutation may drift
/// it outside that range; values are never clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Neuron {
    pub value: f32,
    pub retention: f32,
    pub bias: f32,
}

impl Neuron {
    /// Decay the persistent value and fold in the bias
    #[inline]
    pub fn prepare(&mut self) {
        self.value = self.value * self.retention + self.bias;
    }
}

/// A directed, weighted connection between two neurons by index.
/// Self-loops and duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub start: usize,
    pub end: usize,
    pub weight: f32,
}

/// An evolvable recurrent network genotype.
///
/// Neuron indices are append-only: `[0, input_count)` are reserved inputs,
/// `[input_count, input_count + output_count)` are reserved outputs, and
/// everything after is hidden. Reserved neurons are never removed and no
/// neuron-removal operator exists, so link endpoints stay valid for the
/// lifetime of the genotype.
#[derive(Debug, Clone, PartialEq)]
pub struct RetentiveNet {
    pub input_count: usize,
    pub output_count: usize,
    /// Hard bound applied to a neuron value after every link update
    pub max_activation: f32,
    pub neurons: Vec<Neuron>,
    pub links: Vec<Link>,
}

impl RetentiveNet {
    /// Create a genotype: zeroed reserved neurons, then a random number of
    /// hidden neurons and initial links drawn from the genesis ranges
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let mut net = Self {
            input_count: config.network.input_count,
            output_count: config.network.output_count,
            max_activation: config.network.max_activation,
            neurons: Vec::new(),
            links: Vec::new(),
        };

        for _ in 0..net.reserved_count() {
            net.neurons.push(Neuron::default());
        }

        let hidden = config.genesis.hidden_neurons.sample(rng);
        for _ in 0..hidden {
            net.add_hidden_neuron(&config.genesis, rng);
        }

        let links = config.genesis.initial_links.sample(rng);
        for _ in 0..links {
            net.add_random_link(&config.genesis, rng);
        }

        log::debug!(
            "genesis: {} neurons ({} hidden), {} links",
            net.neurons.len(),
            hidden,
            net.links.len()
        );

        net
    }

    /// Number of reserved (input + output) neurons
    #[inline]
    pub fn reserved_count(&self) -> usize {
        self.input_count + self.output_count
    }

    /// Number of hidden neurons (complexity metric)
    #[inline]
    pub fn hidden_count(&self) -> usize {
        self.neurons.len() - self.reserved_count()
    }

    /// Append one hidden neuron with randomized retention and bias
    pub fn add_hidden_neuron<R: Rng + ?Sized>(&mut self, genesis: &GenesisConfig, rng: &mut R) {
        self.neurons.push(Neuron {
            value: 0.0,
            retention: genesis.retention.sample(rng),
            bias: genesis.bias.sample(rng),
        });
    }

    /// Append one link with endpoints drawn uniformly over the current
    /// neuron count and a randomized weight. When both draws land on the
    /// same neuron the configured collision policy decides the end index.
    pub fn add_random_link<R: Rng + ?Sized>(&mut self, genesis: &GenesisConfig, rng: &mut R) {
        let count = self.neurons.len();
        let start = rng.gen_range(0..count);
        let mut end = rng.gen_range(0..count);

        if start == end {
            end = match genesis.link_collision {
                LinkCollision::FirstInput => 0,
                LinkCollision::Resample => loop {
                    let redraw = rng.gen_range(0..count);
                    if redraw != start {
                        break redraw;
                    }
                },
            };
        }

        self.links.push(Link {
            start,
            end,
            weight: genesis.weight.sample(rng),
        });
    }

    /// Remove one uniformly chosen link. Returns the removed link, or
    /// `None` when there is nothing to remove.
    pub fn remove_random_link<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Link> {
        if self.links.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.links.len());
        Some(self.links.remove(index))
    }

    /// Write an input neuron's value. Caller guarantees
    /// `index < input_count`.
    #[inline]
    pub fn set_input(&mut self, index: usize, value: f32) {
        debug_assert!(index < self.input_count);
        self.neurons[index].value = value;
    }

    /// Read an output neuron's post-activation value. Caller guarantees
    /// `index < output_count`.
    #[inline]
    pub fn get_output(&self, index: usize) -> f32 {
        debug_assert!(index < self.output_count);
        self.neurons[self.input_count + index].value
    }

    /// Decay every neuron toward its bias-driven equilibrium. Must be
    /// called once before loading inputs for each pass.
    pub fn prepare(&mut self) {
        for neuron in &mut self.neurons {
            neuron.prepare();
        }
    }

    /// Propagate every link once, in list order, then apply the sigmoid to
    /// the output neurons.
    ///
    /// Each link update is clamped individually so feedback cycles cannot
    /// grow values without bound. Links fire exactly once per call, so a
    /// signal may need several calls to travel from an input to an output.
    pub fn pass(&mut self) {
        for link in &self.links {
            let delta = self.neurons[link.start].value * link.weight;
            let updated = self.neurons[link.end].value + delta;
            self.neurons[link.end].value =
                updated.clamp(-self.max_activation, self.max_activation);
        }

        let outputs = self.input_count..self.reserved_count();
        for neuron in &mut self.neurons[outputs] {
            neuron.value = sigmoid(neuron.value);
        }
    }

    /// Check structural and numeric integrity: finite parameters and link
    /// endpoints within the neuron list
    pub fn is_valid(&self) -> bool {
        let count = self.neurons.len();
        if count < self.reserved_count() {
            return false;
        }
        for neuron in &self.neurons {
            if !neuron.value.is_finite()
                || !neuron.retention.is_finite()
                || !neuron.bias.is_finite()
            {
                return false;
            }
        }
        for link in &self.links {
            if link.start >= count || link.end >= count || !link.weight.is_finite() {
                return false;
            }
        }
        true
    }
}
