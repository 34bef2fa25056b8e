//! Configuration for genesis, evaluation, and mutation.
//!
//! Supports YAML configuration files with sensible defaults.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub genesis: GenesisConfig,
    pub mutation: MutationConfig,
}

/// Fixed network topology and evaluation limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of reserved input neurons
    pub input_count: usize,
    /// Number of reserved output neurons
    pub output_count: usize,
    /// Hard bound on any neuron value during a pass
    pub max_activation: f32,
}

/// Initial construction parameters, also reused when mutation grows the network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// Hidden neurons created at genesis (inclusive range)
    pub hidden_neurons: CountRange,
    /// Links created at genesis (inclusive range)
    pub initial_links: CountRange,
    /// Weight of a newly created link
    pub weight: GaussianSpec,
    /// Retention of a newly created hidden neuron
    pub retention: GaussianSpec,
    /// Bias of a newly created hidden neuron
    pub bias: GaussianSpec,
    /// Tie-break when a new link samples identical endpoints
    pub link_collision: LinkCollision,
}

/// Per-generation mutation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Global multiplier applied to every perturbation standard deviation
    pub intensity: f32,
    /// Probability of appending a hidden neuron
    pub new_neuron_chance: f32,
    /// Probability of appending a random link
    pub new_link_chance: f32,
    /// Probability of removing a random link
    pub remove_link_chance: f32,
    /// Multiplicative weight perturbation
    pub weight_mult: GaussianSpec,
    /// Additive weight perturbation
    pub weight_add: GaussianSpec,
    /// Multiplicative bias perturbation
    pub bias_mult: GaussianSpec,
    /// Additive bias perturbation
    pub bias_add: GaussianSpec,
    /// Multiplicative retention perturbation
    pub retention_mult: GaussianSpec,
    /// Additive retention perturbation
    pub retention_add: GaussianSpec,
}

/// A Gaussian distribution given as mean and standard deviation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GaussianSpec {
    pub mean: f32,
    pub std_dev: f32,
}

impl GaussianSpec {
    pub const fn new(mean: f32, std_dev: f32) -> Self {
        Self { mean, std_dev }
    }

    /// Draw one sample
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let z: f32 = rng.sample(StandardNormal);
        self.mean + z * self.std_dev
    }

    /// Same mean with the standard deviation scaled by `intensity`
    pub fn scaled(&self, intensity: f32) -> Self {
        Self {
            mean: self.mean,
            std_dev: self.std_dev * intensity,
        }
    }
}

/// An inclusive integer range to draw counts from
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Draw one count, uniform over `min..=max`
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min..=self.max)
    }
}

/// Tie-break policy when a new link draws the same start and end index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkCollision {
    /// Force the end onto input neuron 0. Biases link creation toward the
    /// first input, and a self-loop on neuron 0 remains possible when the
    /// start is also 0. The policy existing evolved populations were
    /// shaped by.
    FirstInput,
    /// Redraw the end index until it differs from the start
    Resample,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            genesis: GenesisConfig::default(),
            mutation: MutationConfig::default(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            input_count: 5,
            output_count: 6,
            max_activation: 1e3,
        }
    }
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            hidden_neurons: CountRange::new(3, 10),
            initial_links: CountRange::new(0, 0),
            weight: GaussianSpec::new(0.3, 0.2),
            retention: GaussianSpec::new(0.1, 0.01),
            bias: GaussianSpec::new(0.1, 0.075),
            link_collision: LinkCollision::FirstInput,
        }
    }
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            new_neuron_chance: 0.05,
            new_link_chance: 0.25,
            remove_link_chance: 0.10,
            weight_mult: GaussianSpec::new(1.0, 0.05),
            weight_add: GaussianSpec::new(0.08, 0.08),
            bias_mult: GaussianSpec::new(1.0, 0.05),
            bias_add: GaussianSpec::new(0.01, 0.01),
            retention_mult: GaussianSpec::new(1.0, 0.07),
            retention_add: GaussianSpec::new(0.01, 0.001),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.network.input_count == 0 || self.network.output_count == 0 {
            return Err("input_count and output_count must be > 0".to_string());
        }
        if !(self.network.max_activation > 0.0) {
            return Err("max_activation must be > 0".to_string());
        }
        if self.genesis.hidden_neurons.min > self.genesis.hidden_neurons.max {
            return Err("hidden_neurons range must have min <= max".to_string());
        }
        if self.genesis.initial_links.min > self.genesis.initial_links.max {
            return Err("initial_links range must have min <= max".to_string());
        }
        for (name, chance) in [
            ("new_neuron_chance", self.mutation.new_neuron_chance),
            ("new_link_chance", self.mutation.new_link_chance),
            ("remove_link_chance", self.mutation.remove_link_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(format!("{} must be within [0, 1]", name));
            }
        }
        if !self.mutation.intensity.is_finite() || self.mutation.intensity < 0.0 {
            return Err("intensity must be finite and >= 0".to_string());
        }
        for (name, spec) in [
            ("genesis.weight", self.genesis.weight),
            ("genesis.retention", self.genesis.retention),
            ("genesis.bias", self.genesis.bias),
            ("mutation.weight_mult", self.mutation.weight_mult),
            ("mutation.weight_add", self.mutation.weight_add),
            ("mutation.bias_mult", self.mutation.bias_mult),
            ("mutation.bias_add", self.mutation.bias_add),
            ("mutation.retention_mult", self.mutation.retention_mult),
            ("mutation.retention_add", self.mutation.retention_add),
        ] {
            if !spec.mean.is_finite() || !spec.std_dev.is_finite() || spec.std_dev < 0.0 {
                return Err(format!("{} must have finite mean and std_dev >= 0", name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.network.input_count, loaded.network.input_count);
        assert_eq!(
            config.mutation.new_link_chance,
            loaded.mutation.new_link_chance
        );
        assert_eq!(config.genesis.link_collision, loaded.genesis.link_collision);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.network.input_count = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.mutation.new_link_chance = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.genesis.hidden_neurons = CountRange::new(10, 3);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.mutation.weight_add.std_dev = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_gaussian_spec_moments() {
        let spec = GaussianSpec::new(2.0, 0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let n = 20_000;
        let samples: Vec<f32> = (0..n).map(|_| spec.sample(&mut rng)).collect();
        let mean = samples.iter().sum::<f32>() / n as f32;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / n as f32;

        assert!((mean - 2.0).abs() < 0.02, "mean {} off target", mean);
        assert!(
            (var.sqrt() - 0.5).abs() < 0.02,
            "std {} off target",
            var.sqrt()
        );
    }

    #[test]
    fn test_scaled_spec() {
        let spec = GaussianSpec::new(1.0, 0.05);
        let scaled = spec.scaled(2.0);
        assert_eq!(scaled.mean, 1.0);
        assert_eq!(scaled.std_dev, 0.1);
    }

    #[test]
    fn test_count_range_inclusive() {
        let range = CountRange::new(3, 10);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            let n = range.sample(&mut rng);
            assert!((3..=10).contains(&n));
        }

        let fixed = CountRange::new(0, 0);
        assert_eq!(fixed.sample(&mut rng), 0);
    }
}
