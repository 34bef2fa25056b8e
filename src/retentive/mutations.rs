//! Structural and parametric mutation operators.

use super::network::RetentiveNet;
use crate::config::{Config, MutationConfig};
use rand::Rng;

impl RetentiveNet {
    /// Apply one generation of mutation in place.
    ///
    /// Runs, in order: the three structural operators, each gated by an
    /// independent Bernoulli trial, then the weight perturbation over every
    /// link, then the bias/retention perturbation over every neuron. There
    /// is no cap on how many structural changes accumulate across
    /// generations.
    pub fn mutate<R: Rng + ?Sized>(&mut self, config: &Config, rng: &mut R) {
        let mutation = &config.mutation;

        if rng.gen::<f32>() < mutation.new_neuron_chance {
            self.add_hidden_neuron(&config.genesis, rng);
            log::trace!("mutation: added hidden neuron ({} total)", self.neurons.len());
        }

        if rng.gen::<f32>() < mutation.new_link_chance {
            self.add_random_link(&config.genesis, rng);
            log::trace!("mutation: added link ({} total)", self.links.len());
        }

        if rng.gen::<f32>() < mutation.remove_link_chance {
            if self.remove_random_link(rng).is_some() {
                log::trace!("mutation: removed link ({} left)", self.links.len());
            }
        }

        self.perturb_weights(mutation, rng);
        self.perturb_neurons(mutation, rng);
    }

    /// Perturb every link weight: multiply by one Gaussian draw, then add
    /// another. Standard deviations scale with the mutation intensity.
    pub fn perturb_weights<R: Rng + ?Sized>(&mut self, mutation: &MutationConfig, rng: &mut R) {
        let mult = mutation.weight_mult.scaled(mutation.intensity);
        let add = mutation.weight_add.scaled(mutation.intensity);

        for link in &mut self.links {
            link.weight = link.weight * mult.sample(rng) + add.sample(rng);
        }
    }

    /// Perturb every neuron's bias and retention with the same
    /// multiply-then-add pattern used for weights. Retention is free to
    /// drift outside [0, 1].
    pub fn perturb_neurons<R: Rng + ?Sized>(&mut self, mutation: &MutationConfig, rng: &mut R) {
        let bias_mult = mutation.bias_mult.scaled(mutation.intensity);
        let bias_add = mutation.bias_add.scaled(mutation.intensity);
        let retention_mult = mutation.retention_mult.scaled(mutation.intensity);
        let retention_add = mutation.retention_add.scaled(mutation.intensity);

        for neuron in &mut self.neurons {
            neuron.bias = neuron.bias * bias_mult.sample(rng) + bias_add.sample(rng);
            neuron.retention =
                neuron.retention * retention_mult.sample(rng) + retention_add.sample(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GaussianSpec;
    use crate::rng;

    #[test]
    fn test_mutate_keeps_network_valid() {
        let config = Config::default();
        let mut rng = rng::seeded(13);
        let mut net = RetentiveNet::new(&config, &mut rng);

        for _ in 0..500 {
            net.mutate(&config, &mut rng);
        }

        assert!(net.is_valid());
        assert!(net.hidden_count() >= 3);

        // Evaluation still works after heavy structural change
        net.prepare();
        net.set_input(0, 1.0);
        net.pass();
        for i in 0..net.output_count {
            assert!(net.get_output(i).is_finite());
        }
    }

    #[test]
    fn test_mutate_never_touches_reserved_count() {
        let config = Config::default();
        let mut rng = rng::seeded(17);
        let mut net = RetentiveNet::new(&config, &mut rng);
        let reserved = net.reserved_count();

        let mut last = net.neurons.len();
        for _ in 0..200 {
            net.mutate(&config, &mut rng);
            // Neuron list only grows
            assert!(net.neurons.len() >= last);
            assert_eq!(net.reserved_count(), reserved);
            last = net.neurons.len();
        }
    }

    #[test]
    fn test_perturb_weights_changes_every_link() {
        let config = Config::default();
        let mut rng = rng::seeded(23);
        let mut net = RetentiveNet::new(&config, &mut rng);
        for _ in 0..10 {
            net.add_random_link(&config.genesis, &mut rng);
        }

        let before: Vec<f32> = net.links.iter().map(|l| l.weight).collect();
        net.perturb_weights(&config.mutation, &mut rng);

        for (link, old) in net.links.iter().zip(&before) {
            assert_ne!(link.weight, *old);
        }
    }

    #[test]
    fn test_perturb_neurons_changes_bias_and_retention() {
        let config = Config::default();
        let mut rng = rng::seeded(29);
        let mut net = RetentiveNet::new(&config, &mut rng);

        let before: Vec<_> = net.neurons.clone();
        net.perturb_neurons(&config.mutation, &mut rng);

        for (neuron, old) in net.neurons.iter().zip(&before) {
            assert_ne!(neuron.bias, old.bias);
            assert_ne!(neuron.retention, old.retention);
            // Values are untouched by parametric mutation
            assert_eq!(neuron.value, old.value);
        }
    }

    #[test]
    fn test_zero_intensity_freezes_parameters() {
        let mut config = Config::default();
        config.mutation.intensity = 0.0;
        // With zero-mean additive terms nothing may move at intensity 0
        config.mutation.weight_add = GaussianSpec::new(0.0, 0.08);
        config.mutation.bias_add = GaussianSpec::new(0.0, 0.01);
        config.mutation.retention_add = GaussianSpec::new(0.0, 0.001);

        let mut rng = rng::seeded(31);
        let mut net = RetentiveNet::new(&config, &mut rng);
        for _ in 0..5 {
            net.add_random_link(&config.genesis, &mut rng);
        }

        let weights_before: Vec<f32> = net.links.iter().map(|l| l.weight).collect();
        net.perturb_weights(&config.mutation, &mut rng);
        net.perturb_neurons(&config.mutation, &mut rng);

        let weights_after: Vec<f32> = net.links.iter().map(|l| l.weight).collect();
        assert_eq!(weights_before, weights_after);
    }

    #[test]
    fn test_structural_chances_off_means_fixed_topology() {
        let mut config = Config::default();
        config.mutation.new_neuron_chance = 0.0;
        config.mutation.new_link_chance = 0.0;
        config.mutation.remove_link_chance = 0.0;

        let mut rng = rng::seeded(37);
        let mut net = RetentiveNet::new(&config, &mut rng);
        let neurons = net.neurons.len();
        let links = net.links.len();

        for _ in 0..100 {
            net.mutate(&config, &mut rng);
        }

        assert_eq!(net.neurons.len(), neurons);
        assert_eq!(net.links.len(), links);
    }
}
