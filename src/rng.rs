//! Seeded random number generation.
//!
//! Genesis and mutation take `&mut impl Rng`, so each genotype evolved in
//! parallel can own an independently seeded stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The generator used throughout for reproducible evolution
pub type EvoRng = ChaCha8Rng;

/// Create a generator from an explicit seed
pub fn seeded(seed: u64) -> EvoRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Create a generator from OS entropy, returning the drawn seed so a run can
/// be replayed later
pub fn from_entropy() -> (EvoRng, u64) {
    let seed = rand::thread_rng().gen();
    (seeded(seed), seed)
}
