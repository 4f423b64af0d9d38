// In: src/battle/rng.rs

use log::{trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

enum RngSource {
    Seeded(StdRng),
    Scripted { outcomes: Vec<u32>, index: usize },
}

/// The single source of randomness for a battle.
///
/// A seeded generator replays identically for the same seed. The scripted
/// variant hands out a fixed list of outcomes for tests; a scripted value that
/// is out of range for a draw is reduced modulo the draw's bound.
pub struct BattleRng {
    initial_seed: Option<u64>,
    source: RngSource,
}

impl BattleRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            initial_seed: Some(seed),
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::seeded(seed)
    }

    pub fn new_for_test(outcomes: Vec<u32>) -> Self {
        Self {
            initial_seed: None,
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// Seed this generator was created from, if it is not scripted.
    pub fn initial_seed(&self) -> Option<u64> {
        self.initial_seed
    }

    /// Uniform integer in `[0, bound)`. A zero bound always yields 0.
    pub fn rand_int(&mut self, bound: u32, reason: &str) -> u32 {
        if bound == 0 {
            return 0;
        }
        let value = match &mut self.source {
            RngSource::Seeded(rng) => rng.random_range(0..bound),
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "BattleRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];
                *index += 1;

                #[cfg(test)]
                println!("[RNG] Consumed {} for: {}", outcome, reason);

                outcome % bound
            }
        };
        trace!("rng draw {} of {} for {}", value, bound, reason);
        value
    }

    /// Uniform integer in `[min, max]`.
    pub fn rand_range(&mut self, min: u32, max: u32, reason: &str) -> u32 {
        if max <= min {
            return min;
        }
        min + self.rand_int(max - min + 1, reason)
    }

    /// True with `percent` in 100 odds.
    pub fn chance(&mut self, percent: u32, reason: &str) -> bool {
        self.rand_int(100, reason) < percent
    }

    /// Uniform index into a slice of `len` items.
    pub fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        self.rand_int(len as u32, reason) as usize
    }

    /// Normally distributed value with mean 0. A scripted rng seeds a one-off
    /// generator from its next outcome, so the result is fixed per outcome.
    pub fn rand_gauss(&mut self, stdev: f64, reason: &str) -> f64 {
        let normal = match Normal::new(0.0, stdev) {
            Ok(normal) => normal,
            Err(err) => {
                warn!("invalid deviation {} for {}: {}", stdev, reason, err);
                return 0.0;
            }
        };
        let value = match self.source {
            RngSource::Seeded(ref mut rng) => normal.sample(rng),
            RngSource::Scripted { .. } => {
                let seed = self.rand_int(u32::MAX, reason);
                normal.sample(&mut StdRng::seed_from_u64(seed as u64))
            }
        };
        trace!("gaussian draw {} (stdev {}) for {}", value, stdev, reason);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_same_seed_replays_same_sequence() {
        let mut a = BattleRng::seeded(42);
        let mut b = BattleRng::seeded(42);
        let draws_a: Vec<u32> = (0..16).map(|_| a.rand_int(512, "replay")).collect();
        let draws_b: Vec<u32> = (0..16).map(|_| b.rand_int(512, "replay")).collect();
        assert_eq!(draws_a, draws_b);
        assert!(draws_a.iter().all(|v| *v < 512));
    }

    #[test]
    fn test_scripted_values_reduce_modulo_bound() {
        let mut rng = BattleRng::new_for_test(vec![5, 515, 99]);
        assert_eq!(rng.rand_int(512, "first"), 5);
        assert_eq!(rng.rand_int(512, "second"), 3);
        assert_eq!(rng.rand_range(1, 2, "third"), 2);
    }

    #[test]
    #[should_panic(expected = "BattleRng exhausted")]
    fn test_scripted_rng_panics_when_exhausted() {
        let mut rng = BattleRng::new_for_test(vec![]);
        rng.rand_int(10, "nothing left");
    }

    #[test]
    fn test_gauss_is_finite() {
        let mut rng = BattleRng::seeded(7);
        for _ in 0..100 {
            assert!(rng.rand_gauss(2.0, "gauss").is_finite());
        }
    }

    #[test]
    fn test_seeded_gauss_replays_for_the_same_seed() {
        let mut a = BattleRng::seeded(11);
        let mut b = BattleRng::seeded(11);
        let draws_a: Vec<f64> = (0..8).map(|_| a.rand_gauss(3.0, "replay")).collect();
        let draws_b: Vec<f64> = (0..8).map(|_| b.rand_gauss(3.0, "replay")).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_scripted_gauss_is_fixed_per_outcome_and_uses_one_draw() {
        let mut a = BattleRng::new_for_test(vec![17, 4]);
        let mut b = BattleRng::new_for_test(vec![17]);
        assert_eq!(a.rand_gauss(2.0, "gauss"), b.rand_gauss(2.0, "gauss"));
        assert_eq!(a.rand_int(10, "after gauss"), 4);
    }

    #[rstest]
    #[case("negative", -1.0)]
    #[case("not a number", f64::NAN)]
    fn test_invalid_deviation_yields_the_mean(#[case] desc: &str, #[case] stdev: f64) {
        let mut rng = BattleRng::new_for_test(vec![]);
        assert_eq!(rng.rand_gauss(stdev, "gauss"), 0.0, "{}", desc);
    }
}
