use crate::basic_types::Random;

pub const MAX_NOISE_LEVEL: u32 = 100;

/// The probability, in percent, that a search step makes a random-walk move instead of a greedy
/// one. Always within `[0, MAX_NOISE_LEVEL]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoiseLevel(u32);

/// The outcome of [`NoiseLevel::adapt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoiseAdjustment {
    Decreased,
    Increased,
    Unchanged,
}

impl NoiseLevel {
    /// Creates a noise level, clamping `level` to `[0, MAX_NOISE_LEVEL]`.
    pub fn new(level: u32) -> NoiseLevel {
        NoiseLevel(level.min(MAX_NOISE_LEVEL))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Flips the noise coin.
    pub(crate) fn is_random_move(&self, random: &mut dyn Random) -> bool {
        random.generate_usize_in_range(0..MAX_NOISE_LEVEL as usize) < self.0 as usize
    }

    /// Compares the delta of the chosen greedy move to the improvement of the previous flip. If
    /// the search improves faster than it did a step ago the noise goes down by one, otherwise
    /// it goes up by one.
    ///
    /// This compares against the single previous step rather than against a target improvement
    /// rate as adaptive WalkSAT usually does.
    pub(crate) fn adapt(&mut self, greedy_delta: i32, previous_improvement: i32) -> NoiseAdjustment {
        if greedy_delta > previous_improvement {
            if self.0 == 0 {
                return NoiseAdjustment::Unchanged;
            }
            self.0 -= 1;
            NoiseAdjustment::Decreased
        } else {
            if self.0 == MAX_NOISE_LEVEL {
                return NoiseAdjustment::Unchanged;
            }
            self.0 += 1;
            NoiseAdjustment::Increased
        }
    }
}

impl Default for NoiseLevel {
    fn default() -> Self {
        NoiseLevel::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::NoiseAdjustment;
    use super::NoiseLevel;
    use super::MAX_NOISE_LEVEL;
    use crate::basic_types::tests::TestRandom;

    #[test]
    fn new_clamps_to_the_maximum() {
        assert_eq!(NoiseLevel::new(250).get(), MAX_NOISE_LEVEL);
        assert_eq!(NoiseLevel::new(7).get(), 7);
    }

    #[test]
    fn adapt_stays_within_bounds() {
        let mut noise = NoiseLevel::new(0);
        assert_eq!(noise.adapt(2, 1), NoiseAdjustment::Unchanged);
        assert_eq!(noise.get(), 0);

        assert_eq!(noise.adapt(1, 1), NoiseAdjustment::Increased);
        assert_eq!(noise.get(), 1);

        let mut noise = NoiseLevel::new(MAX_NOISE_LEVEL);
        assert_eq!(noise.adapt(-1, 0), NoiseAdjustment::Unchanged);
        assert_eq!(noise.get(), MAX_NOISE_LEVEL);

        assert_eq!(noise.adapt(1, 0), NoiseAdjustment::Decreased);
        assert_eq!(noise.get(), MAX_NOISE_LEVEL - 1);
    }

    #[test]
    fn coin_uses_the_level_as_a_percentage() {
        let mut random = TestRandom::with_usizes([29, 30, 0, 99]);
        let noise = NoiseLevel::new(30);

        assert!(noise.is_random_move(&mut random));
        assert!(!noise.is_random_move(&mut random));

        assert!(!NoiseLevel::new(0).is_random_move(&mut random));
        assert!(NoiseLevel::new(MAX_NOISE_LEVEL).is_random_move(&mut random));
    }
}
