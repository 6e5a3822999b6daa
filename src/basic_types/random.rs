use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

/// The source of all randomness during the search: the initial assignment, the choice of an
/// unsatisfied constraint, the noise coin and the random-walk literal.
///
/// It is implemented for every seedable [`Rng`], and the tests provide a scripted implementation
/// so that individual decisions can be forced.
pub trait Random: Debug {
    /// Returns `true` with the given probability, which should be in `[0, 1]`.
    fn generate_bool(&mut self, probability: f64) -> bool;

    /// Generates a value uniformly from the non-empty `range`.
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_bool(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }

    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }
}
