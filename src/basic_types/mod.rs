mod errors;
mod hash_structures;
mod keyed_vec;
pub(crate) mod random;
mod sparse_set;
pub(crate) mod statistic_logging;

pub use errors::ConstraintOperationError;
pub use errors::FormatError;
pub use errors::InternalConsistencyError;
pub use errors::ProblemFormatError;
pub(crate) use hash_structures::HashMap;
pub(crate) use keyed_vec::KeyedVec;
pub(crate) use keyed_vec::StorageKey;
pub use random::Random;
pub(crate) use sparse_set::SparseSet;

#[cfg(test)]
pub(crate) mod tests {
    pub(crate) use super::random::tests::TestRandom;
}
