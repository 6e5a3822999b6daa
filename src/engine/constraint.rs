use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::StorageKey;
use crate::engine::Literal;

/// The position of a constraint in its [`Problem`](crate::Problem).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId {
    index: u32,
}

impl ConstraintId {
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl StorageKey for ConstraintId {
    fn to_index(&self) -> usize {
        self.index as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId {
            index: index as u32,
        }
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.index)
    }
}

/// A generalised clause: it is satisfied when the number of its literals which are true lies in
/// `[min_true_literals, max_true_literals]`. An ordinary clause is the range `[1, len]`.
///
/// Literals are counted with multiplicity, so a proposition which occurs twice with the same
/// polarity contributes two to the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardinalityConstraint {
    id: ConstraintId,
    literals: Vec<Literal>,
    min_true_literals: u32,
    max_true_literals: u32,
}

impl CardinalityConstraint {
    pub(crate) fn new(
        id: ConstraintId,
        literals: Vec<Literal>,
        min_true_literals: u32,
        max_true_literals: u32,
    ) -> CardinalityConstraint {
        CardinalityConstraint {
            id,
            literals,
            min_true_literals,
            max_true_literals,
        }
    }

    pub fn id(&self) -> ConstraintId {
        self.id
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn min_true_literals(&self) -> u32 {
        self.min_true_literals
    }

    pub fn max_true_literals(&self) -> u32 {
        self.max_true_literals
    }

    #[allow(clippy::len_without_is_empty, reason = "constraints are never empty")]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether `num_true_literals` true literals satisfy this constraint.
    pub fn is_satisfied_by_count(&self, num_true_literals: u32) -> bool {
        (self.min_true_literals..=self.max_true_literals).contains(&num_true_literals)
    }

    /// Whether the range can be met by some assignment. Only the number of literals is taken into
    /// account, not clashes such as `A | !A`.
    pub fn is_range_reachable(&self) -> bool {
        self.min_true_literals as usize <= self.literals.len()
    }
}
