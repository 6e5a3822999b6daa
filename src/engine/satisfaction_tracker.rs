//! Incremental bookkeeping of which constraints are satisfied.
//!
//! For every constraint the tracker caches how many of its literals are true, and it keeps the
//! set of constraints whose count lies outside their range. A flip only visits the constraints
//! in which the flipped proposition occurs, which is what makes a local search step cheap.

use super::problem::WeightedOccurrence;
use super::DebugHelper;
use crate::basic_types::InternalConsistencyError;
use crate::basic_types::KeyedVec;
use crate::basic_types::SparseSet;
use crate::cardwalk_assert_advanced;
use crate::cardwalk_assert_moderate;
use crate::engine::ConstraintId;
use crate::engine::Literal;
use crate::engine::Problem;
use crate::engine::PropositionalVariable;
use crate::engine::TruthAssignment;

/// A flip which has been applied, as remembered by the [`SatisfactionTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip {
    /// The flipped proposition with the polarity it has after the flip.
    pub literal: Literal,
    /// How many fewer constraints were unsatisfied after the flip than before it.
    pub improvement: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatisfactionTracker {
    assignment: TruthAssignment,
    true_literal_counts: KeyedVec<ConstraintId, u32>,
    unsatisfied: SparseSet<ConstraintId>,
    last_flip: Option<Flip>,
}

impl SatisfactionTracker {
    pub(crate) fn new(problem: &Problem, assignment: TruthAssignment) -> SatisfactionTracker {
        let mut true_literal_counts = KeyedVec::new(vec![0; problem.num_constraints()]);
        let mut unsatisfied = SparseSet::new(problem.num_constraints());

        for constraint in problem.constraints() {
            let count = count_true_literals(constraint.literals(), &assignment);
            true_literal_counts[constraint.id()] = count;

            if !constraint.is_satisfied_by_count(count) {
                let _ = unsatisfied.insert(constraint.id());
            }
        }

        SatisfactionTracker {
            assignment,
            true_literal_counts,
            unsatisfied,
            last_flip: None,
        }
    }

    pub fn assignment(&self) -> &TruthAssignment {
        &self.assignment
    }

    pub fn true_literal_count(&self, constraint: ConstraintId) -> u32 {
        self.true_literal_counts[constraint]
    }

    pub fn is_satisfied(&self, problem: &Problem, constraint: ConstraintId) -> bool {
        problem
            .get_constraint(constraint)
            .is_satisfied_by_count(self.true_literal_counts[constraint])
    }

    pub fn is_unsatisfied(&self, problem: &Problem, constraint: ConstraintId) -> bool {
        !self.is_satisfied(problem, constraint)
    }

    pub fn is_solved(&self) -> bool {
        self.unsatisfied.is_empty()
    }

    pub fn num_unsatisfied(&self) -> usize {
        self.unsatisfied.len()
    }

    /// The unsatisfied constraints, in no particular order.
    pub fn unsatisfied_constraints(&self) -> impl Iterator<Item = ConstraintId> + '_ {
        self.unsatisfied.iter()
    }

    pub(crate) fn is_member_of_unsatisfied(&self, constraint: ConstraintId) -> bool {
        self.unsatisfied.contains(constraint)
    }

    /// The unsatisfied constraint at `position`, for `position < self.num_unsatisfied()`.
    pub(crate) fn get_unsatisfied(&self, position: usize) -> ConstraintId {
        self.unsatisfied.get(position)
    }

    pub fn last_flip(&self) -> Option<Flip> {
        self.last_flip
    }

    /// Toggles the value of `propositional_variable` and updates the counts and memberships of
    /// the constraints it occurs in. No other constraint is visited.
    pub(crate) fn flip(
        &mut self,
        problem: &Problem,
        propositional_variable: PropositionalVariable,
    ) -> Flip {
        let num_unsatisfied_before = self.unsatisfied.len();
        let new_value = self.assignment.flip(propositional_variable);

        for occurrence in problem.weighted_occurrences(propositional_variable) {
            let count = &mut self.true_literal_counts[occurrence.constraint];
            *count = adjust_count(*count, count_change(occurrence, new_value));

            if problem
                .get_constraint(occurrence.constraint)
                .is_satisfied_by_count(*count)
            {
                let _ = self.unsatisfied.remove(occurrence.constraint);
            } else {
                let _ = self.unsatisfied.insert(occurrence.constraint);
            }
        }

        let flip = Flip {
            literal: Literal::new(propositional_variable, new_value),
            improvement: num_unsatisfied_before as i32 - self.unsatisfied.len() as i32,
        };
        self.last_flip = Some(flip);

        cardwalk_assert_advanced!(
            self.satisfaction_delta(problem, propositional_variable) == -flip.improvement,
            "flipping {propositional_variable} back must undo an improvement of {}",
            flip.improvement
        );

        flip
    }

    /// The number of constraints which would stop being unsatisfied if `propositional_variable`
    /// were flipped now, minus the number which would become unsatisfied. Nothing is modified.
    pub fn satisfaction_delta(
        &self,
        problem: &Problem,
        propositional_variable: PropositionalVariable,
    ) -> i32 {
        let new_value = !self.assignment.get_value(propositional_variable);

        problem
            .weighted_occurrences(propositional_variable)
            .iter()
            .map(|occurrence| {
                let constraint = problem.get_constraint(occurrence.constraint);
                let count = self.true_literal_counts[occurrence.constraint];
                let new_count = adjust_count(count, count_change(occurrence, new_value));

                i32::from(constraint.is_satisfied_by_count(new_count))
                    - i32::from(constraint.is_satisfied_by_count(count))
            })
            .sum()
    }

    /// Recomputes all counts and memberships from scratch and compares them against the cached
    /// state.
    pub fn check_consistency(&self, problem: &Problem) -> Result<(), InternalConsistencyError> {
        DebugHelper::debug_satisfaction_state(
            problem,
            &self.assignment,
            &self.true_literal_counts,
            |constraint| self.is_member_of_unsatisfied(constraint),
            self.last_flip.map(|flip| flip.literal),
        )
    }
}

pub(crate) fn count_true_literals(literals: &[Literal], assignment: &TruthAssignment) -> u32 {
    literals
        .iter()
        .filter(|&&literal| assignment.is_literal_true(literal))
        .count() as u32
}

fn count_change(occurrence: &WeightedOccurrence, new_value: bool) -> i32 {
    if new_value {
        occurrence.weight
    } else {
        -occurrence.weight
    }
}

fn adjust_count(count: u32, change: i32) -> u32 {
    cardwalk_assert_moderate!(
        count.checked_add_signed(change).is_some(),
        "true literal count {count} cannot change by {change}"
    );
    count.saturating_add_signed(change)
}
