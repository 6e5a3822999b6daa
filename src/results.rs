//! The outcome of [`LocalSearchSolver::solve`](crate::LocalSearchSolver::solve).

use crate::engine::Literal;
use crate::engine::PropositionalVariable;
use crate::engine::TruthAssignment;

/// The result of a call to [`LocalSearchSolver::solve`](crate::LocalSearchSolver::solve).
///
/// There is no unsatisfiable outcome: a local search cannot prove that no solution exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// Every constraint is satisfied by the contained solution.
    Satisfiable(Solution),
    /// The termination condition triggered before a solution was found.
    Unknown,
}

/// A truth assignment which satisfies every constraint of the problem it was found for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    assignment: TruthAssignment,
}

impl Solution {
    pub(crate) fn new(assignment: TruthAssignment) -> Solution {
        Solution { assignment }
    }

    pub fn num_propositions(&self) -> usize {
        self.assignment.num_propositions()
    }

    pub fn get_value(&self, propositional_variable: PropositionalVariable) -> bool {
        self.assignment.get_value(propositional_variable)
    }

    pub fn get_literal_value(&self, literal: Literal) -> bool {
        self.assignment.is_literal_true(literal)
    }

    /// The values of all propositions, indexed by [`PropositionalVariable::index`].
    pub fn values(&self) -> &[bool] {
        self.assignment.values()
    }
}
