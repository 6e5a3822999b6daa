//! A WalkSAT-style local search solver for problems made up of cardinality constraints.
//!
//! A cardinality constraint is a set of literals together with an inclusive range on the number
//! of them which must be true; an ordinary clause is the range `[1, len]`. The solver starts from
//! a random truth assignment and flips one proposition per step until every constraint is
//! satisfied:
//!
//! ```
//! use cardwalk::parsing::parse_problem;
//! use cardwalk::results::SolveResult;
//! use cardwalk::termination::StepBudget;
//! use cardwalk::LocalSearchSolver;
//! use cardwalk::SearchOptions;
//!
//! let problem = parse_problem("a | b\n!a | !b\n[1,1] b | c").unwrap();
//! let mut solver = LocalSearchSolver::new(problem, SearchOptions::default());
//!
//! match solver.solve(&mut StepBudget::new(1_000)) {
//!     SolveResult::Satisfiable(solution) => assert_eq!(solution.num_propositions(), 3),
//!     SolveResult::Unknown => println!("no solution found within the budget"),
//! }
//! ```

pub(crate) mod basic_types;
pub(crate) mod engine;
pub mod parsing;
pub mod results;
pub mod runner;

#[doc(hidden)]
pub mod asserts;

#[cfg(test)]
mod tests;

pub use basic_types::ConstraintOperationError;
pub use basic_types::FormatError;
pub use basic_types::InternalConsistencyError;
pub use basic_types::ProblemFormatError;
pub use basic_types::Random;
pub use engine::CardinalityConstraint;
pub use engine::ConstraintId;
pub use engine::Flip;
pub use engine::InitialAssignment;
pub use engine::LocalSearchSolver;
pub use engine::Literal;
pub use engine::NoiseLevel;
pub use engine::Problem;
pub use engine::ProblemBuilder;
pub use engine::PropositionalVariable;
pub use engine::SatisfactionTracker;
pub use engine::SearchOptions;
pub use engine::TruthAssignment;
pub use engine::MAX_NOISE_LEVEL;

pub mod termination {
    //! Conditions which bound the search, see [`TerminationCondition`].
    pub use crate::engine::termination::*;
}

pub mod statistics {
    //! Configuration of the statistics printed by
    //! [`LocalSearchSolver::log_statistics`](crate::LocalSearchSolver::log_statistics).
    pub use crate::basic_types::statistic_logging::configure;
}
