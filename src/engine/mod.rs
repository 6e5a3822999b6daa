pub(crate) mod assignments;
pub(crate) mod constraint;
pub(crate) mod local_search_solver;
pub(crate) mod noise;
pub(crate) mod problem;
pub(crate) mod satisfaction_tracker;
pub mod termination;
pub(crate) mod variables;

mod debug_helper;
pub(crate) mod test_helper;
mod variable_names;

pub use assignments::TruthAssignment;
pub use constraint::CardinalityConstraint;
pub use constraint::ConstraintId;
pub(crate) use debug_helper::DebugHelper;
pub use local_search_solver::InitialAssignment;
pub use local_search_solver::LocalSearchSolver;
pub use local_search_solver::SearchOptions;
pub use noise::NoiseLevel;
pub use noise::MAX_NOISE_LEVEL;
pub use problem::Problem;
pub use problem::ProblemBuilder;
pub use satisfaction_tracker::Flip;
pub use satisfaction_tracker::SatisfactionTracker;
pub use variables::Literal;
pub use variables::PropositionalVariable;
pub(crate) use variable_names::VariableNames;
