//! Conditions which decide when the search gives up.
//!
//! The local search has no stopping criterion of its own besides finding a solution, so on hard
//! or unsatisfiable problems the caller has to bound the search with a [`TerminationCondition`].
//! Conditions can be combined with [`Combinator`], and `Option<T>` never stops when it is `None`.

mod combinator;
mod indefinite;
mod os_signal;
mod step_budget;
mod time_budget;

pub use combinator::*;
pub use indefinite::*;
pub use os_signal::*;
pub use step_budget::*;
pub use time_budget::*;

/// The central trait that defines a termination condition. It is queried once before every
/// search step.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }
}
