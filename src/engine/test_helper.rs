#![cfg(test)]
//! Helpers to set up a [`LocalSearchSolver`] in a known state. The solvers use a
//! [`TestRandom`] without a script, so every random choice picks the first option and the noise
//! coin only comes up random when the noise level is above zero.

use crate::basic_types::tests::TestRandom;
use crate::engine::InitialAssignment;
use crate::engine::LocalSearchSolver;
use crate::engine::Problem;
use crate::parsing::parse_problem;

/// Parses `problem` and creates a solver starting from `values`.
pub(crate) fn solver_for(
    problem: &str,
    values: &[bool],
    noise_level: u32,
    adapt_noise: bool,
) -> LocalSearchSolver {
    let problem = parse_problem(problem).expect("test problems are well-formed");
    solver_for_problem(problem, values, noise_level, adapt_noise)
}

pub(crate) fn solver_for_problem(
    problem: Problem,
    values: &[bool],
    noise_level: u32,
    adapt_noise: bool,
) -> LocalSearchSolver {
    LocalSearchSolver::with_random(
        problem,
        noise_level,
        adapt_noise,
        InitialAssignment::Given(values.to_vec()),
        Box::<TestRandom>::default(),
    )
}

/// Every assignment over `num_propositions` propositions, in binary counting order.
pub(crate) fn all_assignments(num_propositions: usize) -> impl Iterator<Item = Vec<bool>> {
    (0..1_u32 << num_propositions).map(move |bits| {
        (0..num_propositions)
            .map(|index| bits & (1 << index) != 0)
            .collect()
    })
}
