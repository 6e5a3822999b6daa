#![cfg(test)]
//! Scenario tests which exercise the solver through its public operations.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::engine::Literal;
use crate::engine::Problem;
use crate::engine::ProblemBuilder;

mod satisfaction_tracker;

/// Generates a problem with a mix of clauses and cardinality constraints. Propositions may occur
/// several times in one constraint, with either polarity.
pub(crate) fn random_problem(
    num_propositions: usize,
    num_constraints: usize,
    rng: &mut SmallRng,
) -> Problem {
    let mut builder = ProblemBuilder::default();
    let propositions = (0..num_propositions)
        .map(|index| builder.propositional_variable(&format!("p{index}")))
        .collect::<Vec<_>>();

    for _ in 0..num_constraints {
        let len = rng.gen_range(1..=4);
        let literals = (0..len)
            .map(|_| {
                Literal::new(
                    propositions[rng.gen_range(0..num_propositions)],
                    rng.gen_bool(0.5),
                )
            })
            .collect::<Vec<_>>();

        let result = if rng.gen_bool(0.3) {
            let min = rng.gen_range(0..=len);
            let max = rng.gen_range(min..=len);
            builder.add_cardinality_constraint(literals, min, max)
        } else {
            builder.add_clause(literals)
        };
        let _ = result.expect("generated constraints are valid");
    }

    builder.build()
}
