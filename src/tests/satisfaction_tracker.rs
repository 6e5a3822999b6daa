#![cfg(test)]
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use super::random_problem;
use crate::engine::test_helper::solver_for_problem;
use crate::engine::LocalSearchSolver;
use crate::engine::PropositionalVariable;

fn random_solver(seed: u64) -> (LocalSearchSolver, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let problem = random_problem(12, 40, &mut rng);
    let values = (0..problem.num_propositions())
        .map(|_| rng.gen_bool(0.5))
        .collect::<Vec<_>>();

    (solver_for_problem(problem, &values, 0, false), rng)
}

fn random_proposition(solver: &LocalSearchSolver, rng: &mut SmallRng) -> PropositionalVariable {
    let index = rng.gen_range(0..solver.problem().num_propositions());
    solver
        .problem()
        .propositions()
        .nth(index)
        .expect("index is in range")
}

fn recount_true_literals(solver: &LocalSearchSolver) -> Vec<u32> {
    solver
        .problem()
        .constraints()
        .map(|constraint| {
            constraint
                .literals()
                .iter()
                .filter(|&&literal| solver.assignment().is_literal_true(literal))
                .count() as u32
        })
        .collect()
}

#[test]
fn invariants_hold_after_every_flip() {
    for seed in 0..10 {
        let (mut solver, mut rng) = random_solver(seed);

        for _ in 0..200 {
            let proposition = random_proposition(&solver, &mut rng);
            let _ = solver.flip(proposition);

            assert_eq!(solver.check_consistency(), Ok(()));

            let recounted = recount_true_literals(&solver);
            for constraint in solver.problem().constraints() {
                assert_eq!(
                    solver.true_literal_count(constraint.id()),
                    recounted[constraint.id().index() as usize]
                );

                let is_member = solver
                    .unsatisfied_constraints()
                    .any(|unsatisfied| unsatisfied == constraint.id());
                assert_eq!(is_member, solver.is_unsatisfied(constraint.id()));
            }
        }
    }
}

#[test]
fn flipping_twice_restores_the_state() {
    for seed in 0..10 {
        let (mut solver, mut rng) = random_solver(seed);

        for _ in 0..50 {
            let proposition = random_proposition(&solver, &mut rng);

            let assignment = solver.assignment().clone();
            let counts = recount_true_literals(&solver);
            let mut unsatisfied = solver.unsatisfied_constraints().collect::<Vec<_>>();
            unsatisfied.sort();

            let first = solver.flip(proposition);
            let second = solver.flip(proposition);

            let mut unsatisfied_after = solver.unsatisfied_constraints().collect::<Vec<_>>();
            unsatisfied_after.sort();

            assert_eq!(first.improvement, -second.improvement);
            assert_eq!(solver.assignment(), &assignment);
            assert_eq!(
                solver
                    .problem()
                    .constraints()
                    .map(|constraint| solver.true_literal_count(constraint.id()))
                    .collect::<Vec<_>>(),
                counts
            );
            assert_eq!(unsatisfied_after, unsatisfied);
        }
    }
}

#[test]
fn satisfaction_delta_matches_the_measured_change() {
    for seed in 0..10 {
        let (mut solver, mut rng) = random_solver(seed);

        for _ in 0..200 {
            let proposition = random_proposition(&solver, &mut rng);

            let predicted = solver.satisfaction_delta(proposition);
            let unsatisfied_before = solver.num_unsatisfied() as i32;
            let flip = solver.flip(proposition);
            let unsatisfied_after = solver.num_unsatisfied() as i32;

            assert_eq!(predicted, unsatisfied_before - unsatisfied_after);
            assert_eq!(flip.improvement, predicted);
        }
    }
}
