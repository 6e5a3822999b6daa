//! Houses the solver which searches for an assignment satisfying a set of cardinality
//! constraints using a WalkSAT-style local search.

use std::time::Instant;

use log::debug;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::noise::NoiseAdjustment;
use super::termination::TerminationCondition;
use crate::basic_types::statistic_logging::log_statistic;
use crate::basic_types::statistic_logging::log_statistic_postfix;
use crate::basic_types::statistic_logging::should_log_statistics;
use crate::basic_types::InternalConsistencyError;
use crate::basic_types::Random;
use crate::cardwalk_assert_eq_simple;
use crate::cardwalk_assert_extreme;
use crate::cardwalk_assert_simple;
use crate::engine::CardinalityConstraint;
use crate::engine::ConstraintId;
use crate::engine::Flip;
use crate::engine::Literal;
use crate::engine::NoiseLevel;
use crate::engine::Problem;
use crate::engine::PropositionalVariable;
use crate::engine::SatisfactionTracker;
use crate::engine::TruthAssignment;
use crate::results::Solution;
use crate::results::SolveResult;

/// A solver which looks for an assignment satisfying every constraint of a [`Problem`] by
/// repeatedly flipping a single proposition.
///
/// Every step picks an unsatisfied constraint at random. With probability equal to the noise level
/// (in percent) a random literal of that constraint is flipped; otherwise the literal whose flip
/// reduces the number of unsatisfied constraints the most is flipped, the first one in the order
/// of the constraint winning ties. After a greedy choice the noise level adapts: it goes down if
/// the chosen move improves more than the previous flip did, and up otherwise.
///
/// The solver cannot prove that a problem is unsatisfiable; on such problems it keeps searching
/// until the [`TerminationCondition`] passed to [`LocalSearchSolver::solve`] triggers.
#[derive(Debug)]
pub struct LocalSearchSolver {
    problem: Problem,
    /// The assignment together with the cached satisfaction state of every constraint.
    tracker: SatisfactionTracker,
    noise_level: NoiseLevel,
    /// Whether the noise level adapts after greedy moves.
    adapt_noise: bool,
    random_generator: Box<dyn Random>,
    /// A set of counters updated during the search.
    counters: Counters,
}

/// How the truth assignment is initialised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InitialAssignment {
    /// Every proposition gets a value from the random generator.
    #[default]
    Random,
    /// Every proposition starts out false.
    AllFalse,
    /// The values are given, indexed by [`PropositionalVariable::index`].
    Given(Vec<bool>),
}

/// Options for the [`LocalSearchSolver`] which determine how it behaves.
#[derive(Debug)]
pub struct SearchOptions {
    /// A random generator which is used by the [`LocalSearchSolver`], passing it as an argument
    /// allows seeding of the randomization.
    pub random_generator: SmallRng,
    /// The noise level at the start of the search, clamped to `[0, 100]`.
    pub initial_noise_level: u32,
    /// Whether the noise level adapts during the search. When disabled the noise level stays at
    /// whatever it is set to.
    pub adapt_noise: bool,
    pub initial_assignment: InitialAssignment,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            random_generator: SmallRng::seed_from_u64(42),
            initial_noise_level: NoiseLevel::default().get(),
            adapt_noise: true,
            initial_assignment: InitialAssignment::default(),
        }
    }
}

impl LocalSearchSolver {
    /// Creates a solver for `problem` and initialises the truth assignment.
    ///
    /// # Panics
    /// If the options contain an [`InitialAssignment::Given`] whose length differs from the
    /// number of propositions.
    pub fn new(problem: Problem, options: SearchOptions) -> LocalSearchSolver {
        let SearchOptions {
            random_generator,
            initial_noise_level,
            adapt_noise,
            initial_assignment,
        } = options;

        LocalSearchSolver::with_random(
            problem,
            initial_noise_level,
            adapt_noise,
            initial_assignment,
            Box::new(random_generator),
        )
    }

    pub(crate) fn with_random(
        problem: Problem,
        initial_noise_level: u32,
        adapt_noise: bool,
        initial_assignment: InitialAssignment,
        mut random_generator: Box<dyn Random>,
    ) -> LocalSearchSolver {
        let assignment = match initial_assignment {
            InitialAssignment::Random => {
                TruthAssignment::random(problem.num_propositions(), random_generator.as_mut())
            }
            InitialAssignment::AllFalse => {
                TruthAssignment::from_values(vec![false; problem.num_propositions()])
            }
            InitialAssignment::Given(values) => {
                cardwalk_assert_eq_simple!(
                    values.len(),
                    problem.num_propositions(),
                    "the initial assignment must give a value to every proposition"
                );
                TruthAssignment::from_values(values)
            }
        };

        let tracker = SatisfactionTracker::new(&problem, assignment);
        debug!(
            "Created a solver with {} propositions and {} constraints, {} of which are unsatisfied initially",
            problem.num_propositions(),
            problem.num_constraints(),
            tracker.num_unsatisfied()
        );

        LocalSearchSolver {
            problem,
            tracker,
            noise_level: NoiseLevel::new(initial_noise_level),
            adapt_noise,
            random_generator,
            counters: Counters::default(),
        }
    }
}

// methods that drive the search
impl LocalSearchSolver {
    /// Performs a single search step, flipping exactly one proposition unless the problem is
    /// already solved. Returns whether every constraint is satisfied afterwards.
    pub fn step_one(&mut self) -> bool {
        if self.tracker.is_solved() {
            return true;
        }

        let position = self
            .random_generator
            .generate_usize_in_range(0..self.tracker.num_unsatisfied());
        let constraint = self
            .problem
            .get_constraint(self.tracker.get_unsatisfied(position));
        cardwalk_assert_simple!(self.tracker.is_unsatisfied(&self.problem, constraint.id()));

        let literal = if self
            .noise_level
            .is_random_move(self.random_generator.as_mut())
        {
            self.counters.num_random_moves += 1;
            let index = self
                .random_generator
                .generate_usize_in_range(0..constraint.len());
            constraint.literals()[index]
        } else {
            self.counters.num_greedy_moves += 1;
            let (literal, delta) = self.select_greedy_literal(constraint);
            self.adapt_noise_level(delta);
            literal
        };

        let _ = self.flip(literal.get_propositional_variable());
        self.counters.num_steps += 1;

        self.tracker.is_solved()
    }

    /// Runs [`LocalSearchSolver::step_one`] until every constraint is satisfied or until
    /// `termination` triggers. The termination condition is queried once before every step.
    pub fn solve(&mut self, termination: &mut impl TerminationCondition) -> SolveResult {
        let start_time = Instant::now();

        let result = loop {
            if self.tracker.is_solved() {
                info!("Found a solution after {} steps", self.counters.num_steps);
                break SolveResult::Satisfiable(Solution::new(self.tracker.assignment().clone()));
            }

            if termination.should_stop() {
                info!(
                    "Stopped after {} steps with {} unsatisfied constraints",
                    self.counters.num_steps,
                    self.tracker.num_unsatisfied()
                );
                break SolveResult::Unknown;
            }

            let _ = self.step_one();
        };

        self.counters.time_spent_in_solver += start_time.elapsed().as_millis() as u64;
        result
    }

    /// Flips `propositional_variable` and updates the satisfaction state of the constraints it
    /// occurs in.
    pub fn flip(&mut self, propositional_variable: PropositionalVariable) -> Flip {
        let flip = self.tracker.flip(&self.problem, propositional_variable);

        cardwalk_assert_extreme!(
            self.check_consistency().is_ok(),
            "the satisfaction state is inconsistent after flipping {propositional_variable}"
        );

        flip
    }

    /// Returns the literal of `constraint` with the highest satisfaction delta together with that
    /// delta. Ties go to the literal which comes first in the constraint.
    fn select_greedy_literal(&self, constraint: &CardinalityConstraint) -> (Literal, i32) {
        let mut literals = constraint.literals().iter();
        let first = *literals
            .next()
            .unwrap_or_else(|| unreachable!("constraints contain at least one literal"));

        literals.fold(
            (first, self.satisfaction_delta(first.get_propositional_variable())),
            |best, &literal| {
                let delta = self.satisfaction_delta(literal.get_propositional_variable());
                if delta > best.1 {
                    (literal, delta)
                } else {
                    best
                }
            },
        )
    }

    fn adapt_noise_level(&mut self, greedy_delta: i32) {
        if !self.adapt_noise {
            return;
        }
        let Some(previous_flip) = self.tracker.last_flip() else {
            return;
        };

        match self
            .noise_level
            .adapt(greedy_delta, previous_flip.improvement)
        {
            NoiseAdjustment::Decreased => self.counters.num_noise_decreases += 1,
            NoiseAdjustment::Increased => self.counters.num_noise_increases += 1,
            NoiseAdjustment::Unchanged => {}
        }
    }
}

// methods for getting info out of the solver
impl LocalSearchSolver {
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn is_solved(&self) -> bool {
        self.tracker.is_solved()
    }

    pub fn is_satisfied(&self, constraint: ConstraintId) -> bool {
        self.tracker.is_satisfied(&self.problem, constraint)
    }

    pub fn is_unsatisfied(&self, constraint: ConstraintId) -> bool {
        self.tracker.is_unsatisfied(&self.problem, constraint)
    }

    pub fn num_unsatisfied(&self) -> usize {
        self.tracker.num_unsatisfied()
    }

    /// The unsatisfied constraints, in no particular order.
    pub fn unsatisfied_constraints(&self) -> impl Iterator<Item = ConstraintId> + '_ {
        self.tracker.unsatisfied_constraints()
    }

    pub fn true_literal_count(&self, constraint: ConstraintId) -> u32 {
        self.tracker.true_literal_count(constraint)
    }

    pub fn get_value(&self, propositional_variable: PropositionalVariable) -> bool {
        self.tracker.assignment().get_value(propositional_variable)
    }

    pub fn assignment(&self) -> &TruthAssignment {
        self.tracker.assignment()
    }

    /// See [`SatisfactionTracker::satisfaction_delta`].
    pub fn satisfaction_delta(&self, propositional_variable: PropositionalVariable) -> i32 {
        self.tracker
            .satisfaction_delta(&self.problem, propositional_variable)
    }

    pub fn last_flip(&self) -> Option<Flip> {
        self.tracker.last_flip()
    }

    pub fn noise_level(&self) -> u32 {
        self.noise_level.get()
    }

    /// Sets the noise level, clamped to `[0, 100]`.
    pub fn set_noise_level(&mut self, noise_level: u32) {
        self.noise_level = NoiseLevel::new(noise_level);
    }

    /// The number of steps taken by [`LocalSearchSolver::step_one`]. Flips made through
    /// [`LocalSearchSolver::flip`] directly are not counted.
    pub fn num_steps(&self) -> u64 {
        self.counters.num_steps
    }

    /// Recounts every constraint and compares the result with the cached state. An error means
    /// the solver itself is broken.
    pub fn check_consistency(&self) -> Result<(), InternalConsistencyError> {
        self.tracker.check_consistency(&self.problem)
    }

    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }

        self.counters.log_statistics();
        log_statistic("noiseLevel", self.noise_level.get());
        log_statistic("numberOfUnsatisfiedConstraints", self.tracker.num_unsatisfied());
        log_statistic_postfix();
    }
}

/// Structure responsible for storing several statistics of the search of the
/// [`LocalSearchSolver`].
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct Counters {
    num_steps: u64,
    num_random_moves: u64,
    num_greedy_moves: u64,
    num_noise_increases: u64,
    num_noise_decreases: u64,
    time_spent_in_solver: u64,
}

impl Counters {
    fn log_statistics(&self) {
        log_statistic("numberOfSteps", self.num_steps);
        log_statistic("numberOfRandomMoves", self.num_random_moves);
        log_statistic("numberOfGreedyMoves", self.num_greedy_moves);
        log_statistic("numberOfNoiseIncreases", self.num_noise_increases);
        log_statistic("numberOfNoiseDecreases", self.num_noise_decreases);
        log_statistic("timeSpentInSolverInMilliseconds", self.time_spent_in_solver);
    }
}

#[cfg(test)]
mod tests {
    use super::InitialAssignment;
    use super::LocalSearchSolver;
    use super::SearchOptions;
    use crate::basic_types::tests::TestRandom;
    use crate::engine::test_helper::solver_for;
    use crate::engine::termination::StepBudget;
    use crate::parsing::parse_problem;
    use crate::results::SolveResult;

    #[test]
    fn random_initial_assignment_is_reproducible() {
        let problem = parse_problem("a | b | c\n!a | !b\nc | !d\n").expect("valid problem");

        let first = LocalSearchSolver::new(problem.clone(), SearchOptions::default());
        let second = LocalSearchSolver::new(problem, SearchOptions::default());

        assert_eq!(first.assignment(), second.assignment());
    }

    #[test]
    fn all_false_initial_assignment() {
        let problem = parse_problem("a | b\n").expect("valid problem");
        let solver = LocalSearchSolver::new(
            problem,
            SearchOptions {
                initial_assignment: InitialAssignment::AllFalse,
                ..Default::default()
            },
        );

        assert_eq!(solver.assignment().values(), &[false, false]);
        assert_eq!(solver.num_unsatisfied(), 1);
    }

    #[test]
    fn greedy_tie_goes_to_the_first_literal() {
        // flipping either b or c satisfies the first constraint and nothing else
        let mut solver = solver_for("[2,3] a | b | c\n", &[true, false, false], 0, false);

        assert!(solver.step_one());
        assert!(solver.get_value(solver.problem().get_propositional_variable("b").expect("b")));
        assert!(!solver.get_value(solver.problem().get_propositional_variable("c").expect("c")));
    }

    #[test]
    fn greedy_prefers_the_highest_delta() {
        // flipping a satisfies only the first constraint, flipping b satisfies both
        let mut solver = solver_for("a | b\nb | c\n", &[false, false, false], 0, false);
        let b = solver.problem().get_propositional_variable("b").expect("b");

        assert!(solver.step_one());
        assert!(solver.get_value(b));
        assert_eq!(solver.last_flip().map(|flip| flip.improvement), Some(2));
    }

    #[test]
    fn random_move_flips_the_scripted_literal() {
        let problem = parse_problem("a | b | c\n").expect("valid problem");
        // constraint 0, noise coin 0 (random move), literal 2
        let random = TestRandom::with_usizes([0, 0, 2]);
        let mut solver = LocalSearchSolver::with_random(
            problem,
            100,
            true,
            InitialAssignment::AllFalse,
            Box::new(random),
        );
        let c = solver.problem().get_propositional_variable("c").expect("c");

        assert!(solver.step_one());
        assert!(solver.get_value(c));
        assert_eq!(solver.noise_level(), 100);
    }

    #[test]
    fn noise_increases_when_the_search_does_not_speed_up() {
        let problem = parse_problem("a\nb\n").expect("valid problem");
        // two steps, both picking the first unsatisfied constraint and a greedy move
        let random = TestRandom::with_usizes([0, 99, 0, 99]);
        let mut solver = LocalSearchSolver::with_random(
            problem,
            50,
            true,
            InitialAssignment::AllFalse,
            Box::new(random),
        );

        assert!(!solver.step_one());
        assert_eq!(solver.noise_level(), 50, "no previous flip on the first step");

        assert!(solver.step_one());
        assert_eq!(solver.noise_level(), 51);
    }

    #[test]
    fn noise_decreases_when_the_search_speeds_up() {
        let problem = parse_problem("a\n!b | c\n").expect("valid problem");
        let random = TestRandom::with_usizes([0, 99]);
        let mut solver = LocalSearchSolver::with_random(
            problem,
            50,
            true,
            InitialAssignment::AllFalse,
            Box::new(random),
        );
        let c = solver.problem().get_propositional_variable("c").expect("c");

        // a flip which changes nothing about the unsatisfied set
        assert_eq!(solver.flip(c).improvement, 0);

        assert!(solver.step_one());
        assert_eq!(solver.noise_level(), 49);
    }

    #[test]
    fn fixed_noise_does_not_adapt() {
        let problem = parse_problem("a\nb\n").expect("valid problem");
        let random = TestRandom::with_usizes([0, 99, 0, 99]);
        let mut solver = LocalSearchSolver::with_random(
            problem,
            50,
            false,
            InitialAssignment::AllFalse,
            Box::new(random),
        );

        assert!(!solver.step_one());
        assert!(solver.step_one());
        assert_eq!(solver.noise_level(), 50);
    }

    #[test]
    fn direct_flips_are_not_search_steps() {
        let mut solver = solver_for("a | b\n", &[false, false], 0, false);
        let a = solver.problem().get_propositional_variable("a").expect("a");

        let _ = solver.flip(a);
        let _ = solver.flip(a);
        assert_eq!(solver.num_steps(), 0);

        assert!(solver.step_one());
        assert_eq!(solver.num_steps(), 1);
    }

    #[test]
    fn set_noise_level_is_clamped() {
        let mut solver = solver_for("a\n", &[false], 10, true);

        solver.set_noise_level(1000);
        assert_eq!(solver.noise_level(), 100);

        solver.set_noise_level(0);
        assert_eq!(solver.noise_level(), 0);
    }

    #[test]
    fn solve_stops_when_the_budget_is_spent() {
        let problem = parse_problem("a\n!a\n").expect("valid problem");
        let mut solver = LocalSearchSolver::new(problem, SearchOptions::default());

        let result = solver.solve(&mut StepBudget::new(25));

        assert_eq!(result, SolveResult::Unknown);
        assert_eq!(solver.num_steps(), 25);
    }

    #[test]
    fn solve_finds_a_solution() {
        let problem =
            parse_problem("a | b\n!a | c\n!b | !c\n[1,1] a | b | c\n").expect("valid problem");
        let mut solver = LocalSearchSolver::new(problem, SearchOptions::default());

        let result = solver.solve(&mut StepBudget::new(10_000));

        let SolveResult::Satisfiable(solution) = result else {
            panic!("expected a solution, got {result:?}");
        };
        for constraint in solver.problem().constraints() {
            let num_true = constraint
                .literals()
                .iter()
                .filter(|&&literal| solution.get_literal_value(literal))
                .count() as u32;
            assert!(constraint.is_satisfied_by_count(num_true));
        }
    }
}
