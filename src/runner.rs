//! The command line entry point: reads a problem file, searches for a solution and prints it.

use std::path::PathBuf;
use std::time::Duration;

use crate::parsing::parse_problem;
use crate::print_cardwalk_assert_warning_message;
use crate::results::Solution;
use crate::results::SolveResult;
use crate::statistics::configure;
use crate::termination::Combinator;
use crate::termination::OsSignal;
use crate::termination::StepBudget;
use crate::termination::TimeBudget;
use crate::InitialAssignment;
use crate::LocalSearchSolver;
use crate::Problem;
use crate::SearchOptions;
use crate::MAX_NOISE_LEVEL;

#[derive(Debug, clap::Parser)]
pub struct Cli {
    /// The problem file, containing one constraint per line.
    pub instance: PathBuf,

    /// The seed of the random generator.
    #[arg(short = 's', long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// The initial noise level: the percentage of steps which make a random move.
    #[arg(
        short = 'n',
        long = "noise",
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_NOISE_LEVEL))
    )]
    pub noise_level: u32,

    /// Keep the noise level fixed instead of adapting it during the search.
    #[arg(long = "fixed-noise")]
    pub fixed_noise: bool,

    /// Start from the assignment in which every proposition is false.
    #[arg(long = "all-false")]
    pub all_false: bool,

    /// The maximum number of steps. Without it the search only stops on a solution, a time out
    /// or an interrupt.
    #[arg(short = 'm', long = "max-steps")]
    pub max_steps: Option<u64>,

    /// The number of seconds the solver is allowed to run.
    #[arg(short = 't', long = "time-out")]
    pub time_out: Option<u64>,

    /// Recount every constraint after the search and fail if the solver state is inconsistent.
    #[arg(long = "check-consistency")]
    pub check_consistency: bool,
}

pub fn run() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;

    let args = Cli::parse();

    env_logger::init();
    configure(true, "%% ", None);
    print_cardwalk_assert_warning_message!();

    let data = std::fs::read_to_string(&args.instance)
        .with_context(|| format!("Error reading {}", args.instance.display()))?;

    let problem = parse_problem(&data)
        .with_context(|| format!("Failed to parse a problem from {}", args.instance.display()))?;

    solve(problem, &args)
}

pub fn solve(problem: Problem, args: &Cli) -> anyhow::Result<()> {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let mut solver = LocalSearchSolver::new(
        problem,
        SearchOptions {
            random_generator: SmallRng::seed_from_u64(args.seed),
            initial_noise_level: args.noise_level,
            adapt_noise: !args.fixed_noise,
            initial_assignment: if args.all_false {
                InitialAssignment::AllFalse
            } else {
                InitialAssignment::Random
            },
        },
    );

    let mut termination = Combinator::new(
        OsSignal::install(),
        Combinator::new(
            args.max_steps.map(StepBudget::new),
            args.time_out
                .map(|seconds| TimeBudget::starting_now(Duration::from_secs(seconds))),
        ),
    );

    match solver.solve(&mut termination) {
        SolveResult::Satisfiable(solution) => {
            print_solution(solver.problem(), &solution);
            println!("----------");
        }
        SolveResult::Unknown => println!("UNKNOWN"),
    }

    if args.check_consistency {
        solver.check_consistency()?;
    }

    solver.log_statistics();

    Ok(())
}

fn print_solution(problem: &Problem, solution: &Solution) {
    for proposition in problem.propositions() {
        println!(
            "{} = {};",
            problem.get_name(proposition),
            solution.get_value(proposition)
        );
    }
}
