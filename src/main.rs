use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cpu_time::ProcessTime;
use itertools::Itertools;
use log::info;

use dpllsat::{
    dimacs, metrics,
    solver::{Heuristic, Solution, SolverConfig},
};

/// A DPLL SAT solver for DIMACS CNF files
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the DIMACS CNF problem file
    file: PathBuf,

    /// Branching heuristic
    #[arg(long, value_enum, default_value_t = HeuristicArg::Mom)]
    heuristic: HeuristicArg,

    /// Output format of the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Do not print timing and search statistics
    #[arg(long)]
    no_stats: bool,

    /// Check the model against every input clause before printing it
    #[arg(long)]
    verify: bool,

    /// Dump the prometheus counters to stderr after solving
    #[arg(long)]
    metrics: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HeuristicArg {
    /// Most occurrences in clauses of minimum length
    Mom,
    /// First literal of the first open clause
    First,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Mom => Heuristic::Mom,
            HeuristicArg::First => Heuristic::FirstUnassigned,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// `SAT` and the true literals, or `UNSAT`
    Plain,
    /// SAT competition `s`/`v`/`c` lines
    Competition,
}

struct Timings {
    setup: Duration,
    solve: Duration,
}

fn main() -> Result<()> {
    env_logger::init();

    let start = ProcessTime::try_now().context("Getting process time failed")?;
    let args = Args::parse();
    let instance = dimacs::parse(&args.file).with_context(|| {
        format!("failed to parse problem file {}", args.file.display())
    })?;
    let config = SolverConfig {
        heuristic: args.heuristic.into(),
        verify_model: args.verify,
    };
    let setup = start.try_elapsed().context("Getting process time failed")?;

    let start = ProcessTime::try_now().context("Getting process time failed")?;
    let solution = instance
        .solve_with(&config)
        .context("solver returned an invalid model")?;
    let solve = start.try_elapsed().context("Getting process time failed")?;
    info!("solved {} in {:?}", args.file.display(), solve);

    let timings = Timings { setup, solve };
    match args.format {
        OutputFormat::Plain => print_plain(&solution, &timings, !args.no_stats),
        OutputFormat::Competition => print_competition(&solution, &timings, !args.no_stats),
    }

    if args.metrics {
        let text = metrics::gather_text().context("failed to render metrics")?;
        eprint!("{}", text);
    }
    Ok(())
}

fn print_plain(solution: &Solution, timings: &Timings, stats: bool) {
    match solution.model() {
        Some(model) => {
            let assignments = model.iter().map(|l| l.to_dimacs()).sorted().collect_vec();
            println!("SAT");
            println!("true: {:?}", assignments);
        }
        None => println!("UNSAT\n"),
    }
    if stats {
        println!(
            "
setup time:        {:?}
solve time:        {:?}
unit propagations: {}
nodes visited:     {}
",
            timings.setup,
            timings.solve,
            solution.stats.unit_propagations,
            solution.stats.nodes_visited
        );
    }
}

fn print_competition(solution: &Solution, timings: &Timings, stats: bool) {
    if stats {
        println!("c setup time:        {:?}", timings.setup);
        println!("c solve time:        {:?}", timings.solve);
        println!("c unit propagations: {}", solution.stats.unit_propagations);
        println!("c nodes visited:     {}", solution.stats.nodes_visited);
        println!("c decisions:         {}", solution.stats.decisions);
        println!("c backtracks:        {}", solution.stats.backtracks);
    }
    match solution.model() {
        None => println!("s UNSATISFIABLE"),
        Some(model) => {
            println!("s SATISFIABLE");
            let values = model
                .iter()
                .sorted_by_key(|l| l.var())
                .map(|l| l.to_dimacs().to_string())
                .join(" ");
            println!("v {} 0", values);
        }
    }
}
