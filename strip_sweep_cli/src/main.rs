use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use strip_sweep::{
    board::Strip,
    player::Player,
    results::ResultsLog,
    solver::ExternalSolver,
    sweep::{self, Event, Sweep},
};

#[cfg(not(windows))]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

/// Solve opening positions of growing 1xN strips with an external solver and append its output
/// to a results file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Solver executable, called as `<solver> <board> <player>`
    #[arg(long, default_value = sweep::DEFAULT_SOLVER)]
    solver: PathBuf,

    /// First board size
    #[arg(long, default_value_t = sweep::DEFAULT_SIZES.start)]
    start_size: usize,

    /// Board size to stop at, not solved itself
    #[arg(long, default_value_t = sweep::DEFAULT_SIZES.end)]
    end_size: usize,

    /// Player to move, `b` or `w`
    #[arg(long, default_value_t = sweep::DEFAULT_PLAYER)]
    player: Player,

    /// File the solver output is appended to
    #[arg(long, default_value = sweep::DEFAULT_RESULTS_PATH)]
    results_path: PathBuf,
}

fn progress_line(board: &Strip) -> String {
    format!("solving boardsize: 1x{}", board.len())
}

fn report(event: Event<'_>) {
    match event {
        Event::Solving { board } => println!("{}", progress_line(board)),
        Event::Diagnostics { stderr, .. } => eprintln!("{stderr}"),
        Event::Appended { record, status } => {
            if !status.success() {
                eprintln!(
                    "Warning: solver exited with {} on board size 1x{}",
                    status,
                    record.size()
                );
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let results = ResultsLog::new(args.results_path);
    let sweep = Sweep::new(args.start_size..args.end_size, args.player, results)
        .context("Invalid sweep parameters")?;
    let solver = ExternalSolver::new(args.solver);

    let appended = sweep
        .run(&solver, report)
        .with_context(|| format!("Sweep with solver '{}' failed", solver))?;

    let now = chrono::offset::Utc::now();
    eprintln!(
        "[{now}] Appended {} results to '{}'",
        appended,
        sweep.results()
    );

    Ok(())
}
