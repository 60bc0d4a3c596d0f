// gauss-cli/src/main.rs
mod error;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use gauss_core::{generate_system, generator::Rng, io};
use gauss_lsolver::{
    algorithms::{GaussianElimination, SolveAlgorithm},
    residual_norm, scheduler::validate_thread_count, Dispatch, LinearSystem, MAX_THREADS,
    PIVOT_TOLERANCE,
};

use crate::error::Result;
use crate::report::{format_matrix, format_performance, format_solution, SolveReport};

#[derive(Parser, Debug)]
#[command(
    name = "gauss",
    about = "Solve dense linear systems by Gaussian elimination with parallel forward elimination"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the system stored in FILE (as produced by `gauss generate`)
    Solve {
        /// Matrix file: size on the first line, then n rows of n coefficients and the RHS
        file: PathBuf,

        /// Number of worker threads for forward elimination (1-16)
        #[arg(env = "GAUSS_THREADS", value_parser = parse_thread_count)]
        threads: usize,

        /// How worker threads are provided at each elimination step
        #[arg(long, value_enum, default_value_t = DispatchChoice::Respawn)]
        dispatch: DispatchChoice,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate a random well-conditioned system with a known solution
    Generate {
        /// Number of equations (at least 2)
        size: usize,

        /// Output file
        file: PathBuf,

        /// Optional random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DispatchChoice {
    /// Spawn fresh threads at every step
    Respawn,
    /// Reuse one pool of threads for all steps
    Pooled,
}

impl From<DispatchChoice> for Dispatch {
    fn from(choice: DispatchChoice) -> Self {
        match choice {
            DispatchChoice::Respawn => Dispatch::Respawn,
            DispatchChoice::Pooled => Dispatch::Pooled,
        }
    }
}

/// Clap value parser so out-of-range counts fail with a usage message.
fn parse_thread_count(arg: &str) -> std::result::Result<usize, String> {
    let threads: usize = arg
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", arg))?;
    validate_thread_count(threads).map_err(|e| e.to_string())?;
    Ok(threads)
}

fn main() -> ExitCode {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Solve {
            file,
            threads,
            dispatch,
            json,
        } => solve(file, threads, dispatch.into(), json),
        Command::Generate { size, file, seed } => generate(size, file, seed),
    };

    exit_code(outcome)
}

fn exit_code(outcome: Result<()>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn solve(file: PathBuf, threads: usize, dispatch: Dispatch, json: bool) -> Result<()> {
    // Configuration is rejected before the input file is touched.
    let algorithm = GaussianElimination::with_params(threads, PIVOT_TOLERANCE, dispatch)?;

    if !json {
        println!("=== Parallel Gaussian elimination ===");
        println!("Matrix file: {}", file.display());
        println!("Threads: {} (max {})", threads, MAX_THREADS);
    }

    let mut system: LinearSystem = io::load_system(&file)?;
    let original = system.clone();

    if !json {
        println!();
        print!("{}", format_matrix("Augmented matrix", &system));
    }

    let result = algorithm.solve(&mut system)?;
    let residual = residual_norm(&original, &result.x)?;

    let summary = SolveReport {
        file: &file,
        size: system.size(),
        thread_count: threads,
        dispatch,
        solution: &result.x,
        residual_norm: residual,
        metadata: &result.metadata,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if system.size() <= report::MAX_DISPLAY_MATRIX {
        println!();
        print!("{}", format_matrix("Matrix after forward elimination", &system));
    }
    println!("\n=== RESULTS ===");
    print!("{}", format_solution(&result.x));
    println!();
    print!("{}", format_performance(&summary));
    Ok(())
}

fn generate(size: usize, file: PathBuf, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map(Rng::with_seed).unwrap_or_default();
    let generated = generate_system::<f64>(size, &mut rng)?;
    io::save_system(&generated.system, &file)?;
    log::debug!("True solution: {:?}", generated.true_solution);
    println!("Created {}x{} system in {}", size, size, file.display());
    Ok(())
}
