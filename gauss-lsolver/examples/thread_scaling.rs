use gauss_core::generate_seeded;
use gauss_lsolver::{
    algorithms::{GaussianElimination, SolveAlgorithm},
    Dispatch, PIVOT_TOLERANCE,
};
use std::time::Instant;

/// Solves one generated system with increasing worker counts and both dispatch modes.
fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let n = 600;
    log::warn!("Generating {}x{} system...", n, n);
    let generated = generate_seeded::<f64>(n, 2024).expect("Failed to generate system");

    for dispatch in [Dispatch::Respawn, Dispatch::Pooled] {
        for threads in [1, 2, 4, 8, 16] {
            let algorithm = GaussianElimination::with_params(threads, PIVOT_TOLERANCE, dispatch)
                .expect("Invalid solver configuration");
            let mut system = generated.system.clone();

            let start_time = Instant::now();
            let result = algorithm.solve(&mut system);
            let duration = start_time.elapsed();

            match result {
                Ok(result) => {
                    let max_error = result
                        .x
                        .iter()
                        .zip(&generated.true_solution)
                        .map(|(a, b)| (a - b).abs())
                        .fold(0.0, f64::max);
                    println!(
                        "{:?} dispatch, {:2} threads: {:?} (elimination {:?}), max error {:.3e}",
                        dispatch, threads, duration, result.metadata.elimination_time, max_error
                    );
                }
                Err(e) => {
                    log::error!("Solver failed: {:?}", e);
                }
            }
        }
    }
}
