//! Console rendering of systems, solutions and timings.

use std::fmt::Write;
use std::path::Path;

use gauss_lsolver::{Dispatch, EliminationMetadata, LinearSystem, Matrix};
use serde::Serialize;

/// Largest system whose augmented matrix is printed in full.
pub const MAX_DISPLAY_MATRIX: usize = 10;
/// Largest system whose solution is printed in full.
pub const MAX_DISPLAY_SOLUTION: usize = 20;
/// Components shown when the solution is too long to print.
pub const SOLUTION_PREVIEW: usize = 10;

/// Machine-readable summary of one solve.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    pub file: &'a Path,
    pub size: usize,
    pub thread_count: usize,
    pub dispatch: Dispatch,
    pub solution: &'a [f64],
    pub residual_norm: f64,
    pub metadata: &'a EliminationMetadata,
}

pub fn format_matrix(title: &str, system: &LinearSystem) -> String {
    let (n, cols) = system.dims();
    let mut out = String::new();
    if n > MAX_DISPLAY_MATRIX {
        let _ = writeln!(out, "Matrix too large to display (n={})", n);
        return out;
    }
    let _ = writeln!(out, "{}:", title);
    for (i, row) in system.rows().iter().enumerate() {
        let _ = write!(out, "Row {:2}: ", i);
        for (j, value) in row.iter().enumerate() {
            if j + 1 == cols {
                out.push_str(" | ");
            }
            let _ = write!(out, "{:8.3} ", value);
        }
        out.push('\n');
    }
    out
}

pub fn format_solution(x: &[f64]) -> String {
    let mut out = String::new();
    if x.len() <= MAX_DISPLAY_SOLUTION {
        out.push_str("Solution:\n");
        for (i, value) in x.iter().enumerate() {
            let _ = writeln!(out, "x[{:2}] = {:12.8}", i, value);
        }
    } else {
        let _ = writeln!(out, "Solution found (first {} components):", SOLUTION_PREVIEW);
        for (i, value) in x.iter().take(SOLUTION_PREVIEW).enumerate() {
            let _ = writeln!(out, "x[{:2}] = {:12.8}", i, value);
        }
        let _ = writeln!(out, "... ({} components in total)", x.len());
    }
    out
}

pub fn format_performance(report: &SolveReport) -> String {
    let metadata = report.metadata;
    let mut out = String::from("=== PERFORMANCE ===\n");
    let _ = writeln!(
        out,
        "Execution time: {:.6} seconds",
        metadata.total_time().as_secs_f64()
    );
    let _ = writeln!(
        out,
        "  forward elimination: {:.6} s",
        metadata.elimination_time.as_secs_f64()
    );
    let _ = writeln!(
        out,
        "  back substitution:   {:.6} s",
        metadata.back_substitution_time.as_secs_f64()
    );
    let _ = writeln!(out, "System size: {} equations", report.size);
    let _ = writeln!(out, "Threads used: {} ({:?} dispatch)", report.thread_count, report.dispatch);
    let _ = writeln!(out, "Row swaps: {}", metadata.swaps.len());
    let _ = writeln!(out, "Max residual |Ax - b|: {:.3e}", report.residual_norm);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_small_matrix() {
        let system = LinearSystem::new(vec![vec![2.0, -1.0, 3.0], vec![0.5, 4.0, 1.0]]).unwrap();
        let text = format_matrix("Augmented matrix", &system);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Augmented matrix:");
        assert_eq!(lines[1], "Row  0:    2.000   -1.000  |    3.000 ");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_format_large_matrix_is_summarised() {
        let rows = (0..11)
            .map(|i| {
                let mut row = vec![0.0; 12];
                row[i] = 1.0;
                row
            })
            .collect();
        let system = LinearSystem::new(rows).unwrap();
        assert_eq!(
            format_matrix("Augmented matrix", &system),
            "Matrix too large to display (n=11)\n"
        );
    }

    #[test]
    fn test_format_solution_preview() {
        let short = format_solution(&[1.0, -2.5]);
        assert!(short.contains("x[ 1] =  -2.50000000"));

        let long: Vec<f64> = (0..25).map(f64::from).collect();
        let text = format_solution(&long);
        assert!(text.contains("x[ 9] ="));
        assert!(!text.contains("x[10] ="));
        assert!(text.contains("(25 components in total)"));
    }

    #[test]
    fn test_report_serializes() {
        let metadata = EliminationMetadata {
            steps: 1,
            swaps: vec![],
            thread_count: 2,
            dispatch: Dispatch::Pooled,
            elimination_time: Duration::from_millis(3),
            back_substitution_time: Duration::from_millis(1),
        };
        let report = SolveReport {
            file: Path::new("system.txt"),
            size: 2,
            thread_count: 2,
            dispatch: Dispatch::Pooled,
            solution: &[1.0, 3.0],
            residual_norm: 0.0,
            metadata: &metadata,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dispatch"], "pooled");
        assert_eq!(json["solution"][1], 3.0);
        assert_eq!(json["metadata"]["steps"], 1);
        assert!(format_performance(&report).contains("Threads used: 2 (Pooled dispatch)"));
    }
}
