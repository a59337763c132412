//! Benchmark entry points.
//!
//! [`bench_file`] is the primary public API: load a file, create a session
//! for the requested parameters, and run the full measurement. Internally,
//! work is dispatched to:
//!
//! - [`runner::run_benchmark`] — the warm-up/timed loops over an in-memory
//!   buffer, with retry policy and round-trip verification.
//! - [`report`] — throughput/ratio arithmetic and the printed summary.
//!
//! [`config::BenchConfig`] controls iteration count, retry bound, verbosity,
//! and the decompression-tolerance policy.

pub mod config;
pub mod report;
pub mod runner;

// Re-export public types so callers can use `bench::BenchConfig` directly.
pub use config::BenchConfig;
pub use report::BenchReport;
pub use runner::{run_benchmark, run_phase, Direction, PhaseResult};

use std::path::Path;

use crate::error::BenchError;
use crate::input::load_input;
use crate::session::{create_session, SessionParams};

/// Load `path` and benchmark it under `params` and `config`.
///
/// # Errors
/// Returns `Err` if the file cannot be loaded, the session cannot be
/// created, a phase aborts, or round-trip verification fails. The session is
/// dropped on every path.
pub fn bench_file(
    path: &Path,
    params: &SessionParams,
    config: &BenchConfig,
) -> Result<BenchReport, BenchError> {
    let input = load_input(path)?;
    let mut session = create_session(params)?;
    run_benchmark(session.as_mut(), &input, config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
