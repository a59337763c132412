// compbench — compression benchmarking harness over pluggable session backends

pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod timefn;

/// Program name used in diagnostics and the CLI banner.
pub const PROGRAM_NAME: &str = "compbench";

/// Crate version string, taken from Cargo metadata at compile time.
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use bench::config::BenchConfig;
pub use bench::report::BenchReport;
pub use error::BenchError;
pub use session::{create_session, Algorithm, PollingMode, Session, SessionParams};
