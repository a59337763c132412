//! Command-line surface of the `compbench` binary.
//!
//! `compbench <algorithm> <input_file>` with the historical selector
//! convention: `0` benchmarks DEFLATE, any other value LZ4. What used to be
//! compiled-in constants (level, loop count, retry bound, polling mode)
//! are flags with the same defaults.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::bench::BenchConfig;
use crate::config::{CLEVEL_DEFAULT, LOOP_COUNT_DEFAULT, RETRY_LIMIT_DEFAULT};
use crate::session::{Algorithm, PollingMode, SessionParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PollingArg {
    /// Busy-wait for completion.
    Busy,
    /// Wait for a completion interrupt.
    Interrupt,
}

impl From<PollingArg> for PollingMode {
    fn from(arg: PollingArg) -> Self {
        match arg {
            PollingArg::Busy => PollingMode::Busy,
            PollingArg::Interrupt => PollingMode::Interrupt,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "compbench",
    version,
    about = "Benchmark compression and decompression throughput of a file"
)]
pub struct Cli {
    /// Algorithm selector: 0 = DEFLATE, any other value = LZ4.
    pub algorithm: i32,

    /// File to load and benchmark.
    pub input_file: PathBuf,

    /// Compression level passed to the session.
    #[arg(long, default_value_t = CLEVEL_DEFAULT)]
    pub level: u32,

    /// Iterations per phase (warm-up and timed each run this many).
    #[arg(long, default_value_t = LOOP_COUNT_DEFAULT, value_parser = clap::value_parser!(u32).range(1..))]
    pub loops: u32,

    /// Bound on retries of a transient attach error (0 = no retry).
    #[arg(long, default_value_t = RETRY_LIMIT_DEFAULT)]
    pub retries: u32,

    /// How the execution context waits for completion.
    #[arg(long, value_enum, default_value_t = PollingArg::Busy)]
    pub polling: PollingArg,

    /// Treat buffer-too-small and data-format decompression statuses as
    /// non-fatal for bookkeeping (measures best-effort throughput).
    #[arg(long)]
    pub tolerate_decompress_errors: bool,

    /// Increase verbosity (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output; print results only.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from_selector(self.algorithm)
    }

    /// Display level derived from `-v` / `-q`: default 2, each `-v` adds one
    /// (capped at 4), `-q` drops to errors-only.
    pub fn display_level(&self) -> u32 {
        if self.quiet {
            1
        } else {
            (2 + self.verbose as u32).min(4)
        }
    }

    pub fn session_params(&self) -> SessionParams {
        let mut params = SessionParams::new(self.algorithm());
        params.set_level(self.level).set_polling(self.polling.into());
        params
    }

    pub fn bench_config(&self) -> BenchConfig {
        let mut config = BenchConfig::default();
        config
            .set_loop_count(self.loops)
            .set_retry_limit(self.retries)
            .set_tolerate_decompress_errors(self.tolerate_decompress_errors)
            .set_notification_level(self.display_level());
        config
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).expect("args should parse")
    }

    #[test]
    fn minimal_invocation() {
        let cli = parse(&["compbench", "0", "data.bin"]);
        assert_eq!(cli.algorithm(), Algorithm::Deflate);
        assert_eq!(cli.input_file, PathBuf::from("data.bin"));
        assert_eq!(cli.level, CLEVEL_DEFAULT);
        assert_eq!(cli.loops, LOOP_COUNT_DEFAULT);
        assert_eq!(cli.retries, RETRY_LIMIT_DEFAULT);
        assert_eq!(cli.polling, PollingArg::Busy);
        assert!(!cli.tolerate_decompress_errors);
    }

    #[test]
    fn nonzero_selector_is_lz4() {
        assert_eq!(parse(&["compbench", "1", "x"]).algorithm(), Algorithm::Lz4);
        assert_eq!(parse(&["compbench", "9", "x"]).algorithm(), Algorithm::Lz4);
    }

    #[test]
    fn missing_arguments_fail_to_parse() {
        assert!(Cli::try_parse_from(["compbench"]).is_err());
        assert!(Cli::try_parse_from(["compbench", "0"]).is_err());
    }

    #[test]
    fn zero_loops_rejected() {
        assert!(Cli::try_parse_from(["compbench", "0", "x", "--loops", "0"]).is_err());
    }

    #[test]
    fn flags_reach_config_and_params() {
        let cli = parse(&[
            "compbench",
            "1",
            "data.bin",
            "--level",
            "1",
            "--loops",
            "10",
            "--retries",
            "4",
            "--polling",
            "interrupt",
            "--tolerate-decompress-errors",
        ]);
        let params = cli.session_params();
        assert_eq!(params.level, 1);
        assert_eq!(params.polling, PollingMode::Interrupt);

        let config = cli.bench_config();
        assert_eq!(config.loop_count, 10);
        assert_eq!(config.retry_limit, 4);
        assert!(config.tolerate_decompress_errors);
    }

    #[test]
    fn verbosity_mapping() {
        assert_eq!(parse(&["compbench", "0", "x"]).display_level(), 2);
        assert_eq!(parse(&["compbench", "0", "x", "-v"]).display_level(), 3);
        assert_eq!(parse(&["compbench", "0", "x", "-vvv"]).display_level(), 4);
        assert_eq!(parse(&["compbench", "0", "x", "-q"]).display_level(), 1);
    }
}
