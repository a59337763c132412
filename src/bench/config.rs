//! Benchmark configuration: constants and runtime parameters.
//!
//! [`BenchConfig`] holds every tuneable setting for a benchmark run —
//! iteration count, retry bound, verbosity, and the decompression-tolerance
//! policy. Builder-style setters allow callers to construct a configuration
//! incrementally before passing it to the runner.

use crate::config::{LOOP_COUNT_DEFAULT, RETRY_LIMIT_DEFAULT};

// ── Size multiplier constants ─────────────────────────────────────────────────

pub const KB: usize = 1 << 10;
pub const MB: usize = 1 << 20;

// ── BenchConfig struct ────────────────────────────────────────────────────────

/// Runtime parameters controlling a single benchmark run.
///
/// Construct via [`Default`] and adjust with the builder-style setters, or
/// set fields directly. All fields are `pub` for convenient inspection.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Verbosity level: 0 = silent, 1 = errors, 2 = results+progress
    /// (default), 3 = per-phase detail, 4 = full information.
    pub display_level: u32,

    /// Iteration count per phase: the warm-up pass and the timed pass each
    /// run this many repetitions, for compression and for decompression.
    pub loop_count: u32,

    /// Bound on retries of a transient attach error. `0` means the first
    /// transient error surfaces immediately, no retry attempted.
    pub retry_limit: u32,

    /// When `true`, the buffer-too-small and data-format decompression
    /// statuses are treated as non-fatal: the iteration keeps the previous
    /// iteration's byte counts and the loop continues. Off by default;
    /// callers opt in explicitly.
    pub tolerate_decompress_errors: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            display_level: 2,
            loop_count: LOOP_COUNT_DEFAULT,
            retry_limit: RETRY_LIMIT_DEFAULT,
            tolerate_decompress_errors: false,
        }
    }
}

impl BenchConfig {
    // ── Setters ───────────────────────────────────────────────────────────────

    /// Set the verbosity level for benchmark output.
    pub fn set_notification_level(&mut self, level: u32) -> &mut Self {
        self.display_level = level;
        self
    }

    /// Set the iteration count used by each warm-up and timed pass.
    pub fn set_loop_count(&mut self, loop_count: u32) -> &mut Self {
        self.loop_count = loop_count;
        self
    }

    /// Set the bound on transient-attach retries.
    pub fn set_retry_limit(&mut self, retry_limit: u32) -> &mut Self {
        self.retry_limit = retry_limit;
        self
    }

    /// Opt in to (or out of) tolerating the two non-fatal decompression
    /// status classes.
    pub fn set_tolerate_decompress_errors(&mut self, tolerate: bool) -> &mut Self {
        self.tolerate_decompress_errors = tolerate;
        self
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
