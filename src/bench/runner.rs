//! Benchmark runner: the warm-up and timed loops, retry policy, and
//! round-trip verification.
//!
//! Each direction runs the same two-pass shape: a warm-up pass whose
//! results are discarded, then a timed pass whose wall-clock span and final
//! byte counts feed the report. The two directions run sequentially: the
//! compression phase completes before decompression begins, and the
//! decompression source is the output of the final compression iteration.

use std::time::{Duration, Instant};

use xxhash_rust::xxh64::xxh64;

use crate::bench::config::BenchConfig;
use crate::bench::report::BenchReport;
use crate::displaylevel;
use crate::error::BenchError;
use crate::session::{Counts, Session, SessionError};
use crate::timefn;

// ── Phase identity ────────────────────────────────────────────────────────────

/// Which operation a phase drives through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Compress,
    Decompress,
}

impl Direction {
    fn label(&self) -> &'static str {
        match self {
            Direction::Compress => "compression",
            Direction::Decompress => "decompression",
        }
    }
}

/// Outcome of one timed pass.
#[derive(Debug, Clone)]
pub struct PhaseResult {
    /// Iterations in the timed pass.
    pub loops: u32,
    /// Byte counts from the final iteration. All iterations run on identical
    /// input and overwrite the same destination, so the last is representative.
    pub counts: Counts,
    /// Wall-clock span of the timed pass.
    pub elapsed: Duration,
}

// ── Retry wrapper ─────────────────────────────────────────────────────────────

/// Invoke one session operation, retrying a transient attach error up to
/// `retry_limit` times. With a limit of 0 the first transient error is
/// returned untouched. Every other error class passes straight through.
fn invoke(
    session: &mut dyn Session,
    direction: Direction,
    src: &[u8],
    dst: &mut [u8],
    retry_limit: u32,
) -> Result<Counts, SessionError> {
    let mut remaining = retry_limit;
    loop {
        let result = match direction {
            Direction::Compress => session.compress(src, dst),
            Direction::Decompress => session.decompress(src, dst),
        };
        match result {
            Err(e) if e.is_transient() && remaining > 0 => remaining -= 1,
            other => return other,
        }
    }
}

// ── Phase loop ────────────────────────────────────────────────────────────────

/// Run one direction through warm-up and timed passes.
///
/// Warm-up errors are fatal under the same policy as timed-pass errors: a
/// provider that cannot complete the operation N times untimed will not
/// produce a meaningful timed result either.
///
/// When `config.tolerate_decompress_errors` is set and `direction` is
/// [`Direction::Decompress`], the buffer-too-small and data-format status
/// classes do not abort: the iteration keeps the previous iteration's byte
/// counts and the loop continues.
pub fn run_phase(
    session: &mut dyn Session,
    direction: Direction,
    src: &[u8],
    dst: &mut [u8],
    config: &BenchConfig,
) -> Result<PhaseResult, BenchError> {
    let tolerate =
        config.tolerate_decompress_errors && direction == Direction::Decompress;

    // Warm-up pass: results discarded.
    for _ in 0..config.loop_count {
        match invoke(session, direction, src, dst, config.retry_limit) {
            Ok(_) => {}
            Err(e) if tolerate && e.is_tolerated_decompress() => {
                displaylevel!(3, "tolerated {} status in warm-up: {}\n", direction.label(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    // Timed pass: accumulate only the wall-clock span around the loop.
    timefn::wait_for_next_tick();
    let start = Instant::now();
    let mut last = Counts::default();
    for _ in 0..config.loop_count {
        match invoke(session, direction, src, dst, config.retry_limit) {
            Ok(counts) => last = counts,
            Err(e) if tolerate && e.is_tolerated_decompress() => {
                displaylevel!(3, "tolerated {} status: {}\n", direction.label(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }
    let elapsed = start.elapsed();

    Ok(PhaseResult {
        loops: config.loop_count,
        counts: last,
        elapsed,
    })
}

// ── Whole-run orchestration ───────────────────────────────────────────────────

/// Benchmark `input` through `session`: compression phase, decompression
/// phase, then a round-trip checksum verification of the regenerated bytes.
///
/// The output buffer is sized once from the session's worst-case query and
/// reused in place by every iteration. A sizing query below the input length
/// is a violated precondition and fails before any measurement.
pub fn run_benchmark(
    session: &mut dyn Session,
    input: &[u8],
    config: &BenchConfig,
) -> Result<BenchReport, BenchError> {
    let mut config = config.clone();
    if config.loop_count == 0 {
        // A zero-iteration run measures nothing; clamp silently.
        config.loop_count = 1;
    }

    let out_buf_len = session.max_compressed_length(input.len());
    if out_buf_len < input.len() {
        return Err(BenchError::Allocation {
            required: input.len(),
            capacity: out_buf_len,
        });
    }
    let mut out_buf = vec![0u8; out_buf_len];

    // Raise scheduling priority to reduce OS-induced jitter in measurements.
    // Gated behind the `realtime-priority` feature: it needs privileges.
    #[cfg(feature = "realtime-priority")]
    {
        // SAFETY: setpriority(2) adjusts only the calling process's
        // scheduling priority; no memory-safety implications.
        unsafe {
            libc::setpriority(libc::PRIO_PROCESS, 0, -20);
        }
    }

    displaylevel!(2, "Benchmarking compression...\n");
    let compression = run_phase(session, Direction::Compress, input, &mut out_buf, &config)?;
    let compressed_len = compression.counts.bytes_written;

    displaylevel!(2, "Benchmarking decompression...\n");
    let mut regen = vec![0u8; input.len()];
    let decompression = run_phase(
        session,
        Direction::Decompress,
        &out_buf[..compressed_len],
        &mut regen,
        &config,
    )?;

    // Round-trip verification: the regenerated bytes must hash back to the
    // input exactly.
    let expected = xxh64(input, 0);
    let produced = decompression.counts.bytes_written.min(regen.len());
    let actual = xxh64(&regen[..produced], 0);
    if actual != expected {
        return Err(BenchError::Verify { expected, actual });
    }

    Ok(BenchReport {
        algorithm: session.algorithm(),
        input_len: input.len(),
        out_buf_len,
        compressed_len,
        compression,
        decompression,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
