//! Reporter: pure throughput/ratio arithmetic and the result summary.

use std::time::Duration;

use crate::bench::config::MB;
use crate::bench::runner::PhaseResult;
use crate::session::Algorithm;

// ── Pure arithmetic ───────────────────────────────────────────────────────────

/// Throughput in MB/s (MB = 1 MiB) for `total_bytes` moved in `elapsed`.
/// Returns 0.0 for a zero elapsed time rather than dividing by it.
pub fn throughput_mb_s(total_bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    total_bytes as f64 / (MB as f64 * secs)
}

/// Compression ratio: original size over compressed size.
/// A zero compressed size yields 0.0, not infinity.
pub fn ratio(original_len: usize, compressed_len: usize) -> f64 {
    if compressed_len == 0 {
        0.0
    } else {
        original_len as f64 / compressed_len as f64
    }
}

// ── Run summary ───────────────────────────────────────────────────────────────

/// Everything one benchmark run produced, ready for display.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub algorithm: Algorithm,
    /// Bytes in the loaded input.
    pub input_len: usize,
    /// Capacity of the pre-allocated output buffer.
    pub out_buf_len: usize,
    /// Compressed size from the final timed compression iteration.
    pub compressed_len: usize,
    pub compression: PhaseResult,
    pub decompression: PhaseResult,
}

impl BenchReport {
    /// Compression throughput is input-referenced: bytes *read* per loop,
    /// i.e. how fast original-size data is consumed.
    pub fn compression_speed_mb_s(&self) -> f64 {
        throughput_mb_s(
            self.compression.loops as u64 * self.compression.counts.bytes_read as u64,
            self.compression.elapsed,
        )
    }

    /// Decompression throughput is output-referenced: bytes *written* per
    /// loop, i.e. how fast original-size data is produced.
    pub fn decompression_speed_mb_s(&self) -> f64 {
        throughput_mb_s(
            self.decompression.loops as u64 * self.decompression.counts.bytes_written as u64,
            self.decompression.elapsed,
        )
    }

    pub fn ratio(&self) -> f64 {
        ratio(self.input_len, self.compressed_len)
    }
}

/// Print the result lines to stdout.
///
/// Format follows the classic driver output: one line per direction, sizes
/// first, then speed, then (for compression) the ratio.
pub fn print_summary(report: &BenchReport) {
    println!(
        "Compressed size: {}, compression speed (MB/sec): {:.2}, compression ratio: {:.2}",
        report.compressed_len,
        report.compression_speed_mb_s(),
        report.ratio(),
    );
    println!(
        "Decompressed size: {}, decompression speed (MB/sec): {:.2}",
        report.decompression.counts.bytes_written,
        report.decompression_speed_mb_s(),
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Counts;

    #[test]
    fn throughput_basic() {
        // 10 MiB in 2 seconds = 5 MB/s.
        let mb = MB as u64;
        let t = throughput_mb_s(10 * mb, Duration::from_secs(2));
        assert!((t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn throughput_zero_elapsed_is_zero() {
        assert_eq!(throughput_mb_s(123, Duration::ZERO), 0.0);
    }

    #[test]
    fn ratio_basic() {
        assert!((ratio(10_000, 2_500) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_zero_compressed_is_zero() {
        assert_eq!(ratio(10_000, 0), 0.0);
    }

    #[test]
    fn report_speeds_use_the_asymmetric_byte_counts() {
        let report = BenchReport {
            algorithm: Algorithm::Deflate,
            input_len: 2 * MB,
            out_buf_len: 3 * MB,
            compressed_len: MB,
            compression: PhaseResult {
                loops: 4,
                counts: Counts {
                    bytes_read: 2 * MB, // input-referenced
                    bytes_written: MB,
                },
                elapsed: Duration::from_secs(1),
            },
            decompression: PhaseResult {
                loops: 4,
                counts: Counts {
                    bytes_read: MB,
                    bytes_written: 2 * MB, // output-referenced
                },
                elapsed: Duration::from_secs(2),
            },
        };
        // compress: 4 loops * 2 MB read / 1 s = 8 MB/s
        assert!((report.compression_speed_mb_s() - 8.0).abs() < 1e-9);
        // decompress: 4 loops * 2 MB written / 2 s = 4 MB/s
        assert!((report.decompression_speed_mb_s() - 4.0).abs() < 1e-9);
        assert!((report.ratio() - 2.0).abs() < 1e-9);
    }
}
