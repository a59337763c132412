// e2e/bench_api.rs — end-to-end tests of the public benchmark API.
//
// Exercises the full pipeline (loader -> session -> runner -> report)
// through compbench::bench::bench_file, without going through the binary.

use std::io::Write;

use anyhow::Context;
use compbench::bench::{bench_file, BenchConfig};
use compbench::session::{Algorithm, SessionParams};
use compbench::BenchError;

fn quiet_config(loops: u32) -> BenchConfig {
    let mut cfg = BenchConfig::default();
    cfg.set_loop_count(loops).set_notification_level(0);
    cfg
}

fn write_temp(content: &[u8]) -> tempfile::NamedTempFile {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(content).unwrap();
    tmp
}

#[test]
fn deflate_file_benchmark_reports_shrinkage() -> anyhow::Result<()> {
    let tmp = write_temp(&vec![b'A'; 10_000]);
    let params = SessionParams::new(Algorithm::Deflate);

    let report =
        bench_file(tmp.path(), &params, &quiet_config(3)).context("deflate bench failed")?;
    assert_eq!(report.algorithm, Algorithm::Deflate);
    assert_eq!(report.input_len, 10_000);
    assert!(report.compressed_len < 10_000);
    assert!(report.ratio() > 1.0);
    assert_eq!(report.decompression.counts.bytes_written, 10_000);
    assert!(report.compression.elapsed.as_nanos() > 0);
    Ok(())
}

#[test]
fn lz4_file_benchmark_round_trips() {
    let content: Vec<u8> = b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .cycle()
        .take(32 * 1024)
        .cloned()
        .collect();
    let tmp = write_temp(&content);
    let params = SessionParams::new(Algorithm::Lz4);

    let report = bench_file(tmp.path(), &params, &quiet_config(2)).unwrap();
    assert_eq!(report.algorithm, Algorithm::Lz4);
    assert!(report.compressed_len < content.len());
    assert_eq!(report.decompression.counts.bytes_written, content.len());
}

#[test]
fn byte_counts_identical_across_repeated_runs() {
    let content: Vec<u8> = (0u8..=255).cycle().take(20_000).collect();
    let tmp = write_temp(&content);
    let params = SessionParams::new(Algorithm::Deflate);
    let cfg = quiet_config(2);

    let first = bench_file(tmp.path(), &params, &cfg).unwrap();
    let second = bench_file(tmp.path(), &params, &cfg).unwrap();
    assert_eq!(first.compressed_len, second.compressed_len);
    assert_eq!(
        first.decompression.counts.bytes_written,
        second.decompression.counts.bytes_written
    );
}

#[test]
fn output_buffer_bound_holds_for_incompressible_input() {
    // xorshift64 noise: the compressed stream expands, and must still fit
    // the session's worst-case bound.
    let mut state: u64 = 0x853C49E6748FEA9B;
    let mut content = Vec::with_capacity(16 * 1024);
    while content.len() < 16 * 1024 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        content.extend_from_slice(&state.to_le_bytes());
    }
    let tmp = write_temp(&content);

    for algorithm in [Algorithm::Deflate, Algorithm::Lz4] {
        let params = SessionParams::new(algorithm);
        let report = bench_file(tmp.path(), &params, &quiet_config(1)).unwrap();
        assert!(
            report.compressed_len <= report.out_buf_len,
            "{algorithm}: compressed {} exceeds bound {}",
            report.compressed_len,
            report.out_buf_len
        );
        assert_eq!(report.decompression.counts.bytes_written, content.len());
    }
}

#[test]
fn empty_file_fails_fast() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    let params = SessionParams::new(Algorithm::Deflate);
    let err = bench_file(tmp.path(), &params, &quiet_config(1)).unwrap_err();
    assert!(matches!(err, BenchError::EmptyInput { .. }));
}

#[test]
fn deflate_level_out_of_range_is_session_setup() {
    let tmp = write_temp(b"some corpus");
    let mut params = SessionParams::new(Algorithm::Deflate);
    params.set_level(42);
    let err = bench_file(tmp.path(), &params, &quiet_config(1)).unwrap_err();
    assert_eq!(err.exit_code(), 8, "setup failures carry their own exit code");
}
