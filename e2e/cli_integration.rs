// e2e/cli_integration.rs — black-box tests of the compbench binary.
//
// Runs the compiled binary with std::process::Command and checks output
// text and per-failure-class exit codes.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Locate the `compbench` binary produced by Cargo.
fn compbench_bin() -> PathBuf {
    // CARGO_BIN_EXE_compbench is set by Cargo when running integration tests.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_compbench") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("compbench");
    p
}

/// TempDir with a 10 000-byte all-'A' corpus file.
fn make_corpus() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corpus.txt");
    fs::write(&path, vec![b'A'; 10_000]).unwrap();
    (dir, path)
}

#[test]
fn deflate_run_prints_full_report() {
    let (_dir, corpus) = make_corpus();
    let output = Command::new(compbench_bin())
        .args(["0", corpus.to_str().unwrap(), "--loops", "3", "-q"])
        .output()
        .expect("failed to run compbench");
    assert!(output.status.success(), "exit 0 expected: {output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Compression algorithm: DEFLATE"));
    assert!(stdout.contains("Size is 10000."));
    assert!(stdout.contains("Compressed size: "));
    assert!(stdout.contains("compression ratio: "));
    assert!(stdout.contains("Decompressed size: 10000"));
}

#[test]
fn nonzero_selector_reports_lz4() {
    let (_dir, corpus) = make_corpus();
    let output = Command::new(compbench_bin())
        .args(["1", corpus.to_str().unwrap(), "--loops", "2", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Compression algorithm: LZ4"));
}

#[test]
fn compressed_size_beats_input_for_repetitive_corpus() {
    let (_dir, corpus) = make_corpus();
    let output = Command::new(compbench_bin())
        .args(["0", corpus.to_str().unwrap(), "--level", "6", "--loops", "2", "-q"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let compressed: usize = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Compressed size: "))
        .and_then(|rest| rest.split(',').next())
        .and_then(|n| n.trim().parse().ok())
        .expect("compressed size line present");
    assert!(compressed < 10_000, "10000 'A's must compress below 10000");
}

#[test]
fn missing_arguments_exit_with_usage_error() {
    let output = Command::new(compbench_bin()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "clap usage errors exit 2");
}

#[test]
fn missing_file_exits_with_file_open_code() {
    let output = Command::new(compbench_bin())
        .args(["0", "/nonexistent/corpus.bin", "-q"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unable to open"));
}

#[test]
fn empty_file_exits_with_empty_input_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    let output = Command::new(compbench_bin())
        .args(["0", path.to_str().unwrap(), "-q"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn bad_deflate_level_exits_with_setup_code() {
    let (_dir, corpus) = make_corpus();
    let output = Command::new(compbench_bin())
        .args(["0", corpus.to_str().unwrap(), "--level", "99", "-q"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(8));
}

#[test]
fn version_flag() {
    let output = Command::new(compbench_bin()).arg("--version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("compbench"));
}
