//! Harness-level error type and its exit-code mapping.
//!
//! Each failure class carries its own process exit code so a scripted caller
//! can tell a missing file from a failed session from a corrupt round-trip
//! without parsing stderr. Code 2 is left to clap for usage errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("unable to open {}: {source}", .path.display())]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("reading {} failed: {source}", .path.display())]
    FileRead { path: PathBuf, source: io::Error },

    #[error("{} is empty, nothing to benchmark", .path.display())]
    EmptyInput { path: PathBuf },

    /// The sizing query returned a capacity below the worst case the
    /// benchmark requires. Fatal precondition failure.
    #[error("output buffer capacity {capacity} below required {required}")]
    Allocation { required: usize, capacity: usize },

    #[error(transparent)]
    Session(#[from] SessionError),

    /// Decompressed output does not hash back to the input.
    #[error("round-trip verification failed: checksum {actual:#018x} != {expected:#018x}")]
    Verify { expected: u64, actual: u64 },
}

impl BenchError {
    /// Stable per-class process exit code. 0 is success, 1 unused (generic),
    /// 2 reserved for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            BenchError::FileOpen { .. } => 3,
            BenchError::FileRead { .. } => 4,
            BenchError::EmptyInput { .. } => 5,
            BenchError::Allocation { .. } => 6,
            BenchError::Session(e) => match e {
                SessionError::Init { .. } => 7,
                SessionError::Setup { .. } => 8,
                SessionError::Compress { .. } => 9,
                SessionError::Decompress { .. }
                | SessionError::BufferTooSmall { .. }
                | SessionError::DataFormat { .. } => 10,
                SessionError::TransientAttach => 11,
            },
            BenchError::Verify { .. } => 12,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
