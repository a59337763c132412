//! Input loader: reads the benchmark corpus fully into memory.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::BenchError;

/// Read `path` into an owned buffer.
///
/// The file length is taken from metadata and the whole file is read with
/// `read_exact`, so a short read on a slow or network-backed filesystem
/// surfaces as [`BenchError::FileRead`] instead of silently truncating the
/// corpus. A zero-length file is rejected up front.
pub fn load_input(path: &Path) -> Result<Vec<u8>, BenchError> {
    let mut file = File::open(path).map_err(|e| BenchError::FileOpen {
        path: path.to_owned(),
        source: e,
    })?;
    let len = file
        .metadata()
        .map_err(|e| BenchError::FileOpen {
            path: path.to_owned(),
            source: e,
        })?
        .len() as usize;

    if len == 0 {
        return Err(BenchError::EmptyInput {
            path: path.to_owned(),
        });
    }

    let mut buffer = vec![0u8; len];
    file.read_exact(&mut buffer).map_err(|e| BenchError::FileRead {
        path: path.to_owned(),
        source: e,
    })?;
    Ok(buffer)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
