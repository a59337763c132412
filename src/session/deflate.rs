//! DEFLATE session backed by `flate2` (zlib-wrapped stream).
//!
//! Uses the low-level in-place [`flate2::Compress`] / [`flate2::Decompress`]
//! pair rather than the `Read`/`Write` adapters: the benchmark loop works on
//! two pre-allocated buffers and must not allocate per iteration. Stream
//! state is reset at the top of every call so each iteration is independent.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};

use super::{Algorithm, Counts, Session, SessionError, SessionParams};

/// Highest level accepted by zlib.
const DEFLATE_CLEVEL_MAX: u32 = 9;

#[derive(Debug)]
pub struct DeflateSession {
    enc: Compress,
    dec: Decompress,
}

impl DeflateSession {
    /// Create a DEFLATE session at the level carried by `params`.
    ///
    /// Levels above 9 are rejected as a setup failure. The polling mode is
    /// recorded by the caller only; a synchronous software codec has nothing
    /// to poll.
    pub fn new(params: &SessionParams) -> Result<Self, SessionError> {
        if params.level > DEFLATE_CLEVEL_MAX {
            return Err(SessionError::Setup {
                detail: format!(
                    "deflate level {} out of range 0..={}",
                    params.level, DEFLATE_CLEVEL_MAX
                ),
            });
        }
        Ok(DeflateSession {
            enc: Compress::new(Compression::new(params.level), true),
            dec: Decompress::new(true),
        })
    }
}

impl Session for DeflateSession {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Deflate
    }

    /// Worst-case zlib output: mirrors zlib's `compressBound()`.
    fn max_compressed_length(&self, input_len: usize) -> usize {
        input_len + (input_len >> 12) + (input_len >> 14) + (input_len >> 25) + 13
    }

    fn compress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<Counts, SessionError> {
        self.enc.reset();
        let status = self
            .enc
            .compress(src, dst, FlushCompress::Finish)
            .map_err(|e| SessionError::Compress {
                detail: e.to_string(),
            })?;
        match status {
            Status::StreamEnd => Ok(Counts {
                bytes_read: self.enc.total_in() as usize,
                bytes_written: self.enc.total_out() as usize,
            }),
            // Finish did not complete: dst cannot hold the stream.
            Status::Ok | Status::BufError => Err(SessionError::BufferTooSmall {
                needed: self.max_compressed_length(src.len()),
            }),
        }
    }

    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<Counts, SessionError> {
        self.dec.reset(true);
        let status = self
            .dec
            .decompress(src, dst, FlushDecompress::Finish)
            .map_err(|e| SessionError::DataFormat {
                detail: e.to_string(),
            })?;
        match status {
            Status::StreamEnd => Ok(Counts {
                bytes_read: self.dec.total_in() as usize,
                bytes_written: self.dec.total_out() as usize,
            }),
            Status::Ok | Status::BufError => Err(SessionError::BufferTooSmall {
                needed: dst.len().saturating_add(1),
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
