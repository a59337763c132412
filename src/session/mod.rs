//! Session provider: the capability interface the benchmark harness consumes.
//!
//! A [`Session`] is an opaque handle over a compression execution context.
//! The harness never sees algorithm internals; it only asks for a worst-case
//! output size, then drives `compress` / `decompress` over caller-owned
//! buffers. Two in-process software backends are provided:
//!
//! - [`deflate::DeflateSession`] — DEFLATE (zlib stream) via `flate2`.
//! - [`lz4::Lz4Session`] — LZ4 block format via `lz4_flex`.
//!
//! Any backend (software codec, hardware offload) can be substituted behind
//! the same contract. Teardown is [`Drop`].

pub mod deflate;
pub mod lz4;

use thiserror::Error;

use crate::config::CLEVEL_DEFAULT;

// ── Algorithm selection ───────────────────────────────────────────────────────

/// Compression algorithm a session is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Deflate,
    Lz4,
}

impl Algorithm {
    /// Map the CLI selector to an algorithm: `0` is DEFLATE, anything else LZ4.
    pub fn from_selector(selector: i32) -> Algorithm {
        if selector == 0 {
            Algorithm::Deflate
        } else {
            Algorithm::Lz4
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Deflate => "DEFLATE",
            Algorithm::Lz4 => "LZ4",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Polling mode ──────────────────────────────────────────────────────────────

/// How an execution context waits for completion. Opaque to the harness: the
/// software backends complete synchronously and only record the choice, but a
/// hardware-offload backend would act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollingMode {
    #[default]
    Busy,
    Interrupt,
}

// ── Session parameters ────────────────────────────────────────────────────────

/// Parameters a session is created from.
#[derive(Debug, Clone)]
pub struct SessionParams {
    pub algorithm: Algorithm,
    pub level: u32,
    pub polling: PollingMode,
}

impl SessionParams {
    /// Parameters for `algorithm` with the default level and busy polling.
    pub fn new(algorithm: Algorithm) -> Self {
        SessionParams {
            algorithm,
            level: CLEVEL_DEFAULT,
            polling: PollingMode::Busy,
        }
    }

    pub fn set_level(&mut self, level: u32) -> &mut Self {
        self.level = level;
        self
    }

    pub fn set_polling(&mut self, polling: PollingMode) -> &mut Self {
        self.polling = polling;
        self
    }
}

// ── Operation result ──────────────────────────────────────────────────────────

/// Byte counts reported by one compress or decompress call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    /// Bytes consumed from the source buffer.
    pub bytes_read: usize,
    /// Bytes produced into the destination buffer.
    pub bytes_written: usize,
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Failures surfaced by a session provider.
///
/// `detail` strings preserve whatever status context the backend reports
/// (a numeric status for a hardware provider, a codec message here).
#[derive(Debug, Error)]
pub enum SessionError {
    /// The execution context could not be initialised at all.
    #[error("session init failed: {detail}")]
    Init { detail: String },

    /// The context came up but the per-algorithm setup was rejected.
    #[error("session setup failed: {detail}")]
    Setup { detail: String },

    /// The execution context is not yet attached. Retryable.
    #[error("execution context not yet attached")]
    TransientAttach,

    /// Destination buffer cannot hold the output.
    #[error("destination buffer too small, {needed} bytes needed")]
    BufferTooSmall { needed: usize },

    /// Source bytes are not valid data for this algorithm.
    #[error("invalid input data: {detail}")]
    DataFormat { detail: String },

    /// Non-retryable compression failure.
    #[error("compression failed: {detail}")]
    Compress { detail: String },

    /// Non-retryable decompression failure.
    #[error("decompression failed: {detail}")]
    Decompress { detail: String },
}

impl SessionError {
    /// `true` for the one error class the harness may retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, SessionError::TransientAttach)
    }

    /// `true` for the two decompression status classes the harness may be
    /// configured to tolerate (see `BenchConfig::tolerate_decompress_errors`).
    pub fn is_tolerated_decompress(&self) -> bool {
        matches!(
            self,
            SessionError::BufferTooSmall { .. } | SessionError::DataFormat { .. }
        )
    }
}

// ── Session trait ─────────────────────────────────────────────────────────────

/// An initialised connection to a compression execution context.
///
/// One session is created per algorithm choice and reused for every
/// iteration of the benchmark. Implementations reset any internal stream
/// state at the start of each call, so repeated calls on identical input are
/// deterministic. Resources are released on [`Drop`].
pub trait Session {
    /// The algorithm this session was created for.
    fn algorithm(&self) -> Algorithm;

    /// Upper bound on compressed size for `input_len` source bytes.
    ///
    /// The contract: for any input of length `input_len`, the size produced
    /// by [`compress`](Session::compress) never exceeds this bound.
    fn max_compressed_length(&self, input_len: usize) -> usize;

    /// Compress `src` into `dst`, returning bytes consumed and produced.
    fn compress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<Counts, SessionError>;

    /// Decompress `src` into `dst`, returning bytes consumed and produced.
    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<Counts, SessionError>;
}

// ── Factory ───────────────────────────────────────────────────────────────────

/// Create a session for the requested algorithm.
pub fn create_session(params: &SessionParams) -> Result<Box<dyn Session>, SessionError> {
    match params.algorithm {
        Algorithm::Deflate => Ok(Box::new(deflate::DeflateSession::new(params)?)),
        Algorithm::Lz4 => Ok(Box::new(lz4::Lz4Session::new(params)?)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_zero_is_deflate() {
        assert_eq!(Algorithm::from_selector(0), Algorithm::Deflate);
    }

    #[test]
    fn selector_nonzero_is_lz4() {
        assert_eq!(Algorithm::from_selector(1), Algorithm::Lz4);
        assert_eq!(Algorithm::from_selector(-7), Algorithm::Lz4);
        assert_eq!(Algorithm::from_selector(42), Algorithm::Lz4);
    }

    #[test]
    fn labels() {
        assert_eq!(Algorithm::Deflate.label(), "DEFLATE");
        assert_eq!(Algorithm::Lz4.label(), "LZ4");
    }

    #[test]
    fn params_defaults() {
        let p = SessionParams::new(Algorithm::Deflate);
        assert_eq!(p.level, crate::config::CLEVEL_DEFAULT);
        assert_eq!(p.polling, PollingMode::Busy);
    }

    #[test]
    fn params_setter_chain() {
        let mut p = SessionParams::new(Algorithm::Lz4);
        p.set_level(1).set_polling(PollingMode::Interrupt);
        assert_eq!(p.level, 1);
        assert_eq!(p.polling, PollingMode::Interrupt);
    }

    #[test]
    fn transient_classification() {
        assert!(SessionError::TransientAttach.is_transient());
        assert!(!SessionError::Compress { detail: "x".into() }.is_transient());
    }

    #[test]
    fn tolerated_classification() {
        assert!(SessionError::BufferTooSmall { needed: 1 }.is_tolerated_decompress());
        assert!(SessionError::DataFormat { detail: "x".into() }.is_tolerated_decompress());
        assert!(!SessionError::Decompress { detail: "x".into() }.is_tolerated_decompress());
        assert!(!SessionError::TransientAttach.is_tolerated_decompress());
    }

    #[test]
    fn factory_dispatches_on_algorithm() {
        let deflate = create_session(&SessionParams::new(Algorithm::Deflate)).unwrap();
        assert_eq!(deflate.algorithm(), Algorithm::Deflate);
        let lz4 = create_session(&SessionParams::new(Algorithm::Lz4)).unwrap();
        assert_eq!(lz4.algorithm(), Algorithm::Lz4);
    }
}
