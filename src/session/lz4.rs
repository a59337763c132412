//! LZ4 session backed by `lz4_flex` (raw block format).
//!
//! `lz4_flex` exposes a single fast compression path with no level knob; the
//! level carried by [`SessionParams`] is accepted for interface parity with
//! the DEFLATE backend and otherwise ignored. Both directions run on
//! caller-owned buffers via `compress_into` / `decompress_into`, so the
//! benchmark loop performs no allocation.

use lz4_flex::block::{compress_into, decompress_into, get_maximum_output_size, DecompressError};

use super::{Algorithm, Counts, Session, SessionError, SessionParams};

pub struct Lz4Session;

impl Lz4Session {
    pub fn new(_params: &SessionParams) -> Result<Self, SessionError> {
        Ok(Lz4Session)
    }
}

impl Session for Lz4Session {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz4
    }

    /// Worst-case LZ4 block output for `input_len` source bytes.
    fn max_compressed_length(&self, input_len: usize) -> usize {
        get_maximum_output_size(input_len)
    }

    fn compress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<Counts, SessionError> {
        // The block compressor's only failure mode is an undersized output.
        match compress_into(src, dst) {
            Ok(written) => Ok(Counts {
                bytes_read: src.len(),
                bytes_written: written,
            }),
            Err(_) => Err(SessionError::BufferTooSmall {
                needed: get_maximum_output_size(src.len()),
            }),
        }
    }

    fn decompress(&mut self, src: &[u8], dst: &mut [u8]) -> Result<Counts, SessionError> {
        match decompress_into(src, dst) {
            Ok(written) => Ok(Counts {
                bytes_read: src.len(),
                bytes_written: written,
            }),
            Err(DecompressError::OutputTooSmall { expected, .. }) => {
                Err(SessionError::BufferTooSmall { needed: expected })
            }
            Err(e) => Err(SessionError::DataFormat {
                detail: e.to_string(),
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Lz4Session {
        Lz4Session::new(&SessionParams::new(Algorithm::Lz4)).unwrap()
    }

    fn roundtrip(s: &mut Lz4Session, input: &[u8]) -> (usize, Vec<u8>) {
        let mut compressed = vec![0u8; s.max_compressed_length(input.len())];
        let c = s.compress(input, &mut compressed).unwrap();
        assert_eq!(c.bytes_read, input.len());
        assert!(c.bytes_written <= compressed.len(), "bound must hold");

        let mut regen = vec![0u8; input.len()];
        let d = s.decompress(&compressed[..c.bytes_written], &mut regen).unwrap();
        (c.bytes_written, regen[..d.bytes_written].to_vec())
    }

    #[test]
    fn roundtrip_repetitive_text() {
        let input: Vec<u8> = b"AAAA".iter().cycle().take(10_000).cloned().collect();
        let mut s = session();
        let (c_size, regen) = roundtrip(&mut s, &input);
        assert!(c_size < input.len(), "repetitive input must shrink");
        assert_eq!(regen, input);
    }

    #[test]
    fn roundtrip_one_byte() {
        let mut s = session();
        let (_, regen) = roundtrip(&mut s, b"x");
        assert_eq!(regen, b"x");
    }

    #[test]
    fn roundtrip_empty() {
        let mut s = session();
        let mut compressed = vec![0u8; s.max_compressed_length(0)];
        let c = s.compress(b"", &mut compressed).unwrap();

        let mut scratch = [0u8; 16];
        let d = s.decompress(&compressed[..c.bytes_written], &mut scratch).unwrap();
        assert_eq!(d.bytes_written, 0);
    }

    #[test]
    fn roundtrip_pseudo_random_bytes() {
        let mut state: u64 = 0x2545F4914F6CDD1D;
        let mut input = Vec::with_capacity(4096);
        while input.len() < 4096 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            input.extend_from_slice(&state.to_le_bytes());
        }
        let mut s = session();
        let (c_size, regen) = roundtrip(&mut s, &input);
        assert!(c_size <= s.max_compressed_length(input.len()));
        assert_eq!(regen, input);
    }

    #[test]
    fn undersized_dst_is_buffer_too_small() {
        let input: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
        let mut s = session();
        let mut dst = vec![0u8; 2];
        let err = s.compress(&input, &mut dst).unwrap_err();
        assert!(matches!(err, SessionError::BufferTooSmall { .. }));
    }

    #[test]
    fn undersized_regen_is_buffer_too_small() {
        let input = vec![b'A'; 10_000];
        let mut s = session();
        let mut compressed = vec![0u8; s.max_compressed_length(input.len())];
        let c = s.compress(&input, &mut compressed).unwrap();

        let mut tiny = vec![0u8; 16];
        let err = s
            .decompress(&compressed[..c.bytes_written], &mut tiny)
            .unwrap_err();
        assert!(matches!(err, SessionError::BufferTooSmall { .. }));
    }

    #[test]
    fn truncated_input_is_data_format() {
        let input = vec![b'A'; 10_000];
        let mut s = session();
        let mut compressed = vec![0u8; s.max_compressed_length(input.len())];
        let c = s.compress(&input, &mut compressed).unwrap();

        // Chop the block in half; the token stream ends mid-sequence.
        let mut regen = vec![0u8; input.len()];
        let err = s
            .decompress(&compressed[..c.bytes_written / 2], &mut regen)
            .unwrap_err();
        assert!(err.is_tolerated_decompress(), "truncation maps to a tolerated class");
    }
}
