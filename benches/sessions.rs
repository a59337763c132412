//! Criterion benchmarks for the session backends.
//!
//! Run with:
//!   cargo bench --bench sessions
//!
//! Measures one compress and one decompress call per iteration over
//! pre-allocated buffers, for compressible and incompressible payloads.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use compbench::session::{create_session, Algorithm, SessionParams};

fn make_compressible(len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let pattern = b"The quick brown fox jumps over the lazy dog. ";
    while out.len() < len {
        out.extend_from_slice(pattern);
    }
    out.truncate(len);
    out
}

fn make_noise(len: usize, mut state: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        out.extend_from_slice(&state.to_le_bytes());
    }
    out.truncate(len);
    out
}

fn bench_sessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_compress_decompress");

    let chunk_size = 256 * 1024;
    let cases = [
        ("compressible", make_compressible(chunk_size)),
        ("noise", make_noise(chunk_size, 0x9E3779B97F4A7C15)),
    ];

    for algorithm in [Algorithm::Deflate, Algorithm::Lz4] {
        for (name, data) in &cases {
            let mut session = create_session(&SessionParams::new(algorithm)).unwrap();
            let mut dst = vec![0u8; session.max_compressed_length(data.len())];

            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm}_compress"), name),
                data,
                |b, data| {
                    b.iter(|| session.compress(data, &mut dst).unwrap().bytes_written)
                },
            );

            // Pre-compress once, then benchmark decompression only.
            let mut session = create_session(&SessionParams::new(algorithm)).unwrap();
            let counts = session.compress(data, &mut dst).unwrap();
            let compressed = dst[..counts.bytes_written].to_vec();
            let mut regen = vec![0u8; data.len()];

            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm}_decompress"), name),
                &compressed,
                |b, compressed| {
                    b.iter(|| session.decompress(compressed, &mut regen).unwrap().bytes_written)
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sessions);
criterion_main!(benches);
