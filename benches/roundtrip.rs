// benches/roundtrip.rs
//! Round-trip (encrypt → decrypt) throughput across payload sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use filevault_rs::{CipherAlg, CipherConfig, CipherEngine};
use std::hint::black_box;
use std::io::Cursor;

// Payload sizes with their benchmark labels: around the one-chunk mark and
// well past it, so the chunked loop dominates in the larger cases.
const PAYLOADS: &[(usize, &str)] = &[
    (4 * 1024, "4KiB"),
    (256 * 1024, "256KiB"),
    (1024 * 1024, "1MiB"),
    (8 * 1024 * 1024, "8MiB"),
];

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let config = CipherConfig::new(&[0x42u8; 32], CipherAlg::Aes256Cbc).unwrap();
    let engine = CipherEngine::new(config);

    for &(size, label) in PAYLOADS {
        let input: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("size", label), &size, |b, _| {
            b.iter(|| {
                let mut encrypted = Vec::with_capacity(size + 32);
                engine
                    .encrypt(Cursor::new(black_box(&input)), &mut encrypted)
                    .unwrap();

                let mut decrypted = Vec::with_capacity(size);
                engine
                    .decrypt(Cursor::new(black_box(&encrypted)), &mut decrypted)
                    .unwrap();

                black_box(decrypted);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
