use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffstream::{compress, decompress, HuffmanDecoder, HuffmanEncoder};

fn generate_test_data(size: usize, entropy_level: f64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);

    if entropy_level < 1.0 {
        // Low entropy - mostly one repeated byte with occasional variation
        for i in 0..size {
            if i % 64 == 0 {
                data.push((i / 64) as u8);
            } else {
                data.push(0);
            }
        }
    } else if entropy_level < 4.0 {
        // Medium entropy - short repeating pattern
        let pattern_size = (8.0 / entropy_level) as usize + 1;
        let pattern: Vec<u8> = (0..pattern_size).map(|i| i as u8).collect();
        for i in 0..size {
            data.push(pattern[i % pattern.len()]);
        }
    } else {
        // High entropy - hash-mixed bytes
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        for i in 0..size {
            let mut hasher = DefaultHasher::new();
            i.hash(&mut hasher);
            entropy_level.to_bits().hash(&mut hasher);
            data.push((hasher.finish() % 256) as u8);
        }
    }

    data
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_encode");

    let sizes = [1024, 8192, 65536];
    let entropy_levels = [0.5, 2.0, 6.0];

    for &size in &sizes {
        for &entropy in &entropy_levels {
            let data = generate_test_data(size, entropy);
            group.bench_with_input(
                BenchmarkId::new("encode", format!("{}_{}", size, entropy)),
                &data,
                |b, data| {
                    let encoder = HuffmanEncoder::new(data).unwrap();
                    b.iter(|| {
                        let payload = encoder.encode(data).unwrap();
                        black_box(payload);
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_decode");

    for &size in &[1024, 8192, 65536] {
        let data = generate_test_data(size, 2.0);
        let encoder = HuffmanEncoder::new(&data).unwrap();
        let payload = encoder.encode(&data).unwrap();
        let decoder = HuffmanDecoder::new(encoder.tree().clone());

        group.bench_with_input(BenchmarkId::new("decode", size), &payload, |b, payload| {
            b.iter(|| {
                let output = decoder.decode(payload).unwrap();
                black_box(output);
            });
        });
    }

    group.finish();
}

fn bench_container(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_container");

    for &size in &[1024, 65536] {
        let data = generate_test_data(size, 2.0);
        let compressed = compress(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| black_box(compress(data).unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("decompress", size),
            &compressed,
            |b, compressed| {
                b.iter(|| black_box(decompress(compressed).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_container);
criterion_main!(benches);
