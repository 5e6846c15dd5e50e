use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use move_bcs::codec;
use move_bcs::types::U256;

const LARGE: &str = "177279138216529409561387389144142902470";

/// Benchmark the fixed-width binary codec
fn bench_binary_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_codec");
    let value = U256::from_words([u64::MAX, 1, u64::MAX, 1]);
    let bytes = value.to_le_bytes();

    group.bench_function("encode", |b| {
        b.iter(|| codec::encode(black_box(&value)))
    });

    group.bench_function("decode", |b| {
        b.iter(|| codec::decode::<U256>(black_box(&bytes)))
    });

    group.finish();
}

/// Benchmark decimal and big-integer conversions
fn bench_text_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_codec");
    let value: U256 = LARGE.parse().unwrap();

    group.bench_function("to_string", |b| {
        b.iter(|| black_box(&value).to_string())
    });

    group.bench_function("from_dec_str", |b| {
        b.iter(|| U256::from_dec_str(black_box(LARGE)))
    });

    group.finish();
}

/// Benchmark vector<u256> encoding at different lengths
fn bench_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_encode");

    for len in &[1usize, 16, 256, 4096] {
        let values: Vec<U256> = (0..*len as u64).map(U256::from).collect();

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| codec::encode(black_box(values)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_binary_codec, bench_text_codec, bench_sequences);
criterion_main!(benches);
