use fixmath::{
    cos, log2_floor, rsqrt, rsqrt_normalized, rsqrt_table, rsqrt_with, sin,
    sin_with, sqrt, SinTable8, TABLE_INPUT_MIN,
};

// A spread of 20.12 inputs from 0.001 to about 1000000.
fn inputs() -> Vec<u32> {
    (0..256).map(|i| 4 + i * 16_777_000).collect()
}

fn test_log2() {
    for v in inputs() {
        black_box(log2_floor(black_box(v)));
    }
}

fn test_sqrt() {
    for v in inputs() {
        black_box(sqrt(black_box(v)));
    }
}

fn test_rsqrt() {
    for v in inputs() {
        black_box(rsqrt(black_box(v)));
    }
}

fn test_rsqrt_tight() {
    for v in inputs() {
        black_box(rsqrt_with::<10, 16>(black_box(v)));
    }
}

fn test_rsqrt_table() {
    for i in 0..256 {
        black_box(rsqrt_table(black_box(TABLE_INPUT_MIN + i * 49_152)));
    }
}

fn test_rsqrt_normalized() {
    for v in inputs() {
        black_box(rsqrt_normalized(black_box(v)));
    }
}

fn test_sin_cos() {
    for a in 0..256 {
        let s = sin::<12>(black_box(a * 16));
        let c = cos::<12>(black_box(a * 16));
        black_box(s + c);
    }
}

fn test_sin_wide_table() {
    for a in 0..256u32 {
        black_box(sin_with::<32, SinTable8>(black_box(a << 24)));
    }
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_log2", |b| b.iter(test_log2));
    c.bench_function("test_sqrt", |b| b.iter(test_sqrt));
    c.bench_function("test_rsqrt", |b| b.iter(test_rsqrt));
    c.bench_function("test_rsqrt_tight", |b| b.iter(test_rsqrt_tight));
    c.bench_function("test_rsqrt_table", |b| b.iter(test_rsqrt_table));
    c.bench_function("test_rsqrt_normalized", |b| {
        b.iter(test_rsqrt_normalized)
    });
    c.bench_function("test_sin_cos", |b| b.iter(test_sin_cos));
    c.bench_function("test_sin_wide_table", |b| b.iter(test_sin_wide_table));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
