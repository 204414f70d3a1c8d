//! Benchmarks for each dispatch branch of `ekurtosis`

use chisq_ekurtosis::{ekurtosis, Buffer, Matrix, OptionValue, RawOptions, Value};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Degrees of freedom with a few out-of-domain values mixed in
fn generate_degrees(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| if i % 97 == 0 { -1.0 } else { 1.0 + i as f64 * 0.5 })
        .collect()
}

fn generate_records(size: usize) -> Vec<Value> {
    generate_degrees(size)
        .into_iter()
        .map(|k| [("x", Value::from(vec![0.0, k]))].into_iter().collect())
        .collect()
}

fn bench_containers(c: &mut Criterion) {
    let mut group = c.benchmark_group("ekurtosis");

    for &size in &[1_000usize, 100_000] {
        let degrees = generate_degrees(size);

        group.bench_with_input(BenchmarkId::new("sequence", size), &degrees, |b, ks| {
            b.iter(|| black_box(ekurtosis(ks.clone(), None)))
        });

        let buffer = Buffer::from(degrees.clone());
        group.bench_with_input(BenchmarkId::new("buffer_f64", size), &buffer, |b, buf| {
            b.iter(|| black_box(ekurtosis(buf.clone(), None)))
        });

        let to_f32 = RawOptions::new().set("dtype", "float32");
        group.bench_with_input(BenchmarkId::new("buffer_f32_out", size), &buffer, |b, buf| {
            b.iter(|| black_box(ekurtosis(buf.clone(), Some(&to_f32))))
        });

        let cols = 100;
        if let Ok(matrix) = Matrix::new(Buffer::from(degrees.clone()), [size / cols, cols]) {
            group.bench_with_input(BenchmarkId::new("matrix", size), &matrix, |b, m| {
                b.iter(|| black_box(ekurtosis(m.clone(), None)))
            });
        }

        let records = generate_records(size);
        let accessor = RawOptions::new()
            .set("accessor", OptionValue::function(|d: &Value| d["x"][1].clone()));
        group.bench_with_input(BenchmarkId::new("accessor", size), &records, |b, rs| {
            b.iter(|| black_box(ekurtosis(rs.clone(), Some(&accessor))))
        });

        let deep = RawOptions::new().set("path", "x.1");
        group.bench_with_input(BenchmarkId::new("deep_path", size), &records, |b, rs| {
            b.iter(|| black_box(ekurtosis(rs.clone(), Some(&deep))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_containers);
criterion_main!(benches);
