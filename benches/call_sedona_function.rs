//! Benchmarks: building and encoding Sedona function calls.
//! Run with: cargo bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sedona_connect::st_functions::{st_buffer, st_point};
use sedona_connect::{SedonaArg, SedonaConnectConfig, call_sedona_function, col, sedona_args};

fn polygon_ring(n: usize) -> Vec<SedonaArg> {
    (0..n)
        .map(|i| SedonaArg::from(vec![i as f64, (i * 2) as f64]))
        .collect()
}

fn bench_build_flat_call(c: &mut Criterion) {
    c.bench_function("call_sedona_function_flat", |b| {
        b.iter(|| {
            call_sedona_function(
                black_box("ST_Buffer"),
                sedona_args![col("geom"), 10, "other", 2.5],
            )
            .expect("build call")
        })
    });
}

fn bench_build_nested_arrays(c: &mut Criterion, n: usize) {
    let ring = polygon_ring(n);
    c.bench_function(&format!("call_sedona_function_ring_{n}"), |b| {
        b.iter(|| {
            call_sedona_function(black_box("ST_MakePolygon"), vec![SedonaArg::Array(ring.clone())])
                .expect("build call")
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let config = SedonaConnectConfig::default();
    let column = st_buffer(st_point("lon", "lat"), 100.0);
    c.bench_function("to_connect_json_nested", |b| {
        b.iter(|| black_box(&column).to_connect_json(&config))
    });
}

fn benches(c: &mut Criterion) {
    bench_build_flat_call(c);
    bench_build_nested_arrays(c, 100);
    bench_build_nested_arrays(c, 10_000);
    bench_encode(c);
}

criterion_group!(call_benches, benches);
criterion_main!(call_benches);
