//! Benchmarks comparing batched struct-of-arrays kernels with scalar
//! array-of-structs loops over the same vectors

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lanewise_core::{
    as_out, batch_size, vectors_in, vectors_out, Accumulator, Kernels, Op, ReduceOp,
};

const N: usize = batch_size::<f32>();
type K = Kernels<f32, 3, N>;

/// Generate struct-of-arrays columns, length rounded down to whole batches
fn generate_columns(size: usize) -> [Vec<f32>; 3] {
    let size = size - size % N;
    std::array::from_fn(|d| {
        (0..size)
            .map(|i| ((i * 3 + d) as f32 * 0.1).sin() * 100.0)
            .collect()
    })
}

fn to_aos(columns: &[Vec<f32>; 3]) -> Vec<[f32; 3]> {
    (0..columns[0].len())
        .map(|i| [columns[0][i], columns[1][i], columns[2][i]])
        .collect()
}

/// Benchmark normalize over whole columns
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [1_000, 10_000, 100_000] {
        let columns = generate_columns(size);
        let aos = to_aos(&columns);
        let len = columns[0].len();

        group.bench_with_input(BenchmarkId::new("soa_kernel", len), &columns, |b, columns| {
            let mut out: [Vec<f32>; 3] = std::array::from_fn(|_| vec![0.0; len]);
            b.iter(|| {
                for offset in (0..len).step_by(N) {
                    let v = vectors_in([&columns[0][..], &columns[1][..], &columns[2][..]], offset);
                    let [ox, oy, oz] = &mut out;
                    K::normalize(v, vectors_out([&mut ox[..], &mut oy[..], &mut oz[..]], offset));
                }
                black_box(&out);
            });
        });

        group.bench_with_input(BenchmarkId::new("aos_scalar", len), &aos, |b, aos| {
            let mut out = vec![[0.0f32; 3]; len];
            b.iter(|| {
                for (v, o) in aos.iter().zip(out.iter_mut()) {
                    let l = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
                    *o = if l == 0.0 {
                        [0.0; 3]
                    } else {
                        [v[0] / l, v[1] / l, v[2] / l]
                    };
                }
                black_box(&out);
            });
        });
    }

    group.finish();
}

/// Benchmark cross followed by length, chained vs scalar
fn bench_cross_length_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_then_length");

    for size in [1_000, 100_000] {
        let a = generate_columns(size);
        let w: [Vec<f32>; 3] = std::array::from_fn(|d| a[(d + 1) % 3].clone());
        let len = a[0].len();

        group.bench_with_input(BenchmarkId::new("accumulator", len), &(&a, &w), |b, (a, w)| {
            let mut out = vec![0.0f32; len];
            b.iter(|| {
                for offset in (0..len).step_by(N) {
                    let v = vectors_in([&a[0][..], &a[1][..], &a[2][..]], offset);
                    let u = vectors_in([&w[0][..], &w[1][..], &w[2][..]], offset);
                    Accumulator::begin(Op::Binary(K::cross, u), v)
                        .end_reduce(ReduceOp::Unary(K::lengths), as_out(&mut out, offset));
                }
                black_box(&out);
            });
        });

        let va = to_aos(&a);
        let vw = to_aos(&w);
        group.bench_with_input(BenchmarkId::new("aos_scalar", len), &(&va, &vw), |b, (va, vw)| {
            let mut out = vec![0.0f32; len];
            b.iter(|| {
                for ((v, u), o) in va.iter().zip(vw.iter()).zip(out.iter_mut()) {
                    let c = [
                        v[1] * u[2] - v[2] * u[1],
                        v[2] * u[0] - v[0] * u[2],
                        v[0] * u[1] - v[1] * u[0],
                    ];
                    *o = (c[0] * c[0] + c[1] * c[1] + c[2] * c[2]).sqrt();
                }
                black_box(&out);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_cross_length_chain);
criterion_main!(benches);
