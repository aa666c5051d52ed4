use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ocl_exercises::cpu;

fn bench_sdot(c: &mut Criterion) {
  let mut group = c.benchmark_group("seq_mat_mul_sdot");
  group.sample_size(10);
  for n in [128usize, 256, 512] {
    let (a, b, mut out) = (vec![3.0f32; n * n], vec![5.0f32; n * n], vec![0.0f32; n * n]);
    group.throughput(Throughput::Elements((2 * n * n * n) as u64));
    group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
      bench.iter(|| cpu::seq_mat_mul_sdot(n, black_box(&a), black_box(&b), &mut out))
    });
  }
  group.finish();
}

fn bench_vadd_chain(c: &mut Criterion) {
  let v = vec![0.25f32; 1024];
  c.bench_function("vadd_chain_1024", |bench| bench.iter(|| cpu::vadd_chain(black_box(&v), &v, &v, &v)));
}

criterion_group!(benches, bench_sdot, bench_vadd_chain);
criterion_main!(benches);
