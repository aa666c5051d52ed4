pub fn vadd_chain(a: &[f32], b: &[f32], e: &[f32], g: &[f32]) -> Vec<f32> {
  a.iter().zip(b).zip(e).zip(g).map(|(((a, b), e), g)| a + b + e + g).collect()
}

/// Row-major `c = a * b` for square matrices of order `n`, one dot product per element.
pub fn seq_mat_mul_sdot(n: usize, a: &[f32], b: &[f32], c: &mut [f32]) {
  for i in 0..n {
    for j in 0..n {
      let mut tmp = 0.0f32;
      for k in 0..n {
        tmp += a[i * n + k] * b[k * n + j];
      }
      c[i * n + j] = tmp;
    }
  }
}

pub fn pi_integrate(steps: usize) -> f32 {
  let step_size = 1.0 / steps as f64;
  let sum: f64 = (0..steps)
    .map(|i| {
      let x = (i as f64 + 0.5) * step_size;
      4.0 / (1.0 + x * x)
    })
    .sum();
  (sum * step_size) as f32
}
