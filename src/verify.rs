//! Checks device results against host-computed references.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
  pub index: usize,
  pub expected: f32,
  pub actual: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
  pub correct: usize,
  pub total: usize,
  pub mismatches: Vec<Mismatch>,
}

impl Tally {
  pub fn all_correct(&self) -> bool {
    self.correct == self.total
  }
}

/// Element `i` is correct when its squared deviation is below `tol²`.
pub fn count_correct(expected: &[f32], actual: &[f32], tol: f32) -> Tally {
  let mut tally = Tally { total: expected.len(), ..Tally::default() };
  for (index, (&expected, &actual)) in expected.iter().zip(actual).enumerate() {
    let tmp = expected - actual;
    if tmp * tmp < tol * tol {
      tally.correct += 1;
    } else {
      tally.mismatches.push(Mismatch { index, expected, actual });
    }
  }
  // Missing elements count against the tally rather than being skipped.
  tally.mismatches.extend(
    expected
      .iter()
      .enumerate()
      .skip(actual.len())
      .map(|(index, &expected)| Mismatch { index, expected, actual: f32::NAN }),
  );
  tally
}

/// Sum of squared deviations of `c` from the constant product `order * a_val * b_val`.
pub fn matrix_error(order: usize, c: &[f32], a_val: f32, b_val: f32) -> f32 {
  let cval = order as f32 * a_val * b_val;
  c.iter().map(|&v| (v - cval) * (v - cval)).sum()
}

#[derive(Debug, Clone, Copy)]
pub struct MatmulResult {
  pub run_time: Duration,
  pub mflops: f64,
  pub errsq: f32,
}

impl MatmulResult {
  pub fn new(order: usize, c: &[f32], a_val: f32, b_val: f32, run_time: Duration) -> Self {
    let n = order as f64;
    let mflops = 2.0 * n * n * n / (1_000_000.0 * run_time.as_secs_f64());
    Self { run_time, mflops, errsq: matrix_error(order, c, a_val, b_val) }
  }

  pub fn passed(&self, tol: f32) -> bool {
    !self.errsq.is_nan() && self.errsq <= tol
  }

  pub fn print(&self, tol: f32) {
    println!(" {:.2} seconds at {:.1} MFLOPS ", self.run_time.as_secs_f64(), self.mflops);
    if !self.passed(tol) {
      println!("\n Errors in multiplication: {}", self.errsq);
    }
  }
}
