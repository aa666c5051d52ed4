//! Problem sizes and tolerances for each exercise.

use std::env;
use std::path::PathBuf;

/// Overrides the directory kernel sources are loaded from.
pub const KERNEL_DIR_VAR: &str = "OCL_KERNEL_DIR";

/// Directory holding the `.cl` sources: `$OCL_KERNEL_DIR`, else the crate's
/// own `device_kernels/`.
pub fn kernel_dir() -> PathBuf {
  match env::var_os(KERNEL_DIR_VAR) {
    Some(dir) if !dir.is_empty() => PathBuf::from(dir),
    _ => PathBuf::from(env!("DEVICE_KERNELS_DIR")),
  }
}

#[derive(Debug, Clone)]
pub struct VaddChainConfig {
  pub length: usize,
  pub tolerance: f32,
}

impl Default for VaddChainConfig {
  fn default() -> Self {
    Self { length: 1024, tolerance: 0.001 }
  }
}

#[derive(Debug, Clone)]
pub struct MatmulConfig {
  /// Order of the square matrices A, B and C.
  pub order: usize,
  /// Number of times each multiplication is run.
  pub count: usize,
  pub tolerance: f32,
  pub a_val: f32,
  pub b_val: f32,
}

impl Default for MatmulConfig {
  fn default() -> Self {
    Self { order: 1024, count: 1, tolerance: 0.001, a_val: 3.0, b_val: 5.0 }
  }
}

#[derive(Debug, Clone)]
pub struct PiConfig {
  /// Requested integration steps, adjusted to the device's work-group size.
  pub in_nsteps: usize,
  /// Steps integrated by each work-item.
  pub niters: usize,
}

impl Default for PiConfig {
  fn default() -> Self {
    Self { in_nsteps: 512 * 512 * 512, niters: 262_144 }
  }
}
