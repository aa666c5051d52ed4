use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a kernel source file into a string.
pub fn load_program(path: impl AsRef<Path>) -> Result<String> {
  let path = path.as_ref();
  fs::read_to_string(path).map_err(|source| Error::KernelSource { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config;

  #[test]
  fn loads_bundled_kernels() {
    let src = load_program(config::kernel_dir().join("vadd_chain.cl")).unwrap();
    assert!(src.contains("__kernel void vadd"));
    let src = load_program(config::kernel_dir().join("pi_ocl.cl")).unwrap();
    assert!(src.contains("__kernel void pi"));
  }

  #[test]
  fn missing_file_names_the_path() {
    let err = load_program("no/such/dir/vadd_chain.cl").unwrap_err();
    assert!(matches!(err, Error::KernelSource { .. }));
    assert_eq!(err.to_string(), "Cannot open file: no/such/dir/vadd_chain.cl");
  }
}
