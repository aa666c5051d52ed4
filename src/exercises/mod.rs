//! exercises
//! Each one picks a device, uploads host data, enqueues its kernels, reads the
//! result back and checks it against a host computation.

pub mod matmul;
pub mod pi;
pub mod vadd_chain;

use crate::device;
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// Context and queue on the device at `device_index`.
pub fn open(device_index: usize) -> Result<Runtime> {
  let rt = Runtime::new(device::select(device_index)?)?;
  println!("\nUsing OpenCL device: {}", rt.name);
  Ok(rt)
}

/// `value` as a scalar kernel argument of type `T`.
pub(crate) fn kernel_arg<T: TryFrom<usize>>(name: &'static str, value: usize) -> Result<T> {
  T::try_from(value).map_err(|_| Error::KernelArgRange { name, value })
}

#[cfg(test)]
mod tests {
  use super::*;
  use opencl3::types::{cl_int, cl_uint};

  #[test]
  fn kernel_arg_in_range() {
    assert_eq!(kernel_arg::<cl_int>("order", 1024).unwrap(), 1024);
    assert_eq!(kernel_arg::<cl_uint>("count", u32::MAX as usize).unwrap(), u32::MAX);
  }

  #[test]
  fn kernel_arg_rejects_truncation() {
    let err = kernel_arg::<cl_int>("niters", i32::MAX as usize + 1).unwrap_err();
    assert!(matches!(err, Error::KernelArgRange { name: "niters", .. }));
    assert!(matches!(kernel_arg::<cl_uint>("count", u32::MAX as usize + 1), Err(Error::KernelArgRange { .. })));
  }
}
