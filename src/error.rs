use std::path::PathBuf;
use std::process::ExitCode;

use opencl3::error_codes::ClError;
use opencl3::types::cl_int;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("{} ({})", .0, status(.0))]
  Cl(#[from] ClError),

  #[error("program build failed:\n{0}")]
  Build(String),

  #[error("Cannot open file: {}", .path.display())]
  KernelSource {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid device index (try '--list'): {index} of {count} devices")]
  InvalidDeviceIndex { index: usize, count: usize },

  #[error("Invalid device index: {0}")]
  InvalidArgument(String),

  #[error("{name} = {value} does not fit the kernel's integer argument")]
  KernelArgRange { name: &'static str, value: usize },
}

fn status(err: &ClError) -> cl_int {
  err.0
}

impl Error {
  /// The OpenCL status code behind this error, if it came from the runtime.
  pub fn cl_code(&self) -> Option<cl_int> {
    match self {
      Error::Cl(e) => Some(e.0),
      _ => None,
    }
  }

  /// Every failure ends the exercise the same way.
  pub fn exit_code(&self) -> ExitCode {
    ExitCode::FAILURE
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use opencl3::error_codes::CL_INVALID_VALUE;

  #[test]
  fn cl_errors_keep_their_code() {
    let err = Error::from(ClError(CL_INVALID_VALUE));
    assert_eq!(err.cl_code(), Some(CL_INVALID_VALUE));
    assert!(err.to_string().contains(&CL_INVALID_VALUE.to_string()));
  }

  #[test]
  fn cl_errors_render_name_and_code() {
    let err = Error::from(ClError(CL_INVALID_VALUE));
    assert_eq!(err.to_string(), "CL_INVALID_VALUE (-30)");
  }

  #[test]
  fn host_errors_have_no_cl_code() {
    let err = Error::InvalidDeviceIndex { index: 4, count: 2 };
    assert_eq!(err.cl_code(), None);
    assert!(err.to_string().starts_with("Invalid device index (try '--list')"));
  }
}
