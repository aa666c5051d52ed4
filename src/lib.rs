//! Host-side OpenCL exercises: chained vector addition, naive matrix
//! multiplication and numerical integration of pi.

pub mod cli;
pub mod config;
pub mod cpu;
pub mod device;
pub mod error;
pub mod exercises;
pub mod partition;
pub mod runtime;
pub mod source;
pub mod verify;

pub use error::{Error, Result};
pub use runtime::Runtime;
