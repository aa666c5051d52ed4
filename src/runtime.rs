//! runtime
//! One context and one in-order queue for the device an exercise runs on.

use std::ptr;
use std::time::Duration;

use log::{debug, info};
use opencl3::command_queue::{CommandQueue, CL_QUEUE_PROFILING_ENABLE};
use opencl3::context::Context;
use opencl3::device::Device;
use opencl3::event::Event;
use opencl3::memory::{Buffer, CL_MEM_READ_ONLY};
use opencl3::program::Program;
use opencl3::types::{cl_float, cl_mem_flags, CL_BLOCKING};

use crate::device::device_name;
use crate::error::{Error, Result};

pub struct Runtime {
  pub device: Device,
  pub name: String,
  pub context: Context,
  pub queue: CommandQueue,
}

impl Runtime {
  pub fn new(device: Device) -> Result<Self> {
    let name = device_name(&device)?;
    info!("using OpenCL device {name}");
    let context = Context::from_device(&device)?;
    let queue = CommandQueue::create_default(&context, CL_QUEUE_PROFILING_ENABLE)?;
    Ok(Self { device, name, context, queue })
  }

  pub fn build_program(&self, source: &str) -> Result<Program> {
    let program = Program::create_and_build_from_source(&self.context, source, "").map_err(Error::Build)?;
    info!("built program for {}", self.name);
    Ok(program)
  }

  /// Read-only device copy of `host`.
  pub fn upload(&self, host: &[cl_float]) -> Result<Buffer<cl_float>> {
    let mut buffer = self.scratch(host.len(), CL_MEM_READ_ONLY)?;
    // Blocking write, `host` outlives the transfer.
    unsafe { self.queue.enqueue_write_buffer(&mut buffer, CL_BLOCKING, 0, host, &[])? };
    Ok(buffer)
  }

  pub fn scratch(&self, len: usize, flags: cl_mem_flags) -> Result<Buffer<cl_float>> {
    debug!("allocating {} bytes", len * std::mem::size_of::<cl_float>());
    let buffer = unsafe { Buffer::<cl_float>::create(&self.context, flags, len, ptr::null_mut())? };
    Ok(buffer)
  }

  pub fn download(&self, buffer: &Buffer<cl_float>, host: &mut [cl_float]) -> Result<()> {
    unsafe { self.queue.enqueue_read_buffer(buffer, CL_BLOCKING, 0, host, &[])? };
    Ok(())
  }

  pub fn finish(&self) -> Result<()> {
    self.queue.finish()?;
    Ok(())
  }
}

/// Device-side execution time of a completed command, from queue profiling.
pub fn profiled(event: &Event) -> Result<Duration> {
  event.wait()?;
  let start = event.profiling_command_start()?;
  let end = event.profiling_command_end()?;
  Ok(Duration::from_nanos(end.saturating_sub(start)))
}
