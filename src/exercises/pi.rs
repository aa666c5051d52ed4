//! Numerical integration of 4/(1+x²) over [0,1], reduced per work-group on the
//! device and summed on the host.

use std::f32::consts::PI;
use std::time::{Duration, Instant};

use log::{debug, info};
use opencl3::kernel::{ExecuteKernel, Kernel};
use opencl3::memory::CL_MEM_WRITE_ONLY;
use opencl3::types::cl_int;

use crate::config::{self, PiConfig};
use crate::error::Result;
use crate::partition::Partition;
use crate::runtime::{profiled, Runtime};
use crate::source::load_program;

#[derive(Debug)]
pub struct Report {
  pub partition: Partition,
  pub pi: f32,
  pub elapsed: Duration,
}

pub fn run(rt: &Runtime, config: &PiConfig) -> Result<Report> {
  let source = load_program(config::kernel_dir().join("pi_ocl.cl"))?;
  let program = rt.build_program(&source)?;
  let kernel = Kernel::create(&program, "pi")?;

  let work_group_size = kernel.get_work_group_size(rt.device.id())?;
  let compute_units = rt.device.max_compute_units()? as usize;
  let partition = Partition::new(config.in_nsteps, config.niters, work_group_size, compute_units);
  info!("kernel work-group size {work_group_size}, {compute_units} compute units: {partition:?}");

  println!(
    " {} work groups of size {}.  {} Integration steps",
    partition.work_groups, partition.work_group_size, partition.steps
  );

  let d_partial_sums = rt.scratch(partition.work_groups, CL_MEM_WRITE_ONLY)?;
  let mut h_psum = vec![0.0f32; partition.work_groups];
  let niters: cl_int = super::kernel_arg("niters", partition.niters)?;
  let step_size = partition.step_size();

  let start = Instant::now();
  let event = unsafe {
    ExecuteKernel::new(&kernel)
      .set_arg(&niters)
      .set_arg(&step_size)
      .set_arg_local_buffer(partition.local_mem_bytes())
      .set_arg(&d_partial_sums)
      .set_global_work_size(partition.global_size())
      .set_local_work_size(partition.local_size())
      .enqueue_nd_range(&rt.queue)?
  };
  rt.download(&d_partial_sums, &mut h_psum)?;
  let pi = h_psum.iter().sum::<f32>() * step_size;
  let elapsed = start.elapsed();
  debug!("pi kernel: {:?}", profiled(&event)?);

  println!("\nThe calculation ran in {:.6} seconds", elapsed.as_secs_f64());
  println!(" pi = {pi:.6} for {} steps", partition.steps);
  info!("absolute error {:e}", (pi - PI).abs());

  Ok(Report { partition, pi, elapsed })
}

pub fn main(device_index: usize) -> Result<()> {
  let rt = super::open(device_index)?;
  run(&rt, &PiConfig::default())?;
  Ok(())
}
