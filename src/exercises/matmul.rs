//! Naive C = A * B, one work-item per element of C, timed against the host.

use std::time::Instant;

use log::debug;
use opencl3::kernel::{ExecuteKernel, Kernel};
use opencl3::memory::CL_MEM_WRITE_ONLY;
use opencl3::types::cl_int;

use crate::config::MatmulConfig;
use crate::cpu;
use crate::error::Result;
use crate::runtime::{profiled, Runtime};
use crate::verify::{count_correct, MatmulResult, Tally};

static MMUL_SOURCE: &str = include_str!("../../device_kernels/mmul.cl");

#[derive(Debug)]
pub struct Report {
  pub host: Vec<MatmulResult>,
  pub device: Vec<MatmulResult>,
  /// Last device product compared elementwise with the host product.
  pub agreement: Tally,
}

pub fn run(rt: &Runtime, config: &MatmulConfig) -> Result<Report> {
  let n = config.order;
  let order: cl_int = super::kernel_arg("order", n)?;
  let size = n * n;
  let (h_a, h_b, mut h_c) = (vec![config.a_val; size], vec![config.b_val; size], vec![0.0f32; size]);
  let (mut host, mut device) = (Vec::with_capacity(config.count), Vec::with_capacity(config.count));

  println!("\n===== Sequential, matrix mult (dot prod), order {n} on host CPU ======");
  for _ in 0..config.count {
    h_c.fill(0.0);
    let start = Instant::now();
    cpu::seq_mat_mul_sdot(n, &h_a, &h_b, &mut h_c);
    let result = MatmulResult::new(n, &h_c, config.a_val, config.b_val, start.elapsed());
    result.print(config.tolerance);
    host.push(result);
  }
  let reference = h_c.clone();

  let d_a = rt.upload(&h_a)?;
  let d_b = rt.upload(&h_b)?;
  let d_c = rt.scratch(size, CL_MEM_WRITE_ONLY)?;

  let program = rt.build_program(MMUL_SOURCE)?;
  let mmul = Kernel::create(&program, "mmul")?;

  println!("\n===== OpenCL, matrix mult, C(i,j) per work item, order {n} ======");
  for _ in 0..config.count {
    h_c.fill(0.0);
    let start = Instant::now();
    // No local size: the runtime picks the work-group shape.
    let event = unsafe {
      ExecuteKernel::new(&mmul)
        .set_arg(&order)
        .set_arg(&d_a)
        .set_arg(&d_b)
        .set_arg(&d_c)
        .set_global_work_sizes(&[n, n])
        .enqueue_nd_range(&rt.queue)?
    };
    rt.finish()?;
    let run_time = start.elapsed();
    debug!("mmul kernel: {:?}", profiled(&event)?);

    rt.download(&d_c, &mut h_c)?;
    let result = MatmulResult::new(n, &h_c, config.a_val, config.b_val, run_time);
    result.print(config.tolerance);
    device.push(result);
  }

  let agreement = count_correct(&reference, &h_c, config.tolerance);
  Ok(Report { host, device, agreement })
}

pub fn main(device_index: usize) -> Result<()> {
  let rt = super::open(device_index)?;
  run(&rt, &MatmulConfig::default())?;
  Ok(())
}
