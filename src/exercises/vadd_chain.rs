//! f = a + b + e + g as three chained two-vector additions on the device.

use std::time::{Duration, Instant};

use log::debug;
use opencl3::kernel::{ExecuteKernel, Kernel};
use opencl3::memory::{CL_MEM_READ_WRITE, CL_MEM_WRITE_ONLY};
use opencl3::types::cl_uint;
use rand::Rng;

use crate::config::{self, VaddChainConfig};
use crate::cpu;
use crate::error::Result;
use crate::runtime::{profiled, Runtime};
use crate::source::load_program;
use crate::verify::{count_correct, Tally};

/// Result vectors start out holding this so unwritten elements fail the check.
pub const SENTINEL: f32 = 0xdeadbeef_u32 as f32;

#[derive(Debug)]
pub struct Report {
  pub tally: Tally,
  pub elapsed: Duration,
}

pub fn run(rt: &Runtime, config: &VaddChainConfig) -> Result<Report> {
  let n = config.length;
  let count: cl_uint = super::kernel_arg("length", n)?;
  let mut rng = rand::rng();
  let mut random = || (0..n).map(|_| rng.random::<f32>()).collect::<Vec<f32>>();
  let (h_a, h_b, h_e, h_g) = (random(), random(), random(), random());
  let mut h_f = vec![SENTINEL; n];

  let source = load_program(config::kernel_dir().join("vadd_chain.cl"))?;
  let program = rt.build_program(&source)?;
  let vadd = Kernel::create(&program, "vadd")?;

  let (d_a, d_b, d_e, d_g) = (rt.upload(&h_a)?, rt.upload(&h_b)?, rt.upload(&h_e)?, rt.upload(&h_g)?);
  let d_c = rt.scratch(n, CL_MEM_READ_WRITE)?;
  let d_d = rt.scratch(n, CL_MEM_READ_WRITE)?;
  let d_f = rt.scratch(n, CL_MEM_WRITE_ONLY)?;

  let start = Instant::now();
  // c = a + b, d = e + c, f = g + d
  for (x, y, out) in [(&d_a, &d_b, &d_c), (&d_e, &d_c, &d_d), (&d_g, &d_d, &d_f)] {
    let event = unsafe {
      ExecuteKernel::new(&vadd)
        .set_arg(x)
        .set_arg(y)
        .set_arg(out)
        .set_arg(&count)
        .set_global_work_size(n)
        .enqueue_nd_range(&rt.queue)?
    };
    debug!("vadd kernel: {:?}", profiled(&event)?);
  }
  rt.download(&d_f, &mut h_f)?;
  let elapsed = start.elapsed();

  let expected = cpu::vadd_chain(&h_a, &h_b, &h_e, &h_g);
  let tally = count_correct(&expected, &h_f, config.tolerance);
  for m in &tally.mismatches {
    let i = m.index;
    println!(
      " tmp {:.6} h_a {:.6} h_b {:.6} h_e {:.6} h_g {:.6} h_f {:.6}",
      m.expected - m.actual,
      h_a[i],
      h_b[i],
      h_e[i],
      h_g[i],
      h_f[i]
    );
  }
  println!("C = A + B + E + G:  {} out of {} results were correct.", tally.correct, tally.total);
  println!(" The kernels ran in {:.6} seconds", elapsed.as_secs_f64());

  Ok(Report { tally, elapsed })
}

pub fn main(device_index: usize) -> Result<()> {
  let rt = super::open(device_index)?;
  run(&rt, &VaddChainConfig::default())?;
  Ok(())
}
