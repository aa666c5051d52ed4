//! End-to-end runs on the first OpenCL device. Run with
//! `cargo test -- --ignored` on a host with an OpenCL platform.

use ocl_exercises::config::{MatmulConfig, PiConfig, VaddChainConfig};
use ocl_exercises::exercises::{matmul, pi, vadd_chain};
use ocl_exercises::{cpu, device, Runtime};

fn first_device() -> Runtime {
  let ids = device::device_ids().unwrap();
  let id = *ids.first().expect("no OpenCL device found");
  Runtime::new(opencl3::device::Device::new(id)).unwrap()
}

#[test]
#[ignore = "requires an OpenCL device"]
fn vadd_chain_adds_all_four_vectors() {
  let rt = first_device();
  let report = vadd_chain::run(&rt, &VaddChainConfig { length: 4096, ..VaddChainConfig::default() }).unwrap();
  assert_eq!(report.tally.total, 4096);
  assert!(report.tally.all_correct(), "{:?}", &report.tally.mismatches[..report.tally.mismatches.len().min(8)]);
}

#[test]
#[ignore = "requires an OpenCL device"]
fn matmul_matches_host_reference() {
  let rt = first_device();
  let config = MatmulConfig { order: 64, count: 2, ..MatmulConfig::default() };
  let report = matmul::run(&rt, &config).unwrap();
  assert_eq!(report.host.len(), 2);
  assert_eq!(report.device.len(), 2);
  assert!(report.host.iter().all(|r| r.passed(config.tolerance)));
  assert!(report.device.iter().all(|r| r.passed(config.tolerance)));
  assert!(report.agreement.all_correct());
}

#[test]
#[ignore = "requires an OpenCL device"]
fn pi_is_close_to_host_integration() {
  let rt = first_device();
  let report = pi::run(&rt, &PiConfig { in_nsteps: 1 << 20, niters: 1024 }).unwrap();
  assert!(report.partition.work_groups >= 1);
  assert!((report.pi - cpu::pi_integrate(report.partition.steps)).abs() < 1e-3);
  assert!((report.pi - std::f32::consts::PI).abs() < 1e-3);
}
