//! Work-group partition for the pi integration.
//!
//! The kernel sums `niters` steps per work-item and reduces one partial sum per
//! work-group, so the number of groups is chosen such that
//! `groups * work_group_size * niters` is as close to the requested step count
//! as integer division allows.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
  pub work_groups: usize,
  pub work_group_size: usize,
  pub niters: usize,
  /// Steps actually integrated; may be fewer than requested.
  pub steps: usize,
}

impl Partition {
  /// `work_group_size` is the kernel's maximum for the device, `compute_units`
  /// the device's compute-unit count used when the problem is too small to
  /// fill even one full-sized group.
  pub fn new(in_nsteps: usize, niters: usize, work_group_size: usize, compute_units: usize) -> Self {
    let niters = niters.max(1);
    let mut work_group_size = work_group_size.max(1);
    let mut work_groups = in_nsteps / (work_group_size * niters);

    if work_groups < 1 {
      work_groups = compute_units.max(1);
      work_group_size = (in_nsteps / (work_groups * niters)).max(1);
    }

    Self { work_groups, work_group_size, niters, steps: work_group_size * niters * work_groups }
  }

  pub fn step_size(&self) -> f32 {
    1.0 / self.steps as f32
  }

  pub fn global_size(&self) -> usize {
    self.steps / self.niters
  }

  pub fn local_size(&self) -> usize {
    self.work_group_size
  }

  /// Bytes of `__local` scratch, one float per work-item.
  pub fn local_mem_bytes(&self) -> usize {
    self.work_group_size * std::mem::size_of::<f32>()
  }
}
