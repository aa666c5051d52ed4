//! Device discovery and selection.

use log::debug;
use opencl3::device::{Device, CL_DEVICE_TYPE_ALL};
use opencl3::error_codes::{ClError, CL_DEVICE_NOT_FOUND, CL_PLATFORM_NOT_FOUND_KHR, DLOPEN_RUNTIME_LOAD_FAILED};
use opencl3::platform::get_platforms;
use opencl3::types::cl_device_id;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
  pub index: usize,
  pub name: String,
}

/// No ICD loader could be opened, or the loader found no platforms.
fn runtime_absent(err: &ClError) -> bool {
  matches!(err.0, CL_PLATFORM_NOT_FOUND_KHR | DLOPEN_RUNTIME_LOAD_FAILED)
}

/// Every device of every platform, in platform order. A host without an
/// OpenCL runtime has no devices.
pub fn device_ids() -> Result<Vec<cl_device_id>> {
  let platforms = match get_platforms() {
    Ok(platforms) => platforms,
    Err(e) if runtime_absent(&e) => {
      debug!("no OpenCL runtime: {e}");
      return Ok(Vec::new());
    }
    Err(e) => return Err(e.into()),
  };

  let mut devices = Vec::new();
  for platform in platforms {
    match platform.get_devices(CL_DEVICE_TYPE_ALL) {
      Ok(ids) => {
        debug!("platform {:?}: {} devices", platform.name().unwrap_or_default(), ids.len());
        devices.extend(ids);
      }
      Err(ClError(CL_DEVICE_NOT_FOUND)) => {}
      Err(e) => return Err(e.into()),
    }
  }
  Ok(devices)
}

/// Marketing name of the device; AMD reports the board name separately.
pub fn device_name(device: &Device) -> Result<String> {
  let name = device.name()?;
  if device.vendor()?.contains("Advanced Micro Devices") {
    if let Ok(board) = device.board_name_amd() {
      return Ok(board);
    }
  }
  Ok(name)
}

pub fn list_devices() -> Result<Vec<DeviceEntry>> {
  device_ids()?
    .into_iter()
    .enumerate()
    .map(|(index, id)| Ok(DeviceEntry { index, name: device_name(&Device::new(id))? }))
    .collect()
}

pub fn pick<T>(devices: Vec<T>, index: usize) -> Result<T> {
  let count = devices.len();
  devices.into_iter().nth(index).ok_or(Error::InvalidDeviceIndex { index, count })
}

pub fn select(index: usize) -> Result<Device> {
  pick(device_ids()?, index).map(Device::new)
}

pub fn print_list(devices: &[DeviceEntry]) {
  if devices.is_empty() {
    println!("No devices found.");
    return;
  }
  println!("\nDevices:");
  for d in devices {
    println!("{}: {}", d.index, d.name);
  }
  println!();
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_runtime_means_no_devices() {
    assert!(runtime_absent(&ClError(DLOPEN_RUNTIME_LOAD_FAILED)));
    assert!(runtime_absent(&ClError(CL_PLATFORM_NOT_FOUND_KHR)));
    assert!(!runtime_absent(&ClError(CL_DEVICE_NOT_FOUND)));
  }

  #[test]
  fn enumeration_succeeds_with_or_without_a_runtime() {
    let ids = device_ids();
    assert!(ids.is_ok(), "{:?}", ids.err().and_then(|e| e.cl_code()));
  }

  #[test]
  fn pick_in_range() {
    assert_eq!(pick(vec!["cpu", "gpu"], 1).unwrap(), "gpu");
    assert_eq!(pick(vec!["cpu"], 0).unwrap(), "cpu");
  }

  #[test]
  fn pick_out_of_range() {
    let err = pick(vec!["cpu", "gpu"], 2).unwrap_err();
    assert!(matches!(err, Error::InvalidDeviceIndex { index: 2, count: 2 }));
    assert!(matches!(pick(Vec::<u8>::new(), 0), Err(Error::InvalidDeviceIndex { index: 0, count: 0 })));
  }
}
