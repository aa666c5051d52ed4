//! Command line shared by every exercise binary.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

use crate::device;
use crate::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(about = "Run an OpenCL exercise on the selected device", long_about = None)]
struct Args {
  /// List available devices
  #[arg(long)]
  list: bool,

  /// Select device at INDEX
  #[arg(long, value_name = "INDEX", default_value_t = 0)]
  device: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
  Run { device_index: usize },
  List,
  Help(String),
}

pub fn parse_from<I, T>(args: I) -> Result<Invocation>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  match Args::try_parse_from(args) {
    Ok(Args { list: true, .. }) => Ok(Invocation::List),
    Ok(Args { device, .. }) => Ok(Invocation::Run { device_index: device }),
    Err(e) if e.kind() == ErrorKind::DisplayHelp => Ok(Invocation::Help(e.render().to_string())),
    Err(e) => Err(Error::InvalidArgument(e.to_string())),
  }
}

pub fn init_logging() {
  let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init();
}

/// Entry point of each exercise binary: parse the command line, then list
/// devices, print usage or run `exercise` on the chosen device.
pub fn run_main<F>(exercise: F) -> ExitCode
where
  F: FnOnce(usize) -> Result<()>,
{
  init_logging();
  let outcome = parse_from(std::env::args_os()).and_then(|invocation| match invocation {
    Invocation::List => device::list_devices().map(|devices| device::print_list(&devices)),
    Invocation::Help(text) => {
      println!("{text}");
      Ok(())
    }
    Invocation::Run { device_index } => exercise(device_index),
  });

  match outcome {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      debug!("{e:?}");
      report(&e);
      e.exit_code()
    }
  }
}

fn report(e: &Error) {
  match e {
    Error::InvalidArgument(msg) => {
      println!("Invalid device index");
      eprint!("{msg}");
    }
    Error::InvalidDeviceIndex { .. } => println!("Invalid device index (try '--list')"),
    Error::KernelSource { .. } | Error::KernelArgRange { .. } => println!("{e}"),
    Error::Cl(_) | Error::Build(_) => {
      println!("Exception");
      eprintln!("ERROR: {e}");
    }
  }
}
