use std::process::ExitCode;

use ocl_exercises::{cli, exercises};

fn main() -> ExitCode {
  cli::run_main(exercises::matmul::main)
}
