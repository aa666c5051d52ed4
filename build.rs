use std::env;
use std::path;

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed=device_kernels");

    let manifest_dir = path::PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    // Kernel sources are read at runtime; point the crate at its own copy.
    println!(
        "cargo::rustc-env=DEVICE_KERNELS_DIR={}",
        manifest_dir.join("device_kernels").display()
    );
}
