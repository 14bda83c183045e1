//! Build script: linker arguments only.

fn main() {
    compiler_instructions();
}

/// Linker arguments needed for print_ws to be a nostd, nolibc program.
fn compiler_instructions() {
    for bin in ["print_ws"] {
        println!("cargo:rustc-link-arg-bin={bin}=-nostartfiles");
        println!("cargo:rustc-link-arg-bin={bin}=-nostdlib");
        println!("cargo:rustc-link-arg-bin={bin}=-static");
        println!("cargo:rustc-link-arg-bin={bin}=-no-pie");
    }
}
