// hello/build.rs
use std::path::PathBuf;

fn main() {
    let target = std::env::var("TARGET").unwrap_or_default();

    // Only use linker script for riscv target (the actual program), not for host tests
    if target.contains("riscv") {
        println!("cargo:rerun-if-changed=memory.ld");

        let script = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap()).join("memory.ld");

        println!("cargo:rustc-link-arg-bins=-T{}", script.display());
        println!("cargo:rustc-link-arg-bins=-Map=hello.map");
    }
}
