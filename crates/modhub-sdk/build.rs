fn main() {
    // Stamped into the crate so host and packages can compare the exact
    // toolchain they were built with before any Rust types cross a package
    // boundary.
    let version = rustc_version::version().expect("failed to query rustc version");
    println!("cargo:rustc-env=MODHUB_RUSTC_VERSION={version}");
}
