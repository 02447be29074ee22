// File: crates/plots-core/build.rs
// Summary: Links the Windows system libraries Skia's font and PDF backends expect.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Skia's Windows font manager reads registry keys (RegOpenKeyExW and friends).
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
