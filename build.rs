use rustc_version::{version, version_meta, Channel};

// `rustc_nightly` gates the micro benchmarks, which need `#![feature(test)]`.
fn main() {
    let ver = version().unwrap();
    assert!(ver.major >= 1);

    println!("cargo:rerun-if-changed=build.rs");
    if let Channel::Nightly = version_meta().unwrap().channel {
        println!("cargo:rustc-cfg=rustc_nightly");
    }
}
