//! Build script for chart-covid-andalucia.
//!
//! Copies the snapshot written by `cva-cli fetch -o fixtures/observations.csv`
//! into `OUT_DIR` so `main.rs` can embed it. Without a snapshot an empty file
//! is embedded and the app shows an error instead of charts.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let snapshot_src = Path::new("../fixtures/observations.csv");
    let snapshot_dest = Path::new(&out_dir).join("observations.csv");

    if snapshot_src.exists() {
        fs::copy(snapshot_src, &snapshot_dest).unwrap();
    } else {
        fs::write(&snapshot_dest, "").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/observations.csv");
}
