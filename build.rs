//! Build script for platform-api
//!
//! Embeds the compiler version reported by `/api/v1/details`.
//! Priority: RUSTC_VERSION env var → `$RUSTC --version` → "rustc unknown"

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");
    println!("cargo:rerun-if-env-changed=RUSTC_VERSION");

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let rustc_version = std::env::var("RUSTC_VERSION")
        .ok()
        .or_else(|| {
            Command::new(rustc)
                .arg("--version")
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "rustc unknown".to_string());

    println!("cargo:rustc-env=RUSTC_VERSION={}", rustc_version);
}
