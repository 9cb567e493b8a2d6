//! Shared helpers for integration tests.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

#[allow(dead_code)]
pub fn manifest_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
}

/// Path of a shipped demo profile, e.g. `demo_fast_start`.
#[allow(dead_code)]
pub fn demo_profile(name: &str) -> PathBuf {
    manifest_dir().join("profiles").join(format!("{name}.yaml"))
}

#[allow(dead_code)]
pub const DEMO_PROFILES: [&str; 3] = ["demo_fast_start", "demo_low_risk", "demo_max_income"];

/// Run the binary with `args` in `cwd`, logging silenced.
#[allow(dead_code)]
pub fn run_money_map(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_money-map"))
        .args(args)
        .current_dir(cwd)
        .env("RUST_LOG", "off")
        .output()
        .expect("run money-map")
}
