#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwh() -> Command {
    let mut cmd = cargo_bin_cmd!("rworkhours");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Unique config path inside the system temp dir, removed if already present
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Config file with the given YAML content
pub fn write_test_config(name: &str, yaml: &str) -> String {
    let cfg_path = setup_test_config(name);
    fs::write(&cfg_path, yaml).expect("write test config");
    cfg_path
}

/// Arguments for Mon 2025-10-27 09:00 -> Fri 2025-10-31 17:00
pub fn reference_week() -> Vec<&'static str> {
    vec![
        "--start-date",
        "2025-10-27",
        "--start-time",
        "09:00",
        "--end-date",
        "2025-10-31",
        "--end-time",
        "17:00",
    ]
}
