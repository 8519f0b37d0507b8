#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with HOME pointed at a scratch directory, so a real user
/// config never leaks into the tests.
pub fn rpl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rpainlog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rpainlog");
    cmd.env("HOME", home).env_remove("RPAINLOG_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpainlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema at `db_path` without writing a config file.
pub fn init_db(db_path: &str) {
    rpl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one entry with explicit date and time.
pub fn add(db_path: &str, level: &str, date: &str, time: &str, note: &str) {
    rpl()
        .args([
            "--db", db_path, "add", level, "--date", date, "--time", time, "--note", note,
        ])
        .assert()
        .success();
}
