//! Shared helpers for the CLI integration tests.
//!
//! Commands run in-process through `actiontrack_cli::run`. Every test that
//! runs a command is `#[serial]`, because configuration is read from the
//! process environment.

use std::path::{Path, PathBuf};

pub const SESSION: &str = include_str!("../fixtures/session.txt");

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let argv = std::iter::once("actiontrack").chain(args.iter().copied());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = actiontrack_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8(out).expect("utf-8 stdout"),
        stderr: String::from_utf8(err).expect("utf-8 stderr"),
    }
}

pub fn clear_env() {
    unsafe {
        std::env::remove_var("ACTIONTRACK_CONFIG");
        std::env::remove_var("ACTIONTRACK_HERO");
        std::env::remove_var("ACTIONTRACK_DB");
    }
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}
