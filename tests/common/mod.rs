//! Isolated environment for driving the ado binary.
//!
//! Every run gets its own home and config root so nothing on the host leaks in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running an ado CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub home_dir: TempDir,
    pub work_dir: TempDir,
    ado_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().unwrap(),
            work_dir: TempDir::new().unwrap(),
            ado_bin: PathBuf::from(env!("CARGO_BIN_EXE_ado")),
        }
    }

    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// The directory `XDG_CONFIG_HOME` points at during runs.
    pub fn config_root(&self) -> PathBuf {
        self.home_path("xdg")
    }

    pub fn write_home_file(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.home_path(relative), content)
    }

    pub fn write_work_file(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.work_path(relative), content)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.ado_bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("ADO_TEST_HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.config_root())
            .env("NO_COLOR", "1")
            .env("LANG", "en_US.UTF-8")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("ADO_CONFIG")
            .env_remove("ADO_LOG_LEVEL")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ado");
        to_result(output)
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
    path.to_path_buf()
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
