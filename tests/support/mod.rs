#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// The content directory shipped with the repository.
pub fn shipped_data_dir() -> PathBuf {
    repo_root().join("data")
}

pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "catalog-query" => env!("CARGO_BIN_EXE_catalog-query"),
        "project-show" => env!("CARGO_BIN_EXE_project-show"),
        "catalog-stats" => env!("CARGO_BIN_EXE_catalog-stats"),
        other => panic!("unknown helper binary {other}"),
    };
    PathBuf::from(path)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_json(output: &Output) -> Result<Value> {
    serde_json::from_slice(&output.stdout).context("helper stdout is not JSON")
}

/// Write `projects` (and optionally a page config) into `dir`.
pub fn write_data_dir(dir: &Path, projects: &Value, page: Option<&Value>) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("projects.json"), serde_json::to_vec_pretty(projects)?)?;
    if let Some(page) = page {
        fs::write(dir.join("projects-page.json"), serde_json::to_vec_pretty(page)?)?;
    }
    Ok(())
}
