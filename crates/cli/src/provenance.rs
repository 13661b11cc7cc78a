//! Sidecar records for batch outputs.
//!
//! `geometria-cli run --input shapes.csv --out out/shapes.json` also writes
//! `out/shapes.provenance.json`, which names the code revision, the library
//! version, and the row counts of the run that produced the artifact.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::report::RowReport;

/// Source location of the code that asked for the sidecar.
#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Row accounting for one `run` invocation.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub command: &'static str,
    pub input: String,
    pub rows: usize,
    pub rejected: usize,
}

impl RunSummary {
    /// Count rows and rejected rows (those carrying an error) in `reports`.
    pub fn from_reports(input: &Path, reports: &[RowReport]) -> Self {
        Self {
            command: "run",
            input: input.to_string_lossy().into_owned(),
            rows: reports.len(),
            rejected: reports.iter().filter(|r| r.error.is_some()).count(),
        }
    }
}

/// The sidecar document. `P` is the command-specific parameter block.
#[derive(Debug, Serialize)]
pub struct Sidecar<P: Serialize> {
    pub code_rev: String,
    pub tool_version: &'static str,
    pub callsite: Callsite,
    pub params: P,
    pub outputs: Vec<String>,
}

impl<P: Serialize> Sidecar<P> {
    #[track_caller]
    pub fn new(params: P, outputs: Vec<String>) -> Self {
        let caller = Location::caller();
        Self {
            code_rev: code_rev(),
            tool_version: geometria::VERSION,
            callsite: Callsite {
                file: caller.file(),
                line: caller.line(),
            },
            params,
            outputs,
        }
    }
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: Serialize>(artifact: &Path, params: P) -> Result<PathBuf> {
    let doc = Sidecar::new(params, vec![artifact.to_string_lossy().into_owned()]);
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(sidecar = %path.display(), code_rev = %doc.code_rev, "sidecar_written");
    Ok(path)
}

/// `dir/name.ext` -> `dir/name.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn code_rev() -> String {
    let baked = option_env!("GIT_COMMIT").map(str::to_owned);
    let runtime = std::env::var("GIT_COMMIT").ok();
    baked
        .into_iter()
        .chain(runtime)
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_owned())
}
