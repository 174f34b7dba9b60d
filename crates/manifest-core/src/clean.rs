//! Generated-artifact cleanup
//!
//! Cleaning is best-effort: each candidate file that exists is deleted and
//! the outcome recorded per path. A failed deletion is reported but never
//! fails the overall clean. The candidate list currently holds just the
//! output file; further generated side-artifacts would slot in here.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Outcome of one deletion attempt.
#[derive(Debug)]
pub enum CleanStatus {
    Removed,
    Failed(std::io::Error),
}

/// Per-path report from [`clean_artifacts`].
#[derive(Debug)]
pub struct CleanReport {
    pub path: PathBuf,
    pub status: CleanStatus,
}

impl CleanReport {
    pub fn removed(&self) -> bool {
        matches!(self.status, CleanStatus::Removed)
    }
}

/// Delete generated artifacts for the given output path.
///
/// Candidates that do not exist produce no report, so an empty result means
/// there was nothing to remove.
pub fn clean_artifacts(output: &Path) -> Vec<CleanReport> {
    let candidates = [output];

    let mut reports = Vec::new();
    for path in candidates {
        if !path.exists() {
            debug!(path = %path.display(), "candidate absent, skipping");
            continue;
        }
        let status = match fs::remove_file(path) {
            Ok(()) => CleanStatus::Removed,
            Err(e) => CleanStatus::Failed(e),
        };
        reports.push(CleanReport {
            path: path.to_path_buf(),
            status,
        });
    }
    reports
}
