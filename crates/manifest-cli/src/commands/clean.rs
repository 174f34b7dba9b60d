//! Clean command implementation
//!
//! Best-effort removal of generated artifacts. Failures are reported per
//! path but never change the exit code: cleaning always succeeds overall.

use std::path::Path;

use colored::Colorize;
use manifest_core::{CleanStatus, clean_artifacts};

use crate::error::Result;

/// Run the cleaner for the given output path.
pub fn run_clean(output: &Path) -> Result<()> {
    let reports = clean_artifacts(output);
    if reports.is_empty() {
        println!("No generated files found to remove.");
        return Ok(());
    }

    println!("Removed files:");
    for report in reports {
        match report.status {
            CleanStatus::Removed => {
                println!(" - {}: {}", report.path.display(), "OK".green());
            }
            CleanStatus::Failed(e) => {
                eprintln!("Failed to remove {}: {}", report.path.display(), e);
                println!(" - {}: {}", report.path.display(), "FAILED".red());
            }
        }
    }
    Ok(())
}
