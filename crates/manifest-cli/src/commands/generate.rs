//! Generate command implementation

use std::path::Path;

use colored::Colorize;
use manifest_core::GenerateOptions;

use crate::error::Result;

/// Run the generator: render the template against the config and write the
/// output file.
pub fn run_generate(output: &Path, template: Option<&Path>, config: &Path) -> Result<()> {
    let opts = GenerateOptions {
        output: output.to_path_buf(),
        template: template.map(Path::to_path_buf),
        config: Some(config.to_path_buf()),
    };
    let path = manifest_core::generate(&opts)?;
    println!("{} Generated {}", "OK".green().bold(), path.display());
    Ok(())
}
