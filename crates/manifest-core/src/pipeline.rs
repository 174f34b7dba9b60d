//! The generation pipeline
//!
//! Ties the stages together: load template and config, apply the date
//! default, validate and render the results section into the context,
//! substitute placeholders, write the output. Fails fast at every stage;
//! nothing reaches the output path until the whole manifest is rendered.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::results::RESULTS_KEY;
use crate::{context, output, results, template};

/// Template used when no `--template` path is given.
pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/manifest.template");

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Where the rendered manifest is written.
    pub output: PathBuf,
    /// Template file; `None` uses the bundled template.
    pub template: Option<PathBuf>,
    /// JSON config file; `None` starts from an empty context.
    pub config: Option<PathBuf>,
}

/// Run the full pipeline, returning the output path on success.
pub fn generate(opts: &GenerateOptions) -> Result<PathBuf> {
    let template_text = load_template(opts.template.as_deref())?;

    let mut ctx = context::load(opts.config.as_deref())?;
    context::apply_date_default(&mut ctx);
    debug!(?ctx, "substitution context");

    let rendered_results = results::render(&ctx)?;
    // The rendered string always replaces the raw value; a raw `results` is
    // never substituted verbatim.
    ctx.insert(RESULTS_KEY.to_string(), Value::String(rendered_results));

    let formatted = template::substitute(&template_text, &ctx)?;
    output::write(&opts.output, &formatted)?;
    Ok(opts.output.clone())
}

fn load_template(path: Option<&Path>) -> Result<String> {
    match path {
        None => Ok(DEFAULT_TEMPLATE.to_string()),
        Some(path) => {
            if !path.exists() {
                return Err(Error::TemplateNotFound {
                    path: path.to_path_buf(),
                });
            }
            fs::read_to_string(path).map_err(|e| Error::io(path, e))
        }
    }
}
