//! Results section formatting
//!
//! The config's `results` value is a mapping of category name to an ordered
//! list of `{file, desc}` entries. It is validated and rendered into a
//! numbered Markdown block before placeholder substitution runs, and the
//! rendered string replaces the raw value in the context. Validation is
//! all-or-nothing: the first malformed category or entry aborts the run.

use serde_json::Value;
use tracing::debug;

use crate::context::{Context, json_type_name};
use crate::error::{Error, Result};
use crate::template::scalar_str;

/// Context key for the structured results section.
pub const RESULTS_KEY: &str = "results";

/// Validate the context's `results` value and render it as Markdown.
///
/// Categories become 1-based `## N. name` headings in mapping order; each
/// entry becomes an indented `M. [file](file): desc` line, and every category
/// block ends with a blank line.
pub fn render(ctx: &Context) -> Result<String> {
    let raw = ctx
        .get(RESULTS_KEY)
        .ok_or(Error::MissingRequiredField { field: RESULTS_KEY })?;
    debug!(?raw, "raw results");

    let categories = raw
        .as_object()
        .ok_or_else(|| Error::shape("results must be a nested object"))?;

    let mut rendered = String::new();
    for (chapter, (name, value)) in categories.iter().enumerate() {
        let entries = value.as_array().ok_or_else(|| {
            Error::shape(format!(
                "result '{}' must be an array, got {}",
                name,
                json_type_name(value)
            ))
        })?;

        rendered.push_str(&format!("## {}. {}\n", chapter + 1, name));
        for (i, entry) in entries.iter().enumerate() {
            let line = render_entry(name, i + 1, entry)?;
            rendered.push_str(&line);
        }
        rendered.push('\n');
    }
    Ok(rendered)
}

fn render_entry(category: &str, index: usize, entry: &Value) -> Result<String> {
    let fields = entry.as_object().ok_or_else(|| Error::InvalidResultEntry {
        category: category.to_string(),
        index,
        message: format!("contains a non-object entry ({})", json_type_name(entry)),
    })?;
    let field = |name: &'static str| {
        fields.get(name).ok_or_else(|| Error::InvalidResultEntry {
            category: category.to_string(),
            index,
            message: format!("contains an entry without a '{name}' property"),
        })
    };
    let file = scalar_str(field("file")?);
    let desc = scalar_str(field("desc")?);
    Ok(format!("  {index}. [{file}]({file}): {desc}\n"))
}
