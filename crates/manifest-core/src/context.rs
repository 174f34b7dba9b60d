//! Substitution context assembly
//!
//! The context is the key-value mapping available for template substitution:
//! the parsed JSON config augmented with computed fields (`date`, and later
//! the rendered `results` string). It is built fresh on every run and has no
//! persistence beyond it.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// The substitution context. Insertion-ordered: `serde_json` is built with
/// `preserve_order`, so keys iterate in config-file order.
pub type Context = Map<String, Value>;

/// Context key for the generation date.
pub const DATE_KEY: &str = "date";

/// Load the initial context from an optional JSON config file.
///
/// With no path the context is empty. An explicit path must exist and parse
/// as a JSON object; anything else aborts the run before output is written.
pub fn load(path: Option<&Path>) -> Result<Context> {
    let Some(path) = path else {
        return Ok(Context::new());
    };
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value = serde_json::from_str(&raw).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    match value {
        Value::Object(map) => {
            debug!(path = %path.display(), keys = map.len(), "loaded config");
            Ok(map)
        }
        other => Err(Error::ConfigParse {
            path: path.to_path_buf(),
            message: format!("expected a JSON object at the top level, got {}", json_type_name(&other)),
        }),
    }
}

/// Insert the current local date (`YYYY-MM-DD`) when the config supplied none.
pub fn apply_date_default(ctx: &mut Context) {
    if !ctx.contains_key(DATE_KEY) {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        debug!(%today, "config has no 'date', defaulting");
        ctx.insert(DATE_KEY.to_string(), Value::String(today));
    }
}

/// Human-readable name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
