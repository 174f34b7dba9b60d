//! Placeholder substitution engine
//!
//! Scans the template for `{{ key }}` tokens (lazy match up to the first
//! `}}`, whitespace around the key trimmed) and replaces each with the
//! string form of the matching context value. Tokens whose key is absent
//! from the context pass through untouched, so templates may contain literal
//! double-brace text. Substitution is a single pass: a substituted value is
//! never re-scanned for placeholders.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::context::Context;
use crate::error::{Error, Result};

/// Pattern for placeholder tokens. `.` does not cross newlines, so a token
/// must open and close on the same line.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(.+?)\}\}").unwrap());

/// Substitute all known placeholder tokens in `template` from `ctx`.
pub fn substitute(template: &str, ctx: &Context) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in TOKEN.captures_iter(template) {
        let Some(token) = caps.get(0) else { continue };
        let Some(inner) = caps.get(1) else { continue };
        let key = inner.as_str().trim();
        out.push_str(&template[last..token.start()]);
        match ctx.get(key) {
            Some(value) => {
                debug!(token = token.as_str(), key, "substituting");
                out.push_str(&render_value(key, value)?);
            }
            None => {
                debug!(token = token.as_str(), key, "no context value, passing through");
                out.push_str(token.as_str());
            }
        }
        last = token.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

/// Render a context value for insertion into the template.
///
/// Strings render raw (no quotes), null as the empty string, booleans and
/// numbers via their canonical display. Arrays and objects render as compact
/// JSON; a serialization failure there surfaces as a substitution error.
fn render_value(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        compound => serde_json::to_string(compound).map_err(|e| Error::Substitution {
            message: format!("cannot render value for '{key}': {e}"),
        }),
    }
}

/// Infallible string form of a scalar JSON value, shared with the results
/// formatter (where `file`/`desc` are expected to be strings but other
/// scalars are tolerated).
pub(crate) fn scalar_str(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
