//! Tool call arguments from the command line
//!
//! The CLI plays the loosely-typed caller: values are handed over as strings
//! and left for the registry to coerce. Only values that look like JSON
//! objects or arrays are parsed, since a shell has no other way to pass a
//! nested amount or a flag list.

use serde_json::Value;
use toolforge_domain::ToolCall;

/// Parse a `key=value` pair (value may itself contain `=`)
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Argument value as sent to the registry
pub fn arg_value(raw: &str) -> Value {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        if let Ok(value) = serde_json::from_str(raw) {
            return value;
        }
    }
    Value::String(raw.to_string())
}

/// Assemble a [`ToolCall`] from positional values and named pairs
pub fn build_call(tool: &str, positional: &[String], named: &[(String, String)]) -> ToolCall {
    let call = positional
        .iter()
        .fold(ToolCall::new(tool), |call, raw| call.with_positional(arg_value(raw)));
    named
        .iter()
        .fold(call, |call, (key, raw)| call.with_arg(key.as_str(), arg_value(raw)))
}
