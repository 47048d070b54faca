//! Response contract validation against `shared/schema.json`.
//!
//! The schema document is the shared source of truth for the verdict shape;
//! the web overlay validates against the same file. It is embedded at build
//! time and compiled once per process.

use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use serde_json::Value;

/// Raw contents of the shared contract document.
pub const SCHEMA_SOURCE: &str = include_str!("../shared/schema.json");

static COMPILED: Lazy<JSONSchema> = Lazy::new(|| {
    let document: Value =
        serde_json::from_str(SCHEMA_SOURCE).expect("shared/schema.json is valid JSON");
    JSONSchema::compile(&document).expect("shared/schema.json compiles")
});

/// Validate an arbitrary payload against the verdict contract.
///
/// Returns `(true, None)` on success, `(false, Some(message))` on any
/// structural violation, with the message naming the offending field or
/// constraint. Pure; never panics on well-typed input. Properties beyond
/// the required seven are permitted.
pub fn validate_verdict(payload: &Value) -> (bool, Option<String>) {
    match COMPILED.validate(payload) {
        Ok(()) => (true, None),
        Err(errors) => {
            let messages: Vec<String> = errors
                .map(|error| {
                    let path = error.instance_path.to_string();
                    if path.is_empty() {
                        error.to_string()
                    } else {
                        format!("{}: {}", path, error)
                    }
                })
                .collect();
            (false, Some(messages.join(" | ")))
        }
    }
}
