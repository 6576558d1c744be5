//! Config file validation.
//!
//! Steps run in order; the first four stop at their first failure:
//! read, empty check, syntax parse, structural parse. Unknown-key warnings and
//! schema errors after that are collected independently.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use crate::error::{AdoError, AdoResult};

use super::result::{ValidationIssue, ValidationResult};
use super::schema::{is_known_key, required_keys, ConfigSchema, SUPPORTED_VERSION};
use super::suggest::suggest_key;
use super::tree::{find_key_line, parse_tree};

/// Validate the config file at `path`.
///
/// Missing files, permission problems, bad YAML and schema violations are reported
/// inside the returned result. `Err` is reserved for other read failures.
pub fn validate(path: &Path) -> AdoResult<ValidationResult> {
    let shown = path.display().to_string();

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %shown, "config file not found");
            return Ok(ValidationResult::from_issues(
                shown.clone(),
                [ValidationIssue::error(format!(
                    "config file not found: {:?}",
                    shown
                ))],
            ));
        }
        Err(err) if err.kind() == ErrorKind::PermissionDenied => {
            debug!(path = %shown, "config file not readable");
            return Ok(ValidationResult::from_issues(
                shown.clone(),
                [ValidationIssue::error(format!(
                    "permission denied: {:?}",
                    shown
                ))],
            ));
        }
        Err(source) => {
            return Err(AdoError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    Ok(validate_content(shown, &data))
}

/// Validate config content already read from `path`.
pub fn validate_content(path: impl Into<String>, data: &[u8]) -> ValidationResult {
    let mut result = ValidationResult::new(path);

    if data.is_empty() {
        result.push(ValidationIssue::error("config file is empty"));
        return result;
    }

    let content = match std::str::from_utf8(data) {
        Ok(content) => content,
        Err(err) => {
            result.push(ValidationIssue::error(format!("invalid YAML: {}", err)));
            return result;
        }
    };

    let tree = match parse_tree(content) {
        Ok(tree) => tree,
        Err(err) => {
            debug!(error = %err.message, line = ?err.line, "config syntax error");
            result.push(
                ValidationIssue::error(format!("invalid YAML: {}", err.message)).at_line(err.line),
            );
            return result;
        }
    };

    let document = match ConfigDocument::parse(content) {
        Ok(document) => document,
        Err(message) => {
            debug!(error = %message, "config structure error");
            result.push(ValidationIssue::error(format!(
                "invalid YAML structure: {}",
                message
            )));
            return result;
        }
    };

    // Key text comes from the source, so `0x10` or `~` are reported as written.
    let first_document = tree.first_document();
    for key in tree.top_level_keys() {
        if is_known_key(key) {
            continue;
        }
        let line = first_document.and_then(|root| find_key_line(root, key));
        debug!(key, line = ?line, "unknown config key");
        result.push(
            ValidationIssue::warning(format!("unknown key {:?}", key))
                .at_line(line)
                .with_suggestion(suggest_key(key)),
        );
    }

    let schema = match document.decode() {
        Ok(schema) => schema,
        Err(err) => {
            result.push(ValidationIssue::error(format!(
                "invalid config structure: {}",
                err
            )));
            return result;
        }
    };

    for rule in required_keys() {
        if !schema.is_set(rule.name) {
            result.push(ValidationIssue::error(format!(
                "missing required key {:?}",
                rule.name
            )));
        }
    }

    if let Some(version) = schema.version.filter(|v| *v != 0) {
        if version != SUPPORTED_VERSION {
            result.push(ValidationIssue::error(format!(
                "unsupported config version: {} (expected: {})",
                version, SUPPORTED_VERSION
            )));
        }
    }

    debug!(
        valid = result.is_valid(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "validated config"
    );
    result
}

/// Loosely-typed top-level mapping of the first document, keyed by text.
struct ConfigDocument {
    mapping: Mapping,
}

impl ConfigDocument {
    /// Later documents in a multi-document stream are ignored.
    fn parse(content: &str) -> Result<Self, String> {
        let value = match serde_yaml_ng::Deserializer::from_str(content).next() {
            Some(document) => Value::deserialize(document).map_err(|e| e.to_string())?,
            None => Value::Null,
        };
        let mapping = match value {
            // Comment-only or blank documents decode to null.
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(format!(
                    "expected a mapping at the top level, found {}",
                    describe(&other)
                ))
            }
        };

        let mapping = mapping
            .into_iter()
            .map(|(key, value)| match scalar_text(&key) {
                Some(text) => Ok((Value::String(text), value)),
                None => Err(format!(
                    "top-level keys must be scalars, found {}",
                    describe(&key)
                )),
            })
            .collect::<Result<Mapping, _>>()?;

        Ok(Self { mapping })
    }

    fn decode(self) -> Result<ConfigSchema, serde_yaml_ng::Error> {
        serde_yaml_ng::from_value(Value::Mapping(self.mapping))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        _ => None,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
