// ABOUTME: Variable document loading from YAML files
// ABOUTME: Parses mapping documents into a VariableSet for rendering

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::error::{LoaderError, Result};
use crate::template::VariableSet;

/// Load a variable set from a YAML file
pub fn load_variables<P: AsRef<Path>>(path: P) -> Result<VariableSet> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoaderError::VariablesNotFound {
            path: path.to_path_buf(),
        },
        _ => LoaderError::IoError {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_variables(&content)
}

/// Parse a variable set from a YAML document string
pub fn parse_variables(content: &str) -> Result<VariableSet> {
    let document: JsonValue = serde_yaml::from_str(content)?;

    match document {
        JsonValue::Object(values) => Ok(VariableSet::from(values)),
        JsonValue::Null => Ok(VariableSet::new()),
        other => Err(LoaderError::InvalidDocument(format!(
            "expected a mapping of variable names to values, got {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}
