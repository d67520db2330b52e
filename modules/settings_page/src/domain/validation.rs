//! JSON Schema validation and coercion of stored settings values

use crate::contract::{QuotesDisplayMode, QuotesDisplayModes, SettingsError};
use jsonschema::Validator;
use serde_json::{json, Value};

/// Schema for "one or more valid display modes"
pub struct QuotesDisplayModesSchema {
    schema: Value,
    validator: Validator,
}

impl QuotesDisplayModesSchema {
    /// Compile the schema from the canonical enumeration
    pub fn new() -> Result<Self, SettingsError> {
        let members: Vec<&str> = QuotesDisplayMode::ALL.iter().map(|m| m.as_str()).collect();
        let schema = json!({
            "type": "array",
            "minItems": 1,
            "items": { "type": "string", "enum": members }
        });

        let validator = Validator::new(&schema).map_err(|e| SettingsError::Validation {
            message: format!("Invalid JSON Schema: {}", e),
        })?;

        Ok(Self { schema, validator })
    }

    /// The schema document
    pub fn json_schema(&self) -> &Value {
        &self.schema
    }

    /// Validate a raw value as a whole; one bad member rejects the sequence
    pub fn validate(&self, data: &Value) -> Result<QuotesDisplayModes, SettingsError> {
        if let Err(error) = self.validator.validate(data) {
            return Err(SettingsError::SchemaValidation {
                errors: vec![error.to_string()],
            });
        }

        let modes = data
            .as_array()
            .into_iter()
            .flatten()
            .map(|item| {
                item.as_str()
                    .unwrap_or_default()
                    .parse::<QuotesDisplayMode>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SettingsError::SchemaValidation { errors: vec![e] })?;

        QuotesDisplayModes::new(modes).ok_or_else(|| SettingsError::SchemaValidation {
            errors: vec!["quotes display modes must not be empty".to_string()],
        })
    }
}

/// Boolean coercion of a stored JSON value.
///
/// `null`, `false`, `0`, `NaN` and `""` are false; every other value is true,
/// including empty arrays and objects.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
