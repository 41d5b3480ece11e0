//! Input schemas and argument validation for tools.
//!
//! A tool's schema is derived from its parameter type with `schemars`. The
//! generated JSON schema is what clients see in `tools/list`; the flattened
//! field list read back out of it is what calls are validated against.

use std::fmt;

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use super::error::{DispatchError, RegistrationError};

/// Primitive argument types a tool may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    String,
}

impl FieldType {
    fn from_json_type(ty: &str) -> Option<Self> {
        match ty {
            "number" | "integer" => Some(Self::Number),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Number => value.is_number(),
            Self::String => value.is_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => f.write_str("number"),
            Self::String => f.write_str("string"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

/// Ordered mapping from argument name to type. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(Field {
            name: name.into(),
            ty,
        });
        self
    }

    /// Generate the JSON schema for `T` and the field list it declares.
    pub fn for_type<T: JsonSchema>(operation: &str) -> Result<(Self, JsonObject), RegistrationError> {
        let generated = schemars::schema_for!(T);
        let json = match serde_json::to_value(&generated) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(RegistrationError::InvalidSchema {
                    operation: operation.to_string(),
                    reason: "schema is not an object".to_string(),
                });
            }
            Err(source) => {
                return Err(RegistrationError::Descriptor {
                    operation: operation.to_string(),
                    source,
                });
            }
        };
        let schema = Self::from_json_schema(operation, &json)?;
        Ok((schema, json))
    }

    /// Read the field list out of an object schema.
    ///
    /// Only flat objects whose properties are numbers or strings, all of them
    /// required, are supported.
    pub fn from_json_schema(operation: &str, json: &JsonObject) -> Result<Self, RegistrationError> {
        let invalid = |reason: String| RegistrationError::InvalidSchema {
            operation: operation.to_string(),
            reason,
        };

        if json.get("type").and_then(Value::as_str) != Some("object") {
            return Err(invalid("input schema must describe an object".to_string()));
        }

        let required: Vec<&str> = json
            .get("required")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut schema = Self::new();
        let Some(properties) = json.get("properties").and_then(Value::as_object) else {
            return Ok(schema);
        };

        for (name, property) in properties {
            let ty = property
                .get("type")
                .and_then(Value::as_str)
                .and_then(FieldType::from_json_type)
                .ok_or_else(|| invalid(format!("field `{}` must be a number or a string", name)))?;
            if !required.contains(&name.as_str()) {
                return Err(invalid(format!("field `{}` must be required", name)));
            }
            schema = schema.field(name.clone(), ty);
        }

        Ok(schema)
    }

    /// Check that every declared argument is present with the right type.
    ///
    /// Undeclared arguments are ignored.
    pub fn validate(&self, operation: &str, args: &JsonObject) -> Result<(), DispatchError> {
        for field in &self.fields {
            match args.get(&field.name) {
                None => {
                    return Err(DispatchError::invalid_argument(
                        operation,
                        &field.name,
                        "required argument is missing",
                    ));
                }
                Some(value) if !field.ty.accepts(value) => {
                    return Err(DispatchError::invalid_argument(
                        operation,
                        &field.name,
                        format!("expected {}, got {}", field.ty, json_type_name(value)),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
