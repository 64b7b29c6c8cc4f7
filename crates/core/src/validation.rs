//! Payload validation primitives.
//!
//! Request bodies arrive as raw JSON. [`PayloadReader`] pulls typed fields
//! out of the body and records a [`FieldViolation`] for every field that is
//! missing or has the wrong JSON type. Content rules (for example "must not
//! be empty") are declared on the payload structs with `validator` and are
//! merged in by [`PayloadReader::check`], so a caller always gets the full
//! list of problems in one response.

use serde::Serialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

/// A single field-level violation reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// JSON field name as the client sent it (camelCase), or `body`.
    pub field: String,
    /// Machine-readable code: `required`, `invalid_type`, `length`, `invalid_value`.
    pub code: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Reads typed fields from a JSON body while collecting violations.
pub struct PayloadReader<'a> {
    fields: Option<&'a Map<String, Value>>,
    violations: Vec<FieldViolation>,
}

impl<'a> PayloadReader<'a> {
    pub fn new(body: &'a Value) -> Self {
        let fields = body.as_object();
        let mut violations = Vec::new();
        if fields.is_none() {
            violations.push(FieldViolation::new(
                "body",
                "invalid_type",
                format!("Expected object, received {}", json_kind(body)),
            ));
        }
        Self { fields, violations }
    }

    /// A string that must be present and non-null.
    pub fn required_string(&mut self, field: &str) -> Option<String> {
        match self.fields?.get(field) {
            None | Some(Value::Null) => {
                self.missing(field);
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.wrong_type(field, "string", other);
                None
            }
        }
    }

    /// A string that may be absent; `null` counts as absent.
    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.fields?.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.wrong_type(field, "string", other);
                None
            }
        }
    }

    /// An entity id: a JSON integer that fits in an `i64`.
    pub fn required_id(&mut self, field: &str) -> Option<DbId> {
        match self.fields?.get(field) {
            None | Some(Value::Null) => {
                self.missing(field);
                None
            }
            Some(Value::Number(n)) if n.as_i64().is_some() => n.as_i64(),
            Some(other) => {
                self.wrong_type(field, "integer", other);
                None
            }
        }
    }

    /// Record a violation found by the caller.
    pub fn reject(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// Run the `validator` rules declared on `draft`.
    ///
    /// Fields that already failed a presence or type check are skipped so
    /// each field is reported once.
    pub fn check<T: Validate>(&mut self, draft: &T) {
        if self.fields.is_none() {
            return;
        }
        if let Err(errors) = draft.validate() {
            self.merge(&errors);
        }
    }

    /// Return `value` if nothing was rejected, otherwise every violation.
    pub fn finish<T>(self, value: T) -> Result<T, CoreError> {
        if self.violations.is_empty() {
            Ok(value)
        } else {
            Err(CoreError::Validation(self.violations))
        }
    }

    fn merge(&mut self, errors: &ValidationErrors) {
        let mut found = Vec::new();
        for (field, errs) in errors.field_errors() {
            let field = json_field_name(&field);
            if self.violations.iter().any(|v| v.field == field) {
                continue;
            }
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map_or_else(|| format!("Invalid value for {field}"), |m| m.to_string());
                found.push(FieldViolation::new(field.clone(), err.code.to_string(), message));
            }
        }
        // field_errors() is a HashMap; keep the output stable.
        found.sort_by(|a, b| a.field.cmp(&b.field));
        self.violations.extend(found);
    }

    fn missing(&mut self, field: &str) {
        self.violations
            .push(FieldViolation::new(field, "required", "Required"));
    }

    fn wrong_type(&mut self, field: &str, expected: &str, got: &Value) {
        self.violations.push(FieldViolation::new(
            field,
            "invalid_type",
            format!("Expected {expected}, received {}", json_kind(got)),
        ));
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// `wants_to_learn` -> `wantsToLearn`. Already-camel names pass through.
fn json_field_name(rust_name: &str) -> String {
    let mut out = String::with_capacity(rust_name.len());
    let mut upper_next = false;
    for ch in rust_name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
