// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime type tags for dynamically typed call arguments.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// The runtime type of a call argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// The argument was not supplied.
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classifies an argument. `None` means the argument was omitted.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => ValueKind::Undefined,
            Some(Value::Null) => ValueKind::Null,
            Some(Value::Bool(_)) => ValueKind::Boolean,
            Some(Value::Number(_)) => ValueKind::Number,
            Some(Value::String(_)) => ValueKind::String,
            Some(Value::Array(_)) => ValueKind::Array,
            Some(Value::Object(_)) => ValueKind::Object,
        }
    }

    /// Returns true if `value` has this kind.
    pub fn matches(&self, value: Option<&Value>) -> bool {
        ValueKind::of(value) == *self
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl ValueKind {
    /// Name used in identifier messages, e.g. `must be a String`.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "Boolean",
            ValueKind::Number => "Number",
            ValueKind::String => "String",
            ValueKind::Array => "Array",
            ValueKind::Object => "Object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "undefined" => Ok(ValueKind::Undefined),
            "null" => Ok(ValueKind::Null),
            "boolean" | "bool" => Ok(ValueKind::Boolean),
            "number" => Ok(ValueKind::Number),
            "string" => Ok(ValueKind::String),
            "array" => Ok(ValueKind::Array),
            "object" => Ok(ValueKind::Object),
            _ => Err(ShapeError::InvalidKind(s.to_string())),
        }
    }
}

/// Renders an argument for an error message.
///
/// Strings are shown bare, an omitted argument as `undefined`, anything else
/// as compact JSON.
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None => ValueKind::Undefined.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
