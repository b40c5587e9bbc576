// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Allow-list validation of call arguments.
//!
//! A [`Shape`] describes how a collaborator expects to be called: the runtime
//! kind of its leading identifier and the closed set of option keys it
//! understands. Validation is fail-fast: the identifier is checked before the
//! options, and the first violated rule is the one reported.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::error::ShapeError;
use crate::kind::{render_value, ValueKind};

/// Target name used in `sendTrack` failure messages.
pub const SEND_TRACK_TARGET: &str = "metricsFake sendTrack";

/// Option keys recognized by `sendTrack`.
pub const SEND_TRACK_KEYS: &[&str] = &["name", "meta", "special"];

/// Expected shape of a `(identifier, options?)` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Name of the called collaborator, used as the error message prefix.
    pub target: String,
    /// Required kind of the identifier argument.
    pub identifier: ValueKind,
    /// Recognized option keys.
    #[serde(default)]
    pub keys: BTreeSet<String>,
}

impl Shape {
    /// Creates a shape that accepts no option keys.
    pub fn new(target: impl Into<String>, identifier: ValueKind) -> Self {
        Shape {
            target: target.into(),
            identifier,
            keys: BTreeSet::new(),
        }
    }

    /// Adds keys to the allow-list.
    pub fn allow<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// The shape of `sendTrack(id: string, { name, meta, special })`.
    pub fn send_track() -> Self {
        Shape::new(SEND_TRACK_TARGET, ValueKind::String).allow(SEND_TRACK_KEYS.iter().copied())
    }

    pub fn is_allowed(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Option keys outside the allow-list, in the order the caller inserted them.
    pub fn unexpected_keys(&self, options: &Map<String, Value>) -> Vec<String> {
        options
            .keys()
            .filter(|key| !self.is_allowed(key))
            .cloned()
            .collect()
    }

    /// Validates a call. An omitted options bag counts as empty.
    pub fn validate(
        &self,
        identifier: Option<&Value>,
        options: Option<&Map<String, Value>>,
    ) -> Result<(), ShapeError> {
        self.check_identifier(identifier)?;
        match options {
            Some(options) => self.check_keys(options),
            None => Ok(()),
        }
    }

    /// Validates a borrowed call record.
    pub fn check(&self, call: &CallRecord<'_>) -> Result<(), ShapeError> {
        self.check_identifier(call.identifier)?;
        match call.options {
            None => Ok(()),
            Some(Value::Object(options)) => self.check_keys(options),
            Some(other) => Err(ShapeError::InvalidOptionsType {
                target: self.target.clone(),
                found: ValueKind::of(Some(other)),
            }),
        }
    }

    /// Validates a positional argument list.
    pub fn validate_args(&self, args: &[Value]) -> Result<(), ShapeError> {
        self.check(&CallRecord::from_args(args))
    }

    fn check_identifier(&self, identifier: Option<&Value>) -> Result<(), ShapeError> {
        if self.identifier.matches(identifier) {
            return Ok(());
        }
        Err(ShapeError::InvalidIdentifierType {
            target: self.target.clone(),
            value: render_value(identifier),
            expected: self.identifier,
        })
    }

    fn check_keys(&self, options: &Map<String, Value>) -> Result<(), ShapeError> {
        let keys = self.unexpected_keys(options);
        if keys.is_empty() {
            return Ok(());
        }
        Err(ShapeError::UnexpectedOptionKeys {
            target: self.target.clone(),
            keys,
        })
    }
}

/// The two logical inputs of a validated call, borrowed for one check.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CallRecord<'a> {
    pub identifier: Option<&'a Value>,
    /// Raw options argument; anything other than an object is rejected.
    pub options: Option<&'a Value>,
}

impl<'a> CallRecord<'a> {
    pub fn new(identifier: &'a Value, options: Option<&'a Value>) -> Self {
        CallRecord {
            identifier: Some(identifier),
            options,
        }
    }

    /// Maps positional arguments: identifier first, options second.
    /// Arguments past the second are ignored.
    pub fn from_args(args: &'a [Value]) -> Self {
        CallRecord {
            identifier: args.first(),
            options: args.get(1),
        }
    }
}

#[cfg(test)]
#[path = "shape_tests.rs"]
mod tests;
