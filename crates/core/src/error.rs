// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for mf-core operations.

use thiserror::Error;

use crate::kind::ValueKind;

/// Raised when a call does not match its expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{target} · id {value} must be a {}", expected.type_name())]
    InvalidIdentifierType {
        target: String,
        value: String,
        expected: ValueKind,
    },

    #[error("{target} · The keys \"{}\" are unexpected.", keys.join(","))]
    UnexpectedOptionKeys { target: String, keys: Vec<String> },

    #[error("{target} · options must be an object, got {found}")]
    InvalidOptionsType { target: String, found: ValueKind },

    #[error("invalid value kind: '{0}'\n  hint: valid kinds are: undefined, null, boolean, number, string, array, object")]
    InvalidKind(String),
}

/// All possible errors that can occur in mf-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("shape already registered: {0}")]
    DuplicateShape(String),

    #[error("unknown shape: {0}")]
    UnknownShape(String),
}

/// A specialized Result type for mf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
