// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mf-core: argument-shape validation for test doubles
//!
//! This crate provides the runtime type tags, the allow-list shape validator
//! and the shape registry used by the doubles in `mf-doubles`.

pub mod error;
pub mod kind;
pub mod registry;
pub mod shape;

pub use error::{Error, Result, ShapeError};
pub use kind::{render_value, ValueKind};
pub use registry::ShapeSet;
pub use shape::{CallRecord, Shape, SEND_TRACK_KEYS, SEND_TRACK_TARGET};
