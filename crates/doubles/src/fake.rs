// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A fake `sendTrack` that validates its arguments instead of sending.

use mf_core::{Shape, ShapeSet};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::tracker::Tracker;

/// Stateless stand-in for the metrics sender.
///
/// Every call is checked against a [`Shape`]; a mismatch is returned as an
/// error so the calling test fails at the offending call.
#[derive(Debug, Clone)]
pub struct SendTrackFake {
    shape: Shape,
}

impl SendTrackFake {
    pub fn new() -> Self {
        SendTrackFake {
            shape: Shape::send_track(),
        }
    }

    pub fn with_shape(shape: Shape) -> Self {
        SendTrackFake { shape }
    }

    /// Builds a fake from the shape registered for `target`.
    pub fn from_shapes(shapes: &ShapeSet, target: &str) -> Result<Self> {
        Ok(SendTrackFake::with_shape(shapes.get(target)?.clone()))
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Default for SendTrackFake {
    fn default() -> Self {
        SendTrackFake::new()
    }
}

impl Tracker for SendTrackFake {
    fn send_track(&self, id: &Value, opts: Option<&Map<String, Value>>) -> Result<()> {
        if let Err(e) = self.shape.validate(Some(id), opts) {
            tracing::warn!("rejected call: {}", e);
            return Err(e.into());
        }
        tracing::debug!(shape = %self.shape.target, id = %id, "accepted call");
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
