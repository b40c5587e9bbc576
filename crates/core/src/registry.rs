// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory registry of shapes keyed by target name.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::shape::Shape;

/// Registry of shapes keyed by target name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeSet {
    shapes: BTreeMap<String, Shape>,
}

impl ShapeSet {
    /// An empty registry.
    pub fn new() -> Self {
        ShapeSet::default()
    }

    /// A registry holding the built-in `sendTrack` shape.
    pub fn builtin() -> Self {
        let mut set = ShapeSet::new();
        let shape = Shape::send_track();
        set.shapes.insert(shape.target.clone(), shape);
        set
    }

    /// Registers a shape under its target name.
    ///
    /// A target that is already registered, built-in or not, is rejected.
    pub fn insert(&mut self, shape: Shape) -> Result<()> {
        if self.shapes.contains_key(&shape.target) {
            return Err(Error::DuplicateShape(shape.target));
        }
        self.shapes.insert(shape.target.clone(), shape);
        Ok(())
    }

    pub fn get(&self, target: &str) -> Result<&Shape> {
        self.shapes
            .get(target)
            .ok_or_else(|| Error::UnknownShape(target.to_string()))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
