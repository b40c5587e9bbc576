// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Call recording around any [`Tracker`].

use serde_json::{Map, Value};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::tracker::Tracker;

/// One call made through a [`TrackerSpy`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub id: Value,
    /// `None` when the caller omitted the options bag.
    pub opts: Option<Map<String, Value>>,
}

/// Records every call before delegating to the wrapped tracker.
///
/// Calls rejected by the inner tracker are recorded too.
#[derive(Debug, Default)]
pub struct TrackerSpy<T> {
    inner: T,
    calls: Mutex<Vec<RecordedCall>>,
}

impl<T: Tracker> TrackerSpy<T> {
    pub fn new(inner: T) -> Self {
        TrackerSpy {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Snapshot of the calls made so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.recorded().clone()
    }

    pub fn call_count(&self) -> usize {
        self.recorded().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.recorded().last().cloned()
    }

    /// True if any recorded call had exactly these arguments.
    ///
    /// An omitted options bag only matches `None`.
    pub fn was_called_with(&self, id: &Value, opts: Option<&Map<String, Value>>) -> bool {
        self.recorded()
            .iter()
            .any(|call| &call.id == id && call.opts.as_ref() == opts)
    }

    pub fn reset(&self) {
        self.recorded().clear();
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        // A panicking test thread cannot leave the Vec half-written.
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Tracker> Tracker for TrackerSpy<T> {
    fn send_track(&self, id: &Value, opts: Option<&Map<String, Value>>) -> Result<()> {
        self.recorded().push(RecordedCall {
            id: id.clone(),
            opts: opts.cloned(),
        });
        self.inner.send_track(id, opts)
    }
}

#[cfg(test)]
#[path = "spy_tests.rs"]
mod tests;
