// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::{Map, Value};

use crate::error::Result;

/// Sends a metrics event: `sendTrack(id, opts?)`.
///
/// Code that reports metrics takes a `&dyn Tracker` (or a generic) so tests
/// can substitute a double for the real sender.
pub trait Tracker {
    fn send_track(&self, id: &Value, opts: Option<&Map<String, Value>>) -> Result<()>;
}

impl<T: Tracker + ?Sized> Tracker for &T {
    fn send_track(&self, id: &Value, opts: Option<&Map<String, Value>>) -> Result<()> {
        (**self).send_track(id, opts)
    }
}
