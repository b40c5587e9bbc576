// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mf-doubles: test doubles for the metrics tracker
//!
//! Code under test reports events through the [`Tracker`] seam. In tests the
//! seam is filled by [`SendTrackFake`], which checks the shape of every call,
//! optionally wrapped in a [`TrackerSpy`] to assert how it was called.

pub mod error;
pub mod fake;
pub mod settings;
pub mod spy;
pub mod tracker;

pub use error::{Error, Result};
pub use fake::SendTrackFake;
pub use settings::{metrics_settings_fake_return, MetricsSettings};
pub use spy::{RecordedCall, TrackerSpy};
pub use tracker::Tracker;
