// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fake return values for `getMetricsSettings`.

use mf_core::{Shape, ValueKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Target name used in settings failure messages.
pub const SETTINGS_TARGET: &str = "metricsFake getMetricsSettings";

/// Metric categories the user has consented to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSettings {
    #[serde(default)]
    pub marketing: bool,
}

impl MetricsSettings {
    /// Keys a settings override may contain.
    pub const KEYS: &'static [&'static str] = &["marketing"];

    fn shape() -> Shape {
        Shape::new(SETTINGS_TARGET, ValueKind::Object).allow(Self::KEYS.iter().copied())
    }
}

/// Builds settings with every category disabled except the given overrides.
///
/// A misspelled override such as `markting` is reported as an unexpected key
/// instead of silently leaving the category disabled.
pub fn metrics_settings_fake_return(overrides: &Map<String, Value>) -> Result<MetricsSettings> {
    let value = Value::Object(overrides.clone());
    MetricsSettings::shape().validate(Some(&value), Some(overrides))?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
