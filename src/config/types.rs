// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config
//!   global: GlobalConfig   log levels, log file
//!   fleet:  [VehicleConfig] make, model, gear thresholds
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// One `[[fleet]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleConfig {
    pub make: String,
    pub model: String,
    /// Upper bound of first gear (inclusive).
    pub first_gear_rpm: u32,
    /// Upper bound of second gear (inclusive).
    pub second_gear_rpm: u32,
}

impl VehicleConfig {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        first_gear_rpm: u32,
        second_gear_rpm: u32,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            first_gear_rpm,
            second_gear_rpm,
        }
    }

    /// `make model` label used in messages.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// The fleet used when no configuration overrides it.
#[must_use]
pub fn default_fleet() -> Vec<VehicleConfig> {
    vec![VehicleConfig::new("Ford", "Explorer", 1000, 2000)]
}
