// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for hotlist-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults (one Ford Explorer, 1000/2000 rpm)
//! 2. hotlist.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. HOTLIST_* env vars
//! ```
//!
//! # Example
//!
//! ```toml
//! [global]
//! output_log_level = 3
//!
//! [[fleet]]
//! make = "Ford"
//! model = "Explorer"
//! first_gear_rpm = 1000
//! second_gear_rpm = 2000
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::drivetrain::Transmission;
use crate::error::{ConfigError, DriveError, HotlistResult, Result};

use loader::ConfigLoader;
use types::{GlobalConfig, VehicleConfig};

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    /// Vehicles test driven by the `drive` command.
    pub fleet: Vec<VehicleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            fleet: types::default_fleet(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check every fleet entry: non-blank identity and buildable gear
    /// thresholds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue`, boxed as `HotlistError::Config`,
    /// for the first offending entry.
    pub fn validate(&self) -> HotlistResult<()> {
        for (index, vehicle) in self.fleet.iter().enumerate() {
            let section = format!("fleet.{index}");
            let invalid = |key: &str, message: String| ConfigError::InvalidValue {
                section: section.clone(),
                key: key.to_string(),
                message,
            };

            if vehicle.make.trim().is_empty() {
                return Err(invalid("make", "must not be blank".to_string()).into());
            }
            if vehicle.model.trim().is_empty() {
                return Err(invalid("model", "must not be blank".to_string()).into());
            }
            if let Err(err) = Transmission::new(vehicle.first_gear_rpm, vehicle.second_gear_rpm) {
                let key = match err {
                    DriveError::BelowIdle { .. } => "first_gear_rpm",
                    DriveError::ThresholdOrder { .. } | DriveError::InvertedRange { .. } => {
                        "second_gear_rpm"
                    }
                };
                return Err(invalid(key, err.to_string()).into());
            }
        }
        Ok(())
    }

    /// Aligned `key = value` lines, in declaration order.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options: Vec<(String, String)> = vec![
            (
                "global.output_log_level".into(),
                self.global.output_log_level.as_u8().to_string(),
            ),
            (
                "global.file_log_level".into(),
                self.global.file_log_level.as_u8().to_string(),
            ),
            (
                "global.log_file".into(),
                self.global
                    .log_file
                    .as_ref()
                    .map_or_else(String::new, |p| p.display().to_string()),
            ),
        ];

        for (index, vehicle) in self.fleet.iter().enumerate() {
            let prefix = format!("fleet.{index}");
            options.push((format!("{prefix}.make"), vehicle.make.clone()));
            options.push((format!("{prefix}.model"), vehicle.model.clone()));
            options.push((
                format!("{prefix}.first_gear_rpm"),
                vehicle.first_gear_rpm.to_string(),
            ));
            options.push((
                format!("{prefix}.second_gear_rpm"),
                vehicle.second_gear_rpm.to_string(),
            ));
        }

        let max_key_len = options.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
