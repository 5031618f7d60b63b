// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `houses`, `drive` and `shift` commands.

use clap::Args;

use crate::config::types::VehicleConfig;

/// Arguments for the `houses` command.
#[derive(Debug, Clone, Default, Args)]
pub struct HousesArgs {
    /// Print the houses as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `drive` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DriveArgs {
    /// Make of a single vehicle to drive instead of the configured fleet.
    #[arg(long, requires_all = ["model", "first_gear_rpm", "second_gear_rpm"])]
    pub make: Option<String>,

    /// Model of the single vehicle.
    #[arg(long, requires = "make")]
    pub model: Option<String>,

    /// Upper bound of first gear, in rpm.
    #[arg(long, value_name = "RPM", requires = "make")]
    pub first_gear_rpm: Option<u32>,

    /// Upper bound of second gear, in rpm.
    #[arg(long, value_name = "RPM", requires = "make")]
    pub second_gear_rpm: Option<u32>,

    /// Print readings as JSON.
    #[arg(long)]
    pub json: bool,
}

impl DriveArgs {
    /// The vehicle given on the command line, if any.
    #[must_use]
    pub fn vehicle(&self) -> Option<VehicleConfig> {
        match (
            &self.make,
            &self.model,
            self.first_gear_rpm,
            self.second_gear_rpm,
        ) {
            (Some(make), Some(model), Some(first), Some(second)) => {
                Some(VehicleConfig::new(make.as_str(), model.as_str(), first, second))
            }
            _ => None,
        }
    }
}

/// Arguments for the `shift` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShiftArgs {
    /// Upper bound of first gear; defaults to the first fleet vehicle.
    #[arg(long, value_name = "RPM", requires = "second_gear_rpm")]
    pub first_gear_rpm: Option<u32>,

    /// Upper bound of second gear; defaults to the first fleet vehicle.
    #[arg(long, value_name = "RPM", requires = "first_gear_rpm")]
    pub second_gear_rpm: Option<u32>,

    /// Engine speeds to resolve.
    #[arg(value_name = "RPM", required = true)]
    pub rpms: Vec<u32>,
}
