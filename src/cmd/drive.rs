// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Drive and shift command implementations.

use std::io::Write;

use anyhow::{Context, bail};
use tracing::info;

use crate::cli::drive::{DriveArgs, ShiftArgs};
use crate::config::Config;
use crate::config::types::VehicleConfig;
use crate::drivetrain::Transmission;
use crate::error::Result;
use crate::report::{ConsoleReporter, RecordingReporter};
use crate::vehicle::{SportUtilityVehicle, Vehicle};

/// Test drive the vehicle from `args`, or every fleet vehicle.
///
/// # Errors
///
/// Returns an error if a vehicle has invalid thresholds, the fleet is empty,
/// or output fails.
pub fn run_drive_command<W: Write>(args: &DriveArgs, config: &Config, out: &mut W) -> Result<()> {
    let entries = args.vehicle().map_or_else(|| config.fleet.clone(), |v| vec![v]);
    if entries.is_empty() {
        bail!("no vehicles to drive: the fleet is empty");
    }

    let fleet = entries
        .iter()
        .map(|entry| {
            SportUtilityVehicle::from_config(entry)
                .with_context(|| format!("invalid vehicle '{}'", entry.label()))
        })
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        let mut recorder = RecordingReporter::new();
        for vehicle in &fleet {
            vehicle.test_drive(&mut recorder);
        }
        serde_json::to_writer_pretty(&mut *out, recorder.readings())?;
        writeln!(out)?;
    } else {
        let mut reporter = ConsoleReporter::new(&mut *out);
        for vehicle in &fleet {
            vehicle.test_drive(&mut reporter);
        }
        reporter.finish()?;
    }

    info!(vehicles = fleet.len(), "Test drive complete");
    Ok(())
}

/// Print the engagement for each requested RPM.
///
/// # Errors
///
/// Returns an error if the thresholds are invalid, no thresholds are
/// available, or output fails.
pub fn run_shift_command<W: Write>(args: &ShiftArgs, config: &Config, out: &mut W) -> Result<()> {
    let (first, second) = match (args.first_gear_rpm, args.second_gear_rpm) {
        (Some(first), Some(second)) => (first, second),
        _ => config
            .fleet
            .first()
            .map(|v: &VehicleConfig| (v.first_gear_rpm, v.second_gear_rpm))
            .context("no gear thresholds given and the fleet is empty")?,
    };

    let transmission = Transmission::new(first, second)?;
    for gear in transmission.gears() {
        tracing::debug!(%gear, "Gear range");
    }

    for &rpm in &args.rpms {
        writeln!(out, "{rpm:>6} rpm  {}", transmission.engage(rpm))?;
    }
    Ok(())
}
