// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Vehicles: an identity that owns a transmission and can be test driven.
//!
//! ```text
//! dyn Vehicle
//!   make(), model(), transmission()
//!   test_drive(&mut dyn SpeedReporter)
//!        |
//!        +-- SportUtilityVehicle  samples 800, 1200 rpm
//! ```


use tracing::{debug, instrument};

use crate::config::types::VehicleConfig;
use crate::drivetrain::Transmission;
use crate::error::{DriveError, HotlistResult};
use crate::report::{RecordingReporter, SpeedReading, SpeedReporter};

/// Capability shared by every drivable vehicle.
pub trait Vehicle {
    fn make(&self) -> &str;

    fn model(&self) -> &str;

    fn transmission(&self) -> &Transmission;

    /// Sample the transmission at fixed engine speeds and hand each
    /// reading to `reporter`.
    fn test_drive(&self, reporter: &mut dyn SpeedReporter);

    /// Build the reading for one sample RPM.
    fn sample(&self, rpm: u32) -> SpeedReading {
        SpeedReading {
            make: self.make().to_string(),
            model: self.model().to_string(),
            rpm,
            engagement: self.transmission().engage(rpm),
        }
    }
}

/// Identity and drivetrain held by every concrete vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Chassis {
    make: String,
    model: String,
    transmission: Transmission,
}

impl Chassis {
    fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        first_gear_rpm: u32,
        second_gear_rpm: u32,
    ) -> Result<Self, DriveError> {
        Ok(Self {
            make: make.into(),
            model: model.into(),
            transmission: Transmission::new(first_gear_rpm, second_gear_rpm)?,
        })
    }
}

/// Sport utility vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportUtilityVehicle {
    chassis: Chassis,
}

impl SportUtilityVehicle {
    /// Engine speeds sampled by [`Vehicle::test_drive`], in order.
    pub const SAMPLE_RPMS: [u32; 2] = [800, 1200];

    /// # Errors
    ///
    /// Returns a [`DriveError`] if the gear thresholds do not form a valid
    /// transmission (see [`Transmission::new`]).
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        first_gear_rpm: u32,
        second_gear_rpm: u32,
    ) -> Result<Self, DriveError> {
        Ok(Self {
            chassis: Chassis::new(make, model, first_gear_rpm, second_gear_rpm)?,
        })
    }

    /// Build from a fleet entry.
    ///
    /// # Errors
    ///
    /// Returns [`HotlistError::Drive`](crate::error::HotlistError::Drive) if the entry's thresholds are invalid.
    pub fn from_config(config: &VehicleConfig) -> HotlistResult<Self> {
        Ok(Self::new(
            config.make.as_str(),
            config.model.as_str(),
            config.first_gear_rpm,
            config.second_gear_rpm,
        )?)
    }
}

impl Vehicle for SportUtilityVehicle {
    fn make(&self) -> &str {
        &self.chassis.make
    }

    fn model(&self) -> &str {
        &self.chassis.model
    }

    fn transmission(&self) -> &Transmission {
        &self.chassis.transmission
    }

    #[instrument(skip_all, fields(make = self.make(), model = self.model()))]
    fn test_drive(&self, reporter: &mut dyn SpeedReporter) {
        for rpm in Self::SAMPLE_RPMS {
            let reading = self.sample(rpm);
            debug!(rpm, speed = reading.speed(), "Test drive sample");
            reporter.report(reading);
        }
    }
}

/// Test drive `vehicle` and collect its readings.
#[must_use]
pub fn test_drive_readings(vehicle: &dyn Vehicle) -> Vec<SpeedReading> {
    let mut recorder = RecordingReporter::new();
    vehicle.test_drive(&mut recorder);
    recorder.into_readings()
}
