// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Speed reporting collaborators.
//!
//! ```text
//! Vehicle::test_drive --> SpeedReading --> dyn SpeedReporter
//!                                            |-- ConsoleReporter<W: Write>
//!                                            '-- RecordingReporter
//! ```
//!
//! Vehicles compute readings; reporters decide how to present them.

use std::io::{self, Write};

use serde::Serialize;

use crate::drivetrain::Engagement;

/// One sample taken during a test drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeedReading {
    pub make: String,
    pub model: String,
    pub rpm: u32,
    pub engagement: Engagement,
}

impl SpeedReading {
    /// Vehicle speed in mph.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.engagement.speed()
    }
}

/// Receives readings produced by a test drive.
pub trait SpeedReporter {
    fn report(&mut self, reading: SpeedReading);
}

/// Writes one human-readable line per reading.
///
/// The first write failure is kept and returned from [`finish`](Self::finish);
/// later readings are dropped.
pub struct ConsoleReporter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush the writer and surface any write error.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while reporting, or a flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> SpeedReporter for ConsoleReporter<W> {
    fn report(&mut self, reading: SpeedReading) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(
            self.out,
            "{} {}: Driving at a current speed of {} mph",
            reading.make,
            reading.model,
            reading.speed()
        ) {
            self.error = Some(err);
        }
    }
}

/// Collects readings in the order they were reported.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    readings: Vec<SpeedReading>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn readings(&self) -> &[SpeedReading] {
        &self.readings
    }

    #[must_use]
    pub fn into_readings(self) -> Vec<SpeedReading> {
        self.readings
    }
}

impl SpeedReporter for RecordingReporter {
    fn report(&mut self, reading: SpeedReading) {
        self.readings.push(reading);
    }
}

#[cfg(test)]
mod tests;
