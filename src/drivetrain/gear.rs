// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! A single gear: a closed RPM interval mapped to one output speed.

use serde::Serialize;

use crate::error::DriveError;

/// Closed interval of engine RPM producing a fixed vehicle speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GearRange {
    min_rpm: u32,
    max_rpm: u32,
    speed: u32,
}

impl GearRange {
    /// Create a gear covering `min_rpm..=max_rpm`.
    ///
    /// # Errors
    ///
    /// Returns [`DriveError::InvertedRange`] if `min_rpm > max_rpm`.
    pub const fn new(min_rpm: u32, max_rpm: u32, speed: u32) -> Result<Self, DriveError> {
        if min_rpm > max_rpm {
            return Err(DriveError::InvertedRange { min_rpm, max_rpm });
        }
        Ok(Self {
            min_rpm,
            max_rpm,
            speed,
        })
    }

    /// Lowest RPM in this gear (inclusive).
    #[must_use]
    pub const fn min_rpm(&self) -> u32 {
        self.min_rpm
    }

    /// Highest RPM in this gear (inclusive).
    #[must_use]
    pub const fn max_rpm(&self) -> u32 {
        self.max_rpm
    }

    /// Speed produced while in this gear, in mph.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    #[must_use]
    pub const fn contains(&self, rpm: u32) -> bool {
        rpm >= self.min_rpm && rpm <= self.max_rpm
    }
}

impl std::fmt::Display for GearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..={} rpm -> {} mph",
            self.min_rpm, self.max_rpm, self.speed
        )
    }
}
