// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Drivetrain: gear ranges and the transmission that selects between them.
//!
//! # Gear Layout
//!
//! ```text
//! Transmission::new(t1, t2)
//!
//!   rpm:   0 .. 99 | 100 ..... t1 | t1+1 ..... t2 | t2+1 ..
//!          --------+--------------+---------------+--------
//!   gear:  fallback|    first     |    second     | fallback
//!   mph:      5    |     10       |      30       |    5
//! ```
//!
//! Ranges are tested in order, both bounds inclusive. An RPM outside every
//! range is not an error; it resolves to [`Engagement::Fallback`].

pub mod gear;


use serde::Serialize;
use tracing::trace;

use crate::error::DriveError;

pub use gear::GearRange;

/// Outcome of resolving an engine RPM through a [`Transmission`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Engagement {
    /// RPM fell inside a gear range. `gear` is 1-based.
    Gear { gear: u8, speed: u32 },
    /// No gear range contained the RPM.
    Fallback { speed: u32 },
}

impl Engagement {
    /// Resulting vehicle speed in mph.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        match self {
            Self::Gear { speed, .. } | Self::Fallback { speed } => *speed,
        }
    }

    /// Engaged gear number, or `None` for the fallback.
    #[must_use]
    pub const fn gear(&self) -> Option<u8> {
        match self {
            Self::Gear { gear, .. } => Some(*gear),
            Self::Fallback { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

impl std::fmt::Display for Engagement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gear { gear, speed } => write!(f, "gear {gear} @ {speed} mph"),
            Self::Fallback { speed } => write!(f, "fallback @ {speed} mph"),
        }
    }
}

/// Two-speed transmission built from a pair of RPM thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transmission {
    gears: [GearRange; 2],
}

impl Transmission {
    /// Lower bound of first gear.
    pub const IDLE_RPM: u32 = 100;
    pub const FIRST_GEAR_SPEED: u32 = 10;
    pub const SECOND_GEAR_SPEED: u32 = 30;
    /// Speed reported when no gear range matches.
    pub const FALLBACK_SPEED: u32 = 5;

    /// Build a transmission with first gear `[IDLE_RPM, first_gear_rpm]` and
    /// second gear `[first_gear_rpm + 1, second_gear_rpm]`.
    ///
    /// # Errors
    ///
    /// - [`DriveError::BelowIdle`] if `first_gear_rpm < IDLE_RPM`
    /// - [`DriveError::ThresholdOrder`] if `first_gear_rpm >= second_gear_rpm`
    pub fn new(first_gear_rpm: u32, second_gear_rpm: u32) -> Result<Self, DriveError> {
        if first_gear_rpm < Self::IDLE_RPM {
            return Err(DriveError::BelowIdle {
                first_gear_rpm,
                idle_rpm: Self::IDLE_RPM,
            });
        }
        if first_gear_rpm >= second_gear_rpm {
            return Err(DriveError::ThresholdOrder {
                first_gear_rpm,
                second_gear_rpm,
            });
        }

        // first_gear_rpm < second_gear_rpm, so the increment cannot overflow.
        let first = GearRange::new(Self::IDLE_RPM, first_gear_rpm, Self::FIRST_GEAR_SPEED)?;
        let second = GearRange::new(
            first_gear_rpm + 1,
            second_gear_rpm,
            Self::SECOND_GEAR_SPEED,
        )?;

        Ok(Self {
            gears: [first, second],
        })
    }

    /// Gear ranges in the order they are tested.
    #[must_use]
    pub const fn gears(&self) -> &[GearRange] {
        &self.gears
    }

    /// Resolve `rpm` to the first gear containing it, or the fallback.
    #[must_use]
    pub fn engage(&self, rpm: u32) -> Engagement {
        let engagement = self
            .gears
            .iter()
            .zip(1u8..)
            .find(|(range, _)| range.contains(rpm))
            .map_or(
                Engagement::Fallback {
                    speed: Self::FALLBACK_SPEED,
                },
                |(range, gear)| Engagement::Gear {
                    gear,
                    speed: range.speed(),
                },
            );
        trace!(rpm, %engagement, "Resolved engine speed");
        engagement
    }

    /// Vehicle speed in mph for the given engine RPM.
    #[must_use]
    pub fn transfer_energy(&self, rpm: u32) -> u32 {
        self.engage(rpm).speed()
    }
}
