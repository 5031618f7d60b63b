// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Factory-built mansion.
//!
//! The constructor is private; callers go through [`Mansion::with_pool`] or
//! [`Mansion::without_pool`], which validate before building.

use std::fmt;

use serde::Serialize;

use super::CleanHouse;
use crate::error::HouseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mansion {
    windows: u32,
    doors: u32,
    color: String,
    has_pool: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_names: Option<Vec<String>>,
}

impl Mansion {
    /// # Errors
    ///
    /// See [`Mansion::without_pool`].
    pub fn with_pool(windows: u32, doors: u32, color: impl Into<String>) -> Result<Self, HouseError> {
        Self::build(windows, doors, color.into(), true)
    }

    /// # Errors
    ///
    /// - [`HouseError::BlankColor`] if `color` is empty or whitespace
    /// - [`HouseError::NoDoors`] if `doors` is zero
    pub fn without_pool(
        windows: u32,
        doors: u32,
        color: impl Into<String>,
    ) -> Result<Self, HouseError> {
        Self::build(windows, doors, color.into(), false)
    }

    fn build(windows: u32, doors: u32, color: String, has_pool: bool) -> Result<Self, HouseError> {
        if color.trim().is_empty() {
            return Err(HouseError::BlankColor);
        }
        if doors == 0 {
            return Err(HouseError::NoDoors);
        }
        Ok(Self {
            windows,
            doors,
            color,
            has_pool,
            room_names: None,
        })
    }

    /// Attach room names, replacing any previously set.
    #[must_use]
    pub fn with_room_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.room_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Room names in the order given; empty when none were attached.
    pub fn room_names(&self) -> impl Iterator<Item = &str> {
        self.room_names.iter().flatten().map(String::as_str)
    }

    #[must_use]
    pub const fn windows(&self) -> u32 {
        self.windows
    }

    #[must_use]
    pub const fn doors(&self) -> u32 {
        self.doors
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub const fn has_pool(&self) -> bool {
        self.has_pool
    }

    /// Strip the mansion down to a plain immutable house.
    #[must_use]
    pub fn to_clean_house(&self) -> CleanHouse {
        CleanHouse::new(self.windows, self.doors, self.color.clone())
    }
}

impl fmt::Display for Mansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_pool {
            writeln!(f, "Mansion with Pool:")?;
        } else {
            writeln!(f, "Mansion without Pool:")?;
        }
        super::write_details(f, &self.color, self.windows, self.doors)
    }
}
