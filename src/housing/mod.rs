// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! House value objects, ordered from least to most encapsulated.
//!
//! ```text
//! DirtyHouse     pub fields, mutate freely
//! StandardHouse  private fields + set_windows()
//! CleanHouse     private fields, never changes
//! Mansion        private constructor, with_pool()/without_pool() factories
//! ```

pub mod mansion;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;

use crate::error::HotlistResult;

pub use mansion::Mansion;

/// Open record: every field is public and may be reassigned at will.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirtyHouse {
    pub windows: u32,
    pub doors: u32,
    pub color: String,
}

/// House whose fields can only change through named operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardHouse {
    windows: u32,
    doors: u32,
    color: String,
}

impl StandardHouse {
    pub fn new(windows: u32, doors: u32, color: impl Into<String>) -> Self {
        Self {
            windows,
            doors,
            color: color.into(),
        }
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

    /// The one field open to change after construction.
    pub const fn set_windows(&mut self, windows: u32) {
        self.windows = windows;
    }
}

/// Immutable house: what you construct is what you keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanHouse {
    windows: u32,
    doors: u32,
    color: String,
}

impl CleanHouse {
    pub fn new(windows: u32, doors: u32, color: impl Into<String>) -> Self {
        Self {
            windows,
            doors,
            color: color.into(),
        }
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
}

/// Write the indented detail block shared by every house.
fn write_details(f: &mut fmt::Formatter<'_>, color: &str, windows: u32, doors: u32) -> fmt::Result {
    writeln!(f, "    Color: {color}")?;
    writeln!(f, "    Windows: {windows}")?;
    write!(f, "    Doors: {doors}")
}

impl fmt::Display for DirtyHouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dirty House:")?;
        write_details(f, &self.color, self.windows, self.doors)
    }
}

impl fmt::Display for StandardHouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Standard House:")?;
        write_details(f, &self.color, self.windows, self.doors)
    }
}

impl fmt::Display for CleanHouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clean House:")?;
        write_details(f, &self.color, self.windows, self.doors)
    }
}

/// Any of the showcase houses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum House {
    Dirty(DirtyHouse),
    Standard(StandardHouse),
    Clean(CleanHouse),
    Mansion(Mansion),
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dirty(house) => fmt::Display::fmt(house, f),
            Self::Standard(house) => fmt::Display::fmt(house, f),
            Self::Clean(house) => fmt::Display::fmt(house, f),
            Self::Mansion(house) => fmt::Display::fmt(house, f),
        }
    }
}

/// The demonstration street, in presentation order.
///
/// # Errors
///
/// Returns [`HotlistError::House`](crate::error::HotlistError::House) if a
/// mansion factory rejects its inputs.
pub fn showcase() -> HotlistResult<Vec<House>> {
    let dump = DirtyHouse {
        windows: 12,
        doors: 5,
        color: "Black".to_string(),
    };

    let mut standard = StandardHouse::new(18, 10, "Blue");
    standard.set_windows(5);

    Ok(vec![
        House::Dirty(dump),
        House::Standard(standard),
        House::Clean(CleanHouse::new(17, 9, "Light Blue")),
        House::Mansion(Mansion::with_pool(27, 19, "Tope")?),
        House::Mansion(Mansion::without_pool(33, 23, "Purple")?),
    ])
}
