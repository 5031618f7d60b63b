// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!       HotlistError (16 bytes)
//!               |
//!   +-----------+-----------+
//!   |           |           |
//!   v           v           v
//! Drive       House       Config
//!  Box         Box         Box
//!
//! Sub-errors (unboxed internally):
//!   Drive   BelowIdle, ThresholdOrder, InvertedRange
//!   House   BlankColor, NoDoors
//!   Config  ParseError, InvalidValue, NotFound
//! ```
//!
//! An RPM outside every gear range is not an error; see
//! [`Engagement::Fallback`](crate::drivetrain::Engagement::Fallback).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`HotlistError`], returned by the typed domain entry
/// points ([`Config::validate`](crate::config::Config::validate),
/// [`housing::showcase`](crate::housing::showcase)).
pub type HotlistResult<T> = std::result::Result<T, HotlistError>;

/// Top-level application error type.
///
/// Sub-errors are boxed to keep this enum small on the stack. The message
/// already carries the sub-error, so it is not chained again as a source.
#[derive(Debug, Error)]
pub enum HotlistError {
    /// Invalid drivetrain construction.
    #[error("drivetrain error: {0}")]
    Drive(Box<DriveError>),

    /// Rejected house construction.
    #[error("house error: {0}")]
    House(Box<HouseError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(Box<ConfigError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for HotlistError {
                fn from(err: $error) -> Self {
                    HotlistError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    DriveError => Drive,
    HouseError => House,
    ConfigError => Config,
}

// --- Drivetrain Errors ---

/// Errors raised while building gear ranges or a transmission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriveError {
    /// First gear would end before the idle RPM it starts at.
    #[error("first gear threshold {first_gear_rpm} rpm is below idle ({idle_rpm} rpm)")]
    BelowIdle { first_gear_rpm: u32, idle_rpm: u32 },

    /// Second gear threshold does not lie above the first.
    #[error(
        "second gear threshold {second_gear_rpm} rpm must be above first gear threshold {first_gear_rpm} rpm"
    )]
    ThresholdOrder {
        first_gear_rpm: u32,
        second_gear_rpm: u32,
    },

    /// A gear range whose lower bound exceeds its upper bound.
    #[error("gear range {min_rpm}..={max_rpm} rpm is inverted")]
    InvertedRange { min_rpm: u32, max_rpm: u32 },
}

// --- House Errors ---

/// Errors raised by the house factories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HouseError {
    /// Color was empty or whitespace only.
    #[error("house color must not be blank")]
    BlankColor,

    /// A house needs at least one door.
    #[error("house must have at least one door")]
    NoDoors,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}
