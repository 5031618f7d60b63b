// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> out: impl Write
//!   config (options, configs), houses, drive, shift
//! ```

pub mod config;
pub mod drive;
pub mod houses;
