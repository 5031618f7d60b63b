// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         houses / drive / shift
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered, fleet    |
//!              '--+------------+-----------'
//!                 |            |
//!                 v            v
//!             housing       vehicle ----> report
//!          value objects       |       console/recorder
//!                              v
//!                          drivetrain
//!                    GearRange, Transmission
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod drivetrain;
pub mod error;
pub mod housing;
pub mod logging;
pub mod report;
pub mod vehicle;
