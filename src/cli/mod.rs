// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for hotlist-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! hotlist [global options] <command>
//! version
//! options
//! configs
//! houses [--json]
//! drive  [--make M --model M --first-gear-rpm N --second-gear-rpm N] [--json]
//! shift  <RPM>... [--first-gear-rpm N --second-gear-rpm N]
//! ```

pub mod drive;
pub mod global;


use crate::cli::drive::{DriveArgs, HousesArgs, ShiftArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Encapsulation showcase: houses, transmissions and test drives.
#[derive(Debug, Parser)]
#[command(
    name = "hotlist",
    author,
    version,
    about = "Encapsulation showcase",
    long_about = "hotlist-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds a street of houses with different encapsulation\n\
                  styles and test drives a fleet of vehicles through a\n\
                  two-speed transmission.",
    after_help = "CONFIG FILES:\n\n\
                  hotlist reads `hotlist.toml` from the current directory if it\n\
                  exists, then every --config file in order. HOTLIST_* environment\n\
                  variables (e.g. HOTLIST_GLOBAL__OUTPUT_LOG_LEVEL=4) override both.\n\
                  Every HOTLIST_* variable is read as a config key, so an unrelated\n\
                  one (e.g. HOTLIST_HOME) is rejected as an unknown field.\n\
                  Use --no-default-config to skip `hotlist.toml`."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their resolved values.
    Options,

    /// Lists the config sources that were loaded.
    Configs,

    /// Shows the house showcase.
    Houses(HousesArgs),

    /// Test drives the fleet, or a single vehicle given on the command line.
    Drive(DriveArgs),

    /// Shows which gear engages at each engine speed.
    Shift(ShiftArgs),
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
