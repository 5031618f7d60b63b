// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for hotlist-rs.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Display resolved configuration options.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_options_command<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Display loaded configuration sources.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_configs_command<W: Write>(sources: &[String], out: &mut W) -> Result<()> {
    if sources.is_empty() {
        writeln!(out, "No configuration files loaded")?;
    } else {
        for line in sources {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
