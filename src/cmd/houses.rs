// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Houses command implementation.

use std::io::Write;

use crate::cli::drive::HousesArgs;
use crate::error::Result;
use crate::housing;

/// Print the house showcase, as text blocks or JSON.
///
/// # Errors
///
/// Returns an error if a showcase house cannot be built or output fails.
pub fn run_houses_command<W: Write>(args: &HousesArgs, out: &mut W) -> Result<()> {
    let houses = housing::showcase()?;
    tracing::debug!(count = houses.len(), "Built showcase houses");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &houses)?;
        writeln!(out)?;
        return Ok(());
    }

    for house in &houses {
        writeln!(out, "{house}")?;
    }
    Ok(())
}
