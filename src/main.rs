// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Command Dispatch
//!   Version
//!   Options | Configs | Houses | Drive | Shift
//!     '-- Config --> Logging --> handler
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;

use hotlist_rs::cli::global::GlobalOptions;
use hotlist_rs::cli::{self, Command};
use hotlist_rs::cmd::config::{run_configs_command, run_options_command};
use hotlist_rs::cmd::drive::{run_drive_command, run_shift_command};
use hotlist_rs::cmd::houses::run_houses_command;
use hotlist_rs::config::Config;
use hotlist_rs::config::loader::ConfigLoader;
use hotlist_rs::logging::{LogConfig, LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();
    dispatch_command(&cli)
}

/// Resolved configuration plus the logging guard that must outlive the
/// command.
struct Session {
    config: Config,
    sources: Vec<String>,
    _log_guard: LogGuard,
}

fn start_session(global: &GlobalOptions) -> hotlist_rs::error::Result<Session> {
    let loader = build_config_loader(global).context("Failed to load config")?;
    let sources = loader.format_sources();
    let config = loader.build().context("Failed to load config")?;
    let log_guard =
        init_logging(&build_log_config(&config)).context("Failed to initialize logging")?;
    tracing::debug!(sources = sources.len(), "Configuration loaded");

    Ok(Session {
        config,
        sources,
        _log_guard: log_guard,
    })
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn build_config_loader(global: &GlobalOptions) -> hotlist_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("hotlist.toml");
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix("HOTLIST");
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // `version` never reads config, so it works even when config is broken.
    let result = match &cli.command {
        Some(Command::Version) => {
            writeln!(out, "{}", env!("CARGO_PKG_VERSION")).map_err(Into::into)
        }
        Some(Command::Options) => start_session(&cli.global)
            .and_then(|session| run_options_command(&session.config, &mut out)),
        Some(Command::Configs) => start_session(&cli.global)
            .and_then(|session| run_configs_command(&session.sources, &mut out)),
        Some(Command::Houses(args)) => {
            start_session(&cli.global).and_then(|_session| run_houses_command(args, &mut out))
        }
        Some(Command::Drive(args)) => start_session(&cli.global)
            .and_then(|session| run_drive_command(args, &session.config, &mut out)),
        Some(Command::Shift(args)) => start_session(&cli.global)
            .and_then(|session| run_shift_command(args, &session.config, &mut out)),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
