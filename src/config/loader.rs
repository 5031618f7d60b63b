// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set()
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::path::{Path, PathBuf};

use config::{File, FileFormat};

use super::Config;
use crate::error::Result;

/// Where a loaded source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Optional,
    Inline,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Optional => write!(f, "optional"),
            Self::Inline => write!(f, "string"),
        }
    }
}

/// Builder for loading configuration from multiple sources.
///
/// Later sources override earlier ones; environment variables override all
/// files.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<(SourceKind, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    /// Add a TOML file that must exist.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.sources.push((SourceKind::File, p.to_path_buf()));
        self
    }

    /// Add a TOML file that is skipped when missing.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.sources.push((SourceKind::Optional, p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources
            .push((SourceKind::Inline, PathBuf::from("<string>")));
        self
    }

    /// Read `PREFIX_SECTION__KEY` environment variables,
    /// e.g. `HOTLIST_GLOBAL__OUTPUT_LOG_LEVEL=4`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Set a single override, e.g. `("global.output_log_level", 4)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be parsed as a config path.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Merge every source and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required file is missing or not valid TOML.
    /// - The merged tree does not match the `Config` structure.
    /// - A fleet entry fails validation (see [`Config::validate`]).
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn sources(&self) -> &[(SourceKind, PathBuf)] {
        &self.sources
    }

    /// Numbered `N. [kind] path` lines, in load order.
    #[must_use]
    pub fn format_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, (kind, path))| format!("{}. [{}] {}", i + 1, kind, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
