// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>` (must exist)
//! 2. `$SORTED_SEARCH_CONFIG`
//! 3. `./sorted-search.toml`
//! 4. Built-in defaults (everything is optional)
//!
//! Command-line flags override whatever the file says.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use sorted_search::Strategy;

pub const CONFIG_ENV: &str = "SORTED_SEARCH_CONFIG";
pub const CONFIG_FILE: &str = "sorted-search.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub search: SearchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub strategy: StrategyChoice,
    /// Reject unsorted input and out-of-range windows instead of guessing.
    pub validate: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Format,
    pub color: bool,
}

/// Which strategies a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyChoice {
    #[default]
    Iterative,
    Recursive,
    /// Run both and report whether they agree
    Both,
}

impl StrategyChoice {
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            StrategyChoice::Iterative => &[Strategy::Iterative],
            StrategyChoice::Recursive => &[Strategy::Recursive],
            StrategyChoice::Both => &Strategy::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyChoice::Iterative,
            validate: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Format::Text,
            color: true,
        }
    }
}

/// Load config from disk. Returns defaults if no config file is found.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("config file {} does not exist", path.display());
        }
        return read_config(path);
    }

    let path = config_path();
    if path.exists() {
        read_config(&path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(Config::default())
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = parse_config(&content).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// `$SORTED_SEARCH_CONFIG` if set, otherwise `./sorted-search.toml`.
fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from)
}
