// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Persistent preferences for the command-line counter.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::CliArgs;
use crate::format::DisplayFormat;
use crate::taunt::TauntZone;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub taunt: TauntConfig,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: DisplayFormat,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct TauntConfig {
    #[serde(default)]
    pub zone: TauntZone,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            display: DisplayConfig::default(),
            taunt: TauntConfig::default(),
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "earth-rotation")
        .context("Failed to determine project directories")?;
    Ok(proj_dirs.config_dir().join("earth-rotation.toml"))
}

impl Config {
    /// Read `config_path` (or the default location). A missing file is
    /// created with default values.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            default_config.save(path)?;
            debug!(path = %path.display(), "wrote default config");
            return Ok(default_config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Flip the saved display format and write it back.
    pub fn toggle_format(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };
        let mut config = Self::load_from(&path)?;
        config.display.format = config.display.format.toggled();
        config.save(&path)?;
        debug!(path = %path.display(), format = %config.display.format, "toggled display format");
        Ok(config)
    }

    /// Load the file named by `--config` and apply command-line overrides.
    pub fn from_cli(cli_args: &CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config.clone())?;
        if let Some(format) = cli_args.format {
            config.display.format = format;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.display.format, DisplayFormat::Integer);
        assert_eq!(config.taunt.zone, TauntZone::Local);
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("earth-rotation.toml");
        let config = Config::load(Some(path.clone())).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("earth-rotation.toml");
        let mut config = Config::default();
        config.display.format = DisplayFormat::Decimal;
        config.taunt.zone = TauntZone::Utc;
        config.save(&path).unwrap();

        let reloaded = Config::load(Some(path)).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("earth-rotation.toml");
        fs::write(&path, "version = 1\n[display]\nformat = \"decimal\"\n").unwrap();
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.display.format, DisplayFormat::Decimal);
        assert_eq!(config.taunt.zone, TauntZone::Local);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("earth-rotation.toml");
        fs::write(&path, "version = 1\n[display]\nformat = \"roman\"\n").unwrap();
        let err = Config::load(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_toggle_format_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("earth-rotation.toml");

        let config = Config::toggle_format(Some(path.clone())).unwrap();
        assert_eq!(config.display.format, DisplayFormat::Decimal);
        assert_eq!(Config::load(Some(path.clone())).unwrap(), config);

        let config = Config::toggle_format(Some(path.clone())).unwrap();
        assert_eq!(config.display.format, DisplayFormat::Integer);
        assert_eq!(Config::load(Some(path)).unwrap().display.format, DisplayFormat::Integer);
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("earth-rotation.toml");
        Config::default().save(&path).unwrap();

        let args = CliArgs::parse_from([
            "earth-rotation",
            "--config",
            path.to_str().unwrap(),
            "--format",
            "decimal",
            "now",
        ]);
        let config = Config::from_cli(&args).unwrap();
        assert_eq!(config.display.format, DisplayFormat::Decimal);
    }
}
