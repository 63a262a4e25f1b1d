// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Khata", "khata"));

pub const CONFIG_ENV: &str = "KHATA_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub seed_demo_data: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            seed_demo_data: true,
            log_level: "warn".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

/// Reads `path` as JSON. A missing file means defaults; a malformed one is an error.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let cfg: Config = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    Ok(cfg)
}

/// Resolution order: explicit path, then `KHATA_CONFIG`, then the platform config dir.
pub fn load(explicit: Option<&str>) -> Result<Config> {
    let path = match explicit {
        Some(p) => PathBuf::from(p),
        None => match std::env::var_os(CONFIG_ENV) {
            Some(p) => PathBuf::from(p),
            None => config_path()?,
        },
    };
    load_from(&path)
}
