// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::check_quantile;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Splitboard", "splitboard"));

pub const CONFIG_ENV: &str = "SPLITBOARD_CONFIG";

pub const DEFAULT_DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_person: Option<String>,
    pub default_currency: Option<String>,
    pub date_formats: Vec<String>,
    pub outlier_quantile: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_person: None,
            default_currency: None,
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|s| s.to_string()).collect(),
            outlier_quantile: Decimal::new(99, 2),
        }
    }
}

/// `$SPLITBOARD_CONFIG` if set, else `config.json` in the platform config dir.
pub fn config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|proj| proj.config_dir().join("config.json"))
}

pub fn load() -> Result<Config> {
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => {
            log::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_from(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Read config {}", path.display()))?;
    let mut cfg: Config = serde_json::from_str(&text)
        .with_context(|| format!("Parse config {}", path.display()))?;
    if cfg.date_formats.is_empty() {
        cfg.date_formats = Config::default().date_formats;
    }
    check_quantile(cfg.outlier_quantile)
        .with_context(|| format!("outlier_quantile in {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
