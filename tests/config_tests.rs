// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use splitboard::config::{self, Config, DEFAULT_DATE_FORMATS};
use tempfile::tempdir;

#[test]
fn partial_config_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "default_person": "Bob" }"#).unwrap();

    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg.default_person.as_deref(), Some("Bob"));
    assert_eq!(cfg.default_currency, None);
    assert_eq!(cfg.date_formats.len(), DEFAULT_DATE_FORMATS.len());
    assert_eq!(cfg.outlier_quantile, Decimal::new(99, 2));
}

#[test]
fn empty_date_formats_fall_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "date_formats": [], "outlier_quantile": "0.95" }"#).unwrap();

    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg.date_formats, Config::default().date_formats);
    assert_eq!(cfg.outlier_quantile, Decimal::new(95, 2));
}

#[test]
fn out_of_range_quantile_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "outlier_quantile": 1.5 }"#).unwrap();
    assert!(config::load_from(&path).is_err());
}

#[test]
fn malformed_config_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.json"));
}
