// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod charts;
pub mod doctor;
pub mod expenses;
pub mod exporter;
pub mod options;
pub mod reports;

use crate::config::Config;
use crate::ledger;
use crate::models::{ExpenseTable, RawLedger, Selection};
use crate::utils::parse_date;
use anyhow::{Context, Result, anyhow};
use std::path::Path;

pub fn load_raw(sub: &clap::ArgMatches) -> Result<RawLedger> {
    let path = sub
        .get_one::<String>("path")
        .context("--path is required")?
        .trim();
    ledger::read_ledger(Path::new(path)).with_context(|| format!("Open CSV {}", path))
}

/// Resolves person and currency: flag, then config default, then the first
/// one found in the file.
pub fn resolve_selection(
    raw: &RawLedger,
    cfg: &Config,
    sub: &clap::ArgMatches,
) -> Result<Selection> {
    let person = sub
        .get_one::<String>("person")
        .cloned()
        .or_else(|| cfg.default_person.clone())
        .or_else(|| ledger::persons(raw).into_iter().next())
        .ok_or_else(|| anyhow!("Ledger has no participant columns"))?;
    let currency = sub
        .get_one::<String>("currency")
        .cloned()
        .or_else(|| cfg.default_currency.clone())
        .or_else(|| ledger::currencies(raw).into_iter().next())
        .unwrap_or_default();
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub.get_one::<String>("to").map(|s| parse_date(s)).transpose()?;
    Ok(Selection {
        person,
        currency,
        from,
        to,
    })
}

/// Full run for one interaction: read, clean, select, and restrict dates.
pub fn load_expenses(
    cfg: &Config,
    sub: &clap::ArgMatches,
) -> Result<(ExpenseTable, Selection)> {
    let raw = load_raw(sub)?;
    let sel = resolve_selection(&raw, cfg, sub)?;
    let table = ledger::clean_ledger(&raw, &sel.currency, &sel.person, &cfg.date_formats)
        .context("Clean ledger")?
        .between(sel.from, sel.to);
    Ok((table, sel))
}
