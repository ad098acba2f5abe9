// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::ledger;
use crate::models::RawLedger;
use crate::utils::{maybe_print_json, parse_ledger_date, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LedgerOptions {
    pub persons: Vec<String>,
    pub currencies: Vec<String>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn handle(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let raw = super::load_raw(sub)?;
    let opts = ledger_options(&raw, cfg);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &opts)? {
        let span = match (opts.first_date, opts.last_date) {
            (Some(a), Some(b)) => format!("{} .. {}", a, b),
            _ => "(no dated rows)".to_string(),
        };
        let rows = vec![
            vec!["Persons".to_string(), opts.persons.join(", ")],
            vec!["Currencies".to_string(), opts.currencies.join(", ")],
            vec!["Dates".to_string(), span],
        ];
        println!("{}", pretty_table(&["Option", "Values"], rows));
    }
    Ok(())
}

/// Choices offered for a ledger. Dates that do not parse are skipped here;
/// the cleaning pipeline reports them.
pub fn ledger_options(raw: &RawLedger, cfg: &Config) -> LedgerOptions {
    let dates: Vec<NaiveDate> = raw
        .rows
        .iter()
        .filter(|(_, cells)| cells.get(3).is_some_and(|c| !c.trim().is_empty()))
        .filter_map(|(_, cells)| parse_ledger_date(cells.first()?, &cfg.date_formats))
        .collect();
    LedgerOptions {
        persons: ledger::persons(raw),
        currencies: ledger::currencies(raw),
        first_date: dates.iter().min().copied(),
        last_date: dates.iter().max().copied(),
    }
}
