// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Cleaning pipeline for shared-expense exports.
//!
//! ```text
//!  CSV ──read──▶ RawLedger ──standardize──▶ StandardLedger
//!                                              │
//!                                           unpivot
//!                                              ▼
//!              ExpenseTable ◀──filter── Vec<ExpenseRow>
//! ```
//!
//! Every stage borrows its input and returns a fresh value, so any view can be
//! re-derived from the raw ledger without shared intermediates.

pub mod filter;
pub mod reader;
pub mod standardize;
pub mod unpivot;

pub use filter::filter_values;
pub use reader::{read_ledger, read_ledger_from};
pub use standardize::standardize_columns;
pub use unpivot::{MAX_AMOUNT, individual_cost, parse_bounded, unpivot_table};

use crate::error::LedgerResult;
use crate::models::{ExpenseTable, RawLedger};

/// Runs standardize → unpivot → filter for one person and currency.
pub fn clean_ledger<S: AsRef<str>>(
    raw: &RawLedger,
    currency: &str,
    person: &str,
    date_formats: &[S],
) -> LedgerResult<ExpenseTable> {
    let standard = standardize_columns(raw, date_formats)?;
    let long = unpivot_table(&standard)?;
    let table = filter_values(&long, currency, person);
    log::info!(
        "{} expense rows for '{}' in {}",
        table.len(),
        person,
        currency
    );
    Ok(table)
}

/// Participant identifiers: every header after the five metadata columns.
pub fn persons(raw: &RawLedger) -> Vec<String> {
    raw.headers.iter().skip(5).cloned().collect()
}

/// Distinct currencies in first-seen order, ignoring balance-carry rows.
pub fn currencies(raw: &RawLedger) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (_, cells) in &raw.rows {
        let cost = cells.get(3).map(|s| s.trim()).unwrap_or("");
        if cost.is_empty() {
            continue;
        }
        if let Some(ccy) = cells.get(4).map(|s| s.trim()).filter(|s| !s.is_empty()) {
            if !out.iter().any(|c| c == ccy) {
                out.push(ccy.to_string());
            }
        }
    }
    out
}
