// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{RawLedger, StandardLedger, StandardRow};
use crate::utils::parse_ledger_date;

/// Maps the five positional columns onto `STD_COLS`, whatever language the
/// export headers are in, and drops balance-carry rows (blank total cost).
pub fn standardize_columns<S: AsRef<str>>(
    raw: &RawLedger,
    date_formats: &[S],
) -> LedgerResult<StandardLedger> {
    if raw.headers.len() < 6 {
        return Err(LedgerError::MissingColumns {
            found: raw.headers.len(),
        });
    }
    let persons: Vec<String> = raw.headers[5..].to_vec();

    let mut rows = Vec::with_capacity(raw.rows.len());
    let mut carried = 0usize;
    for (line, cells) in &raw.rows {
        let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");
        if cell(3).trim().is_empty() {
            carried += 1;
            continue;
        }
        let date = parse_ledger_date(cell(0), date_formats).ok_or_else(|| {
            LedgerError::InvalidDate {
                line: *line,
                value: cell(0).to_string(),
            }
        })?;
        rows.push(StandardRow {
            line: *line,
            date,
            text: cell(1).to_string(),
            r#type: cell(2).trim().to_string(),
            total_cost: cell(3).trim().to_string(),
            currency: cell(4).trim().to_string(),
            balances: (5..5 + persons.len()).map(|i| cell(i).to_string()).collect(),
        });
    }
    if carried > 0 {
        log::warn!("dropped {} balance-carry rows without a total cost", carried);
    }
    log::debug!("standardized {} rows for {} persons", rows.len(), persons.len());
    Ok(StandardLedger { persons, rows })
}
