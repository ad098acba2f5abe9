// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::parse_bounded;
use crate::models::RawLedger;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: &'static str,
    pub line: u64,
    pub detail: String,
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let raw = super::load_raw(sub)?;
    let issues = check(&raw);
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.kind.to_string(), i.line.to_string(), i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Line", "Detail"], rows));
    }
    Ok(())
}

/// Finds rows that would break the pipeline or the zero-sum balance rule.
/// Balance-carry rows are skipped, as the pipeline skips them.
pub fn check(raw: &RawLedger) -> Vec<Issue> {
    let tolerance = Decimal::new(1, 2);
    let persons = &raw.headers[raw.headers.len().min(5)..];
    let mut issues = Vec::new();

    for (line, cells) in &raw.rows {
        let total = cells.get(3).map(|s| s.trim()).unwrap_or("");
        if total.is_empty() {
            continue;
        }
        if parse_bounded(total).is_none() {
            issues.push(Issue {
                kind: "bad_total_cost",
                line: *line,
                detail: total.to_string(),
            });
        }

        let mut sum = Decimal::ZERO;
        let mut bad_cell = false;
        for (idx, person) in persons.iter().enumerate() {
            let cell = cells.get(5 + idx).map(|s| s.trim()).unwrap_or("");
            if cell.is_empty() {
                continue;
            }
            match parse_bounded(cell) {
                Some(v) => sum += v,
                None => {
                    bad_cell = true;
                    issues.push(Issue {
                        kind: "bad_balance",
                        line: *line,
                        detail: format!("{}: {}", person, cell),
                    });
                }
            }
        }
        if !bad_cell && sum.abs() > tolerance {
            issues.push(Issue {
                kind: "unbalanced",
                line: *line,
                detail: format!("balances sum to {}", sum),
            });
        }
    }
    issues
}
