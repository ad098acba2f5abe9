// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, ExpenseRow, ExpenseTable};

/// Keeps one person's non-zero costs in one currency, without the free text.
///
/// No match is not an error: callers get an empty table.
pub fn filter_values(rows: &[ExpenseRow], currency: &str, person: &str) -> ExpenseTable {
    let kept: Vec<Expense> = rows
        .iter()
        .filter(|r| r.currency == currency && r.person == person && !r.cost.is_zero())
        .map(|r| Expense {
            date: r.date,
            r#type: r.r#type.clone(),
            total_cost: r.total_cost,
            currency: r.currency.clone(),
            person: r.person.clone(),
            balance_change: r.balance_change,
            cost: r.cost,
        })
        .collect();
    log::debug!(
        "filter kept {} of {} rows ({} / {})",
        kept.len(),
        rows.len(),
        person,
        currency
    );
    ExpenseTable::new(kept)
}
