// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseRow, STD_COLS, StandardLedger};
use crate::utils::parse_amount;
use rust_decimal::Decimal;

/// Largest magnitude accepted for a ledger amount (10^12). Keeps every sum
/// over a table well inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// A ledger amount, or `None` when it is not a number or exceeds `MAX_AMOUNT`.
pub fn parse_bounded(raw: &str) -> Option<Decimal> {
    parse_amount(raw).filter(|v| v.abs() <= MAX_AMOUNT)
}

/// Melts the per-participant columns into one row per (transaction, person).
///
/// Rows are emitted person by person, each person covering every transaction
/// in ledger order. Participants with a zero balance change are still
/// emitted, with a zero cost.
pub fn unpivot_table(ledger: &StandardLedger) -> LedgerResult<Vec<ExpenseRow>> {
    let mut totals = Vec::with_capacity(ledger.rows.len());
    for row in &ledger.rows {
        let total = parse_bounded(&row.total_cost).ok_or_else(|| LedgerError::InvalidAmount {
            line: row.line,
            column: STD_COLS[3].to_string(),
            value: row.total_cost.clone(),
        })?;
        totals.push(total);
    }

    let mut out = Vec::with_capacity(ledger.rows.len() * ledger.persons.len());
    for (idx, person) in ledger.persons.iter().enumerate() {
        for (row, total_cost) in ledger.rows.iter().zip(&totals) {
            let raw = row.balances.get(idx).map(|s| s.trim()).unwrap_or("");
            // blank cell: not part of the split
            let balance_change = if raw.is_empty() {
                Decimal::ZERO
            } else {
                parse_bounded(raw).ok_or_else(|| LedgerError::InvalidAmount {
                    line: row.line,
                    column: person.clone(),
                    value: raw.to_string(),
                })?
            };
            out.push(ExpenseRow {
                date: row.date,
                text: row.text.clone(),
                r#type: row.r#type.clone(),
                total_cost: *total_cost,
                currency: row.currency.clone(),
                person: person.clone(),
                balance_change,
                cost: individual_cost(*total_cost, balance_change),
            });
        }
    }
    log::debug!("unpivoted into {} person rows", out.len());
    Ok(out)
}

/// Out-of-pocket share of one participant.
///
/// A negative balance change is what they owe for the expense; a positive
/// one means they fronted the whole amount and are owed all but their share.
pub fn individual_cost(total_cost: Decimal, balance_change: Decimal) -> Decimal {
    if balance_change.is_zero() {
        Decimal::ZERO
    } else if balance_change.is_sign_negative() {
        -balance_change
    } else {
        total_cost - balance_change
    }
}
