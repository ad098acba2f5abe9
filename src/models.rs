// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed names given to the five positional metadata columns.
pub const STD_COLS: [&str; 5] = ["Date", "Text", "Type", "TotalCost", "Currency"];

/// Wide ledger exactly as read from the CSV export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawLedger {
    pub headers: Vec<String>,
    /// (line number, cells)
    pub rows: Vec<(u64, Vec<String>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardRow {
    pub line: u64,
    pub date: NaiveDate,
    pub text: String,
    pub r#type: String,
    pub total_cost: String,
    pub currency: String,
    /// One raw cell per participant, in `StandardLedger::persons` order.
    pub balances: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardLedger {
    pub persons: Vec<String>,
    pub rows: Vec<StandardRow>,
}

/// One (transaction, participant) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub date: NaiveDate,
    pub text: String,
    pub r#type: String,
    pub total_cost: Decimal,
    pub currency: String,
    pub person: String,
    pub balance_change: Decimal,
    pub cost: Decimal,
}

/// A long row after filtering: free text dropped, single person and currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub r#type: String,
    pub total_cost: Decimal,
    pub currency: String,
    pub person: String,
    pub balance_change: Decimal,
    pub cost: Decimal,
}

/// Expenses of one person in one currency, sorted ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpenseTable {
    rows: Vec<Expense>,
}

impl ExpenseTable {
    /// Builds a table, sorting by date. The sort is stable so same-day rows
    /// keep their ledger order.
    pub fn new(mut rows: Vec<Expense>) -> Self {
        rows.sort_by_key(|r| r.date);
        Self { rows }
    }

    pub fn rows(&self) -> &[Expense] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }

    pub fn total_cost(&self) -> Decimal {
        self.rows.iter().map(|r| r.cost).sum()
    }

    /// Rows with `start <= date <= end`; a missing bound is open.
    pub fn between(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let rows = self
            .rows
            .iter()
            .filter(|r| start.is_none_or(|s| r.date >= s))
            .filter(|r| end.is_none_or(|e| r.date <= e))
            .cloned()
            .collect();
        Self { rows }
    }
}

/// Participant, currency, and date range picked for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub person: String,
    pub currency: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
