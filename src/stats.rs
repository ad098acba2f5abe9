// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::quantile;
use crate::models::{Expense, ExpenseTable};
use rust_decimal::{Decimal, MathematicalOps};
use serde::Serialize;

/// Count, mean, spread and quartiles of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<Decimal>,
    /// Sample standard deviation; needs at least two values.
    pub std: Option<Decimal>,
    pub min: Option<Decimal>,
    pub p25: Option<Decimal>,
    pub p50: Option<Decimal>,
    pub p75: Option<Decimal>,
    pub max: Option<Decimal>,
}

pub fn summarize(column: &str, values: &[Decimal]) -> ColumnSummary {
    let count = values.len();
    let mean = (count > 0).then(|| values.iter().sum::<Decimal>() / Decimal::from(count));
    let std = match mean {
        Some(m) if count > 1 => sample_std(values, m),
        _ => None,
    };
    ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std,
        min: values.iter().min().copied(),
        p25: quantile(values, Decimal::new(25, 2)),
        p50: quantile(values, Decimal::new(50, 2)),
        p75: quantile(values, Decimal::new(75, 2)),
        max: values.iter().max().copied(),
    }
}

/// `None` when the squared deviations leave `Decimal` range.
fn sample_std(values: &[Decimal], mean: Decimal) -> Option<Decimal> {
    let mut ss = Decimal::ZERO;
    for v in values {
        let dev = v.checked_sub(mean)?;
        ss = ss.checked_add(dev.checked_mul(dev)?)?;
    }
    (ss / Decimal::from(values.len() - 1)).sqrt()
}

/// Summaries for the numeric columns of a cleaned table.
pub fn describe(table: &ExpenseTable) -> Vec<ColumnSummary> {
    let rows = table.rows();
    let column = |f: fn(&Expense) -> Decimal| rows.iter().map(f).collect::<Vec<_>>();
    vec![
        summarize("TotalCost", &column(|r| r.total_cost)),
        summarize("BalanceChange", &column(|r| r.balance_change)),
        summarize("Cost", &column(|r| r.cost)),
    ]
}
