// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-only summaries of an [`ExpenseTable`] that feed reports and charts.

use crate::models::{Expense, ExpenseTable};
use crate::utils::{month_end, week_end};
use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Display order for weekday summaries.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Calendar week ending on Sunday, labelled by that Sunday.
    Week,
    /// Calendar month, labelled by its last day.
    Month,
}

impl Bucket {
    pub fn label(self, date: NaiveDate) -> NaiveDate {
        match self {
            Bucket::Week => week_end(date),
            Bucket::Month => month_end(date),
        }
    }

    fn next(self, label: NaiveDate) -> Option<NaiveDate> {
        match self {
            Bucket::Week => label.checked_add_days(Days::new(7)),
            Bucket::Month => label.succ_opt().map(month_end),
        }
    }

    /// Every label from the bucket of `first` to the bucket of `last`.
    fn labels(self, first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
        let end = self.label(last);
        let mut out = Vec::new();
        let mut cur = Some(self.label(first));
        while let Some(label) = cur.filter(|l| *l <= end) {
            out.push(label);
            cur = self.next(label);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub cost: Decimal,
    pub balance_change: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSum {
    pub bucket: NaiveDate,
    pub r#type: String,
    pub cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketTotal {
    pub bucket: NaiveDate,
    pub cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeTotal {
    pub r#type: String,
    pub cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayMean {
    pub weekday: String,
    pub count: usize,
    pub mean: Decimal,
}

/// Running sums of cost and balance change, one point per row in date order.
pub fn cumulative(table: &ExpenseTable) -> Vec<CumulativePoint> {
    let mut cost = Decimal::ZERO;
    let mut balance_change = Decimal::ZERO;
    table
        .rows()
        .iter()
        .map(|r| {
            cost += r.cost;
            balance_change += r.balance_change;
            CumulativePoint {
                date: r.date,
                cost,
                balance_change,
            }
        })
        .collect()
}

/// Cost per (bucket, type). The grid is complete: every bucket between the
/// first and last expense appears once per observed type, zero when empty.
pub fn bucket_sums(table: &ExpenseTable, bucket: Bucket) -> Vec<BucketSum> {
    let (Some(first), Some(last)) = (table.first_date(), table.last_date()) else {
        return Vec::new();
    };
    let types: BTreeSet<&str> = table.rows().iter().map(|r| r.r#type.as_str()).collect();
    let mut sums: BTreeMap<(NaiveDate, &str), Decimal> = BTreeMap::new();
    for r in table.rows() {
        *sums
            .entry((bucket.label(r.date), r.r#type.as_str()))
            .or_insert(Decimal::ZERO) += r.cost;
    }

    let mut out = Vec::new();
    for label in bucket.labels(first, last) {
        for ty in &types {
            out.push(BucketSum {
                bucket: label,
                r#type: ty.to_string(),
                cost: sums.get(&(label, *ty)).copied().unwrap_or(Decimal::ZERO),
            });
        }
    }
    out
}

/// Cost per bucket across all types, empty buckets included.
pub fn bucket_totals(table: &ExpenseTable, bucket: Bucket) -> Vec<BucketTotal> {
    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for s in bucket_sums(table, bucket) {
        *totals.entry(s.bucket).or_insert(Decimal::ZERO) += s.cost;
    }
    totals
        .into_iter()
        .map(|(bucket, cost)| BucketTotal { bucket, cost })
        .collect()
}

pub fn type_totals(table: &ExpenseTable) -> Vec<TypeTotal> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for r in table.rows() {
        *totals.entry(r.r#type.as_str()).or_insert(Decimal::ZERO) += r.cost;
    }
    totals
        .into_iter()
        .map(|(ty, cost)| TypeTotal {
            r#type: ty.to_string(),
            cost,
        })
        .collect()
}

/// Mean cost per weekday, Monday first. Weekdays without expenses are left out.
pub fn weekday_means(table: &ExpenseTable) -> Vec<WeekdayMean> {
    let mut acc = [(0usize, Decimal::ZERO); 7];
    for r in table.rows() {
        let slot = &mut acc[r.date.weekday().num_days_from_monday() as usize];
        slot.0 += 1;
        slot.1 += r.cost;
    }
    WEEKDAYS
        .iter()
        .zip(acc)
        .filter(|(_, (count, _))| *count > 0)
        .map(|(name, (count, sum))| WeekdayMean {
            weekday: name.to_string(),
            count,
            mean: sum / Decimal::from(count),
        })
        .collect()
}

/// Per-type cost accumulated day by day, every calendar day and type present.
/// Normalizing each day's values gives the running share of spending by type.
pub fn daily_cumulative_by_type(table: &ExpenseTable) -> Vec<BucketSum> {
    let (Some(first), Some(last)) = (table.first_date(), table.last_date()) else {
        return Vec::new();
    };
    let types: BTreeSet<&str> = table.rows().iter().map(|r| r.r#type.as_str()).collect();
    let mut daily: BTreeMap<(NaiveDate, &str), Decimal> = BTreeMap::new();
    for r in table.rows() {
        *daily
            .entry((r.date, r.r#type.as_str()))
            .or_insert(Decimal::ZERO) += r.cost;
    }

    let mut running: BTreeMap<&str, Decimal> = types.iter().map(|t| (*t, Decimal::ZERO)).collect();
    let mut out = Vec::new();
    for day in first.iter_days().take_while(|d| *d <= last) {
        for (ty, total) in running.iter_mut() {
            *total += daily.get(&(day, *ty)).copied().unwrap_or(Decimal::ZERO);
            out.push(BucketSum {
                bucket: day,
                r#type: ty.to_string(),
                cost: *total,
            });
        }
    }
    out
}

/// Value at quantile `q` (0..=1), interpolating linearly between closest ranks.
pub fn quantile(values: &[Decimal], q: Decimal) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort();
    let q = q.clamp(Decimal::ZERO, Decimal::ONE);
    let pos = q * Decimal::from(sorted.len() - 1);
    let lo = pos.floor().to_usize()?;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = pos - pos.floor();
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Drops rows whose cost lies above quantile `q`, so a few large expenses do
/// not flatten histogram and scatter scales.
pub fn trim_outliers(table: &ExpenseTable, q: Decimal) -> ExpenseTable {
    let costs: Vec<Decimal> = table.rows().iter().map(|r| r.cost).collect();
    let Some(cut) = quantile(&costs, q) else {
        return ExpenseTable::default();
    };
    let kept: Vec<Expense> = table
        .rows()
        .iter()
        .filter(|r| r.cost <= cut)
        .cloned()
        .collect();
    log::debug!(
        "outlier cut at {} kept {} of {} rows",
        cut,
        kept.len(),
        table.len()
    );
    ExpenseTable::new(kept)
}
