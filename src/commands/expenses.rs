// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::models::ExpenseTable;
use crate::stats;
use crate::utils::{fmt_amount, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (table, sel) = super::load_expenses(cfg, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &table.rows())? {
        println!("{}", expense_table(&table));
        println!(
            "{} rows for {}, total {}",
            table.len(),
            sel.person,
            fmt_money(&table.total_cost(), &sel.currency)
        );
    }
    Ok(())
}

pub fn describe(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (table, _) = super::load_expenses(cfg, sub)?;
    let summary = stats::describe(&table);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        let opt = |v: Option<rust_decimal::Decimal>| v.map(|d| fmt_amount(&d)).unwrap_or_default();
        let rows = summary
            .into_iter()
            .map(|s| {
                vec![
                    s.column,
                    s.count.to_string(),
                    opt(s.mean),
                    opt(s.std),
                    opt(s.min),
                    opt(s.p25),
                    opt(s.p50),
                    opt(s.p75),
                    opt(s.max),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"],
                rows,
            )
        );
    }
    Ok(())
}

pub fn expense_table(table: &ExpenseTable) -> comfy_table::Table {
    let rows = table
        .rows()
        .iter()
        .map(|r| {
            vec![
                r.date.to_string(),
                r.r#type.clone(),
                fmt_amount(&r.total_cost),
                r.currency.clone(),
                r.person.clone(),
                fmt_amount(&r.balance_change),
                fmt_amount(&r.cost),
            ]
        })
        .collect();
    pretty_table(
        &["Date", "Type", "TotalCost", "CCY", "Person", "BalanceChange", "Cost"],
        rows,
    )
}
