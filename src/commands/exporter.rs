// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::models::ExpenseTable;
use anyhow::{Result, bail};
use serde_json::json;
use std::path::Path;

pub fn handle(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub
        .get_one::<String>("out")
        .ok_or_else(|| anyhow::anyhow!("--out is required"))?;
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let (table, _) = super::load_expenses(cfg, sub)?;
    export_table(&table, &fmt, Path::new(out))?;
    println!("Exported {} expenses to {}", table.len(), out);
    Ok(())
}

pub fn export_table(table: &ExpenseTable, fmt: &str, out: &Path) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "Date",
                "Type",
                "TotalCost",
                "Currency",
                "Person",
                "BalanceChange",
                "Cost",
            ])?;
            for r in table.rows() {
                wtr.write_record([
                    r.date.to_string(),
                    r.r#type.clone(),
                    r.total_cost.to_string(),
                    r.currency.clone(),
                    r.person.clone(),
                    r.balance_change.to_string(),
                    r.cost.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = table
                .rows()
                .iter()
                .map(|r| {
                    json!({
                        "date": r.date.to_string(),
                        "type": r.r#type,
                        "total_cost": r.total_cost.to_string(),
                        "currency": r.currency,
                        "person": r.person,
                        "balance_change": r.balance_change.to_string(),
                        "cost": r.cost.to_string(),
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    Ok(())
}
