// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{self, Bucket};
use crate::config::Config;
use crate::utils::{check_quantile, fmt_amount, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("weekly", sub)) => buckets(cfg, sub, Bucket::Week)?,
        Some(("monthly", sub)) => buckets(cfg, sub, Bucket::Month)?,
        Some(("by-type", sub)) => by_type(cfg, sub)?,
        Some(("by-weekday", sub)) => by_weekday(cfg, sub)?,
        Some(("cumulative", sub)) => cumulative(cfg, sub)?,
        Some(("trimmed", sub)) => trimmed(cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn buckets(cfg: &Config, sub: &clap::ArgMatches, bucket: Bucket) -> Result<()> {
    let (table, _) = super::load_expenses(cfg, sub)?;
    let data = aggregate::bucket_sums(&table, bucket);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let hdr = match bucket {
            Bucket::Week => "Week ending",
            Bucket::Month => "Month ending",
        };
        let rows = data
            .into_iter()
            .map(|s| vec![s.bucket.to_string(), s.r#type, fmt_amount(&s.cost)])
            .collect();
        println!("{}", pretty_table(&[hdr, "Type", "Cost"], rows));
    }
    Ok(())
}

fn by_type(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (table, _) = super::load_expenses(cfg, sub)?;
    let mut data = aggregate::type_totals(&table);
    data.sort_by(|a, b| b.cost.cmp(&a.cost));
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|t| vec![t.r#type, fmt_amount(&t.cost)])
            .collect();
        println!("{}", pretty_table(&["Type", "Cost"], rows));
    }
    Ok(())
}

fn by_weekday(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (table, _) = super::load_expenses(cfg, sub)?;
    let data = aggregate::weekday_means(&table);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|w| vec![w.weekday, w.count.to_string(), fmt_amount(&w.mean)])
            .collect();
        println!("{}", pretty_table(&["Weekday", "Count", "Mean Cost"], rows));
    }
    Ok(())
}

fn cumulative(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (table, _) = super::load_expenses(cfg, sub)?;
    let data = aggregate::cumulative(&table);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .into_iter()
            .map(|p| {
                vec![
                    p.date.to_string(),
                    fmt_amount(&p.cost),
                    fmt_amount(&p.balance_change),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "Cost", "BalanceChange"], rows));
    }
    Ok(())
}

fn trimmed(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let q = match sub.get_one::<String>("quantile") {
        Some(s) => parse_decimal(s).and_then(check_quantile).context("--quantile")?,
        None => cfg.outlier_quantile,
    };
    let (table, _) = super::load_expenses(cfg, sub)?;
    let kept = aggregate::trim_outliers(&table, q);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &kept.rows())? {
        println!("{}", super::expenses::expense_table(&kept));
        println!("kept {} of {} rows", kept.len(), table.len());
    }
    Ok(())
}
