// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::charts;
use crate::config::Config;
use anyhow::{Context, Result};

pub fn handle(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (table, sel) = super::load_expenses(cfg, sub)?;
    let specs = charts::dashboard(&table, cfg.outlier_quantile);
    let text = serde_json::to_string_pretty(&specs)?;
    match sub.get_one::<String>("out") {
        Some(out) => {
            std::fs::write(out, text).with_context(|| format!("Write charts to {}", out))?;
            println!(
                "Wrote charts for {} ({}) to {}",
                sel.person, sel.currency, out
            );
        }
        None => println!("{}", text),
    }
    Ok(())
}
