// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use splitboard::{cli, commands, config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = config::load()?;

    match matches.subcommand() {
        Some(("options", sub)) => commands::options::handle(&cfg, sub)?,
        Some(("expenses", sub)) => commands::expenses::handle(&cfg, sub)?,
        Some(("describe", sub)) => commands::expenses::describe(&cfg, sub)?,
        Some(("report", sub)) => commands::reports::handle(&cfg, sub)?,
        Some(("charts", sub)) => commands::charts::handle(&cfg, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&cfg, sub)?,
        Some(("doctor", sub)) => commands::doctor::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
