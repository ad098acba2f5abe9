// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command};

fn path_arg() -> Arg {
    Arg::new("path")
        .long("path")
        .short('p')
        .required(true)
        .help("Shared-expense CSV export")
}

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

/// `--path` plus the person/currency/date-range selection.
fn selection_args(cmd: Command) -> Command {
    cmd.arg(path_arg())
        .arg(
            Arg::new("person")
                .long("person")
                .help("Participant column name (default: first participant)"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .help("Currency code (default: first currency in the file)"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("First day to include, YYYY-MM-DD"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Last day to include, YYYY-MM-DD"),
        )
}

fn report_cmd(name: &'static str, about: &'static str) -> Command {
    output_args(selection_args(Command::new(name).about(about)))
}

pub fn build_cli() -> Command {
    command!()
        .name("splitboard")
        .about("Per-person spending reports from shared-expense CSV exports")
        .subcommand_required(false)
        .subcommand(
            output_args(Command::new("options").about("List participants, currencies and date span"))
                .arg(path_arg()),
        )
        .subcommand(report_cmd("expenses", "Show the cleaned expense table"))
        .subcommand(report_cmd("describe", "Summary statistics of the cleaned table"))
        .subcommand(
            Command::new("report")
                .about("Aggregated views of the cleaned table")
                .subcommand_required(true)
                .subcommand(report_cmd("weekly", "Cost per week (ending Sunday) and type"))
                .subcommand(report_cmd("monthly", "Cost per month and type"))
                .subcommand(report_cmd("by-type", "Total cost per type"))
                .subcommand(report_cmd("by-weekday", "Mean cost per weekday"))
                .subcommand(report_cmd("cumulative", "Running totals over time"))
                .subcommand(
                    report_cmd("trimmed", "Expenses with the top cost outliers removed").arg(
                        Arg::new("quantile")
                            .long("quantile")
                            .allow_negative_numbers(true)
                            .help("Keep costs up to this quantile (default 0.99)"),
                    ),
                ),
        )
        .subcommand(
            selection_args(Command::new("charts").about("Emit Vega-Lite chart specifications"))
                .arg(
                    Arg::new("out")
                        .long("out")
                        .short('o')
                        .help("Write the specs to this file instead of stdout"),
                ),
        )
        .subcommand(
            selection_args(Command::new("export").about("Export the cleaned expense table"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").short('o').required(true)),
        )
        .subcommand(
            Command::new("doctor")
                .about("Check ledger rows for balance and amount problems")
                .arg(path_arg()),
        )
}
