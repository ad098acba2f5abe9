// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use splitboard::config::Config;
use splitboard::{cli, commands, ledger};
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

const LEDGER: &str = include_str!("fixtures/ledger.csv");

fn ledger_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn selection_defaults_to_first_person_and_currency() {
    let file = ledger_file(LEDGER);
    let path = file.path().to_str().unwrap().to_string();
    let matches = cli::build_cli().get_matches_from(["splitboard", "expenses", "--path", &path]);
    let Some(("expenses", sub)) = matches.subcommand() else {
        panic!("no expenses subcommand");
    };
    let raw = commands::load_raw(sub).unwrap();
    let sel = commands::resolve_selection(&raw, &Config::default(), sub).unwrap();
    assert_eq!(sel.person, "Alice");
    assert_eq!(sel.currency, "BRL");
    assert_eq!(sel.from, None);
}

#[test]
fn config_defaults_yield_to_flags() {
    let file = ledger_file(LEDGER);
    let path = file.path().to_str().unwrap().to_string();
    let cfg = Config {
        default_person: Some("Carol".into()),
        default_currency: Some("USD".into()),
        ..Config::default()
    };
    let matches = cli::build_cli().get_matches_from([
        "splitboard",
        "describe",
        "--path",
        &path,
        "--currency",
        "BRL",
    ]);
    let Some(("describe", sub)) = matches.subcommand() else {
        panic!("no describe subcommand");
    };
    let raw = commands::load_raw(sub).unwrap();
    let sel = commands::resolve_selection(&raw, &cfg, sub).unwrap();
    assert_eq!(sel.person, "Carol");
    assert_eq!(sel.currency, "BRL");
}

#[test]
fn load_expenses_applies_date_range() {
    let file = ledger_file(LEDGER);
    let path = format!("  {}  ", file.path().to_str().unwrap());
    let matches = cli::build_cli().get_matches_from([
        "splitboard",
        "report",
        "weekly",
        "--path",
        &path,
        "--person",
        "Bob",
        "--from",
        "2021-01-02",
        "--to",
        "2021-01-10",
    ]);
    let Some(("report", report_m)) = matches.subcommand() else {
        panic!("no report subcommand");
    };
    let Some(("weekly", sub)) = report_m.subcommand() else {
        panic!("no weekly subcommand");
    };
    let (table, sel) = commands::load_expenses(&Config::default(), sub).unwrap();
    assert_eq!(sel.person, "Bob");
    let dates: Vec<_> = table.rows().iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 5).unwrap(),
        ]
    );
}

#[test]
fn bad_date_in_ledger_aborts_run() {
    let file = ledger_file("d,t,k,c,ccy,Alice,Bob\nyesterday,x,food,10,BRL,-5,5\n");
    let path = file.path().to_str().unwrap().to_string();
    let matches = cli::build_cli().get_matches_from(["splitboard", "expenses", "--path", &path]);
    let Some(("expenses", sub)) = matches.subcommand() else {
        panic!("no expenses subcommand");
    };
    assert!(commands::expenses::handle(&Config::default(), sub).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let path = path.to_string_lossy().to_string();
    let matches = cli::build_cli().get_matches_from(["splitboard", "options", "--path", &path]);
    let Some(("options", sub)) = matches.subcommand() else {
        panic!("no options subcommand");
    };
    let err = commands::options::handle(&Config::default(), sub).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.csv"));
}

#[test]
fn ledger_options_lists_choices() {
    let raw = ledger::read_ledger_from(LEDGER.as_bytes()).unwrap();
    let opts = commands::options::ledger_options(&raw, &Config::default());
    assert_eq!(opts.persons, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(opts.currencies, vec!["BRL", "USD"]);
    assert_eq!(opts.first_date, NaiveDate::from_ymd_opt(2021, 1, 1));
    assert_eq!(opts.last_date, NaiveDate::from_ymd_opt(2021, 1, 15));
}

#[test]
fn export_json_writes_cleaned_rows() {
    let file = ledger_file(LEDGER);
    let path = file.path().to_str().unwrap().to_string();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("alice.json");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "splitboard",
        "export",
        "--path",
        &path,
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    commands::exporter::handle(&Config::default(), sub).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["date"], "2021-01-01");
    assert_eq!(items[0]["person"], "Alice");
    assert_eq!(items[0]["cost"], "40.00");
    assert!(items[0].get("text").is_none());
}

#[test]
fn export_csv_has_header_and_rows() {
    let file = ledger_file(LEDGER);
    let path = file.path().to_str().unwrap().to_string();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("carol.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "splitboard",
        "export",
        "--path",
        &path,
        "--person",
        "Carol",
        "--out",
        &out_str,
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    commands::exporter::handle(&Config::default(), sub).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("Date,Type,TotalCost,Currency,Person,BalanceChange,Cost")
    );
    // lunch, taxi, groceries, dinner
    assert_eq!(lines.count(), 4);
}

#[test]
fn export_rejects_unknown_format() {
    let file = ledger_file(LEDGER);
    let path = file.path().to_str().unwrap().to_string();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.xml");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "splitboard",
        "export",
        "--path",
        &path,
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    assert!(commands::exporter::handle(&Config::default(), sub).is_err());
    assert!(!out_path.exists());
}

#[test]
fn charts_are_written_as_vega_lite() {
    let file = ledger_file(LEDGER);
    let path = file.path().to_str().unwrap().to_string();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("charts.json");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "splitboard",
        "charts",
        "--path",
        &path,
        "--out",
        &out_str,
    ]);
    let Some(("charts", sub)) = matches.subcommand() else {
        panic!("no charts subcommand");
    };
    commands::charts::handle(&Config::default(), sub).unwrap();

    let specs: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    for key in ["cumulative", "by_week", "by_type", "type_share", "by_weekday", "distribution"] {
        assert!(specs[key]["$schema"].as_str().unwrap().contains("vega-lite"));
    }
    assert_eq!(specs["by_type"]["data"]["values"].as_array().unwrap().len(), 2);
    assert_eq!(
        specs["type_share"]["encoding"]["y"]["stack"],
        serde_json::json!("normalize")
    );
    assert_eq!(specs["by_weekday"]["encoding"]["x"]["sort"][6], "Sunday");
}

#[test]
fn doctor_flags_unbalanced_and_bad_cells() {
    let csv = "d,t,k,c,ccy,Alice,Bob\n\
               2021-01-01,ok,food,10,BRL,-5,5\n\
               2021-01-02,off,food,10,BRL,-5,6\n\
               2021-01-03,bad,food,ten,BRL,-5,x\n\
               2021-01-04,Total balance, , ,BRL,3,-1\n";
    let raw = ledger::read_ledger_from(csv.as_bytes()).unwrap();
    let issues = commands::doctor::check(&raw);
    let kinds: Vec<_> = issues.iter().map(|i| (i.kind, i.line)).collect();
    assert_eq!(
        kinds,
        vec![("unbalanced", 3), ("bad_total_cost", 4), ("bad_balance", 4)]
    );
}

#[test]
fn trimmed_report_rejects_out_of_range_quantile() {
    let file = ledger_file(LEDGER);
    let path = file.path().to_str().unwrap().to_string();
    for bad in ["5", "-1", "0"] {
        let matches = cli::build_cli().get_matches_from([
            "splitboard",
            "report",
            "trimmed",
            "--path",
            &path,
            "--quantile",
            bad,
        ]);
        let Some(("report", report_m)) = matches.subcommand() else {
            panic!("no report subcommand");
        };
        let err = commands::reports::handle(&Config::default(), report_m).unwrap_err();
        assert!(format!("{:#}", err).contains("quantile"));
    }
}

#[test]
fn doctor_flags_oversized_amounts() {
    let csv = "d,t,k,c,ccy,Alice,Bob\n2021-01-01,big,food,5e28,BRL,-5e28,5e28\n";
    let raw = ledger::read_ledger_from(csv.as_bytes()).unwrap();
    let kinds: Vec<_> = commands::doctor::check(&raw)
        .iter()
        .map(|i| i.kind)
        .collect();
    assert_eq!(kinds, vec!["bad_total_cost", "bad_balance", "bad_balance"]);
}
