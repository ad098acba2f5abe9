// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerResult;
use crate::models::RawLedger;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

pub fn read_ledger(path: &Path) -> LedgerResult<RawLedger> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    collect(rdr)
}

pub fn read_ledger_from<R: Read>(input: R) -> LedgerResult<RawLedger> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    collect(rdr)
}

fn collect<R: Read>(mut rdr: csv::Reader<R>) -> LedgerResult<RawLedger> {
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let width = headers.len();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let line = rec.position().map(|p| p.line()).unwrap_or_default();
        let mut cells: Vec<String> = rec.iter().map(|s| s.to_string()).collect();
        if cells.len() < width {
            cells.resize(width, String::new());
        }
        rows.push((line, cells));
    }
    log::debug!("read {} ledger rows, {} columns", rows.len(), width);
    Ok(RawLedger { headers, rows })
}
