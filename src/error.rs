// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Errors raised by the ledger cleaning pipeline.
//!
//! Line numbers are 1-based and count the header, so they match what an
//! editor shows for the CSV file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Failed to read ledger: {0}")]
    Csv(#[from] csv::Error),

    #[error("Ledger has {found} columns, expected 5 metadata columns and at least one participant")]
    MissingColumns { found: usize },

    #[error("Line {line}: invalid date '{value}'")]
    InvalidDate { line: u64, value: String },

    #[error("Line {line}: invalid number '{value}' in column '{column}'")]
    InvalidAmount {
        line: u64,
        column: String,
        value: String,
    },
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
