// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Report export. CSV is the primary format (standard quoting, fixed
//! header); JSON mirrors the same rows for tooling.

use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::Write;

use crate::models::Expense;

pub const CSV_HEADER: [&str; 7] = [
    "ID",
    "Date",
    "Merchant",
    "Category",
    "Description",
    "Amount",
    "Status",
];

/// Timestamped default filename, e.g. `fintrack_export_20250101_093000.csv`.
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("fintrack_export_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

pub fn write_csv<W: Write>(expenses: &[Expense], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for e in expenses {
        wtr.write_record([
            e.id.as_str(),
            &e.date.to_string(),
            e.merchant.as_str(),
            e.category.as_str(),
            e.description.as_str(),
            &e.amount.to_string(),
            &e.status.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(expenses: &[Expense], mut out: W) -> Result<()> {
    out.write_all(serde_json::to_string_pretty(expenses)?.as_bytes())?;
    Ok(())
}
