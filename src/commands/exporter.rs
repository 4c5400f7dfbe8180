// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::File;

use crate::export::{export_filename, write_csv, write_json};
use crate::models::ReportRange;
use crate::session::Session;
use crate::views;

pub fn handle(session: &mut Session, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    if let Some(range) = m.get_one::<String>("range") {
        session.set_report_range(range.parse::<ReportRange>()?);
    }
    let fmt = m
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    if fmt != "csv" && fmt != "json" {
        eprintln!("Unknown format: {} (use csv|json)", fmt);
        return Ok(());
    }

    let expenses = views::report_expenses(session, today);
    let out = match m.get_one::<String>("out") {
        Some(path) => path.clone(),
        None => export_filename(chrono::Local::now().naive_local()),
    };
    let file = File::create(&out).with_context(|| format!("Create export file {}", out))?;
    match fmt.as_str() {
        "csv" => write_csv(&expenses, file)?,
        _ => write_json(&expenses, file)?,
    }
    println!(
        "Exported {} expenses ({}) to {}",
        expenses.len(),
        session.report_range,
        out
    );
    Ok(())
}
