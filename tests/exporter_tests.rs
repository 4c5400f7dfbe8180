// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use fintrack::cli;
use fintrack::commands::exporter;
use fintrack::export::{export_filename, write_csv, CSV_HEADER};
use fintrack::models::{Expense, ExpenseStatus};
use fintrack::seed;
use fintrack::session::Session;
use tempfile::tempdir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "EXP-1".to_string(),
            description: "Desk, chairs, and \"misc\" accessories".to_string(),
            amount: "123.45".parse().unwrap(),
            date: date("2024-06-02"),
            category: "Office".to_string(),
            status: ExpenseStatus::Completed,
            merchant: "Staples".to_string(),
        },
        Expense {
            id: "EXP-2".to_string(),
            description: "Cloud storage".to_string(),
            amount: "100.00".parse().unwrap(),
            date: date("2024-06-03"),
            category: "Software".to_string(),
            status: ExpenseStatus::Pending,
            merchant: "AWS".to_string(),
        },
    ]
}

#[test]
fn csv_round_trip_preserves_rows_in_order() {
    let expenses = sample_expenses();
    let mut buf = Vec::new();
    write_csv(&expenses, &mut buf).unwrap();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(buf.as_slice());
    assert_eq!(rdr.headers().unwrap(), &csv::StringRecord::from(CSV_HEADER.to_vec()));

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), expenses.len());
    for (row, e) in rows.iter().zip(&expenses) {
        assert_eq!(&row[0], e.id.as_str());
        assert_eq!(&row[1], e.date.to_string().as_str());
        assert_eq!(&row[2], e.merchant.as_str());
        assert_eq!(&row[3], e.category.as_str());
        assert_eq!(&row[4], e.description.as_str());
        assert_eq!(row[5].parse::<rust_decimal::Decimal>().unwrap(), e.amount);
        assert_eq!(&row[6], e.status.to_string().as_str());
    }
}

#[test]
fn quoted_fields_survive_standard_csv_rules() {
    let expenses = sample_expenses();
    let mut buf = Vec::new();
    write_csv(&expenses, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("\"Desk, chairs, and \"\"misc\"\" accessories\""));
}

#[test]
fn export_filename_uses_the_timestamp() {
    let ts = date("2024-06-15").and_hms_opt(13, 45, 2).unwrap();
    assert_eq!(export_filename(ts), "fintrack_export_20240615_134502.csv");
}

#[test]
fn cli_export_writes_the_report_range_to_disk() {
    let today = date("2024-06-19");
    let mut session = Session::new(42);
    seed::ensure_demo_data(&mut session, today);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "fintrack", "export", "--range", "All Time", "--out", &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&mut session, export_m, today).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "ID,Date,Merchant,Category,Description,Amount,Status"
    );
    assert_eq!(lines.count(), 50, "one row per seeded expense");
}

#[test]
fn cli_export_json_mirrors_the_rows() {
    let today = date("2024-06-19");
    let mut session = Session::new(42);
    seed::ensure_demo_data(&mut session, today);

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "fintrack", "export", "--range", "All Time", "--format", "json", "--out", &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&mut session, export_m, today).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 50);
    assert_eq!(arr[0]["id"], session.expenses[0].id.as_str());
}
