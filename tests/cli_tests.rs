// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use fintrack::cli;
use fintrack::commands::{doctor, expenses, settings};
use fintrack::models::{Expense, ExpenseStatus, SortField};
use fintrack::seed;
use fintrack::session::Session;
use fintrack::views;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 19).unwrap()
}

fn seeded() -> Session {
    let mut s = Session::new(42);
    seed::ensure_demo_data(&mut s, today());
    s
}

fn expense_list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut full = vec!["fintrack", "expense"];
    full.extend_from_slice(args);
    cli::build_cli().get_matches_from(full)
}

#[test]
fn list_flags_drive_the_selectors() {
    let mut s = seeded();
    let matches = expense_list_matches(&["list", "--search", "zzz", "--page", "3"]);
    if let Some(("expense", m)) = matches.subcommand() {
        expenses::handle(&mut s, m, today()).unwrap();
    } else {
        panic!("no expense subcommand");
    }
    assert_eq!(s.search_value, "zzz");
    // No match for "zzz": a single empty page, so the request for page 3
    // clamps back to 1.
    assert_eq!(s.page, 1);
    assert!(views::paginated_expenses(&s).is_empty());
}

#[test]
fn sort_flags_land_on_field_and_direction() {
    let mut s = seeded();
    let matches = expense_list_matches(&["list", "--sort", "amount", "--asc"]);
    if let Some(("expense", m)) = matches.subcommand() {
        expenses::handle(&mut s, m, today()).unwrap();
    } else {
        panic!("no expense subcommand");
    }
    assert_eq!(s.sort_value, SortField::Amount);
    assert!(!s.sort_reverse);

    // Descending on the already-current default field stays descending.
    let mut s = seeded();
    let matches = expense_list_matches(&["list", "--sort", "date"]);
    if let Some(("expense", m)) = matches.subcommand() {
        expenses::handle(&mut s, m, today()).unwrap();
    }
    assert_eq!(s.sort_value, SortField::Date);
    assert!(s.sort_reverse);
}

#[test]
fn unknown_sort_field_is_rejected() {
    let mut s = seeded();
    let matches = expense_list_matches(&["list", "--sort", "payee"]);
    if let Some(("expense", m)) = matches.subcommand() {
        assert!(expenses::handle(&mut s, m, today()).is_err());
    }
}

#[test]
fn cli_add_update_delete_round_trip() {
    let mut s = Session::new(1);

    let matches = expense_list_matches(&[
        "add", "--merchant", "Acme", "--amount", "100", "--category", "Office", "--date",
        "2024-01-01",
    ]);
    if let Some(("expense", m)) = matches.subcommand() {
        expenses::handle(&mut s, m, today()).unwrap();
    }
    assert_eq!(s.expenses.len(), 1);
    let id = s.expenses[0].id.clone();
    assert_eq!(s.expenses[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(s.expenses[0].status, ExpenseStatus::Pending);

    let matches = expense_list_matches(&["update", "--id", &id, "--status", "Completed"]);
    if let Some(("expense", m)) = matches.subcommand() {
        expenses::handle(&mut s, m, today()).unwrap();
    }
    assert_eq!(s.expenses[0].status, ExpenseStatus::Completed);
    assert_eq!(s.expenses[0].merchant, "Acme", "untouched fields survive");

    let matches = expense_list_matches(&["delete", "--id", &id]);
    if let Some(("expense", m)) = matches.subcommand() {
        expenses::handle(&mut s, m, today()).unwrap();
    }
    assert!(s.expenses.is_empty());
}

#[test]
fn settings_flags_apply_leniently() {
    let mut s = Session::new(1);
    let matches = cli::build_cli().get_matches_from([
        "fintrack", "settings", "budget", "--default-limit", "garbage", "--warning-threshold",
        "150",
    ]);
    if let Some(("settings", m)) = matches.subcommand() {
        settings::handle(&mut s, m).unwrap();
    } else {
        panic!("no settings subcommand");
    }
    // Unparseable limit keeps the prior value; threshold clamps to 100.
    assert_eq!(s.budget_settings.default_limit, "1000.00".parse().unwrap());
    assert_eq!(s.budget_settings.warning_threshold, 100);

    let matches = cli::build_cli().get_matches_from([
        "fintrack", "settings", "notify", "--key", "email_alerts", "--enabled", "false",
    ]);
    if let Some(("settings", m)) = matches.subcommand() {
        settings::handle(&mut s, m).unwrap();
    }
    assert!(!s.notifications.email_alerts);
}

#[test]
fn doctor_reports_unlinked_and_duplicate_entries() {
    let mut s = seeded();
    assert!(doctor::findings(&s).is_empty());

    s.expenses.push(Expense {
        id: "EXP-1000".to_string(), // duplicates a seeded id
        description: "x".to_string(),
        amount: "1".parse().unwrap(),
        date: today(),
        category: "Ghost".to_string(),
        status: ExpenseStatus::Pending,
        merchant: "Acme".to_string(),
    });
    let rows = doctor::findings(&s);
    assert!(rows.iter().any(|r| r[0] == "duplicate_expense_id"));
    assert!(rows.iter().any(|r| r[0] == "expense_category_unlinked"));
}
