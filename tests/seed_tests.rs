// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fintrack::models::ExpenseStatus;
use fintrack::seed;
use fintrack::session::Session;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn seeded(seed_value: u64) -> Session {
    let mut s = Session::new(seed_value);
    seed::ensure_demo_data(&mut s, today());
    s
}

#[test]
fn seeds_fifty_expenses_and_five_categories() {
    let s = seeded(42);
    assert_eq!(s.expenses.len(), 50);
    assert_eq!(s.categories.len(), 5);
    let names: Vec<&str> = s.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Office", "Travel", "Software", "Marketing", "Services"]);
    let ids: Vec<&str> = s.categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["C-1", "C-2", "C-3", "C-4", "C-5"]);
}

#[test]
fn seeding_is_idempotent() {
    let mut s = seeded(42);
    let expenses = s.expenses.clone();
    let categories = s.categories.clone();
    seed::ensure_demo_data(&mut s, today());
    assert_eq!(s.expenses, expenses);
    assert_eq!(s.categories, categories);
}

#[test]
fn same_seed_reproduces_the_collection() {
    let a = seeded(7);
    let b = seeded(7);
    assert_eq!(a.expenses, b.expenses);
}

#[test]
fn seeded_expenses_sorted_by_date_descending() {
    let s = seeded(42);
    for pair in s.expenses.windows(2) {
        assert!(pair[0].date >= pair[1].date);
    }
}

#[test]
fn seeded_amounts_within_range_at_two_decimals() {
    let s = seeded(42);
    let lo = Decimal::from(20);
    let hi = Decimal::from(500);
    for e in &s.expenses {
        assert!(e.amount >= lo && e.amount <= hi, "amount {} out of range", e.amount);
        assert!(e.amount.scale() <= 2);
    }
}

#[test]
fn expenses_older_than_a_week_have_settled() {
    let s = seeded(42);
    for e in &s.expenses {
        if (today() - e.date).num_days() >= 7 {
            assert_eq!(e.status, ExpenseStatus::Completed, "{} on {}", e.id, e.date);
        }
    }
}

#[test]
fn seeded_dates_within_180_days() {
    let s = seeded(42);
    for e in &s.expenses {
        let age = (today() - e.date).num_days();
        assert!((0..=180).contains(&age));
    }
}

#[test]
fn seeded_ids_are_sequential_and_unique() {
    let s = seeded(42);
    let mut ids: Vec<&str> = s.expenses.iter().map(|e| e.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
    assert!(s.expenses.iter().all(|e| e.id.starts_with("EXP-10")));
}
