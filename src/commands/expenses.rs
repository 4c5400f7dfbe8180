// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::{ExpensePatch, ExpenseStatus, NewExpense, SortField};
use crate::session::Session;
use crate::utils::{maybe_print_json, parse_amount_or_zero, parse_date_or, pretty_table};
use crate::views;

pub fn handle(session: &mut Session, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub)?,
        Some(("add", sub)) => add(session, sub, today)?,
        Some(("update", sub)) => update(session, sub, today)?,
        Some(("delete", sub)) => delete(session, sub)?,
        _ => {}
    }
    Ok(())
}

/// Apply the list flags to the session selectors. Search and category
/// changes reset the page; sort is expressed through the toggle so the
/// direction semantics match the table header behavior.
pub fn apply_list_selectors(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(term) = sub.get_one::<String>("search") {
        session.set_search_value(term);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        session.set_category_filter(cat);
    }
    if let Some(field) = sub.get_one::<String>("sort") {
        let field: SortField = field.parse()?;
        let reverse = !sub.get_flag("asc");
        if session.sort_value != field {
            session.toggle_sort(field);
        }
        if session.sort_reverse != reverse {
            session.toggle_sort(field);
        }
    }
    if let Some(page) = sub.get_one::<usize>("page") {
        session.set_table_page(*page);
    }
    Ok(())
}

fn list(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    apply_list_selectors(session, sub)?;
    let rows = views::paginated_expenses(session);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let table_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|e| {
                vec![
                    e.id.clone(),
                    e.date.to_string(),
                    e.merchant.clone(),
                    e.category.clone(),
                    e.description.clone(),
                    e.amount.round_dp(2).to_string(),
                    e.status.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Merchant", "Category", "Description", "Amount", "Status"],
                table_rows,
            )
        );
        println!(
            "Page {} of {} ({} matching)",
            session.page,
            views::page_count(session),
            views::filtered_sorted_expenses(session).len()
        );
    }
    Ok(())
}

fn add(session: &mut Session, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let new = NewExpense {
        description: sub.get_one::<String>("description").cloned(),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_amount_or_zero(s)),
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date_or(s, today)),
        category: sub.get_one::<String>("category").cloned(),
        merchant: sub.get_one::<String>("merchant").cloned(),
    };
    let id = session.add_expense(new, today);
    // add_expense prepends, so the new record is at the front.
    let e = &session.expenses[0];
    println!(
        "Expense added successfully: {} {} at '{}' on {} ({})",
        id, e.amount, e.merchant, e.date, e.category
    );
    Ok(())
}

fn update(session: &mut Session, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let id = sub.get_one::<String>("id").cloned().unwrap_or_default();
    let prior_date = session
        .expenses
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.date)
        .unwrap_or(today);
    let status = sub
        .get_one::<String>("status")
        .map(|s| s.parse::<ExpenseStatus>())
        .transpose()?;
    let patch = ExpensePatch {
        description: sub.get_one::<String>("description").cloned(),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_amount_or_zero(s)),
        date: sub
            .get_one::<String>("date")
            .map(|s| parse_date_or(s, prior_date)),
        category: sub.get_one::<String>("category").cloned(),
        status,
        merchant: sub.get_one::<String>("merchant").cloned(),
    };
    if session.update_expense(&id, patch) {
        println!("Expense updated successfully");
    } else {
        println!("No expense with id '{}'", id);
    }
    Ok(())
}

fn delete(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").cloned().unwrap_or_default();
    if session.delete_expense(&id) {
        println!("Expense deleted");
    } else {
        println!("No expense with id '{}'", id);
    }
    Ok(())
}
