// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CategoryBudget, Expense, MonthlyPoint};
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::views;

#[derive(Serialize)]
struct DashboardView {
    total_expenses: Decimal,
    current_month_expenses: Decimal,
    budget_usage_percent: Decimal,
    currency: String,
    monthly_trend: Vec<MonthlyPoint>,
    recent_expenses: Vec<Expense>,
    category_budgets: Vec<CategoryBudget>,
}

pub fn handle(session: &Session, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let view = DashboardView {
        total_expenses: views::total_expenses(session).round_dp(2),
        current_month_expenses: views::current_month_expenses(session, today).round_dp(2),
        budget_usage_percent: views::budget_usage_percent(session, today),
        currency: session.currency.clone(),
        monthly_trend: views::monthly_trend(session, today),
        recent_expenses: views::recent_expenses(session),
        category_budgets: views::category_budgets(session, today),
    };
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &view)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Total Expenses", "This Month", "Budget Usage", "Currency"],
            vec![vec![
                fmt_money(&view.total_expenses, &session.currency),
                fmt_money(&view.current_month_expenses, &session.currency),
                format!("{}%", view.budget_usage_percent),
                session.currency.clone(),
            ]],
        )
    );

    let trend_rows = view
        .monthly_trend
        .iter()
        .map(|p| vec![p.name.clone(), p.amount.to_string()])
        .collect();
    println!("{}", pretty_table(&["Month", "Amount"], trend_rows));

    let recent_rows = view
        .recent_expenses
        .iter()
        .map(|e| {
            vec![
                e.date.to_string(),
                e.merchant.clone(),
                e.category.clone(),
                e.amount.round_dp(2).to_string(),
                e.status.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Merchant", "Category", "Amount", "Status"], recent_rows)
    );

    let budget_rows = view
        .category_budgets
        .iter()
        .map(|b| {
            vec![
                b.name.clone(),
                b.spent.to_string(),
                b.limit.round_dp(2).to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent (month)", "Limit"], budget_rows)
    );
    Ok(())
}
