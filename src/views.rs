// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the session store. Each function is a pure read of
//! the current collections plus selectors; nothing here is cached, the
//! dataset is session-local and small.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::models::{CategoryBudget, DailyPoint, Expense, MonthlyPoint, PieSlice, SortField};
use crate::session::{Session, PAGE_SIZE};

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Tailwind-style color token to chart hex fill.
static PALETTE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("bg-blue-500", "#3b82f6"),
        ("bg-purple-500", "#a855f7"),
        ("bg-green-500", "#22c55e"),
        ("bg-orange-500", "#f97316"),
        ("bg-teal-500", "#14b8a6"),
        ("bg-red-500", "#ef4444"),
        ("bg-yellow-500", "#eab308"),
        ("bg-indigo-500", "#6366f1"),
        ("bg-pink-500", "#ec4899"),
    ])
});

fn hex_for_token(token: &str) -> &'static str {
    // bg-gray-500 and anything unmapped fall back to gray.
    PALETTE.get(token).copied().unwrap_or("#6b7280")
}

pub fn category_names(session: &Session) -> Vec<String> {
    session.categories.iter().map(|c| c.name.clone()).collect()
}

fn compare_by(field: SortField, a: &Expense, b: &Expense) -> Ordering {
    match field {
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::Date => a.date.cmp(&b.date),
        SortField::Id => a.id.to_lowercase().cmp(&b.id.to_lowercase()),
        SortField::Merchant => a.merchant.to_lowercase().cmp(&b.merchant.to_lowercase()),
        SortField::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
        SortField::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase()),
        SortField::Status => a
            .status
            .to_string()
            .to_lowercase()
            .cmp(&b.status.to_string().to_lowercase()),
    }
}

/// Category filter ("All" = none), then case-insensitive substring search
/// over merchant or description, then a stable sort on the selected field.
pub fn filtered_sorted_expenses(session: &Session) -> Vec<Expense> {
    let mut items: Vec<Expense> = session
        .expenses
        .iter()
        .filter(|e| session.category_filter == "All" || e.category == session.category_filter)
        .filter(|e| {
            if session.search_value.is_empty() {
                return true;
            }
            let term = session.search_value.to_lowercase();
            e.merchant.to_lowercase().contains(&term)
                || e.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();
    items.sort_by(|a, b| {
        let ord = compare_by(session.sort_value, a, b);
        if session.sort_reverse { ord.reverse() } else { ord }
    });
    items
}

pub fn page_count(session: &Session) -> usize {
    filtered_sorted_expenses(session).len().div_ceil(PAGE_SIZE).max(1)
}

pub fn paginated_expenses(session: &Session) -> Vec<Expense> {
    let start = (session.page - 1) * PAGE_SIZE;
    filtered_sorted_expenses(session)
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect()
}

pub fn total_expenses(session: &Session) -> Decimal {
    session.expenses.iter().map(|e| e.amount).sum()
}

pub fn current_month_expenses(session: &Session, today: NaiveDate) -> Decimal {
    session
        .expenses
        .iter()
        .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
        .map(|e| e.amount)
        .sum()
}

/// Share of the overall monthly budget used this month, one decimal,
/// capped at 100.
pub fn budget_usage_percent(session: &Session, today: NaiveDate) -> Decimal {
    if session.total_budget.is_zero() {
        return Decimal::ZERO;
    }
    let pct = (current_month_expenses(session, today) * Decimal::from(100)
        / session.total_budget)
        .round_dp(1);
    pct.min(Decimal::from(100))
}

/// The six most recent month labels on fixed 30-day steps ending today.
/// Deliberately not calendar-month arithmetic: the label sequence mirrors
/// the shipped dashboard, duplicates collapsed.
fn rolling_month_labels(today: NaiveDate) -> Vec<String> {
    let mut labels = Vec::new();
    for i in (0..=5).rev() {
        let label = (today - Duration::days(i * 30)).format("%b").to_string();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn trend_over_labels(session: &Session, today: NaiveDate, labels: Vec<String>) -> Vec<MonthlyPoint> {
    let mut buckets: HashMap<String, Decimal> = HashMap::new();
    for e in &session.expenses {
        if (today - e.date).num_days() < 180 {
            *buckets
                .entry(e.date.format("%b").to_string())
                .or_insert(Decimal::ZERO) += e.amount;
        }
    }
    labels
        .into_iter()
        .map(|name| MonthlyPoint {
            amount: buckets.get(&name).copied().unwrap_or(Decimal::ZERO).round_dp(2),
            name,
        })
        .collect()
}

/// Dashboard trend: last six rolling months, dense (zero buckets kept).
pub fn monthly_trend(session: &Session, today: NaiveDate) -> Vec<MonthlyPoint> {
    trend_over_labels(session, today, rolling_month_labels(today))
}

/// Configurable chart trend: the dashboard's rolling window, or dense
/// calendar months Jan through Dec of the current year.
pub fn chart_trend(session: &Session, today: NaiveDate) -> Vec<MonthlyPoint> {
    match session.chart_range {
        crate::models::ChartRange::LastSixMonths => monthly_trend(session, today),
        crate::models::ChartRange::ThisYear => {
            let mut buckets: HashMap<&str, Decimal> = HashMap::new();
            for e in &session.expenses {
                if e.date.year() == today.year() {
                    *buckets
                        .entry(MONTH_ABBR[e.date.month0() as usize])
                        .or_insert(Decimal::ZERO) += e.amount;
                }
            }
            MONTH_ABBR
                .iter()
                .map(|name| MonthlyPoint {
                    name: (*name).to_string(),
                    amount: buckets.get(name).copied().unwrap_or(Decimal::ZERO).round_dp(2),
                })
                .collect()
        }
    }
}

/// First five expenses in base (newest-first) order.
pub fn recent_expenses(session: &Session) -> Vec<Expense> {
    session.expenses.iter().take(5).cloned().collect()
}

/// Per-category spend for the current calendar month, joined to the
/// configured limit and color. Expenses naming a deleted category simply
/// have no row here.
pub fn category_budgets(session: &Session, today: NaiveDate) -> Vec<CategoryBudget> {
    let mut rows: Vec<CategoryBudget> = session
        .categories
        .iter()
        .map(|c| CategoryBudget {
            name: c.name.clone(),
            spent: Decimal::ZERO,
            limit: c.budget,
            color: c.color.clone(),
        })
        .collect();
    for e in &session.expenses {
        if e.date.year() == today.year() && e.date.month() == today.month() {
            if let Some(row) = rows.iter_mut().find(|r| r.name == e.category) {
                row.spent += e.amount;
            }
        }
    }
    for row in &mut rows {
        row.spent = row.spent.round_dp(2);
    }
    rows
}

/// Expenses inside the selected report window, in base order.
pub fn report_expenses(session: &Session, today: NaiveDate) -> Vec<Expense> {
    use crate::models::ReportRange::*;
    let keep: Box<dyn Fn(&Expense) -> bool> = match session.report_range {
        ThisWeek => {
            let week_start =
                today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
            Box::new(move |e| e.date >= week_start)
        }
        ThisMonth => Box::new(move |e| {
            e.date.year() == today.year() && e.date.month() == today.month()
        }),
        LastMonth => {
            let first_of_month = today.with_day(1).unwrap_or(today);
            let last_month_day = first_of_month.pred_opt().unwrap_or(first_of_month);
            Box::new(move |e| {
                e.date.year() == last_month_day.year() && e.date.month() == last_month_day.month()
            })
        }
        ThisYear => Box::new(move |e| e.date.year() == today.year()),
        AllTime => Box::new(|_| true),
    };
    session.expenses.iter().filter(|e| keep(e)).cloned().collect()
}

pub fn report_total(session: &Session, today: NaiveDate) -> Decimal {
    report_expenses(session, today).iter().map(|e| e.amount).sum()
}

/// Report spend grouped by category in first-appearance order, zero-value
/// slices dropped, fill mapped through the fixed palette.
pub fn report_pie(session: &Session, today: NaiveDate) -> Vec<PieSlice> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for e in report_expenses(session, today) {
        match totals.iter_mut().find(|(name, _)| *name == e.category) {
            Some((_, sum)) => *sum += e.amount,
            None => totals.push((e.category.clone(), e.amount)),
        }
    }
    totals
        .into_iter()
        .filter(|(_, value)| *value > Decimal::ZERO)
        .map(|(name, value)| {
            let token = session
                .categories
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.color.as_str())
                .unwrap_or("bg-gray-500");
            PieSlice {
                fill: hex_for_token(token).to_string(),
                value: value.round_dp(2),
                name,
            }
        })
        .collect()
}

/// Report spend grouped by exact date, ascending, labeled "MM-DD".
pub fn report_trend(session: &Session, today: NaiveDate) -> Vec<DailyPoint> {
    let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for e in report_expenses(session, today) {
        *buckets.entry(e.date).or_insert(Decimal::ZERO) += e.amount;
    }
    buckets
        .into_iter()
        .map(|(date, amount)| DailyPoint {
            name: date.format("%m-%d").to_string(),
            amount,
        })
        .collect()
}
