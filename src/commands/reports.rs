// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use crate::models::{ChartRange, ReportRange};
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::views;

pub fn handle(session: &mut Session, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(session, sub, today)?,
        Some(("pie", sub)) => pie(session, sub, today)?,
        Some(("trend", sub)) => trend(session, sub, today)?,
        Some(("chart", sub)) => chart(session, sub, today)?,
        _ => {}
    }
    Ok(())
}

fn apply_range(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(range) = sub.get_one::<String>("range") {
        session.set_report_range(range.parse::<ReportRange>()?);
    }
    Ok(())
}

fn summary(session: &mut Session, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    apply_range(session, sub)?;
    let expenses = views::report_expenses(session, today);
    let total = views::report_total(session, today).round_dp(2);
    let payload = json!({
        "range": session.report_range.to_string(),
        "count": expenses.len(),
        "total": total,
    });
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        println!(
            "{}",
            pretty_table(
                &["Range", "Expenses", "Total"],
                vec![vec![
                    session.report_range.to_string(),
                    expenses.len().to_string(),
                    fmt_money(&total, &session.currency),
                ]],
            )
        );
    }
    Ok(())
}

fn pie(session: &mut Session, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    apply_range(session, sub)?;
    let slices = views::report_pie(session, today);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &slices)? {
        let rows = slices
            .iter()
            .map(|s| vec![s.name.clone(), s.value.to_string(), s.fill.clone()])
            .collect();
        println!("{}", pretty_table(&["Category", "Amount", "Fill"], rows));
    }
    Ok(())
}

fn trend(session: &mut Session, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    apply_range(session, sub)?;
    let points = views::report_trend(session, today);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        let rows = points
            .iter()
            .map(|p| vec![p.name.clone(), p.amount.round_dp(2).to_string()])
            .collect();
        println!("{}", pretty_table(&["Day", "Amount"], rows));
    }
    Ok(())
}

fn chart(session: &mut Session, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    if let Some(range) = sub.get_one::<String>("chart-range") {
        session.set_chart_range(range.parse::<ChartRange>()?);
    }
    let points = views::chart_trend(session, today);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        let rows = points
            .iter()
            .map(|p| vec![p.name.clone(), p.amount.to_string()])
            .collect();
        println!("{}", pretty_table(&["Month", "Amount"], rows));
    }
    Ok(())
}
