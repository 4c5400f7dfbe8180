// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{BudgetSettings, NotificationKind, NotificationPrefs, UserProfile};
use crate::session::Session;
use crate::utils::{maybe_print_json, parse_decimal_or_none, parse_int_or_none, pretty_table};

#[derive(Serialize)]
struct SettingsView<'a> {
    profile: &'a UserProfile,
    notifications: &'a NotificationPrefs,
    budget_settings: &'a BudgetSettings,
    currency: &'a str,
    total_budget: Decimal,
}

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(session, sub)?,
        Some(("profile", sub)) => {
            session.update_profile(
                sub.get_one::<String>("name").cloned(),
                sub.get_one::<String>("email").cloned(),
            );
            println!("Profile updated successfully");
        }
        Some(("notify", sub)) => {
            let key = sub.get_one::<String>("key").cloned().unwrap_or_default();
            let enabled = *sub.get_one::<bool>("enabled").unwrap_or(&false);
            session.set_notification(key.parse::<NotificationKind>()?, enabled);
            println!("Notification preference updated");
        }
        Some(("budget", sub)) => {
            let limit = sub
                .get_one::<String>("default-limit")
                .and_then(|s| parse_decimal_or_none(s));
            let threshold = sub
                .get_one::<String>("warning-threshold")
                .and_then(|s| parse_int_or_none(s));
            session.update_budget_settings(limit, threshold);
            println!("Budget settings saved");
        }
        Some(("currency", sub)) => {
            let value = sub.get_one::<String>("set").cloned().unwrap_or_default();
            session.set_currency(value.clone());
            println!("Currency set to {}", value);
        }
        _ => {}
    }
    Ok(())
}

fn show(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let view = SettingsView {
        profile: &session.profile,
        notifications: &session.notifications,
        budget_settings: &session.budget_settings,
        currency: &session.currency,
        total_budget: session.total_budget,
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        return Ok(());
    }
    let rows = vec![
        vec!["Name".to_string(), session.profile.name.clone()],
        vec!["Email".to_string(), session.profile.email.clone()],
        vec![
            "Email alerts".to_string(),
            session.notifications.email_alerts.to_string(),
        ],
        vec![
            "Expense reminders".to_string(),
            session.notifications.expense_reminders.to_string(),
        ],
        vec![
            "Monthly reports".to_string(),
            session.notifications.monthly_reports.to_string(),
        ],
        vec![
            "Default limit".to_string(),
            session.budget_settings.default_limit.round_dp(2).to_string(),
        ],
        vec![
            "Warning threshold".to_string(),
            format!("{}%", session.budget_settings.warning_threshold),
        ],
        vec!["Currency".to_string(), session.currency.clone()],
        vec![
            "Total budget".to_string(),
            session.total_budget.round_dp(2).to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}
