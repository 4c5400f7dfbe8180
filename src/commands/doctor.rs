// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;
use std::collections::HashSet;

use crate::session::Session;
use crate::utils::pretty_table;

/// Consistency findings over the session. Expenses naming a category with
/// no matching entry are reported but never an error: the name join is
/// intentionally uncascaded.
pub fn findings(session: &Session) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for (i, e) in session.expenses.iter().enumerate() {
        if session.expenses[..i].iter().any(|p| p.id == e.id) {
            rows.push(vec!["duplicate_expense_id".to_string(), e.id.clone()]);
        }
    }
    for (i, c) in session.categories.iter().enumerate() {
        if session.categories[..i].iter().any(|p| p.id == c.id) {
            rows.push(vec!["duplicate_category_id".to_string(), c.id.clone()]);
        }
    }

    let names: HashSet<&str> = session.categories.iter().map(|c| c.name.as_str()).collect();
    for e in &session.expenses {
        if !names.contains(e.category.as_str()) {
            rows.push(vec![
                "expense_category_unlinked".to_string(),
                format!("{} -> {}", e.id, e.category),
            ]);
        }
    }
    rows
}

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let rows = findings(session);
    if m.get_flag("json") {
        let payload = json!({
            "status": "ok",
            "ready": true,
            "expenses": session.expenses.len(),
            "categories": session.categories.len(),
            "findings": rows.len(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }
    println!(
        "status: ok, ready ({} expenses, {} categories)",
        session.expenses.len(),
        session.categories.len()
    );
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
