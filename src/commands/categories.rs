// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{CategoryPatch, NewCategory};
use crate::session::Session;
use crate::utils::{maybe_print_json, parse_amount_or_zero, pretty_table};

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &session.categories)? {
                let rows: Vec<Vec<String>> = session
                    .categories
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.clone(),
                            c.name.clone(),
                            c.budget.round_dp(2).to_string(),
                            c.color.clone(),
                            c.icon.clone(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["ID", "Name", "Budget", "Color", "Icon"], rows)
                );
            }
        }
        Some(("add", sub)) => {
            let new = NewCategory {
                name: sub.get_one::<String>("name").cloned(),
                budget: sub
                    .get_one::<String>("budget")
                    .map(|s| parse_amount_or_zero(s)),
                color: sub.get_one::<String>("color").cloned(),
            };
            let id = session.add_category(new);
            println!("Category created: {}", id);
        }
        Some(("update", sub)) => {
            let id = sub.get_one::<String>("id").cloned().unwrap_or_default();
            let patch = CategoryPatch {
                name: sub.get_one::<String>("name").cloned(),
                budget: sub
                    .get_one::<String>("budget")
                    .map(|s| parse_amount_or_zero(s)),
                color: sub.get_one::<String>("color").cloned(),
            };
            if session.update_category(&id, patch) {
                println!("Category updated");
            } else {
                println!("No category with id '{}'", id);
            }
        }
        Some(("delete", sub)) => {
            let id = sub.get_one::<String>("id").cloned().unwrap_or_default();
            if session.delete_category(&id) {
                println!("Category deleted (expenses referencing it are kept)");
            } else {
                println!("No category with id '{}'", id);
            }
        }
        _ => {}
    }
    Ok(())
}
