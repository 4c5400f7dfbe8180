// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Synthetic demo data. Every session starts from the same fixed category
//! set plus 50 generated expenses; re-running the seeder against a
//! populated session is a no-op.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Category, Expense, ExpenseStatus};
use crate::session::Session;

/// Small seedable congruential generator. The demo data only needs cheap,
/// reproducible uniformity, not cryptographic quality.
#[derive(Debug, Clone)]
pub struct DemoRng {
    state: u64,
}

impl DemoRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform value in [0, n).
    pub fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n.max(1)
    }
}

const EXPENSE_COUNT: usize = 50;
const MAX_AGE_DAYS: u32 = 180;
// Expenses younger than this may still be Pending/Processing; older ones
// have settled.
const SETTLEMENT_DAYS: u32 = 7;

const MERCHANTS: [&str; 8] = [
    "AWS", "Uber", "Slack", "Google Ads", "WeWork", "Delta", "Github", "Figma",
];

const STATUSES: [ExpenseStatus; 3] = [
    ExpenseStatus::Completed,
    ExpenseStatus::Pending,
    ExpenseStatus::Processing,
];

fn description_pool(category: &str) -> &'static [&'static str] {
    match category {
        "Office" => &[
            "Office supplies purchase",
            "Printer ink refill",
            "Desk accessories",
            "Stationery order",
            "Office furniture repair",
        ],
        "Travel" => &[
            "Client meeting transport",
            "Conference travel",
            "Airport parking",
            "Hotel accommodation",
            "Flight booking",
        ],
        "Software" => &[
            "Monthly subscription renewal",
            "License upgrade",
            "Cloud storage",
            "IDE premium sub",
            "Security software license",
        ],
        "Marketing" => &[
            "Social media campaign",
            "Print advertising",
            "Event sponsorship",
            "Email marketing service",
            "Promotional materials",
        ],
        "Services" => &[
            "Consulting fee",
            "Professional services",
            "Maintenance contract",
            "Technical support fee",
            "Legal consultation",
        ],
        _ => &["Miscellaneous expense"],
    }
}

pub fn default_categories() -> Vec<Category> {
    let cat = |id: &str, name: &str, budget: i64, color: &str, icon: &str| Category {
        id: id.to_string(),
        name: name.to_string(),
        budget: Decimal::new(budget, 2),
        color: color.to_string(),
        icon: icon.to_string(),
    };
    vec![
        cat("C-1", "Office", 120_000, "bg-blue-500", "building-2"),
        cat("C-2", "Travel", 200_000, "bg-purple-500", "plane"),
        cat("C-3", "Software", 80_000, "bg-green-500", "laptop"),
        cat("C-4", "Marketing", 150_000, "bg-orange-500", "megaphone"),
        cat("C-5", "Services", 60_000, "bg-teal-500", "wrench"),
    ]
}

/// Populate an empty session with demo data. Idempotent: existing
/// categories or expenses are left untouched, so repeated calls cannot
/// double-seed.
pub fn ensure_demo_data(session: &mut Session, today: NaiveDate) {
    if session.categories.is_empty() {
        session.categories = default_categories();
    }
    if !session.expenses.is_empty() {
        return;
    }

    let cat_names: Vec<String> = session.categories.iter().map(|c| c.name.clone()).collect();
    let mut generated = Vec::with_capacity(EXPENSE_COUNT);
    for i in 0..EXPENSE_COUNT {
        let days_ago = session.rng.below(MAX_AGE_DAYS + 1);
        let date = today - Duration::days(i64::from(days_ago));
        let category = cat_names[session.rng.below(cat_names.len() as u32) as usize].clone();
        let pool = description_pool(&category);
        let description = pool[session.rng.below(pool.len() as u32) as usize].to_string();
        // Uniform in [20.00, 500.00], two decimals.
        let amount = Decimal::new(i64::from(2_000 + session.rng.below(48_001)), 2);
        let status = if days_ago < SETTLEMENT_DAYS {
            STATUSES[session.rng.below(3) as usize]
        } else {
            ExpenseStatus::Completed
        };
        let merchant = MERCHANTS[session.rng.below(MERCHANTS.len() as u32) as usize].to_string();
        generated.push(Expense {
            id: format!("EXP-{}", 1000 + i),
            description,
            amount,
            date,
            category,
            status,
            merchant,
        });
    }
    generated.sort_by(|a, b| b.date.cmp(&a.date));
    session.expenses = generated;
}
