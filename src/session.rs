// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The owned per-session store: entity collections, settings singletons,
//! table/report selectors, and every mutation operation. Derived views
//! live in [`crate::views`] and recompute from this state on each read.
//!
//! Mutations never fail: numeric coercion falls back to zero, lookups by
//! unknown id are silent no-ops.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{
    BudgetSettings, Category, CategoryPatch, ChartRange, Expense, ExpensePatch, ExpenseStatus,
    NewCategory, NewExpense, NotificationKind, NotificationPrefs, ReportRange, SortField,
    UserProfile,
};
use crate::seed::DemoRng;
use crate::views;

/// Fixed size of one expense-table page.
pub const PAGE_SIZE: usize = 7;

/// One boolean per entity-action dialog, each independently settable and
/// reset when its action completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogFlags {
    pub expense_add: bool,
    pub expense_edit: bool,
    pub expense_delete: bool,
    pub category_add: bool,
    pub category_edit: bool,
    pub category_delete: bool,
    pub clear_data: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
    pub profile: UserProfile,
    pub notifications: NotificationPrefs,
    pub budget_settings: BudgetSettings,
    pub currency: String,
    /// Overall monthly budget backing the dashboard usage gauge.
    pub total_budget: Decimal,
    pub search_value: String,
    pub category_filter: String,
    pub sort_value: SortField,
    pub sort_reverse: bool,
    pub page: usize,
    pub report_range: ReportRange,
    pub chart_range: ChartRange,
    pub dialogs: DialogFlags,
    pub(crate) rng: DemoRng,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            expenses: Vec::new(),
            categories: Vec::new(),
            profile: UserProfile::default(),
            notifications: NotificationPrefs::default(),
            budget_settings: BudgetSettings::default(),
            currency: "USD ($)".to_string(),
            total_budget: Decimal::new(500_000, 2), // 5000.00
            search_value: String::new(),
            category_filter: "All".to_string(),
            sort_value: SortField::Date,
            sort_reverse: true,
            page: 1,
            report_range: ReportRange::ThisMonth,
            chart_range: ChartRange::LastSixMonths,
            dialogs: DialogFlags::default(),
            rng: DemoRng::new(seed),
        }
    }

    fn fresh_expense_id(&mut self) -> String {
        loop {
            let id = format!("EXP-{}", 10_000 + self.rng.below(90_000));
            if !self.expenses.iter().any(|e| e.id == id) {
                return id;
            }
        }
    }

    fn fresh_category_id(&mut self) -> String {
        loop {
            let id = format!("C-{}", 100 + self.rng.below(900));
            if !self.categories.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }

    /// Add an expense, prepending it so the newest entry leads the base
    /// collection. Returns the generated id.
    pub fn add_expense(&mut self, new: NewExpense, today: NaiveDate) -> String {
        let id = self.fresh_expense_id();
        let expense = Expense {
            id: id.clone(),
            description: new.description.unwrap_or_default(),
            amount: coerce_amount(new.amount),
            date: new.date.unwrap_or(today),
            category: new.category.unwrap_or_else(|| "Office".to_string()),
            status: ExpenseStatus::Pending,
            merchant: new.merchant.unwrap_or_else(|| "Unknown".to_string()),
        };
        self.expenses.insert(0, expense);
        self.dialogs.expense_add = false;
        id
    }

    /// Overwrite the provided fields of the matching expense; omitted
    /// fields keep their value. Unknown ids are a silent no-op. Returns
    /// whether a matching expense was found.
    pub fn update_expense(&mut self, id: &str, patch: ExpensePatch) -> bool {
        let Some(expense) = self.expenses.iter_mut().find(|e| e.id == id) else {
            self.dialogs.expense_edit = false;
            return false;
        };
        if let Some(description) = patch.description {
            expense.description = description;
        }
        if let Some(amount) = patch.amount {
            expense.amount = coerce_amount(Some(amount));
        }
        if let Some(date) = patch.date {
            expense.date = date;
        }
        if let Some(category) = patch.category {
            expense.category = category;
        }
        if let Some(status) = patch.status {
            expense.status = status;
        }
        if let Some(merchant) = patch.merchant {
            expense.merchant = merchant;
        }
        self.dialogs.expense_edit = false;
        true
    }

    pub fn delete_expense(&mut self, id: &str) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.dialogs.expense_delete = false;
        self.expenses.len() != before
    }

    pub fn add_category(&mut self, new: NewCategory) -> String {
        let id = self.fresh_category_id();
        let category = Category {
            id: id.clone(),
            name: new.name.unwrap_or_else(|| "New Category".to_string()),
            budget: coerce_amount(new.budget),
            color: new.color.unwrap_or_else(|| "bg-gray-500".to_string()),
            icon: "tag".to_string(),
        };
        self.categories.push(category);
        self.dialogs.category_add = false;
        id
    }

    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> bool {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == id) else {
            self.dialogs.category_edit = false;
            return false;
        };
        if let Some(name) = patch.name {
            category.name = name;
        }
        if let Some(budget) = patch.budget {
            category.budget = coerce_amount(Some(budget));
        }
        if let Some(color) = patch.color {
            category.color = color;
        }
        self.dialogs.category_edit = false;
        true
    }

    /// Remove a category by id. Expenses referencing its name are left
    /// untouched: the name join is intentionally not cascaded.
    pub fn delete_category(&mut self, id: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        self.dialogs.category_delete = false;
        self.categories.len() != before
    }

    pub fn update_profile(&mut self, name: Option<String>, email: Option<String>) {
        if let Some(name) = name {
            self.profile.name = name;
        }
        if let Some(email) = email {
            self.profile.email = email;
        }
    }

    pub fn set_notification(&mut self, kind: NotificationKind, value: bool) {
        match kind {
            NotificationKind::EmailAlerts => self.notifications.email_alerts = value,
            NotificationKind::ExpenseReminders => self.notifications.expense_reminders = value,
            NotificationKind::MonthlyReports => self.notifications.monthly_reports = value,
        }
    }

    /// Update the budget settings. `None` keeps the prior value (the form
    /// failed to parse); the warning threshold is clamped to 1..=100.
    pub fn update_budget_settings(
        &mut self,
        default_limit: Option<Decimal>,
        warning_threshold: Option<i64>,
    ) {
        if let Some(limit) = default_limit {
            self.budget_settings.default_limit = coerce_amount(Some(limit));
        }
        if let Some(threshold) = warning_threshold {
            self.budget_settings.warning_threshold = threshold.clamp(1, 100) as u8;
        }
    }

    pub fn set_currency(&mut self, value: String) {
        self.currency = value;
    }

    /// Clear every expense. Categories and settings survive.
    pub fn clear_all_data(&mut self) {
        self.expenses.clear();
        self.dialogs.clear_data = false;
    }

    pub fn set_search_value(&mut self, value: &str) {
        self.search_value = value.to_string();
        self.page = 1;
    }

    pub fn set_category_filter(&mut self, value: &str) {
        self.category_filter = value.to_string();
        self.page = 1;
    }

    pub fn set_report_range(&mut self, range: ReportRange) {
        self.report_range = range;
    }

    pub fn set_chart_range(&mut self, range: ChartRange) {
        self.chart_range = range;
    }

    /// Re-sorting by the current column flips the direction; a new column
    /// takes over and starts descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_value == field {
            self.sort_reverse = !self.sort_reverse;
        } else {
            self.sort_value = field;
            self.sort_reverse = true;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.page < views::page_count(self) {
            self.page += 1;
        }
    }

    /// Jump to a page, clamped to [1, page_count].
    pub fn set_table_page(&mut self, page: usize) {
        self.page = page.clamp(1, views::page_count(self));
    }
}

/// Coerce a form amount to a non-negative decimal. Missing values become
/// zero; negatives are rejected to zero rather than propagated.
fn coerce_amount(value: Option<Decimal>) -> Decimal {
    match value {
        Some(d) if d < Decimal::ZERO => {
            warn!(amount = %d, "negative amount coerced to zero");
            Decimal::ZERO
        }
        Some(d) => d,
        None => Decimal::ZERO,
    }
}
