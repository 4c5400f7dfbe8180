// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseFieldError {
    #[error("unknown status '{0}' (expected Completed|Pending|Processing)")]
    Status(String),
    #[error("unknown sort field '{0}'")]
    SortField(String),
    #[error("unknown report range '{0}'")]
    ReportRange(String),
    #[error("unknown chart range '{0}'")]
    ChartRange(String),
    #[error("unknown notification key '{0}'")]
    Notification(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    Completed,
    Pending,
    Processing,
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseStatus::Completed => write!(f, "Completed"),
            ExpenseStatus::Pending => write!(f, "Pending"),
            ExpenseStatus::Processing => write!(f, "Processing"),
        }
    }
}

impl FromStr for ExpenseStatus {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(ExpenseStatus::Completed),
            "pending" => Ok(ExpenseStatus::Pending),
            "processing" => Ok(ExpenseStatus::Processing),
            _ => Err(ParseFieldError::Status(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    pub status: ExpenseStatus,
    pub merchant: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub budget: Decimal,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Morgan".to_string(),
            email: "john@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email_alerts: bool,
    pub expense_reminders: bool,
    pub monthly_reports: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email_alerts: true,
            expense_reminders: false,
            monthly_reports: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    EmailAlerts,
    ExpenseReminders,
    MonthlyReports,
}

impl FromStr for NotificationKind {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email_alerts" => Ok(NotificationKind::EmailAlerts),
            "expense_reminders" => Ok(NotificationKind::ExpenseReminders),
            "monthly_reports" => Ok(NotificationKind::MonthlyReports),
            _ => Err(ParseFieldError::Notification(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSettings {
    pub default_limit: Decimal,
    /// Percent of a budget at which the UI warns, always within 1..=100.
    pub warning_threshold: u8,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            default_limit: Decimal::new(100_000, 2), // 1000.00
            warning_threshold: 80,
        }
    }
}

/// Fields accepted when creating an expense. Anything omitted falls back
/// to the documented default (status Pending, date today, merchant
/// "Unknown", category "Office", empty description, amount 0).
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub merchant: Option<String>,
}

/// Field-wise update for an expense; omitted fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub status: Option<ExpenseStatus>,
    pub merchant: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: Option<String>,
    pub budget: Option<Decimal>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub budget: Option<Decimal>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Id,
    #[default]
    Date,
    Merchant,
    Category,
    Description,
    Amount,
    Status,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Date => "date",
            SortField::Merchant => "merchant",
            SortField::Category => "category",
            SortField::Description => "description",
            SortField::Amount => "amount",
            SortField::Status => "status",
        }
    }
}

impl FromStr for SortField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "date" => Ok(SortField::Date),
            "merchant" => Ok(SortField::Merchant),
            "category" => Ok(SortField::Category),
            "description" => Ok(SortField::Description),
            "amount" => Ok(SortField::Amount),
            "status" => Ok(SortField::Status),
            _ => Err(ParseFieldError::SortField(s.to_string())),
        }
    }
}

/// Named date window scoping the report views. `AllTime` doubles as the
/// fallback for anything unrecognized: it selects the unfiltered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportRange {
    ThisWeek,
    #[default]
    ThisMonth,
    LastMonth,
    ThisYear,
    AllTime,
}

impl fmt::Display for ReportRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportRange::ThisWeek => write!(f, "This Week"),
            ReportRange::ThisMonth => write!(f, "This Month"),
            ReportRange::LastMonth => write!(f, "Last Month"),
            ReportRange::ThisYear => write!(f, "This Year"),
            ReportRange::AllTime => write!(f, "All Time"),
        }
    }
}

impl FromStr for ReportRange {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "this week" => Ok(ReportRange::ThisWeek),
            "this month" => Ok(ReportRange::ThisMonth),
            "last month" => Ok(ReportRange::LastMonth),
            "this year" => Ok(ReportRange::ThisYear),
            "all time" | "all" => Ok(ReportRange::AllTime),
            _ => Err(ParseFieldError::ReportRange(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartRange {
    #[default]
    LastSixMonths,
    ThisYear,
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartRange::LastSixMonths => write!(f, "Last 6 Months"),
            ChartRange::ThisYear => write!(f, "This Year"),
        }
    }
}

impl FromStr for ChartRange {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "last 6 months" | "last six months" => Ok(ChartRange::LastSixMonths),
            "this year" => Ok(ChartRange::ThisYear),
            _ => Err(ParseFieldError::ChartRange(s.to_string())),
        }
    }
}

// Rows produced by the derived views; never stored, recomputed per read.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBudget {
    pub name: String,
    pub spent: Decimal,
    pub limit: Decimal,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: Decimal,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub name: String,
    pub amount: Decimal,
}
