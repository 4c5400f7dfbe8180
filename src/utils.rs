// Copyright (c) 2025 FinTrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;
use tracing::warn;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Lenient date parse for form-style input: anything malformed falls back
/// and is logged rather than surfaced.
pub fn parse_date_or(s: &str, fallback: NaiveDate) -> NaiveDate {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => d,
        Err(err) => {
            warn!(input = s, %err, "unparseable date, using fallback");
            fallback
        }
    }
}

/// Lenient amount parse for form-style input: parse failures and negative
/// values coerce to zero.
pub fn parse_amount_or_zero(s: &str) -> Decimal {
    match s.parse::<Decimal>() {
        Ok(d) if d >= Decimal::ZERO => d,
        Ok(d) => {
            warn!(input = %d, "negative amount coerced to zero");
            Decimal::ZERO
        }
        Err(err) => {
            warn!(input = s, %err, "unparseable amount coerced to zero");
            Decimal::ZERO
        }
    }
}

/// Lenient decimal parse for form-style input; `None` keeps the caller's
/// prior value.
pub fn parse_decimal_or_none(s: &str) -> Option<Decimal> {
    match s.parse::<Decimal>() {
        Ok(d) => Some(d),
        Err(err) => {
            warn!(input = s, %err, "unparseable decimal, keeping prior value");
            None
        }
    }
}

/// Lenient integer parse for form-style input; `None` keeps the caller's
/// prior value.
pub fn parse_int_or_none(s: &str) -> Option<i64> {
    match s.parse::<i64>() {
        Ok(v) => Some(v),
        Err(err) => {
            warn!(input = s, %err, "unparseable integer, keeping prior value");
            None
        }
    }
}

pub fn fmt_money(d: &Decimal, currency_label: &str) -> String {
    format!("{} {}", currency_label, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
