// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::models::Branch;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parses an amount, accepting the grouped form shown on screen
/// ("1,200,000" parses the same as "1200000").
pub fn parse_amount(s: &str) -> Result<Decimal> {
    s.trim()
        .replace(',', "")
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}'", s))
}

/// Formats an amount with digits grouped in threes, matching the tables and
/// the CSV export. The fractional part, if any, is kept verbatim.
pub fn fmt_grouped(amount: &Decimal) -> String {
    let plain = amount.to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
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

// Default branch settings
pub fn get_default_branch(conn: &Connection) -> Result<Branch> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='default_branch'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    match v {
        Some(s) => Ok(s.parse::<Branch>()?),
        None => Ok(Branch::Zarkent),
    }
}

pub fn set_default_branch(conn: &Connection, branch: Branch) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('default_branch', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![branch.label()],
    )?;
    Ok(())
}
