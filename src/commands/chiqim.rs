// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::books::Books;
use crate::export::{OUTGOING_COLUMNS, table_rows};
use crate::filter::OutgoingFilter;
use crate::models::{Branch, OutgoingRecord, Paid};
use crate::totals;
use crate::utils::{
    fmt_grouped, get_default_branch, maybe_print_json, parse_amount, parse_date, pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("update", sub)) => update(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn amount_or_zero(sub: &clap::ArgMatches, name: &str) -> Result<Decimal> {
    match sub.get_one::<String>(name) {
        Some(s) => parse_amount(s),
        None => Ok(Decimal::ZERO),
    }
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };
    let branch = match sub.get_one::<String>("branch") {
        Some(s) => s.parse::<Branch>()?,
        None => get_default_branch(conn)?,
    };
    let record = OutgoingRecord {
        id: 0,
        date,
        payee: sub.get_one::<String>("payee").unwrap().clone(),
        branch,
        category: sub.get_one::<String>("category").unwrap().clone(),
        carried_forward: amount_or_zero(sub, "carried")?,
        monthly_charge: amount_or_zero(sub, "monthly")?,
        total_due: Decimal::ZERO,
        paid: Paid {
            total: Decimal::ZERO,
            cash: amount_or_zero(sub, "cash")?,
            wire: amount_or_zero(sub, "wire")?,
            card: amount_or_zero(sub, "card")?,
        },
        residual_debt: Decimal::ZERO,
        residual_advance: Decimal::ZERO,
    };
    let mut books = Books::load(conn)?;
    let id = books.add_chiqim(conn, record)?;
    if let Some(r) = books.chiqim.iter().find(|r| r.id == id) {
        println!(
            "Recorded '{}' on {} (id {}): due {}, paid {}, qoldiq {}, avans {}",
            r.payee,
            r.date,
            id,
            fmt_grouped(&r.total_due),
            fmt_grouped(&r.paid.total),
            fmt_grouped(&r.residual_debt),
            fmt_grouped(&r.residual_advance)
        );
    }
    Ok(())
}

/// Builds the filter specification shared by `chiqim list` and `export chiqim`.
pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<OutgoingFilter> {
    let mut filter = OutgoingFilter::default();
    if let Some(s) = sub.get_one::<String>("search") {
        filter.search = s.clone();
    }
    if let Some(b) = sub.get_one::<String>("branch") {
        filter.branch = Some(b.parse::<Branch>()?);
    }
    if let Some(c) = sub.get_one::<String>("category") {
        filter.category = Some(c.clone());
    }
    if let Some(d) = sub.get_one::<String>("from") {
        filter.dates.start = Some(parse_date(d)?);
    }
    if let Some(d) = sub.get_one::<String>("to") {
        filter.dates.end = Some(parse_date(d)?);
    }
    Ok(filter)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let books = Books::load(conn)?;
    let filter = filter_from_matches(sub)?;
    let filtered = filter.apply(&books.chiqim);
    if maybe_print_json(json_flag, jsonl_flag, &filtered)? {
        return Ok(());
    }
    let headers: Vec<&str> = OUTGOING_COLUMNS.iter().map(|c| c.header).collect();
    println!(
        "{}",
        pretty_table(&headers, table_rows(OUTGOING_COLUMNS, &filtered))
    );
    let t = totals::outgoing(filtered.iter().copied());
    let data = vec![
        vec![
            "Avvalgi oylardan qoldiq".into(),
            fmt_grouped(&t.carried_forward),
        ],
        vec![
            "Bir oylik hisoblangan summa".into(),
            fmt_grouped(&t.monthly_charge),
        ],
        vec!["Jami hisoblangan summa".into(), fmt_grouped(&t.total_due)],
        vec!["To'langan (jami)".into(), fmt_grouped(&t.paid_total)],
        vec!["Naqd".into(), fmt_grouped(&t.cash)],
        vec!["Prechisleniya".into(), fmt_grouped(&t.wire)],
        vec!["Karta".into(), fmt_grouped(&t.card)],
        vec!["Qoldiq qarzdorlik".into(), fmt_grouped(&t.residual_debt)],
        vec!["Qoldiq avans".into(), fmt_grouped(&t.residual_advance)],
    ];
    println!("{}", pretty_table(&["Jami ko'rsatkichlar", ""], data));
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut books = Books::load(conn)?;
    let mut record = books
        .chiqim
        .iter()
        .find(|r| r.id == id)
        .with_context(|| format!("chiqim record {} not found", id))?
        .clone();
    if let Some(v) = sub.get_one::<String>("date") {
        record.date = parse_date(v)?;
    }
    if let Some(v) = sub.get_one::<String>("payee") {
        record.payee = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("branch") {
        record.branch = v.parse()?;
    }
    if let Some(v) = sub.get_one::<String>("category") {
        record.category = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("carried") {
        record.carried_forward = parse_amount(v)?;
    }
    if let Some(v) = sub.get_one::<String>("monthly") {
        record.monthly_charge = parse_amount(v)?;
    }
    if let Some(v) = sub.get_one::<String>("cash") {
        record.paid.cash = parse_amount(v)?;
    }
    if let Some(v) = sub.get_one::<String>("wire") {
        record.paid.wire = parse_amount(v)?;
    }
    if let Some(v) = sub.get_one::<String>("card") {
        record.paid.card = parse_amount(v)?;
    }
    books.update_chiqim(conn, id, record)?;
    println!("Updated chiqim record {}", id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut books = Books::load(conn)?;
    books.delete_chiqim(conn, id)?;
    println!("Removed chiqim record {}", id);
    Ok(())
}
