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
use crate::export::{INCOMING_COLUMNS, table_rows};
use crate::filter::IncomingFilter;
use crate::models::{Branch, IncomingRecord, Paid, PriorBalance};
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

fn flag_string(sub: &clap::ArgMatches, name: &str) -> String {
    sub.get_one::<String>(name).cloned().unwrap_or_default()
}

fn amount_or_zero(sub: &clap::ArgMatches, name: &str) -> Result<Decimal> {
    match sub.get_one::<String>(name) {
        Some(s) => parse_amount(s),
        None => Ok(Decimal::ZERO),
    }
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let branch = match sub.get_one::<String>("branch") {
        Some(s) => s.parse::<Branch>()?,
        None => get_default_branch(conn)?,
    };
    let record = IncomingRecord {
        id: 0,
        company: sub.get_one::<String>("company").unwrap().clone(),
        tax_id: sub.get_one::<String>("tax-id").unwrap().clone(),
        phone: flag_string(sub, "phone"),
        contact: flag_string(sub, "contact"),
        service: flag_string(sub, "service"),
        branch,
        staff: flag_string(sub, "staff"),
        prior: PriorBalance {
            months: sub.get_one::<u32>("prior-months").copied().unwrap_or(0),
            amount: amount_or_zero(sub, "prior-amount")?,
        },
        monthly_charge: amount_or_zero(sub, "monthly")?,
        total_owed: Decimal::ZERO,
        paid: Paid {
            total: Decimal::ZERO,
            cash: amount_or_zero(sub, "cash")?,
            wire: amount_or_zero(sub, "wire")?,
            card: amount_or_zero(sub, "card")?,
        },
        residual_debt: Decimal::ZERO,
        residual_advance: Decimal::ZERO,
        last_updated: Utc::now(),
    };
    let mut books = Books::load(conn)?;
    let id = books.add_kirim(conn, record)?;
    // Report the derived standing as stored, not the raw inputs.
    if let Some(r) = books.kirim.iter().find(|r| r.id == id) {
        println!(
            "Recorded '{}' (id {}): owed {}, paid {}, qoldiq {}, avans {}",
            r.company,
            id,
            fmt_grouped(&r.total_owed),
            fmt_grouped(&r.paid.total),
            fmt_grouped(&r.residual_debt),
            fmt_grouped(&r.residual_advance)
        );
    }
    Ok(())
}

/// Builds the filter specification shared by `kirim list` and `export kirim`.
pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<IncomingFilter> {
    let mut filter = IncomingFilter::default();
    if let Some(s) = sub.get_one::<String>("search") {
        filter.search = s.clone();
    }
    if let Some(b) = sub.get_one::<String>("branch") {
        filter.branch = Some(b.parse::<Branch>()?);
    }
    if let Some(s) = sub.get_one::<String>("status") {
        filter.status = s.parse()?;
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
    let filtered = filter.apply(&books.kirim);
    if maybe_print_json(json_flag, jsonl_flag, &filtered)? {
        return Ok(());
    }
    let headers: Vec<&str> = INCOMING_COLUMNS.iter().map(|c| c.header).collect();
    println!(
        "{}",
        pretty_table(&headers, table_rows(INCOMING_COLUMNS, &filtered))
    );
    let t = totals::incoming(filtered.iter().copied());
    let data = vec![
        vec!["Oylar soni".into(), t.prior_months.to_string()],
        vec!["Summasi".into(), fmt_grouped(&t.prior_amount)],
        vec![
            "Bir oylik hisoblangan summa".into(),
            fmt_grouped(&t.monthly_charge),
        ],
        vec!["Jami qarzdorlik".into(), fmt_grouped(&t.total_owed)],
        vec!["To'landi (jami)".into(), fmt_grouped(&t.paid_total)],
        vec!["Naqd".into(), fmt_grouped(&t.cash)],
        vec!["Prechisleniya".into(), fmt_grouped(&t.wire)],
        vec!["Karta".into(), fmt_grouped(&t.card)],
        vec!["Qoldiq".into(), fmt_grouped(&t.residual_debt)],
        vec!["Qoldiq avans".into(), fmt_grouped(&t.residual_advance)],
    ];
    println!("{}", pretty_table(&["Jami ko'rsatkichlar", ""], data));
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut books = Books::load(conn)?;
    let mut record = books
        .kirim
        .iter()
        .find(|r| r.id == id)
        .with_context(|| format!("kirim record {} not found", id))?
        .clone();
    if let Some(v) = sub.get_one::<String>("company") {
        record.company = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("tax-id") {
        record.tax_id = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("phone") {
        record.phone = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("contact") {
        record.contact = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("service") {
        record.service = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("branch") {
        record.branch = v.parse()?;
    }
    if let Some(v) = sub.get_one::<String>("staff") {
        record.staff = v.clone();
    }
    if let Some(v) = sub.get_one::<u32>("prior-months") {
        record.prior.months = *v;
    }
    if let Some(v) = sub.get_one::<String>("prior-amount") {
        record.prior.amount = parse_amount(v)?;
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
    books.update_kirim(conn, id, record)?;
    println!("Updated kirim record {}", id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut books = Books::load(conn)?;
    books.delete_kirim(conn, id)?;
    println!("Removed kirim record {}", id);
    Ok(())
}
