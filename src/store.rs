// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params};
use rust_decimal::Decimal;

use crate::models::{Branch, IncomingRecord, OutgoingRecord, Paid, PriorBalance};
use crate::utils::parse_date;

// Every write validates first and rewrites the derived columns from the raw
// ones; whatever derived values the caller put on the record are discarded.

fn read_amount(row: &Row<'_>, idx: usize) -> Result<Decimal> {
    let s: String = row.get(idx)?;
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}' in column {}", s, idx))
}

pub fn list_kirim(conn: &Connection) -> Result<Vec<IncomingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, company, tax_id, phone, contact, service, branch, staff,
                prior_months, prior_amount, monthly_charge, total_owed,
                paid_total, paid_cash, paid_wire, paid_card,
                residual_debt, residual_advance, last_updated
         FROM kirim ORDER BY id",
    )?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let branch: String = r.get(6)?;
        let stamp: String = r.get(18)?;
        data.push(IncomingRecord {
            id,
            company: r.get(1)?,
            tax_id: r.get(2)?,
            phone: r.get(3)?,
            contact: r.get(4)?,
            service: r.get(5)?,
            branch: branch.parse::<Branch>()?,
            staff: r.get(7)?,
            prior: PriorBalance {
                months: r.get(8)?,
                amount: read_amount(r, 9)?,
            },
            monthly_charge: read_amount(r, 10)?,
            total_owed: read_amount(r, 11)?,
            paid: Paid {
                total: read_amount(r, 12)?,
                cash: read_amount(r, 13)?,
                wire: read_amount(r, 14)?,
                card: read_amount(r, 15)?,
            },
            residual_debt: read_amount(r, 16)?,
            residual_advance: read_amount(r, 17)?,
            last_updated: DateTime::parse_from_rfc3339(&stamp)
                .with_context(|| format!("Invalid timestamp '{}' for kirim {}", stamp, id))?
                .with_timezone(&Utc),
        });
    }
    Ok(data)
}

pub fn create_kirim(conn: &Connection, record: &mut IncomingRecord) -> Result<i64> {
    record.validate()?;
    record.recalculate(Utc::now());
    conn.execute(
        "INSERT INTO kirim(company, tax_id, phone, contact, service, branch, staff,
                           prior_months, prior_amount, monthly_charge, total_owed,
                           paid_total, paid_cash, paid_wire, paid_card,
                           residual_debt, residual_advance, last_updated)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14,?15,?16,?17,?18)",
        params![
            record.company,
            record.tax_id,
            record.phone,
            record.contact,
            record.service,
            record.branch.label(),
            record.staff,
            record.prior.months,
            record.prior.amount.to_string(),
            record.monthly_charge.to_string(),
            record.total_owed.to_string(),
            record.paid.total.to_string(),
            record.paid.cash.to_string(),
            record.paid.wire.to_string(),
            record.paid.card.to_string(),
            record.residual_debt.to_string(),
            record.residual_advance.to_string(),
            record.last_updated.to_rfc3339(),
        ],
    )?;
    record.id = conn.last_insert_rowid();
    Ok(record.id)
}

pub fn update_kirim(conn: &Connection, id: i64, record: &mut IncomingRecord) -> Result<()> {
    record.validate()?;
    record.recalculate(Utc::now());
    let n = conn.execute(
        "UPDATE kirim SET company=?1, tax_id=?2, phone=?3, contact=?4, service=?5,
                          branch=?6, staff=?7, prior_months=?8, prior_amount=?9,
                          monthly_charge=?10, total_owed=?11, paid_total=?12,
                          paid_cash=?13, paid_wire=?14, paid_card=?15,
                          residual_debt=?16, residual_advance=?17, last_updated=?18
         WHERE id=?19",
        params![
            record.company,
            record.tax_id,
            record.phone,
            record.contact,
            record.service,
            record.branch.label(),
            record.staff,
            record.prior.months,
            record.prior.amount.to_string(),
            record.monthly_charge.to_string(),
            record.total_owed.to_string(),
            record.paid.total.to_string(),
            record.paid.cash.to_string(),
            record.paid.wire.to_string(),
            record.paid.card.to_string(),
            record.residual_debt.to_string(),
            record.residual_advance.to_string(),
            record.last_updated.to_rfc3339(),
            id,
        ],
    )?;
    if n == 0 {
        bail!("kirim record {} not found", id);
    }
    Ok(())
}

pub fn delete_kirim(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM kirim WHERE id=?1", params![id])?;
    Ok(())
}

pub fn list_chiqim(conn: &Connection) -> Result<Vec<OutgoingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, payee, branch, category, carried_forward, monthly_charge,
                total_due, paid_total, paid_cash, paid_wire, paid_card,
                residual_debt, residual_advance
         FROM chiqim ORDER BY id",
    )?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        let branch: String = r.get(3)?;
        data.push(OutgoingRecord {
            id,
            date: parse_date(&date)
                .with_context(|| format!("Invalid date '{}' for chiqim {}", date, id))?,
            payee: r.get(2)?,
            branch: branch.parse::<Branch>()?,
            category: r.get(4)?,
            carried_forward: read_amount(r, 5)?,
            monthly_charge: read_amount(r, 6)?,
            total_due: read_amount(r, 7)?,
            paid: Paid {
                total: read_amount(r, 8)?,
                cash: read_amount(r, 9)?,
                wire: read_amount(r, 10)?,
                card: read_amount(r, 11)?,
            },
            residual_debt: read_amount(r, 12)?,
            residual_advance: read_amount(r, 13)?,
        });
    }
    Ok(data)
}

pub fn create_chiqim(conn: &Connection, record: &mut OutgoingRecord) -> Result<i64> {
    record.validate()?;
    record.recalculate();
    conn.execute(
        "INSERT INTO chiqim(date, payee, branch, category, carried_forward, monthly_charge,
                            total_due, paid_total, paid_cash, paid_wire, paid_card,
                            residual_debt, residual_advance)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13)",
        params![
            record.date.to_string(),
            record.payee,
            record.branch.label(),
            record.category,
            record.carried_forward.to_string(),
            record.monthly_charge.to_string(),
            record.total_due.to_string(),
            record.paid.total.to_string(),
            record.paid.cash.to_string(),
            record.paid.wire.to_string(),
            record.paid.card.to_string(),
            record.residual_debt.to_string(),
            record.residual_advance.to_string(),
        ],
    )?;
    record.id = conn.last_insert_rowid();
    Ok(record.id)
}

pub fn update_chiqim(conn: &Connection, id: i64, record: &mut OutgoingRecord) -> Result<()> {
    record.validate()?;
    record.recalculate();
    let n = conn.execute(
        "UPDATE chiqim SET date=?1, payee=?2, branch=?3, category=?4, carried_forward=?5,
                           monthly_charge=?6, total_due=?7, paid_total=?8, paid_cash=?9,
                           paid_wire=?10, paid_card=?11, residual_debt=?12, residual_advance=?13
         WHERE id=?14",
        params![
            record.date.to_string(),
            record.payee,
            record.branch.label(),
            record.category,
            record.carried_forward.to_string(),
            record.monthly_charge.to_string(),
            record.total_due.to_string(),
            record.paid.total.to_string(),
            record.paid.cash.to_string(),
            record.paid.wire.to_string(),
            record.paid.card.to_string(),
            record.residual_debt.to_string(),
            record.residual_advance.to_string(),
            id,
        ],
    )?;
    if n == 0 {
        bail!("chiqim record {} not found", id);
    }
    Ok(())
}

pub fn delete_chiqim(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM chiqim WHERE id=?1", params![id])?;
    Ok(())
}
