// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("uz.daftar", "Daftar", "daftar"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("daftar.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

// Amounts are stored as TEXT and parsed back into Decimal; derived columns
// are rewritten from the raw ones on every create/update.
pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS kirim(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company TEXT NOT NULL,
        tax_id TEXT NOT NULL,
        phone TEXT NOT NULL DEFAULT '',
        contact TEXT NOT NULL DEFAULT '',
        service TEXT NOT NULL DEFAULT '',
        branch TEXT NOT NULL,
        staff TEXT NOT NULL DEFAULT '',
        prior_months INTEGER NOT NULL DEFAULT 0,
        prior_amount TEXT NOT NULL DEFAULT '0',
        monthly_charge TEXT NOT NULL DEFAULT '0',
        total_owed TEXT NOT NULL DEFAULT '0',
        paid_total TEXT NOT NULL DEFAULT '0',
        paid_cash TEXT NOT NULL DEFAULT '0',
        paid_wire TEXT NOT NULL DEFAULT '0',
        paid_card TEXT NOT NULL DEFAULT '0',
        residual_debt TEXT NOT NULL DEFAULT '0',
        residual_advance TEXT NOT NULL DEFAULT '0',
        last_updated TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS chiqim(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        payee TEXT NOT NULL,
        branch TEXT NOT NULL,
        category TEXT NOT NULL,
        carried_forward TEXT NOT NULL DEFAULT '0',
        monthly_charge TEXT NOT NULL DEFAULT '0',
        total_due TEXT NOT NULL DEFAULT '0',
        paid_total TEXT NOT NULL DEFAULT '0',
        paid_cash TEXT NOT NULL DEFAULT '0',
        paid_wire TEXT NOT NULL DEFAULT '0',
        paid_card TEXT NOT NULL DEFAULT '0',
        residual_debt TEXT NOT NULL DEFAULT '0',
        residual_advance TEXT NOT NULL DEFAULT '0'
    );
    CREATE INDEX IF NOT EXISTS idx_chiqim_date ON chiqim(date);
    "#,
    )?;
    Ok(())
}
