// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::File;

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::Connection;

use crate::books::Books;
use crate::commands::{chiqim, kirim};
use crate::export::{self, INCOMING_COLUMNS, OUTGOING_COLUMNS};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("kirim", sub)) => export_kirim(conn, sub),
        Some(("chiqim", sub)) => export_chiqim(conn, sub),
        _ => Ok(()),
    }
}

// Exports take the same filter flags as `list`, so the file is exactly the
// subset on screen. File name stems match the original report downloads.

fn export_kirim(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let books = Books::load(conn)?;
    let filter = kirim::filter_from_matches(sub)?;
    let filtered = filter.apply(&books.kirim);
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.clone(),
        None => export::stamped_filename("jami_hisobot", Utc::now().date_naive()),
    };
    let file = File::create(&out).with_context(|| format!("Create {}", out))?;
    export::write_csv(file, INCOMING_COLUMNS, &filtered)?;
    println!("Exported {} kirim records to {}", filtered.len(), out);
    Ok(())
}

fn export_chiqim(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let books = Books::load(conn)?;
    let filter = chiqim::filter_from_matches(sub)?;
    let filtered = filter.apply(&books.chiqim);
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.clone(),
        None => export::stamped_filename("chiqimlar", Utc::now().date_naive()),
    };
    let file = File::create(&out).with_context(|| format!("Create {}", out))?;
    export::write_csv(file, OUTGOING_COLUMNS, &filtered)?;
    println!("Exported {} chiqim records to {}", filtered.len(), out);
    Ok(())
}
