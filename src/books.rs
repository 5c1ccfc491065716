// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::{IncomingRecord, OutgoingRecord};
use crate::store;

/// In-memory snapshot of both ledgers. The database is the source of truth;
/// this is a cache that is thrown away and re-read wholesale after every
/// successful mutation. A failed mutation or failed re-read leaves the
/// previous snapshot in place.
#[derive(Debug, Default)]
pub struct Books {
    pub kirim: Vec<IncomingRecord>,
    pub chiqim: Vec<OutgoingRecord>,
}

impl Books {
    pub fn load(conn: &Connection) -> Result<Self> {
        Ok(Books {
            kirim: store::list_kirim(conn)?,
            chiqim: store::list_chiqim(conn)?,
        })
    }

    /// Both ledgers are read in full before either field is replaced.
    pub fn reload(&mut self, conn: &Connection) -> Result<()> {
        let kirim = store::list_kirim(conn)?;
        let chiqim = store::list_chiqim(conn)?;
        self.kirim = kirim;
        self.chiqim = chiqim;
        Ok(())
    }

    pub fn add_kirim(&mut self, conn: &Connection, mut record: IncomingRecord) -> Result<i64> {
        let id = store::create_kirim(conn, &mut record)?;
        self.reload(conn)?;
        Ok(id)
    }

    pub fn update_kirim(
        &mut self,
        conn: &Connection,
        id: i64,
        mut record: IncomingRecord,
    ) -> Result<()> {
        store::update_kirim(conn, id, &mut record)?;
        self.reload(conn)
    }

    pub fn delete_kirim(&mut self, conn: &Connection, id: i64) -> Result<()> {
        store::delete_kirim(conn, id)?;
        self.reload(conn)
    }

    pub fn add_chiqim(&mut self, conn: &Connection, mut record: OutgoingRecord) -> Result<i64> {
        let id = store::create_chiqim(conn, &mut record)?;
        self.reload(conn)?;
        Ok(id)
    }

    pub fn update_chiqim(
        &mut self,
        conn: &Connection,
        id: i64,
        mut record: OutgoingRecord,
    ) -> Result<()> {
        store::update_chiqim(conn, id, &mut record)?;
        self.reload(conn)
    }

    pub fn delete_chiqim(&mut self, conn: &Connection, id: i64) -> Result<()> {
        store::delete_chiqim(conn, id)?;
        self.reload(conn)
    }
}
