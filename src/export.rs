// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io;

use anyhow::Result;
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::models::{IncomingRecord, OutgoingRecord};
use crate::utils::fmt_grouped;

/// One report column: header label plus the extraction of its display value.
/// Extraction always reads the derived fields as stored, so the file agrees
/// with the on-screen tables built from the same schema.
pub struct Column<T> {
    pub header: &'static str,
    pub value: fn(&T) -> String,
}

/// Column schema of the incoming-ledger report ("Jami hisobot").
pub const INCOMING_COLUMNS: &[Column<IncomingRecord>] = &[
    Column {
        header: "Korxona nomi",
        value: |r| r.company.clone(),
    },
    Column {
        header: "INN",
        value: |r| r.tax_id.clone(),
    },
    Column {
        header: "Tel raqami",
        value: |r| r.phone.clone(),
    },
    Column {
        header: "Ismi",
        value: |r| r.contact.clone(),
    },
    Column {
        header: "Xizmat turi",
        value: |r| r.service.clone(),
    },
    Column {
        header: "Filial nomi",
        value: |r| r.branch.label().to_string(),
    },
    Column {
        header: "Xodim",
        value: |r| r.staff.clone(),
    },
    Column {
        header: "Oylar soni",
        value: |r| r.prior.months.to_string(),
    },
    Column {
        header: "Summasi",
        value: |r| fmt_grouped(&r.prior.amount),
    },
    Column {
        header: "Bir oylik hisoblangan summa",
        value: |r| fmt_grouped(&r.monthly_charge),
    },
    Column {
        header: "Jami qarzdorlik",
        value: |r| fmt_grouped(&r.total_owed),
    },
    Column {
        header: "Jami",
        value: |r| fmt_grouped(&r.paid.total),
    },
    Column {
        header: "Naqd",
        value: |r| fmt_grouped(&r.paid.cash),
    },
    Column {
        header: "Prechisleniya",
        value: |r| fmt_grouped(&r.paid.wire),
    },
    Column {
        header: "Karta",
        value: |r| fmt_grouped(&r.paid.card),
    },
    Column {
        header: "Qoldiq",
        value: |r| fmt_grouped(&r.residual_debt),
    },
    Column {
        header: "Qoldiq avans",
        value: |r| fmt_grouped(&r.residual_advance),
    },
];

/// Column schema of the outgoing-ledger report ("Chiqimlar").
pub const OUTGOING_COLUMNS: &[Column<OutgoingRecord>] = &[
    Column {
        header: "Sana",
        value: |r| r.date.to_string(),
    },
    Column {
        header: "Nomi",
        value: |r| r.payee.clone(),
    },
    Column {
        header: "Filial nomi",
        value: |r| r.branch.label().to_string(),
    },
    Column {
        header: "Chiqim nomi",
        value: |r| r.category.clone(),
    },
    Column {
        header: "Avvalgi oylardan qoldiq",
        value: |r| fmt_grouped(&r.carried_forward),
    },
    Column {
        header: "Bir oylik hisoblangan summa",
        value: |r| fmt_grouped(&r.monthly_charge),
    },
    Column {
        header: "Jami hisoblangan summa",
        value: |r| fmt_grouped(&r.total_due),
    },
    Column {
        header: "To'langan summa (Jami)",
        value: |r| fmt_grouped(&r.paid.total),
    },
    Column {
        header: "Naqd",
        value: |r| fmt_grouped(&r.paid.cash),
    },
    Column {
        header: "Prechisleniya",
        value: |r| fmt_grouped(&r.paid.wire),
    },
    Column {
        header: "Karta",
        value: |r| fmt_grouped(&r.paid.card),
    },
    Column {
        header: "Qoldiq qarzdorlik",
        value: |r| fmt_grouped(&r.residual_debt),
    },
    Column {
        header: "Qoldiq avans",
        value: |r| fmt_grouped(&r.residual_advance),
    },
];

/// Materializes the schema for table display: one Vec<String> per record.
pub fn table_rows<T>(columns: &[Column<T>], rows: &[&T]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| columns.iter().map(|c| (c.value)(r)).collect())
        .collect()
}

/// Writes a header line and one line per record. Anything that is not a bare
/// number (names, dates, grouped amounts) comes out double-quoted, so the
/// grouped display convention survives the trip through a comma-separated
/// file.
pub fn write_csv<T, W: io::Write>(out: W, columns: &[Column<T>], rows: &[&T]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(out);
    wtr.write_record(columns.iter().map(|c| c.header))?;
    for row in rows {
        wtr.write_record(columns.iter().map(|c| (c.value)(row)))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Default report file name, stamped with the export date.
pub fn stamped_filename(stem: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", stem, date.format("%Y-%m-%d"))
}
