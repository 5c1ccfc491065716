// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::store;
use crate::utils::pretty_table;

/// Read-only consistency report: rows whose stored derived columns disagree
/// with their raw inputs (e.g. written before the advance column existed, or
/// edited outside this tool), and rows where both residuals are nonzero.
pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    for record in store::list_kirim(conn)? {
        let mut expected = record.clone();
        expected.recalculate(record.last_updated);
        if expected.total_owed != record.total_owed
            || expected.paid.total != record.paid.total
            || expected.residual_debt != record.residual_debt
            || expected.residual_advance != record.residual_advance
        {
            rows.push(vec!["kirim_derived_mismatch".into(), format!("id {}", record.id)]);
        }
        if record.residual_debt != Decimal::ZERO && record.residual_advance != Decimal::ZERO {
            rows.push(vec![
                "kirim_both_residuals_nonzero".into(),
                format!("id {}", record.id),
            ]);
        }
    }

    for record in store::list_chiqim(conn)? {
        let mut expected = record.clone();
        expected.recalculate();
        if expected.total_due != record.total_due
            || expected.paid.total != record.paid.total
            || expected.residual_debt != record.residual_debt
            || expected.residual_advance != record.residual_advance
        {
            rows.push(vec![
                "chiqim_derived_mismatch".into(),
                format!("id {}", record.id),
            ]);
        }
        if record.residual_debt != Decimal::ZERO && record.residual_advance != Decimal::ZERO {
            rows.push(vec![
                "chiqim_both_residuals_nonzero".into(),
                format!("id {}", record.id),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
