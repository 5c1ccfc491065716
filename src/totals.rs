// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{IncomingRecord, OutgoingRecord};

/// Ledger-wide sums for a (usually filtered) set of incoming records. Each
/// field is the plain sum of the corresponding per-record field: residuals
/// are summed as stored, not rederived from the summed totals, because the
/// two disagree as soon as debtors and overpayers are mixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IncomingTotals {
    pub prior_months: u64,
    pub prior_amount: Decimal,
    pub monthly_charge: Decimal,
    pub total_owed: Decimal,
    pub paid_total: Decimal,
    pub cash: Decimal,
    pub wire: Decimal,
    pub card: Decimal,
    pub residual_debt: Decimal,
    pub residual_advance: Decimal,
}

pub fn incoming<'a, I>(rows: I) -> IncomingTotals
where
    I: IntoIterator<Item = &'a IncomingRecord>,
{
    let mut acc = IncomingTotals::default();
    for row in rows {
        acc.prior_months += u64::from(row.prior.months);
        acc.prior_amount += row.prior.amount;
        acc.monthly_charge += row.monthly_charge;
        acc.total_owed += row.total_owed;
        acc.paid_total += row.paid.total;
        acc.cash += row.paid.cash;
        acc.wire += row.paid.wire;
        acc.card += row.paid.card;
        acc.residual_debt += row.residual_debt;
        acc.residual_advance += row.residual_advance;
    }
    acc
}

/// Same contract as [`IncomingTotals`] for the outgoing ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutgoingTotals {
    pub carried_forward: Decimal,
    pub monthly_charge: Decimal,
    pub total_due: Decimal,
    pub paid_total: Decimal,
    pub cash: Decimal,
    pub wire: Decimal,
    pub card: Decimal,
    pub residual_debt: Decimal,
    pub residual_advance: Decimal,
}

pub fn outgoing<'a, I>(rows: I) -> OutgoingTotals
where
    I: IntoIterator<Item = &'a OutgoingRecord>,
{
    let mut acc = OutgoingTotals::default();
    for row in rows {
        acc.carried_forward += row.carried_forward;
        acc.monthly_charge += row.monthly_charge;
        acc.total_due += row.total_due;
        acc.paid_total += row.paid.total;
        acc.cash += row.paid.cash;
        acc.wire += row.paid.wire;
        acc.card += row.paid.card;
        acc.residual_debt += row.residual_debt;
        acc.residual_advance += row.residual_advance;
    }
    acc
}
