// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calc;
use crate::error::LedgerError;

/// The fixed set of branch offices. Records always belong to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    Zarkent,
    Nabrejniy,
}

impl Branch {
    pub const ALL: [Branch; 2] = [Branch::Zarkent, Branch::Nabrejniy];

    /// Display label as it appears in reports and the database.
    pub fn label(&self) -> &'static str {
        match self {
            Branch::Zarkent => "Zarkent Filiali",
            Branch::Nabrejniy => "Nabrejniy Filiali",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Branch {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "zarkent" | "zarkent filiali" => Ok(Branch::Zarkent),
            "nabrejniy" | "nabrejniy filiali" => Ok(Branch::Nabrejniy),
            _ => Err(LedgerError::UnknownBranch(s.to_string())),
        }
    }
}

/// Payment split across the three channels. `total` is always the channel
/// sum; it is rederived on every write and never settable on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paid {
    pub total: Decimal,
    pub cash: Decimal,
    pub wire: Decimal,
    pub card: Decimal,
}

/// Debt carried over from earlier periods: how many months and how much.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorBalance {
    pub months: u32,
    pub amount: Decimal,
}

/// One incoming-ledger row: a payer and their standing for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingRecord {
    pub id: i64,
    pub company: String,
    pub tax_id: String,
    pub phone: String,
    pub contact: String,
    pub service: String,
    pub branch: Branch,
    pub staff: String,
    pub prior: PriorBalance,
    pub monthly_charge: Decimal,
    pub total_owed: Decimal,
    pub paid: Paid,
    pub residual_debt: Decimal,
    pub residual_advance: Decimal,
    pub last_updated: DateTime<Utc>,
}

impl IncomingRecord {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.company.trim().is_empty() {
            return Err(LedgerError::MissingField("company"));
        }
        if self.tax_id.trim().is_empty() {
            return Err(LedgerError::MissingField("tax-id"));
        }
        Ok(())
    }

    /// Rederives every computed field from the raw inputs and stamps the
    /// record. The result depends only on the raw fields, so calling this
    /// again with the same inputs changes nothing.
    pub fn recalculate(&mut self, now: DateTime<Utc>) {
        self.prior.amount = calc::sanitize(self.prior.amount);
        self.monthly_charge = calc::sanitize(self.monthly_charge);
        self.paid.cash = calc::sanitize(self.paid.cash);
        self.paid.wire = calc::sanitize(self.paid.wire);
        self.paid.card = calc::sanitize(self.paid.card);
        self.total_owed = calc::total_owed(self.prior.amount, self.monthly_charge);
        self.paid.total = calc::paid_total(self.paid.cash, self.paid.wire, self.paid.card);
        let split = calc::residual(self.total_owed, self.paid.total);
        self.residual_debt = split.debt;
        self.residual_advance = split.advance;
        self.last_updated = now;
    }
}

/// One outgoing-ledger row: a dated expense line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub payee: String,
    pub branch: Branch,
    pub category: String,
    pub carried_forward: Decimal,
    pub monthly_charge: Decimal,
    pub total_due: Decimal,
    pub paid: Paid,
    pub residual_debt: Decimal,
    pub residual_advance: Decimal,
}

impl OutgoingRecord {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.payee.trim().is_empty() {
            return Err(LedgerError::MissingField("payee"));
        }
        if self.category.trim().is_empty() {
            return Err(LedgerError::MissingField("category"));
        }
        Ok(())
    }

    /// Same contract as [`IncomingRecord::recalculate`]; outgoing rows carry
    /// no timestamp.
    pub fn recalculate(&mut self) {
        self.carried_forward = calc::sanitize(self.carried_forward);
        self.monthly_charge = calc::sanitize(self.monthly_charge);
        self.paid.cash = calc::sanitize(self.paid.cash);
        self.paid.wire = calc::sanitize(self.paid.wire);
        self.paid.card = calc::sanitize(self.paid.card);
        self.total_due = calc::total_owed(self.carried_forward, self.monthly_charge);
        self.paid.total = calc::paid_total(self.paid.cash, self.paid.wire, self.paid.card);
        let split = calc::residual(self.total_due, self.paid.total);
        self.residual_debt = split.debt;
        self.residual_advance = split.advance;
    }
}
