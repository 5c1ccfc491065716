// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::LedgerError;
use crate::models::{Branch, IncomingRecord, OutgoingRecord};

/// Inclusive calendar-date window. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Payment-status filter for the incoming ledger. "Paid" means any payment
/// at all, including partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentStatus {
    #[default]
    Any,
    Paid,
    Unpaid,
}

impl FromStr for PaymentStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" | "all" => Ok(PaymentStatus::Any),
            "paid" => Ok(PaymentStatus::Paid),
            "unpaid" => Ok(PaymentStatus::Unpaid),
            _ => Err(LedgerError::UnknownStatus(s.to_string())),
        }
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Filter specification for the incoming ledger. The default value matches
/// every record; a record matches iff all active sub-filters match.
#[derive(Debug, Clone, Default)]
pub struct IncomingFilter {
    pub search: String,
    pub branch: Option<Branch>,
    pub status: PaymentStatus,
    pub dates: DateRange,
}

impl IncomingFilter {
    pub fn matches(&self, row: &IncomingRecord) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            contains_ci(&row.company, &needle)
                || contains_ci(&row.tax_id, &needle)
                || contains_ci(&row.contact, &needle)
                || contains_ci(&row.staff, &needle)
        };
        let matches_branch = self.branch.is_none_or(|b| row.branch == b);
        let matches_status = match self.status {
            PaymentStatus::Any => true,
            PaymentStatus::Paid => row.paid.total > rust_decimal::Decimal::ZERO,
            PaymentStatus::Unpaid => row.paid.total == rust_decimal::Decimal::ZERO,
        };
        // Incoming rows have no business date of their own; they are ranged
        // on the day they were last written.
        let matches_dates = self.dates.contains(row.last_updated.date_naive());
        matches_search && matches_branch && matches_status && matches_dates
    }

    pub fn apply<'a>(&self, rows: &'a [IncomingRecord]) -> Vec<&'a IncomingRecord> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Filter specification for the outgoing ledger.
#[derive(Debug, Clone, Default)]
pub struct OutgoingFilter {
    pub search: String,
    pub branch: Option<Branch>,
    pub category: Option<String>,
    pub dates: DateRange,
}

impl OutgoingFilter {
    pub fn matches(&self, row: &OutgoingRecord) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            contains_ci(&row.payee, &needle)
                || contains_ci(&row.category, &needle)
                || contains_ci(row.branch.label(), &needle)
        };
        let matches_category = self
            .category
            .as_deref()
            .is_none_or(|c| contains_ci(&row.category, &c.to_lowercase()));
        let matches_branch = self.branch.is_none_or(|b| row.branch == b);
        let matches_dates = self.dates.contains(row.date);
        matches_search && matches_category && matches_branch && matches_dates
    }

    pub fn apply<'a>(&self, rows: &'a [OutgoingRecord]) -> Vec<&'a OutgoingRecord> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}
