// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use daftar::calc;
use daftar::models::{Branch, IncomingRecord, Paid, PriorBalance};
use daftar::totals;
use rust_decimal::Decimal;

fn d(v: i64) -> Decimal {
    Decimal::from(v)
}

fn kirim(id: i64, prior: i64, monthly: i64, cash: i64, wire: i64) -> IncomingRecord {
    let stamp = Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap();
    let mut r = IncomingRecord {
        id,
        company: format!("Korxona {}", id),
        tax_id: format!("30123456{}", id),
        phone: String::new(),
        contact: String::new(),
        service: String::new(),
        branch: Branch::Zarkent,
        staff: String::new(),
        prior: PriorBalance {
            months: 1,
            amount: d(prior),
        },
        monthly_charge: d(monthly),
        total_owed: Decimal::ZERO,
        paid: Paid {
            total: Decimal::ZERO,
            cash: d(cash),
            wire: d(wire),
            card: Decimal::ZERO,
        },
        residual_debt: Decimal::ZERO,
        residual_advance: Decimal::ZERO,
        last_updated: stamp,
    };
    r.recalculate(stamp);
    r
}

#[test]
fn empty_input_yields_all_zero_totals() {
    let rows: Vec<IncomingRecord> = Vec::new();
    let t = totals::incoming(&rows);
    assert_eq!(t, totals::IncomingTotals::default());
}

#[test]
fn totals_sum_each_field_independently() {
    let rows = vec![
        kirim(1, 1_000_000, 500_000, 1_200_000, 0),
        kirim(2, 0, 800_000, 300_000, 100_000),
    ];
    let t = totals::incoming(&rows);
    assert_eq!(t.prior_months, 2);
    assert_eq!(t.prior_amount, d(1_000_000));
    assert_eq!(t.monthly_charge, d(1_300_000));
    assert_eq!(t.total_owed, d(2_300_000));
    assert_eq!(t.paid_total, d(1_600_000));
    assert_eq!(t.cash, d(1_500_000));
    assert_eq!(t.wire, d(100_000));
    assert_eq!(t.residual_debt, d(300_000) + d(400_000));
    assert_eq!(t.residual_advance, Decimal::ZERO);
}

#[test]
fn residual_sums_match_difference_of_sums_when_all_in_debt() {
    let rows = vec![
        kirim(1, 1_000_000, 500_000, 1_200_000, 0),
        kirim(2, 200_000, 300_000, 100_000, 0),
        kirim(3, 0, 900_000, 0, 650_000),
    ];
    let t = totals::incoming(&rows);
    let recombined = calc::residual(t.total_owed, t.paid_total);
    assert_eq!(t.residual_debt, recombined.debt);
    assert_eq!(t.residual_advance, recombined.advance);
}

// When some rows are in debt and others in credit, the residual sums are NOT
// a difference of sums: the per-row split loses cancellation between rows.
// Only the net (debt - advance) survives aggregation.
#[test]
fn mixed_signs_break_the_difference_of_sums() {
    let debtor = kirim(1, 1_000_000, 500_000, 1_200_000, 0); // 300k debt
    let overpayer = kirim(2, 0, 500_000, 700_000, 0); // 200k advance
    let t = totals::incoming([&debtor, &overpayer]);
    assert_eq!(t.residual_debt, d(300_000));
    assert_eq!(t.residual_advance, d(200_000));

    let recombined = calc::residual(t.total_owed, t.paid_total);
    assert_eq!(recombined.debt, d(100_000));
    assert_eq!(recombined.advance, Decimal::ZERO);

    assert_ne!(t.residual_debt, recombined.debt);
    assert_eq!(
        t.residual_debt - t.residual_advance,
        recombined.debt - recombined.advance
    );
}
