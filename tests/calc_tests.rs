// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use daftar::calc::{Residual, paid_total, residual, sanitize, total_owed};
use daftar::models::{Branch, IncomingRecord, Paid, PriorBalance};
use rust_decimal::Decimal;

fn d(v: i64) -> Decimal {
    Decimal::from(v)
}

#[test]
fn partial_payment_leaves_residual_debt() {
    let owed = total_owed(d(1_000_000), d(500_000));
    let paid = paid_total(d(1_200_000), d(0), d(0));
    assert_eq!(owed, d(1_500_000));
    assert_eq!(paid, d(1_200_000));
    assert_eq!(
        residual(owed, paid),
        Residual {
            debt: d(300_000),
            advance: Decimal::ZERO,
        }
    );
}

#[test]
fn zero_inputs_stay_zero() {
    assert_eq!(total_owed(d(0), d(0)), Decimal::ZERO);
    assert_eq!(paid_total(d(0), d(0), d(0)), Decimal::ZERO);
    assert_eq!(residual(Decimal::ZERO, Decimal::ZERO), Residual::default());
}

#[test]
fn overpayment_becomes_advance() {
    let split = residual(d(500_000), d(700_000));
    assert_eq!(split.debt, Decimal::ZERO);
    assert_eq!(split.advance, d(200_000));
}

#[test]
fn exact_settlement_zeroes_both_sides() {
    assert_eq!(residual(d(750_000), d(750_000)), Residual::default());
}

#[test]
fn negative_inputs_are_treated_as_zero() {
    assert_eq!(sanitize(d(-7)), Decimal::ZERO);
    assert_eq!(total_owed(d(-5), d(10)), d(10));
    assert_eq!(paid_total(d(-1), d(2), d(3)), d(5));
}

#[test]
fn at_most_one_residual_side_is_nonzero() {
    for owed in [0i64, 1, 250_000, 1_500_000] {
        for paid in [0i64, 1, 250_000, 1_500_000] {
            let split = residual(d(owed), d(paid));
            if owed == paid {
                assert_eq!(split, Residual::default());
            } else {
                assert!(
                    (split.debt == Decimal::ZERO) != (split.advance == Decimal::ZERO),
                    "owed {} paid {} gave debt {} advance {}",
                    owed,
                    paid,
                    split.debt,
                    split.advance
                );
            }
        }
    }
}

#[test]
fn recomputation_is_idempotent() {
    let now = Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap();
    let mut record = IncomingRecord {
        id: 1,
        company: "Olmos Savdo".into(),
        tax_id: "301234567".into(),
        phone: "90 123 45 67".into(),
        contact: "Aziz Karimov".into(),
        service: "Internet".into(),
        branch: Branch::Zarkent,
        staff: "Dilnoza".into(),
        prior: PriorBalance {
            months: 2,
            amount: d(1_000_000),
        },
        monthly_charge: d(500_000),
        // Bogus derived values; recalculate must overwrite all of them.
        total_owed: d(999),
        paid: Paid {
            total: d(999),
            cash: d(1_200_000),
            wire: Decimal::ZERO,
            card: Decimal::ZERO,
        },
        residual_debt: d(999),
        residual_advance: d(999),
        last_updated: now,
    };
    record.recalculate(now);
    assert_eq!(record.total_owed, d(1_500_000));
    assert_eq!(record.paid.total, d(1_200_000));
    assert_eq!(record.residual_debt, d(300_000));
    assert_eq!(record.residual_advance, Decimal::ZERO);

    let first = record.clone();
    record.recalculate(now);
    assert_eq!(record, first);
}
