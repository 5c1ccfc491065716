// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use daftar::filter::{DateRange, IncomingFilter, OutgoingFilter, PaymentStatus};
use daftar::models::{Branch, IncomingRecord, OutgoingRecord, Paid, PriorBalance};
use rust_decimal::Decimal;

fn kirim(id: i64, company: &str, branch: Branch, paid_cash: i64, day: u32) -> IncomingRecord {
    let stamp = Utc.with_ymd_and_hms(2025, 8, day, 10, 0, 0).unwrap();
    let mut r = IncomingRecord {
        id,
        company: company.into(),
        tax_id: format!("30123456{}", id),
        phone: "90 123 45 67".into(),
        contact: "Aziz Karimov".into(),
        service: "Internet".into(),
        branch,
        staff: "Dilnoza".into(),
        prior: PriorBalance {
            months: 1,
            amount: Decimal::from(100_000),
        },
        monthly_charge: Decimal::from(200_000),
        total_owed: Decimal::ZERO,
        paid: Paid {
            total: Decimal::ZERO,
            cash: Decimal::from(paid_cash),
            wire: Decimal::ZERO,
            card: Decimal::ZERO,
        },
        residual_debt: Decimal::ZERO,
        residual_advance: Decimal::ZERO,
        last_updated: stamp,
    };
    r.recalculate(stamp);
    r
}

fn chiqim(id: i64, payee: &str, category: &str, branch: Branch, day: u32) -> OutgoingRecord {
    let mut r = OutgoingRecord {
        id,
        date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
        payee: payee.into(),
        branch,
        category: category.into(),
        carried_forward: Decimal::from(50_000),
        monthly_charge: Decimal::from(300_000),
        total_due: Decimal::ZERO,
        paid: Paid::default(),
        residual_debt: Decimal::ZERO,
        residual_advance: Decimal::ZERO,
    };
    r.recalculate();
    r
}

fn sample_kirim() -> Vec<IncomingRecord> {
    vec![
        kirim(1, "Olmos Savdo", Branch::Zarkent, 300_000, 3),
        kirim(2, "Baraka Market", Branch::Nabrejniy, 0, 5),
        kirim(3, "Yulduz Servis", Branch::Zarkent, 0, 9),
        kirim(4, "Nur Biznes", Branch::Nabrejniy, 150_000, 12),
    ]
}

#[test]
fn empty_filter_matches_every_record() {
    let rows = sample_kirim();
    let filtered = IncomingFilter::default().apply(&rows);
    assert_eq!(filtered.len(), rows.len());
}

#[test]
fn branch_filters_partition_the_ledger() {
    let rows = sample_kirim();
    let zarkent = IncomingFilter {
        branch: Some(Branch::Zarkent),
        ..Default::default()
    }
    .apply(&rows);
    let nabrejniy = IncomingFilter {
        branch: Some(Branch::Nabrejniy),
        ..Default::default()
    }
    .apply(&rows);

    let mut ids: Vec<i64> = zarkent
        .iter()
        .chain(nabrejniy.iter())
        .map(|r| r.id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(zarkent.iter().all(|r| !nabrejniy.iter().any(|o| o.id == r.id)));
}

#[test]
fn search_is_case_insensitive_substring() {
    let rows = sample_kirim();
    let by_company = IncomingFilter {
        search: "olmos".into(),
        ..Default::default()
    }
    .apply(&rows);
    assert_eq!(by_company.len(), 1);
    assert_eq!(by_company[0].id, 1);

    // Staff name matches every sample row.
    let by_staff = IncomingFilter {
        search: "DILNOZA".into(),
        ..Default::default()
    }
    .apply(&rows);
    assert_eq!(by_staff.len(), rows.len());
}

#[test]
fn payment_status_splits_paid_and_unpaid() {
    let rows = sample_kirim();
    let paid = IncomingFilter {
        status: PaymentStatus::Paid,
        ..Default::default()
    }
    .apply(&rows);
    let unpaid = IncomingFilter {
        status: PaymentStatus::Unpaid,
        ..Default::default()
    }
    .apply(&rows);
    let paid_ids: Vec<i64> = paid.iter().map(|r| r.id).collect();
    let unpaid_ids: Vec<i64> = unpaid.iter().map(|r| r.id).collect();
    assert_eq!(paid_ids, vec![1, 4]);
    assert_eq!(unpaid_ids, vec![2, 3]);
}

#[test]
fn incoming_date_range_is_inclusive_on_last_updated() {
    let rows = sample_kirim();
    let filter = IncomingFilter {
        dates: DateRange {
            start: NaiveDate::from_ymd_opt(2025, 8, 5),
            end: NaiveDate::from_ymd_opt(2025, 8, 9),
        },
        ..Default::default()
    };
    let ids: Vec<i64> = filter.apply(&rows).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);

    // Open-ended ranges keep the other bound open.
    let from_only = IncomingFilter {
        dates: DateRange {
            start: NaiveDate::from_ymd_opt(2025, 8, 9),
            end: None,
        },
        ..Default::default()
    };
    let ids: Vec<i64> = from_only.apply(&rows).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 4]);
}

#[test]
fn outgoing_date_range_uses_the_expense_date() {
    let rows = vec![
        chiqim(1, "Ofis ijarasi", "Ijara", Branch::Zarkent, 1),
        chiqim(2, "Elektr energiya", "Kommunal", Branch::Zarkent, 15),
        chiqim(3, "Internet", "Kommunal", Branch::Nabrejniy, 28),
    ];
    let filter = OutgoingFilter {
        dates: DateRange {
            start: NaiveDate::from_ymd_opt(2025, 8, 15),
            end: NaiveDate::from_ymd_opt(2025, 8, 28),
        },
        ..Default::default()
    };
    let ids: Vec<i64> = filter.apply(&rows).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn category_matches_substring() {
    let rows = vec![
        chiqim(1, "Ofis ijarasi", "Ijara", Branch::Zarkent, 1),
        chiqim(2, "Elektr energiya", "Kommunal xizmatlar", Branch::Zarkent, 2),
        chiqim(3, "Suv", "kommunal", Branch::Nabrejniy, 3),
    ];
    let filter = OutgoingFilter {
        category: Some("KOMMUNAL".into()),
        ..Default::default()
    };
    let ids: Vec<i64> = filter.apply(&rows).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn filtering_preserves_input_order() {
    // Deliberately unsorted ids; output must be the same subsequence.
    let rows = vec![
        kirim(9, "Olmos Savdo", Branch::Zarkent, 0, 1),
        kirim(2, "Olmos Filial", Branch::Zarkent, 0, 2),
        kirim(7, "Baraka Market", Branch::Nabrejniy, 0, 3),
        kirim(4, "Olmos Lux", Branch::Zarkent, 0, 4),
    ];
    let filter = IncomingFilter {
        search: "olmos".into(),
        ..Default::default()
    };
    let ids: Vec<i64> = filter.apply(&rows).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![9, 2, 4]);
}

#[test]
fn all_sub_filters_must_match() {
    let rows = sample_kirim();
    let filter = IncomingFilter {
        search: "nur".into(),
        branch: Some(Branch::Zarkent),
        ..Default::default()
    };
    // "Nur Biznes" exists, but in the other branch.
    assert!(filter.apply(&rows).is_empty());
}
