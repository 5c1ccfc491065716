// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use daftar::commands::{branches, chiqim, kirim};
use daftar::filter::PaymentStatus;
use daftar::models::Branch;
use daftar::{cli, db, store};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn run(conn: &Connection, args: &[&str]) {
    let matches = cli::build_cli().get_matches_from(args);
    match matches.subcommand() {
        Some(("kirim", sub)) => kirim::handle(conn, sub).unwrap(),
        Some(("chiqim", sub)) => chiqim::handle(conn, sub).unwrap(),
        Some(("branch", sub)) => branches::handle(conn, sub).unwrap(),
        other => panic!("unexpected subcommand {:?}", other.map(|(n, _)| n)),
    }
}

#[test]
fn add_accepts_grouped_amounts() {
    let conn = setup();
    run(
        &conn,
        &[
            "daftar", "kirim", "add", "--company", "Olmos Savdo", "--tax-id", "301234567",
            "--prior-months", "2", "--prior-amount", "1,000,000", "--monthly", "500,000",
            "--cash", "1,200,000",
        ],
    );
    let rows = store::list_kirim(&conn).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].prior.months, 2);
    assert_eq!(rows[0].total_owed, Decimal::from(1_500_000));
    assert_eq!(rows[0].paid.total, Decimal::from(1_200_000));
    assert_eq!(rows[0].residual_debt, Decimal::from(300_000));
    assert_eq!(rows[0].residual_advance, Decimal::ZERO);
}

#[test]
fn add_uses_the_default_branch_when_omitted() {
    let conn = setup();
    run(&conn, &["daftar", "branch", "set-default", "nabrejniy"]);
    run(
        &conn,
        &[
            "daftar", "kirim", "add", "--company", "Baraka Market", "--tax-id", "301111111",
        ],
    );
    let rows = store::list_kirim(&conn).unwrap();
    assert_eq!(rows[0].branch, Branch::Nabrejniy);
}

#[test]
fn update_then_rm_round_trip() {
    let conn = setup();
    run(
        &conn,
        &[
            "daftar", "kirim", "add", "--company", "Olmos Savdo", "--tax-id", "301234567",
            "--prior-amount", "1,000,000", "--monthly", "500,000", "--cash", "1,200,000",
        ],
    );
    let id = store::list_kirim(&conn).unwrap()[0].id.to_string();

    run(
        &conn,
        &["daftar", "kirim", "update", "--id", &id, "--cash", "1,700,000"],
    );
    let row = store::list_kirim(&conn).unwrap().remove(0);
    assert_eq!(row.paid.total, Decimal::from(1_700_000));
    assert_eq!(row.residual_debt, Decimal::ZERO);
    assert_eq!(row.residual_advance, Decimal::from(200_000));

    run(&conn, &["daftar", "kirim", "rm", "--id", &id]);
    assert!(store::list_kirim(&conn).unwrap().is_empty());
}

#[test]
fn chiqim_add_records_the_expense_date() {
    let conn = setup();
    run(
        &conn,
        &[
            "daftar", "chiqim", "add", "--payee", "Ofis ijarasi", "--category", "Ijara",
            "--date", "2025-08-05", "--branch", "zarkent", "--monthly", "500,000",
        ],
    );
    let rows = store::list_chiqim(&conn).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2025, 8, 5).unwrap());
    assert_eq!(rows[0].total_due, Decimal::from(500_000));
    assert_eq!(rows[0].residual_debt, Decimal::from(500_000));
}

#[test]
fn list_flags_build_the_filter() {
    let matches = cli::build_cli().get_matches_from([
        "daftar", "kirim", "list", "--search", "olmos", "--branch", "zarkent", "--status",
        "unpaid", "--from", "2025-08-01", "--to", "2025-08-31",
    ]);
    let Some(("kirim", kirim_m)) = matches.subcommand() else {
        panic!("no kirim subcommand");
    };
    let Some(("list", list_m)) = kirim_m.subcommand() else {
        panic!("no list subcommand");
    };
    let filter = kirim::filter_from_matches(list_m).unwrap();
    assert_eq!(filter.search, "olmos");
    assert_eq!(filter.branch, Some(Branch::Zarkent));
    assert_eq!(filter.status, PaymentStatus::Unpaid);
    assert_eq!(filter.dates.start, NaiveDate::from_ymd_opt(2025, 8, 1));
    assert_eq!(filter.dates.end, NaiveDate::from_ymd_opt(2025, 8, 31));
}
