// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use khata::commands::transactions;
use khata::config::Config;
use khata::error::{LedgerError, ValidationError};
use khata::ledger::{TransactionEdit, add_transaction, delete_transaction, edit_transaction};
use khata::models::{Customer, NewTransaction, Transaction, TransactionKind};
use khata::session::{Session, Tab};
use khata::{cli, ledger};
use rust_decimal::Decimal;

fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_760_000_000, 0).unwrap()
}

fn customer(id: u64, balance: i64) -> Customer {
    Customer {
        id,
        name: format!("Customer {}", id),
        phone: "+91 90000 00000".into(),
        address: None,
        avatar: None,
        created_at: fixed_now(),
        balance: Decimal::from(balance),
    }
}

fn draft(customer_id: u64, kind: TransactionKind, amount: i64) -> NewTransaction {
    NewTransaction {
        customer_id,
        kind,
        amount: Decimal::from(amount),
        description: "Goods".into(),
        photo: None,
        voice_note: None,
    }
}

fn run_tx(session: &mut Session, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["khata", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(session, &Config::default(), tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_limit_respected() {
    let session = Session::demo();
    let matches = cli::build_cli().get_matches_from(["khata", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&session, list_m);
            assert_eq!(rows.len(), 2);
            // newest seed entry is the UPI payment
            assert_eq!(rows[0].description, "UPI payment");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_filters_by_customer() {
    let session = Session::demo();
    let matches =
        cli::build_cli().get_matches_from(["khata", "tx", "list", "--customer", "1", "--json"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&session, list_m);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.customer == "Ramesh Kumar"));
}

#[test]
fn credit_raises_balance_and_returns_to_dashboard() {
    let mut session = Session::with_data(vec![customer(1, 100)], vec![]).with_clock(fixed_now);
    run_tx(
        &mut session,
        &[
            "add", "--customer", "1", "--type", "credit", "--amount", "150",
            "--description", "Flour",
        ],
    )
    .unwrap();
    assert_eq!(session.customers()[0].balance, Decimal::from(250));
    assert_eq!(session.transactions().len(), 1);
    assert_eq!(session.transactions()[0].date, fixed_now());
    assert_eq!(session.active_tab(), Tab::Dashboard);
}

#[test]
fn debit_lowers_balance() {
    let mut session = Session::with_data(vec![customer(1, 100)], vec![]);
    run_tx(
        &mut session,
        &["add", "-c", "1", "-t", "debit", "-a", "99.50", "-d", "Cash back"],
    )
    .unwrap();
    assert_eq!(session.customers()[0].balance, Decimal::new(50, 2));
}

#[test]
fn add_without_customer_is_rejected() {
    let mut session = Session::with_data(vec![customer(1, 100)], vec![]);
    let err = run_tx(&mut session, &["add", "--amount", "10", "--description", "Tea"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<LedgerError>(),
        Some(&LedgerError::Validation(ValidationError::MissingCustomer))
    );
    assert!(err.to_string().contains("select a customer"));
    assert!(session.transactions().is_empty());
    assert_eq!(session.customers()[0].balance, Decimal::from(100));
    assert_eq!(session.active_tab(), Tab::AddTransaction);
}

#[test]
fn add_rejects_bad_amount_and_blank_description() {
    let mut session = Session::with_data(vec![customer(1, 0)], vec![]);
    let err = run_tx(&mut session, &["add", "-c", "1", "-a", "ten", "-d", "x"]).unwrap_err();
    assert!(err.to_string().contains("Invalid amount 'ten'"));
    let err = run_tx(&mut session, &["add", "-c", "1", "--amount=-5", "-d", "x"]).unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
    let err = run_tx(&mut session, &["add", "-c", "1", "-a", "5", "-d", "   "]).unwrap_err();
    assert!(err.to_string().contains("description"));
    assert!(session.transactions().is_empty());
}

#[test]
fn ids_are_never_reused() {
    let mut session = Session::demo();
    let before: Vec<u64> = session.transactions().iter().map(|t| t.id).collect();
    run_tx(&mut session, &["add", "-c", "2", "-a", "1", "-d", "a"]).unwrap();
    run_tx(&mut session, &["rm", "10"]).unwrap();
    run_tx(&mut session, &["add", "-c", "2", "-a", "1", "-d", "b"]).unwrap();
    let last = session.transactions().last().unwrap();
    assert_eq!(last.id, 11);
    assert!(!before.contains(&last.id));
}

#[test]
fn photo_and_voice_note_are_kept_as_references() {
    let mut session = Session::with_data(vec![customer(1, 0)], vec![]);
    run_tx(
        &mut session,
        &[
            "add", "-c", "1", "-a", "20", "-d", "Receipt", "--photo", "IMG_0042.jpg",
            "--voice-note", "memo.m4a",
        ],
    )
    .unwrap();
    let t = &session.transactions()[0];
    assert_eq!(t.photo.as_deref(), Some("IMG_0042.jpg"));
    assert_eq!(t.voice_note.as_deref(), Some("memo.m4a"));
}

#[test]
fn unknown_customer_is_recorded_and_reported() {
    let customers = vec![customer(1, 10)];
    let applied = add_transaction(
        &[],
        &customers,
        draft(42, TransactionKind::Credit, 5),
        7,
        fixed_now(),
    )
    .unwrap();
    assert_eq!(applied.transactions.len(), 1);
    assert_eq!(applied.customers, customers);
    let inc = applied.inconsistency.unwrap();
    assert_eq!(inc.transaction_id, 7);
    assert_eq!(inc.customer_id, 42);
}

#[test]
fn add_moves_balance_by_exactly_the_amount() {
    for (kind, expected) in [
        (TransactionKind::Credit, 137),
        (TransactionKind::Debit, -63),
    ] {
        let customers = vec![customer(1, 37), customer(2, 5)];
        let applied = add_transaction(&[], &customers, draft(1, kind, 100), 1, fixed_now()).unwrap();
        assert_eq!(applied.customers[0].balance, Decimal::from(expected));
        assert_eq!(applied.customers[1].balance, Decimal::from(5));
        assert!(applied.inconsistency.is_none());
    }
}

fn seeded() -> (Vec<Transaction>, Vec<Customer>) {
    let customers = vec![customer(1, 0)];
    let a = add_transaction(&[], &customers, draft(1, TransactionKind::Credit, 500), 1, fixed_now())
        .unwrap();
    let b = add_transaction(
        &a.transactions,
        &a.customers,
        draft(1, TransactionKind::Debit, 120),
        2,
        fixed_now(),
    )
    .unwrap();
    (b.transactions, b.customers)
}

#[test]
fn delete_reverses_balance() {
    let (txs, customers) = seeded();
    assert_eq!(customers[0].balance, Decimal::from(380));
    let applied = delete_transaction(&txs, &customers, 2).unwrap();
    assert_eq!(applied.transactions.len(), 1);
    assert_eq!(applied.customers[0].balance, Decimal::from(500));
    assert!(ledger::balance_mismatches(&applied.customers, &applied.transactions).is_empty());
}

#[test]
fn edit_applies_difference() {
    let (txs, customers) = seeded();
    let edit = TransactionEdit {
        kind: TransactionKind::Credit,
        amount: Decimal::from(20),
        description: "Corrected".into(),
    };
    let applied = edit_transaction(&txs, &customers, 2, edit).unwrap();
    // 500 + 20 instead of 500 - 120
    assert_eq!(applied.customers[0].balance, Decimal::from(520));
    assert_eq!(applied.transactions[1].description, "Corrected");
    assert!(ledger::balance_mismatches(&applied.customers, &applied.transactions).is_empty());
}

#[test]
fn edit_and_delete_unknown_id_fail_without_change() {
    let (txs, customers) = seeded();
    assert_eq!(
        delete_transaction(&txs, &customers, 99).unwrap_err(),
        LedgerError::UnknownTransaction(99)
    );
    let mut session = Session::with_data(customers, txs);
    assert!(run_tx(&mut session, &["edit", "99", "--amount", "5"]).is_err());
    assert_eq!(session.transactions().len(), 2);
}

#[test]
fn edit_through_cli_keeps_unspecified_fields() {
    let (txs, customers) = seeded();
    let mut session = Session::with_data(customers, txs);
    run_tx(&mut session, &["edit", "1", "--amount", "450"]).unwrap();
    let t = session.transaction(1).unwrap();
    assert_eq!(t.kind, TransactionKind::Credit);
    assert_eq!(t.description, "Goods");
    assert_eq!(session.customers()[0].balance, Decimal::from(330));
}

#[test]
fn oversized_amount_is_rejected_before_any_mutation() {
    let mut session = Session::demo();
    let before = session.customers().to_vec();
    let count = session.transactions().len();
    let err = run_tx(
        &mut session,
        &["add", "-c", "1", "-t", "credit", "-a", "79228162514264337593543950335", "-d", "big"],
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::Validation(ValidationError::AmountTooLarge(_)))
    ));
    assert!(run_tx(&mut session, &["edit", "1", "-a", "1000000000001"]).is_err());
    assert_eq!(session.customers(), before.as_slice());
    assert_eq!(session.transactions().len(), count);
    // the session is still usable
    assert_eq!(session.stats().total_receivable, Decimal::from(4450));
    run_tx(&mut session, &["add", "-c", "1", "-a", "1000000000000", "-d", "max"]).unwrap();
}

#[test]
fn balance_overflow_fails_without_mutation() {
    let mut rich = customer(1, 0);
    rich.balance = Decimal::MAX;
    let customers = vec![rich];
    let err = add_transaction(&[], &customers, draft(1, TransactionKind::Credit, 1), 1, fixed_now())
        .unwrap_err();
    assert_eq!(err, LedgerError::BalanceOverflow(1));

    // removing a debit raises the balance past the limit
    let tx = Transaction {
        id: 1,
        customer_id: 1,
        kind: TransactionKind::Debit,
        amount: Decimal::from(5),
        description: "Goods".into(),
        date: fixed_now(),
        photo: None,
        voice_note: None,
    };
    let txs = vec![tx];
    assert_eq!(
        delete_transaction(&txs, &customers, 1).unwrap_err(),
        LedgerError::BalanceOverflow(1)
    );
    let edit = TransactionEdit {
        kind: TransactionKind::Credit,
        amount: Decimal::from(5),
        description: "Goods".into(),
    };
    assert_eq!(
        edit_transaction(&txs, &customers, 1, edit).unwrap_err(),
        LedgerError::BalanceOverflow(1)
    );
}

#[test]
fn edit_and_delete_with_missing_owner_report_inconsistency() {
    let customers = vec![customer(1, 10)];
    let applied = add_transaction(
        &[],
        &customers,
        draft(42, TransactionKind::Debit, 30),
        1,
        fixed_now(),
    )
    .unwrap();
    assert!(applied.inconsistency.is_some());

    let edit = TransactionEdit {
        kind: TransactionKind::Credit,
        amount: Decimal::from(75),
        description: "Recount".into(),
    };
    let edited = edit_transaction(&applied.transactions, &applied.customers, 1, edit).unwrap();
    let inc = edited.inconsistency.unwrap();
    assert_eq!((inc.transaction_id, inc.customer_id), (1, 42));
    assert_eq!(edited.customers, customers);
    assert_eq!(edited.transactions[0].amount, Decimal::from(75));

    let deleted = delete_transaction(&edited.transactions, &edited.customers, 1).unwrap();
    let inc = deleted.inconsistency.unwrap();
    assert_eq!((inc.transaction_id, inc.customer_id), (1, 42));
    assert_eq!(deleted.customers, customers);
    assert!(deleted.transactions.is_empty());
}
