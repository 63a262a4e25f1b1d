// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::DateTime;
use khata::models::{Customer, Transaction, TransactionKind};
use khata::session::Session;
use khata::{cli, commands::exporter};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn base_session() -> Session {
    let at = DateTime::from_timestamp(1_735_812_000, 0).unwrap(); // 2025-01-02T10:00:00Z
    let customer = Customer {
        id: 1,
        name: "Corner Shop".into(),
        phone: "+91 98765 00000".into(),
        address: None,
        avatar: None,
        created_at: at,
        balance: Decimal::new(-1234, 2),
    };
    let tx = Transaction {
        id: 1,
        customer_id: 1,
        kind: TransactionKind::Debit,
        amount: Decimal::new(1234, 2),
        description: "Weekly run".into(),
        date: at,
        photo: Some("bill.jpg".into()),
        voice_note: None,
    };
    Session::with_data(vec![customer], vec![tx])
}

fn run_export(session: &Session, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "khata",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(session, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_streams_pretty_json() {
    let session = base_session();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&session, "json", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": 1,
                "date": "2025-01-02T10:00:00+00:00",
                "customer_id": 1,
                "customer": "Corner Shop",
                "type": "debit",
                "amount": "12.34",
                "description": "Weekly run",
                "photo": "bill.jpg",
                "voice_note": null
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv_with_header() {
    let session = base_session();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&session, "CSV", &out_str).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(headers.get(0), Some("id"));
    assert_eq!(headers.get(4), Some("type"));
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get(3), Some("Corner Shop"));
    assert_eq!(rows[0].get(5), Some("12.34"));
    assert_eq!(rows[0].get(7), Some("bill.jpg"));
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let session = base_session();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&session, "xml", &out_str).is_err());
    assert!(!out_path.exists());
}
