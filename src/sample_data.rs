// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::ledger::add_transaction;
use crate::models::{Customer, NewTransaction, Transaction, TransactionKind};

// 2025-01-01T00:00:00Z
const BASE_EPOCH_SECS: i64 = 1_735_689_600;

fn at(day: i64, hour: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
        + Duration::seconds(BASE_EPOCH_SECS)
        + Duration::days(day)
        + Duration::hours(hour)
}

fn customer(id: u64, name: &str, phone: &str, address: Option<&str>, day: i64) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        phone: phone.to_string(),
        address: address.map(str::to_string),
        avatar: None,
        created_at: at(day, 9),
        balance: Decimal::ZERO,
    }
}

/// Demo book the app starts with. Balances are produced by replaying the seed
/// transactions, so they always agree with the transaction list.
pub fn demo_ledger() -> (Vec<Customer>, Vec<Transaction>) {
    let mut customers = vec![
        customer(1, "Ramesh Kumar", "+91 98765 11111", Some("Shop 12, Gandhi Market"), 0),
        customer(2, "Priya Sharma", "+91 98765 22222", None, 1),
        customer(3, "Amit Patel", "+91 98765 33333", Some("45 MG Road"), 2),
        customer(4, "Sunita Devi", "+91 98765 44444", None, 3),
        customer(5, "Mohammed Irfan", "+91 98765 55555", Some("Near Bus Stand"), 4),
    ];

    use TransactionKind::{Credit, Debit};
    let seed: [(u64, TransactionKind, i64, &str, i64, i64); 9] = [
        (1, Credit, 2500, "Monthly grocery supplies", 5, 10),
        (2, Credit, 1200, "Rice and dal", 6, 11),
        (1, Debit, 1000, "Part payment received", 8, 17),
        (3, Debit, 800, "Advance for festival order", 9, 12),
        (4, Credit, 450, "Milk and bread", 10, 8),
        (2, Debit, 1200, "Settled in cash", 12, 18),
        (5, Credit, 3200, "Wholesale spices", 14, 14),
        (3, Credit, 300, "Sugar 5kg", 15, 10),
        (5, Debit, 700, "UPI payment", 16, 19),
    ];

    let mut transactions: Vec<Transaction> = Vec::new();
    for (i, (customer_id, kind, amount, description, day, hour)) in seed.into_iter().enumerate() {
        let draft = NewTransaction {
            customer_id,
            kind,
            amount: Decimal::from(amount),
            description: description.to_string(),
            photo: None,
            voice_note: None,
        };
        // seed amounts are far from overflow
        let Ok(applied) = add_transaction(&transactions, &customers, draft, i as u64 + 1, at(day, hour))
        else {
            continue;
        };
        transactions = applied.transactions;
        customers = applied.customers;
    }
    (customers, transactions)
}
