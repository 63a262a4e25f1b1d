// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Inconsistency;
use crate::models::{Customer, CustomerId, DashboardStats, LedgerEntry, Transaction};

/// How many transactions the dashboard shows.
pub const RECENT_TRANSACTIONS: usize = 10;

/// Totals saturate at `Decimal::MAX` instead of overflowing.
pub fn dashboard_stats(customers: &[Customer], transactions: &[Transaction]) -> DashboardStats {
    let mut receivable = Decimal::ZERO;
    let mut payable = Decimal::ZERO;
    for c in customers {
        if c.balance > Decimal::ZERO {
            receivable = receivable.saturating_add(c.balance);
        } else if c.balance < Decimal::ZERO {
            payable = payable.saturating_sub(c.balance);
        }
    }
    DashboardStats {
        total_receivable: receivable,
        total_payable: payable,
        net_balance: receivable.saturating_sub(payable),
        total_customers: customers.len(),
        total_transactions: transactions.len(),
    }
}

/// Most recent transactions first, at most [`RECENT_TRANSACTIONS`].
/// Equal timestamps keep their insertion order.
pub fn recent_transactions(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(RECENT_TRANSACTIONS);
    sorted
}

/// Name matches ignore case; phone matches are plain substring matches.
pub fn search_customers<'a>(customers: &'a [Customer], term: &str) -> Vec<&'a Customer> {
    let term = term.trim();
    if term.is_empty() {
        return customers.iter().collect();
    }
    let needle = term.to_lowercase();
    customers
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle) || c.phone.contains(term))
        .collect()
}

/// The customer's transactions oldest first, each with the balance after it.
pub fn customer_statement(transactions: &[Transaction], customer_id: CustomerId) -> Vec<LedgerEntry> {
    let mut own: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.customer_id == customer_id)
        .collect();
    own.sort_by(|a, b| a.date.cmp(&b.date));

    let mut running = Decimal::ZERO;
    own.into_iter()
        .map(|t| {
            running = running.saturating_add(t.balance_change());
            LedgerEntry {
                transaction: t.clone(),
                running_balance: running,
            }
        })
        .collect()
}

pub fn dangling_references(customers: &[Customer], transactions: &[Transaction]) -> Vec<Inconsistency> {
    let known: HashSet<CustomerId> = customers.iter().map(|c| c.id).collect();
    transactions
        .iter()
        .filter(|t| !known.contains(&t.customer_id))
        .map(|t| Inconsistency {
            transaction_id: t.id,
            customer_id: t.customer_id,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceMismatch {
    pub customer_id: CustomerId,
    pub name: String,
    pub recorded: Decimal,
    pub from_transactions: Decimal,
}

/// Customers whose stored balance is not the signed sum of their transactions.
pub fn balance_mismatches(customers: &[Customer], transactions: &[Transaction]) -> Vec<BalanceMismatch> {
    let mut sums: HashMap<CustomerId, Decimal> = HashMap::new();
    for t in transactions {
        let sum = sums.entry(t.customer_id).or_insert(Decimal::ZERO);
        *sum = sum.saturating_add(t.balance_change());
    }
    customers
        .iter()
        .filter_map(|c| {
            let expected = sums.get(&c.id).copied().unwrap_or(Decimal::ZERO);
            (expected != c.balance).then(|| BalanceMismatch {
                customer_id: c.id,
                name: c.name.clone(),
                recorded: c.balance,
                from_transactions: expected,
            })
        })
        .collect()
}
