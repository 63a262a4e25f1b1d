// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type CustomerId = u64;
pub type TransactionId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub balance: Decimal, // > 0 receivable, < 0 payable
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    /// Signed effect of `amount` on the owning customer's balance.
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Credit => amount,
            TransactionKind::Debit => -amount,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Credit => "Credit",
            TransactionKind::Debit => "Debit",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Credit => f.write_str("credit"),
            TransactionKind::Debit => f.write_str("debit"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" | "in" => Ok(TransactionKind::Credit),
            "debit" | "out" => Ok(TransactionKind::Debit),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub customer_id: CustomerId,
    pub kind: TransactionKind,
    pub amount: Decimal, // always positive; sign comes from `kind`
    pub description: String,
    pub date: DateTime<Utc>,
    pub photo: Option<String>,
    pub voice_note: Option<String>,
}

impl Transaction {
    pub fn balance_change(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// Validated input for a new transaction; id and timestamp are assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub customer_id: CustomerId,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub photo: Option<String>,
    pub voice_note: Option<String>,
}

impl NewTransaction {
    pub fn into_transaction(self, id: TransactionId, date: DateTime<Utc>) -> Transaction {
        Transaction {
            id,
            customer_id: self.customer_id,
            kind: self.kind,
            amount: self.amount,
            description: self.description,
            date,
            photo: self.photo,
            voice_note: self.voice_note,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_receivable: Decimal,
    pub total_payable: Decimal,
    pub net_balance: Decimal,
    pub total_customers: usize,
    pub total_transactions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub transaction: Transaction,
    pub running_balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    Receive(Decimal),
    Pay(Decimal),
    Settled,
}

impl BalanceStatus {
    pub fn of(balance: Decimal) -> Self {
        if balance > Decimal::ZERO {
            BalanceStatus::Receive(balance)
        } else if balance < Decimal::ZERO {
            BalanceStatus::Pay(balance.abs())
        } else {
            BalanceStatus::Settled
        }
    }
}
