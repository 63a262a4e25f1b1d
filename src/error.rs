// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::models::{CustomerId, TransactionId};

/// Rejections raised by the transaction form. Display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing information: please select a customer")]
    MissingCustomer,
    #[error("Missing information: please enter an amount")]
    MissingAmount,
    #[error("Invalid amount '{0}': expected a number such as 150 or 99.50")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero (got {0})")]
    NonPositiveAmount(Decimal),
    #[error("Amount {0} is too large (maximum is 10,00,00,00,00,000)")]
    AmountTooLarge(Decimal),
    #[error("Missing information: please enter a description")]
    MissingDescription,
    #[error("Customer {0} does not exist")]
    UnknownCustomer(CustomerId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Transaction {0} not found")]
    UnknownTransaction(TransactionId),
    #[error("Customer {0} not found")]
    UnknownCustomer(CustomerId),
    #[error("Balance of customer {0} would overflow")]
    BalanceOverflow(CustomerId),
    #[error("Unknown tab '{0}' (use dashboard|customers|add|reports|settings)")]
    UnknownTab(String),
}

/// A transaction whose owner is not in the customer list. Recorded, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Inconsistency {
    pub transaction_id: TransactionId,
    pub customer_id: CustomerId,
}

impl std::fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "transaction {} references unknown customer {}",
            self.transaction_id, self.customer_id
        )
    }
}
