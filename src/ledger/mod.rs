// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure ledger logic: derived views over the customer/transaction lists and the
//! mutations that keep customer balances in step with the transaction list.

pub mod mutation;
pub mod stats;

pub use mutation::{Applied, TransactionEdit, add_transaction, delete_transaction, edit_transaction};
pub use stats::{
    BalanceMismatch, RECENT_TRANSACTIONS, balance_mismatches, customer_statement,
    dangling_references, dashboard_stats, recent_transactions, search_customers,
};
