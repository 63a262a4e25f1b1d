// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{Inconsistency, LedgerError};
use crate::models::{
    Customer, CustomerId, NewTransaction, Transaction, TransactionId, TransactionKind,
};

/// Lists after a mutation, plus any owner that could not be found.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub transactions: Vec<Transaction>,
    pub customers: Vec<Customer>,
    pub inconsistency: Option<Inconsistency>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionEdit {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
}

/// `Ok(false)` when the customer is missing. Fails before writing if the new
/// balance does not fit in a `Decimal`.
fn adjust_balance(
    customers: &mut [Customer],
    customer_id: CustomerId,
    delta: Decimal,
) -> Result<bool, LedgerError> {
    match customers.iter_mut().find(|c| c.id == customer_id) {
        Some(c) => {
            c.balance = c
                .balance
                .checked_add(delta)
                .ok_or(LedgerError::BalanceOverflow(customer_id))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

fn report(transaction_id: TransactionId, customer_id: CustomerId) -> Inconsistency {
    let inc = Inconsistency {
        transaction_id,
        customer_id,
    };
    warn!(%inc, "ledger inconsistency; balance left unchanged");
    inc
}

/// Append `draft` as transaction `id` at `at` and move the owner's balance.
///
/// The transaction is recorded even when its customer is missing; in that case
/// no balance changes and the returned [`Applied::inconsistency`] is set.
/// A balance that would overflow is an error and nothing is recorded.
pub fn add_transaction(
    transactions: &[Transaction],
    customers: &[Customer],
    draft: NewTransaction,
    id: TransactionId,
    at: DateTime<Utc>,
) -> Result<Applied, LedgerError> {
    let tx = draft.into_transaction(id, at);
    let mut customers = customers.to_vec();
    let delta = tx.balance_change();

    let inconsistency = if adjust_balance(&mut customers, tx.customer_id, delta)? {
        info!(
            transaction = tx.id,
            customer = tx.customer_id,
            kind = %tx.kind,
            amount = %tx.amount,
            "transaction recorded"
        );
        None
    } else {
        Some(report(tx.id, tx.customer_id))
    };

    let mut transactions = transactions.to_vec();
    transactions.push(tx);
    Ok(Applied {
        transactions,
        customers,
        inconsistency,
    })
}

/// Remove transaction `id` and undo its effect on the owner's balance.
pub fn delete_transaction(
    transactions: &[Transaction],
    customers: &[Customer],
    id: TransactionId,
) -> Result<Applied, LedgerError> {
    let pos = transactions
        .iter()
        .position(|t| t.id == id)
        .ok_or(LedgerError::UnknownTransaction(id))?;
    let mut transactions = transactions.to_vec();
    let removed = transactions.remove(pos);

    let mut customers = customers.to_vec();
    let inconsistency =
        if adjust_balance(&mut customers, removed.customer_id, -removed.balance_change())? {
            info!(transaction = id, customer = removed.customer_id, "transaction deleted");
            None
        } else {
            Some(report(removed.id, removed.customer_id))
        };

    Ok(Applied {
        transactions,
        customers,
        inconsistency,
    })
}

/// Replace kind, amount and description of transaction `id`; the owner's
/// balance moves by the difference between the new and old effect.
pub fn edit_transaction(
    transactions: &[Transaction],
    customers: &[Customer],
    id: TransactionId,
    edit: TransactionEdit,
) -> Result<Applied, LedgerError> {
    let mut transactions = transactions.to_vec();
    let tx = transactions
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(LedgerError::UnknownTransaction(id))?;

    let before = tx.balance_change();
    tx.kind = edit.kind;
    tx.amount = edit.amount;
    tx.description = edit.description;
    let delta = tx
        .balance_change()
        .checked_sub(before)
        .ok_or(LedgerError::BalanceOverflow(tx.customer_id))?;
    let owner = tx.customer_id;

    let mut customers = customers.to_vec();
    let inconsistency = if adjust_balance(&mut customers, owner, delta)? {
        info!(transaction = id, customer = owner, delta = %delta, "transaction edited");
        None
    } else {
        Some(report(id, owner))
    };

    Ok(Applied {
        transactions,
        customers,
        inconsistency,
    })
}
