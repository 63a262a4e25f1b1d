// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The add-transaction form. Raw user input is checked here before it reaches
//! the ledger; a rejected form never mutates anything.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::ledger::TransactionEdit;
use crate::models::{Customer, CustomerId, NewTransaction, TransactionKind};

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub customer_id: Option<CustomerId>,
    pub kind: TransactionKind,
    pub amount: String,
    pub description: String,
    pub photo: Option<String>,
    pub voice_note: Option<String>,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            customer_id: None,
            kind: TransactionKind::Credit,
            amount: String::new(),
            description: String::new(),
            photo: None,
            voice_note: None,
        }
    }
}

/// Largest amount one transaction may carry: one lakh crore.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let amount = raw
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(amount));
    }
    Ok(amount)
}

fn parse_description(raw: &str) -> Result<String, ValidationError> {
    let d = raw.trim();
    if d.is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    Ok(d.to_string())
}

fn non_blank(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl TransactionForm {
    /// Checks run in form order: customer, amount, description.
    pub fn validate(&self, customers: &[Customer]) -> Result<NewTransaction, ValidationError> {
        let customer_id = self.customer_id.ok_or(ValidationError::MissingCustomer)?;
        if !customers.iter().any(|c| c.id == customer_id) {
            return Err(ValidationError::UnknownCustomer(customer_id));
        }
        let amount = parse_amount(&self.amount)?;
        let description = parse_description(&self.description)?;
        Ok(NewTransaction {
            customer_id,
            kind: self.kind,
            amount,
            description,
            photo: non_blank(&self.photo),
            voice_note: non_blank(&self.voice_note),
        })
    }

    /// Validation for an edit: the owner is fixed, so no customer is required.
    pub fn validate_edit(&self) -> Result<TransactionEdit, ValidationError> {
        Ok(TransactionEdit {
            kind: self.kind,
            amount: parse_amount(&self.amount)?,
            description: parse_description(&self.description)?,
        })
    }
}
