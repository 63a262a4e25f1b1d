// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The application state container. Everything a user can do arrives here as an
//! [`Intent`]; the session is the only writer of customers, transactions and the
//! active tab.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Inconsistency, LedgerError};
use crate::form::TransactionForm;
use crate::ledger::{self, Applied};
use crate::models::{
    Customer, CustomerDetails, CustomerId, DashboardStats, Transaction, TransactionId,
};
use crate::sample_data;
use crate::utils::dial_uri;

pub const PLACEHOLDER_NAME: &str = "New Customer";
pub const PLACEHOLDER_PHONE: &str = "+91 98765 43210";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Dashboard,
    Customers,
    AddTransaction,
    Reports,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Customers,
        Tab::AddTransaction,
        Tab::Reports,
        Tab::Settings,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Customers => "customers",
            Tab::AddTransaction => "add",
            Tab::Reports => "reports",
            Tab::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Customers => "Customers",
            Tab::AddTransaction => "Add Transaction",
            Tab::Reports => "Reports",
            Tab::Settings => "Settings",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" | "home" => Ok(Tab::Dashboard),
            "customers" => Ok(Tab::Customers),
            "add" | "add-transaction" => Ok(Tab::AddTransaction),
            "reports" => Ok(Tab::Reports),
            "settings" => Ok(Tab::Settings),
            other => Err(LedgerError::UnknownTab(other.to_string())),
        }
    }
}

/// Which screen is showing. Starts on the dashboard and never terminates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    active: Tab,
}

impl ViewState {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        if self.active != tab {
            debug!(from = %self.active, to = %tab, "tab change");
        }
        self.active = tab;
    }

    /// A successful add always lands back on the dashboard.
    pub fn transaction_added(&mut self) {
        self.select(Tab::Dashboard);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    ChangeTab(Tab),
    SelectCustomer(CustomerId),
    RequestAddCustomer(CustomerDetails),
    RequestAddTransaction,
    SubmitTransaction(TransactionForm),
    CancelForm,
    EditTransaction {
        id: TransactionId,
        form: TransactionForm,
    },
    DeleteTransaction(TransactionId),
    Call(CustomerId),
    Message(CustomerId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    TabChanged(Tab),
    CustomerSelected(Customer),
    CustomerAdded(Customer),
    TransactionAdded {
        transaction: Transaction,
        inconsistency: Option<Inconsistency>,
    },
    TransactionEdited {
        transaction: Transaction,
        inconsistency: Option<Inconsistency>,
    },
    TransactionDeleted {
        id: TransactionId,
        inconsistency: Option<Inconsistency>,
    },
    Dial(String),
    Sms(String),
}

pub struct Session {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
    view: ViewState,
    selected_customer: Option<CustomerId>,
    next_customer_id: CustomerId,
    next_transaction_id: TransactionId,
    clock: fn() -> DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }
}

impl Session {
    pub fn with_data(customers: Vec<Customer>, transactions: Vec<Transaction>) -> Self {
        let next_customer_id = customers.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let next_transaction_id = transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            customers,
            transactions,
            view: ViewState::default(),
            selected_customer: None,
            next_customer_id,
            next_transaction_id,
            clock: Utc::now,
        }
    }

    pub fn demo() -> Self {
        let (customers, transactions) = sample_data::demo_ledger();
        Self::with_data(customers, transactions)
    }

    pub fn from_config(cfg: &Config) -> Self {
        let session = if cfg.seed_demo_data {
            Self::demo()
        } else {
            Self::default()
        };
        info!(
            customers = session.customers.len(),
            transactions = session.transactions.len(),
            "session started"
        );
        session
    }

    /// Replace the time source used to stamp new records.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn active_tab(&self) -> Tab {
        self.view.active()
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn selected_customer(&self) -> Option<&Customer> {
        self.selected_customer.and_then(|id| self.customer(id))
    }

    pub fn stats(&self) -> DashboardStats {
        ledger::dashboard_stats(&self.customers, &self.transactions)
    }

    pub fn recent_transactions(&self) -> Vec<&Transaction> {
        ledger::recent_transactions(&self.transactions)
    }

    fn require_customer(&self, id: CustomerId) -> Result<&Customer, LedgerError> {
        self.customer(id).ok_or(LedgerError::UnknownCustomer(id))
    }

    fn commit(&mut self, applied: Applied) -> Option<Inconsistency> {
        self.transactions = applied.transactions;
        self.customers = applied.customers;
        applied.inconsistency
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome, LedgerError> {
        match intent {
            Intent::ChangeTab(tab) => {
                self.view.select(tab);
                Ok(Outcome::TabChanged(tab))
            }
            Intent::RequestAddTransaction => {
                self.view.select(Tab::AddTransaction);
                Ok(Outcome::TabChanged(Tab::AddTransaction))
            }
            Intent::CancelForm => {
                self.view.select(Tab::Dashboard);
                Ok(Outcome::TabChanged(Tab::Dashboard))
            }
            Intent::SelectCustomer(id) => {
                let customer = self.require_customer(id)?.clone();
                self.selected_customer = Some(id);
                debug!(customer = id, "customer selected");
                Ok(Outcome::CustomerSelected(customer))
            }
            Intent::RequestAddCustomer(details) => Ok(Outcome::CustomerAdded(self.add_customer(details))),
            Intent::SubmitTransaction(form) => self.submit_transaction(&form),
            Intent::EditTransaction { id, form } => {
                let edit = form.validate_edit()?;
                let applied =
                    ledger::edit_transaction(&self.transactions, &self.customers, id, edit)?;
                let inconsistency = self.commit(applied);
                let transaction = self
                    .transaction(id)
                    .cloned()
                    .ok_or(LedgerError::UnknownTransaction(id))?;
                Ok(Outcome::TransactionEdited {
                    transaction,
                    inconsistency,
                })
            }
            Intent::DeleteTransaction(id) => {
                let applied = ledger::delete_transaction(&self.transactions, &self.customers, id)?;
                let inconsistency = self.commit(applied);
                Ok(Outcome::TransactionDeleted { id, inconsistency })
            }
            Intent::Call(id) => {
                let uri = dial_uri("tel", &self.require_customer(id)?.phone);
                info!(%uri, "dial requested");
                Ok(Outcome::Dial(uri))
            }
            Intent::Message(id) => {
                let uri = dial_uri("sms", &self.require_customer(id)?.phone);
                info!(%uri, "message requested");
                Ok(Outcome::Sms(uri))
            }
        }
    }

    fn add_customer(&mut self, details: CustomerDetails) -> Customer {
        let pick = |v: Option<String>, fallback: &str| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };
        let customer = Customer {
            id: self.next_customer_id,
            name: pick(details.name, PLACEHOLDER_NAME),
            phone: pick(details.phone, PLACEHOLDER_PHONE),
            address: details
                .address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            avatar: None,
            created_at: (self.clock)(),
            balance: Default::default(),
        };
        self.next_customer_id += 1;
        self.customers.push(customer.clone());
        info!(customer = customer.id, name = %customer.name, "customer added");
        customer
    }

    fn submit_transaction(&mut self, form: &TransactionForm) -> Result<Outcome, LedgerError> {
        let draft = form.validate(&self.customers)?;
        let id = self.next_transaction_id;
        let applied = ledger::add_transaction(
            &self.transactions,
            &self.customers,
            draft,
            id,
            (self.clock)(),
        )?;
        self.next_transaction_id += 1;
        let inconsistency = self.commit(applied);
        self.view.transaction_added();
        let transaction = self
            .transaction(id)
            .cloned()
            .ok_or(LedgerError::UnknownTransaction(id))?;
        Ok(Outcome::TransactionAdded {
            transaction,
            inconsistency,
        })
    }
}
