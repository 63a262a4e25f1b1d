// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! State → view model → text. Screens read the session; they never change it.

use crate::ledger::{customer_statement, search_customers};
use crate::models::{Customer, CustomerId, DashboardStats, LedgerEntry, Transaction};
use crate::session::{Session, Tab};
use crate::utils::{balance_text, fmt_date, fmt_money, fmt_signed, pretty_table};

pub struct CustomerDetail<'a> {
    pub customer: &'a Customer,
    pub statement: Vec<LedgerEntry>,
}

pub enum Screen<'a> {
    Dashboard {
        stats: DashboardStats,
        recent: Vec<&'a Transaction>,
        customers: &'a [Customer],
    },
    Customers {
        matches: Vec<&'a Customer>,
        search: Option<String>,
        selected: Option<CustomerDetail<'a>>,
    },
    AddTransaction {
        customers: &'a [Customer],
    },
    Placeholder {
        title: &'static str,
        message: &'static str,
    },
}

pub fn customer_detail<'a>(session: &'a Session, id: CustomerId) -> Option<CustomerDetail<'a>> {
    session.customer(id).map(|customer| CustomerDetail {
        customer,
        statement: customer_statement(session.transactions(), id),
    })
}

/// The screen for the session's active tab. `search` only affects the customer list.
pub fn build<'a>(session: &'a Session, search: Option<&str>) -> Screen<'a> {
    match session.active_tab() {
        Tab::Dashboard => Screen::Dashboard {
            stats: session.stats(),
            recent: session.recent_transactions(),
            customers: session.customers(),
        },
        Tab::Customers => Screen::Customers {
            matches: search_customers(session.customers(), search.unwrap_or_default()),
            search: search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
            selected: session
                .selected_customer()
                .and_then(|c| customer_detail(session, c.id)),
        },
        Tab::AddTransaction => Screen::AddTransaction {
            customers: session.customers(),
        },
        Tab::Reports => Screen::Placeholder {
            title: "Reports Coming Soon",
            message: "Generate detailed financial reports",
        },
        Tab::Settings => Screen::Placeholder {
            title: "Settings Coming Soon",
            message: "App settings and security options",
        },
    }
}

fn customer_name(customers: &[Customer], id: CustomerId) -> String {
    customers
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("(unknown #{})", id))
}

pub fn stats_table(stats: &DashboardStats, symbol: &str) -> String {
    pretty_table(
        &["Metric", "Value"],
        vec![
            vec!["To receive".into(), fmt_money(&stats.total_receivable, symbol)],
            vec!["To pay".into(), fmt_money(&stats.total_payable, symbol)],
            vec!["Net balance".into(), fmt_money(&stats.net_balance, symbol)],
            vec!["Customers".into(), stats.total_customers.to_string()],
            vec!["Transactions".into(), stats.total_transactions.to_string()],
        ],
    )
    .to_string()
}

pub fn transactions_table(txs: &[&Transaction], customers: &[Customer], symbol: &str) -> String {
    if txs.is_empty() {
        return "No transactions yet".to_string();
    }
    let rows = txs
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                fmt_date(&t.date),
                customer_name(customers, t.customer_id),
                t.description.clone(),
                t.kind.label().to_string(),
                fmt_signed(t, symbol),
            ]
        })
        .collect();
    pretty_table(
        &["ID", "Date", "Customer", "Description", "Type", "Amount"],
        rows,
    )
    .to_string()
}

pub fn customers_table(customers: &[&Customer], symbol: &str) -> String {
    let rows = customers
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.phone.clone(),
                c.address.clone().unwrap_or_default(),
                balance_text(&c.balance, symbol),
            ]
        })
        .collect();
    pretty_table(&["ID", "Name", "Phone", "Address", "Balance"], rows).to_string()
}

pub fn detail_text(detail: &CustomerDetail<'_>, symbol: &str) -> String {
    let c = detail.customer;
    let mut out = format!("{} (#{})\nPhone: {}\n", c.name, c.id, c.phone);
    if let Some(addr) = &c.address {
        out.push_str(&format!("Address: {}\n", addr));
    }
    out.push_str(&format!("Customer since: {}\n", fmt_date(&c.created_at)));
    out.push_str(&format!("{}\n", balance_text(&c.balance, symbol)));
    if detail.statement.is_empty() {
        out.push_str("No transactions yet");
        return out;
    }
    let rows = detail
        .statement
        .iter()
        .map(|e| {
            vec![
                e.transaction.id.to_string(),
                fmt_date(&e.transaction.date),
                e.transaction.description.clone(),
                fmt_signed(&e.transaction, symbol),
                fmt_money(&e.running_balance, symbol),
            ]
        })
        .collect();
    out.push_str(
        &pretty_table(&["ID", "Date", "Description", "Amount", "Balance"], rows).to_string(),
    );
    out
}

pub fn nav_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|t| {
            if *t == active {
                format!("[{}]", t.title())
            } else {
                t.title().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render(screen: &Screen<'_>, symbol: &str) -> String {
    match screen {
        Screen::Dashboard {
            stats,
            recent,
            customers,
        } => format!(
            "Welcome back!\n{}\nQuick actions: `customer add`, `tx add`\nRecent Transactions\n{}",
            stats_table(stats, symbol),
            transactions_table(recent, customers, symbol)
        ),
        Screen::Customers {
            matches,
            search,
            selected,
        } => {
            let mut out = String::from("Customers\n");
            if matches.is_empty() {
                out.push_str(if search.is_some() {
                    "No customers found matching your search"
                } else {
                    "No customers yet. Add your first customer with `customer add`."
                });
            } else {
                out.push_str(&customers_table(matches, symbol));
            }
            if let Some(detail) = selected {
                out.push('\n');
                out.push_str(&detail_text(detail, symbol));
            }
            out
        }
        Screen::AddTransaction { customers } => {
            let mut out = String::from("Add Transaction\n");
            if customers.is_empty() {
                out.push_str("Add a customer first with `customer add`.\n");
            } else {
                let refs: Vec<&Customer> = customers.iter().collect();
                out.push_str(&customers_table(&refs, symbol));
                out.push('\n');
            }
            out.push_str(
                "Usage: tx add --customer <ID> --type <credit|debit> --amount <AMOUNT> \
                 --description <TEXT> [--photo <REF>] [--voice-note <REF>]",
            );
            out
        }
        Screen::Placeholder { title, message } => format!("{}\n{}", title, message),
    }
}
