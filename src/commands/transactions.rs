// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::{print_screen, warn_inconsistency};
use crate::config::Config;
use crate::error::LedgerError;
use crate::form::TransactionForm;
use crate::ledger::recent_transactions;
use crate::models::{Transaction, TransactionKind};
use crate::session::{Intent, Outcome, Session};
use crate::utils::{fmt_date, fmt_money, maybe_print_json, pretty_table};

pub fn handle(session: &mut Session, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, cfg, sub)?,
        Some(("list", sub)) => list(session, sub)?,
        Some(("edit", sub)) => edit(session, cfg, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<u64>("id").unwrap();
            if let Outcome::TransactionDeleted { id, inconsistency } =
                session.dispatch(Intent::DeleteTransaction(id))?
            {
                warn_inconsistency(inconsistency);
                println!("Transaction {} deleted", id);
            }
        }
        _ => {}
    }
    Ok(())
}

fn kind_arg(sub: &clap::ArgMatches) -> Option<TransactionKind> {
    sub.get_one::<String>("type")
        .and_then(|s| s.parse::<TransactionKind>().ok())
}

/// Form as typed; missing fields are left blank for validation to reject.
pub fn form_from_args(sub: &clap::ArgMatches) -> TransactionForm {
    TransactionForm {
        customer_id: sub.get_one::<u64>("customer").copied(),
        kind: kind_arg(sub).unwrap_or(TransactionKind::Credit),
        amount: sub.get_one::<String>("amount").cloned().unwrap_or_default(),
        description: sub
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default(),
        photo: sub.get_one::<String>("photo").cloned(),
        voice_note: sub.get_one::<String>("voice_note").cloned(),
    }
}

fn add(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    session.dispatch(Intent::RequestAddTransaction)?;
    let form = form_from_args(sub);
    if let Outcome::TransactionAdded {
        transaction,
        inconsistency,
    } = session.dispatch(Intent::SubmitTransaction(form))?
    {
        warn_inconsistency(inconsistency);
        println!(
            "{} of {} added successfully",
            transaction.kind.label(),
            fmt_money(&transaction.amount, &cfg.currency_symbol)
        );
    }
    print_screen(session, cfg, None);
    Ok(())
}

fn edit(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").unwrap();
    let current = session
        .transaction(id)
        .cloned()
        .ok_or(LedgerError::UnknownTransaction(id))?;
    let form = TransactionForm {
        customer_id: Some(current.customer_id),
        kind: kind_arg(sub).unwrap_or(current.kind),
        amount: sub
            .get_one::<String>("amount")
            .cloned()
            .unwrap_or_else(|| current.amount.to_string()),
        description: sub
            .get_one::<String>("description")
            .cloned()
            .unwrap_or(current.description),
        photo: current.photo,
        voice_note: current.voice_note,
    };
    if let Outcome::TransactionEdited {
        transaction,
        inconsistency,
    } = session.dispatch(Intent::EditTransaction { id, form })?
    {
        warn_inconsistency(inconsistency);
        println!(
            "Transaction {} updated: {} of {}",
            transaction.id,
            transaction.kind.label(),
            fmt_money(&transaction.amount, &cfg.currency_symbol)
        );
    }
    Ok(())
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session, sub);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.customer.clone(),
                    r.description.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                    r.attachments.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Customer", "Description", "Type", "Amount", "Attachments"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: u64,
    pub date: String,
    pub customer: String,
    pub description: String,
    pub kind: String,
    pub amount: String,
    pub attachments: String,
}

fn to_row(session: &Session, t: &Transaction) -> TransactionRow {
    let customer = session
        .customer(t.customer_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("(unknown #{})", t.customer_id));
    let attachments = [
        t.photo.as_ref().map(|p| format!("photo: {}", p)),
        t.voice_note.as_ref().map(|v| format!("voice: {}", v)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");
    TransactionRow {
        id: t.id,
        date: fmt_date(&t.date),
        customer,
        description: t.description.clone(),
        kind: t.kind.to_string(),
        amount: t.amount.to_string(),
        attachments,
    }
}

/// Newest first; `--customer` filters, `--limit` truncates, `--recent` is the dashboard view.
pub fn query_rows(session: &Session, sub: &clap::ArgMatches) -> Vec<TransactionRow> {
    let customer = sub.get_one::<u64>("customer").copied();
    let mut txs: Vec<&Transaction> = if sub.get_flag("recent") {
        recent_transactions(session.transactions())
    } else {
        let mut all: Vec<&Transaction> = session.transactions().iter().collect();
        all.sort_by(|a, b| b.date.cmp(&a.date));
        all
    };
    if let Some(id) = customer {
        txs.retain(|t| t.customer_id == id);
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }
    txs.into_iter().map(|t| to_row(session, t)).collect()
}
