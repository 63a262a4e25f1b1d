// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::print_screen;
use crate::config::Config;
use crate::ledger::search_customers;
use crate::models::CustomerDetails;
use crate::session::{Intent, Outcome, Session, Tab};
use crate::utils::{balance_text, maybe_print_json};
use crate::view::{customer_detail, detail_text};

pub fn handle(session: &mut Session, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, cfg, sub)?,
        Some(("add", sub)) => add(session, cfg, sub)?,
        Some(("show", sub)) => show(session, cfg, sub)?,
        Some(("call", sub)) => {
            let id = *sub.get_one::<u64>("id").unwrap();
            if let Outcome::Dial(uri) = session.dispatch(Intent::Call(id))? {
                println!("{}", uri);
            }
        }
        Some(("message", sub)) => {
            let id = *sub.get_one::<u64>("id").unwrap();
            if let Outcome::Sms(uri) = session.dispatch(Intent::Message(id))? {
                println!("{}", uri);
            }
        }
        _ => {}
    }
    Ok(())
}

fn list(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    session.dispatch(Intent::ChangeTab(Tab::Customers))?;
    let search = sub.get_one::<String>("search").map(|s| s.as_str());
    let data = query_rows(session, sub, &cfg.currency_symbol);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        print_screen(session, cfg, search);
    }
    Ok(())
}

fn add(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let details = CustomerDetails {
        name: sub.get_one::<String>("name").cloned(),
        phone: sub.get_one::<String>("phone").cloned(),
        address: sub.get_one::<String>("address").cloned(),
    };
    if let Outcome::CustomerAdded(c) = session.dispatch(Intent::RequestAddCustomer(details))? {
        println!("Customer added: {} (#{}, {})", c.name, c.id, c.phone);
    }
    print_screen(session, cfg, None);
    Ok(())
}

fn show(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").unwrap();
    session.dispatch(Intent::SelectCustomer(id))?;
    if let Some(detail) = customer_detail(session, id) {
        println!("{}", detail_text(&detail, &cfg.currency_symbol));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CustomerRow {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub balance: String,
    pub status: String,
}

pub fn query_rows(session: &Session, sub: &clap::ArgMatches, symbol: &str) -> Vec<CustomerRow> {
    let term = sub
        .get_one::<String>("search")
        .map(|s| s.as_str())
        .unwrap_or_default();
    search_customers(session.customers(), term)
        .into_iter()
        .map(|c| CustomerRow {
            id: c.id,
            name: c.name.clone(),
            phone: c.phone.clone(),
            address: c.address.clone().unwrap_or_default(),
            balance: c.balance.to_string(),
            status: balance_text(&c.balance, symbol),
        })
        .collect()
}
