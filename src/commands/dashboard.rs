// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::print_screen;
use crate::config::Config;
use crate::models::{DashboardStats, Transaction};
use crate::session::{Intent, Session, Tab};
use crate::utils::maybe_print_json;
use crate::view::stats_table;

#[derive(Serialize)]
pub struct DashboardView<'a> {
    pub stats: DashboardStats,
    pub recent_transactions: Vec<&'a Transaction>,
}

pub fn handle(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    session.dispatch(Intent::ChangeTab(Tab::Dashboard))?;
    let data = DashboardView {
        stats: session.stats(),
        recent_transactions: session.recent_transactions(),
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        print_screen(session, cfg, None);
    }
    Ok(())
}

pub fn stats(session: &Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let stats = session.stats();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &stats)? {
        println!("{}", stats_table(&stats, &cfg.currency_symbol));
    }
    Ok(())
}
