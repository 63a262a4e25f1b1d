// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod customers;
pub mod dashboard;
pub mod doctor;
pub mod exporter;
pub mod tab;
pub mod transactions;

use crate::config::Config;
use crate::error::Inconsistency;
use crate::session::Session;
use crate::view;

/// Render whatever tab is active, with the navigation bar underneath.
pub fn print_screen(session: &Session, cfg: &Config, search: Option<&str>) {
    let screen = view::build(session, search);
    println!("{}", view::render(&screen, &cfg.currency_symbol));
    println!("{}", view::nav_bar(session.active_tab()));
}

pub(crate) fn warn_inconsistency(inc: Option<Inconsistency>) {
    if let Some(inc) = inc {
        eprintln!("warning: {} (recorded, balance unchanged)", inc);
    }
}

/// Run one session subcommand. Returns `false` for names that are not session commands.
pub fn execute(
    session: &mut Session,
    cfg: &Config,
    name: &str,
    sub: &clap::ArgMatches,
) -> anyhow::Result<bool> {
    match name {
        "dashboard" => dashboard::handle(session, cfg, sub)?,
        "stats" => dashboard::stats(session, cfg, sub)?,
        "customer" => customers::handle(session, cfg, sub)?,
        "tx" => transactions::handle(session, cfg, sub)?,
        "tab" => tab::handle(session, cfg, sub)?,
        "doctor" => doctor::handle(session, cfg)?,
        "export" => exporter::handle(session, sub)?,
        _ => return Ok(false),
    }
    Ok(true)
}
