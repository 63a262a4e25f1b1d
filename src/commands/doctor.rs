// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::ledger::{balance_mismatches, dangling_references};
use crate::session::Session;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;

pub fn issues(session: &Session, cfg: &Config) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Transactions whose customer is gone
    for inc in dangling_references(session.customers(), session.transactions()) {
        rows.push(vec!["unknown_customer".into(), inc.to_string()]);
    }

    // 2) Stored balance disagrees with the transaction history
    for m in balance_mismatches(session.customers(), session.transactions()) {
        rows.push(vec![
            "balance_mismatch".into(),
            format!(
                "{} (#{}): recorded {}, transactions sum to {}",
                m.name,
                m.customer_id,
                fmt_money(&m.recorded, &cfg.currency_symbol),
                fmt_money(&m.from_transactions, &cfg.currency_symbol)
            ),
        ]);
    }
    rows
}

pub fn handle(session: &Session, cfg: &Config) -> Result<()> {
    let rows = issues(session, cfg);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
