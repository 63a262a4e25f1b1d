// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use serde_json::json;

use crate::session::Session;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(session, sub),
        _ => Ok(()),
    }
}

/// One-off snapshot for the user; nothing ever reads it back.
fn export_transactions(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let mut txs: Vec<_> = session.transactions().iter().collect();
    txs.sort_by(|a, b| a.date.cmp(&b.date));
    let name_of = |id: u64| {
        session
            .customer(id)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    };

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create export file {}", out))?;
            wtr.write_record([
                "id",
                "date",
                "customer_id",
                "customer",
                "type",
                "amount",
                "description",
                "photo",
                "voice_note",
            ])?;
            for t in txs {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_rfc3339(),
                    t.customer_id.to_string(),
                    name_of(t.customer_id),
                    t.kind.to_string(),
                    t.amount.to_string(),
                    t.description.clone(),
                    t.photo.clone().unwrap_or_default(),
                    t.voice_note.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<_> = txs
                .into_iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "date": t.date.to_rfc3339(),
                        "customer_id": t.customer_id,
                        "customer": name_of(t.customer_id),
                        "type": t.kind,
                        "amount": t.amount.to_string(),
                        "description": t.description,
                        "photo": t.photo,
                        "voice_note": t.voice_note,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write export file {}", out))?;
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
