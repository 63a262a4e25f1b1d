// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! `khata shell`: one session kept alive across typed commands until `quit` or EOF.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::cli::build_shell;
use crate::commands::{execute, print_screen};
use crate::config::Config;
use crate::session::Session;
use crate::utils::split_args;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Parse and run one line. Usage and ledger errors are returned, not printed.
pub fn run_line(session: &mut Session, cfg: &Config, line: &str) -> Result<Step> {
    let words = split_args(line)?;
    if words.is_empty() {
        return Ok(Step::Continue);
    }
    let matches = build_shell().try_get_matches_from(words)?;
    match matches.subcommand() {
        Some(("quit", _)) => Ok(Step::Quit),
        Some((name, sub)) => {
            debug!(command = name, "shell command");
            execute(session, cfg, name, sub)?;
            Ok(Step::Continue)
        }
        None => Ok(Step::Continue),
    }
}

pub fn run<R: BufRead>(session: &mut Session, cfg: &Config, input: R) -> Result<()> {
    print_screen(session, cfg, None);
    prompt()?;
    for line in input.lines() {
        let line = line?;
        match run_line(session, cfg, &line) {
            Ok(Step::Quit) => break,
            Ok(Step::Continue) => {}
            Err(e) => match e.downcast_ref::<clap::Error>() {
                Some(ce) => eprintln!("{}", ce.render()),
                None => eprintln!("Error: {:#}", e),
            },
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("khata> ");
    std::io::stdout().flush()?;
    Ok(())
}
