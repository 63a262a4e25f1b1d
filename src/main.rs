// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use khata::{cli, commands, config, logging, session::Session, shell};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = config::load(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    logging::init(&cfg.log_level);

    let mut session = Session::from_config(&cfg);

    match matches.subcommand() {
        Some(("shell", _)) => {
            let stdin = std::io::stdin();
            shell::run(&mut session, &cfg, stdin.lock())?;
        }
        Some((name, sub)) => {
            if !commands::execute(&mut session, &cfg, name, sub)? {
                cli::build_cli().print_help()?;
                println!();
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
