// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn id_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .value_parser(value_parser!(u64))
        .help(help)
}

fn customer_cmd() -> Command {
    Command::new("customer")
        .about("Customer book")
        .subcommand_required(true)
        .subcommand(json_flags(
            Command::new("list").about("List customers").arg(
                Arg::new("search")
                    .long("search")
                    .short('s')
                    .help("Filter by name (any case) or phone"),
            ),
        ))
        .subcommand(
            Command::new("add")
                .about("Add a customer (placeholder details when omitted)")
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("phone").long("phone"))
                .arg(Arg::new("address").long("address")),
        )
        .subcommand(
            Command::new("show")
                .visible_alias("select")
                .about("Select a customer and show their ledger")
                .arg(id_arg("id", "Customer ID")),
        )
        .subcommand(
            Command::new("call")
                .about("Print the tel: link for a customer")
                .arg(id_arg("id", "Customer ID")),
        )
        .subcommand(
            Command::new("message")
                .about("Print the sms: link for a customer")
                .arg(id_arg("id", "Customer ID")),
        )
}

fn tx_form_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .short('t')
            .value_parser(["credit", "debit"])
            .help("credit (money in) or debit (money out)"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .short('a')
            .allow_negative_numbers(true),
    )
    .arg(Arg::new("description").long("description").short('d'))
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Transactions")
        .subcommand_required(true)
        .subcommand(
            tx_form_args(Command::new("add").about("Add a credit or debit"))
                .arg(
                    Arg::new("customer")
                        .long("customer")
                        .short('c')
                        .value_parser(value_parser!(u64)),
                )
                .arg(Arg::new("photo").long("photo").help("Photo reference"))
                .arg(
                    Arg::new("voice_note")
                        .long("voice-note")
                        .help("Voice note reference"),
                ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions, newest first")
                .arg(
                    Arg::new("customer")
                        .long("customer")
                        .short('c')
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("recent")
                        .long("recent")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("limit")
                        .help("Only the dashboard's recent transactions"),
                ),
        ))
        .subcommand(tx_form_args(
            Command::new("edit")
                .about("Change type, amount or description of a transaction")
                .arg(id_arg("id", "Transaction ID")),
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete a transaction and reverse its balance effect")
                .arg(id_arg("id", "Transaction ID")),
        )
}

fn with_session_commands(cmd: Command) -> Command {
    cmd.subcommand(json_flags(
        Command::new("dashboard").about("Summary, quick actions and recent transactions"),
    ))
    .subcommand(json_flags(Command::new("stats").about("Dashboard statistics")))
    .subcommand(customer_cmd())
    .subcommand(tx_cmd())
    .subcommand(
        Command::new("tab").about("Switch screen").arg(
            Arg::new("name")
                .required(true)
                .help("dashboard|customers|add|reports|settings"),
        ),
    )
    .subcommand(Command::new("doctor").about("Check balances against transactions"))
    .subcommand(
        Command::new("export").subcommand(
            Command::new("transactions")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        ),
    )
}

pub fn build_cli() -> Command {
    let cmd = Command::new("khata")
        .about("Khata: customer credit/debit ledger")
        .version(clap::crate_version!())
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to config.json"),
        );
    with_session_commands(cmd).subcommand(Command::new("shell").about("Interactive session"))
}

/// Grammar for lines typed inside `khata shell`.
pub fn build_shell() -> Command {
    let cmd = Command::new("khata")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_version_flag(true);
    with_session_commands(cmd)
        .subcommand(Command::new("quit").visible_alias("exit").about("Leave the shell"))
}
