// Copyright (c) AlphaVelocity.
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
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn req(name: &'static str) -> Arg {
    Arg::new(name).long(name).required(true)
}

fn opt(name: &'static str) -> Arg {
    Arg::new(name).long(name)
}

pub fn build_cli() -> Command {
    Command::new("kudibook")
        .about("Invoicing, multi-wallet balances, and transaction history")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the data directory"))
        .subcommand(
            Command::new("signup")
                .about("Create an account and log in")
                .arg(req("name").help("Full name"))
                .arg(req("email"))
                .arg(req("password")),
        )
        .subcommand(
            Command::new("login")
                .about("Log in with email and password")
                .arg(req("email"))
                .arg(req("password")),
        )
        .subcommand(Command::new("logout").about("Clear the active session"))
        .subcommand(Command::new("whoami").about("Show the active session"))
        .subcommand(
            Command::new("wallet")
                .about("Manage wallets")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Add a wallet")
                        .arg(req("name"))
                        .arg(
                            opt("type")
                                .default_value("bank")
                                .help("bank | cash | mobile | crypto"),
                        )
                        .arg(opt("balance").default_value("0"))
                        .arg(opt("currency").default_value("₦"))
                        .arg(opt("color").default_value("#6366f1"))
                        .arg(opt("account-number")),
                )
                .subcommand(json_flags(Command::new("list").about("List wallets")))
                .subcommand(
                    Command::new("edit")
                        .about("Edit wallet fields")
                        .arg(req("id"))
                        .arg(opt("name"))
                        .arg(opt("type"))
                        .arg(opt("balance"))
                        .arg(opt("currency"))
                        .arg(opt("color"))
                        .arg(opt("account-number")),
                )
                .subcommand(Command::new("rm").about("Delete a wallet").arg(req("id")))
                .subcommand(
                    Command::new("deposit")
                        .about("Deposit into a wallet")
                        .arg(req("id"))
                        .arg(req("amount"))
                        .arg(opt("note")),
                )
                .subcommand(
                    Command::new("withdraw")
                        .about("Withdraw from a wallet")
                        .arg(req("id"))
                        .arg(req("amount"))
                        .arg(opt("note")),
                )
                .subcommand(
                    Command::new("transfer")
                        .about("Transfer between wallets")
                        .arg(req("from"))
                        .arg(req("to"))
                        .arg(req("amount"))
                        .arg(opt("note")),
                ),
        )
        .subcommand(
            Command::new("invoice")
                .about("Manage invoices")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Create an invoice")
                        .arg(req("client").help("Client name"))
                        .arg(req("email").help("Client email"))
                        .arg(req("amount"))
                        .arg(opt("vat").help("VAT percentage; defaults to the configured rate"))
                        .arg(req("due").help("Due date, YYYY-MM-DD"))
                        .arg(
                            opt("status")
                                .default_value("pending")
                                .help("paid | unpaid | pending"),
                        )
                        .arg(opt("wallet").help("Wallet id to credit when paid")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List invoices")
                        .arg(opt("status").help("Filter: paid | unpaid | pending")),
                ))
                .subcommand(
                    Command::new("paid")
                        .about("Mark an invoice as paid")
                        .arg(req("id")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit invoice fields")
                        .arg(req("id"))
                        .arg(opt("client"))
                        .arg(opt("email"))
                        .arg(opt("amount"))
                        .arg(opt("vat"))
                        .arg(opt("due"))
                        .arg(opt("status"))
                        .arg(opt("wallet").help("Wallet id, or 'none' to unlink")),
                )
                .subcommand(Command::new("rm").about("Delete an invoice").arg(req("id"))),
        )
        .subcommand(json_flags(
            Command::new("history")
                .about("Transaction history, newest first")
                .arg(opt("type").help(
                    "Filter: invoice_payment | wallet_deposit | wallet_withdrawal | wallet_transfer",
                ))
                .arg(opt("wallet").help("Filter by wallet id"))
                .arg(opt("invoice").help("Filter by invoice id"))
                .arg(opt("limit").value_parser(value_parser!(usize))),
        ))
        .subcommand(json_flags(
            Command::new("report").about("Invoice and wallet summary"),
        ))
        .subcommand(
            Command::new("doctor")
                .about("Check paid invoices against the ledger")
                .arg(
                    Arg::new("fix")
                        .long("fix")
                        .action(ArgAction::SetTrue)
                        .help("Apply missing wallet credits and ledger entries"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export records")
                .subcommand_required(true)
                .subcommand(
                    Command::new("transactions")
                        .arg(opt("format").default_value("csv").help("csv | json"))
                        .arg(req("out")),
                )
                .subcommand(
                    Command::new("invoices")
                        .arg(opt("format").default_value("csv").help("csv | json"))
                        .arg(req("out")),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("View or change defaults")
                .subcommand_required(true)
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set").arg(req("vat").help("Default VAT percentage")),
                ),
        )
}
