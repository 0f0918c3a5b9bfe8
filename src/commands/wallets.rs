// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::ledger::{auth, wallets};
use crate::models::{WalletKind, WalletPatch};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("deposit", sub)) => deposit(store, sub)?,
        Some(("withdraw", sub)) => withdraw(store, sub)?,
        Some(("transfer", sub)) => transfer(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_kind(s: &str) -> Result<WalletKind> {
    WalletKind::parse(s)
        .ok_or_else(|| anyhow!("Invalid wallet type '{}' (use bank|cash|mobile|crypto)", s))
}

fn add(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let kind = parse_kind(sub.get_one::<String>("type").unwrap())?;
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
    let currency = sub.get_one::<String>("currency").unwrap().to_string();
    let color = sub.get_one::<String>("color").unwrap().to_string();
    let account_number = sub.get_one::<String>("account-number").map(|s| s.to_string());

    let wallet = wallets::add(
        store,
        wallets::NewWallet {
            name,
            kind,
            balance,
            account_number,
            currency,
            color,
        },
    )?;
    println!(
        "Added wallet '{}' ({}, {}) id {}",
        wallet.name,
        wallet.kind.as_str(),
        fmt_money(&wallet.balance, &wallet.currency),
        wallet.id
    );
    Ok(())
}

fn list(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let wallets_all = wallets::list(store)?;
    if !maybe_print_json(json_flag, jsonl_flag, &wallets_all)? {
        let rows: Vec<Vec<String>> = wallets_all
            .iter()
            .map(|w| {
                vec![
                    w.id.clone(),
                    w.name.clone(),
                    w.kind.as_str().to_string(),
                    fmt_money(&w.balance, &w.currency),
                    w.account_number.clone().unwrap_or_default(),
                    w.created_at.format("%Y-%m-%d").to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Type", "Balance", "Account #", "Created"], rows)
        );
        println!(
            "Total balance: {}",
            wallets::total_balance(store)?.round_dp(2)
        );
    }
    Ok(())
}

fn edit(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let patch = WalletPatch {
        name: sub.get_one::<String>("name").map(|s| s.trim().to_string()),
        kind: match sub.get_one::<String>("type") {
            Some(s) => Some(parse_kind(s)?),
            None => None,
        },
        balance: match sub.get_one::<String>("balance") {
            Some(s) => Some(parse_decimal(s)?),
            None => None,
        },
        account_number: sub.get_one::<String>("account-number").map(|s| s.to_string()),
        currency: sub.get_one::<String>("currency").map(|s| s.to_string()),
        color: sub.get_one::<String>("color").map(|s| s.to_string()),
    };
    let wallet = wallets::update(store, id, patch)?;
    println!("Updated wallet '{}'", wallet.name);
    Ok(())
}

fn rm(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    wallets::delete(store, id)?;
    println!("Removed wallet '{}'", id);
    Ok(())
}

fn deposit(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let id = sub.get_one::<String>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let note = sub.get_one::<String>("note").map(|s| s.to_string());
    let tx = wallets::deposit(store, &user.id, id, amount, note)?;
    println!("Deposited {} ({})", tx.amount, tx.description);
    Ok(())
}

fn withdraw(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let id = sub.get_one::<String>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let note = sub.get_one::<String>("note").map(|s| s.to_string());
    let tx = wallets::withdraw(store, &user.id, id, amount, note)?;
    println!("Withdrew {} ({})", tx.amount, tx.description);
    Ok(())
}

fn transfer(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let from = sub.get_one::<String>("from").unwrap();
    let to = sub.get_one::<String>("to").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let note = sub.get_one::<String>("note").map(|s| s.to_string());
    let tx = wallets::transfer(store, &user.id, from, to, amount, note)?;
    println!("Transferred {} ({})", tx.amount, tx.description);
    Ok(())
}
