// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::ledger::invoices::{self, MarkPaidOutcome, WalletCredit};
use crate::ledger::auth;
use crate::models::{InvoicePatch, InvoiceStatus};
use crate::store::Store;
use crate::utils::{get_default_vat, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("paid", sub)) => paid(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_status(s: &str) -> Result<InvoiceStatus> {
    InvoiceStatus::parse(s)
        .ok_or_else(|| anyhow!("Invalid status '{}' (use paid|unpaid|pending)", s))
}

fn add(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let client_name = sub.get_one::<String>("client").unwrap().trim().to_string();
    let client_email = sub.get_one::<String>("email").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let vat = match sub.get_one::<String>("vat") {
        Some(s) => parse_decimal(s)?,
        None => get_default_vat(store)?,
    };
    let due_date = parse_date(sub.get_one::<String>("due").unwrap())?;
    let status = parse_status(sub.get_one::<String>("status").unwrap())?;
    let wallet_id = sub.get_one::<String>("wallet").map(|s| s.to_string());

    let invoice = invoices::add(
        store,
        &user.id,
        invoices::NewInvoice {
            client_name,
            client_email,
            amount,
            vat,
            due_date,
            status,
            wallet_id,
        },
    )?;
    println!(
        "Created {} for {}: amount {} + VAT {} = {}",
        invoice.id, invoice.client_name, invoice.amount, invoice.vat_amount, invoice.total
    );
    Ok(())
}

fn list(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data = invoices::list_for_user(store, &user.id)?;
    if let Some(s) = sub.get_one::<String>("status") {
        let status = parse_status(s)?;
        data.retain(|i| i.status == status);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|i| {
                vec![
                    i.id.clone(),
                    i.client_name.clone(),
                    i.amount.to_string(),
                    format!("{}%", i.vat),
                    i.total.to_string(),
                    i.due_date.to_string(),
                    i.status.as_str().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Client", "Amount", "VAT", "Total", "Due", "Status"],
                rows
            )
        );
    }
    Ok(())
}

fn paid(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let id = sub.get_one::<String>("id").unwrap();
    match invoices::mark_paid(store, &user.id, id)? {
        MarkPaidOutcome::AlreadyPaid => println!("Invoice {} is already paid", id),
        MarkPaidOutcome::Paid(WalletCredit::Applied(tx)) => {
            println!("Invoice {} marked as paid; wallet credited {}", id, tx.amount)
        }
        MarkPaidOutcome::Paid(WalletCredit::NoWalletLinked) => {
            println!("Invoice {} marked as paid (no wallet linked)", id)
        }
        MarkPaidOutcome::Paid(WalletCredit::WalletMissing(wid)) => {
            println!("Invoice {} marked as paid", id);
            eprintln!("Warning: linked wallet '{}' no longer exists; no credit applied", wid);
        }
    }
    Ok(())
}

fn edit(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let patch = InvoicePatch {
        client_name: sub.get_one::<String>("client").map(|s| s.trim().to_string()),
        client_email: sub.get_one::<String>("email").map(|s| s.trim().to_string()),
        amount: match sub.get_one::<String>("amount") {
            Some(s) => Some(parse_decimal(s)?),
            None => None,
        },
        vat: match sub.get_one::<String>("vat") {
            Some(s) => Some(parse_decimal(s)?),
            None => None,
        },
        due_date: match sub.get_one::<String>("due") {
            Some(s) => Some(parse_date(s)?),
            None => None,
        },
        status: match sub.get_one::<String>("status") {
            Some(s) => Some(parse_status(s)?),
            None => None,
        },
        wallet_id: sub.get_one::<String>("wallet").map(|s| {
            if s == "none" {
                None
            } else {
                Some(s.to_string())
            }
        }),
    };
    let invoice = invoices::update(store, id, patch)?;
    println!(
        "Updated {}: total {} ({})",
        invoice.id,
        invoice.total,
        invoice.status.as_str()
    );
    Ok(())
}

fn rm(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    invoices::delete(store, id)?;
    println!("Removed invoice '{}'", id);
    Ok(())
}
