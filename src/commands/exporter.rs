// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::ledger::{auth, invoices, transactions, wallets};
use crate::models::TransactionKind;
use crate::store::Store;
use crate::utils::wallet_name;

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        Some(("invoices", sub)) => export_invoices(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let data = transactions::list_for_user(store, &user.id)?;
    let wallet_list = wallets::list(store)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "type",
                "amount",
                "description",
                "wallet",
                "invoice_id",
                "created_at",
            ])?;
            for t in &data {
                // Transfers carry two wallet ids; render both legs.
                let wallet = if t.kind == TransactionKind::WalletTransfer {
                    format!(
                        "From: {} / To: {}",
                        wallet_name(&wallet_list, t.from_wallet_id.as_deref()),
                        wallet_name(&wallet_list, t.to_wallet_id.as_deref())
                    )
                } else {
                    wallet_name(&wallet_list, t.wallet_id.as_deref())
                };
                wtr.write_record([
                    t.id.clone(),
                    t.kind.as_str().to_string(),
                    t.amount.to_string(),
                    t.description.clone(),
                    wallet,
                    t.invoice_id.clone().unwrap_or_default(),
                    t.created_at.to_rfc3339(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&data)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", data.len(), out);
    Ok(())
}

fn export_invoices(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let data = invoices::list_for_user(store, &user.id)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "client_name",
                "client_email",
                "amount",
                "vat",
                "vat_amount",
                "total",
                "due_date",
                "status",
            ])?;
            for i in &data {
                wtr.write_record([
                    i.id.clone(),
                    i.client_name.clone(),
                    i.client_email.clone(),
                    i.amount.to_string(),
                    i.vat.to_string(),
                    i.vat_amount.to_string(),
                    i.total.to_string(),
                    i.due_date.to_string(),
                    i.status.as_str().to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = data
                .iter()
                .map(|i| {
                    json!({
                        "id": i.id, "clientName": i.client_name, "clientEmail": i.client_email,
                        "amount": i.amount, "vat": i.vat, "vatAmount": i.vat_amount,
                        "total": i.total, "dueDate": i.due_date, "status": i.status,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} invoices to {}", data.len(), out);
    Ok(())
}
