// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::ledger::{auth, invoices, wallets};
use crate::models::InvoiceStatus;
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total_invoices: usize,
    /// Sum of paid invoice totals.
    pub working_capital: Decimal,
    /// Sum of VAT on paid invoices.
    pub total_vat: Decimal,
    /// Sum of pending and unpaid invoice totals.
    pub pending_amount: Decimal,
    pub wallet_balance: Decimal,
    /// Paid revenue keyed by YYYY-MM of invoice creation.
    pub monthly_paid: BTreeMap<String, Decimal>,
}

pub fn compute_stats(store: &dyn Store, user_id: &str) -> Result<ReportStats> {
    let data = invoices::list_for_user(store, user_id)?;

    let mut working_capital = Decimal::ZERO;
    let mut total_vat = Decimal::ZERO;
    let mut pending_amount = Decimal::ZERO;
    let mut monthly_paid: BTreeMap<String, Decimal> = BTreeMap::new();

    for inv in &data {
        match inv.status {
            InvoiceStatus::Paid => {
                working_capital += inv.total;
                total_vat += inv.vat_amount;
                let month = inv.created_at.format("%Y-%m").to_string();
                *monthly_paid.entry(month).or_insert(Decimal::ZERO) += inv.total;
            }
            InvoiceStatus::Pending | InvoiceStatus::Unpaid => pending_amount += inv.total,
        }
    }

    Ok(ReportStats {
        total_invoices: data.len(),
        working_capital,
        total_vat,
        pending_amount,
        wallet_balance: wallets::total_balance(store)?,
        monthly_paid,
    })
}

pub fn handle(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let stats = compute_stats(store, &user.id)?;

    if !maybe_print_json(json_flag, jsonl_flag, &stats)? {
        println!(
            "{}",
            pretty_table(
                &[
                    "Invoices",
                    "Working Capital",
                    "VAT Collected",
                    "Pending",
                    "Wallet Balance",
                ],
                vec![vec![
                    stats.total_invoices.to_string(),
                    stats.working_capital.round_dp(2).to_string(),
                    stats.total_vat.round_dp(2).to_string(),
                    stats.pending_amount.round_dp(2).to_string(),
                    stats.wallet_balance.round_dp(2).to_string(),
                ]]
            )
        );
        if !stats.monthly_paid.is_empty() {
            let rows: Vec<Vec<String>> = stats
                .monthly_paid
                .iter()
                .map(|(m, v)| vec![m.clone(), v.round_dp(2).to_string()])
                .collect();
            println!("{}", pretty_table(&["Month", "Paid Revenue"], rows));
        }
    }
    Ok(())
}
