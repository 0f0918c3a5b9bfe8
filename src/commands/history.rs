// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::{auth, transactions, wallets};
use crate::models::{Transaction, TransactionKind};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table, wallet_name};

pub fn handle(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let sums = totals(store, &user.id)?;
    let mut data = transactions::list_for_user(store, &user.id)?;
    if let Some(s) = sub.get_one::<String>("type") {
        let kind = TransactionKind::parse(s).ok_or_else(|| {
            anyhow!(
                "Invalid type '{}' (use invoice_payment|wallet_deposit|wallet_withdrawal|wallet_transfer)",
                s
            )
        })?;
        data.retain(|t| t.kind == kind);
    }
    if let Some(wid) = sub.get_one::<String>("wallet") {
        data.retain(|t| transactions::touches_wallet(t, wid));
    }
    if let Some(iid) = sub.get_one::<String>("invoice") {
        data.retain(|t| t.invoice_id.as_deref() == Some(iid.as_str()));
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let wallet_list = wallets::list(store)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.kind.label().to_string(),
                    t.description.clone(),
                    wallet_column(&wallet_list, t),
                    t.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    signed_amount(t),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Type", "Description", "Wallet", "Date", "Amount"], rows)
        );
        println!(
            "{}",
            pretty_table(
                &["Total Income", "Total Expenses", "Total Transactions"],
                vec![vec![
                    sums.income.round_dp(2).to_string(),
                    sums.expenses.round_dp(2).to_string(),
                    sums.count.to_string(),
                ]]
            )
        );
    }
    Ok(())
}

fn wallet_column(wallet_list: &[crate::models::Wallet], t: &Transaction) -> String {
    if t.kind == TransactionKind::WalletTransfer {
        format!(
            "From: {} / To: {}",
            wallet_name(wallet_list, t.from_wallet_id.as_deref()),
            wallet_name(wallet_list, t.to_wallet_id.as_deref())
        )
    } else {
        wallet_name(wallet_list, t.wallet_id.as_deref())
    }
}

fn signed_amount(t: &Transaction) -> String {
    let sign = if t.kind == TransactionKind::WalletWithdrawal {
        "-"
    } else {
        "+"
    };
    format!("{}{}", sign, t.amount)
}

#[derive(Serialize)]
pub struct HistoryTotals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub count: usize,
}

/// Income/expense totals over a user's full history. Invoice payments and
/// deposits count as income; withdrawals as expenses; transfers as neither.
pub fn totals(store: &dyn Store, user_id: &str) -> Result<HistoryTotals> {
    let all = transactions::list_for_user(store, user_id)?;
    let income = all
        .iter()
        .filter(|t| {
            matches!(
                t.kind,
                TransactionKind::InvoicePayment | TransactionKind::WalletDeposit
            )
        })
        .map(|t| t.amount)
        .sum();
    let expenses = all
        .iter()
        .filter(|t| t.kind == TransactionKind::WalletWithdrawal)
        .map(|t| t.amount)
        .sum();
    Ok(HistoryTotals {
        income,
        expenses,
        count: all.len(),
    })
}
