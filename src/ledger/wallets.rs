// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionKind, Wallet, WalletKind, WalletPatch};
use crate::store::{Store, TRANSACTIONS_KEY, WALLETS_KEY, load_list, save_list};
use crate::utils::next_id;

pub struct NewWallet {
    pub name: String,
    pub kind: WalletKind,
    pub balance: Decimal,
    pub account_number: Option<String>,
    pub currency: String,
    pub color: String,
}

// Wallets carry no owner field; every wallet in the store belongs to
// whoever is logged in.
pub fn list(store: &dyn Store) -> LedgerResult<Vec<Wallet>> {
    Ok(load_list(store, WALLETS_KEY)?)
}

pub fn find(store: &dyn Store, id: &str) -> LedgerResult<Wallet> {
    list(store)?
        .into_iter()
        .find(|w| w.id == id)
        .ok_or_else(|| LedgerError::WalletNotFound(id.to_string()))
}

pub fn add(store: &dyn Store, new: NewWallet) -> LedgerResult<Wallet> {
    let mut wallets: Vec<Wallet> = load_list(store, WALLETS_KEY)?;
    let wallet = Wallet {
        id: Uuid::new_v4().to_string(),
        name: new.name,
        kind: new.kind,
        balance: new.balance,
        account_number: new.account_number,
        currency: new.currency,
        color: new.color,
        created_at: Utc::now(),
    };
    wallets.push(wallet.clone());
    save_list(store, WALLETS_KEY, &wallets)?;
    Ok(wallet)
}

pub fn update(store: &dyn Store, id: &str, patch: WalletPatch) -> LedgerResult<Wallet> {
    let mut wallets: Vec<Wallet> = load_list(store, WALLETS_KEY)?;
    let wallet = wallets
        .iter_mut()
        .find(|w| w.id == id)
        .ok_or_else(|| LedgerError::WalletNotFound(id.to_string()))?;

    if let Some(name) = patch.name {
        wallet.name = name;
    }
    if let Some(kind) = patch.kind {
        wallet.kind = kind;
    }
    if let Some(balance) = patch.balance {
        wallet.balance = balance;
    }
    if let Some(number) = patch.account_number {
        wallet.account_number = Some(number);
    }
    if let Some(currency) = patch.currency {
        wallet.currency = currency;
    }
    if let Some(color) = patch.color {
        wallet.color = color;
    }
    let updated = wallet.clone();
    save_list(store, WALLETS_KEY, &wallets)?;
    Ok(updated)
}

/// Remove a wallet. Transactions referencing it are kept; history lookups
/// for the id degrade to a placeholder name.
pub fn delete(store: &dyn Store, id: &str) -> LedgerResult<()> {
    let mut wallets: Vec<Wallet> = load_list(store, WALLETS_KEY)?;
    let before = wallets.len();
    wallets.retain(|w| w.id != id);
    if wallets.len() == before {
        return Err(LedgerError::WalletNotFound(id.to_string()));
    }
    save_list(store, WALLETS_KEY, &wallets)?;
    Ok(())
}

pub fn total_balance(store: &dyn Store) -> LedgerResult<Decimal> {
    Ok(list(store)?.iter().map(|w| w.balance).sum())
}

pub fn deposit(
    store: &dyn Store,
    user_id: &str,
    wallet_id: &str,
    amount: Decimal,
    note: Option<String>,
) -> LedgerResult<Transaction> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount);
    }
    let mut wallets: Vec<Wallet> = load_list(store, WALLETS_KEY)?;
    let wallet = wallets
        .iter_mut()
        .find(|w| w.id == wallet_id)
        .ok_or_else(|| LedgerError::WalletNotFound(wallet_id.to_string()))?;
    wallet.balance += amount;

    let tx = Transaction {
        id: next_id("TXN-"),
        kind: TransactionKind::WalletDeposit,
        amount,
        description: note.unwrap_or_else(|| format!("Deposit into {}", wallet.name)),
        wallet_id: Some(wallet.id.clone()),
        invoice_id: None,
        from_wallet_id: None,
        to_wallet_id: None,
        created_at: Utc::now(),
        user_id: user_id.to_string(),
    };
    commit_with_tx(store, &wallets, tx)
}

pub fn withdraw(
    store: &dyn Store,
    user_id: &str,
    wallet_id: &str,
    amount: Decimal,
    note: Option<String>,
) -> LedgerResult<Transaction> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount);
    }
    let mut wallets: Vec<Wallet> = load_list(store, WALLETS_KEY)?;
    let wallet = wallets
        .iter_mut()
        .find(|w| w.id == wallet_id)
        .ok_or_else(|| LedgerError::WalletNotFound(wallet_id.to_string()))?;
    if amount > wallet.balance {
        return Err(LedgerError::InsufficientFunds(wallet.name.clone()));
    }
    wallet.balance -= amount;

    let tx = Transaction {
        id: next_id("TXN-"),
        kind: TransactionKind::WalletWithdrawal,
        amount,
        description: note.unwrap_or_else(|| format!("Withdrawal from {}", wallet.name)),
        wallet_id: Some(wallet.id.clone()),
        invoice_id: None,
        from_wallet_id: None,
        to_wallet_id: None,
        created_at: Utc::now(),
        user_id: user_id.to_string(),
    };
    commit_with_tx(store, &wallets, tx)
}

/// Move balance between two wallets, recorded as a single transfer entry
/// carrying both wallet ids.
pub fn transfer(
    store: &dyn Store,
    user_id: &str,
    from_id: &str,
    to_id: &str,
    amount: Decimal,
    note: Option<String>,
) -> LedgerResult<Transaction> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount);
    }
    if from_id == to_id {
        return Err(LedgerError::SelfTransfer);
    }
    let mut wallets: Vec<Wallet> = load_list(store, WALLETS_KEY)?;

    let from_pos = wallets
        .iter()
        .position(|w| w.id == from_id)
        .ok_or_else(|| LedgerError::WalletNotFound(from_id.to_string()))?;
    let to_pos = wallets
        .iter()
        .position(|w| w.id == to_id)
        .ok_or_else(|| LedgerError::WalletNotFound(to_id.to_string()))?;
    if amount > wallets[from_pos].balance {
        return Err(LedgerError::InsufficientFunds(wallets[from_pos].name.clone()));
    }

    wallets[from_pos].balance -= amount;
    wallets[to_pos].balance += amount;

    let tx = Transaction {
        id: next_id("TXN-"),
        kind: TransactionKind::WalletTransfer,
        amount,
        description: note.unwrap_or_else(|| {
            format!(
                "Transfer from {} to {}",
                wallets[from_pos].name, wallets[to_pos].name
            )
        }),
        wallet_id: None,
        invoice_id: None,
        from_wallet_id: Some(from_id.to_string()),
        to_wallet_id: Some(to_id.to_string()),
        created_at: Utc::now(),
        user_id: user_id.to_string(),
    };
    commit_with_tx(store, &wallets, tx)
}

// All mutations are staged in memory before this point; the balance write
// and the ledger append land back to back.
fn commit_with_tx(
    store: &dyn Store,
    wallets: &[Wallet],
    tx: Transaction,
) -> LedgerResult<Transaction> {
    let mut txs: Vec<Transaction> = load_list(store, TRANSACTIONS_KEY)?;
    txs.push(tx.clone());
    save_list(store, WALLETS_KEY, wallets)?;
    save_list(store, TRANSACTIONS_KEY, &txs)?;
    Ok(tx)
}
