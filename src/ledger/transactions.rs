// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerResult;
use crate::models::Transaction;
use crate::store::{Store, TRANSACTIONS_KEY, load_list};

/// All of a user's ledger entries, newest first.
pub fn list_for_user(store: &dyn Store, user_id: &str) -> LedgerResult<Vec<Transaction>> {
    let mut txs: Vec<Transaction> = load_list(store, TRANSACTIONS_KEY)?;
    txs.retain(|t| t.user_id == user_id);
    txs.sort_by(|a, b| (b.created_at, &b.id).cmp(&(a.created_at, &a.id)));
    Ok(txs)
}

/// Entries touching a wallet on any side (credit, debit, or either leg of
/// a transfer).
pub fn by_wallet(
    store: &dyn Store,
    user_id: &str,
    wallet_id: &str,
) -> LedgerResult<Vec<Transaction>> {
    let mut txs = list_for_user(store, user_id)?;
    txs.retain(|t| touches_wallet(t, wallet_id));
    Ok(txs)
}

pub fn by_invoice(
    store: &dyn Store,
    user_id: &str,
    invoice_id: &str,
) -> LedgerResult<Vec<Transaction>> {
    let mut txs = list_for_user(store, user_id)?;
    txs.retain(|t| t.invoice_id.as_deref() == Some(invoice_id));
    Ok(txs)
}

pub fn touches_wallet(tx: &Transaction, wallet_id: &str) -> bool {
    tx.wallet_id.as_deref() == Some(wallet_id)
        || tx.from_wallet_id.as_deref() == Some(wallet_id)
        || tx.to_wallet_id.as_deref() == Some(wallet_id)
}
