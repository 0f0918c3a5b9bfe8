// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Invoice, InvoicePatch, InvoiceStatus, Transaction, TransactionKind, Wallet,
};
use crate::store::{
    INVOICES_KEY, Store, TRANSACTIONS_KEY, WALLETS_KEY, load_list, save_list,
};
use crate::utils::next_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatBreakdown {
    pub vat_amount: Decimal,
    pub total: Decimal,
}

/// VAT on a base amount at a percentage rate. The VAT portion is rounded
/// to 2 decimal places (banker's rounding); the total is the exact sum of
/// the base and the rounded VAT.
pub fn calculate_vat(amount: Decimal, rate: Decimal) -> VatBreakdown {
    let vat_amount = (amount * rate / Decimal::ONE_HUNDRED).round_dp(2).normalize();
    VatBreakdown {
        vat_amount,
        total: amount + vat_amount,
    }
}

pub struct NewInvoice {
    pub client_name: String,
    pub client_email: String,
    pub amount: Decimal,
    pub vat: Decimal,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub wallet_id: Option<String>,
}

pub fn list_for_user(store: &dyn Store, user_id: &str) -> LedgerResult<Vec<Invoice>> {
    let mut invoices: Vec<Invoice> = load_list(store, INVOICES_KEY)?;
    invoices.retain(|i| i.user_id == user_id);
    Ok(invoices)
}

pub fn find(store: &dyn Store, user_id: &str, id: &str) -> LedgerResult<Invoice> {
    list_for_user(store, user_id)?
        .into_iter()
        .find(|i| i.id == id)
        .ok_or_else(|| LedgerError::InvoiceNotFound(id.to_string()))
}

pub fn add(store: &dyn Store, user_id: &str, new: NewInvoice) -> LedgerResult<Invoice> {
    if new.amount < Decimal::ZERO || new.vat < Decimal::ZERO {
        return Err(LedgerError::NegativeAmount);
    }
    let mut invoices: Vec<Invoice> = load_list(store, INVOICES_KEY)?;
    let vat = calculate_vat(new.amount, new.vat);
    let invoice = Invoice {
        id: next_id("INV-"),
        client_name: new.client_name,
        client_email: new.client_email,
        amount: new.amount,
        vat: new.vat,
        vat_amount: vat.vat_amount,
        total: vat.total,
        due_date: new.due_date,
        status: new.status,
        created_at: Utc::now(),
        user_id: user_id.to_string(),
        wallet_id: new.wallet_id,
    };
    invoices.push(invoice.clone());
    save_list(store, INVOICES_KEY, &invoices)?;
    Ok(invoice)
}

pub fn update(store: &dyn Store, id: &str, patch: InvoicePatch) -> LedgerResult<Invoice> {
    if patch.amount.is_some_and(|a| a < Decimal::ZERO)
        || patch.vat.is_some_and(|v| v < Decimal::ZERO)
    {
        return Err(LedgerError::NegativeAmount);
    }
    let mut invoices: Vec<Invoice> = load_list(store, INVOICES_KEY)?;
    let invoice = invoices
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| LedgerError::InvoiceNotFound(id.to_string()))?;

    if let Some(name) = patch.client_name {
        invoice.client_name = name;
    }
    if let Some(email) = patch.client_email {
        invoice.client_email = email;
    }
    if let Some(amount) = patch.amount {
        invoice.amount = amount;
    }
    if let Some(vat) = patch.vat {
        invoice.vat = vat;
    }
    if patch.amount.is_some() || patch.vat.is_some() {
        let vat = calculate_vat(invoice.amount, invoice.vat);
        invoice.vat_amount = vat.vat_amount;
        invoice.total = vat.total;
    }
    if let Some(due) = patch.due_date {
        invoice.due_date = due;
    }
    if let Some(status) = patch.status {
        invoice.status = status;
    }
    if let Some(wallet_id) = patch.wallet_id {
        invoice.wallet_id = wallet_id;
    }
    let updated = invoice.clone();
    save_list(store, INVOICES_KEY, &invoices)?;
    Ok(updated)
}

pub fn delete(store: &dyn Store, id: &str) -> LedgerResult<()> {
    let mut invoices: Vec<Invoice> = load_list(store, INVOICES_KEY)?;
    let before = invoices.len();
    invoices.retain(|i| i.id != id);
    if invoices.len() == before {
        return Err(LedgerError::InvoiceNotFound(id.to_string()));
    }
    save_list(store, INVOICES_KEY, &invoices)?;
    Ok(())
}

/// How the wallet side of a mark-paid resolved.
#[derive(Debug)]
pub enum WalletCredit {
    /// Wallet credited and a payment entry appended.
    Applied(Transaction),
    /// Invoice has no linked wallet; status change only.
    NoWalletLinked,
    /// Linked wallet id no longer resolves; status change only.
    WalletMissing(String),
}

#[derive(Debug)]
pub enum MarkPaidOutcome {
    /// The invoice was already paid; nothing was changed. Re-marking never
    /// re-credits the wallet.
    AlreadyPaid,
    Paid(WalletCredit),
}

/// Transition an invoice to `paid`. With a linked wallet, credit it by the
/// invoice total and append exactly one `invoice_payment` entry. Every
/// mutation is staged in memory first; the invoice, wallet, and ledger
/// writes are committed together at the end.
pub fn mark_paid(
    store: &dyn Store,
    user_id: &str,
    invoice_id: &str,
) -> LedgerResult<MarkPaidOutcome> {
    let mut invoices: Vec<Invoice> = load_list(store, INVOICES_KEY)?;
    let invoice = invoices
        .iter_mut()
        .find(|i| i.id == invoice_id && i.user_id == user_id)
        .ok_or_else(|| LedgerError::InvoiceNotFound(invoice_id.to_string()))?;

    if invoice.status == InvoiceStatus::Paid {
        return Ok(MarkPaidOutcome::AlreadyPaid);
    }
    invoice.status = InvoiceStatus::Paid;
    let invoice = invoice.clone();

    let Some(wallet_id) = invoice.wallet_id.clone() else {
        save_list(store, INVOICES_KEY, &invoices)?;
        return Ok(MarkPaidOutcome::Paid(WalletCredit::NoWalletLinked));
    };

    let mut wallets: Vec<Wallet> = load_list(store, WALLETS_KEY)?;
    let Some(wallet) = wallets.iter_mut().find(|w| w.id == wallet_id) else {
        save_list(store, INVOICES_KEY, &invoices)?;
        return Ok(MarkPaidOutcome::Paid(WalletCredit::WalletMissing(wallet_id)));
    };
    wallet.balance += invoice.total;

    let tx = payment_entry(&invoice, &wallet_id, user_id);
    let mut txs: Vec<Transaction> = load_list(store, TRANSACTIONS_KEY)?;
    txs.push(tx.clone());

    save_list(store, INVOICES_KEY, &invoices)?;
    save_list(store, WALLETS_KEY, &wallets)?;
    save_list(store, TRANSACTIONS_KEY, &txs)?;
    Ok(MarkPaidOutcome::Paid(WalletCredit::Applied(tx)))
}

fn payment_entry(invoice: &Invoice, wallet_id: &str, user_id: &str) -> Transaction {
    Transaction {
        id: next_id("TXN-"),
        kind: TransactionKind::InvoicePayment,
        amount: invoice.total,
        description: format!("Payment received from {}", invoice.client_name),
        wallet_id: Some(wallet_id.to_string()),
        invoice_id: Some(invoice.id.clone()),
        from_wallet_id: None,
        to_wallet_id: None,
        created_at: Utc::now(),
        user_id: user_id.to_string(),
    }
}

/// A paid invoice with a linked wallet but no matching payment entry. The
/// stores cannot be written atomically, so an interrupt between the
/// invoice write and the wallet/ledger writes leaves this state behind.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileFinding {
    pub invoice_id: String,
    pub client_name: String,
    pub wallet_id: String,
    pub total: Decimal,
    pub wallet_exists: bool,
    pub repaired: bool,
}

/// Detect (and with `fix`, repair) paid invoices whose wallet credit and
/// payment entry never landed. Repair applies the missing credit and
/// appends the payment entry; dangling wallet ids are reported only.
pub fn reconcile(store: &dyn Store, user_id: &str, fix: bool) -> LedgerResult<Vec<ReconcileFinding>> {
    let invoices: Vec<Invoice> = load_list(store, INVOICES_KEY)?;
    let mut wallets: Vec<Wallet> = load_list(store, WALLETS_KEY)?;
    let mut txs: Vec<Transaction> = load_list(store, TRANSACTIONS_KEY)?;

    let mut findings = Vec::new();
    let mut dirty = false;

    for invoice in invoices
        .iter()
        .filter(|i| i.user_id == user_id && i.status == InvoiceStatus::Paid)
    {
        let Some(wallet_id) = invoice.wallet_id.clone() else {
            continue;
        };
        let settled = txs.iter().any(|t| {
            t.kind == TransactionKind::InvoicePayment
                && t.invoice_id.as_deref() == Some(invoice.id.as_str())
        });
        if settled {
            continue;
        }

        let wallet = wallets.iter_mut().find(|w| w.id == wallet_id);
        let wallet_exists = wallet.is_some();
        let mut repaired = false;
        if fix {
            if let Some(wallet) = wallet {
                wallet.balance += invoice.total;
                txs.push(payment_entry(invoice, &wallet_id, user_id));
                dirty = true;
                repaired = true;
            }
        }
        findings.push(ReconcileFinding {
            invoice_id: invoice.id.clone(),
            client_name: invoice.client_name.clone(),
            wallet_id,
            total: invoice.total,
            wallet_exists,
            repaired,
        });
    }

    if dirty {
        save_list(store, WALLETS_KEY, &wallets)?;
        save_list(store, TRANSACTIONS_KEY, &txs)?;
    }
    Ok(findings)
}
