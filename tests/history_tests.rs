// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kudibook::commands::history;
use kudibook::ledger::invoices::{self, NewInvoice};
use kudibook::ledger::{auth, transactions, wallets};
use kudibook::models::{InvoiceStatus, SessionUser, TransactionKind, WalletKind};
use kudibook::store::MemoryStore;
use kudibook::utils::parse_date;
use rust_decimal_macros::dec;

fn setup() -> (MemoryStore, SessionUser, kudibook::models::Wallet) {
    let store = MemoryStore::new();
    let user = auth::signup(&store, "Ada Obi", "ada@example.com", "hunter2").unwrap();
    let wallet = wallets::add(
        &store,
        wallets::NewWallet {
            name: "Bank".into(),
            kind: WalletKind::Bank,
            balance: dec!(1000),
            account_number: Some("0123456789".into()),
            currency: "₦".into(),
            color: "#6366f1".into(),
        },
    )
    .unwrap();
    (store, user, wallet)
}

#[test]
fn listing_is_newest_first() {
    let (store, user, wallet) = setup();
    let first = wallets::deposit(&store, &user.id, &wallet.id, dec!(1), None).unwrap();
    let second = wallets::deposit(&store, &user.id, &wallet.id, dec!(2), None).unwrap();
    let third = wallets::withdraw(&store, &user.id, &wallet.id, dec!(3), None).unwrap();

    let listed = transactions::list_for_user(&store, &user.id).unwrap();
    let ids: Vec<&str> = listed.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![third.id.as_str(), second.id.as_str(), first.id.as_str()]);
}

#[test]
fn listing_is_scoped_to_the_user() {
    let (store, user, wallet) = setup();
    wallets::deposit(&store, &user.id, &wallet.id, dec!(5), None).unwrap();

    let other = auth::signup(&store, "Bisi Ade", "bisi@example.com", "pw").unwrap();
    assert!(transactions::list_for_user(&store, &other.id).unwrap().is_empty());
}

#[test]
fn invoice_filter_matches_payment_entries() {
    let (store, user, wallet) = setup();
    let invoice = invoices::add(
        &store,
        &user.id,
        NewInvoice {
            client_name: "Acme Ltd".into(),
            client_email: "billing@acme.test".into(),
            amount: dec!(200),
            vat: dec!(7.5),
            due_date: parse_date("2026-10-01").unwrap(),
            status: InvoiceStatus::Unpaid,
            wallet_id: Some(wallet.id.clone()),
        },
    )
    .unwrap();
    invoices::mark_paid(&store, &user.id, &invoice.id).unwrap();
    wallets::deposit(&store, &user.id, &wallet.id, dec!(50), None).unwrap();

    let by_invoice = transactions::by_invoice(&store, &user.id, &invoice.id).unwrap();
    assert_eq!(by_invoice.len(), 1);
    assert_eq!(by_invoice[0].kind, TransactionKind::InvoicePayment);

    let by_wallet = transactions::by_wallet(&store, &user.id, &wallet.id).unwrap();
    assert_eq!(by_wallet.len(), 2);
}

#[test]
fn totals_split_income_and_expenses() {
    let (store, user, wallet) = setup();
    let other = wallets::add(
        &store,
        wallets::NewWallet {
            name: "Cash".into(),
            kind: WalletKind::Cash,
            balance: dec!(0),
            account_number: None,
            currency: "₦".into(),
            color: "#10b981".into(),
        },
    )
    .unwrap();

    wallets::deposit(&store, &user.id, &wallet.id, dec!(100), None).unwrap();
    wallets::withdraw(&store, &user.id, &wallet.id, dec!(40), None).unwrap();
    // Transfers are neither income nor expense.
    wallets::transfer(&store, &user.id, &wallet.id, &other.id, dec!(25), None).unwrap();

    let totals = history::totals(&store, &user.id).unwrap();
    assert_eq!(totals.income, dec!(100));
    assert_eq!(totals.expenses, dec!(40));
    assert_eq!(totals.count, 3);
}
