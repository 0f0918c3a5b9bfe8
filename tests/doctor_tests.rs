// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kudibook::ledger::invoices::{self, NewInvoice};
use kudibook::ledger::{auth, transactions, wallets};
use kudibook::models::{InvoicePatch, InvoiceStatus, SessionUser, WalletKind};
use kudibook::store::MemoryStore;
use kudibook::utils::parse_date;
use rust_decimal_macros::dec;

fn setup() -> (MemoryStore, SessionUser) {
    let store = MemoryStore::new();
    let user = auth::signup(&store, "Ada Obi", "ada@example.com", "hunter2").unwrap();
    (store, user)
}

/// A paid-with-wallet invoice whose credit never landed: editing the
/// status field directly bypasses the mark-paid path, which is exactly the
/// torn state reconciliation exists for.
fn torn_state(store: &MemoryStore, user: &SessionUser) -> (String, String) {
    let wallet = wallets::add(
        store,
        wallets::NewWallet {
            name: "Bank".into(),
            kind: WalletKind::Bank,
            balance: dec!(0),
            account_number: None,
            currency: "₦".into(),
            color: "#6366f1".into(),
        },
    )
    .unwrap();
    let invoice = invoices::add(
        store,
        &user.id,
        NewInvoice {
            client_name: "Acme Ltd".into(),
            client_email: "billing@acme.test".into(),
            amount: dec!(1000),
            vat: dec!(7.5),
            due_date: parse_date("2026-11-01").unwrap(),
            status: InvoiceStatus::Pending,
            wallet_id: Some(wallet.id.clone()),
        },
    )
    .unwrap();
    invoices::update(
        store,
        &invoice.id,
        InvoicePatch {
            status: Some(InvoiceStatus::Paid),
            ..Default::default()
        },
    )
    .unwrap();
    (invoice.id, wallet.id)
}

#[test]
fn reconcile_detects_missing_ledger_entry() {
    let (store, user) = setup();
    let (invoice_id, wallet_id) = torn_state(&store, &user);

    let findings = invoices::reconcile(&store, &user.id, false).unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].invoice_id, invoice_id);
    assert_eq!(findings[0].wallet_id, wallet_id);
    assert!(findings[0].wallet_exists);
    assert!(!findings[0].repaired);

    // Detection alone changes nothing.
    assert_eq!(wallets::find(&store, &wallet_id).unwrap().balance, dec!(0));
    assert!(transactions::by_invoice(&store, &user.id, &invoice_id).unwrap().is_empty());
}

#[test]
fn reconcile_fix_repairs_exactly_once() {
    let (store, user) = setup();
    let (invoice_id, wallet_id) = torn_state(&store, &user);

    let findings = invoices::reconcile(&store, &user.id, true).unwrap();
    assert_eq!(findings.len(), 1);
    assert!(findings[0].repaired);

    assert_eq!(wallets::find(&store, &wallet_id).unwrap().balance, dec!(1075));
    assert_eq!(
        transactions::by_invoice(&store, &user.id, &invoice_id).unwrap().len(),
        1
    );

    // A second pass finds nothing to do.
    assert!(invoices::reconcile(&store, &user.id, true).unwrap().is_empty());
    assert_eq!(wallets::find(&store, &wallet_id).unwrap().balance, dec!(1075));
}

#[test]
fn reconcile_reports_dangling_wallet_without_repair() {
    let (store, user) = setup();
    let (invoice_id, wallet_id) = torn_state(&store, &user);
    wallets::delete(&store, &wallet_id).unwrap();

    let findings = invoices::reconcile(&store, &user.id, true).unwrap();
    assert_eq!(findings.len(), 1);
    assert!(!findings[0].wallet_exists);
    assert!(!findings[0].repaired);
    assert!(transactions::by_invoice(&store, &user.id, &invoice_id).unwrap().is_empty());
}

#[test]
fn reconcile_ignores_settled_and_walletless_invoices() {
    let (store, user) = setup();
    // Settled through the real path.
    let wallet = wallets::add(
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
    let settled = invoices::add(
        &store,
        &user.id,
        NewInvoice {
            client_name: "Acme Ltd".into(),
            client_email: "billing@acme.test".into(),
            amount: dec!(100),
            vat: dec!(0),
            due_date: parse_date("2026-11-01").unwrap(),
            status: InvoiceStatus::Pending,
            wallet_id: Some(wallet.id.clone()),
        },
    )
    .unwrap();
    invoices::mark_paid(&store, &user.id, &settled.id).unwrap();
    // Paid but never linked to a wallet.
    invoices::add(
        &store,
        &user.id,
        NewInvoice {
            client_name: "Beta Co".into(),
            client_email: "pay@beta.test".into(),
            amount: dec!(50),
            vat: dec!(0),
            due_date: parse_date("2026-11-01").unwrap(),
            status: InvoiceStatus::Paid,
            wallet_id: None,
        },
    )
    .unwrap();

    assert!(invoices::reconcile(&store, &user.id, false).unwrap().is_empty());
}
