// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kudibook::error::LedgerError;
use kudibook::ledger::invoices::{self, MarkPaidOutcome, NewInvoice, WalletCredit};
use kudibook::ledger::{auth, transactions, wallets};
use kudibook::models::{InvoiceStatus, SessionUser, TransactionKind, WalletKind};
use kudibook::store::MemoryStore;
use kudibook::utils::parse_date;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn setup() -> (MemoryStore, SessionUser) {
    let store = MemoryStore::new();
    let user = auth::signup(&store, "Ada Obi", "ada@example.com", "hunter2").unwrap();
    (store, user)
}

fn cash_wallet(store: &MemoryStore, balance: Decimal) -> kudibook::models::Wallet {
    wallets::add(
        store,
        wallets::NewWallet {
            name: "Cash Box".into(),
            kind: WalletKind::Cash,
            balance,
            account_number: None,
            currency: "₦".into(),
            color: "#10b981".into(),
        },
    )
    .unwrap()
}

fn pending_invoice(
    store: &MemoryStore,
    user: &SessionUser,
    wallet_id: Option<String>,
) -> kudibook::models::Invoice {
    invoices::add(
        store,
        &user.id,
        NewInvoice {
            client_name: "Acme Ltd".into(),
            client_email: "billing@acme.test".into(),
            amount: dec!(10000),
            vat: dec!(7.5),
            due_date: parse_date("2026-09-30").unwrap(),
            status: InvoiceStatus::Pending,
            wallet_id,
        },
    )
    .unwrap()
}

#[test]
fn mark_paid_credits_wallet_and_appends_one_entry() {
    let (store, user) = setup();
    let wallet = cash_wallet(&store, dec!(5000));
    let invoice = pending_invoice(&store, &user, Some(wallet.id.clone()));

    let outcome = invoices::mark_paid(&store, &user.id, &invoice.id).unwrap();
    let tx = match outcome {
        MarkPaidOutcome::Paid(WalletCredit::Applied(tx)) => tx,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(tx.kind, TransactionKind::InvoicePayment);
    assert_eq!(tx.amount, dec!(10750));
    assert_eq!(tx.invoice_id.as_deref(), Some(invoice.id.as_str()));
    assert_eq!(tx.wallet_id.as_deref(), Some(wallet.id.as_str()));
    assert_eq!(tx.description, "Payment received from Acme Ltd");

    let wallet_after = wallets::find(&store, &wallet.id).unwrap();
    assert_eq!(wallet_after.balance, dec!(15750));

    let updated = invoices::find(&store, &user.id, &invoice.id).unwrap();
    assert_eq!(updated.status, InvoiceStatus::Paid);

    let entries = transactions::by_invoice(&store, &user.id, &invoice.id).unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn mark_paid_without_wallet_changes_status_only() {
    let (store, user) = setup();
    let invoice = pending_invoice(&store, &user, None);

    let outcome = invoices::mark_paid(&store, &user.id, &invoice.id).unwrap();
    assert!(matches!(
        outcome,
        MarkPaidOutcome::Paid(WalletCredit::NoWalletLinked)
    ));

    let updated = invoices::find(&store, &user.id, &invoice.id).unwrap();
    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert!(transactions::list_for_user(&store, &user.id).unwrap().is_empty());
}

#[test]
fn mark_paid_is_idempotent() {
    let (store, user) = setup();
    let wallet = cash_wallet(&store, Decimal::ZERO);
    let invoice = pending_invoice(&store, &user, Some(wallet.id.clone()));

    invoices::mark_paid(&store, &user.id, &invoice.id).unwrap();
    let second = invoices::mark_paid(&store, &user.id, &invoice.id).unwrap();
    assert!(matches!(second, MarkPaidOutcome::AlreadyPaid));

    // No double credit, no duplicate ledger entry.
    let wallet_after = wallets::find(&store, &wallet.id).unwrap();
    assert_eq!(wallet_after.balance, dec!(10750));
    let entries = transactions::by_invoice(&store, &user.id, &invoice.id).unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn mark_paid_missing_invoice_is_an_error() {
    let (store, user) = setup();
    let err = invoices::mark_paid(&store, &user.id, "INV-0").unwrap_err();
    assert!(matches!(err, LedgerError::InvoiceNotFound(_)));
}

#[test]
fn mark_paid_with_dangling_wallet_skips_credit() {
    let (store, user) = setup();
    let wallet = cash_wallet(&store, dec!(100));
    let invoice = pending_invoice(&store, &user, Some(wallet.id.clone()));
    wallets::delete(&store, &wallet.id).unwrap();

    let outcome = invoices::mark_paid(&store, &user.id, &invoice.id).unwrap();
    match outcome {
        MarkPaidOutcome::Paid(WalletCredit::WalletMissing(id)) => assert_eq!(id, wallet.id),
        other => panic!("unexpected outcome: {:?}", other),
    }

    let updated = invoices::find(&store, &user.id, &invoice.id).unwrap();
    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert!(transactions::list_for_user(&store, &user.id).unwrap().is_empty());
}

#[test]
fn mark_paid_scoped_to_owning_user() {
    let (store, user) = setup();
    let invoice = pending_invoice(&store, &user, None);
    let other = auth::signup(&store, "Bisi Ade", "bisi@example.com", "pw").unwrap();

    let err = invoices::mark_paid(&store, &other.id, &invoice.id).unwrap_err();
    assert!(matches!(err, LedgerError::InvoiceNotFound(_)));
    let untouched = invoices::find(&store, &user.id, &invoice.id).unwrap();
    assert_eq!(untouched.status, InvoiceStatus::Pending);
}
