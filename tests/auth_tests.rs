// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kudibook::error::LedgerError;
use kudibook::ledger::auth;
use kudibook::models::Account;
use kudibook::store::{MemoryStore, USERS_KEY, load_list};

#[test]
fn signup_creates_account_and_session() {
    let store = MemoryStore::new();
    let session = auth::signup(&store, "Ada Obi", "ada@example.com", "hunter2").unwrap();
    assert_eq!(session.email, "ada@example.com");
    assert_eq!(session.full_name, "Ada Obi");

    let current = auth::current_user(&store).unwrap();
    assert_eq!(current.id, session.id);

    let users: Vec<Account> = load_list(&store, USERS_KEY).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].password, "hunter2");
}

#[test]
fn signup_rejects_duplicate_email_and_keeps_session() {
    let store = MemoryStore::new();
    let first = auth::signup(&store, "Ada Obi", "ada@example.com", "hunter2").unwrap();

    let err = auth::signup(&store, "Other Ada", "ada@example.com", "pw2").unwrap_err();
    assert!(matches!(err, LedgerError::EmailTaken(_)));

    let users: Vec<Account> = load_list(&store, USERS_KEY).unwrap();
    assert_eq!(users.len(), 1);
    // Active session still belongs to the original signup.
    assert_eq!(auth::current_user(&store).unwrap().id, first.id);
}

#[test]
fn login_requires_exact_credentials() {
    let store = MemoryStore::new();
    auth::signup(&store, "Ada Obi", "ada@example.com", "hunter2").unwrap();
    auth::logout(&store).unwrap();

    let err = auth::login(&store, "ada@example.com", "wrong").unwrap_err();
    assert!(matches!(err, LedgerError::InvalidCredentials));
    // Unknown email fails with the same generic error.
    let err = auth::login(&store, "nobody@example.com", "hunter2").unwrap_err();
    assert_eq!(err.to_string(), "Invalid email or password");

    let session = auth::login(&store, "ada@example.com", "hunter2").unwrap();
    assert_eq!(session.email, "ada@example.com");
}

#[test]
fn logout_clears_the_session() {
    let store = MemoryStore::new();
    auth::signup(&store, "Ada Obi", "ada@example.com", "hunter2").unwrap();
    auth::logout(&store).unwrap();
    let err = auth::current_user(&store).unwrap_err();
    assert!(matches!(err, LedgerError::NoSession));
}

#[test]
fn session_never_carries_the_password() {
    let store = MemoryStore::new();
    auth::signup(&store, "Ada Obi", "ada@example.com", "hunter2").unwrap();
    let raw = kudibook::store::Store::read(&store, "user").unwrap().unwrap();
    assert!(!raw.contains("hunter2"));
    assert!(!raw.contains("password"));
}
