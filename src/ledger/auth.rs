// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, SessionUser};
use crate::store::{SESSION_KEY, Store, USERS_KEY, load_list, load_record, save_list, save_record};
use crate::utils::next_id;

/// Create an account and make it the active session. Email uniqueness is
/// enforced here and only here.
pub fn signup(
    store: &dyn Store,
    full_name: &str,
    email: &str,
    password: &str,
) -> LedgerResult<SessionUser> {
    let mut users: Vec<Account> = load_list(store, USERS_KEY)?;
    if users.iter().any(|u| u.email == email) {
        return Err(LedgerError::EmailTaken(email.to_string()));
    }

    let account = Account {
        id: next_id(""),
        email: email.to_string(),
        full_name: full_name.to_string(),
        password: password.to_string(),
    };
    users.push(account.clone());
    save_list(store, USERS_KEY, &users)?;

    let session = SessionUser {
        id: account.id,
        email: account.email,
        full_name: account.full_name,
    };
    save_record(store, SESSION_KEY, &session)?;
    Ok(session)
}

pub fn login(store: &dyn Store, email: &str, password: &str) -> LedgerResult<SessionUser> {
    let users: Vec<Account> = load_list(store, USERS_KEY)?;
    let account = users
        .iter()
        .find(|u| u.email == email && u.password == password)
        .ok_or(LedgerError::InvalidCredentials)?;

    let session = SessionUser {
        id: account.id.clone(),
        email: account.email.clone(),
        full_name: account.full_name.clone(),
    };
    save_record(store, SESSION_KEY, &session)?;
    Ok(session)
}

pub fn logout(store: &dyn Store) -> LedgerResult<()> {
    store.remove(SESSION_KEY)?;
    Ok(())
}

/// The persisted session, if any. Sessions never expire; only `logout`
/// tears one down.
pub fn current_user(store: &dyn Store) -> LedgerResult<SessionUser> {
    load_record(store, SESSION_KEY)?.ok_or(LedgerError::NoSession)
}
