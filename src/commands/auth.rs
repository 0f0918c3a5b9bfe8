// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::auth;
use crate::store::Store;

pub fn signup(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim();
    let email = sub.get_one::<String>("email").unwrap().trim();
    let password = sub.get_one::<String>("password").unwrap();
    let session = auth::signup(store, name, email, password)?;
    println!("Welcome, {}! You are now logged in.", session.full_name);
    Ok(())
}

pub fn login(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap().trim();
    let password = sub.get_one::<String>("password").unwrap();
    let session = auth::login(store, email, password)?;
    println!("Logged in as {} <{}>", session.full_name, session.email);
    Ok(())
}

pub fn logout(store: &dyn Store) -> Result<()> {
    auth::logout(store)?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(store: &dyn Store) -> Result<()> {
    let session = auth::current_user(store)?;
    println!("{} <{}> (id: {})", session.full_name, session.email, session.id);
    Ok(())
}
