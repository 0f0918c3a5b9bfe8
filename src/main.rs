// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use kudibook::{cli, commands, store};
use kudibook::store::Store;

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let json_store = store::JsonStore::open_default()?;
    let store: &dyn Store = &json_store;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Data directory initialized at {}", json_store.dir().display());
        }
        Some(("signup", sub)) => commands::auth::signup(store, sub)?,
        Some(("login", sub)) => commands::auth::login(store, sub)?,
        Some(("logout", _)) => commands::auth::logout(store)?,
        Some(("whoami", _)) => commands::auth::whoami(store)?,
        Some(("wallet", sub)) => commands::wallets::handle(store, sub)?,
        Some(("invoice", sub)) => commands::invoices::handle(store, sub)?,
        Some(("history", sub)) => commands::history::handle(store, sub)?,
        Some(("report", sub)) => commands::report::handle(store, sub)?,
        Some(("doctor", sub)) => commands::doctor::handle(store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(store, sub)?,
        Some(("settings", sub)) => commands::settings::handle(store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
