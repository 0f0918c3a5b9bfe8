// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::{auth, invoices};
use crate::store::Store;
use crate::utils::pretty_table;

pub fn handle(store: &dyn Store, sub: &clap::ArgMatches) -> Result<()> {
    let user = auth::current_user(store)?;
    let fix = sub.get_flag("fix");
    let findings = invoices::reconcile(store, &user.id, fix)?;

    if findings.is_empty() {
        println!("doctor: no issues found");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = findings
        .iter()
        .map(|f| {
            let state = if f.repaired {
                "repaired"
            } else if f.wallet_exists {
                "missing ledger entry"
            } else {
                "wallet gone; cannot repair"
            };
            vec![
                f.invoice_id.clone(),
                f.client_name.clone(),
                f.wallet_id.clone(),
                f.total.to_string(),
                state.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Invoice", "Client", "Wallet", "Total", "State"], rows)
    );
    if !fix {
        println!("Run 'kudibook doctor --fix' to apply missing credits");
    }
    Ok(())
}
