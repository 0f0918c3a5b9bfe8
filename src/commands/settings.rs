// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Store;
use crate::utils::{get_default_vat, parse_decimal, set_default_vat};

pub fn handle(store: &dyn Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            println!("Default VAT rate: {}%", get_default_vat(store)?);
        }
        Some(("set", sub)) => {
            // --vat is a required arg, so clap rejects a bare `settings set`.
            let s = sub.get_one::<String>("vat").unwrap();
            let rate = parse_decimal(s.trim())?;
            set_default_vat(store, rate)?;
            println!("Default VAT rate set to {}%", rate);
        }
        _ => {}
    }
    Ok(())
}
