// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::models::Wallet;
use crate::store::{SETTINGS_KEY, Store, load_record, save_record};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{}{}", ccy, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

static LAST_ID_MILLIS: Lazy<Mutex<i64>> = Lazy::new(|| Mutex::new(0));

/// Timestamp-derived id with the given prefix. Monotonic within the
/// process so two records created in the same millisecond never collide.
pub fn next_id(prefix: &str) -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID_MILLIS
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let stamp = if now > *last { now } else { *last + 1 };
    *last = stamp;
    format!("{}{}", prefix, stamp)
}

/// Display name for a possibly dangling wallet reference. Deleted wallets
/// resolve to a placeholder rather than an error.
pub fn wallet_name(wallets: &[Wallet], id: Option<&str>) -> String {
    match id {
        None => "N/A".to_string(),
        Some(id) => wallets
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.name.clone())
            .unwrap_or_else(|| "Unknown Wallet".to_string()),
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Settings {
    default_vat: Decimal,
}

pub fn get_default_vat(store: &dyn Store) -> Result<Decimal> {
    let settings: Option<Settings> = load_record(store, SETTINGS_KEY)?;
    match settings {
        Some(s) => Ok(s.default_vat),
        None => Ok(Decimal::new(75, 1)), // 7.5
    }
}

pub fn set_default_vat(store: &dyn Store, rate: Decimal) -> Result<()> {
    save_record(store, SETTINGS_KEY, &Settings { default_vat: rate })
}
