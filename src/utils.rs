// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

const UA: &str = concat!("povy-sandbox/", env!("CARGO_PKG_VERSION"));

pub fn http_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()
}

/// Parses a user-typed amount. Accepts plain decimals and exponent notation;
/// anything else (including `NaN`/`Infinity` and `1_000`) is `None`.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    // Decimal's parser skips `_` separators; typed amounts never carry them.
    if s.is_empty() || s.contains('_') {
        return None;
    }
    s.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// `"<amount to 2dp> <currency>"`, the way balances are shown everywhere.
pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{:.2} {}", d.round_dp(2), ccy)
}

pub fn fmt_optional_money(d: Option<&Decimal>, ccy: &str) -> String {
    match d {
        Some(d) => fmt_money(d, ccy),
        None => format!("— {}", ccy),
    }
}

/// Last four characters of a card number, or `0000` when there is none.
pub fn last4(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    if chars.is_empty() {
        return "0000".to_string();
    }
    chars[chars.len().saturating_sub(4)..].iter().collect()
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
