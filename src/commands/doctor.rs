// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::api::{HttpApi, PovyApi};
use crate::masks::{CARD_NUMBER_DIGITS, clean_card_number};
use crate::messages;
use crate::utils::pretty_table;

pub fn handle(api: &HttpApi) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Backend answers the accounts listing
    let accounts = match api.list_accounts() {
        Ok(accounts) => accounts,
        Err(e) => {
            rows.push(vec!["backend_unreachable".into(), e.to_string()]);
            println!("{}", pretty_table(&["Issue", "Detail"], rows));
            return Err(anyhow!(messages::ACCOUNTS_LOAD_FAILED));
        }
    };

    // 2) Every account carries a full virtual card
    for acc in &accounts {
        match &acc.card {
            None => rows.push(vec!["account_without_card".into(), acc.account_number.clone()]),
            Some(card) if clean_card_number(&card.card_number).len() != CARD_NUMBER_DIGITS => {
                rows.push(vec!["card_number_not_16_digits".into(), acc.account_number.clone()])
            }
            _ => {}
        }
    }

    if rows.is_empty() {
        println!(
            "✅ doctor: {} reachable, {} account(s)",
            api.base(),
            accounts.len()
        );
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
