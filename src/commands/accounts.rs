// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::info;

use crate::api::PovyApi;
use crate::clipboard::{CopyButton, Osc52};
use crate::masks::clean_card_number;
use crate::pages::account_detail::AccountDetailPage;
use crate::pages::accounts::AccountsPage;
use crate::render::{
    TransactionView, account_detail_html, account_last4, accounts_html, layout, masked_card,
};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::view::{ACCOUNTS_HREF, Effect, Location, account_href};

pub fn handle(api: &dyn PovyApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let page = AccountsPage::open(api);
            print_accounts(&page, sub)?;
        }
        Some(("create", sub)) => {
            let mut page = AccountsPage::default();
            page.owner_name = sub.get_one::<String>("owner").cloned().unwrap_or_default();
            page.create(api);
            print_accounts(&page, sub)?;
        }
        Some(("show", sub)) => {
            let page = AccountDetailPage::open(api, &detail_location(sub)?);
            print_detail(&page, sub)?;
        }
        Some(("currency", sub)) => {
            let mut page = AccountDetailPage::open(api, &detail_location(sub)?);
            let ccy = sub.get_one::<String>("currency").unwrap().trim().to_uppercase();
            page.change_currency(api, &ccy);
            print_detail(&page, sub)?;
        }
        Some(("topup", sub)) => {
            let mut page = AccountDetailPage::open(api, &detail_location(sub)?);
            let raw = sub.get_one::<String>("amount").unwrap();
            page.add_balance(api, raw);
            print_detail(&page, sub)?;
        }
        Some(("rm", sub)) => remove(api, sub)?,
        Some(("copy-card", sub)) => copy_card(api, sub)?,
        _ => {}
    }
    Ok(())
}

/// Detail page location from `--url`, or built from the account argument.
pub fn detail_location(sub: &clap::ArgMatches) -> Result<Location> {
    let href = match sub.try_get_one::<String>("url").ok().flatten() {
        Some(url) => url.clone(),
        None => account_href(sub.get_one::<String>("account").unwrap().trim()),
    };
    Location::parse(&href).with_context(|| format!("Invalid page URL '{}'", href))
}

fn remove(api: &dyn PovyApi, sub: &clap::ArgMatches) -> Result<()> {
    let mut page = AccountDetailPage::open(api, &detail_location(sub)?);
    if page.error.is_visible() {
        println!("{}", page.error.text());
        return Ok(());
    }
    let skip_prompt = sub.get_flag("yes");
    let effect = page.delete(api, |question| skip_prompt || confirm_on_stdin(question));
    match effect {
        Effect::Navigate(href) => {
            info!(to = %href, "navigating");
            if href == ACCOUNTS_HREF {
                let list = AccountsPage::open(api);
                print_accounts_table(&list);
            }
        }
        _ if page.error.is_visible() => println!("{}", page.error.text()),
        _ => println!("Cancelado."),
    }
    Ok(())
}

fn confirm_on_stdin(question: &str) -> bool {
    print!("{} [s/N] ", question);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "s" | "si" | "sí" | "y" | "yes")
}

fn copy_card(api: &dyn PovyApi, sub: &clap::ArgMatches) -> Result<()> {
    let page = AccountDetailPage::open(api, &detail_location(sub)?);
    let Some(account) = &page.account else {
        println!("{}", page.error.text());
        return Ok(());
    };
    let number = account
        .card
        .as_ref()
        .map(|c| clean_card_number(&c.card_number))
        .unwrap_or_default();

    let mut button = CopyButton::new("Copiar tarjeta");
    let mut clipboard = Osc52::new(io::stdout());
    let now = Instant::now();
    if button.click(&mut clipboard, &number, now) {
        println!("{}: {}", button.label_at(now), masked_card(&account_last4(account)));
    } else {
        println!("{}", button.label_at(now));
    }
    Ok(())
}

fn print_accounts(page: &AccountsPage, sub: &clap::ArgMatches) -> Result<()> {
    if sub.get_flag("html") {
        println!("{}", layout("Cuentas", &accounts_html(&page.list)?)?);
        return Ok(());
    }
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &page.list.accounts)? {
        return Ok(());
    }
    print_accounts_table(page);
    Ok(())
}

fn print_accounts_table(page: &AccountsPage) {
    if page.list.empty.is_visible() {
        println!("{}", page.list.empty.text());
        return;
    }
    let rows = page
        .list
        .accounts
        .iter()
        .map(|a| {
            vec![
                a.account_number.clone(),
                a.owner_name.clone(),
                fmt_money(&a.balance, &a.currency),
                a.currency.clone(),
                masked_card(&account_last4(a)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Cuenta", "Titular", "Saldo", "Moneda", "Tarjeta"], rows)
    );
}

pub fn print_detail(page: &AccountDetailPage, sub: &clap::ArgMatches) -> Result<()> {
    if sub.get_flag("html") {
        println!("{}", layout("Cuenta", &account_detail_html(page)?)?);
        return Ok(());
    }
    let json = sub.try_get_one::<bool>("json").ok().flatten().copied().unwrap_or(false);
    let jsonl = sub.try_get_one::<bool>("jsonl").ok().flatten().copied().unwrap_or(false);
    if let Some(account) = &page.account {
        #[derive(serde::Serialize)]
        struct Detail<'a> {
            account: &'a crate::models::Account,
            transactions: &'a [crate::models::Transaction],
        }
        let detail = Detail {
            account,
            transactions: &page.history.transactions,
        };
        if maybe_print_json(json, jsonl, &detail)? {
            return Ok(());
        }
    }

    if page.error.is_visible() {
        println!("{}", page.error.text());
    }
    let Some(account) = &page.account else {
        return Ok(());
    };

    let card = account.card.as_ref();
    let rows = vec![
        vec!["Cuenta".into(), account.account_number.clone()],
        vec!["Titular".into(), account.owner_name.clone()],
        vec!["Saldo".into(), fmt_money(&account.balance, &account.currency)],
        vec!["Moneda".into(), page.currency.clone()],
        vec![
            "Tarjeta".into(),
            crate::masks::format_card_number_pretty(card.map(|c| c.card_number.as_str()).unwrap_or("")),
        ],
        vec![
            "Vence".into(),
            card.map(|c| format!("{}/{}", c.exp_month, c.exp_year))
                .unwrap_or_else(|| "--/--".into()),
        ],
        vec!["CVV".into(), card.map(|c| c.cvv.clone()).unwrap_or_default()],
    ];
    println!("{}", pretty_table(&["Campo", "Valor"], rows));

    if page.history.empty.is_visible() {
        println!("{}", page.history.empty.text());
        return Ok(());
    }
    let rows = page
        .history
        .transactions
        .iter()
        .map(|tx| {
            let v = TransactionView::from(tx);
            vec![
                v.time.unwrap_or_default(),
                v.type_label.to_string(),
                v.description,
                v.origin,
                v.amount,
                v.balance_after,
                v.transaction_id.unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Fecha", "Tipo", "Descripción", "Origen", "Monto", "Saldo después", "ID"],
            rows
        )
    );
    Ok(())
}
