// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::api::PovyApi;
use crate::masks::CardField;
use crate::pages::payments::{CardPaymentPage, PaymentPage};
use crate::render::{card_payment_page_html, layout, payment_page_html, result_rows};
use crate::utils::pretty_table;
use crate::view::{Effect, Notice, ResultContent, ResultPanel};

pub fn handle(api: &dyn PovyApi, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("account", sub)) => pay_from_account(api, sub)?,
        Some(("card", sub)) => pay_with_card(api, sub)?,
        _ => {}
    }
    Ok(())
}

fn arg(sub: &clap::ArgMatches, name: &str) -> String {
    sub.get_one::<String>(name).cloned().unwrap_or_default()
}

fn pay_from_account(api: &dyn PovyApi, sub: &clap::ArgMatches) -> Result<()> {
    let mut page = PaymentPage::default();
    page.form.account_number = arg(sub, "account");
    page.form.amount = arg(sub, "amount");
    page.form.currency = arg(sub, "currency").trim().to_uppercase();
    page.form.description = arg(sub, "description");
    page.submit(api);

    if sub.get_flag("html") {
        println!("{}", layout("Pagos", &payment_page_html(&page)?)?);
    } else {
        print_outcome(&page.error, &page.result);
    }
    Ok(())
}

fn pay_with_card(api: &dyn PovyApi, sub: &clap::ArgMatches) -> Result<()> {
    let mut page = CardPaymentPage::default();
    if sub.get_flag("interactive") {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        prompt_card_fields(&mut page, &mut input, &mut io::stdout())?;
    } else {
        for (field, name) in [
            (CardField::Number, "number"),
            (CardField::ExpMonth, "exp-month"),
            (CardField::ExpYear, "exp-year"),
            (CardField::Cvv, "cvv"),
            (CardField::Amount, "amount"),
        ] {
            page.input(field, &arg(sub, name));
        }
    }
    // Currency and description come from flags in both modes.
    page.input(CardField::Currency, &arg(sub, "currency"));
    page.input(CardField::Description, &arg(sub, "description"));
    page.submit(api);

    if sub.get_flag("html") {
        println!("{}", layout("Pago con tarjeta", &card_payment_page_html(&page)?)?);
    } else {
        print_outcome(&page.error, &page.result);
    }
    Ok(())
}

/// Prompts for the card fields the way the form's focus moves: a masked
/// field keeps the prompt until it is complete or left blank.
pub fn prompt_card_fields(
    page: &mut CardPaymentPage,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let mut field = Some(CardField::Number);
    while let Some(current) = field {
        write!(
            out,
            "[{} {}] {}: ",
            page.form.preview_number(),
            page.form.preview_expiry(),
            current.label()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Read card field")? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        field = match page.input(current, line) {
            Effect::Focus(next) => Some(next),
            _ if line.trim().is_empty() || current.digit_limit().is_none() => {
                after_in_tab_order(current)
            }
            _ => Some(current),
        };
    }
    Ok(())
}

fn after_in_tab_order(field: CardField) -> Option<CardField> {
    match field {
        CardField::Amount => None,
        other => other.next(),
    }
}

fn print_outcome(error: &Notice, panel: &ResultPanel) {
    if panel.content == ResultContent::Empty {
        if error.is_visible() {
            println!("{}", error.text());
        }
        return;
    }
    let rows = result_rows(&panel.content)
        .into_iter()
        .map(|(label, value)| vec![label.to_string(), value])
        .collect();
    println!("{}", pretty_table(&["Campo", "Valor"], rows));
}
