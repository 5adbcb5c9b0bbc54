// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use std::io::Cursor;

use common::{Call, FakeApi, account};
use povy_sandbox::commands::{accounts, pay};
use povy_sandbox::pages::payments::CardPaymentPage;
use povy_sandbox::{cli, messages};

#[test]
fn global_api_flags_parse_anywhere() {
    let m = cli::build_cli().get_matches_from([
        "povy",
        "account",
        "list",
        "--local",
        "--api-base",
        "http://x.test/api",
    ]);
    assert!(m.get_flag("local"));
    assert_eq!(
        m.get_one::<String>("api-base").map(String::as_str),
        Some("http://x.test/api")
    );
}

#[test]
fn show_accepts_account_or_url() {
    let m = cli::build_cli().get_matches_from(["povy", "account", "show", "ACC 1"]);
    let Some(("account", acc)) = m.subcommand() else {
        panic!("no account subcommand");
    };
    let Some(("show", show)) = acc.subcommand() else {
        panic!("no show subcommand");
    };
    let loc = accounts::detail_location(show).unwrap();
    assert_eq!(loc.query_param("account").as_deref(), Some("ACC 1"));

    let m = cli::build_cli().get_matches_from([
        "povy",
        "account",
        "show",
        "--url",
        "https://povy.dev/account.html?account=ACC-7",
    ]);
    let (_, acc) = m.subcommand().unwrap();
    let (_, show) = acc.subcommand().unwrap();
    let loc = accounts::detail_location(show).unwrap();
    assert_eq!(loc.query_param("account").as_deref(), Some("ACC-7"));

    assert!(
        cli::build_cli()
            .try_get_matches_from(["povy", "account", "show"])
            .is_err()
    );
}

#[test]
fn topup_accepts_negative_amount_for_client_side_rejection() {
    let api = FakeApi::with_accounts(vec![account("ACC-0001", "Ana", "10", "USD")]);
    let m = cli::build_cli().get_matches_from(["povy", "account", "topup", "ACC-0001", "-5"]);
    let (_, acc) = m.subcommand().unwrap();
    accounts::handle(&api, acc).unwrap();
    assert!(
        !api.calls()
            .iter()
            .any(|c| matches!(c, Call::UpdateAccount(..)))
    );
}

#[test]
fn rm_with_yes_deletes_and_lists() {
    let api = FakeApi::with_accounts(vec![account("ACC-0001", "Ana", "10", "USD")]);
    let m = cli::build_cli().get_matches_from(["povy", "account", "rm", "ACC-0001", "--yes"]);
    let (_, acc) = m.subcommand().unwrap();
    accounts::handle(&api, acc).unwrap();

    let calls = api.calls();
    assert!(calls.contains(&Call::DeleteAccount("ACC-0001".into())));
    assert_eq!(calls.last(), Some(&Call::ListAccounts));
}

#[test]
fn pay_card_flags_go_through_masking() {
    let api = FakeApi::default();
    let m = cli::build_cli().get_matches_from([
        "povy",
        "pay",
        "card",
        "--number",
        "4111-1111-1111-1111",
        "--exp-month",
        "8/",
        "--exp-year",
        "2029",
        "--cvv",
        "123",
        "--amount",
        "12.5",
        "--currency",
        "usd",
    ]);
    let (_, pay_m) = m.subcommand().unwrap();
    pay::handle(&api, pay_m).unwrap();

    let calls = api.calls();
    let Some(Call::PayWithCard(req)) = calls.first() else {
        panic!("card payment not sent: {calls:?}");
    };
    assert_eq!(req.card_number, "4111111111111111");
    assert_eq!(req.exp_month, "8");
    assert_eq!(req.exp_year, "20");
    assert_eq!(req.currency, "USD");
}

#[test]
fn interactive_prompt_follows_focus() {
    let mut page = CardPaymentPage::default();
    // The incomplete "4111" keeps the number prompt; the blank line skips the month.
    let typed = "4111\n4111 1111 1111 1111\n\n29\n12\n123\n10\n";
    let mut input = Cursor::new(typed.as_bytes());
    let mut out = Vec::new();
    pay::prompt_card_fields(&mut page, &mut input, &mut out).unwrap();

    let shown = String::from_utf8(out).unwrap();
    assert_eq!(shown.matches("Número de tarjeta").count(), 2);
    assert_eq!(shown.matches("Mes (MM)").count(), 1);
    assert_eq!(shown.matches("Año (YY)").count(), 1);
    // "12" was typed at the CVV prompt and is incomplete, so it asks again.
    assert_eq!(shown.matches("CVV").count(), 2);
    assert!(shown.contains("[4111 1111 1111 1111 --/29]"));
    assert_eq!(page.form.cvv, "123");
    assert_eq!(page.form.amount, "10");
    assert!(page.form.exp_month.is_empty());

    let api = FakeApi::default();
    page.submit(&api);
    assert!(api.calls().is_empty());
    assert_eq!(page.error.text(), messages::CARD_REQUIRED_FIELDS);
}
