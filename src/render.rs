// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! HTML fragments for each page, plus the display view-models the terminal
//! output shares with them.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Utc};
use handlebars::Handlebars;
use once_cell::sync::OnceCell;
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::RenderError;
use crate::masks::format_card_number_pretty;
use crate::messages;
use crate::models::{Account, PaymentResult, Transaction};
use crate::pages::account_detail::{AccountDetailPage, TransactionHistory};
use crate::pages::accounts::AccountList;
use crate::pages::payments::{CardPaymentPage, PaymentPage};
use crate::utils::{fmt_money, fmt_optional_money, last4};
use crate::view::{Button, Notice, ResultContent, ResultPanel, account_href};

pub type Result<T> = std::result::Result<T, RenderError>;

static TEMPLATES: OnceCell<Handlebars<'static>> = OnceCell::new();

// Every template is also a partial, so pages pull fragments in with `{{> name}}`.
fn templates() -> Result<&'static Handlebars<'static>> {
    TEMPLATES.get_or_try_init(|| {
        let mut hb = Handlebars::new();
        for (name, source) in [
            ("notice", include_str!("templates/notice.hbs")),
            ("account_card", include_str!("templates/account_card.hbs")),
            ("accounts", include_str!("templates/accounts.hbs")),
            ("transaction", include_str!("templates/transaction.hbs")),
            ("transactions", include_str!("templates/transactions.hbs")),
            ("account_detail", include_str!("templates/account_detail.hbs")),
            ("result_panel", include_str!("templates/result_panel.hbs")),
            ("payment_page", include_str!("templates/payment_page.hbs")),
            ("card_payment_page", include_str!("templates/card_payment_page.hbs")),
            ("layout", include_str!("templates/layout.hbs")),
        ] {
            hb.register_template_string(name, source)?;
        }
        Ok(hb)
    })
}

fn render<T: Serialize>(name: &str, data: &T) -> Result<String> {
    Ok(templates()?.render(name, data)?)
}

pub fn masked_card(last4: &str) -> String {
    format!("•••• •••• •••• {}", last4)
}

pub fn account_last4(account: &Account) -> String {
    match &account.card {
        Some(card) => last4(&card.card_number),
        None => last4(""),
    }
}

fn notice_data(id: &str, notice: &Notice) -> Value {
    json!({
        "id": id,
        "text": notice.text(),
        "hidden": !notice.is_visible(),
    })
}

fn button_data(button: &Button) -> Value {
    json!({
        "label": button.label(),
        "disabled": button.is_disabled(),
    })
}

// ---------------------------------------------------------------------------
// Accounts list
// ---------------------------------------------------------------------------

fn account_card_data(account: &Account) -> Value {
    json!({
        // Percent-encoded, so it goes into the attribute unescaped.
        "href": account_href(&account.account_number),
        "number": account.account_number,
        "currency": account.currency,
        "owner": account.owner_name,
        "balance": fmt_money(&account.balance, &account.currency),
        "card": masked_card(&account_last4(account)),
    })
}

pub fn account_card_html(account: &Account) -> Result<String> {
    render("account_card", &account_card_data(account))
}

pub fn accounts_html(list: &AccountList) -> Result<String> {
    let accounts: Vec<Value> = list.accounts.iter().map(account_card_data).collect();
    render(
        "accounts",
        &json!({
            "accounts": accounts,
            "empty": notice_data("accounts-empty", &list.empty),
        }),
    )
}

// ---------------------------------------------------------------------------
// Account detail and history
// ---------------------------------------------------------------------------

fn history_data(history: &TransactionHistory) -> Value {
    let transactions: Vec<TransactionView> =
        history.transactions.iter().map(TransactionView::from).collect();
    json!({
        "transactions": transactions,
        "empty": notice_data("tx-empty", &history.empty),
    })
}

pub fn account_detail_html(page: &AccountDetailPage) -> Result<String> {
    let account = page.account.as_ref().map(|account| {
        let (number, exp, cvv) = match &account.card {
            Some(card) => (
                format_card_number_pretty(&card.card_number),
                format!("{}/{}", card.exp_month, card.exp_year),
                card.cvv.clone(),
            ),
            None => (format_card_number_pretty(""), "--/--".to_string(), "---".to_string()),
        };
        json!({
            "number": account.account_number,
            "owner": account.owner_name,
            "balance": fmt_money(&account.balance, &account.currency),
            "currency": page.currency,
            "card_number": number,
            "card_exp": exp,
            "card_cvv": cvv,
        })
    });
    render(
        "account_detail",
        &json!({
            "error": notice_data("account-error", &page.error),
            "account": account,
            "history": history_data(&page.history),
        }),
    )
}

/// Type label for a transaction `source`.
pub fn type_label(source: Option<&str>) -> &'static str {
    match source {
        Some("manual_topup") => "RECARGA",
        Some("account_payment") => "PAGO CUENTA",
        Some("card_payment") => "PAGO TARJETA",
        _ => "OTRO",
    }
}

/// `dd/mm/yy HH:MM` in local time. Accepts RFC 3339, or a naive
/// timestamp taken as UTC.
pub fn format_timestamp(raw: &str) -> Option<String> {
    let utc = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()?
            .and_utc(),
    };
    Some(utc.with_timezone(&Local).format("%d/%m/%y %H:%M").to_string())
}

/// Display fields of one transaction card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    pub credit: bool,
    pub icon: &'static str,
    pub type_label: &'static str,
    pub transaction_id: Option<String>,
    pub description: String,
    pub origin: String,
    pub balance_after: String,
    pub time: Option<String>,
    pub direction: &'static str,
    pub amount: String,
}

impl From<&Transaction> for TransactionView {
    fn from(tx: &Transaction) -> Self {
        let credit = tx.is_credit();
        let merchant = tx
            .merchant_name
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(crate::models::MERCHANT_NAME);
        Self {
            credit,
            icon: if credit { "+" } else { "−" },
            type_label: type_label(tx.source.as_deref()),
            transaction_id: tx.transaction_id.clone().filter(|id| !id.is_empty()),
            description: tx
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "Movimiento de prueba".to_string()),
            origin: format!("Comprado en {}", merchant),
            balance_after: fmt_optional_money(tx.balance_after.as_ref(), &tx.currency),
            time: tx.created_at.as_deref().and_then(format_timestamp),
            direction: if credit { "Entrada" } else { "Salida" },
            amount: format!(
                "{} {}",
                if credit { "+" } else { "-" },
                fmt_money(&tx.amount, &tx.currency)
            ),
        }
    }
}

pub fn transaction_html(tx: &Transaction) -> Result<String> {
    render("transaction", &TransactionView::from(tx))
}

pub fn transactions_html(history: &TransactionHistory) -> Result<String> {
    render("transactions", &history_data(history))
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

pub fn status_label(result: &PaymentResult) -> &'static str {
    if result.is_approved() {
        messages::STATUS_APPROVED
    } else {
        messages::STATUS_DECLINED
    }
}

/// Label/value rows of the result panel, in display order.
pub fn result_rows(content: &ResultContent) -> Vec<(&'static str, String)> {
    match content {
        ResultContent::Empty => Vec::new(),
        ResultContent::Failure(message) => vec![
            ("Estado", messages::STATUS_DECLINED.to_string()),
            ("Mensaje", message.clone()),
        ],
        ResultContent::Payment { result, with_card } => {
            let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "—".to_string());
            let mut rows = vec![
                ("Estado", status_label(result).to_string()),
                ("Mensaje", result.message.clone()),
                ("Transacción", or_dash(&result.transaction_id)),
                ("Cuenta", or_dash(&result.account_number)),
            ];
            if *with_card {
                let l4 = result.card_last4.as_deref().unwrap_or("0000");
                rows.push(("Tarjeta", masked_card(l4)));
            }
            let amount = match &result.amount {
                Some(a) => format!("{} {}", a, result.currency),
                None => format!("— {}", result.currency),
            };
            rows.push(("Monto", amount));
            rows.push((
                "Saldo restante",
                fmt_optional_money(result.remaining_balance.as_ref(), &result.currency),
            ));
            rows.push(("Descripción", or_dash(&result.description)));
            rows
        }
    }
}

fn result_panel_data(panel: &ResultPanel) -> Value {
    let rows: Vec<Value> = result_rows(&panel.content)
        .into_iter()
        .map(|(label, value)| json!({ "label": label, "value": value }))
        .collect();
    json!({
        "border": panel.tone.border_class(),
        "rows": rows,
    })
}

pub fn result_panel_html(panel: &ResultPanel) -> Result<String> {
    render("result_panel", &result_panel_data(panel))
}

pub fn payment_page_html(page: &PaymentPage) -> Result<String> {
    let form = &page.form;
    render(
        "payment_page",
        &json!({
            "form": {
                "account_number": form.account_number,
                "amount": form.amount,
                "currency": form.currency,
                "description": form.description,
            },
            "error": notice_data("form-error", &page.error),
            "button": button_data(&page.submit_button),
            "result": result_panel_data(&page.result),
        }),
    )
}

pub fn card_payment_page_html(page: &CardPaymentPage) -> Result<String> {
    let form = &page.form;
    render(
        "card_payment_page",
        &json!({
            "preview_number": form.preview_number(),
            "preview_expiry": form.preview_expiry(),
            "form": {
                "number": form.number,
                "exp_month": form.exp_month,
                "exp_year": form.exp_year,
                "cvv": form.cvv,
                "amount": form.amount,
                "currency": form.currency,
                "description": form.description,
            },
            "error": notice_data("card-form-error", &page.error),
            "button": button_data(&page.submit_button),
            "result": result_panel_data(&page.result),
        }),
    )
}

/// Wraps a rendered page fragment in the shared document shell.
pub fn layout(title: &str, body: &str) -> Result<String> {
    render(
        "layout",
        &json!({
            "title": title,
            "body": body,
            "year": Local::now().year(),
        }),
    )
}
