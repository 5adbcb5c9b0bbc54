// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{Call, FakeApi, approved, dec};
use povy_sandbox::masks::CardField;
use povy_sandbox::messages;
use povy_sandbox::models::{CardPaymentRequest, PaymentRequest, PaymentStatus};
use povy_sandbox::pages::payments::{CardPaymentPage, PaymentPage};
use povy_sandbox::render::result_panel_html;
use povy_sandbox::view::{Effect, ResultContent, Tone};

fn filled_card_page(number: &str) -> CardPaymentPage {
    let mut page = CardPaymentPage::default();
    page.input(CardField::Number, number);
    page.input(CardField::ExpMonth, "08");
    page.input(CardField::ExpYear, "29");
    page.input(CardField::Cvv, "123");
    page.input(CardField::Amount, "49.90");
    page.input(CardField::Description, "Suscripción");
    page
}

#[test]
fn card_payment_with_short_number_never_calls_api() {
    let api = FakeApi::default();
    let mut page = filled_card_page("4111 1111 1111 111");
    page.submit(&api);

    assert!(api.calls().is_empty());
    assert!(page.error.is_visible());
    assert_eq!(page.error.text(), messages::CARD_REQUIRED_FIELDS);
    assert_eq!(page.result.content, ResultContent::Empty);
    assert_eq!(page.submit_button.label(), messages::CARD_PAY_LABEL);
    assert!(!page.submit_button.is_disabled());
}

#[test]
fn card_payment_missing_cvv_is_rejected() {
    let api = FakeApi::default();
    let mut page = filled_card_page("4111111111111111");
    page.input(CardField::Cvv, "");
    page.submit(&api);
    assert!(api.calls().is_empty());
    assert_eq!(page.error.text(), messages::CARD_REQUIRED_FIELDS);
}

#[test]
fn card_payment_posts_cleaned_number() {
    let api = FakeApi::default();
    let mut page = filled_card_page("4111-1111-1111-0001");
    page.submit(&api);

    assert_eq!(
        api.calls(),
        vec![Call::PayWithCard(CardPaymentRequest {
            merchant_name: "Povy Test".into(),
            card_number: "4111111111110001".into(),
            exp_month: "08".into(),
            exp_year: "29".into(),
            cvv: "123".into(),
            amount: dec("49.90"),
            currency: "MXN".into(),
            description: "Suscripción".into(),
        })]
    );
    assert_eq!(page.result.tone, Tone::Success);
    assert!(!page.error.is_visible());
}

#[test]
fn focus_effects_follow_completed_fields() {
    let mut page = CardPaymentPage::default();
    assert_eq!(
        page.input(CardField::Number, "4111111111111111"),
        Effect::Focus(CardField::ExpMonth)
    );
    assert_eq!(page.input(CardField::ExpMonth, "0"), Effect::None);
    assert_eq!(
        page.input(CardField::ExpMonth, "08"),
        Effect::Focus(CardField::ExpYear)
    );
}

#[test]
fn payment_requires_account_and_amount() {
    let api = FakeApi::default();
    let mut page = PaymentPage::default();
    page.form.account_number = "   ".into();
    page.form.amount = "10".into();
    page.submit(&api);
    assert!(api.calls().is_empty());
    assert_eq!(page.error.text(), messages::PAYMENT_REQUIRED_FIELDS);

    page.form.account_number = "ACC-0001".into();
    page.form.amount = String::new();
    page.submit(&api);
    assert!(api.calls().is_empty());
    assert_eq!(page.submit_button.label(), messages::PAY_LABEL);
}

#[test]
fn approved_payment_renders_emerald_panel() {
    let api = FakeApi::default();
    let mut page = PaymentPage::default();
    page.form.account_number = " ACC-0001 ".into();
    page.form.amount = "10".into();
    page.submit(&api);

    assert_eq!(
        api.calls(),
        vec![Call::Pay(PaymentRequest {
            merchant_name: "Povy Test".into(),
            account_number: "ACC-0001".into(),
            amount: dec("10"),
            currency: "MXN".into(),
            description: String::new(),
        })]
    );
    assert_eq!(page.result.tone, Tone::Success);
    let html = result_panel_html(&page.result).unwrap();
    assert!(html.contains("border-emerald-500/60"));
    assert!(html.contains("APROBADO"));
    assert!(html.contains("75.50 MXN"));
    assert!(!html.contains("Tarjeta"));
}

#[test]
fn non_approved_status_renders_red_panel() {
    for status in [PaymentStatus::Declined, PaymentStatus::Unknown] {
        let api = FakeApi::default();
        let mut declined = approved("10");
        declined.status = status;
        declined.message = "Fondos insuficientes".into();
        *api.payment.borrow_mut() = Some(declined);

        let mut page = PaymentPage::default();
        page.form.account_number = "ACC-0001".into();
        page.form.amount = "10".into();
        page.submit(&api);

        assert_eq!(page.result.tone, Tone::Error);
        let html = result_panel_html(&page.result).unwrap();
        assert!(html.contains("border-red-500/60"));
        assert!(html.contains("RECHAZADO"));
        assert!(html.contains("Fondos insuficientes"));
    }
}

#[test]
fn request_failure_shows_inline_error_and_declined_panel() {
    let api = FakeApi::default();
    api.fail("pay_with_card", 400, Some("Tarjeta vencida"));
    let mut page = filled_card_page("4111111111111111");
    page.submit(&api);

    assert_eq!(page.error.text(), "Tarjeta vencida");
    assert_eq!(
        page.result.content,
        ResultContent::Failure("Tarjeta vencida".into())
    );
    assert_eq!(page.result.tone, Tone::Error);
    assert!(!page.submit_button.is_disabled());
}

#[test]
fn card_result_shows_masked_last4() {
    let api = FakeApi::default();
    let mut page = filled_card_page("4111111111110001");
    page.submit(&api);
    let html = result_panel_html(&page.result).unwrap();
    assert!(html.contains("•••• •••• •••• 0001"));
}
