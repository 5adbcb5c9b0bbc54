// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The two payment forms: pay from an account number, and pay with a card.
//!
//! Neither form decides whether a payment went through. The result panel
//! reflects the `status` the server returned and nothing else.

use tracing::{info, warn};

use crate::api::PovyApi;
use crate::masks::{CARD_NUMBER_DIGITS, CardField, CardForm, DEFAULT_CURRENCY};
use crate::messages;
use crate::models::{CardPaymentRequest, MERCHANT_NAME, PaymentRequest};
use crate::utils::parse_amount;
use crate::view::{Button, Effect, Notice, ResultPanel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentForm {
    pub account_number: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            account_number: String::new(),
            amount: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentPage {
    pub form: PaymentForm,
    pub error: Notice,
    pub submit_button: Button,
    pub result: ResultPanel,
}

impl Default for PaymentPage {
    fn default() -> Self {
        Self {
            form: PaymentForm::default(),
            error: Notice::hidden(),
            submit_button: Button::new(messages::PAY_LABEL),
            result: ResultPanel::default(),
        }
    }
}

impl PaymentPage {
    pub fn submit(&mut self, api: &dyn PovyApi) {
        self.error.clear();
        let _busy = self.submit_button.busy(messages::PROCESSING_LABEL);

        let account_number = self.form.account_number.trim();
        let amount = if account_number.is_empty() {
            None
        } else {
            parse_amount(&self.form.amount)
        };
        let Some(amount) = amount else {
            warn!("payment form incomplete");
            self.error.show(messages::PAYMENT_REQUIRED_FIELDS);
            return;
        };

        let req = PaymentRequest {
            merchant_name: MERCHANT_NAME.to_string(),
            account_number: account_number.to_string(),
            amount,
            currency: self.form.currency.clone(),
            description: self.form.description.clone(),
        };
        match api.pay(&req) {
            Ok(result) => {
                info!(status = ?result.status, transaction = ?result.transaction_id, "payment processed");
                self.result.show_result(result, false);
            }
            Err(e) => {
                warn!(error = %e, "payment request failed");
                let message = e.user_message(messages::PAYMENT_FAILED);
                self.error.show(message.clone());
                self.result.show_failure(message);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardPaymentPage {
    pub form: CardForm,
    pub error: Notice,
    pub submit_button: Button,
    pub result: ResultPanel,
}

impl Default for CardPaymentPage {
    fn default() -> Self {
        Self {
            form: CardForm::default(),
            error: Notice::hidden(),
            submit_button: Button::new(messages::CARD_PAY_LABEL),
            result: ResultPanel::default(),
        }
    }
}

impl CardPaymentPage {
    /// Input event on one of the card fields; masks it and moves focus on completion.
    pub fn input(&mut self, field: CardField, raw: &str) -> Effect {
        match self.form.input(field, raw) {
            Some(next) => Effect::Focus(next),
            None => Effect::None,
        }
    }

    pub fn submit(&mut self, api: &dyn PovyApi) {
        self.error.clear();
        let _busy = self.submit_button.busy(messages::PROCESSING_LABEL);

        let card_number = self.form.clean_number();
        let exp_month = self.form.exp_month.trim();
        let exp_year = self.form.exp_year.trim();
        let cvv = self.form.cvv.trim();
        let complete = card_number.len() == CARD_NUMBER_DIGITS
            && !exp_month.is_empty()
            && !exp_year.is_empty()
            && !cvv.is_empty();
        let amount = if complete {
            parse_amount(&self.form.amount)
        } else {
            None
        };
        let Some(amount) = amount else {
            warn!(digits = card_number.len(), "card payment form incomplete");
            self.error.show(messages::CARD_REQUIRED_FIELDS);
            return;
        };

        let req = CardPaymentRequest {
            merchant_name: MERCHANT_NAME.to_string(),
            card_number,
            exp_month: exp_month.to_string(),
            exp_year: exp_year.to_string(),
            cvv: cvv.to_string(),
            amount,
            currency: self.form.currency.clone(),
            description: self.form.description.clone(),
        };
        match api.pay_with_card(&req) {
            Ok(result) => {
                info!(status = ?result.status, transaction = ?result.transaction_id, "card payment processed");
                self.result.show_result(result, true);
            }
            Err(e) => {
                warn!(error = %e, "card payment request failed");
                let message = e.user_message(messages::CARD_PAYMENT_FAILED);
                self.error.show(message.clone());
                self.result.show_failure(message);
            }
        }
    }
}
