// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::api::PovyApi;
use crate::messages;
use crate::models::{Account, AccountPatch, Transaction};
use crate::utils::parse_amount;
use crate::view::{ACCOUNT_QUERY_PARAM, ACCOUNTS_HREF, Effect, Location, Notice};

pub const DEFAULT_ACCOUNT_CURRENCY: &str = "USD";

/// Transaction cards of the viewed account plus their empty-state element.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionHistory {
    pub transactions: Vec<Transaction>,
    pub empty: Notice,
}

impl Default for TransactionHistory {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            empty: Notice::hidden_with(messages::TRANSACTIONS_EMPTY),
        }
    }
}

impl TransactionHistory {
    pub fn render(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        if self.transactions.is_empty() {
            self.empty.show(messages::TRANSACTIONS_EMPTY);
        } else {
            self.empty.hide();
        }
    }

    pub fn load(&mut self, api: &dyn PovyApi, account_number: &str) {
        match api.list_transactions(account_number) {
            Ok(txs) => self.render(txs),
            Err(e) => {
                warn!(account = account_number, error = %e, "could not load transactions");
                self.empty.show(messages::TRANSACTIONS_LOAD_FAILED);
            }
        }
    }
}

/// The account detail page. `current_account` is only written by [`load`]
/// and is what the update and delete handlers act on.
///
/// [`load`]: AccountDetailPage::load
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountDetailPage {
    pub current_account: Option<String>,
    pub account: Option<Account>,
    pub currency: String,
    pub balance_input: String,
    pub error: Notice,
    pub history: TransactionHistory,
}

impl AccountDetailPage {
    /// Page setup: builds the page for `location` and loads its account.
    pub fn open(api: &dyn PovyApi, location: &Location) -> Self {
        let mut page = Self::default();
        page.load(api, location);
        page
    }

    pub fn load(&mut self, api: &dyn PovyApi, location: &Location) {
        self.current_account = None;

        let Some(account_number) = location.query_param(ACCOUNT_QUERY_PARAM) else {
            self.error.show(messages::MISSING_ACCOUNT_PARAM);
            return;
        };

        match api.get_account(&account_number) {
            Ok(account) => {
                let number = account.account_number.clone();
                self.current_account = Some(number.clone());
                self.error.clear();
                self.render(account);
                self.history.load(api, &number);
            }
            Err(e) => {
                warn!(account = %account_number, error = %e, "could not load account");
                self.error.show(e.user_message(messages::ACCOUNT_LOAD_FAILED));
            }
        }
    }

    fn render(&mut self, account: Account) {
        self.currency = if account.currency.is_empty() {
            DEFAULT_ACCOUNT_CURRENCY.to_string()
        } else {
            account.currency.clone()
        };
        self.account = Some(account);
    }

    /// Currency selector change.
    pub fn change_currency(&mut self, api: &dyn PovyApi, currency: &str) {
        let Some(number) = self.current_account.clone() else {
            return;
        };
        self.currency = currency.to_string();

        match api.update_account(&number, &AccountPatch::currency(currency)) {
            Ok(updated) => {
                info!(account = %number, currency, "currency updated");
                self.error.clear();
                self.render(updated);
            }
            Err(e) => {
                warn!(account = %number, error = %e, "could not update currency");
                self.error.show(e.user_message(messages::CURRENCY_UPDATE_FAILED));
            }
        }
    }

    /// "Update balance" click with the typed delta. Blank counts as zero.
    pub fn add_balance(&mut self, api: &dyn PovyApi, raw: &str) {
        let Some(number) = self.current_account.clone() else {
            return;
        };
        self.balance_input = raw.to_string();

        let delta = if raw.trim().is_empty() {
            Some(Decimal::ZERO)
        } else {
            parse_amount(raw)
        };
        let Some(delta) = delta.filter(|d| !d.is_sign_negative() || d.is_zero()) else {
            warn!(input = raw, "rejected balance delta");
            self.error.show(messages::INVALID_BALANCE_AMOUNT);
            return;
        };

        match api.update_account(&number, &AccountPatch::add_balance(delta)) {
            Ok(updated) => {
                info!(account = %number, %delta, "balance topped up");
                self.error.clear();
                self.balance_input.clear();
                let number = updated.account_number.clone();
                self.render(updated);
                self.history.load(api, &number);
            }
            Err(e) => {
                warn!(account = %number, error = %e, "could not update balance");
                self.error.show(e.user_message(messages::BALANCE_UPDATE_FAILED));
            }
        }
    }

    /// Delete click. `confirm` is asked first; declining makes no request.
    pub fn delete(&mut self, api: &dyn PovyApi, confirm: impl FnOnce(&str) -> bool) -> Effect {
        let Some(number) = self.current_account.clone() else {
            return Effect::None;
        };
        if !confirm(messages::DELETE_CONFIRM) {
            return Effect::None;
        }

        match api.delete_account(&number) {
            Ok(()) => {
                info!(account = %number, "account deleted");
                self.error.clear();
                self.current_account = None;
                Effect::Navigate(ACCOUNTS_HREF.to_string())
            }
            Err(e) => {
                warn!(account = %number, error = %e, "could not delete account");
                self.error.show(e.user_message(messages::ACCOUNT_DELETE_FAILED));
                Effect::None
            }
        }
    }
}
