// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::{info, warn};

use crate::api::PovyApi;
use crate::messages;
use crate::models::{Account, CreateAccountRequest};
use crate::view::{Button, Effect, Notice, account_href};

/// The rendered account cards plus the empty-state element.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountList {
    pub accounts: Vec<Account>,
    pub empty: Notice,
}

impl Default for AccountList {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            empty: Notice::hidden_with(messages::ACCOUNTS_EMPTY),
        }
    }
}

impl AccountList {
    pub fn render(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
        if self.accounts.is_empty() {
            self.empty.show(messages::ACCOUNTS_EMPTY);
        } else {
            self.empty.hide();
        }
    }

    pub fn load(&mut self, api: &dyn PovyApi) {
        match api.list_accounts() {
            Ok(accounts) => self.render(accounts),
            Err(e) => {
                warn!(error = %e, "could not load accounts");
                self.empty.show(messages::ACCOUNTS_LOAD_FAILED);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountsPage {
    pub list: AccountList,
    pub create_button: Button,
    pub owner_name: String,
}

impl Default for AccountsPage {
    fn default() -> Self {
        Self {
            list: AccountList::default(),
            create_button: Button::new(messages::CREATE_ACCOUNT_LABEL),
            owner_name: String::new(),
        }
    }
}

impl AccountsPage {
    /// Page setup: builds the page and loads the list.
    pub fn open(api: &dyn PovyApi) -> Self {
        let mut page = Self::default();
        page.list.load(api);
        page
    }

    /// Creates an account for the typed owner (blank lets the server pick one)
    /// and reloads the list.
    pub fn create(&mut self, api: &dyn PovyApi) {
        let _busy = self.create_button.busy(messages::CREATING_LABEL);

        let owner = self.owner_name.trim();
        let req = CreateAccountRequest {
            owner_name: (!owner.is_empty()).then(|| owner.to_string()),
        };
        match api.create_account(&req) {
            Ok(account) => {
                info!(account = %account.account_number, "account created");
                self.list.load(api);
            }
            Err(e) => {
                warn!(error = %e, "could not create account");
                self.list.empty.show(format!(
                    "{} {}",
                    messages::ACCOUNT_CREATE_FAILED,
                    e.user_message(messages::REQUEST_FAILED)
                ));
            }
        }
    }

    /// Click on the `index`-th account card.
    pub fn open_account(&self, index: usize) -> Effect {
        match self.list.accounts.get(index) {
            Some(account) => Effect::Navigate(account_href(&account.account_number)),
            None => Effect::None,
        }
    }
}
