// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Small pieces of view state shared by the page controllers.

use url::Url;

use crate::masks::CardField;
use crate::models::PaymentResult;

pub const ACCOUNTS_HREF: &str = "accounts.html";
pub const ACCOUNT_QUERY_PARAM: &str = "account";

pub fn account_href(account_number: &str) -> String {
    format!(
        "account.html?{}={}",
        ACCOUNT_QUERY_PARAM,
        urlencoding::encode(account_number)
    )
}

/// Side effect a handler asks its host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Navigate(String),
    Focus(CardField),
}

/// The URL of the current page. Relative hrefs resolve against `http://localhost/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(Url);

impl Location {
    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse("http://localhost/")?;
        Ok(Self(base.join(href.trim())?))
    }

    /// Non-empty value of the query parameter `name`.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.0
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    }
}

/// A button that shows a busy label and is disabled while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    idle_label: &'static str,
    label: String,
    disabled: bool,
}

impl Button {
    pub fn new(idle_label: &'static str) -> Self {
        Self {
            idle_label,
            label: idle_label.to_string(),
            disabled: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Marks the button busy until the returned guard drops.
    pub fn busy(&mut self, busy_label: &str) -> BusyGuard<'_> {
        self.label = busy_label.to_string();
        self.disabled = true;
        BusyGuard { button: self }
    }
}

/// Restores its button on drop, whatever path the request took.
#[must_use = "the button is restored as soon as the guard is dropped"]
pub struct BusyGuard<'a> {
    button: &'a mut Button,
}

impl BusyGuard<'_> {
    pub fn button(&self) -> &Button {
        self.button
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.button.label = self.button.idle_label.to_string();
        self.button.disabled = false;
    }
}

/// An inline message element: hidden, or showing its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    text: String,
    hidden: bool,
}

impl Default for Notice {
    fn default() -> Self {
        Self::hidden()
    }
}

impl Notice {
    pub fn hidden() -> Self {
        Self {
            text: String::new(),
            hidden: true,
        }
    }

    /// Hidden, keeping `text` as the element's placeholder.
    pub fn hidden_with(text: &str) -> Self {
        Self {
            text: text.to_string(),
            hidden: true,
        }
    }

    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.hidden = true;
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Error,
}

impl Tone {
    pub fn border_class(self) -> &'static str {
        match self {
            Tone::Info => "border-slate-800",
            Tone::Success => "border-emerald-500/60",
            Tone::Error => "border-red-500/60",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultContent {
    #[default]
    Empty,
    Payment {
        result: PaymentResult,
        with_card: bool,
    },
    Failure(String),
}

/// The panel that shows the verdict of the last submitted payment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPanel {
    pub content: ResultContent,
    pub tone: Tone,
}

impl ResultPanel {
    /// Shows a server verdict. The tone follows the returned status only.
    pub fn show_result(&mut self, result: PaymentResult, with_card: bool) {
        self.tone = if result.is_approved() {
            Tone::Success
        } else {
            Tone::Error
        };
        self.content = ResultContent::Payment { result, with_card };
    }

    pub fn show_failure(&mut self, message: impl Into<String>) {
        self.tone = Tone::Error;
        self.content = ResultContent::Failure(message.into());
    }
}
