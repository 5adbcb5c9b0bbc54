// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The remote Accounts & Payments API.
//!
//! Pages only see [`PovyApi`]; [`HttpApi`] is the blocking reqwest client
//! used by the binary.

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ApiError, Result};
use crate::models::{
    Account, AccountPatch, CardPaymentRequest, CreateAccountRequest, PaymentRequest,
    PaymentResult, Transaction,
};
use crate::utils::http_client;

pub trait PovyApi {
    fn list_accounts(&self) -> Result<Vec<Account>>;
    fn create_account(&self, req: &CreateAccountRequest) -> Result<Account>;
    fn get_account(&self, account_number: &str) -> Result<Account>;
    fn update_account(&self, account_number: &str, patch: &AccountPatch) -> Result<Account>;
    fn delete_account(&self, account_number: &str) -> Result<()>;
    fn list_transactions(&self, account_number: &str) -> Result<Vec<Transaction>>;
    fn pay(&self, req: &PaymentRequest) -> Result<PaymentResult>;
    fn pay_with_card(&self, req: &CardPaymentRequest) -> Result<PaymentResult>;
}

pub struct HttpApi {
    base: Url,
    client: reqwest::blocking::Client,
}

impl HttpApi {
    pub fn new(base: Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(base.to_string()));
        }
        Ok(Self {
            base,
            client: http_client()?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends one request and returns the parsed body, if it had one.
    fn send<B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Option<Value>> {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "povy request");

        let mut req = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = req.send()?;
        let status = resp.status();
        let text = resp.text()?;
        let data: Option<Value> = serde_json::from_str(&text).ok();

        if !status.is_success() {
            let message = data
                .as_ref()
                .and_then(|v| v.get("message"))
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            warn!(%method, %url, status = status.as_u16(), ?message, "povy request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(data)
    }

    fn fetch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T> {
        let data = self.send(method, segments, body)?.unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.fetch_json::<T, ()>(Method::GET, segments, None)
    }
}

impl PovyApi for HttpApi {
    fn list_accounts(&self) -> Result<Vec<Account>> {
        self.get(&["accounts"])
    }

    fn create_account(&self, req: &CreateAccountRequest) -> Result<Account> {
        self.fetch_json(Method::POST, &["accounts"], Some(req))
    }

    fn get_account(&self, account_number: &str) -> Result<Account> {
        self.get(&["accounts", account_number])
    }

    fn update_account(&self, account_number: &str, patch: &AccountPatch) -> Result<Account> {
        self.fetch_json(Method::PATCH, &["accounts", account_number], Some(patch))
    }

    fn delete_account(&self, account_number: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, &["accounts", account_number], None)?;
        Ok(())
    }

    fn list_transactions(&self, account_number: &str) -> Result<Vec<Transaction>> {
        self.get(&["accounts", account_number, "transactions"])
    }

    fn pay(&self, req: &PaymentRequest) -> Result<PaymentResult> {
        self.fetch_json(Method::POST, &["payments"], Some(req))
    }

    fn pay_with_card(&self, req: &CardPaymentRequest) -> Result<PaymentResult> {
        self.fetch_json(Method::POST, &["payments", "card"], Some(req))
    }
}
