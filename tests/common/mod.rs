// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::str::FromStr;

use povy_sandbox::api::PovyApi;
use povy_sandbox::error::{ApiError, Result};
use povy_sandbox::models::{
    Account, AccountPatch, Card, CardPaymentRequest, CreateAccountRequest, PaymentRequest,
    PaymentResult, PaymentStatus, Transaction, TransactionKind,
};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListAccounts,
    CreateAccount(CreateAccountRequest),
    GetAccount(String),
    UpdateAccount(String, AccountPatch),
    DeleteAccount(String),
    ListTransactions(String),
    Pay(PaymentRequest),
    PayWithCard(CardPaymentRequest),
}

/// In-memory stand-in for the Povy backend. Records every call; operations
/// listed in `failures` answer with that status and message instead.
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub accounts: RefCell<Vec<Account>>,
    pub transactions: RefCell<HashMap<String, Vec<Transaction>>>,
    pub payment: RefCell<Option<PaymentResult>>,
    pub failures: RefCell<HashMap<&'static str, (u16, Option<String>)>>,
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn account(number: &str, owner: &str, balance: &str, currency: &str) -> Account {
    Account {
        account_number: number.to_string(),
        owner_name: owner.to_string(),
        balance: dec(balance),
        currency: currency.to_string(),
        card: Some(Card {
            card_number: format!("411111111111{}", &number[number.len() - 4..]),
            exp_month: "08".into(),
            exp_year: "29".into(),
            cvv: "123".into(),
        }),
    }
}

pub fn transaction(id: &str, kind: TransactionKind, source: &str, amount: &str) -> Transaction {
    Transaction {
        transaction_id: Some(id.to_string()),
        kind,
        source: Some(source.to_string()),
        amount: dec(amount),
        currency: "USD".into(),
        balance_after: Some(dec("100")),
        description: None,
        merchant_name: None,
        created_at: Some("2025-03-01T10:15:00Z".into()),
    }
}

pub fn approved(amount: &str) -> PaymentResult {
    PaymentResult {
        status: PaymentStatus::Approved,
        message: "Pago aprobado".into(),
        transaction_id: Some("TX-9".into()),
        account_number: Some("ACC-0001".into()),
        amount: Some(dec(amount)),
        currency: "MXN".into(),
        remaining_balance: Some(dec("75.5")),
        description: Some("Café".into()),
        card_last4: Some("0001".into()),
    }
}

impl FakeApi {
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let api = Self::default();
        *api.accounts.borrow_mut() = accounts;
        api
    }

    pub fn fail(&self, op: &'static str, status: u16, message: Option<&str>) {
        self.failures
            .borrow_mut()
            .insert(op, (status, message.map(str::to_string)));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: &'static str, call: Call) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(op) {
            Some((status, message)) => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            message: Some("Cuenta no encontrada".into()),
        }
    }
}

impl PovyApi for FakeApi {
    fn list_accounts(&self) -> Result<Vec<Account>> {
        self.record("list_accounts", Call::ListAccounts)?;
        Ok(self.accounts.borrow().clone())
    }

    fn create_account(&self, req: &CreateAccountRequest) -> Result<Account> {
        self.record("create_account", Call::CreateAccount(req.clone()))?;
        let n = self.accounts.borrow().len() + 1;
        let owner = req.owner_name.clone().unwrap_or_else(|| "Cliente Povy".into());
        let created = account(&format!("ACC-{:04}", n), &owner, "0", "USD");
        self.accounts.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn get_account(&self, account_number: &str) -> Result<Account> {
        self.record("get_account", Call::GetAccount(account_number.into()))?;
        self.accounts
            .borrow()
            .iter()
            .find(|a| a.account_number == account_number)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    fn update_account(&self, account_number: &str, patch: &AccountPatch) -> Result<Account> {
        self.record(
            "update_account",
            Call::UpdateAccount(account_number.into(), patch.clone()),
        )?;
        let mut accounts = self.accounts.borrow_mut();
        let acc = accounts
            .iter_mut()
            .find(|a| a.account_number == account_number)
            .ok_or_else(Self::not_found)?;
        if let Some(ccy) = &patch.currency {
            acc.currency = ccy.clone();
        }
        if let Some(delta) = patch.add_balance {
            acc.balance += delta;
            let mut tx = transaction("TX-TOPUP", TransactionKind::Credit, "manual_topup", "0");
            tx.amount = delta;
            tx.balance_after = Some(acc.balance);
            self.transactions
                .borrow_mut()
                .entry(account_number.to_string())
                .or_default()
                .insert(0, tx);
        }
        Ok(acc.clone())
    }

    fn delete_account(&self, account_number: &str) -> Result<()> {
        self.record("delete_account", Call::DeleteAccount(account_number.into()))?;
        self.accounts
            .borrow_mut()
            .retain(|a| a.account_number != account_number);
        Ok(())
    }

    fn list_transactions(&self, account_number: &str) -> Result<Vec<Transaction>> {
        self.record(
            "list_transactions",
            Call::ListTransactions(account_number.into()),
        )?;
        Ok(self
            .transactions
            .borrow()
            .get(account_number)
            .cloned()
            .unwrap_or_default())
    }

    fn pay(&self, req: &PaymentRequest) -> Result<PaymentResult> {
        self.record("pay", Call::Pay(req.clone()))?;
        Ok(self.payment.borrow().clone().unwrap_or_else(|| approved("10")))
    }

    fn pay_with_card(&self, req: &CardPaymentRequest) -> Result<PaymentResult> {
        self.record("pay_with_card", Call::PayWithCard(req.clone()))?;
        Ok(self.payment.borrow().clone().unwrap_or_else(|| approved("10")))
    }
}
