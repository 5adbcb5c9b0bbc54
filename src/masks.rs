// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Input masking for the card payment form.

pub const CARD_NUMBER_DIGITS: usize = 16;
pub const EXPIRY_DIGITS: usize = 2;
pub const CVV_DIGITS: usize = 3;
pub const CARD_NUMBER_PLACEHOLDER: &str = "---- ---- ---- ----";
pub const DEFAULT_CURRENCY: &str = "MXN";

/// Keeps the ASCII digits of `value`, at most `max` of them.
pub fn digits_only(value: &str, max: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(max).collect()
}

pub fn clean_card_number(value: &str) -> String {
    digits_only(value, CARD_NUMBER_DIGITS)
}

/// Inserts a space after every fourth character.
pub fn group_in_fours(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 4);
    for (i, c) in value.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Display form of a stored card number: `4111 1111 1111 1111`.
pub fn format_card_number_pretty(card_number: &str) -> String {
    let compact: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return CARD_NUMBER_PLACEHOLDER.to_string();
    }
    group_in_fours(&compact)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Number,
    ExpMonth,
    ExpYear,
    Cvv,
    Amount,
    Currency,
    Description,
}

impl CardField {
    /// Digit limit of masked fields; `None` for free-form ones.
    pub fn digit_limit(self) -> Option<usize> {
        match self {
            CardField::Number => Some(CARD_NUMBER_DIGITS),
            CardField::ExpMonth | CardField::ExpYear => Some(EXPIRY_DIGITS),
            CardField::Cvv => Some(CVV_DIGITS),
            _ => None,
        }
    }

    /// Field that receives focus once this one is complete.
    pub fn next(self) -> Option<CardField> {
        match self {
            CardField::Number => Some(CardField::ExpMonth),
            CardField::ExpMonth => Some(CardField::ExpYear),
            CardField::ExpYear => Some(CardField::Cvv),
            CardField::Cvv => Some(CardField::Amount),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardField::Number => "Número de tarjeta",
            CardField::ExpMonth => "Mes (MM)",
            CardField::ExpYear => "Año (YY)",
            CardField::Cvv => "CVV",
            CardField::Amount => "Monto",
            CardField::Currency => "Moneda",
            CardField::Description => "Descripción",
        }
    }
}

/// Values of the card payment form as the user sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    pub number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvv: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            number: String::new(),
            exp_month: String::new(),
            exp_year: String::new(),
            cvv: String::new(),
            amount: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            description: String::new(),
        }
    }
}

impl CardForm {
    /// Applies one input event to `field` and returns the field to focus
    /// next, if the input completed it.
    pub fn input(&mut self, field: CardField, raw: &str) -> Option<CardField> {
        let complete = match field {
            CardField::Number => {
                let clean = clean_card_number(raw);
                self.number = group_in_fours(&clean);
                clean.len() == CARD_NUMBER_DIGITS
            }
            CardField::ExpMonth => {
                self.exp_month = digits_only(raw, EXPIRY_DIGITS);
                self.exp_month.len() == EXPIRY_DIGITS
            }
            CardField::ExpYear => {
                self.exp_year = digits_only(raw, EXPIRY_DIGITS);
                self.exp_year.len() == EXPIRY_DIGITS
            }
            CardField::Cvv => {
                self.cvv = digits_only(raw, CVV_DIGITS);
                self.cvv.len() == CVV_DIGITS
            }
            CardField::Amount => {
                self.amount = raw.to_string();
                false
            }
            CardField::Currency => {
                self.currency = raw.trim().to_uppercase();
                false
            }
            CardField::Description => {
                self.description = raw.to_string();
                false
            }
        };
        if complete { field.next() } else { None }
    }

    pub fn value(&self, field: CardField) -> &str {
        match field {
            CardField::Number => &self.number,
            CardField::ExpMonth => &self.exp_month,
            CardField::ExpYear => &self.exp_year,
            CardField::Cvv => &self.cvv,
            CardField::Amount => &self.amount,
            CardField::Currency => &self.currency,
            CardField::Description => &self.description,
        }
    }

    pub fn clean_number(&self) -> String {
        clean_card_number(&self.number)
    }

    pub fn preview_number(&self) -> String {
        if self.number.is_empty() {
            CARD_NUMBER_PLACEHOLDER.to_string()
        } else {
            self.number.clone()
        }
    }

    pub fn preview_expiry(&self) -> String {
        let or_dashes = |s: &str| if s.is_empty() { "--".to_string() } else { s.to_string() };
        format!("{}/{}", or_dashes(&self.exp_month), or_dashes(&self.exp_year))
    }
}
