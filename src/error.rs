// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::messages;

/// Failure at the fetch boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the body's `message` field, when it had one.
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or(messages::REQUEST_FAILED))]
    Status { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid API base URL: {0}")]
    BaseUrl(String),
}

impl ApiError {
    /// Text shown inline for this failure: the server's message, the generic
    /// request error for a bare status, or the action's own fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } => m.clone(),
            ApiError::Status { message: None, .. } => messages::REQUEST_FAILED.to_string(),
            _ => fallback.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure turning a page into HTML.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}
