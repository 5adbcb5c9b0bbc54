// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::error;

use crate::messages;

/// How long a copy button keeps its "copied" label.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(1200);

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Writes to the terminal's clipboard with an OSC 52 escape sequence.
pub struct Osc52<W: Write> {
    out: W,
}

impl<W: Write> Osc52<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Clipboard for Osc52<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text))?;
        self.out.flush()
    }
}

#[derive(Debug, Clone)]
pub struct CopyButton {
    label: String,
    copied_at: Option<Instant>,
}

impl CopyButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            copied_at: None,
        }
    }

    /// Copies `text`. Empty text is ignored; a failed copy is only logged.
    pub fn click(&mut self, clipboard: &mut dyn Clipboard, text: &str, now: Instant) -> bool {
        if text.is_empty() {
            return false;
        }
        match clipboard.write_text(text) {
            Ok(()) => {
                self.copied_at = Some(now);
                true
            }
            Err(e) => {
                error!(error = %e, "could not copy to clipboard");
                false
            }
        }
    }

    pub fn label_at(&self, now: Instant) -> &str {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) < COPIED_FEEDBACK => messages::COPIED_LABEL,
            _ => &self.label,
        }
    }
}
