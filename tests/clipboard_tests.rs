// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io;
use std::time::{Duration, Instant};

use povy_sandbox::clipboard::{COPIED_FEEDBACK, Clipboard, CopyButton, Osc52};

struct Broken;

impl Clipboard for Broken {
    fn write_text(&mut self, _text: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }
}

#[test]
fn osc52_encodes_text() {
    let mut out = Vec::new();
    Osc52::new(&mut out).write_text("4111").unwrap();
    assert_eq!(out, b"\x1b]52;c;NDExMQ==\x07");
}

#[test]
fn copied_label_lasts_for_feedback_window() {
    let mut out = Vec::new();
    let mut clip = Osc52::new(&mut out);
    let mut button = CopyButton::new("Copiar");
    let t0 = Instant::now();

    assert!(button.click(&mut clip, "abc", t0));
    assert_eq!(button.label_at(t0), "Copiado");
    assert_eq!(button.label_at(t0 + Duration::from_millis(500)), "Copiado");
    assert_eq!(button.label_at(t0 + COPIED_FEEDBACK), "Copiar");
}

#[test]
fn empty_text_and_failures_are_quiet() {
    let mut button = CopyButton::new("Copiar");
    let now = Instant::now();
    let mut out = Vec::new();
    assert!(!button.click(&mut Osc52::new(&mut out), "", now));
    assert!(out.is_empty());

    assert!(!button.click(&mut Broken, "abc", now));
    assert_eq!(button.label_at(now), "Copiar");
}
