// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use povy_sandbox::view::{Button, Location, Notice, account_href};

#[test]
fn busy_guard_disables_then_restores() {
    let mut button = Button::new("Crear cuenta");
    {
        let guard = button.busy("Creando...");
        assert_eq!(guard.button().label(), "Creando...");
        assert!(guard.button().is_disabled());
    }
    assert_eq!(button.label(), "Crear cuenta");
    assert!(!button.is_disabled());
}

#[test]
fn location_reads_query_parameter() {
    let loc = Location::parse("account.html?account=ACC%2D1&x=2").unwrap();
    assert_eq!(loc.query_param("account").as_deref(), Some("ACC-1"));
    assert_eq!(loc.query_param("missing"), None);

    let loc = Location::parse(&account_href("Ana & Co")).unwrap();
    assert_eq!(loc.query_param("account").as_deref(), Some("Ana & Co"));
}

#[test]
fn notice_show_hide_clear() {
    let mut n = Notice::hidden_with("vacío");
    assert!(!n.is_visible());
    assert_eq!(n.text(), "vacío");
    n.show("error");
    assert!(n.is_visible());
    n.hide();
    assert_eq!(n.text(), "error");
    n.clear();
    assert!(!n.is_visible());
    assert!(n.text().is_empty());
}
