// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use crate::config::{
    API_BASE_ENV, load_settings, parse_api_base, resolve_api_base, save_settings,
};
use crate::utils::pretty_table;

pub fn handle(settings_path: &Path, root: &clap::ArgMatches, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(settings_path, root)?,
        Some(("set-base", sub)) => {
            let raw = sub.get_one::<String>("url").unwrap().trim();
            let url = parse_api_base(raw)?;
            let mut settings = load_settings(settings_path)?;
            settings.api_base = Some(url.to_string());
            save_settings(settings_path, &settings)?;
            println!("API base set to {}", url);
        }
        Some(("clear-base", _)) => {
            let mut settings = load_settings(settings_path)?;
            settings.api_base = None;
            save_settings(settings_path, &settings)?;
            println!("API base cleared; using the default");
        }
        _ => {}
    }
    Ok(())
}

fn show(settings_path: &Path, root: &clap::ArgMatches) -> Result<()> {
    let settings = load_settings(settings_path)?;
    let env = std::env::var(API_BASE_ENV).ok();
    let (base, source) = resolve_api_base(
        root.get_one::<String>("api-base").map(String::as_str),
        root.get_flag("local"),
        env.as_deref(),
        &settings,
    )?;
    let rows = vec![
        vec!["api_base".into(), base.to_string()],
        vec!["source".into(), source.as_str().into()],
        vec![
            "settings.api_base".into(),
            settings.api_base.unwrap_or_else(|| "-".into()),
        ],
        vec!["settings file".into(), settings_path.display().to_string()],
    ];
    println!("{}", pretty_table(&["Key", "Value"], rows));
    Ok(())
}
