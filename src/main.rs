// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use povy_sandbox::api::HttpApi;
use povy_sandbox::{cli, commands, config};

fn init_tracing() {
    let filter = std::env::var("POVY_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".into());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let matches = cli::build_cli().get_matches();
    let settings_path = config::settings_path()?;

    if let Some(("config", sub)) = matches.subcommand() {
        return commands::config::handle(&settings_path, &matches, sub);
    }

    let settings = config::load_settings(&settings_path)?;
    let env = std::env::var(config::API_BASE_ENV).ok();
    let (base, source) = config::resolve_api_base(
        matches.get_one::<String>("api-base").map(String::as_str),
        matches.get_flag("local"),
        env.as_deref(),
        &settings,
    )?;
    tracing::debug!(%base, source = source.as_str(), "resolved API base");
    let api = HttpApi::new(base.clone()).with_context(|| format!("HTTP client for {}", base))?;

    match matches.subcommand() {
        Some(("account", sub)) => commands::accounts::handle(&api, sub)?,
        Some(("pay", sub)) => commands::pay::handle(&api, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&api)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
