// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.povy", "Povy", "povy-sandbox"));

pub const LOCAL_API_BASE: &str = "http://localhost:4000/api";
pub const REMOTE_API_BASE: &str = "https://backend-povy.onrender.com/api";
pub const API_BASE_ENV: &str = "POVY_API_BASE";

/// Persisted CLI settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("settings.json"))
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read settings at {}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_json::from_str(&raw).with_context(|| format!("Invalid settings file {}", path.display()))
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let body = serde_json::to_string_pretty(settings)?;
    fs::write(path, body).with_context(|| format!("Write settings at {}", path.display()))
}

/// The backend a page talks to, picked from the page's host name.
pub fn api_base_for_host(host: &str) -> &'static str {
    if host == "localhost" {
        LOCAL_API_BASE
    } else {
        REMOTE_API_BASE
    }
}

/// Where a resolved API base came from, for `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseSource {
    Flag,
    Local,
    Env,
    Settings,
    Default,
}

impl BaseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseSource::Flag => "--api-base",
            BaseSource::Local => "--local",
            BaseSource::Env => API_BASE_ENV,
            BaseSource::Settings => "settings file",
            BaseSource::Default => "default",
        }
    }
}

/// Resolves the API base: flag, then `--local`, then environment, then the
/// settings file, then the hosted sandbox.
pub fn resolve_api_base(
    flag: Option<&str>,
    local: bool,
    env: Option<&str>,
    settings: &Settings,
) -> Result<(Url, BaseSource)> {
    let (raw, source) = if let Some(f) = flag.filter(|s| !s.trim().is_empty()) {
        (f.trim(), BaseSource::Flag)
    } else if local {
        (api_base_for_host("localhost"), BaseSource::Local)
    } else if let Some(e) = env.filter(|s| !s.trim().is_empty()) {
        (e.trim(), BaseSource::Env)
    } else if let Some(s) = settings.api_base.as_deref() {
        (s.trim(), BaseSource::Settings)
    } else {
        (REMOTE_API_BASE, BaseSource::Default)
    };
    let url = parse_api_base(raw)?;
    Ok((url, source))
}

pub fn parse_api_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid API base URL '{}'", raw))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("API base URL '{}' must be an http(s) URL", raw);
    }
    Ok(url)
}
