// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::{get_setting, remove_setting, set_setting};
use anyhow::Result;
use rusqlite::Connection;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const API_URL_KEY: &str = "api_url";

/// Backend origin: explicit override first, then the stored setting, then the default.
pub fn resolve_api_url(explicit: Option<&str>, conn: &Connection) -> String {
    let chosen = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => url.to_string(),
        None => match get_setting(conn, API_URL_KEY) {
            Ok(Some(url)) if !url.trim().is_empty() => url,
            Ok(_) => DEFAULT_API_URL.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read api_url setting; using default");
                DEFAULT_API_URL.to_string()
            }
        },
    };
    normalize_url(&chosen)
}

pub fn set_api_url(conn: &Connection, url: &str) -> Result<String> {
    let url = normalize_url(url);
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("Invalid API URL '{}', expected http:// or https://", url);
    }
    set_setting(conn, API_URL_KEY, &url)?;
    Ok(url)
}

pub fn reset_api_url(conn: &Connection) -> Result<()> {
    remove_setting(conn, API_URL_KEY)
}

fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
