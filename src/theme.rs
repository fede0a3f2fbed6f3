// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::{get_setting, set_setting};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(anyhow::anyhow!(
                "Invalid theme '{}', expected dark or light",
                other
            )),
        }
    }
}

/// Unset or unreadable preferences fall back to light.
pub fn load(conn: &Connection) -> Theme {
    match get_setting(conn, THEME_KEY) {
        Ok(Some(v)) => v.parse().unwrap_or_default(),
        Ok(None) => Theme::default(),
        Err(e) => {
            tracing::warn!(error = %e, "theme preference unreadable");
            Theme::default()
        }
    }
}

pub fn save(conn: &Connection, theme: Theme) -> Result<()> {
    set_setting(conn, THEME_KEY, theme.as_str())
}
