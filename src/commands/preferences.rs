// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config;
use crate::context::AppContext;
use crate::theme::Theme;
use anyhow::Result;

pub fn theme(ctx: &mut AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let theme: Theme = sub
                .get_one::<String>("theme")
                .map(String::as_str)
                .unwrap_or("light")
                .parse()?;
            ctx.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        Some(("toggle", _)) => {
            let theme = ctx.toggle_theme()?;
            println!("Theme set to {}", theme);
        }
        _ => println!("{}", ctx.theme()),
    }
    Ok(())
}

pub fn config(ctx: &AppContext, m: &clap::ArgMatches, active_url: &str) -> Result<()> {
    match m.subcommand() {
        Some(("set-api-url", sub)) => {
            let url = sub.get_one::<String>("url").map(String::as_str).unwrap_or("");
            let saved = config::set_api_url(ctx.conn(), url)?;
            println!("API URL set to {}", saved);
        }
        Some(("reset-api-url", _)) => {
            config::reset_api_url(ctx.conn())?;
            println!("API URL reset to {}", config::DEFAULT_API_URL);
        }
        _ => println!("API URL: {}", active_url),
    }
    Ok(())
}
