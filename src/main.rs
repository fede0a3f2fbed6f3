// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use smartmoney::context::AppContext;
use smartmoney::gateway::HttpGateway;
use smartmoney::{cli, commands, config, db};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("smartmoney=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = match matches.get_one::<PathBuf>("db") {
        Some(path) => db::open_at(path)?,
        None => db::open_or_init()?,
    };
    let api_url = config::resolve_api_url(
        matches.get_one::<String>("api-url").map(String::as_str),
        &conn,
    );
    let gateway = HttpGateway::new(&api_url)?;
    let mut ctx = AppContext::new(conn, Box::new(gateway));

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(&mut ctx, sub)?,
        Some(("register", sub)) => commands::auth::register(&mut ctx, sub)?,
        Some(("logout", _)) => commands::auth::logout(&mut ctx)?,
        Some(("whoami", sub)) => commands::auth::whoami(&ctx, sub)?,
        Some(("demo", _)) => commands::auth::demo(&mut ctx)?,
        Some(("dashboard", sub)) => commands::dashboard::show(&ctx, sub)?,
        Some(("sync", _)) => commands::dashboard::sync(&ctx)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut ctx, sub)?,
        Some(("subs", sub)) => commands::subscriptions::show(&ctx, sub)?,
        Some(("achievements", sub)) => commands::achievements::show(&ctx, sub)?,
        Some(("chat", sub)) => commands::chat::send(&ctx, sub)?,
        Some(("scan", sub)) => commands::scan::run(&mut ctx, sub)?,
        Some(("savings", sub)) => commands::savings::handle(&ctx, sub)?,
        Some(("theme", sub)) => commands::preferences::theme(&mut ctx, sub)?,
        Some(("config", sub)) => commands::preferences::config(&ctx, sub, &api_url)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
