// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::require_identity;
use crate::context::AppContext;
use crate::savings::FundingSource;
use crate::utils::{fmt_money, maybe_print_json, parse_amount};
use anyhow::Result;
use serde::Serialize;

pub fn handle(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("status", sub)) => status(ctx, sub)?,
        Some(("add", sub)) => add(ctx, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct GoalStatus {
    saved: i64,
    target: i64,
    progress_percent: f64,
}

fn status(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let goal = ctx.savings();
    let out = GoalStatus {
        saved: goal.saved(),
        target: goal.target(),
        progress_percent: goal.progress_percent(),
    };
    if !maybe_print_json(sub.get_flag("json"), &out)? {
        println!(
            "Holiday fund: {} of {} ({:.0}%), {} to go",
            fmt_money(out.saved),
            fmt_money(out.target),
            out.progress_percent,
            fmt_money(goal.remaining())
        );
    }
    Ok(())
}

fn add(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let Some(identity) = require_identity(ctx) else {
        return Ok(());
    };
    let amount = parse_amount(sub.get_one::<String>("amount").map(String::as_str).unwrap_or(""))?;
    let source: FundingSource = sub
        .get_one::<String>("source")
        .map(String::as_str)
        .unwrap_or("wallet")
        .parse()
        .map_err(anyhow::Error::msg)?;
    let mut goal = ctx.savings();
    let mut debited = false;
    let saved = goal.add_funds(
        ctx.conn(),
        amount,
        source,
        &identity,
        ctx.gateway(),
        || debited = true,
    )?;
    println!("Saved {} of {}", fmt_money(saved), fmt_money(goal.target()));
    if debited {
        println!("Wallet debited {}", fmt_money(amount));
    }
    Ok(())
}
