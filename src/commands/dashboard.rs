// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{offline_banner, require_identity};
use crate::context::AppContext;
use crate::models::RemoteTransaction;
use crate::screens::dashboard::DashboardView;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn show(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let Some(identity) = require_identity(ctx) else {
        return Ok(());
    };
    let mut view = DashboardView::new();
    view.refresh(&identity, ctx.gateway());
    if let Some(err) = view.controller().error() {
        println!("Could not load dashboard: {}", err);
        return Ok(());
    }
    let Some(snap) = view.snapshot() else {
        return Ok(());
    };
    if maybe_print_json(sub.get_flag("json"), snap)? {
        return Ok(());
    }
    offline_banner(view.controller().is_offline());
    println!("Welcome back, {}!", view.greeting_name());
    println!("Total balance: {}", fmt_money(snap.total_balance));

    let goal = ctx.savings();
    println!(
        "Savings goal: {} / {} ({:.0}%)",
        fmt_money(goal.saved()),
        fmt_money(goal.target()),
        goal.progress_percent()
    );
    if !snap.recent_transactions.is_empty() {
        println!("{}", transaction_table(&snap.recent_transactions));
    }
    Ok(())
}

pub fn sync(ctx: &AppContext) -> Result<()> {
    let Some(identity) = require_identity(ctx) else {
        return Ok(());
    };
    let mut view = DashboardView::new();
    view.refresh(&identity, ctx.gateway());
    let message = view.sync_bank(&identity, ctx.gateway())?;
    println!("{}", message);
    if let Some(balance) = view.balance() {
        println!("Total balance: {}", fmt_money(balance));
    }
    Ok(())
}

pub(crate) fn transaction_table(txs: &[RemoteTransaction]) -> comfy_table::Table {
    let rows: Vec<Vec<String>> = txs
        .iter()
        .map(|t| {
            vec![
                t.date.clone(),
                t.title.clone(),
                t.category.clone(),
                fmt_money(t.amount),
            ]
        })
        .collect();
    pretty_table(&["Date", "Title", "Category", "Amount"], rows)
}
