// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::dashboard::transaction_table;
use super::{offline_banner, require_identity};
use crate::context::AppContext;
use crate::mock;
use crate::screens::history::HistoryView;
use crate::screens::transaction_form::{Submission, TransactionForm};
use crate::utils::{fmt_money, maybe_print_json};
use anyhow::Result;

pub fn handle(ctx: &mut AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ctx, sub)?,
        Some(("list", sub)) => list(ctx, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ctx: &mut AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let Some(identity) = require_identity(ctx) else {
        return Ok(());
    };
    let mut form = ctx.open_transaction_form();
    if let Some(kind) = sub.get_one::<String>("type") {
        form.kind = kind.parse().map_err(anyhow::Error::msg)?;
    }
    form.amount = sub.get_one::<String>("amount").cloned().unwrap_or_default();
    form.merchant = sub.get_one::<String>("merchant").cloned().unwrap_or_default();
    if let Some(cat) = sub.get_one::<String>("category") {
        form.category = cat.clone();
    }
    form.custom_category = sub.get_one::<String>("other").cloned().unwrap_or_default();
    submit(ctx, &identity, &mut form)
}

pub(crate) fn submit(
    ctx: &AppContext,
    identity: &crate::session::Identity,
    form: &mut TransactionForm,
) -> Result<()> {
    let mut refreshed = false;
    let outcome = form.submit(identity, ctx.gateway(), || refreshed = true)?;
    match outcome {
        Submission::Simulated => println!("{}", mock::DEMO_TRANSACTION_MESSAGE),
        Submission::Recorded => println!("Transaction added."),
    }
    if refreshed {
        let mut history = HistoryView::new();
        history.refresh(identity, ctx.gateway());
        if let Some(latest) = history.transactions().first() {
            println!(
                "Latest: {} {} ({})",
                latest.title,
                fmt_money(latest.amount),
                latest.category
            );
        }
    }
    Ok(())
}

fn list(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let Some(identity) = require_identity(ctx) else {
        return Ok(());
    };
    let mut view = HistoryView::new();
    view.refresh(&identity, ctx.gateway());
    if let Some(err) = view.controller().error() {
        println!("Could not load transactions: {}", err);
        return Ok(());
    }
    let limit = sub
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(usize::MAX);
    let txs: Vec<_> = view.transactions().iter().take(limit).cloned().collect();
    if !maybe_print_json(sub.get_flag("json"), &txs)? {
        offline_banner(view.controller().is_offline());
        if txs.is_empty() {
            println!("No transactions yet.");
        } else {
            println!("{}", transaction_table(&txs));
        }
    }
    Ok(())
}
