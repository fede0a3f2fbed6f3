// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{offline_banner, require_identity};
use crate::context::AppContext;
use crate::screens::subscriptions::SubscriptionsView;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn show(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let Some(identity) = require_identity(ctx) else {
        return Ok(());
    };
    let mut view = SubscriptionsView::new();
    view.refresh(&identity, ctx.gateway());
    if let Some(err) = view.controller().error() {
        println!("Could not load subscriptions: {}", err);
        return Ok(());
    }
    if maybe_print_json(sub.get_flag("json"), &view.subscriptions())? {
        return Ok(());
    }
    offline_banner(view.controller().is_offline());
    if view.subscriptions().is_empty() {
        println!("No subscriptions.");
        return Ok(());
    }
    let rows = view
        .subscriptions()
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                fmt_money(s.price),
                s.cycle.clone(),
                s.due_date.clone(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Name", "Price", "Cycle", "Due"], rows));
    println!("Monthly total: {}", fmt_money(view.monthly_total()));
    Ok(())
}
