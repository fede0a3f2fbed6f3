// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{offline_banner, require_identity};
use crate::context::AppContext;
use crate::screens::achievements::AchievementsView;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn show(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let Some(identity) = require_identity(ctx) else {
        return Ok(());
    };
    let mut view = AchievementsView::new();
    view.refresh(&identity, ctx.gateway());
    if let Some(err) = view.controller().error() {
        println!("Could not load achievements: {}", err);
        return Ok(());
    }
    if maybe_print_json(sub.get_flag("json"), &view.achievements())? {
        return Ok(());
    }
    offline_banner(view.controller().is_offline());
    let rows = view
        .achievements()
        .iter()
        .map(|a| {
            vec![
                a.title.clone(),
                a.description.clone(),
                format!("{}%", a.progress),
                if a.completed { "yes".into() } else { String::new() },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Title", "Description", "Progress", "Done"], rows)
    );
    println!(
        "{} of {} completed",
        view.completed_count(),
        view.achievements().len()
    );
    for a in view.inconsistent() {
        tracing::warn!(title = %a.title, progress = a.progress, "achievement marked completed below 100%");
    }
    Ok(())
}
