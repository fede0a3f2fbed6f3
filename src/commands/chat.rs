// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::require_identity;
use crate::context::AppContext;
use crate::screens::chat::ChatView;
use anyhow::Result;

pub fn send(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let Some(identity) = require_identity(ctx) else {
        return Ok(());
    };
    let mut chat = ChatView::new();
    chat.input = sub
        .get_many::<String>("message")
        .map(|parts| parts.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    chat.send(&identity, ctx.gateway())?;
    if let Some(reply) = chat.last_reply() {
        println!("{}", reply.text);
    }
    Ok(())
}
