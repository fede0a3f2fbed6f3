// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod achievements;
pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod preferences;
pub mod savings;
pub mod scan;
pub mod subscriptions;
pub mod transactions;

use crate::context::{AppContext, Screen};
use crate::session::Identity;

/// The current identity, or a hint to sign in when there is no session.
pub(crate) fn require_identity(ctx: &AppContext) -> Option<Identity> {
    match (ctx.screen(), ctx.identity()) {
        (Screen::Main(_), Some(identity)) => Some(identity.clone()),
        _ => {
            println!("Not signed in. Run `smartmoney login` or `smartmoney demo`.");
            None
        }
    }
}

pub(crate) fn offline_banner(offline: bool) {
    if offline {
        println!("(offline: showing sample data)");
    }
}
