// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::context::AppContext;
use crate::session::Identity;
use crate::utils::{confirm, maybe_print_json};
use anyhow::Result;
use serde::Serialize;

fn offer_demo(sub: &clap::ArgMatches) -> impl FnOnce() -> bool + '_ {
    move || {
        sub.get_flag("offline-ok") || confirm("Backend unreachable. Use Offline Demo Mode?")
    }
}

pub fn login(ctx: &mut AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").map(String::as_str).unwrap_or_default();
    let password = sub
        .get_one::<String>("password")
        .map(String::as_str)
        .unwrap_or_default();
    let session = ctx.login(email, password, offer_demo(sub))?;
    announce(session.identity());
    Ok(())
}

pub fn register(ctx: &mut AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").map(String::as_str).unwrap_or_default();
    let password = sub
        .get_one::<String>("password")
        .map(String::as_str)
        .unwrap_or_default();
    let name = sub.get_one::<String>("name").map(String::as_str).unwrap_or_default();
    let session = ctx.register(email, password, name, offer_demo(sub))?;
    announce(session.identity());
    Ok(())
}

fn announce(identity: &Identity) {
    match identity {
        Identity::Demo => println!("Signed in to offline demo mode."),
        other => println!("Signed in as {}", other),
    }
}

pub fn demo(ctx: &mut AppContext) -> Result<()> {
    ctx.enter_demo();
    println!("Offline demo mode on. Data shown is sample data.");
    Ok(())
}

pub fn logout(ctx: &mut AppContext) -> Result<()> {
    ctx.logout();
    println!("Signed out.");
    Ok(())
}

#[derive(Serialize)]
struct WhoAmI<'a> {
    signed_in: bool,
    identity: Option<&'a str>,
    demo: bool,
}

pub fn whoami(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let identity = ctx.identity();
    let info = WhoAmI {
        signed_in: identity.is_some(),
        identity: identity.map(Identity::as_str),
        demo: identity.is_some_and(Identity::is_demo),
    };
    if !maybe_print_json(sub.get_flag("json"), &info)? {
        match identity {
            Some(Identity::Demo) => println!("Offline demo mode"),
            Some(Identity::Placeholder) => println!("Placeholder session (no account)"),
            Some(id) => println!("{}", id),
            None => println!("Not signed in."),
        }
    }
    Ok(())
}
