// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::require_identity;
use super::transactions::submit;
use crate::context::AppContext;
use crate::screens::scanner::ReceiptScanner;
use crate::utils::maybe_print_json;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(ctx: &mut AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let Some(identity) = require_identity(ctx) else {
        return Ok(());
    };
    let Some(path) = sub.get_one::<PathBuf>("file") else {
        return Ok(());
    };
    let mut scanner = ReceiptScanner::new();
    scanner.select_file(path)?;
    let result = match scanner.scan(ctx.gateway()) {
        Ok(r) => r,
        Err(e) => {
            println!("Scan failed: {}", e);
            return Ok(());
        }
    };
    if maybe_print_json(sub.get_flag("json"), &result)? && !sub.get_flag("record") {
        return Ok(());
    }
    ctx.on_scan_complete(result);

    let mut form = ctx.open_transaction_form();
    println!("Merchant: {}", form.merchant);
    println!("Amount:   {}", form.amount);
    println!("Category: {}", form.final_category());
    if sub.get_flag("record") {
        submit(ctx, &identity, &mut form)?;
    } else {
        println!("Re-run with --record to add this expense.");
    }
    Ok(())
}
