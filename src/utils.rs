// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use anyhow::Result;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use std::io::{self, BufRead, Write};

const UA: &str = concat!("smartmoney/", env!("CARGO_PKG_VERSION"));

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Parse a user-entered amount ("15400", "15,400", "₦2,500.50") into whole units.
pub fn parse_amount(s: &str) -> Result<i64, ValidationError> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '₦' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let v: f64 = cleaned
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(s.trim().to_string()))?;
    if !v.is_finite() {
        return Err(ValidationError::InvalidAmount(s.trim().to_string()));
    }
    Ok(v.round() as i64)
}

pub fn fmt_money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-₦{}", grouped)
    } else {
        format!("₦{}", grouped)
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}

/// Ask a yes/no question on the terminal; anything but y/yes is a no.
pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
