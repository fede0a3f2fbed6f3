// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Hands a receipt scan over to the transaction form, exactly once.

use crate::models::{ScanResult, TxKind};
use tracing::debug;

/// Categories the transaction form offers; anything else goes under `Other`.
pub const KNOWN_CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Bills",
    "Shopping",
    "Salary",
    "Entertainment",
];
pub const OTHER_CATEGORY: &str = "Other";
pub const DEFAULT_CATEGORY: &str = "Food";

/// Initial form values derived from a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefill {
    pub kind: TxKind,
    /// Empty when the scanner found no total.
    pub amount: String,
    pub merchant: String,
    /// One of [`KNOWN_CATEGORIES`] or [`OTHER_CATEGORY`].
    pub category: String,
    pub custom_category: String,
}

impl Prefill {
    pub fn from_scan(result: ScanResult) -> Self {
        let scanned = result
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let (category, custom_category) = if KNOWN_CATEGORIES.contains(&scanned.as_str()) {
            (scanned, String::new())
        } else {
            (OTHER_CATEGORY.to_string(), scanned)
        };
        Prefill {
            kind: TxKind::Expense,
            amount: if result.total_amount == 0 {
                String::new()
            } else {
                result.total_amount.unsigned_abs().to_string()
            },
            merchant: result.merchant_name,
            category,
            custom_category,
        }
    }
}

/// Single-slot mailbox between the scanner and the transaction form. A new
/// scan replaces an unconsumed one; taking empties the slot.
#[derive(Debug, Default)]
pub struct ScanBridge {
    pending: Option<ScanResult>,
}

impl ScanBridge {
    pub fn offer(&mut self, result: ScanResult) {
        if self.pending.is_some() {
            debug!("replacing unconsumed scan result");
        }
        self.pending = Some(result);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn take(&mut self) -> Option<Prefill> {
        self.pending.take().map(Prefill::from_scan)
    }
}
