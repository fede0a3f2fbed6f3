// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Savings goal with locally persisted progress.
//!
//! Wallet contributions debit the balance through the backend first; the
//! local amount only moves once that debit is confirmed.

use crate::error::{ClientError, ValidationError};
use crate::gateway::Gateway;
use crate::models::NewTransaction;
use crate::session::Identity;
use crate::settings::{get_setting, set_setting};
use chrono::Utc;
use rusqlite::Connection;
use std::str::FromStr;
use tracing::{info, warn};

pub const SAVINGS_KEY: &str = "savings_amount";
pub const TARGET_AMOUNT: i64 = 300_000;
pub const DEFAULT_SAVED: i64 = 150_000;
pub const SAVINGS_MERCHANT: &str = "Savings Goal: Holiday";
pub const SAVINGS_CATEGORY: &str = "Savings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingSource {
    Wallet,
    External,
}

impl FromStr for FundingSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wallet" => Ok(FundingSource::Wallet),
            "external" => Ok(FundingSource::External),
            other => Err(format!(
                "Unknown source '{}', expected wallet or external",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsGoal {
    saved: i64,
    target: i64,
}

impl SavingsGoal {
    /// Reads the stored amount; missing or garbled values start at the default.
    pub fn load(conn: &Connection) -> Self {
        let saved = match get_setting(conn, SAVINGS_KEY) {
            Ok(Some(raw)) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.round() as i64)
                .unwrap_or(DEFAULT_SAVED),
            Ok(None) => DEFAULT_SAVED,
            Err(e) => {
                warn!(error = %e, "savings amount unreadable; using default");
                DEFAULT_SAVED
            }
        };
        Self {
            saved: saved.clamp(0, TARGET_AMOUNT),
            target: TARGET_AMOUNT,
        }
    }

    pub fn saved(&self) -> i64 {
        self.saved
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn remaining(&self) -> i64 {
        self.target - self.saved
    }

    pub fn progress_percent(&self) -> f64 {
        ((self.saved as f64 / self.target as f64) * 100.0).min(100.0)
    }

    /// Add `amount` to the goal. Returns the new saved amount.
    ///
    /// `on_balance_update` fires only after a wallet debit went through (or
    /// was simulated in demo mode).
    pub fn add_funds(
        &mut self,
        conn: &Connection,
        amount: i64,
        source: FundingSource,
        identity: &Identity,
        gateway: &dyn Gateway,
        on_balance_update: impl FnOnce(),
    ) -> Result<i64, ClientError> {
        if amount <= 0 {
            return Err(ValidationError::NonPositiveAmount.into());
        }
        if amount > self.target {
            return Err(ValidationError::AmountAboveTarget(self.target).into());
        }

        match (source, identity) {
            (FundingSource::External, _) => {}
            (FundingSource::Wallet, Identity::Demo) => on_balance_update(),
            (FundingSource::Wallet, Identity::Placeholder) => {
                return Err(ValidationError::NoSession.into());
            }
            (FundingSource::Wallet, Identity::User(user_id)) => {
                let debit = NewTransaction {
                    amount: -amount,
                    merchant_name: SAVINGS_MERCHANT.to_string(),
                    category: SAVINGS_CATEGORY.to_string(),
                    date: Utc::now().to_rfc3339(),
                };
                gateway.create_transaction(user_id, &debit)?;
                on_balance_update();
            }
        }

        self.saved += amount.min(self.remaining());
        if let Err(e) = set_setting(conn, SAVINGS_KEY, &self.saved.to_string()) {
            warn!(error = %e, "could not persist savings amount");
        }
        info!(saved = self.saved, target = self.target, "savings goal updated");
        Ok(self.saved)
    }
}
