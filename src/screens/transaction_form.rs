// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{ClientError, ValidationError};
use crate::gateway::Gateway;
use crate::models::{NewTransaction, TxKind};
use crate::scan::{DEFAULT_CATEGORY, OTHER_CATEGORY, Prefill};
use crate::session::Identity;
use crate::utils::parse_amount;
use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Recorded,
    /// Demo mode: nothing was sent.
    Simulated,
}

/// Add-transaction form. Field values are kept as typed so that a failed
/// submission leaves them untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub kind: TxKind,
    pub amount: String,
    pub merchant: String,
    pub category: String,
    pub custom_category: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            kind: TxKind::Expense,
            amount: String::new(),
            merchant: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            custom_category: String::new(),
        }
    }
}

impl TransactionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefill(prefill: Prefill) -> Self {
        let mut form = Self::default();
        form.apply_prefill(prefill);
        form
    }

    /// Takes the prefill by value, so it cannot be applied twice.
    pub fn apply_prefill(&mut self, prefill: Prefill) {
        self.kind = prefill.kind;
        self.amount = prefill.amount;
        self.merchant = prefill.merchant;
        self.category = prefill.category;
        self.custom_category = prefill.custom_category;
    }

    pub fn final_category(&self) -> &str {
        if self.category == OTHER_CATEGORY {
            self.custom_category.trim()
        } else {
            &self.category
        }
    }

    pub fn build(&self, now: DateTime<Utc>) -> Result<NewTransaction, ValidationError> {
        let amount = parse_amount(&self.amount)?;
        if amount <= 0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        let merchant = self.merchant.trim();
        if merchant.is_empty() {
            return Err(ValidationError::EmptyMerchant);
        }
        let category = self.final_category();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        Ok(NewTransaction {
            amount: self.kind.signed(amount),
            merchant_name: merchant.to_string(),
            category: category.to_string(),
            date: now.to_rfc3339(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate, send, and on success clear the form and call `on_added` so
    /// the owning view can refetch. On failure the fields stay as they were.
    pub fn submit(
        &mut self,
        identity: &Identity,
        gateway: &dyn Gateway,
        on_added: impl FnOnce(),
    ) -> Result<Submission, ClientError> {
        let tx = self.build(Utc::now())?;
        let outcome = match identity {
            Identity::Placeholder => return Err(ValidationError::NoSession.into()),
            Identity::Demo => Submission::Simulated,
            Identity::User(user_id) => {
                gateway.create_transaction(user_id, &tx)?;
                info!(amount = tx.amount, category = %tx.category, "transaction recorded");
                Submission::Recorded
            }
        };
        self.reset();
        on_added();
        Ok(outcome)
    }
}
