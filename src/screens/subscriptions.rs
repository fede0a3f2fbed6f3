// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::gateway::Gateway;
use crate::mock;
use crate::models::Subscription;
use crate::session::Identity;
use crate::view::{ViewController, ViewState};

#[derive(Debug, Default)]
pub struct SubscriptionsView {
    ctl: ViewController<Vec<Subscription>>,
}

impl SubscriptionsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(
        &mut self,
        identity: &Identity,
        gateway: &dyn Gateway,
    ) -> &ViewState<Vec<Subscription>> {
        self.ctl
            .load(identity, mock::subscriptions, |id| gateway.list_subscriptions(id))
    }

    pub fn controller(&self) -> &ViewController<Vec<Subscription>> {
        &self.ctl
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        self.ctl.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of prices billed monthly; a blank cycle counts as monthly.
    pub fn monthly_total(&self) -> i64 {
        self.subscriptions()
            .iter()
            .filter(|s| s.cycle.is_empty() || s.cycle.eq_ignore_ascii_case("monthly"))
            .map(|s| s.price)
            .sum()
    }
}
