// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{ClientError, ValidationError};
use crate::gateway::Gateway;
use crate::mock;
use crate::models::DashboardSnapshot;
use crate::session::Identity;
use crate::view::{ViewController, ViewState};
use tracing::info;

#[derive(Debug, Default)]
pub struct DashboardView {
    ctl: ViewController<DashboardSnapshot>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(
        &mut self,
        identity: &Identity,
        gateway: &dyn Gateway,
    ) -> &ViewState<DashboardSnapshot> {
        self.ctl
            .load(identity, mock::dashboard, |id| gateway.fetch_dashboard(id))
    }

    pub fn controller(&self) -> &ViewController<DashboardSnapshot> {
        &self.ctl
    }

    pub fn controller_mut(&mut self) -> &mut ViewController<DashboardSnapshot> {
        &mut self.ctl
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.ctl.data()
    }

    pub fn balance(&self) -> Option<i64> {
        self.snapshot().map(|s| s.total_balance)
    }

    pub fn greeting_name(&self) -> &str {
        self.snapshot().map(|s| s.first_name()).unwrap_or("User")
    }

    /// Pull new transactions from the linked bank. Returns the message to show.
    /// In demo mode the balance is credited locally instead.
    pub fn sync_bank(
        &mut self,
        identity: &Identity,
        gateway: &dyn Gateway,
    ) -> Result<String, ClientError> {
        match identity {
            Identity::Demo => {
                self.ctl
                    .update_data(|s| s.total_balance += mock::DEMO_SYNC_BONUS);
                Ok(mock::DEMO_SYNC_MESSAGE.to_string())
            }
            Identity::Placeholder => Err(ValidationError::NoSession.into()),
            Identity::User(user_id) => {
                let report = gateway.sync_bank(user_id)?;
                info!(synced = ?report.synced_count, "bank sync complete");
                self.refresh(identity, gateway);
                Ok(report.message)
            }
        }
    }
}
