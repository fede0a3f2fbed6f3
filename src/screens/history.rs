// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::gateway::Gateway;
use crate::mock;
use crate::models::RemoteTransaction;
use crate::session::Identity;
use crate::view::{ViewController, ViewState};

/// Transaction list. The backend has no dedicated endpoint, so this reads the
/// recent transactions off the dashboard snapshot.
#[derive(Debug, Default)]
pub struct HistoryView {
    ctl: ViewController<Vec<RemoteTransaction>>,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(
        &mut self,
        identity: &Identity,
        gateway: &dyn Gateway,
    ) -> &ViewState<Vec<RemoteTransaction>> {
        self.ctl.load(identity, mock::transactions, |id| {
            gateway.fetch_dashboard(id).map(|d| d.recent_transactions)
        })
    }

    pub fn controller(&self) -> &ViewController<Vec<RemoteTransaction>> {
        &self.ctl
    }

    pub fn transactions(&self) -> &[RemoteTransaction] {
        self.ctl.data().map(Vec::as_slice).unwrap_or(&[])
    }
}
