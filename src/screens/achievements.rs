// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::gateway::Gateway;
use crate::mock;
use crate::models::Achievement;
use crate::session::Identity;
use crate::view::{ViewController, ViewState};

#[derive(Debug, Default)]
pub struct AchievementsView {
    ctl: ViewController<Vec<Achievement>>,
}

impl AchievementsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(
        &mut self,
        identity: &Identity,
        gateway: &dyn Gateway,
    ) -> &ViewState<Vec<Achievement>> {
        self.ctl
            .load(identity, mock::achievements, |id| gateway.list_achievements(id))
    }

    pub fn controller(&self) -> &ViewController<Vec<Achievement>> {
        &self.ctl
    }

    pub fn achievements(&self) -> &[Achievement] {
        self.ctl.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn completed_count(&self) -> usize {
        self.achievements().iter().filter(|a| a.completed).count()
    }

    /// Entries flagged completed whose progress is below 100. The backend
    /// does not guarantee the two agree; these are reported, not corrected.
    pub fn inconsistent(&self) -> Vec<&Achievement> {
        self.achievements()
            .iter()
            .filter(|a| a.completed && a.progress < 100)
            .collect()
    }
}
