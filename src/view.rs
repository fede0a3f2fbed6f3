// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fetch life-cycle shared by every screen:
//! `Idle -> Loading -> {Loaded | Degraded | Failed}`.
//!
//! Each fetch is tagged with a ticket from a per-controller counter. Only the
//! most recently issued ticket may write state, so a slow earlier response can
//! never overwrite a fresher one. Once disposed, the controller ignores every
//! late response.

use crate::error::GatewayError;
use crate::fallback::{self, Resolved};
use crate::session::Identity;
use std::mem;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    /// `previous` keeps the last rendered data so a refresh does not blank the view.
    Loading { previous: Option<T> },
    Loaded(T),
    Degraded(T),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug)]
pub struct ViewController<T> {
    state: ViewState<T>,
    issued: u64,
    disposed: bool,
}

impl<T> Default for ViewController<T> {
    fn default() -> Self {
        Self {
            state: ViewState::Idle,
            issued: 0,
            disposed: false,
        }
    }
}

impl<T: Default> ViewController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Enter `Loading` and hand out the ticket the response must present.
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        let previous = match mem::replace(&mut self.state, ViewState::Idle) {
            ViewState::Loaded(v) | ViewState::Degraded(v) => Some(v),
            ViewState::Loading { previous } => previous,
            ViewState::Idle | ViewState::Failed(_) => None,
        };
        self.state = ViewState::Loading { previous };
        FetchTicket(self.issued)
    }

    /// Apply a response. Returns `false` when it was discarded as stale or
    /// because the view has been disposed.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        result: Result<Resolved<T>, GatewayError>,
    ) -> bool {
        if self.disposed {
            debug!(ticket = ticket.0, "view disposed; dropping response");
            return false;
        }
        if ticket.0 != self.issued {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "dropping stale response"
            );
            return false;
        }
        self.state = match result {
            Ok(Resolved::Live(v)) => ViewState::Loaded(v),
            Ok(Resolved::Degraded(v)) => ViewState::Degraded(v),
            Ok(Resolved::Inert) => ViewState::Loaded(T::default()),
            Err(e) => ViewState::Failed(e.to_string()),
        };
        true
    }

    /// Fetch synchronously through the offline fallback policy.
    pub fn load(
        &mut self,
        identity: &Identity,
        mock: impl FnOnce() -> T,
        call: impl FnOnce(&str) -> Result<T, GatewayError>,
    ) -> &ViewState<T> {
        let ticket = self.begin();
        let result = fallback::resolve(identity, mock, call);
        self.finish(ticket, result);
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            ViewState::Loaded(v) | ViewState::Degraded(v) => Some(v),
            ViewState::Loading { previous } => previous.as_ref(),
            ViewState::Idle | ViewState::Failed(_) => None,
        }
    }

    /// Edit rendered data in place, e.g. for a simulated offline mutation.
    pub fn update_data(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match &mut self.state {
            ViewState::Loaded(v) | ViewState::Degraded(v) => {
                f(v);
                true
            }
            ViewState::Loading { previous: Some(v) } => {
                f(v);
                true
            }
            _ => false,
        }
    }

    /// A spinner only appears while loading with nothing to show yet.
    pub fn shows_spinner(&self) -> bool {
        matches!(self.state, ViewState::Loading { previous: None })
    }

    pub fn is_offline(&self) -> bool {
        matches!(self.state, ViewState::Degraded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
