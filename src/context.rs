// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Application context: the one place that owns local storage, the gateway,
//! the session and the theme. Controllers receive what they need from it
//! explicitly.

use crate::error::{ClientError, GatewayError, ValidationError};
use crate::gateway::Gateway;
use crate::models::ScanResult;
use crate::savings::SavingsGoal;
use crate::scan::ScanBridge;
use crate::screens::transaction_form::TransactionForm;
use crate::session::{Identity, Session, SessionStore};
use crate::theme::{self, Theme};
use anyhow::Result;
use rusqlite::Connection;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Chat,
    Transactions,
    Scan,
    Subscriptions,
    Achievements,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Main(Tab),
}

pub struct AppContext {
    conn: Connection,
    gateway: Box<dyn Gateway>,
    session: Option<Session>,
    theme: Theme,
    tab: Tab,
    scan: ScanBridge,
}

impl AppContext {
    /// Restores the persisted session and theme.
    pub fn new(conn: Connection, gateway: Box<dyn Gateway>) -> Self {
        let session = SessionStore::new(&conn).restore();
        let theme = theme::load(&conn);
        Self {
            conn,
            gateway,
            session,
            theme,
            tab: Tab::default(),
            scan: ScanBridge::default(),
        }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(Session::identity)
    }

    /// No session always means the sign-in screen.
    pub fn screen(&self) -> Screen {
        match self.session {
            Some(_) => Screen::Main(self.tab),
            None => Screen::Auth,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        theme::save(&self.conn, theme)?;
        self.theme = theme;
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    /// Sign in. When the backend cannot be reached, `use_offline_demo`
    /// decides whether to continue in demo mode instead.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        use_offline_demo: impl FnOnce() -> bool,
    ) -> Result<&Session, ClientError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }
        let attempt = self.gateway.login(email.trim(), password);
        self.finish_auth(attempt, use_offline_demo)
    }

    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        full_name: &str,
        use_offline_demo: impl FnOnce() -> bool,
    ) -> Result<&Session, ClientError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }
        if full_name.trim().is_empty() {
            return Err(ValidationError::MissingFullName.into());
        }
        let attempt = self
            .gateway
            .register(email.trim(), password, full_name.trim());
        self.finish_auth(attempt, use_offline_demo)
    }

    fn finish_auth(
        &mut self,
        attempt: Result<String, GatewayError>,
        use_offline_demo: impl FnOnce() -> bool,
    ) -> Result<&Session, ClientError> {
        let identity = match attempt {
            Ok(user_id) => Identity::parse(&user_id)
                .ok_or_else(|| GatewayError::Decode("empty user_id".into()))?,
            Err(GatewayError::Network(reason)) => {
                if !use_offline_demo() {
                    return Err(GatewayError::Network(reason).into());
                }
                warn!(%reason, "backend unreachable; continuing in offline demo mode");
                Identity::Demo
            }
            Err(e) => return Err(e.into()),
        };
        Ok(self.start_session(identity))
    }

    /// Start the offline demo without contacting the backend.
    pub fn enter_demo(&mut self) -> &Session {
        self.start_session(Identity::Demo)
    }

    fn start_session(&mut self, identity: Identity) -> &Session {
        let session = SessionStore::new(&self.conn).commit(identity);
        self.tab = Tab::Dashboard;
        self.session.insert(session)
    }

    pub fn logout(&mut self) {
        SessionStore::new(&self.conn).clear();
        self.session = None;
        self.tab = Tab::Dashboard;
        self.scan = ScanBridge::default();
        info!("signed out");
    }

    /// Queue a scan for the transaction form and switch to the dashboard,
    /// which opens the form.
    pub fn on_scan_complete(&mut self, result: ScanResult) {
        self.scan.offer(result);
        self.tab = Tab::Dashboard;
    }

    pub fn has_pending_scan(&self) -> bool {
        self.scan.is_pending()
    }

    /// A fresh form, prefilled from a pending scan if there is one. The
    /// pending scan is consumed.
    pub fn open_transaction_form(&mut self) -> TransactionForm {
        match self.scan.take() {
            Some(prefill) => TransactionForm::with_prefill(prefill),
            None => TransactionForm::new(),
        }
    }

    pub fn savings(&self) -> SavingsGoal {
        SavingsGoal::load(&self.conn)
    }
}
