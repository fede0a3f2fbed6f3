// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::{get_setting, remove_setting, set_setting};
use rusqlite::Connection;
use std::fmt;
use tracing::{info, warn};

pub const SESSION_KEY: &str = "smartmoney_userid";
/// Forces every view into offline mode.
pub const DEMO_IDENTITY: &str = "offline-demo";
/// "No real session yet": views skip fetching and render empty states.
pub const PLACEHOLDER_IDENTITY: &str = "PASTE_YOUR_ID_HERE";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    User(String),
    Demo,
    Placeholder,
}

impl Identity {
    /// Returns `None` for an empty or blank value.
    pub fn parse(raw: &str) -> Option<Identity> {
        let raw = raw.trim();
        match raw {
            "" => None,
            DEMO_IDENTITY => Some(Identity::Demo),
            PLACEHOLDER_IDENTITY => Some(Identity::Placeholder),
            other => Some(Identity::User(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Identity::User(id) => id,
            Identity::Demo => DEMO_IDENTITY,
            Identity::Placeholder => PLACEHOLDER_IDENTITY,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Identity::Demo)
    }

    /// The id to put in request paths, if this identity refers to a real account.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Identity::User(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    identity: Identity,
}

impl Session {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Persists the authenticated identity under a single key. Store failures
/// never surface: an unreadable store is the same as having no session.
pub struct SessionStore<'a> {
    conn: &'a Connection,
}

impl<'a> SessionStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn restore(&self) -> Option<Session> {
        match get_setting(self.conn, SESSION_KEY) {
            Ok(Some(raw)) => Identity::parse(&raw).map(|identity| Session { identity }),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "session store unreadable; starting signed out");
                None
            }
        }
    }

    pub fn commit(&self, identity: Identity) -> Session {
        if let Err(e) = set_setting(self.conn, SESSION_KEY, identity.as_str()) {
            warn!(error = %e, "could not persist session; it will not survive a restart");
        }
        info!(identity = %identity, "session started");
        Session { identity }
    }

    pub fn clear(&self) {
        if let Err(e) = remove_setting(self.conn, SESSION_KEY) {
            warn!(error = %e, "could not remove persisted session");
        }
        info!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_parse_to_their_variants() {
        assert_eq!(Identity::parse("offline-demo"), Some(Identity::Demo));
        assert_eq!(
            Identity::parse("PASTE_YOUR_ID_HERE"),
            Some(Identity::Placeholder)
        );
        assert_eq!(
            Identity::parse(" abc-123 "),
            Some(Identity::User("abc-123".into()))
        );
        assert_eq!(Identity::parse("  "), None);
    }

    #[test]
    fn only_real_users_have_a_path_id() {
        assert_eq!(Identity::Demo.user_id(), None);
        assert_eq!(Identity::Placeholder.user_id(), None);
        assert_eq!(Identity::User("u1".into()).user_id(), Some("u1"));
    }
}
