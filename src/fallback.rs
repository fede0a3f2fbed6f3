// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::GatewayError;
use crate::session::Identity;
use tracing::warn;

/// What a view should render after a fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    /// Data came from the backend.
    Live(T),
    /// Static offline data, either because of the demo identity or because the
    /// backend was unreachable.
    Degraded(T),
    /// The identity is the placeholder; nothing was fetched.
    Inert,
}

impl<T> Resolved<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Resolved::Degraded(_))
    }

    pub fn into_inner(self) -> Option<T> {
        match self {
            Resolved::Live(v) | Resolved::Degraded(v) => Some(v),
            Resolved::Inert => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Resolved::Live(v) => Resolved::Live(f(v)),
            Resolved::Degraded(v) => Resolved::Degraded(f(v)),
            Resolved::Inert => Resolved::Inert,
        }
    }
}

/// Run `call` for a real identity, substituting `mock` when the identity is
/// the demo sentinel (without calling) or when the backend is unreachable.
/// Service and decode errors are returned to the caller untouched.
pub fn resolve<T>(
    identity: &Identity,
    mock: impl FnOnce() -> T,
    call: impl FnOnce(&str) -> Result<T, GatewayError>,
) -> Result<Resolved<T>, GatewayError> {
    match identity {
        Identity::Demo => Ok(Resolved::Degraded(mock())),
        Identity::Placeholder => Ok(Resolved::Inert),
        Identity::User(id) => match call(id) {
            Ok(v) => Ok(Resolved::Live(v)),
            Err(GatewayError::Network(reason)) => {
                warn!(%reason, "backend unreachable; showing offline data");
                Ok(Resolved::Degraded(mock()))
            }
            Err(e) => Err(e),
        },
    }
}
