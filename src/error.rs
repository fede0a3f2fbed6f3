// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures reported by the remote data gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend could not be reached at all.
    #[error("backend unreachable: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status; the message comes from the body.
    #[error("{0}")]
    Service(String),
    /// The backend answered 2xx but the body was not the expected shape.
    #[error("unexpected response from backend: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::Network(_))
    }
}

/// Client-side refusals; no request is sent when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Amount is required")]
    MissingAmount,
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must be positive")]
    NonPositiveAmount,
    #[error("Amount cannot exceed the goal of {0}")]
    AmountAboveTarget(i64),
    #[error("Merchant / title cannot be empty")]
    EmptyMerchant,
    #[error("Please specify a category")]
    EmptyCategory,
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Full name is required to register")]
    MissingFullName,
    #[error("No receipt selected")]
    NoReceipt,
    #[error("Not signed in to a real account")]
    NoSession,
}

/// Outcome of a user-triggered action: either refused locally or failed remotely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
