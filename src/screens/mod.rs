// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One controller per screen. Each owns its slice of remote state and is
//! driven with the current identity and a gateway passed in by the caller.

pub mod achievements;
pub mod chat;
pub mod dashboard;
pub mod history;
pub mod scanner;
pub mod subscriptions;
pub mod transaction_form;
