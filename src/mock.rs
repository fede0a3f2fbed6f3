// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static data shown in offline mode.

use crate::models::{Achievement, DashboardSnapshot, RemoteTransaction, Subscription, TxKind};

pub const DEMO_BALANCE: i64 = 452_000;
pub const DEMO_USER: &str = "John (Offline)";
/// Simulated credit applied by a bank sync in demo mode.
pub const DEMO_SYNC_BONUS: i64 = 5_000;
pub const DEMO_SYNC_MESSAGE: &str = "Bank sync simulated! (Offline Mode)";
pub const DEMO_TRANSACTION_MESSAGE: &str = "Transaction simulated (Offline Mode)";
pub const OFFLINE_CHAT_REPLY: &str =
    "I am in offline mode, so I can't reach the real AI brain right now. But I'm listening!";

pub fn transactions() -> Vec<RemoteTransaction> {
    vec![
        RemoteTransaction {
            id: "1".into(),
            title: "Uber Ride".into(),
            date: "2025-10-26".into(),
            amount: -2_500,
            kind: TxKind::Expense,
            category: "Transport".into(),
        },
        RemoteTransaction {
            id: "2".into(),
            title: "Shoprite Grocery".into(),
            date: "2025-10-25".into(),
            amount: -15_400,
            kind: TxKind::Expense,
            category: "Food".into(),
        },
    ]
}

pub fn dashboard() -> DashboardSnapshot {
    DashboardSnapshot {
        total_balance: DEMO_BALANCE,
        user: DEMO_USER.into(),
        currency: None,
        recent_transactions: transactions(),
    }
}

pub fn subscriptions() -> Vec<Subscription> {
    vec![
        Subscription {
            id: "1".into(),
            name: "Netflix Premium".into(),
            price: 4_500,
            due_date: "Oct 23".into(),
            cycle: "Monthly".into(),
            logo_text: "N".into(),
            color: "bg-red-600".into(),
        },
        Subscription {
            id: "2".into(),
            name: "Spotify Duo".into(),
            price: 1_900,
            due_date: "Nov 01".into(),
            cycle: "Monthly".into(),
            logo_text: "S".into(),
            color: "bg-green-500".into(),
        },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    vec![Achievement {
        id: "1".into(),
        title: "Savings Ninja".into(),
        description: "Save 20% of income".into(),
        progress: 100,
        completed: true,
        icon_type: "Zap".into(),
        color_class: "text-yellow-500 bg-yellow-100".into(),
    }]
}
