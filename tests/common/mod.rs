// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use smartmoney::error::GatewayError;
use smartmoney::gateway::Gateway;
use smartmoney::models::{
    Achievement, BankSyncReport, DashboardSnapshot, NewTransaction, RemoteTransaction,
    ScanResult, Subscription, TxKind,
};
use std::cell::RefCell;
use std::collections::VecDeque;

/// In-process stand-in for the backend. Every call is recorded; queued
/// failures are returned (in order) before falling back to canned data.
#[derive(Default)]
pub struct FakeGateway {
    pub calls: RefCell<Vec<&'static str>>,
    pub failures: RefCell<VecDeque<GatewayError>>,
    pub created: RefCell<Vec<(String, NewTransaction)>>,
    pub scan: RefCell<Option<ScanResult>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(err: GatewayError) -> Self {
        let fake = Self::default();
        fake.fail_next(err);
        fake
    }

    pub fn fail_next(&self, err: GatewayError) {
        self.failures.borrow_mut().push_back(err);
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, name: &'static str) -> Result<(), GatewayError> {
        self.calls.borrow_mut().push(name);
        match self.failures.borrow_mut().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn live_transactions() -> Vec<RemoteTransaction> {
    vec![RemoteTransaction {
        id: "tx-1".into(),
        title: "Salary Deposit".into(),
        date: "2025-11-01".into(),
        amount: 250_000,
        kind: TxKind::Income,
        category: "Salary".into(),
    }]
}

impl Gateway for FakeGateway {
    fn login(&self, _email: &str, _password: &str) -> Result<String, GatewayError> {
        self.record("login")?;
        Ok("user-42".into())
    }

    fn register(
        &self,
        _email: &str,
        _password: &str,
        _full_name: &str,
    ) -> Result<String, GatewayError> {
        self.record("register")?;
        Ok("user-43".into())
    }

    fn fetch_dashboard(&self, _user_id: &str) -> Result<DashboardSnapshot, GatewayError> {
        self.record("dashboard")?;
        Ok(DashboardSnapshot {
            total_balance: 1_000,
            user: "Ada Lovelace".into(),
            currency: Some("NGN".into()),
            recent_transactions: live_transactions(),
        })
    }

    fn create_transaction(
        &self,
        user_id: &str,
        tx: &NewTransaction,
    ) -> Result<(), GatewayError> {
        self.record("create_transaction")?;
        self.created
            .borrow_mut()
            .push((user_id.to_string(), tx.clone()));
        Ok(())
    }

    fn list_subscriptions(&self, _user_id: &str) -> Result<Vec<Subscription>, GatewayError> {
        self.record("subscriptions")?;
        Ok(vec![Subscription {
            id: "s-1".into(),
            name: "DSTV Premium".into(),
            price: 29_500,
            due_date: "Nov 05".into(),
            cycle: "Monthly".into(),
            logo_text: "D".into(),
            color: "bg-sky-500".into(),
        }])
    }

    fn list_achievements(&self, _user_id: &str) -> Result<Vec<Achievement>, GatewayError> {
        self.record("achievements")?;
        Ok(vec![
            Achievement {
                id: "a-1".into(),
                title: "Budget Boss".into(),
                description: "Stay under budget".into(),
                progress: 65,
                completed: false,
                icon_type: "Target".into(),
                color_class: String::new(),
            },
            Achievement {
                id: "a-2".into(),
                title: "Streak Master".into(),
                description: "Login 7 days in a row".into(),
                progress: 85,
                completed: true,
                icon_type: "Zap".into(),
                color_class: String::new(),
            },
        ])
    }

    fn send_chat_message(&self, _user_id: &str, text: &str) -> Result<String, GatewayError> {
        self.record("chat")?;
        Ok(format!("You asked: {}", text))
    }

    fn scan_receipt(&self, _image: &[u8], _file_name: &str) -> Result<ScanResult, GatewayError> {
        self.record("scan")?;
        self.scan
            .borrow()
            .clone()
            .ok_or_else(|| GatewayError::Service("No AI models available.".into()))
    }

    fn sync_bank(&self, _user_id: &str) -> Result<BankSyncReport, GatewayError> {
        self.record("sync_bank")?;
        Ok(BankSyncReport {
            message: "Successfully synced 3 new transactions from GTBank.".into(),
            new_balance: Some(1_500),
            synced_count: Some(3),
        })
    }
}

pub fn network_down() -> GatewayError {
    GatewayError::Network("connection refused".into())
}
