// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Remote data gateway: one method per backend resource, one request per call.
//!
//! `HttpGateway` talks to the real service. Nothing here retries, caches or
//! substitutes data; that is the job of [`crate::fallback`].

use crate::error::GatewayError;
use crate::models::{
    Achievement, AuthRequest, AuthResponse, BankSyncReport, ChatReply, ChatRequest,
    DashboardSnapshot, NewTransaction, ScanResult, Subscription,
};
use anyhow::Result;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response, multipart};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;
use tracing::debug;

pub trait Gateway {
    /// Returns the user id on success.
    fn login(&self, email: &str, password: &str) -> Result<String, GatewayError>;
    fn register(&self, email: &str, password: &str, full_name: &str)
    -> Result<String, GatewayError>;
    fn fetch_dashboard(&self, user_id: &str) -> Result<DashboardSnapshot, GatewayError>;
    fn create_transaction(&self, user_id: &str, tx: &NewTransaction)
    -> Result<(), GatewayError>;
    fn list_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>, GatewayError>;
    fn list_achievements(&self, user_id: &str) -> Result<Vec<Achievement>, GatewayError>;
    fn send_chat_message(&self, user_id: &str, text: &str) -> Result<String, GatewayError>;
    fn scan_receipt(&self, image: &[u8], file_name: &str) -> Result<ScanResult, GatewayError>;
    fn sync_bank(&self, user_id: &str) -> Result<BankSyncReport, GatewayError>;
}

impl<G: Gateway + ?Sized> Gateway for Rc<G> {
    fn login(&self, email: &str, password: &str) -> Result<String, GatewayError> {
        (**self).login(email, password)
    }
    fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<String, GatewayError> {
        (**self).register(email, password, full_name)
    }
    fn fetch_dashboard(&self, user_id: &str) -> Result<DashboardSnapshot, GatewayError> {
        (**self).fetch_dashboard(user_id)
    }
    fn create_transaction(
        &self,
        user_id: &str,
        tx: &NewTransaction,
    ) -> Result<(), GatewayError> {
        (**self).create_transaction(user_id, tx)
    }
    fn list_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>, GatewayError> {
        (**self).list_subscriptions(user_id)
    }
    fn list_achievements(&self, user_id: &str) -> Result<Vec<Achievement>, GatewayError> {
        (**self).list_achievements(user_id)
    }
    fn send_chat_message(&self, user_id: &str, text: &str) -> Result<String, GatewayError> {
        (**self).send_chat_message(user_id, text)
    }
    fn scan_receipt(&self, image: &[u8], file_name: &str) -> Result<ScanResult, GatewayError> {
        (**self).scan_receipt(image, file_name)
    }
    fn sync_bank(&self, user_id: &str) -> Result<BankSyncReport, GatewayError> {
        (**self).sync_bank(user_id)
    }
}

pub struct HttpGateway {
    base_url: String,
    client: Client,
}

impl HttpGateway {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_client(base_url, crate::utils::http_client()?))
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, req: RequestBuilder, what: &str) -> Result<Response, GatewayError> {
        debug!(request = what, "calling backend");
        req.send()
            .map_err(|e| GatewayError::Network(e.without_url().to_string()))
    }

    fn authenticate(&self, path: &str, body: &AuthRequest<'_>) -> Result<String, GatewayError> {
        let resp = self.send(self.client.post(self.url(path)).json(body), path)?;
        let auth: AuthResponse = read_json(resp)?;
        Ok(auth.user_id)
    }
}

impl Gateway for HttpGateway {
    fn login(&self, email: &str, password: &str) -> Result<String, GatewayError> {
        let body = AuthRequest {
            email,
            password,
            full_name: None,
        };
        self.authenticate("/auth/login", &body)
    }

    fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<String, GatewayError> {
        let body = AuthRequest {
            email,
            password,
            full_name: Some(full_name),
        };
        self.authenticate("/auth/register", &body)
    }

    fn fetch_dashboard(&self, user_id: &str) -> Result<DashboardSnapshot, GatewayError> {
        let resp = self.send(
            self.client.get(self.url(&format!("/dashboard/{}", user_id))),
            "dashboard",
        )?;
        read_json(resp)
    }

    fn create_transaction(
        &self,
        user_id: &str,
        tx: &NewTransaction,
    ) -> Result<(), GatewayError> {
        let resp = self.send(
            self.client
                .post(self.url(&format!("/transactions/{}", user_id)))
                .json(tx),
            "create transaction",
        )?;
        expect_success(resp)
    }

    fn list_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>, GatewayError> {
        let resp = self.send(
            self.client
                .get(self.url(&format!("/subscriptions/{}", user_id))),
            "subscriptions",
        )?;
        read_json(resp)
    }

    fn list_achievements(&self, user_id: &str) -> Result<Vec<Achievement>, GatewayError> {
        let resp = self.send(
            self.client
                .get(self.url(&format!("/achievements/{}", user_id))),
            "achievements",
        )?;
        read_json(resp)
    }

    fn send_chat_message(&self, user_id: &str, text: &str) -> Result<String, GatewayError> {
        let resp = self.send(
            self.client
                .post(self.url(&format!("/chat/{}", user_id)))
                .json(&ChatRequest { message: text }),
            "chat",
        )?;
        let reply: ChatReply = read_json(resp)?;
        Ok(reply.response)
    }

    fn scan_receipt(&self, image: &[u8], file_name: &str) -> Result<ScanResult, GatewayError> {
        let part = multipart::Part::bytes(image.to_vec()).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);
        let resp = self.send(
            self.client.post(self.url("/scan-receipt")).multipart(form),
            "scan receipt",
        )?;
        let body: Value = read_json(resp)?;
        decode_scan(body)
    }

    fn sync_bank(&self, user_id: &str) -> Result<BankSyncReport, GatewayError> {
        let resp = self.send(
            self.client.post(self.url(&format!("/bank/sync/{}", user_id))),
            "bank sync",
        )?;
        read_json(resp)
    }
}

fn read_body(resp: Response) -> Result<String, GatewayError> {
    let status = resp.status();
    let body = resp
        .text()
        .map_err(|e| GatewayError::Network(e.without_url().to_string()))?;
    if !status.is_success() {
        return Err(GatewayError::Service(service_message(status, &body)));
    }
    Ok(body)
}

fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, GatewayError> {
    let body = read_body(resp)?;
    serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
}

fn expect_success(resp: Response) -> Result<(), GatewayError> {
    read_body(resp).map(|_| ())
}

/// The scanner answers 200 even when extraction fails, with `{"error": ...}`
/// (or `null` when it crashed).
pub fn decode_scan(body: Value) -> Result<ScanResult, GatewayError> {
    if let Some(err) = body.get("error").filter(|e| !e.is_null()) {
        let msg = err
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(GatewayError::Service(msg));
    }
    if !body.is_object() {
        return Err(GatewayError::Decode(format!(
            "expected receipt fields, got {}",
            body
        )));
    }
    serde_json::from_value(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Extract a human message from an error body: `detail`, then `error`, then
/// `message`; otherwise the status reason.
pub fn service_message(status: StatusCode, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let field = parsed.as_ref().and_then(|v| {
        ["detail", "error", "message"]
            .iter()
            .find_map(|k| v.get(*k))
            .cloned()
    });
    match field {
        Some(Value::String(s)) if !s.is_empty() => s,
        // FastAPI validation errors come back as a list of {loc, msg, type}.
        Some(Value::Array(items)) => {
            let msgs: Vec<String> = items
                .iter()
                .filter_map(|i| i.get("msg").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            if msgs.is_empty() {
                Value::Array(items).to_string()
            } else {
                msgs.join("; ")
            }
        }
        Some(Value::Null) | None => status_text(status),
        Some(Value::String(_)) => status_text(status),
        Some(other) => other.to_string(),
    }
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}
