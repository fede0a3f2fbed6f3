// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Expense,
    Income,
}

impl TxKind {
    /// Sign an entered amount so it matches the kind: expenses are negative,
    /// income positive, whatever sign the user typed.
    pub fn signed(self, amount: i64) -> i64 {
        match self {
            TxKind::Expense => -amount.saturating_abs(),
            TxKind::Income => amount.saturating_abs(),
        }
    }

    pub fn of_amount(amount: i64) -> Self {
        if amount > 0 {
            TxKind::Income
        } else {
            TxKind::Expense
        }
    }
}

impl std::str::FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" => Ok(TxKind::Expense),
            "income" => Ok(TxKind::Income),
            other => Err(format!("Unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTransaction {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub date: String,
    #[serde(deserialize_with = "de_amount")]
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(deserialize_with = "de_amount")]
    pub total_balance: i64,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub user: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub recent_transactions: Vec<RemoteTransaction>,
}

impl DashboardSnapshot {
    /// First word of the display name, used for the greeting.
    pub fn first_name(&self) -> &str {
        self.user.split_whitespace().next().unwrap_or("User")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "de_amount")]
    pub price: i64,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub due_date: String,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub cycle: String,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub logo_text: String,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub description: String,
    #[serde(deserialize_with = "de_progress")]
    pub progress: u8,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub icon_type: String,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub color_class: String,
}

/// Fields extracted from a scanned receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub merchant_name: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_amount: i64,
    #[serde(default)]
    pub category: Option<String>,
}

/// Body of `POST /transactions/{user_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: i64,
    pub merchant_name: String,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(deserialize_with = "de_id")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankSyncReport {
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub message: String,
    #[serde(default, deserialize_with = "de_opt_amount")]
    pub new_balance: Option<i64>,
    #[serde(default)]
    pub synced_count: Option<u32>,
}

// The backend stores money as floats and ids as either UUID strings or
// integers; normalise both at the edge.

fn amount_from_value(v: &Value) -> Result<i64, String> {
    match v {
        Value::Number(n) => n
            .as_f64()
            .map(|f| f.round() as i64)
            .ok_or_else(|| format!("amount {} out of range", n)),
        Value::String(s) => {
            let cleaned: String = s.chars().filter(|c| *c != ',' && *c != '₦').collect();
            cleaned
                .trim()
                .parse::<f64>()
                .map(|f| f.round() as i64)
                .map_err(|_| format!("invalid amount '{}'", s))
        }
        Value::Null => Ok(0),
        other => Err(format!("invalid amount {}", other)),
    }
}

fn de_amount<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let v = Value::deserialize(d)?;
    amount_from_value(&v).map_err(de::Error::custom)
}

fn de_opt_amount<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    let v = Value::deserialize(d)?;
    if v.is_null() {
        return Ok(None);
    }
    amount_from_value(&v).map(Some).map_err(de::Error::custom)
}

fn de_progress<'de, D: Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
    let v = Value::deserialize(d)?;
    let raw = amount_from_value(&v).map_err(de::Error::custom)?;
    Ok(raw.clamp(0, 100) as u8)
}

fn de_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("invalid id {}", other))),
    }
}

fn de_nullable_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}
