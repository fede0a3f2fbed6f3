// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{ClientError, GatewayError, ValidationError};
use crate::gateway::Gateway;
use crate::mock;
use crate::models::{ChatMessage, Sender};
use crate::session::Identity;
use tracing::warn;

pub const GREETING: &str = "Hi! I can see your transactions. Ask me anything!";
pub const CONNECTION_FAILED: &str = "Connection failed.";

/// How a sent message was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Answered,
    /// Offline reply or connection notice appended instead of a real answer.
    Offline,
}

#[derive(Debug)]
pub struct ChatView {
    messages: Vec<ChatMessage>,
    pub input: String,
    next_id: u64,
}

impl Default for ChatView {
    fn default() -> Self {
        let mut view = Self {
            messages: Vec::new(),
            input: String::new(),
            next_id: 1,
        };
        view.push(Sender::Assistant, GREETING.to_string());
        view
    }
}

impl ChatView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Assistant)
    }

    fn push(&mut self, sender: Sender, text: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage { id, sender, text });
    }

    /// Send the current input. An unreachable backend is answered with a
    /// connection notice; a service error takes the message back out of the
    /// conversation and restores the input so the user can retry.
    pub fn send(
        &mut self,
        identity: &Identity,
        gateway: &dyn Gateway,
    ) -> Result<Delivery, ClientError> {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }
        let user_id = match identity {
            Identity::Placeholder => return Err(ValidationError::NoSession.into()),
            Identity::Demo => None,
            Identity::User(id) => Some(id.as_str()),
        };

        let draft = std::mem::take(&mut self.input);
        self.push(Sender::User, text.clone());

        let Some(user_id) = user_id else {
            self.push(Sender::Assistant, mock::OFFLINE_CHAT_REPLY.to_string());
            return Ok(Delivery::Offline);
        };

        match gateway.send_chat_message(user_id, &text) {
            Ok(reply) => {
                self.push(Sender::Assistant, reply);
                Ok(Delivery::Answered)
            }
            Err(GatewayError::Network(reason)) => {
                warn!(%reason, "chat backend unreachable");
                self.push(Sender::Assistant, CONNECTION_FAILED.to_string());
                Ok(Delivery::Offline)
            }
            Err(e) => {
                self.messages.pop();
                self.input = draft;
                Err(e.into())
            }
        }
    }
}
