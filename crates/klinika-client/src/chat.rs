//! Assistant chat endpoint client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use klinika_chat::{AssistantTurn, ChatBackend, ChatError};
use klinika_core::config::ApiConfig;
use klinika_core::types::{Card, ChatMessage};

use crate::join_url;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    message: Option<String>,
    #[serde(default)]
    cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// `POST /api/chat` client. Each call posts the entire transcript.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    url: String,
}

impl ChatClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            url: join_url(&config.base_url, &config.chat_path),
        }
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn complete(&self, transcript: &[ChatMessage]) -> Result<AssistantTurn, ChatError> {
        let response = self
            .http
            .post(&self.url)
            .json(&ChatRequest {
                messages: transcript,
            })
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let ok = response.status().is_success();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        parse_chat_body(ok, status, &body)
    }
}

/// Decode a chat response body according to the endpoint contract:
/// `{ message, cards? }` on success, `{ error }` on failure. A success body
/// without `message` is an error.
fn parse_chat_body(ok: bool, status: u16, body: &str) -> Result<AssistantTurn, ChatError> {
    if !ok {
        if let Ok(err) = serde_json::from_str::<ErrorBody>(body) {
            return Err(ChatError::Backend(err.error));
        }
        return Err(ChatError::Transport(format!("HTTP {}", status)));
    }

    let reply: ChatReply =
        serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    let message = reply.message.ok_or(ChatError::MissingMessage)?;
    Ok(AssistantTurn {
        message,
        cards: reply.cards,
    })
}
