use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::DeliveryError;
use crate::instance::NotificationMessage;

const GITTER_API_URL: &str = "https://api.gitter.im/v1";

#[derive(Serialize)]
struct ChatMessagePayload<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize, PartialEq)]
struct SentMessage {
    id: String,
}

pub struct GitterClient {
    client: Client,
    base_url: String,
    token: String,
    room: String,
}

#[async_trait]
pub trait Deliver {
    async fn send_message(&self, message: &NotificationMessage) -> Result<(), DeliveryError>;
}

#[async_trait]
impl Deliver for GitterClient {
    async fn send_message(&self, message: &NotificationMessage) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.message_url())
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&ChatMessagePayload {
                text: &message.text,
            })
            .send()
            .await
            .map_err(DeliveryError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(error) => {
                    warn!(%error, %status, "could not read gitter error body");
                    String::new()
                }
            };
            return Err(DeliveryError::Rejected { status, body });
        }

        let sent = response
            .json::<SentMessage>()
            .await
            .map_err(DeliveryError::Transport)?;
        info!(message_id = %sent.id, room = %self.room, "msg sent successfully");
        Ok(())
    }
}

impl GitterClient {
    pub fn new(token: impl Into<String>, room: impl Into<String>) -> Self {
        Self::new_with_base_url(Client::new(), GITTER_API_URL, token, room)
    }

    fn new_with_base_url(
        client: Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        GitterClient {
            client,
            base_url: base_url.into(),
            token: token.into(),
            room: room.into(),
        }
    }

    fn message_url(&self) -> String {
        format!("{}/rooms/{}/chatMessages", self.base_url, self.room)
    }
}
