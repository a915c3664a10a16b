use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::info;

use crate::error::ConnectivityError;

pub struct CheckIpClient {
    client: Client,
    url: String,
}

#[async_trait]
pub trait CheckIp {
    /// Returns the raw response body of the echo endpoint.
    async fn check_ip(&self) -> Result<String, ConnectivityError>;
}

#[async_trait]
impl CheckIp for CheckIpClient {
    async fn check_ip(&self) -> Result<String, ConnectivityError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(ConnectivityError::Transport)?;
        ensure_ok(response.status())?;

        let body = response
            .bytes()
            .await
            .map_err(ConnectivityError::Transport)?;
        let ip = ensure_ip(&body)?;
        info!(ip = ip.trim(), "egress check passed");
        Ok(ip)
    }
}

impl CheckIpClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::new_with_client(Client::new(), url)
    }

    fn new_with_client(client: Client, url: impl Into<String>) -> Self {
        CheckIpClient {
            client,
            url: url.into(),
        }
    }
}

fn ensure_ok(status: StatusCode) -> Result<(), ConnectivityError> {
    if status != StatusCode::OK {
        return Err(ConnectivityError::Non200Response(status));
    }
    Ok(())
}

/// Emptiness is judged on the raw bytes, before any decoding.
fn ensure_ip(body: &[u8]) -> Result<String, ConnectivityError> {
    if body.is_empty() {
        return Err(ConnectivityError::NoIp);
    }
    Ok(String::from_utf8_lossy(body).into_owned())
}
