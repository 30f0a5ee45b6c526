// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backup acknowledgement client.
//!
//! After a backup, a short confirmation message can be requested from an
//! external text-generation endpoint. The reply is only logged; failures
//! never reach the caller of the backup.

use serde::{Deserialize, Serialize};
use std::time::Duration;

const ACK_TIMEOUT: Duration = Duration::from_secs(10);

/// Request body sent to the acknowledgement endpoint.
#[derive(Debug, Serialize)]
struct AcknowledgeRequest {
    count: usize,
    prompt: String,
}

/// Expected reply from the acknowledgement endpoint.
#[derive(Debug, Deserialize)]
struct AcknowledgeResponse {
    message: String,
}

/// Errors from the acknowledgement call.
#[derive(Debug, thiserror::Error)]
pub enum AcknowledgeError {
    #[error("Acknowledgement request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Acknowledgement endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// HTTP client for backup acknowledgements.
#[derive(Clone)]
pub struct BackupAcknowledger {
    http: reqwest::Client,
    url: String,
}

impl BackupAcknowledger {
    pub fn new(url: impl Into<String>) -> Result<Self, AcknowledgeError> {
        let http = reqwest::Client::builder().timeout(ACK_TIMEOUT).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Ask for a confirmation message for a backup of `count` activities.
    pub async fn acknowledge(&self, count: usize) -> Result<String, AcknowledgeError> {
        let body = AcknowledgeRequest {
            count,
            prompt: format!(
                "The user has backed up {} sports activities. \
                 Acknowledge this with a brief confirmation message.",
                count
            ),
        };

        let response = self.http.post(&self.url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AcknowledgeError::Status { status, body });
        }

        let reply: AcknowledgeResponse = response.json().await?;
        Ok(reply.message)
    }

    /// Fire off an acknowledgement without waiting for it.
    pub fn spawn_acknowledge(&self, count: usize) -> tokio::task::JoinHandle<()> {
        let acknowledger = self.clone();
        tokio::spawn(async move {
            match acknowledger.acknowledge(count).await {
                Ok(message) => tracing::info!(count, message = %message, "Backup acknowledged"),
                Err(e) => tracing::warn!(
                    count,
                    error = %e,
                    "Backup acknowledgement failed, but backup was saved"
                ),
            }
        })
    }
}
