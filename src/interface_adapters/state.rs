use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::domain::ports::{Clock, ConfigSource, RecordSink};
use crate::interface_adapters::protocol::value_as_raw_string;

// Shared application state for the webhook service.
#[derive(Clone)]
pub struct AppState {
    // Shared HTTP client for calls back to the visitor platform.
    pub http: Client,
    pub platform_base_url: String,
    pub platform_token: Option<String>,
}

// System clock adapter used by the sign-out use case.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

// Configuration source backed by the webhook envelope's config map.
pub struct EnvelopeConfig<'a> {
    pub entries: &'a HashMap<String, Value>,
}

impl ConfigSource for EnvelopeConfig<'_> {
    fn get(&self, key: &str) -> Option<String> {
        value_as_raw_string(self.entries.get(key))
    }
}

// Record sink that attaches labeled notes to a platform job over HTTP.
pub struct JobAttachmentSink {
    http: Client,
    base_url: String,
    token: Option<String>,
    job_id: String,
}

#[derive(Serialize)]
struct AttachmentBody<'a> {
    label: &'a str,
    value: &'a str,
}

impl JobAttachmentSink {
    pub fn new(state: &AppState, job_id: String) -> Self {
        Self {
            http: state.http.clone(),
            base_url: state.platform_base_url.clone(),
            token: state.platform_token.clone(),
            job_id,
        }
    }
}

#[async_trait]
impl RecordSink for JobAttachmentSink {
    async fn attach(&self, label: &str, value: &str) -> Result<(), String> {
        let url = format!(
            "{}/jobs/{}/attachments",
            self.base_url.trim_end_matches('/'),
            self.job_id
        );

        let mut request = self.http.post(url).json(&AttachmentBody { label, value });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| format!("attachment transport error: {err}"))?;

        // Keep upstream status so the handler can log a useful error.
        let status = response.status();
        if !status.is_success() {
            return Err(format!("attachment upstream error {status}"));
        }

        Ok(())
    }
}
