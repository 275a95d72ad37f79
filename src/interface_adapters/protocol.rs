use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::VisitorRecord;

// Request payload for the minute-validation webhook. The platform sends the
// candidate value either under the primary field name or the
// configuration-style one, as a string or a bare number.
#[derive(Debug, Deserialize)]
pub struct MinuteValidationRequest {
    #[serde(rename = "maxDuration")]
    pub max_duration: Option<Value>,
    #[serde(rename = "MAX_DURATION")]
    pub max_duration_config: Option<Value>,
}

impl MinuteValidationRequest {
    // Normalize the candidate value to a raw string before validation, so the
    // validator itself stays single-input.
    pub fn raw_max_duration(&self) -> Option<String> {
        value_as_raw_string(self.max_duration.as_ref())
            .or_else(|| value_as_raw_string(self.max_duration_config.as_ref()))
    }
}

// Render a JSON value the way it would appear as raw user input.
// Null counts as absent; non-scalar values pass through and fail validation.
pub(crate) fn value_as_raw_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

// Response payload for the minute-validation webhook.
#[derive(Debug, Serialize)]
pub struct MinuteValidationResponse {
    #[serde(rename = "maxDuration")]
    pub max_duration: u32,
}

// Webhook envelope delivered by the visitor platform on sign-in/sign-out.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    pub meta: Option<WebhookMeta>,
    pub payload: Option<VisitorPayload>,
}

// Integration context: installation configuration plus the job handle the
// duration summary gets attached to.
#[derive(Debug, Deserialize)]
pub struct WebhookMeta {
    #[serde(default)]
    pub config: HashMap<String, Value>,
    pub job: Option<WebhookJob>,
}

#[derive(Debug, Deserialize)]
pub struct WebhookJob {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct VisitorPayload {
    #[serde(default)]
    pub attributes: VisitorAttributes,
}

#[derive(Debug, Default, Deserialize)]
pub struct VisitorAttributes {
    #[serde(rename = "signed-in-at")]
    pub signed_in_at: Option<String>,
    #[serde(rename = "full-name")]
    pub full_name: Option<String>,
}

impl WebhookRequest {
    // Extract the visitor record, if the envelope carries one. A missing
    // sign-in attribute surfaces later as an invalid timestamp.
    pub fn visitor_record(&self) -> Option<VisitorRecord> {
        let payload = self.payload.as_ref()?;
        Some(VisitorRecord {
            signed_in_at: payload.attributes.signed_in_at.clone().unwrap_or_default(),
            full_name: payload.attributes.full_name.clone(),
        })
    }
}

// Response payload for the sign-in acknowledgment.
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub message: String,
}

// Response payload for the sign-out evaluation.
#[derive(Debug, Serialize)]
pub struct SignOutResponse {
    #[serde(rename = "durationInMinutes")]
    pub duration_in_minutes: i64,
    #[serde(rename = "maxDuration")]
    pub max_duration: u32,
    pub message: String,
}

// Error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
