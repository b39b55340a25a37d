//! Records exchanged with the hiring API after registration.
//!
//! [`GenerationResponse`] is parsed from the generateWebhook reply and holds
//! the access token as a [`SecretString`]; it never appears in `Debug`
//! output. [`SubmissionRequest`] and [`SubmissionResponse`] describe the
//! testWebhook call.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FlowError;

/// Parsed body of a successful generateWebhook call.
#[derive(Debug)]
pub struct GenerationResponse {
    /// Opaque webhook URL handed out by the service. Logged, never called.
    pub webhook: String,
    /// Credential echoed verbatim as the `Authorization` header.
    pub access_token: SecretString,
    /// Every other field of the response, kept for diagnostics.
    pub extra: Map<String, Value>,
}

impl GenerationResponse {
    pub const WEBHOOK_FIELD: &'static str = "webhook";
    pub const ACCESS_TOKEN_FIELD: &'static str = "accessToken";

    /// Parse the raw response body.
    ///
    /// Both `webhook` and `accessToken` must be present, be JSON strings, and
    /// be non-empty. Any failure carries the full body.
    pub fn from_body(body: &str) -> Result<Self, FlowError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| FlowError::MalformedResponse {
                reason: e.to_string(),
                body: body.to_string(),
            })?;

        let Value::Object(mut fields) = value else {
            return Err(FlowError::MalformedResponse {
                reason: "expected a JSON object".to_string(),
                body: body.to_string(),
            });
        };

        let webhook = take_string(&mut fields, Self::WEBHOOK_FIELD, body)?;
        let access_token = take_string(&mut fields, Self::ACCESS_TOKEN_FIELD, body)?;

        Ok(Self {
            webhook,
            access_token: SecretString::from(access_token),
            extra: fields,
        })
    }

    /// The response as JSON with the access token masked, for logging.
    pub fn redacted(&self) -> Value {
        let mut fields = self.extra.clone();
        fields.insert(
            Self::WEBHOOK_FIELD.to_string(),
            Value::String(self.webhook.clone()),
        );
        fields.insert(
            Self::ACCESS_TOKEN_FIELD.to_string(),
            Value::String("[REDACTED]".to_string()),
        );
        Value::Object(fields)
    }
}

fn take_string(
    fields: &mut Map<String, Value>,
    field: &'static str,
    body: &str,
) -> Result<String, FlowError> {
    match fields.remove(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        _ => Err(FlowError::MissingField {
            field,
            body: body.to_string(),
        }),
    }
}

/// Body of `POST /hiring/testWebhook/JAVA`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(rename = "finalQuery")]
    pub final_query: String,
}

impl SubmissionRequest {
    pub fn new(final_query: impl Into<String>) -> Self {
        Self {
            final_query: final_query.into(),
        }
    }
}

/// Status and raw body of the testWebhook reply. Reported, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl SubmissionResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
