//! WebhookFlowRunner -- registers, then submits the SQL answer.
//!
//! The two calls run strictly in order: the submission needs the access token
//! returned by the generation call. Each call gets a single attempt.
//!
//! A non-2xx generation reply aborts the run. A non-2xx submission reply does
//! not: the service grades out-of-band, so the status and body are reported
//! and the run still succeeds. Only a transport failure during submission is
//! fatal.

use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{Instrument, debug, info, info_span, trace, warn};

use sqlhook_types::config::FlowConfig;
use sqlhook_types::error::{FlowError, FlowStage};
use sqlhook_types::registration::QuestionSet;
use sqlhook_types::webhook::{GenerationResponse, SubmissionResponse};

use super::plan::{generation_body, submission_body};
use super::transport::{HttpTransport, JsonPost};

/// Result of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct FlowOutcome {
    pub webhook: String,
    pub question: Option<QuestionSet>,
    pub submission: SubmissionResponse,
}

/// Drives the generate-then-submit handshake over an [`HttpTransport`].
pub struct WebhookFlowRunner<'a, T: HttpTransport> {
    transport: &'a T,
    config: &'a FlowConfig,
}

impl<'a, T: HttpTransport> WebhookFlowRunner<'a, T> {
    pub fn new(transport: &'a T, config: &'a FlowConfig) -> Self {
        Self { transport, config }
    }

    /// Run the whole flow once.
    pub async fn run(&self) -> Result<FlowOutcome, FlowError> {
        info!("Starting webhook generation flow");

        let question = QuestionSet::for_reg_no(&self.config.reg_no);
        match question {
            Some(question) => info!(
                reg_no = %self.config.reg_no,
                %question,
                "Question assigned by registration number"
            ),
            None => warn!(
                reg_no = %self.config.reg_no,
                "Registration number has no trailing digits, cannot derive question"
            ),
        }

        let generated = self.generate().await?;
        let submission = self.submit(&generated).await?;

        info!("Flow completed");

        Ok(FlowOutcome {
            webhook: generated.webhook,
            question,
            submission,
        })
    }

    /// POST the registration and extract the webhook and access token.
    pub async fn generate(&self) -> Result<GenerationResponse, FlowError> {
        let body = generation_body(self.config)?;
        let span = info_span!("generate_webhook", url = %self.config.generate_url);

        let reply = self
            .transport
            .post_json(JsonPost {
                url: &self.config.generate_url,
                authorization: None,
                body: &body,
            })
            .instrument(span)
            .await
            .map_err(|source| FlowError::Transport {
                stage: FlowStage::Generate,
                source,
            })?;

        if !reply.is_success() || is_empty_body(&reply.body) {
            return Err(FlowError::Generation {
                status: reply.status,
                body: reply.body,
            });
        }

        let generated = GenerationResponse::from_body(&reply.body)?;
        info!(
            status = reply.status,
            response = %generated.redacted(),
            "generateWebhook response"
        );
        trace!(body = %reply.body, "generateWebhook raw response");

        Ok(generated)
    }

    /// POST the final query authorized by the raw access token.
    pub async fn submit(
        &self,
        generated: &GenerationResponse,
    ) -> Result<SubmissionResponse, FlowError> {
        let body = submission_body(self.config)?;
        let span = info_span!("submit_solution", url = %self.config.submit_url);

        debug!(webhook = %generated.webhook, "Submitting final query");

        let reply = self
            .transport
            .post_json(JsonPost {
                url: &self.config.submit_url,
                authorization: Some(generated.access_token.expose_secret()),
                body: &body,
            })
            .instrument(span)
            .await
            .map_err(|source| FlowError::Transport {
                stage: FlowStage::Submit,
                source,
            })?;

        if !reply.is_success() {
            warn!(status = reply.status, "testWebhook returned a non-success status");
        }

        Ok(SubmissionResponse {
            status_code: reply.status,
            body: reply.body,
        })
    }
}

fn is_empty_body(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.is_empty() || trimmed == "null"
}
