//! Request bodies for the two calls, built from a [`FlowConfig`].
//!
//! The runner sends exactly these bodies; `--dry-run` prints them instead.

use serde::Serialize;

use sqlhook_types::config::FlowConfig;
use sqlhook_types::error::{FlowError, FlowStage};
use sqlhook_types::registration::QuestionSet;
use sqlhook_types::webhook::SubmissionRequest;

/// JSON body of the generateWebhook call.
pub fn generation_body(config: &FlowConfig) -> Result<String, FlowError> {
    encode(FlowStage::Generate, &config.registration())
}

/// JSON body of the testWebhook call.
///
/// Depends only on the configured query, never on the generation response.
pub fn submission_body(config: &FlowConfig) -> Result<String, FlowError> {
    encode(
        FlowStage::Submit,
        &SubmissionRequest::new(config.final_query.as_str()),
    )
}

fn encode<T: Serialize>(stage: FlowStage, value: &T) -> Result<String, FlowError> {
    serde_json::to_string(value).map_err(serialization_error(stage))
}

fn serialization_error(stage: FlowStage) -> impl FnOnce(serde_json::Error) -> FlowError {
    move |e| FlowError::Serialization {
        stage,
        message: e.to_string(),
    }
}

/// What a run would send, without sending it.
///
/// The bodies are the encoded strings the runner sends, re-read as JSON for
/// display.
#[derive(Debug, Clone, Serialize)]
pub struct FlowPlan {
    pub generate_url: String,
    pub generation_body: serde_json::Value,
    pub submit_url: String,
    pub submission_body: serde_json::Value,
    pub question: Option<QuestionSet>,
}

impl FlowPlan {
    pub fn from_config(config: &FlowConfig) -> Result<Self, FlowError> {
        let generation = generation_body(config)?;
        let submission = submission_body(config)?;

        Ok(Self {
            generate_url: config.generate_url.clone(),
            generation_body: serde_json::from_str(&generation)
                .map_err(serialization_error(FlowStage::Generate))?,
            submit_url: config.submit_url.clone(),
            submission_body: serde_json::from_str(&submission)
                .map_err(serialization_error(FlowStage::Submit))?,
            question: QuestionSet::for_reg_no(&config.reg_no),
        })
    }
}
