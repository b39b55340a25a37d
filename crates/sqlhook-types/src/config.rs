//! Flow configuration for sqlhook.
//!
//! `FlowConfig` holds the endpoints, the registration identity, and the SQL
//! answer. Every field defaults to the built-in value, so running without a
//! config file and running with an empty one behave identically.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::registration::GenerationRequest;
use crate::solution::FINAL_QUERY;

pub const DEFAULT_GENERATE_URL: &str =
    "https://bfhldevapigw.healthrx.co.in/hiring/generateWebhook/JAVA";
pub const DEFAULT_SUBMIT_URL: &str = "https://bfhldevapigw.healthrx.co.in/hiring/testWebhook/JAVA";
pub const DEFAULT_NAME: &str = "John Doe";
pub const DEFAULT_REG_NO: &str = "REG12348";
pub const DEFAULT_EMAIL: &str = "john@example.com";

/// Inputs of a single webhook flow run.
///
/// Optionally loaded from a TOML file passed with `--config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Webhook generation endpoint.
    #[serde(default = "default_generate_url")]
    pub generate_url: String,

    /// Submission endpoint. The webhook URL returned by the service is not used.
    #[serde(default = "default_submit_url")]
    pub submit_url: String,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_reg_no")]
    pub reg_no: String,

    #[serde(default = "default_email")]
    pub email: String,

    /// SQL text submitted as `finalQuery`.
    #[serde(default = "default_final_query")]
    pub final_query: String,
}

fn default_generate_url() -> String {
    DEFAULT_GENERATE_URL.to_string()
}

fn default_submit_url() -> String {
    DEFAULT_SUBMIT_URL.to_string()
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_reg_no() -> String {
    DEFAULT_REG_NO.to_string()
}

fn default_email() -> String {
    DEFAULT_EMAIL.to_string()
}

fn default_final_query() -> String {
    FINAL_QUERY.to_string()
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            generate_url: default_generate_url(),
            submit_url: default_submit_url(),
            name: default_name(),
            reg_no: default_reg_no(),
            email: default_email(),
            final_query: default_final_query(),
        }
    }
}

impl FlowConfig {
    /// Registration payload for the generation call.
    pub fn registration(&self) -> GenerationRequest {
        GenerationRequest::new(&self.name, &self.reg_no, &self.email)
    }

    /// Check that endpoints are http(s) URLs and no identity field is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("generate_url", &self.generate_url)?;
        check_url("submit_url", &self.submit_url)?;

        for (field, value) in [
            ("name", &self.name),
            ("reg_no", &self.reg_no),
            ("email", &self.email),
            ("final_query", &self.final_query),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }

        Ok(())
    }
}

fn check_url(field: &str, raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::Invalid(format!("{field} is not a valid URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!(
            "{field} must be an http(s) URL: '{raw}'"
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::Invalid(format!(
            "{field} has no valid host: '{raw}'"
        )));
    }

    Ok(())
}
