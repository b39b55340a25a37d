use thiserror::Error;

/// Which of the two hiring API calls an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    Generate,
    Submit,
}

impl std::fmt::Display for FlowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generate => write!(f, "generateWebhook"),
            Self::Submit => write!(f, "testWebhook"),
        }
    }
}

/// Network-level failures reported by an HTTP transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP client setup failed: {0}")]
    Setup(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Other(String),
}

/// Errors that abort the webhook flow.
///
/// Every variant is terminal: the entry point logs it and exits non-zero.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("failed to generate webhook: status={status}")]
    Generation { status: u16, body: String },

    #[error("missing {field} in generateWebhook response: {body}")]
    MissingField { field: &'static str, body: String },

    #[error("malformed generateWebhook response ({reason}): {body}")]
    MalformedResponse { reason: String, body: String },

    #[error("{stage} request failed")]
    Transport {
        stage: FlowStage,
        #[source]
        source: TransportError,
    },

    #[error("failed to encode {stage} request body: {message}")]
    Serialization { stage: FlowStage, message: String },
}

impl FlowError {
    /// The call the error was raised from.
    pub fn stage(&self) -> FlowStage {
        match self {
            Self::Generation { .. } | Self::MissingField { .. } | Self::MalformedResponse { .. } => {
                FlowStage::Generate
            }
            Self::Transport { stage, .. } | Self::Serialization { stage, .. } => *stage,
        }
    }
}

/// Errors from loading or validating a flow configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid config: {0}")]
    Invalid(String),
}
