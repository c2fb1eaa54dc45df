use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Product not found '{identifier}'")]
    ProductNotFound { identifier: String },

    #[error("Case not found '{product_identifier}.{case_identifier}'")]
    CaseNotFound {
        product_identifier: String,
        case_identifier: String,
    },

    #[error("Individual loan not found '{product_identifier}.{case_identifier}'")]
    ParametersNotFound {
        product_identifier: String,
        case_identifier: String,
    },

    #[error("Malformed case parameters payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Store request failed: {0}")]
    Store(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfig { field: String },
}

impl ContextError {
    /// True for the authoritative lookup misses, false for structural and
    /// adapter failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProductNotFound { .. }
                | Self::CaseNotFound { .. }
                | Self::ParametersNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ContextError>;
