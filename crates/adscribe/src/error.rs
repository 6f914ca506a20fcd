use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdScribeError {
    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),

    #[error("Duplicate campaign id: {0}")]
    DuplicateId(String),

    #[error("Invalid campaign: {0}")]
    Validation(String),

    #[error("Corrupted data under key '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AdScribeError>;
