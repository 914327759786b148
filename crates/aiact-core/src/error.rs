use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiActError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("curl not found - web search requires curl on PATH")]
    CurlNotFound,

    #[error("Search failed: {message}")]
    SearchFailed { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Home directory not found")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, AiActError>;

impl AiActError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput { .. } => 2,
            Self::ConfigParse { .. } => 3,
            Self::ConfigKeyNotFound { .. } => 4,
            Self::CurlNotFound => 5,
            Self::SearchFailed { .. } => 6,
            _ => 1,
        }
    }
}
