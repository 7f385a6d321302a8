pub mod ci_cmd;
pub mod publish_cmd;
pub mod resolve_cmd;

pub mod manifest;
pub mod resolver;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwitcherError {
    #[error("{0}")]
    Message(String),
    #[error("failed to fetch manifest: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("malformed manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type SwitcherResult<T> = Result<T, SwitcherError>;
