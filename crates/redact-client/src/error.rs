use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("not logged in (run `redact auth login`)")]
    NotLoggedIn,

    #[error("{detail} (HTTP {status})")]
    Api { status: u16, detail: String },

    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
