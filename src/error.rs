use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrustError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("signals parse error: {0}")]
    SignalsParse(String),

    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrustError>;
