use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The service answered, but not with `200 OK`.
    #[error("Error: {}", .0.as_u16())]
    UnexpectedStatus(StatusCode),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Cannot build request: {0}")]
    Request(#[from] http::Error),

    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Cannot decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to load settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Cannot write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("Invalid limit '{0}', expected a number or \"all\"")]
    InvalidLimit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
