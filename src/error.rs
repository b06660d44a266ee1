//! Error types for the FPL mini-league reporter

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Unexpected response from {endpoint}: {detail}")]
    UnexpectedShape { endpoint: String, detail: String },

    #[error("Invalid league ID: {input:?}")]
    InvalidLeagueId { input: String },

    #[error("Invalid page number: {input:?}")]
    InvalidPage { input: String },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },
}
