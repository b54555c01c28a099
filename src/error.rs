use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::parse;
use std::fmt::{self, Display, Formatter};

/// Why a menu could not be produced. Cloned to every caller waiting on the
/// same fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Transport(String),
    Parse(parse::Error),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "Request error: {}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            // today's menu is not up yet
            Error::Parse(parse::Error::DateNotFound | parse::Error::StaleDate { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Error::Parse(parse::Error::MalformedContent(_)) | Error::Transport(_) => {
                StatusCode::BAD_GATEWAY
            }
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
