use std::fmt::Display;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    DateNotFound,
    StaleDate { found: NaiveDate, today: NaiveDate },
    MalformedContent(String),
}

impl Error {
    pub fn malformed(msg: &str) -> Self {
        Self::MalformedContent(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateNotFound => write!(f, "No menu date found"),
            Self::StaleDate { found, today } => {
                write!(f, "Menu is dated {found}, not today ({today})")
            }
            Self::MalformedContent(msg) => write!(f, "Malformed menu page: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
