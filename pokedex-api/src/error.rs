use thiserror::Error;

#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Coarse failure class carried by a failed view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
}

impl PokedexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PokedexError::Json(_) => ErrorKind::Parse,
            PokedexError::Http(e) if e.is_decode() => ErrorKind::Parse,
            PokedexError::Http(_)
            | PokedexError::Status { .. }
            | PokedexError::InvalidIdentifier(_)
            | PokedexError::InvalidBaseUrl(_) => ErrorKind::Network,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Parse => write!(f, "malformed response"),
        }
    }
}
