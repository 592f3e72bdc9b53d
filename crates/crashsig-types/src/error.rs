use std::fmt;

use crate::bug_url::BugUrlError;

/// Result type for crashsig-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Signature text is not a valid signature object
    InvalidSignature(String),

    /// Bug URL could not be built from its provider template
    BugUrl(BugUrlError),

    /// Signature text is not valid JSON
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSignature(msg) => write!(f, "Invalid signature: {}", msg),
            Error::BugUrl(err) => write!(f, "Bug URL error: {}", err),
            Error::Json(err) => write!(f, "Invalid signature JSON: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidSignature(_) => None,
            Error::BugUrl(err) => Some(err),
            Error::Json(err) => Some(err),
        }
    }
}

impl From<BugUrlError> for Error {
    fn from(err: BugUrlError) -> Self {
        Error::BugUrl(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
