use std::fmt;

/// Failure while turning a view model into output text.
#[derive(Debug)]
pub enum RenderError {
    /// HTML template failed to render
    Template(askama::Error),

    /// JSON serialization failed
    Json(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Template(err) => write!(f, "Template rendering failed: {}", err),
            RenderError::Json(err) => write!(f, "JSON rendering failed: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Template(err) => Some(err),
            RenderError::Json(err) => Some(err),
        }
    }
}

impl From<askama::Error> for RenderError {
    fn from(err: askama::Error) -> Self {
        RenderError::Template(err)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Json(err)
    }
}
