pub mod bug_url;
pub mod domain;
pub mod error;
mod symptoms;

pub use bug_url::{BugUrlError, URL_PLACEHOLDER, build_bug_url, is_web_url};
pub use domain::*;
pub use error::{Error, Result};
pub use symptoms::{SYMPTOM_TYPES, validate_signature};
