use serde::{Deserialize, Serialize};

use crate::bug_url::{BugUrlError, build_bug_url};

/// External bug tracker a bug lives in (the bug's "external type").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugProvider {
    pub id: i64,
    /// Tracker kind, e.g. `BugzillaProvider`
    pub classname: String,
    /// Tracker host, unique per provider
    pub hostname: String,
    /// Bug URL with a `%s` placeholder for the external id
    pub url_template: String,
}

/// A bug in an external tracker linked to a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalBug {
    pub id: i64,
    pub external_id: String,
    pub closed: bool,
    pub external_type: BugProvider,
}

impl ExternalBug {
    pub fn url(&self) -> Result<String, BugUrlError> {
        build_bug_url(&self.external_type.url_template, &self.external_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(template: &str) -> BugProvider {
        BugProvider {
            id: 1,
            classname: "BugzillaProvider".to_string(),
            hostname: "bugzilla.mozilla.org".to_string(),
            url_template: template.to_string(),
        }
    }

    #[test]
    fn test_bug_url_uses_provider_template() {
        let bug = ExternalBug {
            id: 3,
            external_id: "1581230".to_string(),
            closed: false,
            external_type: provider("https://bugzilla.mozilla.org/show_bug.cgi?id=%s"),
        };
        assert_eq!(
            bug.url().unwrap(),
            "https://bugzilla.mozilla.org/show_bug.cgi?id=1581230"
        );
    }

    #[test]
    fn test_bug_url_with_broken_template() {
        let bug = ExternalBug {
            id: 3,
            external_id: "1581230".to_string(),
            closed: true,
            external_type: provider("https://bugzilla.mozilla.org/"),
        };
        assert!(bug.url().is_err());
    }
}
