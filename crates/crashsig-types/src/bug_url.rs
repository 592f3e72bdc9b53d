use std::fmt;

/// Placeholder replaced by the external bug id in a provider URL template.
pub const URL_PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BugUrlError {
    /// Template carries no `%s` placeholder
    MissingPlaceholder { template: String },

    /// External id is empty, substitution would point at the tracker root
    EmptyExternalId,

    /// Substituted URL is not http(s); never emitted as a link target
    UnsupportedScheme { url: String },
}

impl fmt::Display for BugUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BugUrlError::MissingPlaceholder { template } => write!(
                f,
                "URL template '{}' has no '{}' placeholder",
                template, URL_PLACEHOLDER
            ),
            BugUrlError::EmptyExternalId => write!(f, "external bug id is empty"),
            BugUrlError::UnsupportedScheme { url } => {
                write!(f, "bug URL '{}' is not an http(s) URL", url)
            }
        }
    }
}

impl std::error::Error for BugUrlError {}

/// Build the URL of an external bug by substituting its id into the
/// provider's URL template.
///
/// Every `%s` in `template` is replaced with the id as stored. Characters that
/// would end or split a query component are percent-encoded, `%` included;
/// HTML escaping is left to the caller. Only `http` and `https` results are
/// returned.
///
/// ```
/// use crashsig_types::build_bug_url;
///
/// let url = build_bug_url("https://bugzilla.mozilla.org/show_bug.cgi?id=%s", "1234").unwrap();
/// assert_eq!(url, "https://bugzilla.mozilla.org/show_bug.cgi?id=1234");
/// ```
pub fn build_bug_url(template: &str, external_id: &str) -> Result<String, BugUrlError> {
    if !template.contains(URL_PLACEHOLDER) {
        return Err(BugUrlError::MissingPlaceholder {
            template: template.to_string(),
        });
    }

    if external_id.trim().is_empty() {
        return Err(BugUrlError::EmptyExternalId);
    }

    let url = template.replace(URL_PLACEHOLDER, &encode_component(external_id));
    if !is_web_url(&url) {
        return Err(BugUrlError::UnsupportedScheme { url });
    }
    Ok(url)
}

/// True for `http://` and `https://` URLs, scheme matched case-insensitively.
pub fn is_web_url(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}

fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '"' => out.push_str("%22"),
            '#' => out.push_str("%23"),
            '&' => out.push_str("%26"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '?' => out.push_str("%3F"),
            _ => out.push(c),
        }
    }
    out
}
