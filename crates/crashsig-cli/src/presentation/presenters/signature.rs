use crashsig_types::{Bucket, ExternalBug, SignatureEntry};

use crate::presentation::routes::Routes;
use crate::presentation::view_models::{
    BugLinkViewModel, LinkBugViewModel, ListScope, SignatureDetailViewModel,
    SignatureListViewModel, SignatureRowViewModel,
};

/// Build the listing view model. Rows keep the order of `entries`.
pub fn present_signature_list(
    entries: &[SignatureEntry],
    scope: ListScope,
    routes: &dyn Routes,
) -> SignatureListViewModel {
    let signatures = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| SignatureRowViewModel {
            index,
            id: entry.id.get(),
            short_description: entry.short_description.clone(),
            size: entry.size,
            quality: entry.quality,
            detail_url: routes.signature_view(entry.id),
            bug: entry.bug.as_ref().map(present_bug),
            assign_url: routes.signature_link_bug(entry.id),
            optimization_url: entry
                .has_pending_optimization()
                .then(|| routes.signature_optimize(entry.id)),
        })
        .collect();

    SignatureListViewModel {
        scope,
        is_all: scope == ListScope::All,
        total: entries.len(),
        all_url: routes.signatures_all(),
        watched_url: routes.signatures_watched(),
        signatures,
    }
}

pub fn present_signature_detail(
    bucket: &Bucket,
    crash_count: usize,
    routes: &dyn Routes,
) -> SignatureDetailViewModel {
    SignatureDetailViewModel {
        id: bucket.id.get(),
        short_description: bucket.short_description.clone(),
        signature: pretty_signature(&bucket.signature),
        crash_count,
        frequent: bucket.frequent,
        permanent: bucket.permanent,
        bug: bucket.bug.as_ref().map(present_bug),
        optimized_signature: bucket.optimized_signature.as_deref().map(pretty_signature),
        list_url: routes.signatures_unreported(),
        assign_url: routes.signature_link_bug(bucket.id),
        optimization_url: bucket
            .optimized_signature
            .as_ref()
            .map(|_| routes.signature_optimize(bucket.id)),
    }
}

pub fn present_link_bug(
    bucket: &Bucket,
    providers: Vec<String>,
    routes: &dyn Routes,
) -> LinkBugViewModel {
    LinkBugViewModel {
        id: bucket.id.get(),
        short_description: bucket.short_description.clone(),
        detail_url: routes.signature_view(bucket.id),
        current_bug: bucket.bug.as_ref().map(present_bug),
        providers,
    }
}

/// A bug whose tracker template cannot produce a URL keeps its id as text
/// and loses the link, the rest of the page is unaffected.
pub fn present_bug(bug: &ExternalBug) -> BugLinkViewModel {
    let url = match bug.url() {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::warn!(
                bug = %bug.external_id,
                tracker = %bug.external_type.hostname,
                "cannot build bug link: {}",
                err
            );
            None
        }
    };

    BugLinkViewModel {
        external_id: bug.external_id.clone(),
        closed: bug.closed,
        tracker: bug.external_type.hostname.clone(),
        url,
    }
}

/// Signatures are stored as submitted; show them indented when they parse.
fn pretty_signature(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::RouteTable;
    use crashsig_types::{BucketId, BugProvider};

    fn entry(id: i64) -> SignatureEntry {
        SignatureEntry {
            id: BucketId::new(id),
            short_description: format!("crash {}", id),
            size: 1,
            quality: None,
            bug: None,
            optimized_signature: None,
        }
    }

    fn bug(template: &str) -> ExternalBug {
        ExternalBug {
            id: 1,
            external_id: "1581230".to_string(),
            closed: false,
            external_type: BugProvider {
                id: 1,
                classname: "BugzillaProvider".to_string(),
                hostname: "bugzilla.mozilla.org".to_string(),
                url_template: template.to_string(),
            },
        }
    }

    #[test]
    fn test_rows_keep_order_and_index() {
        let entries = vec![entry(9), entry(3), entry(7)];
        let vm = present_signature_list(&entries, ListScope::Unreported, &RouteTable::default());

        let ids: Vec<i64> = vm.signatures.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 3, 7]);
        let indices: Vec<usize> = vm.signatures.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(vm.total, 3);
        assert!(!vm.is_all);
    }

    #[test]
    fn test_optimization_link_only_when_pending() {
        let mut pending = entry(4);
        pending.optimized_signature = Some("{}".to_string());
        let vm = present_signature_list(
            &[entry(1), pending],
            ListScope::All,
            &RouteTable::default(),
        );

        assert_eq!(vm.signatures[0].optimization_url, None);
        assert_eq!(
            vm.signatures[1].optimization_url.as_deref(),
            Some("/crashmanager/signatures/4/optimize/")
        );
        assert!(vm.is_all);
    }

    #[test]
    fn test_bug_with_broken_template_keeps_id() {
        let vm = present_bug(&bug("https://bugzilla.mozilla.org/"));
        assert_eq!(vm.external_id, "1581230");
        assert_eq!(vm.url, None);

        let vm = present_bug(&bug("https://bugzilla.mozilla.org/show_bug.cgi?id=%s"));
        assert_eq!(
            vm.url.as_deref(),
            Some("https://bugzilla.mozilla.org/show_bug.cgi?id=1581230")
        );
    }

    #[test]
    fn test_bug_label_matches_link_target() {
        let mut padded = bug("https://bugzilla.mozilla.org/show_bug.cgi?id=%s");
        padded.external_id = "50%2F ".to_string();

        let vm = present_bug(&padded);
        assert_eq!(vm.external_id, "50%2F ");
        assert_eq!(
            vm.url.as_deref(),
            Some("https://bugzilla.mozilla.org/show_bug.cgi?id=50%252F%20")
        );
    }

    #[test]
    fn test_pretty_signature_falls_back_to_raw() {
        assert_eq!(pretty_signature("not json"), "not json");
        assert!(pretty_signature(r#"{"symptoms":[]}"#).contains("\n"));
    }
}
