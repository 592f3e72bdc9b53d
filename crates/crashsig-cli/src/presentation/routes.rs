use crashsig_types::BucketId;

use super::view_models::ListScope;

/// Link targets used by presenters. Each method returns an absolute path.
pub trait Routes {
    fn signatures_unreported(&self) -> String;
    fn signatures_all(&self) -> String;
    fn signatures_watched(&self) -> String;
    fn signature_view(&self, id: BucketId) -> String;
    fn signature_link_bug(&self, id: BucketId) -> String;
    fn signature_optimize(&self, id: BucketId) -> String;
    fn crashes(&self) -> String;
}

/// Pages served under the route table's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Signatures(ListScope),
    SignatureView(BucketId),
    SignatureLinkBug(BucketId),
    SignatureOptimize(BucketId),
    Crashes,
}

/// Default routing: everything lives under one path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    prefix: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new("/crashmanager")
    }
}

impl RouteTable {
    pub fn new(prefix: &str) -> Self {
        let trimmed = prefix.trim().trim_end_matches('/');
        let prefix = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { prefix }
    }

    /// Map a request path back to a page. Trailing slashes are optional.
    pub fn resolve(&self, path: &str) -> Option<Page> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }

        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Page::Index),
            ["crashes"] => Some(Page::Crashes),
            ["signatures"] => Some(Page::Signatures(ListScope::Unreported)),
            ["signatures", "all"] => Some(Page::Signatures(ListScope::All)),
            ["signatures", "watch"] => Some(Page::Signatures(ListScope::Watched)),
            ["signatures", id] => id.parse().ok().map(Page::SignatureView),
            ["signatures", id, "linkbug"] => id.parse().ok().map(Page::SignatureLinkBug),
            ["signatures", id, "optimize"] => id.parse().ok().map(Page::SignatureOptimize),
            _ => None,
        }
    }
}

impl Routes for RouteTable {
    fn signatures_unreported(&self) -> String {
        format!("{}/signatures/", self.prefix)
    }

    fn signatures_all(&self) -> String {
        format!("{}/signatures/all/", self.prefix)
    }

    fn signatures_watched(&self) -> String {
        format!("{}/signatures/watch/", self.prefix)
    }

    fn signature_view(&self, id: BucketId) -> String {
        format!("{}/signatures/{}/", self.prefix, id)
    }

    fn signature_link_bug(&self, id: BucketId) -> String {
        format!("{}/signatures/{}/linkbug/", self.prefix, id)
    }

    fn signature_optimize(&self, id: BucketId) -> String {
        format!("{}/signatures/{}/optimize/", self.prefix, id)
    }

    fn crashes(&self) -> String {
        format!("{}/crashes/", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_under_default_prefix() {
        let routes = RouteTable::default();
        let id = BucketId::new(5);
        assert_eq!(routes.signature_view(id), "/crashmanager/signatures/5/");
        assert_eq!(
            routes.signature_link_bug(id),
            "/crashmanager/signatures/5/linkbug/"
        );
        assert_eq!(
            routes.signature_optimize(id),
            "/crashmanager/signatures/5/optimize/"
        );
        assert_eq!(routes.signatures_all(), "/crashmanager/signatures/all/");
        assert_eq!(
            routes.signatures_watched(),
            "/crashmanager/signatures/watch/"
        );
    }

    #[test]
    fn test_prefix_normalization() {
        assert_eq!(RouteTable::new("triage/").crashes(), "/triage/crashes/");
        assert_eq!(RouteTable::new("/").signatures_unreported(), "/signatures/");
        assert_eq!(RouteTable::new("").crashes(), "/crashes/");
    }

    #[test]
    fn test_resolve_round_trips_generated_links() {
        let routes = RouteTable::default();
        let id = BucketId::new(12);

        assert_eq!(
            routes.resolve(&routes.signature_view(id)),
            Some(Page::SignatureView(id))
        );
        assert_eq!(
            routes.resolve(&routes.signature_link_bug(id)),
            Some(Page::SignatureLinkBug(id))
        );
        assert_eq!(
            routes.resolve(&routes.signatures_watched()),
            Some(Page::Signatures(ListScope::Watched))
        );
        assert_eq!(routes.resolve("/crashmanager"), Some(Page::Index));
        assert_eq!(routes.resolve("/crashmanager/crashes"), Some(Page::Crashes));
    }

    #[test]
    fn test_resolve_rejects_unknown_paths() {
        let routes = RouteTable::default();
        assert_eq!(routes.resolve("/elsewhere/signatures/"), None);
        assert_eq!(routes.resolve("/crashmanagerx/signatures/"), None);
        assert_eq!(routes.resolve("/crashmanager/signatures/abc/"), None);
        assert_eq!(routes.resolve("/crashmanager/signatures/1/2/3/"), None);
    }
}
