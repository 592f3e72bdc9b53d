use serde::Serialize;
use std::fmt;

use super::{CreateHtml, CreateView, ViewMode};
use crate::presentation::error::RenderError;
use crashsig_types::SignatureFilter;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// Which framing a signature listing is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListScope {
    Unreported,
    All,
    Watched,
}

impl From<&SignatureFilter> for ListScope {
    fn from(filter: &SignatureFilter) -> Self {
        match filter {
            SignatureFilter::Unreported => ListScope::Unreported,
            SignatureFilter::All => ListScope::All,
            SignatureFilter::Watched { .. } => ListScope::Watched,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignatureListViewModel {
    pub scope: ListScope,
    pub is_all: bool,
    pub total: usize,
    pub all_url: String,
    pub watched_url: String,
    pub signatures: Vec<SignatureRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct SignatureRowViewModel {
    /// Position in the listing, starting at 0
    pub index: usize,
    pub id: i64,
    pub short_description: String,
    pub size: u64,
    pub quality: Option<i64>,
    pub detail_url: String,
    pub bug: Option<BugLinkViewModel>,
    /// "Assign bug" action, only meaningful when `bug` is None
    pub assign_url: String,
    pub optimization_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BugLinkViewModel {
    pub external_id: String,
    pub closed: bool,
    pub tracker: String,
    /// None when the tracker's URL template is unusable
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignatureDetailViewModel {
    pub id: i64,
    pub short_description: String,
    pub signature: String,
    pub crash_count: usize,
    pub frequent: bool,
    pub permanent: bool,
    pub bug: Option<BugLinkViewModel>,
    pub optimized_signature: Option<String>,
    pub list_url: String,
    pub assign_url: String,
    pub optimization_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LinkBugViewModel {
    pub id: i64,
    pub short_description: String,
    pub detail_url: String,
    pub current_bug: Option<BugLinkViewModel>,
    pub providers: Vec<String>,
}

/// Outcome of a command that changed a signature.
#[derive(Debug, Serialize)]
pub struct SignatureActionViewModel {
    pub action: SignatureAction,
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureAction {
    Created,
    Updated,
    Deleted,
    BugLinked,
    BugUnlinked,
    BugClosed,
    BugReopened,
    OptimizationProposed,
    OptimizationCleared,
    Watched,
    Unwatched,
}

// --------------------------------------------------------
// CreateView / CreateHtml Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for SignatureListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::signature::SignatureListView;
        Box::new(SignatureListView::new(self, mode))
    }
}

impl CreateHtml for SignatureListViewModel {
    fn create_html(&self) -> Result<String, RenderError> {
        crate::presentation::views::html::signature_list(self)
    }
}

impl CreateView for SignatureDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::signature::SignatureDetailView;
        Box::new(SignatureDetailView::new(self, mode))
    }
}

impl CreateHtml for SignatureDetailViewModel {
    fn create_html(&self) -> Result<String, RenderError> {
        crate::presentation::views::html::signature_detail(self)
    }
}

impl CreateView for LinkBugViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::signature::LinkBugView;
        Box::new(LinkBugView::new(self, mode))
    }
}

impl CreateHtml for LinkBugViewModel {
    fn create_html(&self) -> Result<String, RenderError> {
        crate::presentation::views::html::link_bug(self)
    }
}

impl CreateView for SignatureActionViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::signature::SignatureActionView;
        Box::new(SignatureActionView::new(self, mode))
    }
}

impl CreateHtml for SignatureActionViewModel {}
