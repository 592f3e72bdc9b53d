use serde::Serialize;
use std::fmt;

use super::{CreateHtml, CreateView, ViewMode};
use crate::presentation::error::RenderError;

#[derive(Debug, Serialize)]
pub struct CrashListViewModel {
    pub total: usize,
    pub crashes: Vec<CrashRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CrashRowViewModel {
    pub index: usize,
    pub id: i64,
    /// RFC 3339 timestamp
    pub created: String,
    pub product: String,
    pub version: Option<String>,
    pub platform: String,
    pub os: String,
    pub testcase_quality: Option<i64>,
    pub short_signature: String,
}

#[derive(Debug, Serialize)]
pub struct CrashActionViewModel {
    pub id: i64,
    pub bucket: Option<i64>,
    pub created: bool,
}

impl CreateView for CrashListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::crash::CrashListView;
        Box::new(CrashListView::new(self, mode))
    }
}

impl CreateHtml for CrashListViewModel {
    fn create_html(&self) -> Result<String, RenderError> {
        crate::presentation::views::html::crash_list(self)
    }
}

impl CreateView for CrashActionViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::crash::CrashActionView;
        Box::new(CrashActionView::new(self, mode))
    }
}

impl CreateHtml for CrashActionViewModel {}
