use serde::Serialize;
use std::fmt;

use super::{CreateHtml, CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct ProviderListViewModel {
    pub providers: Vec<ProviderEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ProviderEntryViewModel {
    pub id: i64,
    pub classname: String,
    pub hostname: String,
    pub url_template: String,
    /// False when the template has no `%s` placeholder
    pub template_ok: bool,
}

impl CreateView for ProviderListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::provider::ProviderListView;
        Box::new(ProviderListView::new(self, mode))
    }
}

impl CreateHtml for ProviderListViewModel {}

impl CreateView for ProviderEntryViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::provider::ProviderEntryView;
        Box::new(ProviderEntryView::new(self, mode))
    }
}

impl CreateHtml for ProviderEntryViewModel {}
