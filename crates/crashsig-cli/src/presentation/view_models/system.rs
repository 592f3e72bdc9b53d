use serde::Serialize;
use std::fmt;

use super::{CreateHtml, CreateView, ViewMode};

/// Shown when crashsig runs without a subcommand.
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub db_exists: bool,
    pub signature_count: usize,
    pub unbucketed_crash_count: usize,
}

/// Plain acknowledgement of a maintenance command.
#[derive(Debug, Serialize)]
pub struct MessageViewModel {
    pub message: String,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::system::GuidanceView;
        Box::new(GuidanceView::new(self, mode))
    }
}

impl CreateHtml for GuidanceViewModel {}

impl CreateView for MessageViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(format!("{}\n", self.message))
    }
}

impl CreateHtml for MessageViewModel {}
