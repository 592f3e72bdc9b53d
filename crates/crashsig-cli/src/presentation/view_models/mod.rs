pub mod common;
pub mod crash;
pub mod provider;
pub mod result;
pub mod signature;
pub mod system;

pub use common::*;
pub use crash::*;
pub use provider::*;
pub use result::*;
pub use signature::*;
pub use system::*;

use std::fmt;

use super::error::RenderError;

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}

/// Bridge from a view model to HTML.
///
/// View models without a dedicated template fall back to their standard
/// text view inside a `<pre>` block.
pub trait CreateHtml: CreateView {
    fn create_html(&self) -> Result<String, RenderError> {
        crate::presentation::views::html::preformatted(
            &self.create_view(ViewMode::Standard).to_string(),
        )
    }
}
