//! # Presentation Layer
//!
//! Adaptation of MVVM for console and web output. Data flow is strictly
//! unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ] (fmt::Display)
//!                                                                  ==(HTML)==> [ View ] (askama)
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels carry raw data.** Numbers stay numbers, optional values
//!    stay `Option`. Links are resolved by presenters through [`Routes`] so
//!    that JSON clients see the same targets as the HTML pages.
//! 2. **Presenters do the thinking.** Bug URL substitution and its fallback,
//!    list framing (all / unreported / watched) happen there.
//! 3. **Views only lay out.** Text views filter by [`ViewMode`]; HTML views
//!    interpolate through askama, which escapes every value.
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to JSON output | `view_models/` |
//! | Decide when a link is shown | `presenters/` |
//! | Change table layout or markup | `views/` and `templates/` |
//! | Add a URL | `routes.rs` |

pub mod error;
pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod routes;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use error::RenderError;
pub use renderers::{ConsoleRenderer, Renderer, SignatureListRenderer};
pub use routes::{Page, RouteTable, Routes};
pub use view_models::{
    CommandResultViewModel, CreateHtml, CreateView, Guidance, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
