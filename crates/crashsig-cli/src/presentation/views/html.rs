//! askama-backed HTML views. Every `{{ }}` interpolation is escaped; only
//! [`page`] embeds an already rendered fragment.

use askama::Template;

use crate::presentation::error::RenderError;
use crate::presentation::view_models::{
    CrashListViewModel, LinkBugViewModel, ListScope, SignatureDetailViewModel,
    SignatureListViewModel, SignatureRowViewModel,
};

impl SignatureRowViewModel {
    /// Row class; the first row is "odd".
    pub fn stripe(&self) -> &'static str {
        if self.index % 2 == 0 { "odd" } else { "even" }
    }
}

#[derive(Template)]
#[template(path = "signatures.html")]
struct SignatureListTemplate<'a> {
    data: &'a SignatureListViewModel,
}

#[derive(Template)]
#[template(path = "signature_view.html")]
struct SignatureDetailTemplate<'a> {
    data: &'a SignatureDetailViewModel,
}

#[derive(Template)]
#[template(path = "link_bug.html")]
struct LinkBugTemplate<'a> {
    data: &'a LinkBugViewModel,
}

#[derive(Template)]
#[template(path = "crashes.html")]
struct CrashListTemplate<'a> {
    data: &'a CrashListViewModel,
}

#[derive(Template)]
#[template(path = "preformatted.html")]
struct PreformattedTemplate<'a> {
    text: &'a str,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    body: &'a str,
}

pub fn signature_list(data: &SignatureListViewModel) -> Result<String, RenderError> {
    Ok(SignatureListTemplate { data }.render()?)
}

pub fn signature_detail(data: &SignatureDetailViewModel) -> Result<String, RenderError> {
    Ok(SignatureDetailTemplate { data }.render()?)
}

pub fn link_bug(data: &LinkBugViewModel) -> Result<String, RenderError> {
    Ok(LinkBugTemplate { data }.render()?)
}

pub fn crash_list(data: &CrashListViewModel) -> Result<String, RenderError> {
    Ok(CrashListTemplate { data }.render()?)
}

/// Text output wrapped in `<pre>`, for view models without dedicated markup.
pub fn preformatted(text: &str) -> Result<String, RenderError> {
    Ok(PreformattedTemplate { text }.render()?)
}

/// Full document around a rendered fragment.
pub fn page(title: &str, body: &str) -> Result<String, RenderError> {
    Ok(PageTemplate { title, body }.render()?)
}
