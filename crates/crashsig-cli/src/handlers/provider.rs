use anyhow::Result;
use crashsig_index::Database;
use crashsig_types::{URL_PLACEHOLDER, is_web_url};
use tracing::{info, warn};

use crate::args::{OutputFormat, ViewModeArgs};
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};

pub fn add(
    db: &Database,
    hostname: &str,
    url_template: &str,
    classname: &str,
    format: OutputFormat,
) -> Result<()> {
    if !is_web_url(url_template.trim()) {
        anyhow::bail!(
            "URL template '{}' must start with http:// or https://",
            url_template
        );
    }

    if !url_template.contains(URL_PLACEHOLDER) {
        warn!(
            %hostname,
            "URL template has no {} placeholder; bugs on this tracker will not be linked",
            URL_PLACEHOLDER
        );
    }

    let id = db.insert_bug_provider(classname, hostname, url_template)?;
    info!(id, %hostname, "registered bug provider");

    let providers = db.list_bug_providers()?;
    let Some(provider) = providers.iter().find(|p| p.id == id) else {
        anyhow::bail!("Bug provider {} disappeared after insert", id);
    };

    let view_model = presenters::present_provider(provider);
    HandlerContext::standard(format).render(
        CommandResultViewModel::new(view_model)
            .with_badge(StatusBadge::success("Bug provider registered")),
    )
}

pub fn list(db: &Database, format: OutputFormat, view_mode: &ViewModeArgs) -> Result<()> {
    let ctx = HandlerContext::new(format, view_mode);
    let providers = db.list_bug_providers()?;

    let mut result = CommandResultViewModel::new(presenters::present_provider_list(&providers));
    if providers.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Register a bug tracker").with_command(
                "crashsig provider add --hostname <HOST> --url-template 'https://<HOST>/show_bug.cgi?id=%s'",
            ),
        );
    }
    ctx.render(result)
}
