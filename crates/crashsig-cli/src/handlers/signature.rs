use anyhow::{Context, Result, bail};
use crashsig_index::{Database, NewBucket};
use crashsig_types::{BucketId, SignatureFilter};
use tracing::{debug, info, warn};

use crate::args::{OutputFormat, ViewModeArgs};
use crate::config::Config;
use crate::handlers::HandlerContext;
use crate::presentation::RouteTable;
use crate::presentation::presenters;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ListScope, SignatureAction, SignatureActionViewModel,
    StatusBadge,
};

/// Signature arguments are inline JSON, or `@path` to read the JSON from a file.
fn read_signature_arg(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read signature file: {}", path)),
        None => Ok(arg.to_string()),
    }
}

fn render_action(
    format: OutputFormat,
    action: SignatureAction,
    id: BucketId,
    detail: Option<String>,
    badge: StatusBadge,
) -> Result<()> {
    let view_model = SignatureActionViewModel {
        action,
        id: id.get(),
        detail,
    };
    let result = CommandResultViewModel::new(view_model).with_badge(badge);
    HandlerContext::standard(format).render(result)
}

pub fn list(
    db: &Database,
    config: &Config,
    all: bool,
    watched: bool,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let ctx = HandlerContext::new(format, view_mode);

    let filter = if all {
        SignatureFilter::All
    } else if watched {
        SignatureFilter::Watched {
            user: config.user.clone(),
        }
    } else {
        SignatureFilter::Unreported
    };

    let entries = db.list_signatures(&filter)?;
    debug!(
        count = entries.len(),
        all = filter.is_all(),
        "listed signatures"
    );

    let routes = RouteTable::new(&config.url_prefix);
    let view_model =
        presenters::present_signature_list(&entries, ListScope::from(&filter), &routes);

    let mut result = CommandResultViewModel::new(view_model);
    if entries.is_empty() && filter == SignatureFilter::Unreported {
        result = result
            .with_badge(StatusBadge::info("Every signature has a bug"))
            .with_suggestion(
                Guidance::new("Include signatures that already have a bug")
                    .with_command("crashsig signature list --all"),
            );
    }
    ctx.render(result)
}

pub fn show(
    db: &Database,
    config: &Config,
    id: BucketId,
    format: OutputFormat,
    view_mode: &ViewModeArgs,
) -> Result<()> {
    let ctx = HandlerContext::new(format, view_mode);

    let Some(bucket) = db.get_bucket(id)? else {
        bail!("Signature {} not found", id);
    };
    let crash_count = db.count_bucket_crashes(id)?;

    let routes = RouteTable::new(&config.url_prefix);
    let view_model = presenters::present_signature_detail(&bucket, crash_count, &routes);

    let mut result = CommandResultViewModel::new(view_model);
    if bucket.bug.is_none() {
        result = result.with_suggestion(
            Guidance::new("Link a bug to this signature").with_command(format!(
                "crashsig signature link-bug {} --provider <HOST> --external-id <ID>",
                id
            )),
        );
    }
    ctx.render(result)
}

pub fn create(
    db: &Database,
    signature: &str,
    short_description: String,
    frequent: bool,
    permanent: bool,
    format: OutputFormat,
) -> Result<()> {
    let new = NewBucket {
        signature: read_signature_arg(signature)?,
        short_description,
        frequent,
        permanent,
    };

    let id = db.insert_bucket(&new)?;
    info!(%id, "created signature");

    render_action(
        format,
        SignatureAction::Created,
        id,
        None,
        StatusBadge::success("Signature created"),
    )
}

pub fn edit(
    db: &Database,
    id: BucketId,
    signature: Option<&str>,
    short_description: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    if signature.is_none() && short_description.is_none() {
        bail!("Nothing to change: pass --signature and/or --short-description");
    }

    let signature = signature.map(read_signature_arg).transpose()?;
    db.update_bucket(id, signature.as_deref(), short_description)?;
    info!(%id, "updated signature");

    render_action(
        format,
        SignatureAction::Updated,
        id,
        None,
        StatusBadge::success("Signature updated"),
    )
}

pub fn delete(db: &Database, id: BucketId, format: OutputFormat) -> Result<()> {
    let released = db.delete_bucket(id)?;
    info!(%id, released, "deleted signature");

    render_action(
        format,
        SignatureAction::Deleted,
        id,
        Some(format!("{} crash entries left unbucketed", released)),
        StatusBadge::success("Signature deleted"),
    )
}

pub fn link_bug(
    db: &Database,
    id: BucketId,
    provider: &str,
    external_id: &str,
    closed: bool,
    format: OutputFormat,
) -> Result<()> {
    let Some(provider) = db.get_bug_provider_by_hostname(provider)? else {
        bail!(
            "Unknown bug provider '{}'. Register it with 'crashsig provider add'",
            provider
        );
    };

    let bug_id = db.link_bug(id, provider.id, external_id, closed)?;
    info!(%id, bug_id, tracker = %provider.hostname, "linked bug");

    let bug = db
        .get_bucket(id)?
        .and_then(|bucket| bucket.bug)
        .with_context(|| format!("Signature {} lost its bug after linking", id))?;

    let badge = match bug.url() {
        Ok(_) => StatusBadge::success("Bug linked"),
        Err(err) => {
            warn!(tracker = %provider.hostname, "bug will be shown as text: {}", err);
            StatusBadge::warning("Bug linked without a usable URL")
        }
    };

    render_action(
        format,
        SignatureAction::BugLinked,
        id,
        Some(format!("{} on {}", bug.external_id, provider.hostname)),
        badge,
    )
}

pub fn unlink_bug(db: &Database, id: BucketId, format: OutputFormat) -> Result<()> {
    db.unlink_bug(id)?;
    info!(%id, "unlinked bug");

    render_action(
        format,
        SignatureAction::BugUnlinked,
        id,
        None,
        StatusBadge::success("Bug unlinked"),
    )
}

/// Mark the bug linked to a signature as fixed, or reopen it.
pub fn close_bug(db: &Database, id: BucketId, reopen: bool, format: OutputFormat) -> Result<()> {
    let Some(bucket) = db.get_bucket(id)? else {
        bail!("Signature {} not found", id);
    };
    let Some(bug) = bucket.bug else {
        bail!("Signature {} has no linked bug", id);
    };

    db.set_bug_closed(bug.id, !reopen)?;
    info!(%id, bug_id = bug.id, closed = !reopen, "updated bug state");

    let (action, badge) = if reopen {
        (SignatureAction::BugReopened, "Bug reopened")
    } else {
        (SignatureAction::BugClosed, "Bug marked fixed")
    };
    render_action(
        format,
        action,
        id,
        Some(format!("{} on {}", bug.external_id, bug.external_type.hostname)),
        StatusBadge::success(badge),
    )
}

pub fn optimize(
    db: &Database,
    id: BucketId,
    signature: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    match signature {
        Some(raw) => {
            let optimized = read_signature_arg(raw)?;
            db.set_optimized_signature(id, Some(&optimized))?;
            info!(%id, "proposed optimized signature");
            render_action(
                format,
                SignatureAction::OptimizationProposed,
                id,
                None,
                StatusBadge::success("Optimization proposed"),
            )
        }
        None => {
            db.set_optimized_signature(id, None)?;
            info!(%id, "cleared optimized signature");
            render_action(
                format,
                SignatureAction::OptimizationCleared,
                id,
                None,
                StatusBadge::success("Optimization cleared"),
            )
        }
    }
}

pub fn watch(db: &Database, config: &Config, id: BucketId, format: OutputFormat) -> Result<()> {
    let record = db.watch_bucket(&config.user, id)?;
    debug!(%id, user = %record.user, last_crash = record.last_crash, "watching signature");

    render_action(
        format,
        SignatureAction::Watched,
        id,
        Some(format!("as {}", record.user)),
        StatusBadge::success("Signature watched"),
    )
}

pub fn unwatch(db: &Database, config: &Config, id: BucketId, format: OutputFormat) -> Result<()> {
    if !db.unwatch_bucket(&config.user, id)? {
        bail!("Signature {} is not watched by {}", id, config.user);
    }

    render_action(
        format,
        SignatureAction::Unwatched,
        id,
        None,
        StatusBadge::success("Signature unwatched"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_signature_arg_inline() {
        assert_eq!(read_signature_arg("{}").unwrap(), "{}");
    }

    #[test]
    fn test_read_signature_arg_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sig.json");
        std::fs::write(&path, r#"{"symptoms":[]}"#).unwrap();

        let arg = format!("@{}", path.display());
        assert_eq!(read_signature_arg(&arg).unwrap(), r#"{"symptoms":[]}"#);
    }

    #[test]
    fn test_read_signature_arg_missing_file() {
        let err = read_signature_arg("@/nonexistent/sig.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read signature file"));
    }
}
