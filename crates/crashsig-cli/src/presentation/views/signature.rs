use std::fmt;

use crate::presentation::formatters::text::{quality, single_line, truncate};
use crate::presentation::view_models::{
    BugLinkViewModel, LinkBugViewModel, ListScope, SignatureAction, SignatureActionViewModel,
    SignatureDetailViewModel, SignatureListViewModel, ViewMode,
};

const DESCRIPTION_WIDTH: usize = 60;

fn bug_label(bug: &BugLinkViewModel) -> String {
    if bug.closed {
        format!("{} (fixed)", bug.external_id)
    } else {
        bug.external_id.clone()
    }
}

// --------------------------------------------------------
// Signature List View
// --------------------------------------------------------

pub struct SignatureListView<'a> {
    data: &'a SignatureListViewModel,
    mode: ViewMode,
}

impl<'a> SignatureListView<'a> {
    pub fn new(data: &'a SignatureListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn summary(&self) -> String {
        match self.data.scope {
            ListScope::All => format!(
                "Displaying all {} signature entries in the database.",
                self.data.total
            ),
            ListScope::Unreported => format!(
                "Displaying {} unreported signature entries from the database.",
                self.data.total
            ),
            ListScope::Watched => {
                format!("Displaying {} watched signature entries.", self.data.total)
            }
        }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.signatures {
            writeln!(f, "{}", row.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.signatures.is_empty() {
            writeln!(f, "No signatures")?;
            return Ok(());
        }

        for row in &self.data.signatures {
            writeln!(
                f,
                "#{} [{}] {}",
                row.id,
                row.size,
                truncate(&single_line(&row.short_description), DESCRIPTION_WIDTH)
            )?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        writeln!(f)?;

        if self.data.signatures.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{:<8} {:<8} {:<8} {:<20} {:<8} DESCRIPTION",
            "ID", "SIZE", "QUALITY", "BUG", "PENDING"
        )?;
        writeln!(f, "{}", "-".repeat(100))?;

        for row in &self.data.signatures {
            let bug = row.bug.as_ref().map_or_else(|| "-".to_string(), bug_label);
            let pending = if row.optimization_url.is_some() {
                "yes"
            } else {
                ""
            };
            let description = single_line(&row.short_description);
            let description = if verbose {
                description
            } else {
                truncate(&description, DESCRIPTION_WIDTH)
            };

            writeln!(
                f,
                "{:<8} {:<8} {:<8} {:<20} {:<8} {}",
                row.id,
                row.size,
                quality(row.quality),
                bug,
                pending,
                description
            )?;

            if verbose {
                writeln!(f, "         view: {}", row.detail_url)?;
                match &row.bug {
                    Some(BugLinkViewModel { url: Some(url), .. }) => {
                        writeln!(f, "         bug:  {}", url)?
                    }
                    Some(_) => {}
                    None => writeln!(f, "         assign: {}", row.assign_url)?,
                }
                if let Some(url) = &row.optimization_url {
                    writeln!(f, "         optimization: {}", url)?;
                }
            }
        }

        Ok(())
    }
}

impl<'a> fmt::Display for SignatureListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_table(f, false),
            ViewMode::Verbose => self.render_table(f, true),
        }
    }
}

// --------------------------------------------------------
// Signature Detail View
// --------------------------------------------------------

pub struct SignatureDetailView<'a> {
    data: &'a SignatureDetailViewModel,
    mode: ViewMode,
}

impl<'a> SignatureDetailView<'a> {
    pub fn new(data: &'a SignatureDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for SignatureDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", d.id);
        }

        writeln!(
            f,
            "Signature #{}: {}",
            d.id,
            single_line(&d.short_description)
        )?;
        writeln!(f, "Crashes:     {}", d.crash_count)?;
        match &d.bug {
            Some(bug) => writeln!(f, "Bug:         {} on {}", bug_label(bug), bug.tracker)?,
            None => writeln!(f, "Bug:         (none)")?,
        }

        if self.mode == ViewMode::Compact {
            return Ok(());
        }

        if d.frequent || d.permanent {
            writeln!(
                f,
                "Flags:       {}{}",
                if d.frequent { "frequent " } else { "" },
                if d.permanent { "permanent" } else { "" }
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", d.signature)?;

        if let Some(optimized) = &d.optimized_signature {
            writeln!(f)?;
            writeln!(f, "Pending optimization:")?;
            writeln!(f, "{}", optimized)?;
        }

        if self.mode == ViewMode::Verbose
            && let Some(url) = d.bug.as_ref().and_then(|b| b.url.as_ref())
        {
            writeln!(f)?;
            writeln!(f, "Bug URL: {}", url)?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Link Bug View
// --------------------------------------------------------

pub struct LinkBugView<'a> {
    data: &'a LinkBugViewModel,
    mode: ViewMode,
}

impl<'a> LinkBugView<'a> {
    pub fn new(data: &'a LinkBugViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for LinkBugView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for provider in &self.data.providers {
                writeln!(f, "{}", provider)?;
            }
            return Ok(());
        }

        writeln!(f, "Signature #{}: {}", self.data.id, self.data.short_description)?;
        if self.data.providers.is_empty() {
            writeln!(f, "No bug providers registered.")?;
        } else {
            for provider in &self.data.providers {
                writeln!(
                    f,
                    "  crashsig signature link-bug {} --provider {} --external-id <ID>",
                    self.data.id, provider
                )?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Signature Action View
// --------------------------------------------------------

pub struct SignatureActionView<'a> {
    data: &'a SignatureActionViewModel,
    mode: ViewMode,
}

impl<'a> SignatureActionView<'a> {
    pub fn new(data: &'a SignatureActionViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for SignatureActionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.id);
        }

        let verb = match self.data.action {
            SignatureAction::Created => "created",
            SignatureAction::Updated => "updated",
            SignatureAction::Deleted => "deleted",
            SignatureAction::BugLinked => "linked to bug",
            SignatureAction::BugUnlinked => "unlinked from its bug",
            SignatureAction::BugClosed => "has its bug marked fixed",
            SignatureAction::BugReopened => "has its bug reopened",
            SignatureAction::OptimizationProposed => "has a pending optimization",
            SignatureAction::OptimizationCleared => "has no pending optimization",
            SignatureAction::Watched => "watched",
            SignatureAction::Unwatched => "no longer watched",
        };

        write!(f, "Signature {} {}", self.data.id, verb)?;
        if let Some(detail) = &self.data.detail {
            write!(f, " ({})", detail)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::SignatureRowViewModel;

    fn listing() -> SignatureListViewModel {
        SignatureListViewModel {
            scope: ListScope::Unreported,
            is_all: false,
            total: 2,
            all_url: "/crashmanager/signatures/all/".to_string(),
            watched_url: "/crashmanager/signatures/watch/".to_string(),
            signatures: vec![
                SignatureRowViewModel {
                    index: 0,
                    id: 5,
                    short_description: "<script>".to_string(),
                    size: 3,
                    quality: Some(2),
                    detail_url: "/crashmanager/signatures/5/".to_string(),
                    bug: None,
                    assign_url: "/crashmanager/signatures/5/linkbug/".to_string(),
                    optimization_url: None,
                },
                SignatureRowViewModel {
                    index: 1,
                    id: 9,
                    short_description: "Assertion\nfailure:  x".to_string(),
                    size: 1,
                    quality: None,
                    detail_url: "/crashmanager/signatures/9/".to_string(),
                    bug: Some(BugLinkViewModel {
                        external_id: "1581230".to_string(),
                        closed: true,
                        tracker: "bugzilla.mozilla.org".to_string(),
                        url: Some(
                            "https://bugzilla.mozilla.org/show_bug.cgi?id=1581230".to_string(),
                        ),
                    }),
                    assign_url: "/crashmanager/signatures/9/linkbug/".to_string(),
                    optimization_url: Some("/crashmanager/signatures/9/optimize/".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_list_standard_table() {
        let data = listing();
        let output = SignatureListView::new(&data, ViewMode::Standard).to_string();

        insta::assert_snapshot!(output, @r"
        Displaying 2 unreported signature entries from the database.

        ID       SIZE     QUALITY  BUG                  PENDING  DESCRIPTION
        ----------------------------------------------------------------------------------------------------
        5        3        2        -                             <script>
        9        1        -        1581230 (fixed)      yes      Assertion failure: x
        ");
    }

    #[test]
    fn test_list_minimal_prints_ids() {
        let data = listing();
        let output = SignatureListView::new(&data, ViewMode::Minimal).to_string();
        assert_eq!(output, "5\n9\n");
    }

    #[test]
    fn test_list_verbose_shows_links() {
        let data = listing();
        let output = SignatureListView::new(&data, ViewMode::Verbose).to_string();

        assert!(output.contains("assign: /crashmanager/signatures/5/linkbug/"));
        assert!(output.contains("bug:  https://bugzilla.mozilla.org/show_bug.cgi?id=1581230"));
        assert!(output.contains("optimization: /crashmanager/signatures/9/optimize/"));
    }

    #[test]
    fn test_action_view() {
        let data = SignatureActionViewModel {
            action: SignatureAction::Deleted,
            id: 3,
            detail: Some("2 crash entries left unbucketed".to_string()),
        };
        assert_eq!(
            SignatureActionView::new(&data, ViewMode::Standard).to_string(),
            "Signature 3 deleted (2 crash entries left unbucketed)\n"
        );
    }
}
