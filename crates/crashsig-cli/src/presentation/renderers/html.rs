use crashsig_types::SignatureEntry;

use crate::presentation::error::RenderError;
use crate::presentation::presenters::present_signature_list;
use crate::presentation::routes::{RouteTable, Routes};
use crate::presentation::view_models::ListScope;
use crate::presentation::views::html;

/// Renders a signature listing as an HTML fragment.
///
/// Rows come out in the order given, one per entry; filtering and sorting
/// belong to the query that produced `entries`.
pub struct SignatureListRenderer<R: Routes = RouteTable> {
    routes: R,
}

impl Default for SignatureListRenderer {
    fn default() -> Self {
        Self::new(RouteTable::default())
    }
}

impl<R: Routes> SignatureListRenderer<R> {
    pub fn new(routes: R) -> Self {
        Self { routes }
    }

    pub fn render(&self, entries: &[SignatureEntry], is_all: bool) -> Result<String, RenderError> {
        let scope = if is_all {
            ListScope::All
        } else {
            ListScope::Unreported
        };
        self.render_scope(entries, scope)
    }

    pub fn render_scope(
        &self,
        entries: &[SignatureEntry],
        scope: ListScope,
    ) -> Result<String, RenderError> {
        let view_model = present_signature_list(entries, scope, &self.routes);
        html::signature_list(&view_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crashsig_types::{BucketId, BugProvider, ExternalBug};

    fn entry(id: i64, description: &str) -> SignatureEntry {
        SignatureEntry {
            id: BucketId::new(id),
            short_description: description.to_string(),
            size: 1,
            quality: Some(0),
            bug: None,
            optimized_signature: None,
        }
    }

    fn bug(external_id: &str, closed: bool, template: &str) -> ExternalBug {
        ExternalBug {
            id: 1,
            external_id: external_id.to_string(),
            closed,
            external_type: BugProvider {
                id: 1,
                classname: "BugzillaProvider".to_string(),
                hostname: "bugzilla.example.com".to_string(),
                url_template: template.to_string(),
            },
        }
    }

    fn rows(html: &str) -> usize {
        html.matches("<tr class=").count()
    }

    #[test]
    fn test_one_row_per_entry() {
        let entries: Vec<_> = (1..=5).map(|i| entry(i, "crash")).collect();
        let html = SignatureListRenderer::default()
            .render(&entries, true)
            .unwrap();
        assert_eq!(rows(&html), 5);
    }

    #[test]
    fn test_rows_alternate_classes() {
        let entries: Vec<_> = (1..=3).map(|i| entry(i, "crash")).collect();
        let html = SignatureListRenderer::default()
            .render(&entries, true)
            .unwrap();

        let classes: Vec<&str> = html
            .match_indices("<tr class=\"")
            .map(|(pos, m)| {
                let rest = &html[pos + m.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect();
        assert_eq!(classes, vec!["odd", "even", "odd"]);
    }

    #[test]
    fn test_short_description_is_escaped() {
        let entries = vec![entry(1, r#"Assertion "a < b" && c"#)];
        let html = SignatureListRenderer::default()
            .render(&entries, true)
            .unwrap();

        assert!(html.contains("Assertion &quot;a &lt; b&quot; &amp;&amp; c"));
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn test_missing_bug_gives_assign_link() {
        let html = SignatureListRenderer::default()
            .render(&[entry(12, "crash")], true)
            .unwrap();

        assert!(html.contains(r#"<a href="/crashmanager/signatures/12/linkbug/">Assign</a>"#));
        assert!(html.contains(r#"<a href="/crashmanager/signatures/12/">12</a>"#));
    }

    #[test]
    fn test_bug_link_opens_new_tab() {
        let mut open = entry(1, "open");
        open.bug = Some(bug(
            "42",
            false,
            "https://bugzilla.example.com/show_bug.cgi?id=%s",
        ));
        let mut fixed = entry(2, "fixed");
        fixed.bug = Some(bug(
            "43",
            true,
            "https://bugzilla.example.com/show_bug.cgi?id=%s",
        ));

        let html = SignatureListRenderer::default()
            .render(&[open, fixed], true)
            .unwrap();

        assert!(html.contains(
            r#"<a href="https://bugzilla.example.com/show_bug.cgi?id=42" target="_blank">42</a>"#
        ));
        assert!(html.contains(
            r#"<a class="fixedbug" href="https://bugzilla.example.com/show_bug.cgi?id=43" target="_blank">43</a>"#
        ));
        assert_eq!(html.matches("fixedbug").count(), 1);
        assert!(!html.contains(">Assign<"));
    }

    #[test]
    fn test_malformed_template_keeps_page() {
        let mut broken = entry(3, "broken");
        broken.bug = Some(bug("<77>", false, "https://bugzilla.example.com/"));

        let html = SignatureListRenderer::default()
            .render(&[broken], true)
            .unwrap();

        assert!(html.contains("<td>&lt;77&gt;</td>"));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_script_url_is_never_a_link() {
        let mut hostile = entry(4, "hostile");
        hostile.bug = Some(bug("javascript:alert(1)", false, "%s"));

        let html = SignatureListRenderer::default()
            .render(&[hostile], true)
            .unwrap();

        assert!(html.contains("<td>javascript:alert(1)</td>"));
        assert!(!html.contains("href=\"javascript:"));
        assert!(!html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_optimization_cell() {
        let mut pending = entry(8, "pending");
        pending.optimized_signature = Some(r#"{"symptoms":[]}"#.to_string());

        let html = SignatureListRenderer::default()
            .render(&[entry(7, "plain"), pending], true)
            .unwrap();

        assert!(html.contains(r#"<a href="/crashmanager/signatures/8/optimize/">View</a>"#));
        assert!(!html.contains("/crashmanager/signatures/7/optimize/"));
        assert!(html.contains("<td></td>"));
    }

    #[test]
    fn test_empty_list_all() {
        let html = SignatureListRenderer::default().render(&[], true).unwrap();

        assert!(html.contains("Displaying all 0 signature entries in the database."));
        assert!(html.contains("<tbody>\n</tbody>"));
        assert!(!html.contains("View All"));
    }

    #[test]
    fn test_unreported_single_entry() {
        let mut e = entry(5, "<script>");
        e.size = 3;
        e.quality = Some(2);

        let html = SignatureListRenderer::default()
            .render(&[e], false)
            .unwrap();

        assert!(html.contains("Displaying 1 unreported signature entries from the database."));
        assert!(html.contains("<td>&lt;script&gt;</td>"));
        assert!(html.contains("<td>3</td>"));
        assert!(html.contains("<td>2</td>"));
        assert!(html.contains(r#"<a href="/crashmanager/signatures/5/linkbug/">Assign</a>"#));
        assert!(!html.contains("optimize"));
        assert!(html.contains(r#"<a href="/crashmanager/signatures/all/">View All</a>"#));
        assert!(html.contains(r#"<a href="/crashmanager/signatures/watch/">View Watched</a>"#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_custom_routes() {
        let renderer = SignatureListRenderer::new(RouteTable::new("/triage"));
        let html = renderer.render(&[entry(1, "crash")], true).unwrap();
        assert!(html.contains(r#"href="/triage/signatures/1/""#));
    }

    #[test]
    fn test_watched_scope_summary() {
        let html = SignatureListRenderer::default()
            .render_scope(&[entry(1, "crash")], ListScope::Watched)
            .unwrap();
        assert!(html.contains("Displaying 1 watched signature entries."));
    }
}
