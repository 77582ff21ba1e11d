//! One render cycle: raw text in, optional panel and untouched body out.
//!
//! Every call starts from scratch. Nothing is cached between cycles, so rapid
//! re-renders while editing just run the whole pipeline again on the latest text.

use crate::frontmatter::{
    Limits, ParseReport, ParsedMetadata, parse_metadata_with_report, split_document,
};
use crate::render::{MetadataPanel, render_body_html};

/// Result of one render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument<'a> {
    /// Parsed entries; `None` when there was no block or it yielded no entries.
    pub metadata: Option<ParsedMetadata>,
    /// Escaped view of `metadata`, present exactly when `metadata` is.
    pub panel: Option<MetadataPanel>,
    /// The document minus its front-matter block, byte for byte.
    pub body: &'a str,
    /// What the parser dropped; empty when there was no block.
    pub report: ParseReport,
}

impl RenderedDocument<'_> {
    /// Panel markup (if any) followed by the rendered body.
    pub fn to_html(&self) -> String {
        let body = render_body_html(self.body);
        match &self.panel {
            Some(panel) => {
                let mut html = panel.to_html();
                html.push_str(&body);
                html
            }
            None => body,
        }
    }
}

/// Runs extraction, parsing and panel rendering over `document`.
///
/// A block that parses to zero entries produces no panel, but is still removed
/// from the body.
pub fn render_cycle<'a>(document: &'a str, limits: &Limits) -> RenderedDocument<'a> {
    let (block, body) = split_document(document);
    let Some(block) = block else {
        return RenderedDocument {
            metadata: None,
            panel: None,
            body,
            report: ParseReport::default(),
        };
    };

    let (metadata, report) = parse_metadata_with_report(&block.lines, limits);
    log::debug!(
        "front matter: {} entries, {} lines dropped, {} values truncated",
        metadata.len(),
        report.total_dropped(),
        report.truncated_values(),
    );

    let metadata = Some(metadata).filter(|m| !m.is_empty());
    let panel = metadata.as_ref().map(MetadataPanel::from_metadata);
    RenderedDocument {
        metadata,
        panel,
        body,
        report,
    }
}
