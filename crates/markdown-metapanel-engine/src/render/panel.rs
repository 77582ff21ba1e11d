use crate::frontmatter::{Entry, EntryValue, ParsedMetadata};

use super::escape::EscapedText;

/// Escaped value of one panel row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelValue {
    Scalar(EscapedText),
    List(Vec<EscapedText>),
}

/// One key/value row, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub key: EscapedText,
    pub value: PanelValue,
    pub truncated: bool,
}

impl PanelRow {
    fn from_entry(entry: &Entry) -> Self {
        let value = match &entry.value {
            EntryValue::Scalar(s) => PanelValue::Scalar(EscapedText::escape(s)),
            EntryValue::List(items) => {
                PanelValue::List(items.iter().map(|i| EscapedText::escape(i)).collect())
            }
        };
        Self {
            key: EscapedText::escape(&entry.key),
            value,
            truncated: entry.truncated,
        }
    }
}

/// The metadata side panel: ordered rows with every string already escaped.
///
/// Display surfaces only lay this out; they must not escape again, and a later
/// whole-document sanitizer does not make this escaping optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataPanel {
    rows: Vec<PanelRow>,
}

impl MetadataPanel {
    pub fn from_metadata(metadata: &ParsedMetadata) -> Self {
        Self {
            rows: metadata.iter().map(PanelRow::from_entry).collect(),
        }
    }

    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Lays the panel out as a definition list; arrays become nested `<ul>`s.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<dl class=\"front-matter\">\n");
        for row in &self.rows {
            html.push_str("<dt>");
            html.push_str(row.key.as_str());
            html.push_str("</dt>");
            html.push_str(if row.truncated {
                "<dd class=\"truncated\">"
            } else {
                "<dd>"
            });
            match &row.value {
                PanelValue::Scalar(text) => html.push_str(text.as_str()),
                PanelValue::List(items) => {
                    html.push_str("<ul>");
                    for item in items {
                        html.push_str("<li>");
                        html.push_str(item.as_str());
                        html.push_str("</li>");
                    }
                    html.push_str("</ul>");
                }
            }
            html.push_str("</dd>\n");
        }
        html.push_str("</dl>\n");
        html
    }
}
