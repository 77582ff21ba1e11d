pub mod frontmatter;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use frontmatter::{
    Entry, EntryValue, Limits, ParseReport, ParsedMetadata, extract_block, parse_front_matter,
    parse_metadata, split_document,
};
pub use io::*;
pub use models::MarkdownFile;
pub use pipeline::{RenderedDocument, render_cycle};
pub use render::{EscapedText, MetadataPanel, PanelRow, PanelValue};
