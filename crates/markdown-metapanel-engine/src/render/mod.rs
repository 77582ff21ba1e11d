//! Display-side rendering: the escaped metadata panel and the document body.

pub mod body;
pub mod escape;
pub mod panel;

pub use body::render_body_html;
pub use escape::EscapedText;
pub use panel::{MetadataPanel, PanelRow, PanelValue};
