//! # Front Matter
//!
//! Restricted parser for the `---` delimited metadata block at the head of a
//! document. Everything in the block is treated as hostile.
//!
//! ## Stages
//!
//! 1. **Extraction** (`extract`): finds the block and the body offset, or reports
//!    that there is no block
//! 2. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    (blank, comment, key, array item, unrecognized) without looking at its
//!    neighbours
//! 3. **Accumulation** (`builder`): `MetadataBuilder` applies the deny-list
//!    (`deny`) and the ceilings (`limits`) and emits ordered `Entry`s
//!
//! ## Key Invariants
//!
//! - Nothing is ever resolved or expanded: anchors, aliases, merge keys and tags
//!   drop their line
//! - Output is bounded by `Limits` regardless of input size
//! - Malformed input never errors; it yields fewer entries

pub mod builder;
pub mod classify;
pub mod deny;
pub mod extract;
pub mod limits;
pub mod scalar;
pub mod types;

pub use builder::{DropReason, MetadataBuilder, ParseReport};
pub use classify::{FrontMatterLineClassifier, KeyToken, LineClass};
pub use deny::DangerousConstruct;
pub use extract::{FrontMatterBlock, extract_block, split_document};
pub use limits::{
    Limits, MAX_ARRAY_ITEMS, MAX_KEY_LENGTH, MAX_KEYS, MAX_VALUE_LENGTH, TRUNCATION_MARKER,
};
pub use scalar::ValueLiteral;
pub use types::{Entry, EntryValue, ParsedMetadata};

/// Parses extracted block lines into bounded metadata.
pub fn parse_metadata<S: AsRef<str>>(lines: &[S], limits: &Limits) -> ParsedMetadata {
    parse_metadata_with_report(lines, limits).0
}

/// Like [`parse_metadata`], also returning what was dropped and why.
pub fn parse_metadata_with_report<S: AsRef<str>>(
    lines: &[S],
    limits: &Limits,
) -> (ParsedMetadata, ParseReport) {
    let classifier = FrontMatterLineClassifier;
    let mut builder = MetadataBuilder::new(*limits);

    for line in lines {
        builder.push(classifier.classify(line.as_ref()));
    }

    builder.finish()
}

/// Extracts and parses the front matter of `document` in one step.
///
/// `None` when the document has no usable block.
pub fn parse_front_matter(document: &str, limits: &Limits) -> Option<ParsedMetadata> {
    let block = extract_block(document)?;
    Some(parse_metadata(&block.lines, limits))
}
