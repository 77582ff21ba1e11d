//! Deny-list for constructs that name, reference, merge or retype values.
//!
//! The grammar never resolves any of these, so no expansion can happen even if one
//! slipped through. Lines carrying them are still dropped whole so that nothing
//! from such a line reaches the panel.

use std::fmt;

use super::classify::KeyToken;
use super::scalar::ValueLiteral;

/// Merge key token.
pub const MERGE_KEY: &str = "<<";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DangerousConstruct {
    /// `&name`
    Anchor,
    /// `*name`
    Alias,
    /// `<<` as a key.
    MergeKey,
    /// `!name` or `!!name`
    Tag,
}

impl fmt::Display for DangerousConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DangerousConstruct::Anchor => "anchor",
            DangerousConstruct::Alias => "alias",
            DangerousConstruct::MergeKey => "merge key",
            DangerousConstruct::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// Checks a key token.
///
/// The merge key is refused bare or quoted. Anchor, alias and tag introducers are
/// only refused on bare keys.
pub fn check_key(key: &KeyToken<'_>) -> Result<(), DangerousConstruct> {
    if key.text() == MERGE_KEY {
        return Err(DangerousConstruct::MergeKey);
    }
    if key.is_quoted() {
        return Ok(());
    }
    match introducer(key.text()) {
        Some(found) => Err(found),
        None => Ok(()),
    }
}

/// Checks a value-position literal.
///
/// Quoted strings are exempt. Plain and block values are checked at every token
/// start: the beginning of the value, after `[`, `{` or `,`, and after a `: `
/// mapping indicator. So `[*a, *a]`, `{k: *a}` and `name: *a` are all caught
/// while `Tom & Jerry` and `https://x/*` are not.
pub fn check_value(value: &ValueLiteral<'_>) -> Result<(), DangerousConstruct> {
    match value {
        ValueLiteral::Empty | ValueLiteral::Quoted(_) => Ok(()),
        ValueLiteral::Plain(text) | ValueLiteral::Block(text) => check_plain(text),
    }
}

fn check_plain(text: &str) -> Result<(), DangerousConstruct> {
    if let Some(found) = introducer(text) {
        return Err(found);
    }
    for (idx, c) in text.char_indices() {
        let rest = &text[idx + c.len_utf8()..];
        let token_start = match c {
            '[' | '{' | ',' => true,
            ':' => rest.is_empty() || rest.starts_with([' ', '\t']),
            _ => false,
        };
        if token_start && let Some(found) = introducer(rest.trim_start()) {
            return Err(found);
        }
    }
    Ok(())
}

fn introducer(token: &str) -> Option<DangerousConstruct> {
    match token.chars().next()? {
        '&' => Some(DangerousConstruct::Anchor),
        '*' => Some(DangerousConstruct::Alias),
        '!' => Some(DangerousConstruct::Tag),
        _ => None,
    }
}
