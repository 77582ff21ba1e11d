use std::sync::OnceLock;

use regex::Regex;

use super::scalar::ValueLiteral;

/// A key as written on a key line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyToken<'a> {
    Bare(&'a str),
    Quoted(&'a str),
}

impl KeyToken<'_> {
    pub fn text(&self) -> &str {
        match self {
            KeyToken::Bare(s) | KeyToken::Quoted(s) => s,
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, KeyToken::Quoted(_))
    }
}

/// Classification of one front-matter line, using only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Comment,
    /// `<key>:<optional space><optional value>` at column 0.
    Key {
        key: KeyToken<'a>,
        value: ValueLiteral<'a>,
    },
    /// `<indent>- <item>`.
    ArrayItem { value: ValueLiteral<'a> },
    Unrecognized,
}

// Both patterns are anchored and use only constructs the `regex` crate runs in
// linear time, so a pathological line costs no more than its length.
fn key_line_regex() -> &'static Regex {
    static KEY_LINE: OnceLock<Regex> = OnceLock::new();
    KEY_LINE.get_or_init(|| {
        Regex::new(
            r#"^(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^\s"'#][^:]*?))[ \t]*:(?P<rest>.*)$"#,
        )
        .expect("Invalid key line regex")
    })
}

fn array_item_regex() -> &'static Regex {
    static ARRAY_ITEM: OnceLock<Regex> = OnceLock::new();
    ARRAY_ITEM.get_or_init(|| {
        Regex::new(r"^[ \t]*-(?:[ \t]+(?P<item>.*))?$").expect("Invalid array item regex")
    })
}

/// Classifies front-matter lines independently of their neighbours.
pub struct FrontMatterLineClassifier;

impl FrontMatterLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return LineClass::Blank;
        }
        if trimmed.starts_with('#') {
            return LineClass::Comment;
        }

        if let Some(caps) = array_item_regex().captures(line) {
            let raw = caps.name("item").map_or("", |m| m.as_str());
            return LineClass::ArrayItem {
                value: ValueLiteral::parse(raw),
            };
        }

        if let Some(caps) = key_line_regex().captures(line) {
            let key = if let Some(m) = caps.name("dq").or_else(|| caps.name("sq")) {
                KeyToken::Quoted(m.as_str())
            } else if let Some(m) = caps.name("bare") {
                KeyToken::Bare(m.as_str().trim_end())
            } else {
                return LineClass::Unrecognized;
            };
            let rest = caps.name("rest").map_or("", |m| m.as_str());
            return LineClass::Key {
                key,
                value: ValueLiteral::parse(rest),
            };
        }

        LineClass::Unrecognized
    }
}
