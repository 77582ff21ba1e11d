use std::borrow::Cow;

/// A value-position literal as written after a key or an item marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueLiteral<'a> {
    /// Nothing after the colon.
    Empty,
    /// Content of a `"..."` or `'...'` string.
    Quoted(Cow<'a, str>),
    /// Unquoted text, trimmed.
    Plain(&'a str),
    /// `|` or `>` introducer. Carries only the introducer line's trailing content;
    /// continuation lines are never accumulated.
    Block(&'a str),
}

impl<'a> ValueLiteral<'a> {
    /// Reads the literal from the (untrimmed) text following `:` or `- `.
    pub fn parse(raw: &'a str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return ValueLiteral::Empty;
        }

        if let Some(quoted) = read_quoted(text) {
            return ValueLiteral::Quoted(quoted);
        }

        if let Some(rest) = block_introducer_rest(text) {
            return ValueLiteral::Block(rest);
        }

        ValueLiteral::Plain(text)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ValueLiteral::Empty)
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, ValueLiteral::Quoted(_))
    }

    /// The text this literal contributes as a value.
    pub fn text(&self) -> &str {
        match self {
            ValueLiteral::Empty => "",
            ValueLiteral::Quoted(s) => s,
            ValueLiteral::Plain(s) | ValueLiteral::Block(s) => s,
        }
    }
}

/// Reads a quoted string starting at the first byte of `text`.
///
/// Returns `None` if `text` does not start with a quote or the quote never closes,
/// in which case the caller treats the text as plain. Only the quote characters
/// themselves are unescaped: `\"` inside double quotes and `''` inside single quotes.
pub(crate) fn read_quoted(text: &str) -> Option<Cow<'_, str>> {
    let mut chars = text.char_indices();
    let (_, quote) = chars.next()?;
    match quote {
        '"' => read_double_quoted(&text[1..]),
        '\'' => read_single_quoted(&text[1..]),
        _ => None,
    }
}

fn read_double_quoted(inner: &str) -> Option<Cow<'_, str>> {
    let bytes = inner.as_bytes();
    let mut i = 0;
    let mut has_escape = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'"') => {
                has_escape = true;
                i += 2;
            }
            b'"' => {
                let content = &inner[..i];
                return Some(if has_escape {
                    Cow::Owned(content.replace("\\\"", "\""))
                } else {
                    Cow::Borrowed(content)
                });
            }
            _ => i += 1,
        }
    }
    None
}

fn read_single_quoted(inner: &str) -> Option<Cow<'_, str>> {
    let bytes = inner.as_bytes();
    let mut i = 0;
    let mut has_escape = false;
    while i < bytes.len() {
        if bytes[i] == b'\'' {
            if bytes.get(i + 1) == Some(&b'\'') {
                has_escape = true;
                i += 2;
                continue;
            }
            let content = &inner[..i];
            return Some(if has_escape {
                Cow::Owned(content.replace("''", "'"))
            } else {
                Cow::Borrowed(content)
            });
        }
        i += 1;
    }
    None
}

/// If `text` starts with a block scalar introducer (`|` or `>` plus optional
/// chomping/indentation indicators), returns the trimmed content after it.
fn block_introducer_rest(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(['|', '>'])?;
    let indicators = rest
        .find(|c: char| !matches!(c, '+' | '-' | '1'..='9'))
        .unwrap_or(rest.len());
    let (_, after) = rest.split_at(indicators);
    if !after.is_empty() && !after.starts_with(char::is_whitespace) {
        // `|foo` or `>bar` is plain text, not an introducer.
        return None;
    }
    Some(after.trim())
}
