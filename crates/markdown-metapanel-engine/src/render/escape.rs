use std::fmt;

/// Text that has been HTML-escaped and is safe to place between tags or inside a
/// quoted attribute.
///
/// The only way to build one is [`EscapedText::escape`], so raw metadata cannot end
/// up in a panel without passing through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EscapedText(String);

impl EscapedText {
    /// Escapes `&`, `<`, `>`, `"` and `'`. Everything else, including multi-byte
    /// scripts, combining marks and zero-width joiners, is passed through.
    pub fn escape(raw: &str) -> Self {
        Self(html_escape::encode_quoted_attribute(raw).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EscapedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EscapedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
