/// Value of one front-matter entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    Scalar(String),
    /// One level of scalars. Nested collections are never produced.
    List(Vec<String>),
}

impl EntryValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            EntryValue::Scalar(s) => Some(s),
            EntryValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            EntryValue::Scalar(_) => None,
            EntryValue::List(items) => Some(items),
        }
    }
}

/// A validated key/value pair.
///
/// The key is non-empty and passed the deny-list. Key and value text are raw:
/// nothing here is safe to place into markup until it goes through the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: EntryValue,
    /// Set when any scalar of this entry was cut at the value length ceiling.
    pub truncated: bool,
}

impl Entry {
    pub fn scalar(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: EntryValue::Scalar(value.into()),
            truncated: false,
        }
    }

    pub fn list<I, S>(key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            value: EntryValue::List(items.into_iter().map(Into::into).collect()),
            truncated: false,
        }
    }
}

/// Ordered entries produced by one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMetadata {
    entries: Vec<Entry>,
}

impl ParsedMetadata {
    pub(crate) fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&EntryValue> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ParsedMetadata {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
