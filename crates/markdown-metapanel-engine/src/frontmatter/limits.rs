//! Hard ceilings on what a single front-matter block may produce.
//!
//! Every counter the builder keeps is checked against one of these values, which
//! gives each parse an upper bound on output size that does not depend on the input.

/// Maximum number of accepted keys. Keys past this are dropped (first-N policy).
pub const MAX_KEYS: usize = 100;

/// Maximum number of accepted items in one array.
pub const MAX_ARRAY_ITEMS: usize = 500;

/// Maximum characters kept from one scalar before it is cut.
pub const MAX_VALUE_LENGTH: usize = 10_000;

/// Maximum characters in a key. Longer keys drop their whole line.
pub const MAX_KEY_LENGTH: usize = 256;

/// Appended to every scalar that was cut at the value length ceiling.
pub const TRUNCATION_MARKER: &str = "[truncated]";

/// Limits threaded through one parse.
///
/// Values can be lowered (e.g. from configuration) but never raised above the
/// compile-time ceilings: [`Limits::new`] clamps every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_keys: usize,
    max_array_items: usize,
    max_value_length: usize,
    max_key_length: usize,
}

impl Limits {
    pub fn new(
        max_keys: usize,
        max_array_items: usize,
        max_value_length: usize,
        max_key_length: usize,
    ) -> Self {
        Self {
            max_keys: max_keys.min(MAX_KEYS),
            max_array_items: max_array_items.min(MAX_ARRAY_ITEMS),
            max_value_length: max_value_length.min(MAX_VALUE_LENGTH),
            max_key_length: max_key_length.min(MAX_KEY_LENGTH),
        }
    }

    /// Builds limits from optional overrides, using the ceiling for anything unset.
    pub fn with_overrides(
        max_keys: Option<usize>,
        max_array_items: Option<usize>,
        max_value_length: Option<usize>,
        max_key_length: Option<usize>,
    ) -> Self {
        Self::new(
            max_keys.unwrap_or(MAX_KEYS),
            max_array_items.unwrap_or(MAX_ARRAY_ITEMS),
            max_value_length.unwrap_or(MAX_VALUE_LENGTH),
            max_key_length.unwrap_or(MAX_KEY_LENGTH),
        )
    }

    pub fn max_keys(&self) -> usize {
        self.max_keys
    }

    pub fn max_array_items(&self) -> usize {
        self.max_array_items
    }

    pub fn max_value_length(&self) -> usize {
        self.max_value_length
    }

    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    /// Cuts `value` to the value length ceiling, counted in chars.
    ///
    /// Returns the kept text (with [`TRUNCATION_MARKER`] appended when cut) and
    /// whether a cut happened.
    pub fn clamp_value(&self, value: &str) -> (String, bool) {
        match value.char_indices().nth(self.max_value_length) {
            Some((cut, _)) => {
                let mut kept = String::with_capacity(cut + TRUNCATION_MARKER.len());
                kept.push_str(&value[..cut]);
                kept.push_str(TRUNCATION_MARKER);
                (kept, true)
            }
            None => (value.to_string(), false),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_keys: MAX_KEYS,
            max_array_items: MAX_ARRAY_ITEMS,
            max_value_length: MAX_VALUE_LENGTH,
            max_key_length: MAX_KEY_LENGTH,
        }
    }
}
