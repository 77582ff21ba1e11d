use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::{
    classify::{KeyToken, LineClass},
    deny::{self, DangerousConstruct},
    limits::Limits,
    scalar::ValueLiteral,
    types::{Entry, EntryValue, ParsedMetadata},
};

/// Why a line contributed nothing to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DropReason {
    Dangerous(DangerousConstruct),
    /// Array item with no open key.
    Orphan,
    /// Key past the key count ceiling.
    KeyLimit,
    /// Item past the per-array ceiling.
    ItemLimit,
    KeyTooLong,
    EmptyKey,
    DuplicateKey,
    EmptyItem,
    Unrecognized,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Dangerous(construct) => write!(f, "{construct}"),
            DropReason::Orphan => f.write_str("orphaned array item"),
            DropReason::KeyLimit => f.write_str("key limit reached"),
            DropReason::ItemLimit => f.write_str("array item limit reached"),
            DropReason::KeyTooLong => f.write_str("key too long"),
            DropReason::EmptyKey => f.write_str("empty key"),
            DropReason::DuplicateKey => f.write_str("duplicate key"),
            DropReason::EmptyItem => f.write_str("empty array item"),
            DropReason::Unrecognized => f.write_str("unrecognized line"),
        }
    }
}

/// Counts of everything a parse dropped or cut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    dropped: BTreeMap<DropReason, usize>,
    truncated_values: usize,
}

impl ParseReport {
    pub fn dropped(&self, reason: DropReason) -> usize {
        self.dropped.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_dropped(&self) -> usize {
        self.dropped.values().sum()
    }

    /// Lines dropped for carrying any deny-listed construct.
    pub fn dangerous(&self) -> usize {
        self.dropped
            .iter()
            .filter(|(reason, _)| matches!(reason, DropReason::Dangerous(_)))
            .map(|(_, count)| count)
            .sum()
    }

    pub fn truncated_values(&self) -> usize {
        self.truncated_values
    }

    pub fn iter(&self) -> impl Iterator<Item = (DropReason, usize)> + '_ {
        self.dropped.iter().map(|(reason, count)| (*reason, *count))
    }

    fn hit_limits(&self) -> bool {
        self.dropped(DropReason::KeyLimit) > 0 || self.dropped(DropReason::ItemLimit) > 0
    }
}

/// An array key waiting for its items.
#[derive(Debug)]
struct PendingArray {
    key: String,
    items: Vec<String>,
    truncated: bool,
}

#[derive(Debug)]
enum OpenKey {
    /// Items here are orphans.
    None,
    Array(PendingArray),
    /// The last key line was dropped; its items go with it.
    Discarding,
}

/// Accumulates classified lines into [`ParsedMetadata`].
///
/// All ceilings are checked here against the counters this struct owns, so the
/// output bound is `max_keys` entries of at most `max_array_items` items of at most
/// `max_value_length` characters (plus the truncation marker), whatever the input.
pub struct MetadataBuilder {
    limits: Limits,
    entries: Vec<Entry>,
    seen_keys: HashSet<String>,
    open: OpenKey,
    report: ParseReport,
    line_no: usize,
}

impl MetadataBuilder {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            entries: Vec::new(),
            seen_keys: HashSet::new(),
            open: OpenKey::None,
            report: ParseReport::default(),
            line_no: 0,
        }
    }

    pub fn push(&mut self, class: LineClass<'_>) {
        self.line_no += 1;
        match class {
            LineClass::Blank | LineClass::Comment => {}
            LineClass::Key { key, value } => self.push_key(key, value),
            LineClass::ArrayItem { value } => self.push_item(value),
            LineClass::Unrecognized => {
                self.flush_array();
                self.open = OpenKey::None;
                self.drop_line(DropReason::Unrecognized);
            }
        }
    }

    pub fn finish(mut self) -> (ParsedMetadata, ParseReport) {
        self.flush_array();
        if self.report.hit_limits() {
            log::warn!(
                "front matter exceeded limits: {} keys and {} array items dropped",
                self.report.dropped(DropReason::KeyLimit),
                self.report.dropped(DropReason::ItemLimit),
            );
        }
        (ParsedMetadata::from_entries(self.entries), self.report)
    }

    fn push_key(&mut self, key: KeyToken<'_>, value: ValueLiteral<'_>) {
        self.flush_array();

        if let Err(reason) = self.validate_key(&key, &value) {
            self.open = OpenKey::Discarding;
            self.drop_line(reason);
            return;
        }

        let key = key.text().to_string();
        self.seen_keys.insert(key.clone());

        if value.is_empty() {
            self.open = OpenKey::Array(PendingArray {
                key,
                items: Vec::new(),
                truncated: false,
            });
            return;
        }

        self.open = OpenKey::None;
        let (text, truncated) = self.clamp(value.text());
        self.entries.push(Entry {
            key,
            value: EntryValue::Scalar(text),
            truncated,
        });
    }

    fn validate_key(
        &self,
        key: &KeyToken<'_>,
        value: &ValueLiteral<'_>,
    ) -> Result<(), DropReason> {
        deny::check_key(key).map_err(DropReason::Dangerous)?;
        deny::check_value(value).map_err(DropReason::Dangerous)?;

        let text = key.text();
        if text.is_empty() {
            return Err(DropReason::EmptyKey);
        }
        if text.chars().nth(self.limits.max_key_length()).is_some() {
            return Err(DropReason::KeyTooLong);
        }
        if self.seen_keys.contains(text) {
            return Err(DropReason::DuplicateKey);
        }
        if self.seen_keys.len() >= self.limits.max_keys() {
            return Err(DropReason::KeyLimit);
        }
        Ok(())
    }

    fn push_item(&mut self, value: ValueLiteral<'_>) {
        let accepted = match &self.open {
            OpenKey::Array(pending) => pending.items.len(),
            OpenKey::None | OpenKey::Discarding => {
                self.drop_line(DropReason::Orphan);
                return;
            }
        };

        let reason = if value.is_empty() {
            Some(DropReason::EmptyItem)
        } else if let Err(construct) = deny::check_value(&value) {
            Some(DropReason::Dangerous(construct))
        } else if accepted >= self.limits.max_array_items() {
            Some(DropReason::ItemLimit)
        } else {
            None
        };
        if let Some(reason) = reason {
            self.drop_line(reason);
            return;
        }

        let (text, truncated) = self.clamp(value.text());
        if let OpenKey::Array(pending) = &mut self.open {
            pending.items.push(text);
            pending.truncated |= truncated;
        }
    }

    fn flush_array(&mut self) {
        let prev = std::mem::replace(&mut self.open, OpenKey::None);
        match prev {
            OpenKey::Array(pending) => {
                let value = if pending.items.is_empty() {
                    EntryValue::Scalar(String::new())
                } else {
                    EntryValue::List(pending.items)
                };
                self.entries.push(Entry {
                    key: pending.key,
                    value,
                    truncated: pending.truncated,
                });
            }
            other => self.open = other,
        }
    }

    fn clamp(&mut self, value: &str) -> (String, bool) {
        let (text, truncated) = self.limits.clamp_value(value);
        if truncated {
            self.report.truncated_values += 1;
        }
        (text, truncated)
    }

    fn drop_line(&mut self, reason: DropReason) {
        log::debug!("front matter line {}: dropped ({reason})", self.line_no);
        *self.report.dropped.entry(reason).or_insert(0) += 1;
    }
}
