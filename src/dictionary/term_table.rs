use crate::error::{Result, WakachiError};

use super::types::TermEntry;

/// Append-only, index-stable table of term entries.
///
/// `term_id` is simply the insertion index; the table never reorders or
/// removes entries once built, so a `term_id` handed out by the
/// [`PrefixIndex`](super::PrefixIndex) remains valid for the table's lifetime.
#[derive(Debug, Default)]
pub struct TermTable {
    entries: Vec<TermEntry>,
}

impl TermTable {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry, returning its newly assigned `term_id`.
    pub fn push(&mut self, entry: TermEntry) -> usize {
        let term_id = self.entries.len();
        self.entries.push(entry);
        term_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, term_id: usize) -> Result<&TermEntry> {
        self.entries
            .get(term_id)
            .ok_or(WakachiError::UnknownTermId {
                term_id,
                len: self.entries.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &TermEntry)> {
        self.entries.iter().enumerate()
    }
}
