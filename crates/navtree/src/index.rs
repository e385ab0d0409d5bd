//! Flat page-identifier index for pane synchronization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Flat ordered sequence of page identifiers.
///
/// The viewer uses the index to map a page to its position when
/// synchronizing the navigation pane with the content pane. The
/// relationship to the tree is by link-prefix convention only; no
/// referential integrity is enforced here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavIndex {
    entries: Vec<String>,
}

/// A page identifier that appears more than once in a [`NavIndex`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateEntry {
    /// The duplicated identifier.
    pub id: String,
    /// Position of the first occurrence.
    pub first: usize,
    /// Position of the repeated occurrence.
    pub second: usize,
}

impl NavIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index from page identifiers, preserving order.
    #[must_use]
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Append a page identifier.
    pub fn push(&mut self, id: impl Into<String>) {
        self.entries.push(id.into());
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared position of a page identifier.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e == id)
    }

    /// Entry at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(String::as_str)
    }

    /// Iterate entries in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Find identifiers that appear more than once.
    ///
    /// Each repeated occurrence is reported against the first one, in
    /// declaration order.
    #[must_use]
    pub fn duplicates(&self) -> Vec<DuplicateEntry> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();

        for (position, id) in self.entries.iter().enumerate() {
            if let Some(&first) = seen.get(id.as_str()) {
                duplicates.push(DuplicateEntry {
                    id: id.clone(),
                    first,
                    second: position,
                });
            } else {
                seen.insert(id, position);
            }
        }

        duplicates
    }
}
