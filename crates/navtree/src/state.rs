//! Flat navigation state for viewer-style queries.
//!
//! Provides [`NavTreeState`], the immutable in-memory view a viewer works
//! against once the tree has been loaded and validated.
//!
//! # Architecture
//!
//! Entries are stored in a flat `Vec` in depth-first declaration order,
//! with parent/children relationships tracked by indices. This provides:
//! - O(1) link lookups via the `link_index` `HashMap`
//! - O(1) page-to-position resolution for pane synchronization
//! - O(d) breadcrumb building where d is the entry depth
//! - declaration-order traversal by iterating the flat storage

use std::collections::HashMap;

use crate::node::{LinkTarget, NavNode};
use crate::tree::NavTree;

/// One flattened navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Display text.
    pub label: String,
    /// Link target.
    pub link: String,
    /// Nesting depth (0 for roots).
    pub depth: usize,
}

impl NavEntry {
    /// Split this entry's link into page and optional fragment.
    #[must_use]
    pub fn target(&self) -> LinkTarget<'_> {
        LinkTarget::parse(&self.link)
    }
}

/// Immutable flat view of a navigation tree.
///
/// Built once from a validated [`NavTree`]; all queries borrow from the
/// flat storage. When the same link appears on several nodes, lookups
/// resolve to the first declaration.
pub struct NavTreeState {
    entries: Vec<NavEntry>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    link_index: HashMap<String, usize>,
    page_index: HashMap<String, usize>,
}

impl NavTreeState {
    /// Build the flat state from a tree.
    #[must_use]
    pub fn from_tree(tree: &NavTree) -> Self {
        let mut builder = NavTreeStateBuilder::new();
        for root in &tree.roots {
            builder.add_subtree(root, None, 0);
        }
        builder.build()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a link.
    #[must_use]
    pub fn get(&self, link: &str) -> Option<&NavEntry> {
        self.link_index.get(link).map(|&i| &self.entries[i])
    }

    /// Declaration-order position of a link.
    #[must_use]
    pub fn position(&self, link: &str) -> Option<usize> {
        self.link_index.get(link).copied()
    }

    /// Resolve a page identifier to its tree position.
    ///
    /// This is the pane-synchronization query: given the page the content
    /// pane shows, find the first entry (in declaration order) whose
    /// link's page component matches.
    #[must_use]
    pub fn sync_position(&self, page: &str) -> Option<usize> {
        self.page_index.get(page).copied()
    }

    /// Entry at a declaration-order position.
    #[must_use]
    pub fn entry(&self, position: usize) -> Option<&NavEntry> {
        self.entries.get(position)
    }

    /// Direct children of a link's entry, in display order.
    #[must_use]
    pub fn children(&self, link: &str) -> Vec<&NavEntry> {
        match self.link_index.get(link) {
            Some(&idx) => self.children[idx].iter().map(|&i| &self.entries[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Ancestor chain for a link, root-first, excluding the entry itself.
    ///
    /// Returns an empty chain for roots and for unknown links.
    #[must_use]
    pub fn breadcrumbs(&self, link: &str) -> Vec<&NavEntry> {
        let Some(&idx) = self.link_index.get(link) else {
            return Vec::new();
        };

        // Walk up the parent chain
        let mut chain = Vec::new();
        let mut current = self.parents[idx];
        while let Some(i) = current {
            chain.push(&self.entries[i]);
            current = self.parents[i];
        }

        chain.reverse();
        chain
    }

    /// Iterate entries in depth-first declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &NavEntry> {
        self.entries.iter()
    }
}

/// Builder for [`NavTreeState`].
struct NavTreeStateBuilder {
    entries: Vec<NavEntry>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    link_index: HashMap<String, usize>,
    page_index: HashMap<String, usize>,
}

impl NavTreeStateBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
            link_index: HashMap::new(),
            page_index: HashMap::new(),
        }
    }

    /// Add a node and its subtree in depth-first pre-order.
    fn add_subtree(&mut self, node: &NavNode, parent: Option<usize>, depth: usize) {
        let idx = self.entries.len();

        self.entries.push(NavEntry {
            label: node.label.clone(),
            link: node.link.clone(),
            depth,
        });
        self.children.push(Vec::new());
        self.parents.push(parent);

        // First declaration wins for both lookup maps
        self.link_index.entry(node.link.clone()).or_insert(idx);
        self.page_index
            .entry(node.target().page.to_owned())
            .or_insert(idx);

        if let Some(parent) = parent {
            self.children[parent].push(idx);
        }

        for child in &node.children {
            self.add_subtree(child, Some(idx), depth + 1);
        }
    }

    fn build(self) -> NavTreeState {
        tracing::debug!(entries = self.entries.len(), "navigation state built");

        NavTreeState {
            entries: self.entries,
            children: self.children,
            parents: self.parents,
            link_index: self.link_index,
            page_index: self.page_index,
        }
    }
}
