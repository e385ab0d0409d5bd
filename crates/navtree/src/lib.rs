//! Navigation tree data model for documentation sites.
//!
//! This crate provides the typed representation of the navigation data a
//! documentation generator emits for its browser-side viewer:
//!
//! - [`NavNode`]: one entry in the navigation tree (label, link, children)
//! - [`NavIndex`]: flat ordered list of page identifiers for pane sync
//! - [`NavTree`]: the whole artifact, including the sync tooltip messages
//! - [`NavTreeState`]: immutable flat view with O(1) link lookups
//!
//! Data is produced once at documentation-build time and never mutated;
//! validation therefore happens entirely at load via [`NavTree::validate`].
//!
//! # Quick Start
//!
//! ```
//! use navtree::{NavNode, NavTree, NavTreeState};
//!
//! let tree = NavTree::new(vec![NavNode::with_children(
//!     "Guide",
//!     "guide.html",
//!     vec![NavNode::leaf("Setup", "guide.html#setup")],
//! )]);
//! assert!(tree.validate().is_ok());
//!
//! let state = NavTreeState::from_tree(&tree);
//! assert_eq!(state.get("guide.html#setup").unwrap().label, "Setup");
//! ```

pub(crate) mod index;
pub(crate) mod node;
pub(crate) mod state;
pub(crate) mod tree;
pub(crate) mod validate;

pub use index::{DuplicateEntry, NavIndex};
pub use node::{LinkTarget, NavNode};
pub use state::{NavEntry, NavTreeState};
pub use tree::{DEFAULT_SYNC_OFF_MSG, DEFAULT_SYNC_ON_MSG, NavTree, SyncMessages, SyncToggle};
pub use validate::{ValidateError, ValidateWarning, ValidationReport};
