//! The complete navigation artifact and sync toggle messages.

use serde::{Deserialize, Serialize};

use crate::index::NavIndex;
use crate::node::NavNode;
use crate::validate::{self, ValidationReport};

/// Default tooltip shown while pane synchronization is enabled.
pub const DEFAULT_SYNC_ON_MSG: &str = "click to disable panel synchronisation";

/// Default tooltip shown while pane synchronization is disabled.
pub const DEFAULT_SYNC_OFF_MSG: &str = "click to enable panel synchronisation";

/// Tooltip text pair for the viewer's synchronization toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncMessages {
    /// Shown while synchronization is enabled.
    pub on: String,
    /// Shown while synchronization is disabled.
    pub off: String,
}

impl Default for SyncMessages {
    fn default() -> Self {
        Self {
            on: DEFAULT_SYNC_ON_MSG.to_owned(),
            off: DEFAULT_SYNC_OFF_MSG.to_owned(),
        }
    }
}

/// Pane synchronization toggle state.
///
/// Tracks only whether synchronization is on; the displayed tooltip for
/// the current state comes from [`SyncMessages`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncToggle {
    enabled: bool,
}

impl SyncToggle {
    /// Create a toggle in the given state.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// True if synchronization is enabled.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Flip the toggle.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Tooltip text for the current state.
    #[must_use]
    pub fn tooltip<'a>(self, messages: &'a SyncMessages) -> &'a str {
        if self.enabled {
            &messages.on
        } else {
            &messages.off
        }
    }
}

/// The complete navigation artifact.
///
/// Holds everything the generator emits for the viewer: the root nodes of
/// the navigation tree, the flat page index, and the sync tooltip pair.
/// Produced once at documentation-build time; immutable thereafter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTree {
    /// Root navigation nodes in display order.
    #[serde(rename = "tree")]
    pub roots: Vec<NavNode>,
    /// Flat page-identifier index.
    #[serde(default, skip_serializing_if = "NavIndex::is_empty")]
    pub index: NavIndex,
    /// Tooltip text for the synchronization toggle.
    #[serde(default, rename = "sync_messages")]
    pub sync: SyncMessages,
}

impl NavTree {
    /// Create a tree with the default sync messages and an empty index.
    #[must_use]
    pub fn new(roots: Vec<NavNode>) -> Self {
        Self {
            roots,
            index: NavIndex::new(),
            sync: SyncMessages::default(),
        }
    }

    /// Replace the page index.
    #[must_use]
    pub fn with_index(mut self, index: NavIndex) -> Self {
        self.index = index;
        self
    }

    /// Replace the sync messages.
    #[must_use]
    pub fn with_sync(mut self, sync: SyncMessages) -> Self {
        self.sync = sync;
        self
    }

    /// Run load-time validation over the tree and index.
    ///
    /// See [`crate::validate`] for what is checked.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate::validate(self)
    }
}
