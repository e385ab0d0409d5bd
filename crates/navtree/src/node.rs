//! Navigation node and link target types.

use serde::{Deserialize, Serialize};

/// One entry in the navigation tree.
///
/// A node pairs display text with a link target and an ordered list of
/// child nodes. Order is semantically meaningful: children are rendered
/// in declaration order by the viewer.
///
/// The source encoding writes `null` for "no children"; the model uses an
/// empty `Vec` instead, and the codec restores `null` when emitting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    /// Display text.
    pub label: String,
    /// Target location: a page URL, optionally with a `#fragment` suffix.
    pub link: String,
    /// Child nodes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Create a node without children.
    #[must_use]
    pub fn leaf(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with children.
    #[must_use]
    pub fn with_children(
        label: impl Into<String>,
        link: impl Into<String>,
        children: Vec<NavNode>,
    ) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
            children,
        }
    }

    /// Split this node's link into page and optional fragment.
    #[must_use]
    pub fn target(&self) -> LinkTarget<'_> {
        LinkTarget::parse(&self.link)
    }
}

/// Borrowed view over a link, split into page identifier and fragment.
///
/// # Example
///
/// ```
/// use navtree::LinkTarget;
///
/// let target = LinkTarget::parse("run_ami_local.html#use_ssh");
/// assert_eq!(target.page, "run_ami_local.html");
/// assert_eq!(target.fragment, Some("use_ssh"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkTarget<'a> {
    /// Page identifier (the part before `#`).
    pub page: &'a str,
    /// Fragment identifier, if the link has one.
    pub fragment: Option<&'a str>,
}

impl<'a> LinkTarget<'a> {
    /// Parse a link into page and optional fragment.
    ///
    /// Splits on the first `#`. A trailing `#` yields an empty fragment
    /// rather than `None`, preserving the distinction for round-trips.
    #[must_use]
    pub fn parse(link: &'a str) -> Self {
        match link.split_once('#') {
            Some((page, fragment)) => Self {
                page,
                fragment: Some(fragment),
            },
            None => Self {
                page: link,
                fragment: None,
            },
        }
    }
}
