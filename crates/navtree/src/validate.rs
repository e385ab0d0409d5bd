//! Load-time validation of navigation data.
//!
//! The data is static and build-time generated, so validation happens
//! once at load and there is no partial-tree recovery: a tree with
//! errors is rejected as a whole.
//!
//! Checked:
//! - every node has a non-empty label and link (error)
//! - the page index contains no duplicate identifiers (error)
//! - every index entry matches the page component of at least one tree
//!   link (warning; the relationship is by convention only)

use std::collections::HashSet;

use crate::node::NavNode;
use crate::tree::NavTree;

/// A validation failure that makes the tree unusable.
///
/// Node errors carry the node's position in the tree, e.g.
/// `tree[0].children[2]`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidateError {
    #[error("{path}: empty label")]
    EmptyLabel { path: String },

    #[error("{path}: empty link")]
    EmptyLink { path: String },

    #[error("duplicate index entry {id:?} (positions {first} and {second})")]
    DuplicateIndexEntry {
        id: String,
        first: usize,
        second: usize,
    },
}

/// A validation finding that does not invalidate the tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidateWarning {
    #[error("index entry {id:?} (position {position}) matches no tree link")]
    UnmatchedIndexEntry { id: String, position: usize },
}

/// Outcome of validating a [`NavTree`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Hard failures; non-empty means the tree must be rejected.
    pub errors: Vec<ValidateError>,
    /// Advisory findings.
    pub warnings: Vec<ValidateWarning>,
}

impl ValidationReport {
    /// True if no errors were found (warnings do not count).
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert to a `Result`, failing with the first error.
    pub fn into_result(mut self) -> Result<(), ValidateError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.remove(0))
        }
    }
}

/// Validate a navigation tree and its index.
#[must_use]
pub fn validate(tree: &NavTree) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (i, root) in tree.roots.iter().enumerate() {
        validate_node(root, &format!("tree[{i}]"), &mut report);
    }

    for duplicate in tree.index.duplicates() {
        report.errors.push(ValidateError::DuplicateIndexEntry {
            id: duplicate.id,
            first: duplicate.first,
            second: duplicate.second,
        });
    }

    let pages = collect_pages(&tree.roots);
    for (position, id) in tree.index.iter().enumerate() {
        if !pages.contains(id) {
            report.warnings.push(ValidateWarning::UnmatchedIndexEntry {
                id: id.to_owned(),
                position,
            });
        }
    }

    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "navigation tree validated"
    );

    report
}

fn validate_node(node: &NavNode, path: &str, report: &mut ValidationReport) {
    if node.label.is_empty() {
        report.errors.push(ValidateError::EmptyLabel {
            path: path.to_owned(),
        });
    }
    if node.link.is_empty() {
        report.errors.push(ValidateError::EmptyLink {
            path: path.to_owned(),
        });
    }

    for (i, child) in node.children.iter().enumerate() {
        validate_node(child, &format!("{path}.children[{i}]"), report);
    }
}

/// Collect the page component of every link in the tree.
fn collect_pages(roots: &[NavNode]) -> HashSet<&str> {
    fn walk<'a>(node: &'a NavNode, pages: &mut HashSet<&'a str>) {
        pages.insert(node.target().page);
        for child in &node.children {
            walk(child, pages);
        }
    }

    let mut pages = HashSet::new();
    for root in roots {
        walk(root, &mut pages);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::NavIndex;
    use pretty_assertions::assert_eq;

    fn valid_tree() -> NavTree {
        NavTree::new(vec![NavNode::with_children(
            "Guide",
            "guide.html",
            vec![NavNode::leaf("Setup", "guide.html#setup")],
        )])
        .with_index(NavIndex::from_entries(vec!["guide.html".to_owned()]))
    }

    #[test]
    fn test_valid_tree_passes() {
        let report = validate(&valid_tree());

        assert!(report.is_ok());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_label_is_rejected_with_path() {
        let tree = NavTree::new(vec![NavNode::with_children(
            "Guide",
            "guide.html",
            vec![NavNode::leaf("", "guide.html#setup")],
        )]);

        let report = validate(&tree);

        assert_eq!(
            report.errors,
            vec![ValidateError::EmptyLabel {
                path: "tree[0].children[0]".to_owned()
            }]
        );
    }

    #[test]
    fn test_empty_link_is_rejected_with_path() {
        let tree = NavTree::new(vec![NavNode::leaf("Guide", "")]);

        let report = validate(&tree);

        assert_eq!(
            report.errors,
            vec![ValidateError::EmptyLink {
                path: "tree[0]".to_owned()
            }]
        );
    }

    #[test]
    fn test_node_missing_both_fields_reports_both() {
        let tree = NavTree::new(vec![NavNode::leaf("", "")]);

        let report = validate(&tree);

        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_deeply_nested_error_path() {
        let tree = NavTree::new(vec![NavNode::with_children(
            "A",
            "a.html",
            vec![NavNode::with_children(
                "B",
                "a.html#b",
                vec![NavNode::leaf("", "a.html#c")],
            )],
        )]);

        let report = validate(&tree);

        assert_eq!(
            report.errors,
            vec![ValidateError::EmptyLabel {
                path: "tree[0].children[0].children[0]".to_owned()
            }]
        );
    }

    #[test]
    fn test_duplicate_index_entry_is_error() {
        let tree = valid_tree().with_index(NavIndex::from_entries(vec![
            "guide.html".to_owned(),
            "guide.html".to_owned(),
        ]));

        let report = validate(&tree);

        assert_eq!(
            report.errors,
            vec![ValidateError::DuplicateIndexEntry {
                id: "guide.html".to_owned(),
                first: 0,
                second: 1,
            }]
        );
    }

    #[test]
    fn test_unmatched_index_entry_is_warning_only() {
        let tree = valid_tree().with_index(NavIndex::from_entries(vec!["orphan.html".to_owned()]));

        let report = validate(&tree);

        assert!(report.is_ok());
        assert_eq!(
            report.warnings,
            vec![ValidateWarning::UnmatchedIndexEntry {
                id: "orphan.html".to_owned(),
                position: 0,
            }]
        );
    }

    #[test]
    fn test_index_entry_matches_fragment_link_page() {
        // A link "guide.html#setup" makes "guide.html" a known page.
        let tree = NavTree::new(vec![NavNode::leaf("Setup", "guide.html#setup")])
            .with_index(NavIndex::from_entries(vec!["guide.html".to_owned()]));

        let report = validate(&tree);

        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_into_result_returns_first_error() {
        let tree = NavTree::new(vec![NavNode::leaf("", "a.html")]);

        let result = validate(&tree).into_result();

        assert_eq!(
            result,
            Err(ValidateError::EmptyLabel {
                path: "tree[0]".to_owned()
            })
        );
    }

    #[test]
    fn test_into_result_ok_for_valid_tree() {
        assert!(validate(&valid_tree()).into_result().is_ok());
    }
}
