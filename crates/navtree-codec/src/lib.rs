//! Codec for documentation navigation data files.
//!
//! Documentation generators describe their navigation tree in a
//! JavaScript data file: a `NAVTREE` literal of nested
//! `[label, link, children]` triples, a flat `NAVTREEINDEX` list, and
//! two sync tooltip constants. This crate parses that encoding into the
//! [`navtree`] model and writes it back out:
//!
//! - [`parse`]: navigation data source → [`NavTree`](navtree::NavTree)
//! - [`to_js`]: model → generator-format source
//! - [`to_json`] / [`from_json`]: model ↔ JSON
//!
//! # Example
//!
//! ```
//! let tree = navtree_codec::parse(
//!     r#"var NAVTREE = [ [ "Guide", "guide.html", null ] ];"#,
//! )?;
//! assert_eq!(tree.roots[0].label, "Guide");
//!
//! let js = navtree_codec::to_js(&tree);
//! assert_eq!(navtree_codec::parse(&js)?, tree);
//! # Ok::<(), navtree_codec::ParseError>(())
//! ```

pub(crate) mod emitter;
pub(crate) mod error;
pub(crate) mod parser;
pub(crate) mod scanner;

pub use emitter::to_js;
pub use error::ParseError;
pub use parser::parse;

use navtree::NavTree;

/// Serialize a tree as pretty-printed JSON.
pub fn to_json(tree: &NavTree) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}

/// Deserialize a tree from JSON produced by [`to_json`].
pub fn from_json(input: &str) -> serde_json::Result<NavTree> {
    serde_json::from_str(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navtree::{NavIndex, NavNode};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_round_trip() {
        let tree = NavTree::new(vec![NavNode::with_children(
            "Guide",
            "guide.html",
            vec![NavNode::leaf("Setup", "guide.html#setup")],
        )])
        .with_index(NavIndex::from_entries(vec!["guide.html".to_owned()]));

        let json = to_json(&tree).unwrap();
        let parsed = from_json(&json).unwrap();

        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_json_omits_empty_children() {
        let tree = NavTree::new(vec![NavNode::leaf("Guide", "guide.html")]);

        let json = to_json(&tree).unwrap();

        assert!(!json.contains("children"));
    }

    #[test]
    fn test_js_to_json_pipeline() {
        let tree = parse(r#"var NAVTREE = [ [ "Guide", "guide.html", null ] ];"#).unwrap();

        let json = to_json(&tree).unwrap();

        assert_eq!(from_json(&json).unwrap(), tree);
    }
}
