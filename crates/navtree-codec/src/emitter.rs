//! Writer for the generator's navigation data format.
//!
//! Reproduces the generator's layout exactly: two spaces per nesting
//! level, `[ "label", "link", null ]` spacing, unindented index entries,
//! and single-quoted message constants. Output is deterministic, so
//! emit-then-parse is the identity on the model and parse-then-emit is
//! byte-stable for generator-produced input (minus the license banner,
//! which is not part of the model).

use navtree::{NavNode, NavTree};

/// Render a tree in the navigation data file format.
#[must_use]
pub fn to_js(tree: &NavTree) -> String {
    let mut out = String::new();

    out.push_str("var NAVTREE =\n[\n");
    let count = tree.roots.len();
    for (i, root) in tree.roots.iter().enumerate() {
        write_node(&mut out, root, 1, i + 1 == count);
    }
    out.push_str("];\n\nvar NAVTREEINDEX =\n[\n");

    let count = tree.index.len();
    for (i, id) in tree.index.iter().enumerate() {
        out.push('"');
        out.push_str(&escape_double(id));
        out.push('"');
        if i + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("];\n\nvar SYNCONMSG = '");
    out.push_str(&escape_single(&tree.sync.on));
    out.push_str("';\nvar SYNCOFFMSG = '");
    out.push_str(&escape_single(&tree.sync.off));
    out.push_str("';\n");

    out
}

fn write_node(out: &mut String, node: &NavNode, depth: usize, last: bool) {
    let indent = "  ".repeat(depth);
    let label = escape_double(&node.label);
    let link = escape_double(&node.link);

    if node.children.is_empty() {
        out.push_str(&format!("{indent}[ \"{label}\", \"{link}\", null ]"));
    } else {
        out.push_str(&format!("{indent}[ \"{label}\", \"{link}\", [\n"));
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            write_node(out, child, depth + 1, i + 1 == count);
        }
        out.push_str(&format!("{indent}] ]"));
    }

    if !last {
        out.push(',');
    }
    out.push('\n');
}

fn escape_double(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn escape_single(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use navtree::{NavIndex, NavNode};
    use pretty_assertions::assert_eq;

    fn sample_tree() -> NavTree {
        NavTree::new(vec![NavNode::with_children(
            "Infrastructure",
            "index.html",
            vec![
                NavNode::with_children(
                    "AWS Marketplace",
                    "index.html#AWS",
                    vec![NavNode::leaf("Use AMI", "index.html#autotoc_md0")],
                ),
                NavNode::leaf("Local Tool Installation", "index.html#Local"),
            ],
        )])
        .with_index(NavIndex::from_entries(vec!["index.html".to_owned()]))
    }

    #[test]
    fn test_emits_generator_layout() {
        let expected = "\
var NAVTREE =
[
  [ \"Infrastructure\", \"index.html\", [
    [ \"AWS Marketplace\", \"index.html#AWS\", [
      [ \"Use AMI\", \"index.html#autotoc_md0\", null ]
    ] ],
    [ \"Local Tool Installation\", \"index.html#Local\", null ]
  ] ]
];

var NAVTREEINDEX =
[
\"index.html\"
];

var SYNCONMSG = 'click to disable panel synchronisation';
var SYNCOFFMSG = 'click to enable panel synchronisation';
";

        assert_eq!(to_js(&sample_tree()), expected);
    }

    #[test]
    fn test_empty_children_emit_null() {
        let tree = NavTree::new(vec![NavNode::leaf("A", "a.html")]);

        let js = to_js(&tree);

        assert!(js.contains("[ \"A\", \"a.html\", null ]"));
    }

    #[test]
    fn test_multiple_index_entries_comma_separated() {
        let tree = NavTree::new(Vec::new()).with_index(NavIndex::from_entries(vec![
            "a.html".to_owned(),
            "b.html".to_owned(),
        ]));

        let js = to_js(&tree);

        assert!(js.contains("\"a.html\",\n\"b.html\"\n];"));
    }

    #[test]
    fn test_emit_then_parse_is_identity() {
        let tree = sample_tree();

        let parsed = parse(&to_js(&tree)).unwrap();

        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_parse_then_emit_is_byte_stable() {
        let js = to_js(&sample_tree());

        let round_tripped = to_js(&parse(&js).unwrap());

        assert_eq!(round_tripped, js);
    }

    #[test]
    fn test_quotes_in_labels_are_escaped() {
        let tree = NavTree::new(vec![NavNode::leaf("The \"vht\" script", "vht.html")]);

        let js = to_js(&tree);

        assert!(js.contains("\\\"vht\\\""));
        assert_eq!(parse(&js).unwrap(), tree);
    }

    #[test]
    fn test_apostrophe_in_sync_message_is_escaped() {
        let mut tree = NavTree::new(Vec::new());
        tree.sync.on = "it's synced".to_owned();

        let js = to_js(&tree);

        assert!(js.contains("var SYNCONMSG = 'it\\'s synced';"));
        assert_eq!(parse(&js).unwrap().sync.on, "it's synced");
    }

    #[test]
    fn test_empty_tree_emits_empty_arrays() {
        let tree = NavTree::new(Vec::new());

        let js = to_js(&tree);

        assert!(js.starts_with("var NAVTREE =\n[\n];\n"));
        assert_eq!(parse(&js).unwrap(), tree);
    }
}
