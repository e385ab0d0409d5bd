//! Parser for navigation data files.
//!
//! Recursive descent over `var NAME = value;` statements. The four
//! generator variables are recognized:
//!
//! - `NAVTREE` — the node tree (required)
//! - `NAVTREEINDEX` — the flat page index (optional, defaults to empty)
//! - `SYNCONMSG` / `SYNCOFFMSG` — sync tooltips (optional, defaulted)
//!
//! Other assignments are skipped, since generators append auxiliary
//! variables this model does not cover.

use navtree::{NavIndex, NavNode, NavTree, SyncMessages};

use crate::error::ParseError;
use crate::scanner::{Scanner, Spanned, Token};

/// Parse navigation data source into a [`NavTree`].
///
/// Structural problems (a node that is not a `[label, link, children]`
/// triple of the right types) are parse errors with source locations;
/// semantic problems (empty labels, duplicate index entries) are left to
/// [`NavTree::validate`].
pub fn parse(input: &str) -> Result<NavTree, ParseError> {
    Parser::new(input)?.parse_file()
}

struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Spanned,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(input);
        let current = scanner.next_token()?;
        Ok(Self { scanner, current })
    }

    /// Move to the next token, returning the one just consumed.
    fn advance(&mut self) -> Result<Spanned, ParseError> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::Unexpected {
            expected,
            found: self.current.token.describe(),
            line: self.current.line,
            column: self.current.column,
        }
    }

    fn expect(&mut self, token: &Token, expected: &'static str) -> Result<(), ParseError> {
        if self.current.token == *token {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_string(&mut self, expected: &'static str) -> Result<String, ParseError> {
        if let Token::Str(value) = &self.current.token {
            let value = value.clone();
            self.advance()?;
            Ok(value)
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn parse_file(mut self) -> Result<NavTree, ParseError> {
        let mut roots = None;
        let mut index = None;
        let mut sync_on = None;
        let mut sync_off = None;

        while self.current.token != Token::Eof {
            self.expect_keyword("var")?;

            let name = match &self.current.token {
                Token::Ident(name) => name.clone(),
                _ => return Err(self.unexpected("variable name")),
            };
            self.advance()?;

            self.expect(&Token::Eq, "'='")?;

            match name.as_str() {
                "NAVTREE" => roots = Some(self.parse_node_array()?),
                "NAVTREEINDEX" => index = Some(self.parse_string_array()?),
                "SYNCONMSG" => sync_on = Some(self.expect_string("string literal")?),
                "SYNCOFFMSG" => sync_off = Some(self.expect_string("string literal")?),
                other => {
                    tracing::debug!(name = other, "skipping unknown assignment");
                    self.skip_value()?;
                }
            }

            self.expect(&Token::Semi, "';'")?;
        }

        let roots = roots.ok_or(ParseError::MissingTree)?;
        let defaults = SyncMessages::default();
        let sync = SyncMessages {
            on: sync_on.unwrap_or(defaults.on),
            off: sync_off.unwrap_or(defaults.off),
        };

        let tree = NavTree::new(roots)
            .with_index(NavIndex::from_entries(index.unwrap_or_default()))
            .with_sync(sync);

        tracing::debug!(
            roots = tree.roots.len(),
            index_entries = tree.index.len(),
            "navigation data parsed"
        );

        Ok(tree)
    }

    fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), ParseError> {
        if matches!(&self.current.token, Token::Ident(name) if name == keyword) {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(keyword))
        }
    }

    /// Parse `[ node, node, ... ]`.
    fn parse_node_array(&mut self) -> Result<Vec<NavNode>, ParseError> {
        self.expect(&Token::LBracket, "'['")?;

        let mut nodes = Vec::new();
        if self.current.token == Token::RBracket {
            self.advance()?;
            return Ok(nodes);
        }

        loop {
            nodes.push(self.parse_node()?);
            if self.current.token == Token::Comma {
                self.advance()?;
            } else {
                self.expect(&Token::RBracket, "',' or ']'")?;
                return Ok(nodes);
            }
        }
    }

    /// Parse one `[ "label", "link", children|null ]` triple.
    fn parse_node(&mut self) -> Result<NavNode, ParseError> {
        self.expect(&Token::LBracket, "'['")?;

        let label = self.expect_string("node label string")?;
        self.expect(&Token::Comma, "','")?;
        let link = self.expect_string("node link string")?;
        self.expect(&Token::Comma, "','")?;

        let children = match self.current.token {
            Token::Null => {
                self.advance()?;
                Vec::new()
            }
            Token::LBracket => self.parse_node_array()?,
            _ => return Err(self.unexpected("child array or null")),
        };

        self.expect(&Token::RBracket, "']'")?;

        Ok(NavNode::with_children(label, link, children))
    }

    /// Parse `[ "id", "id", ... ]`.
    fn parse_string_array(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect(&Token::LBracket, "'['")?;

        let mut entries = Vec::new();
        if self.current.token == Token::RBracket {
            self.advance()?;
            return Ok(entries);
        }

        loop {
            entries.push(self.expect_string("index entry string")?);
            if self.current.token == Token::Comma {
                self.advance()?;
            } else {
                self.expect(&Token::RBracket, "',' or ']'")?;
                return Ok(entries);
            }
        }
    }

    /// Consume one value of any supported shape without interpreting it.
    fn skip_value(&mut self) -> Result<(), ParseError> {
        match self.current.token {
            Token::Str(_) | Token::Number(_) | Token::Null | Token::Ident(_) => {
                self.advance()?;
                Ok(())
            }
            Token::LBracket | Token::LBrace => {
                let mut depth = 0usize;
                loop {
                    match self.current.token {
                        Token::LBracket | Token::LBrace => depth += 1,
                        Token::RBracket | Token::RBrace => depth -= 1,
                        Token::Eof => return Err(self.unexpected("closing bracket")),
                        _ => {}
                    }
                    self.advance()?;
                    if depth == 0 {
                        return Ok(());
                    }
                }
            }
            _ => Err(self.unexpected("value")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"/*
 @licstart  License banner for the generated file.
 @licend
*/
var NAVTREE =
[
  [ "Infrastructure", "index.html", [
    [ "AWS Marketplace", "index.html#AWS", [
      [ "Subscribe", "index.html#Subscribe", null ],
      [ "Use AMI", "index.html#autotoc_md0", null ]
    ] ],
    [ "Local Tool Installation", "index.html#Local", null ],
    [ "Run AMI on Local Host", "run_ami_local.html", [
      [ "Using SSH", "run_ami_local.html#use_ssh", null ]
    ] ]
  ] ]
];

var NAVTREEINDEX =
[
"index.html"
];

var SYNCONMSG = 'click to disable panel synchronisation';
var SYNCOFFMSG = 'click to enable panel synchronisation';
"#;

    #[test]
    fn test_parses_generator_sample() {
        let tree = parse(SAMPLE).unwrap();

        assert_eq!(tree.roots.len(), 1);
        let root = &tree.roots[0];
        assert_eq!(root.label, "Infrastructure");
        assert_eq!(root.link, "index.html");
        assert_eq!(root.children.len(), 3);
        assert_eq!(root.children[2].label, "Run AMI on Local Host");

        assert_eq!(tree.index.position("index.html"), Some(0));
        assert_eq!(tree.sync.on, "click to disable panel synchronisation");
        assert_eq!(tree.sync.off, "click to enable panel synchronisation");
    }

    #[test]
    fn test_child_order_matches_declaration() {
        let tree = parse(SAMPLE).unwrap();

        let aws = &tree.roots[0].children[0];
        let labels: Vec<_> = aws.children.iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["Subscribe", "Use AMI"]);
    }

    #[test]
    fn test_null_children_become_empty_vec() {
        let tree = parse(r#"var NAVTREE = [ [ "A", "a.html", null ] ];"#).unwrap();

        assert!(tree.roots[0].children.is_empty());
    }

    #[test]
    fn test_missing_index_defaults_to_empty() {
        let tree = parse(r#"var NAVTREE = [ [ "A", "a.html", null ] ];"#).unwrap();

        assert!(tree.index.is_empty());
    }

    #[test]
    fn test_missing_messages_use_defaults() {
        let tree = parse(r#"var NAVTREE = [ [ "A", "a.html", null ] ];"#).unwrap();

        assert_eq!(tree.sync, SyncMessages::default());
    }

    #[test]
    fn test_empty_tree_array() {
        let tree = parse("var NAVTREE = [];").unwrap();

        assert!(tree.roots.is_empty());
    }

    #[test]
    fn test_missing_navtree_is_error() {
        let err = parse(r#"var NAVTREEINDEX = [ "index.html" ];"#).unwrap_err();

        assert_eq!(err, ParseError::MissingTree);
    }

    #[test]
    fn test_unknown_assignments_are_skipped() {
        let src = r#"
var NAVTREEINDEX0 = { "index.html": [0, 1], "other.html": [2] };
var GENERATOR = "doc-tool 1.9";
var NAVTREE = [ [ "A", "a.html", null ] ];
"#;

        let tree = parse(src).unwrap();

        assert_eq!(tree.roots[0].label, "A");
    }

    #[test]
    fn test_null_link_is_structural_error() {
        let err = parse(r#"var NAVTREE = [ [ "A", null, null ] ];"#).unwrap_err();

        assert!(matches!(
            err,
            ParseError::Unexpected {
                expected: "node link string",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_semicolon_reports_location() {
        let err = parse("var NAVTREE = []\nvar OTHER = [];").unwrap_err();

        assert_eq!(
            err,
            ParseError::Unexpected {
                expected: "';'",
                found: "identifier \"var\"".to_owned(),
                line: 2,
                column: 1,
            }
        );
    }

    #[test]
    fn test_node_with_too_few_fields_is_error() {
        let err = parse(r#"var NAVTREE = [ [ "A", "a.html" ] ];"#).unwrap_err();

        assert!(matches!(err, ParseError::Unexpected { expected: "','", .. }));
    }

    #[test]
    fn test_truncated_input_is_error() {
        let err = parse(r#"var NAVTREE = [ [ "A", "a.html","#).unwrap_err();

        assert!(matches!(err, ParseError::Unexpected { .. }));
    }

    #[test]
    fn test_parsed_tree_passes_validation() {
        let tree = parse(SAMPLE).unwrap();

        assert!(tree.validate().is_ok());
    }
}
