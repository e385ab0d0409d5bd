//! Tokenizer for the JavaScript literal subset used by navigation data
//! files.
//!
//! The generator emits a restricted grammar: `var NAME = value;`
//! statements whose values are nested arrays, object literals, quoted
//! strings, numbers, and `null`, optionally preceded by a license banner
//! comment. The scanner walks the input by leading character and tracks
//! line/column for diagnostics.

use crate::error::ParseError;

/// One lexical token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    /// Identifier or keyword (e.g. `var`, `NAVTREE`).
    Ident(String),
    /// String literal with escapes resolved.
    Str(String),
    /// Numeric literal, kept as source text (only ever skipped).
    Number(String),
    /// The `null` keyword.
    Null,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Eq,
    Semi,
    Eof,
}

impl Token {
    /// Human-readable description for diagnostics.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Ident(name) => format!("identifier {name:?}"),
            Token::Str(_) => "string literal".to_owned(),
            Token::Number(text) => format!("number {text}"),
            Token::Null => "null".to_owned(),
            Token::LBracket => "'['".to_owned(),
            Token::RBracket => "']'".to_owned(),
            Token::LBrace => "'{'".to_owned(),
            Token::RBrace => "'}'".to_owned(),
            Token::Comma => "','".to_owned(),
            Token::Colon => "':'".to_owned(),
            Token::Eq => "'='".to_owned(),
            Token::Semi => "';'".to_owned(),
            Token::Eof => "end of input".to_owned(),
        }
    }
}

/// A token with its source position (1-based).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

/// Streaming tokenizer over a navigation data source.
pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.src[self.pos..].starts_with("//") => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                Some('/') if self.src[self.pos..].starts_with("/*") => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    self.bump();
                    loop {
                        if self.src[self.pos..].starts_with("*/") {
                            self.bump();
                            self.bump();
                            break;
                        }
                        if self.bump().is_none() {
                            return Err(ParseError::UnterminatedComment { line, column });
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Produce the next token.
    pub(crate) fn next_token(&mut self) -> Result<Spanned, ParseError> {
        self.skip_trivia()?;

        let (line, column) = (self.line, self.column);
        let spanned = |token| Spanned {
            token,
            line,
            column,
        };

        let Some(c) = self.peek() else {
            return Ok(spanned(Token::Eof));
        };

        let token = match c {
            '[' => {
                self.bump();
                Token::LBracket
            }
            ']' => {
                self.bump();
                Token::RBracket
            }
            '{' => {
                self.bump();
                Token::LBrace
            }
            '}' => {
                self.bump();
                Token::RBrace
            }
            ',' => {
                self.bump();
                Token::Comma
            }
            ':' => {
                self.bump();
                Token::Colon
            }
            '=' => {
                self.bump();
                Token::Eq
            }
            ';' => {
                self.bump();
                Token::Semi
            }
            '"' | '\'' => self.scan_string()?,
            c if c.is_ascii_digit() || c == '-' => self.scan_number(),
            c if c.is_alphabetic() || c == '_' || c == '$' => self.scan_ident(),
            c => {
                return Err(ParseError::UnexpectedChar {
                    found: c,
                    line,
                    column,
                });
            }
        };

        Ok(spanned(token))
    }

    fn scan_string(&mut self) -> Result<Token, ParseError> {
        let (line, column) = (self.line, self.column);
        let quote = self.bump().unwrap_or('"');
        let mut value = String::new();

        loop {
            // Position of the character about to be consumed, so escape
            // diagnostics can point at the backslash itself.
            let (esc_line, esc_column) = (self.line, self.column);
            let Some(c) = self.bump() else {
                return Err(ParseError::UnterminatedString { line, column });
            };
            if c == quote {
                return Ok(Token::Str(value));
            }
            if c == '\n' {
                return Err(ParseError::UnterminatedString { line, column });
            }
            if c != '\\' {
                value.push(c);
                continue;
            }

            let Some(escape) = self.bump() else {
                return Err(ParseError::UnterminatedString { line, column });
            };
            match escape {
                '\\' | '\'' | '"' | '/' => value.push(escape),
                'n' => value.push('\n'),
                't' => value.push('\t'),
                'r' => value.push('\r'),
                'u' => value.push(self.scan_unicode_escape(esc_line, esc_column)?),
                other => {
                    return Err(ParseError::InvalidEscape {
                        escape: other.to_string(),
                        line: esc_line,
                        column: esc_column,
                    });
                }
            }
        }
    }

    /// Read the `XXXX` of a `\uXXXX` escape.
    fn scan_unicode_escape(&mut self, line: usize, column: usize) -> Result<char, ParseError> {
        let mut digits = String::with_capacity(4);
        for _ in 0..4 {
            match self.bump() {
                Some(c) if c.is_ascii_hexdigit() => digits.push(c),
                _ => {
                    return Err(ParseError::InvalidEscape {
                        escape: format!("u{digits}"),
                        line,
                        column,
                    });
                }
            }
        }

        // Four hex digits always fit in u32
        let code = u32::from_str_radix(&digits, 16).unwrap_or_default();
        char::from_u32(code).ok_or(ParseError::InvalidEscape {
            escape: format!("u{digits}"),
            line,
            column,
        })
    }

    fn scan_number(&mut self) -> Token {
        let mut text = String::new();
        if self.peek() == Some('-') {
            text.push('-');
            self.bump();
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Token::Number(text)
    }

    fn scan_ident(&mut self) -> Token {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }

        if name == "null" {
            Token::Null
        } else {
            Token::Ident(name)
        }
    }
}
