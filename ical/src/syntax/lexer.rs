// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Mode-driven lexer for a single logical content line.
//!
//! The same text can be a name, a parameter value, a quoted string or an
//! escaped free-text value depending on where it appears, so the lexer
//! tracks a [`Mode`] that changes as delimiters are consumed and uses it to
//! decide which characters extend an identifier.

use std::fmt::{self, Display};

/// Token emitted by the content-line lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// A run of characters accepted by the current mode
    Ident(&'src str),

    /// Contents of a double-quoted parameter value, without the quotes
    String(&'src str),

    /// Equal sign (=)
    Assign,

    /// Comma (,)
    Comma,

    /// Semicolon (;)
    Semicolon,

    /// Colon (:)
    Colon,

    /// End of the logical line
    Eof,

    /// A character the current mode rejects
    Illegal(char),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) => f.write_str(s),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Assign => f.write_str("="),
            Self::Comma => f.write_str(","),
            Self::Semicolon => f.write_str(";"),
            Self::Colon => f.write_str(":"),
            Self::Eof => f.write_str("<EOF>"),
            Self::Illegal(c) => write!(f, "{c}"),
        }
    }
}

/// Lexer modes, selected by the last delimiter consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Property name, before any `;` or `:`
    #[default]
    Name,
    /// Parameter name, after `;`
    ParamName,
    /// Parameter value, after `=`
    ParamValue,
    /// Property value, after `:`
    Value,
}

/// Whether `c` extends an identifier in `mode`.
fn extends_ident(mode: Mode, c: char) -> bool {
    match mode {
        Mode::Name | Mode::ParamName => c.is_ascii_alphanumeric() || c == '-',
        Mode::ParamValue => c == '\t' || !(c.is_control() || matches!(c, '=' | ';' | ',' | '"' | ':')),
        Mode::Value => matches!(c, '\t' | '\r' | '\n') || !(c.is_control() || c == ','),
    }
}

/// Tokenizer over one unfolded content line.
///
/// Tokens are produced on demand; after [`Token::Eof`] the lexer keeps
/// returning `Eof`.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    src: &'src str,
    pos: usize,
    mode: Mode,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer in [`Mode::Name`], skipping leading whitespace.
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        let trimmed = src.trim_start_matches([' ', '\t']);
        Self {
            src,
            pos: src.len() - trimmed.len(),
            mode: Mode::Name,
        }
    }

    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Byte offset of the next token.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'src str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    /// Produces the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        let rest = self.rest();
        let Some(c) = rest.chars().next() else {
            return Token::Eof;
        };

        if self.mode == Mode::Value {
            return self.value_token(rest, c);
        }

        let token = match c {
            ';' => {
                self.mode = Mode::ParamName;
                Token::Semicolon
            }
            ':' => {
                self.mode = Mode::Value;
                Token::Colon
            }
            '=' => {
                if self.mode == Mode::ParamName {
                    self.mode = Mode::ParamValue;
                }
                Token::Assign
            }
            ',' => Token::Comma,
            '"' if self.mode == Mode::ParamValue => return self.quoted(rest),
            c if extends_ident(self.mode, c) => return self.ident(rest),
            c => Token::Illegal(c),
        };
        self.pos += c.len_utf8();
        token
    }

    fn value_token(&mut self, rest: &'src str, c: char) -> Token<'src> {
        if c == ',' {
            self.pos += 1;
            Token::Comma
        } else if extends_ident(Mode::Value, c) {
            self.ident(rest)
        } else {
            self.pos += c.len_utf8();
            Token::Illegal(c)
        }
    }

    fn ident(&mut self, rest: &'src str) -> Token<'src> {
        let mut end = rest.len();
        let mut escaped = false;
        for (i, c) in rest.char_indices() {
            if escaped {
                escaped = false;
                // keep `\,` inside the current value
                if c == ',' || extends_ident(self.mode, c) {
                    continue;
                }
                end = i;
                break;
            }
            if self.mode == Mode::Value && c == '\\' {
                escaped = true;
            } else if !extends_ident(self.mode, c) {
                end = i;
                break;
            }
        }
        let (ident, _) = rest.split_at(end);
        self.pos += end;
        Token::Ident(ident)
    }

    fn quoted(&mut self, rest: &'src str) -> Token<'src> {
        let body = rest.get(1..).unwrap_or_default();
        for (i, c) in body.char_indices() {
            if c == '"' {
                self.pos += i + 2;
                let (content, _) = body.split_at(i);
                return Token::String(content);
            }
            if c.is_control() && c != '\t' {
                self.pos += i + 1 + c.len_utf8();
                return Token::Illegal(c);
            }
        }
        self.pos = self.src.len();
        Token::Illegal('"')
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to and including the first [`Token::Eof`].
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.src.len() {
            return None;
        }
        let token = self.next_token();
        if token == Token::Eof {
            // past the end so the iterator is fused
            self.pos = self.src.len() + 1;
        }
        Some(token)
    }
}
