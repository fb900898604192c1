// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text value type as defined in RFC 5545 Section 3.3.11.

use std::fmt::{self, Write};

use logos::Logos;

use crate::error::ErrorKind;
use crate::value::ValueType;

/// Escape sequences of a text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Logos)]
enum TextToken<'a> {
    #[token(r"\\")]
    Backslash,

    #[token(r"\;")]
    Semicolon,

    #[token(r"\,")]
    Comma,

    #[regex(r"\\[nN]")]
    Newline,

    #[regex(r"[^\\]+")]
    Literal(&'a str),
}

/// Text value type defined in RFC 5545 Section 3.3.11.
///
/// The value is held unescaped; escaping happens on display.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueText(String);

impl ValueText {
    /// Wraps unescaped text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Parses escaped text, resolving `\\ \; \, \n \N`.
    ///
    /// # Errors
    ///
    /// Returns an error on a backslash that starts no known escape.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let mut text = String::with_capacity(raw.len());
        let mut lexer = TextToken::lexer(raw);
        while let Some(token) = lexer.next() {
            match token {
                Ok(TextToken::Backslash) => text.push('\\'),
                Ok(TextToken::Semicolon) => text.push(';'),
                Ok(TextToken::Comma) => text.push(','),
                Ok(TextToken::Newline) => text.push('\n'),
                Ok(TextToken::Literal(s)) => text.push_str(s),
                Err(()) => {
                    return Err(ErrorKind::malformed(
                        ValueType::Text,
                        raw,
                        format_args!("invalid escape '{}'", lexer.slice()),
                    ));
                }
            }
        }
        Ok(Self(text))
    }

    /// The unescaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the value, returning the unescaped text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ValueText {
    /// Writes the text escaped for a content line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str(r"\\")?,
                ';' => f.write_str(r"\;")?,
                ',' => f.write_str(r"\,")?,
                '\n' => f.write_str(r"\n")?,
                '\r' => {}
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

impl From<&str> for ValueText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ValueText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ValueText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
