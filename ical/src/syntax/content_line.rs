// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Assembly of a logical line into a content-line triple.
//!
//! ```txt
//! contentline = name *(";" param ) ":" value CRLF
//! param       = param-name "=" param-value *("," param-value)
//! ```

use crate::error::{Error, ErrorKind};
use crate::syntax::lexer::{Lexer, Token};

/// A parameter as written, before any typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParameter {
    /// Parameter name, upper case.
    pub name: String,
    /// Values in source order, with quotes removed.
    pub values: Vec<String>,
}

impl RawParameter {
    /// Creates a parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values: vec![value.into()],
        }
    }
}

/// One logical line split into name, parameters and values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name, or `BEGIN`/`END`, upper case.
    pub name: String,
    /// Parameters in source order; names may repeat.
    pub parameters: Vec<RawParameter>,
    /// Comma-separated values in source order, escapes left in place.
    pub values: Vec<String>,
    /// 1-based physical line the content line starts on, 0 if built in code.
    pub line: usize,
}

enum Next {
    Parameter,
    Value,
}

impl ContentLine {
    /// Creates a content line with a single value and no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            parameters: Vec::new(),
            values: vec![value.into()],
            line: 0,
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: RawParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Assembles one unfolded logical line.
    ///
    /// # Errors
    ///
    /// Returns an error annotated with `line` when the text is not a valid
    /// content line.
    pub fn parse(text: &str, line: usize) -> Result<Self, Error> {
        Self::assemble(text, line).map_err(|kind| Error::new(kind).at_line(line))
    }

    fn assemble(text: &str, line: usize) -> Result<Self, ErrorKind> {
        let mut lexer = Lexer::new(text);
        let name = match lexer.next_token() {
            Token::Ident(name) => name.to_ascii_uppercase(),
            Token::Semicolon | Token::Colon | Token::Eof => return Err(ErrorKind::EmptyName),
            token => return Err(unexpected(token)),
        };

        let mut parameters = Vec::new();
        let mut next = match lexer.next_token() {
            Token::Semicolon => Next::Parameter,
            Token::Colon => Next::Value,
            Token::Eof => return Err(ErrorKind::ExpectedColon),
            token => return Err(unexpected(token)),
        };
        while let Next::Parameter = next {
            let (parameter, following) = parameter(&mut lexer)?;
            parameters.push(parameter);
            next = following;
        }

        Ok(Self {
            name,
            parameters,
            values: values(&mut lexer)?,
            line,
        })
    }

    /// The first parameter named `name`, compared case-insensitively.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&RawParameter> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// The single value of a `BEGIN`/`END` line, upper case.
    pub(crate) fn single_value_upper(&self) -> Result<String, ErrorKind> {
        match self.values.as_slice() {
            [value] if !value.is_empty() => Ok(value.to_ascii_uppercase()),
            [_] => Err(ErrorKind::EmptyName),
            values => Err(ErrorKind::InvalidValueCount {
                expected: 1,
                got: values.len(),
            }),
        }
    }
}

fn unexpected(token: Token<'_>) -> ErrorKind {
    match token {
        Token::Illegal(c) if c.is_control() => ErrorKind::IllegalCharacter(c),
        Token::Eof => ErrorKind::UnexpectedEof,
        token => ErrorKind::InvalidToken(token.to_string()),
    }
}

fn parameter(lexer: &mut Lexer<'_>) -> Result<(RawParameter, Next), ErrorKind> {
    let name = match lexer.next_token() {
        Token::Ident(name) => name.to_ascii_uppercase(),
        Token::Assign => return Err(ErrorKind::EmptyName),
        token => return Err(unexpected(token)),
    };
    match lexer.next_token() {
        Token::Assign => {}
        token => return Err(unexpected(token)),
    }

    let mut values = Vec::new();
    let mut current: Option<&str> = None;
    loop {
        match lexer.next_token() {
            Token::Ident(s) | Token::String(s) if current.is_none() => current = Some(s),
            Token::Comma => values.push(current.take().unwrap_or_default().to_string()),
            token @ (Token::Semicolon | Token::Colon) => {
                values.push(current.take().unwrap_or_default().to_string());
                let next = if token == Token::Colon {
                    Next::Value
                } else {
                    Next::Parameter
                };
                return Ok((RawParameter { name, values }, next));
            }
            Token::Illegal('"') => return Err(ErrorKind::UnterminatedString),
            token => return Err(unexpected(token)),
        }
    }
}

fn values(lexer: &mut Lexer<'_>) -> Result<Vec<String>, ErrorKind> {
    let mut values = Vec::new();
    let mut current: Option<&str> = None;
    loop {
        match lexer.next_token() {
            Token::Ident(s) if current.is_none() => current = Some(s),
            Token::Comma => values.push(current.take().unwrap_or_default().to_string()),
            Token::Eof => {
                values.push(current.take().unwrap_or_default().to_string());
                return Ok(values);
            }
            token => return Err(unexpected(token)),
        }
    }
}
