// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Unfolding of physical lines into logical lines (RFC 5545 Section 3.1).

use std::borrow::Cow;
use std::iter::{Enumerate, Peekable};
use std::str::Split;

use crate::error::{Error, ErrorKind};

/// A logical line together with the physical line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine<'src> {
    /// 1-based physical line number of the first physical line.
    pub line: usize,
    /// Unfolded text without the line terminator.
    pub text: Cow<'src, str>,
}

/// Iterator over the logical lines of a source text, see [`unfold`].
#[derive(Debug)]
pub struct Unfold<'src> {
    lines: Peekable<Enumerate<Split<'src, char>>>,
}

/// Unfolds `src` into logical lines.
///
/// Lines may end in CRLF or bare LF. A physical line starting with a space
/// or a horizontal tab continues the previous logical line with that single
/// whitespace character removed. Empty physical lines are skipped.
#[must_use]
pub fn unfold(src: &str) -> Unfold<'_> {
    Unfold {
        lines: src.split('\n').enumerate().peekable(),
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

impl<'src> Iterator for Unfold<'src> {
    type Item = Result<LogicalLine<'src>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.lines.next()?;
            let raw = strip_cr(raw);
            if raw.is_empty() {
                continue;
            }
            if is_continuation(raw) {
                return Some(Err(Error::new(ErrorKind::MalformedFold).at_line(index + 1)));
            }

            let mut text = Cow::Borrowed(raw);
            while let Some((_, next)) = self.lines.next_if(|(_, l)| is_continuation(l)) {
                // the leading whitespace is a single ASCII byte
                let tail = strip_cr(next).get(1..).unwrap_or_default();
                text.to_mut().push_str(tail);
            }
            return Some(Ok(LogicalLine {
                line: index + 1,
                text,
            }));
        }
    }
}
