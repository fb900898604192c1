// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Untyped iCalendar syntax as defined in RFC 5545 Section 3.1.
//!
//! Physical lines are unfolded into logical lines, and each logical line is
//! tokenized by a mode-driven [`Lexer`] into a [`ContentLine`] triple of
//! name, parameters and values. Nothing here knows about property or value
//! types.

mod content_line;
mod lexer;
mod unfold;

use std::sync::LazyLock;

use regex::Regex;

pub use crate::syntax::content_line::{ContentLine, RawParameter};
pub use crate::syntax::lexer::{Lexer, Mode, Token};
pub use crate::syntax::unfold::{LogicalLine, Unfold, unfold};

use crate::error::Error;

/// Content lines of an iCalendar stream, in source order.
///
/// Each item is either a content line or the error that stopped its
/// assembly, annotated with the 1-based physical line.
pub fn content_lines(src: &str) -> impl Iterator<Item = Result<ContentLine, Error>> + '_ {
    unfold(src).map(|line| {
        let line = line?;
        ContentLine::parse(&line.text, line.line)
    })
}

static X_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^X-([0-9A-Z]{3}-)?[0-9A-Z-]+$").unwrap() // SAFETY: literal pattern
});

/// Whether `s` is an experimental name: `X-` with an optional three
/// character vendor id, upper case only.
#[must_use]
pub fn is_x_name(s: &str) -> bool {
    X_NAME.is_match(s)
}

/// Whether `s` is an IANA token: one or more of `[A-Za-z0-9-]`.
#[must_use]
pub fn is_iana_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[rustfmt::skip]
    #[test]
    fn x_names() {
        let success_cases = ["X-FOO", "X-ABC-FOO", "X-1", "X-WR-CALNAME"];
        for s in success_cases {
            assert!(is_x_name(s), "{s}");
        }

        let fail_cases = ["X-", "x-foo", "X-foo", "FOO", "X-A B"];
        for s in fail_cases {
            assert!(!is_x_name(s), "{s}");
        }
    }

    #[test]
    fn iana_tokens() {
        assert!(is_iana_token("VEVENT"));
        assert!(is_iana_token("x-lower-1"));
        assert!(!is_iana_token(""));
        assert!(!is_iana_token("A_B"));
    }

    #[test]
    fn assembles_content_lines_with_lines() {
        let src = "BEGIN:VCALENDAR\r\nSUMMARY:long\r\n  text\r\nEND:VCALENDAR\r\n";
        let lines = content_lines(src).collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].name, "SUMMARY");
        assert_eq!(lines[1].values, vec!["long text".to_string()]);
        assert_eq!(lines[2].line, 4);
    }

    #[test]
    fn reports_physical_line_of_failure() {
        let src = "BEGIN:VCALENDAR\r\nEX@MPLE:DDDD,EEEE,FFFF\r\n";
        let err = content_lines(src).find_map(Result::err).unwrap();
        assert_eq!(err.kind(), &ErrorKind::InvalidToken("@".to_string()));
        assert_eq!(err.line(), Some(2));
    }
}
