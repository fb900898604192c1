// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The content-line lexer and unfolding through the public syntax API.

use calcore_ical::syntax::{Lexer, Mode, Token, unfold};
use calcore_ical::{ErrorKind, content_lines, decode_str};

fn tokens(src: &str) -> Vec<(Token<'_>, Mode)> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push((token, lexer.mode()));
        if token == Token::Eof {
            return tokens;
        }
    }
}

#[test]
fn lexer_switches_modes_on_delimiters() {
    #[rustfmt::skip]
    let expected = vec![
        (Token::Ident("DTSTART"),          Mode::Name),
        (Token::Semicolon,                 Mode::ParamName),
        (Token::Ident("TZID"),             Mode::ParamName),
        (Token::Assign,                    Mode::ParamValue),
        (Token::Ident("Europe/Berlin"),    Mode::ParamValue),
        (Token::Colon,                     Mode::Value),
        (Token::Ident("20200301T090000"),  Mode::Value),
        (Token::Eof,                       Mode::Value),
    ];
    assert_eq!(tokens("DTSTART;TZID=Europe/Berlin:20200301T090000"), expected);
}

#[test]
fn lexer_keeps_delimiters_in_quotes_and_values() {
    let kinds: Vec<_> = tokens(r#"X-A;X-P="a;b:c",d:x=1;y:z,w\,v"#)
        .into_iter()
        .map(|(token, _)| token)
        .collect();
    assert_eq!(
        kinds,
        [
            Token::Ident("X-A"),
            Token::Semicolon,
            Token::Ident("X-P"),
            Token::Assign,
            Token::String("a;b:c"),
            Token::Comma,
            Token::Ident("d"),
            Token::Colon,
            Token::Ident("x=1;y:z"),
            Token::Comma,
            Token::Ident(r"w\,v"),
            Token::Eof,
        ]
    );
}

#[test]
fn lexer_reports_illegal_characters() {
    let mut lexer = Lexer::new("EX@MPLE:DDDD");
    assert_eq!(lexer.next_token(), Token::Ident("EX"));
    assert_eq!(lexer.offset(), 2);
    assert_eq!(lexer.next_token(), Token::Illegal('@'));
    assert_eq!(lexer.mode(), Mode::Name);
}

#[test]
fn unfold_reports_physical_lines() {
    let lines: Vec<_> = unfold("A:1\r\nB:2\r\n  3\r\n\tx\r\n\r\nC:4")
        .map(|line| line.map(|l| (l.line, l.text.into_owned())))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        lines,
        [
            (1, "A:1".to_string()),
            (2, "B:2 3x".to_string()),
            (6, "C:4".to_string()),
        ]
    );

    let err = unfold(" orphan\r\nA:1").next().unwrap().unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MalformedFold);
    assert_eq!(err.line(), Some(1));
}

#[test]
fn illegal_name_character_is_located() {
    let err = content_lines("A:1\r\nEX@MPLE:DDDD,EEEE,FFFF\r\n")
        .nth(1)
        .unwrap()
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidToken("@".to_string()));
    assert_eq!(err.line(), Some(2));

    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Ex//EN\r\n\
EX@MPLE:DDDD,EEEE,FFFF\r\n\
END:VCALENDAR\r\n";
    let err = decode_str(src).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidToken("@".to_string()));
    assert_eq!(err.line(), Some(4));
}

#[test]
fn escaped_control_character_is_located() {
    let src = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Ex//EN\r\n\
X-NOTE:one\\\u{7}two\r\n\
END:VCALENDAR\r\n";
    let err = decode_str(src).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::IllegalCharacter('\u{7}'));
    assert_eq!(err.line(), Some(4));
}

#[test]
fn names_are_case_insensitive() {
    let line = content_lines("dtStart;tzid=Asia/Tokyo:20200301T090000")
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(line.name, "DTSTART");
    assert_eq!(line.parameters[0].name, "TZID");
    assert_eq!(line.parameters[0].values, ["Asia/Tokyo"]);
}
