// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Error locations are precise enough to render source diagnostics.

use std::ops::Range;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use calcore_ical::{ComponentKind, Error, ErrorKind, PropertyKind, decode_str};

/// Byte range of a 1-based physical line, without its terminator.
fn line_span(src: &str, line: usize) -> Range<usize> {
    let mut start = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let end = start + text.trim_end_matches(['\r', '\n']).len();
            return start..end;
        }
        start += text.len();
    }
    src.len()..src.len()
}

fn render(src: &str, err: &Error) -> String {
    let span = line_span(src, err.line().unwrap());
    let report = Report::build(ReportKind::Error, span.clone())
        .with_config(
            Config::new()
                .with_index_type(IndexType::Byte)
                .with_color(false),
        )
        .with_message(err.to_string())
        .with_label(Label::new(span).with_message(err.kind().to_string()))
        .finish();

    let mut buf = Vec::new();
    report.write(Source::from(src), &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

const HEAD: &str = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Ex//EN\r\n";

#[test]
fn duplicate_property_is_reported_at_its_line() {
    let src = format!(
        "{HEAD}BEGIN:VEVENT\r\n\
         UID:a@b\r\n\
         DTSTAMP:20200301T120000Z\r\n\
         DTSTART:20200301T130000Z\r\n\
         SUMMARY:one\r\n\
         SUMMARY:two\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    );
    let err = decode_str(&src).unwrap_err();
    assert_eq!(err.line(), Some(9));
    assert_eq!(err.component(), Some(ComponentKind::Event));
    assert_eq!(err.property(), Some(&PropertyKind::Summary.into()));
    assert_eq!(
        err.to_string(),
        "line 9: VEVENT.SUMMARY: property SUMMARY occurs more than once"
    );

    let rendered = render(&src, &err);
    assert!(rendered.contains("property SUMMARY occurs more than once"));
    assert!(rendered.contains("SUMMARY:two"));
}

#[test]
fn missing_property_is_reported_at_the_end_line() {
    let src = format!(
        "{HEAD}BEGIN:VEVENT\r\n\
         UID:a@b\r\n\
         DTSTART:20200301T130000Z\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    );
    let err = decode_str(&src).unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::MissingRequiredProperty {
            component: ComponentKind::Event,
            property: PropertyKind::DtStamp.into(),
        }
    );
    assert_eq!(err.line(), Some(7));
    assert!(render(&src, &err).contains("END:VEVENT"));
}

#[test]
fn malformed_values_name_the_property() {
    let src = format!(
        "{HEAD}BEGIN:VEVENT\r\n\
         UID:a@b\r\n\
         DTSTAMP:20200301T120000Z\r\n\
         DTSTART:20200230T130000Z\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    );
    let err = decode_str(&src).unwrap_err();
    assert_eq!(err.line(), Some(7));
    assert_eq!(err.property(), Some(&PropertyKind::DtStart.into()));
    assert!(err.to_string().starts_with("line 7: VEVENT.DTSTART: "));
}

#[test]
fn structural_errors_are_located() {
    #[rustfmt::skip]
    let fail_cases = [
        (format!("{HEAD}BEGIN:VEVENT\r\nEND:VTODO\r\nEND:VCALENDAR\r\n"), 5),
        (format!("{HEAD}BEGIN:VEVENT\r\nUID:a@b\r\n"),                      4),
        (format!("{HEAD}END:VCALENDAR\r\nX-A:1\r\n"),                       5),
        (format!("{HEAD}BEGIN:VNOTE\r\nEND:VNOTE\r\nEND:VCALENDAR\r\n"),    4),
        (format!("{HEAD}BAD;PARAM\r\nEND:VCALENDAR\r\n"),                   4),
    ];
    for (src, line) in fail_cases {
        let err = decode_str(&src).unwrap_err();
        assert_eq!(err.line(), Some(line), "{err}");
        assert!(err.to_string().starts_with(&format!("line {line}: ")));
        render(&src, &err);
    }
}

#[test]
fn empty_input_has_no_line() {
    let err = decode_str("").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnexpectedEof);
    assert_eq!(err.line(), None);
}
