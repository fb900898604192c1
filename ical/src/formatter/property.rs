// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting, RFC 5545 Section 3.8.

use std::io::{self, Write};

use crate::formatter::Formatter;
use crate::formatter::parameter::{write_parameters, write_raw_parameters};
use crate::property::Property;
use crate::syntax::ContentLine;

/// Writes one property as a content line, including the line ending.
pub fn write_property<W: Write>(f: &mut Formatter<W>, property: &Property) -> io::Result<()> {
    write!(f, "{}", property.name())?;
    write_parameters(f, property.parameters())?;
    write!(f, ":{}", property.value())?;
    f.writeln()
}

/// Writes an undecoded content line, including the line ending.
pub fn write_content_line<W: Write>(f: &mut Formatter<W>, line: &ContentLine) -> io::Result<()> {
    f.write_all(line.name.as_bytes())?;
    write_raw_parameters(f, &line.parameters)?;
    f.write_all(b":")?;
    for (i, value) in line.values.iter().enumerate() {
        if i > 0 {
            f.write_all(b",")?;
        }
        f.write_all(value.as_bytes())?;
    }
    f.writeln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::DEFAULT_CAPABILITIES;
    use crate::formatter::FormatOptions;

    fn reencode(src: &str) -> String {
        let line = ContentLine::parse(src, 1).unwrap();
        let property = Property::decode(&line, &DEFAULT_CAPABILITIES).unwrap();
        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default());
        write_property(&mut f, &property).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[rustfmt::skip]
    #[test]
    fn writes_canonical_properties() {
        let success_cases = [
            "DTSTART;TZID=Asia/Tokyo:20200301T090000",
            "DTSTART;VALUE=DATE:20200301",
            r"SUMMARY:a\, b\; c\\ d\n",
            "CATEGORIES:WORK,MEETING",
            "ATTENDEE;CN=\"Doe, Jane\";RSVP=TRUE:mailto:jane@example.com",
            "TRIGGER;RELATED=END:-PT15M",
            "RRULE:FREQ=WEEKLY;COUNT=10;BYDAY=MO,WE",
            "GEO:37.386013;-122.082932",
            "REQUEST-STATUS:2.0;Success",
            r"X-WR-CALNAME:My\, Cal",
        ];
        for src in success_cases {
            assert_eq!(reencode(src), format!("{src}\r\n"));
        }
    }

    #[test]
    fn writes_raw_content_lines() {
        let line = ContentLine::parse(r#"EXAMPLE;AAA="BBBB;CCCC":DDDD"#, 1).unwrap();
        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default());
        write_content_line(&mut f, &line).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "EXAMPLE;AAA=\"BBBB;CCCC\":DDDD\r\n"
        );
    }
}
