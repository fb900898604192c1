// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Binary, boolean, numeric, URI and UTC offset values (RFC 5545 Sections
//! 3.3.1, 3.3.2, 3.3.3, 3.3.7, 3.3.8, 3.3.13 and 3.3.14).

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chumsky::prelude::*;

use crate::capability::{Capabilities, CapabilityError, DEFAULT_CAPABILITIES};
use crate::error::ErrorKind;
use crate::keyword::{KW_RSVP_FALSE, KW_RSVP_TRUE};
use crate::value::{Extra, ValueType, fixed_digits, parse_with, unsigned};

/// Inline binary data, kept in its Base64 form for round-tripping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueBinary {
    encoded: String,
}

impl ValueBinary {
    /// Checks that `raw` decodes as Base64.
    ///
    /// # Errors
    ///
    /// Returns an error if the capability rejects the text.
    pub fn parse(raw: &str, caps: &dyn Capabilities) -> Result<Self, ErrorKind> {
        caps.decode_base64(raw)
            .map_err(|e| ErrorKind::malformed(ValueType::Binary, raw, e))?;
        Ok(Self {
            encoded: raw.to_string(),
        })
    }

    /// Encodes `bytes` with the standard Base64 alphabet.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            encoded: STANDARD.encode(bytes),
        }
    }

    /// The Base64 text.
    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Decodes the data.
    ///
    /// # Errors
    ///
    /// Returns an error if the capability rejects the text.
    pub fn decode(&self, caps: &dyn Capabilities) -> Result<Vec<u8>, CapabilityError> {
        caps.decode_base64(&self.encoded)
    }
}

impl fmt::Display for ValueBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

/// An absolute URI, kept as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uri(String);

impl Uri {
    /// Validates `raw` with the URI capability.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not an absolute URI.
    pub fn parse(raw: &str, caps: &dyn Capabilities) -> Result<Self, ErrorKind> {
        caps.parse_uri(raw)
            .map_err(|e| ErrorKind::malformed(ValueType::Uri, raw, e))?;
        Ok(Self(raw.to_string()))
    }

    /// The URI text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Uri {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &DEFAULT_CAPABILITIES)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Offset from UTC, `[+-]HHMM[SS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueUtcOffset {
    /// Whether the offset is east of UTC (or zero)
    pub positive: bool,
    /// Hours, 0-23
    pub hour: i8,
    /// Minutes, 0-59
    pub minute: i8,
    /// Seconds, 0-59, when written
    pub second: Option<i8>,
}

impl ValueUtcOffset {
    /// Parses `[+-]HHMM[SS]`.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed or negative zero offset.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let offset = parse_with(value_utc_offset(), ValueType::UtcOffset, raw)?;
        if !(0..=23).contains(&offset.hour) {
            return Err(ErrorKind::out_of_range("hour", offset.hour));
        }
        if !(0..=59).contains(&offset.minute) {
            return Err(ErrorKind::out_of_range("minute", offset.minute));
        }
        if let Some(second) = offset.second
            && !(0..=59).contains(&second)
        {
            return Err(ErrorKind::out_of_range("second", second));
        }
        if !offset.positive && offset.as_seconds() == 0 {
            return Err(ErrorKind::malformed(
                ValueType::UtcOffset,
                raw,
                "negative zero offset",
            ));
        }
        Ok(offset)
    }

    /// Signed offset in seconds.
    #[must_use]
    pub fn as_seconds(&self) -> i32 {
        let seconds = i32::from(self.hour) * 3_600
            + i32::from(self.minute) * 60
            + i32::from(self.second.unwrap_or(0));
        if self.positive { seconds } else { -seconds }
    }
}

impl TryFrom<ValueUtcOffset> for jiff::tz::Offset {
    type Error = jiff::Error;

    fn try_from(value: ValueUtcOffset) -> Result<Self, Self::Error> {
        Self::from_seconds(value.as_seconds())
    }
}

impl fmt::Display for ValueUtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.positive { '+' } else { '-' };
        write!(f, "{sign}{:02}{:02}", self.hour, self.minute)?;
        if let Some(second) = self.second {
            write!(f, "{second:02}")?;
        }
        Ok(())
    }
}

/// ```txt
/// utc-offset = time-numzone
/// time-numzone = ("+" / "-") time-hour time-minute [time-second]
/// ```
fn value_utc_offset<'src>() -> impl Parser<'src, &'src str, ValueUtcOffset, Extra<'src>> + Clone {
    one_of("+-")
        .map(|c| c == '+')
        .then(fixed_digits::<i8>(2))
        .then(fixed_digits::<i8>(2))
        .then(fixed_digits::<i8>(2).or_not())
        .map(|(((positive, hour), minute), second)| ValueUtcOffset {
            positive,
            hour,
            minute,
            second,
        })
}

/// Parses `TRUE` or `FALSE`, ignoring case.
///
/// # Errors
///
/// Returns an error for any other text.
pub fn parse_boolean(raw: &str) -> Result<bool, ErrorKind> {
    if raw.eq_ignore_ascii_case(KW_RSVP_TRUE) {
        Ok(true)
    } else if raw.eq_ignore_ascii_case(KW_RSVP_FALSE) {
        Ok(false)
    } else {
        Err(ErrorKind::malformed(
            ValueType::Boolean,
            raw,
            "expected TRUE or FALSE",
        ))
    }
}

/// ```txt
/// integer    = (["+"] / "-") 1*DIGIT
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a 32-bit integer.
pub fn parse_integer(raw: &str) -> Result<i32, ErrorKind> {
    let parser = one_of("+-")
        .or_not()
        .then(unsigned::<i64>())
        .try_map(|(sign, n), span| {
            let n = if sign == Some('-') { -n } else { n };
            i32::try_from(n).map_err(|e| Rich::custom(span, e))
        });
    parse_with(parser, ValueType::Integer, raw)
}

/// ```txt
/// float      = (["+"] / "-") 1*DIGIT ["." 1*DIGIT]
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a decimal number.
pub fn parse_float(raw: &str) -> Result<f64, ErrorKind> {
    let digits = one_of("0123456789").repeated().at_least(1);
    let parser = one_of("+-")
        .or_not()
        .then(digits.clone())
        .then(just('.').then(digits).or_not())
        .to_slice()
        .try_map(|s: &str, span| {
            let s = s.strip_prefix('+').unwrap_or(s);
            lexical::parse::<f64, _>(s).map_err(|e| Rich::custom(span, e))
        });
    parse_with(parser, ValueType::Float, raw)
}

/// A real number, kept with the text it was written as so that `40.0`
/// encodes back as `40.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueFloat {
    value: f64,
    text: String,
}

impl ValueFloat {
    /// Wraps a finite number, written in its shortest decimal form.
    ///
    /// # Errors
    ///
    /// Returns an error for NaN or an infinity, which have no FLOAT form.
    pub fn new(value: f64) -> Result<Self, ErrorKind> {
        if !value.is_finite() {
            return Err(ErrorKind::malformed(
                ValueType::Float,
                value.to_string(),
                "not a finite number",
            ));
        }
        Ok(Self {
            value,
            text: value.to_string(),
        })
    }

    /// Parses a FLOAT, keeping `raw` as its text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a decimal number.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        Ok(Self {
            value: parse_float(raw)?,
            text: raw.to_string(),
        })
    }

    /// The number.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The number as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ValueFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    #[test]
    fn parses_utc_offsets() {
        let success_cases = [
            ("-0500",   false, 5, 0, None),
            ("+0100",   true,  1, 0, None),
            ("+013015", true,  1, 30, Some(15)),
            ("+0000",   true,  0, 0, None),
        ];
        for (src, positive, hour, minute, second) in success_cases {
            let expected = ValueUtcOffset { positive, hour, minute, second };
            assert_eq!(ValueUtcOffset::parse(src), Ok(expected), "{src}");
            assert_eq!(expected.to_string(), src);
        }

        let fail_cases = ["-0000", "-000000", "0500", "+05", "+2400", "+0560", "+050060"];
        for src in fail_cases {
            assert!(ValueUtcOffset::parse(src).is_err(), "{src}");
        }
    }

    #[test]
    fn utc_offset_seconds() {
        let offset = ValueUtcOffset::parse("-0530").unwrap();
        assert_eq!(offset.as_seconds(), -19_800);
        let jiff_offset = jiff::tz::Offset::try_from(offset).unwrap();
        assert_eq!(jiff_offset.seconds(), -19_800);
    }

    #[test]
    fn parses_booleans() {
        assert_eq!(parse_boolean("TRUE"), Ok(true));
        assert_eq!(parse_boolean("false"), Ok(false));
        assert!(parse_boolean("yes").is_err());
    }

    #[rustfmt::skip]
    #[test]
    fn parses_integers() {
        let success_cases = [("1234567890", 1_234_567_890), ("-1234567890", -1_234_567_890), ("+1", 1), ("0", 0)];
        for (src, expected) in success_cases {
            assert_eq!(parse_integer(src), Ok(expected), "{src}");
        }
        for src in ["", "1.5", "abc", "9999999999", "--1"] {
            assert!(parse_integer(src).is_err(), "{src}");
        }
    }

    #[test]
    fn parses_floats() {
        assert_eq!(parse_float("1000000.0000001"), Ok(1_000_000.000_000_1));
        assert_eq!(parse_float("-1.5"), Ok(-1.5));
        assert_eq!(parse_float("+37"), Ok(37.0));
        assert!(parse_float("1.").is_err());
        assert!(parse_float("1e5").is_err());
    }

    #[test]
    fn floats_keep_their_text() {
        for src in ["40.0", "-74.50", "+1", "007.10"] {
            let float = ValueFloat::parse(src).unwrap();
            assert_eq!(float.to_string(), src);
        }
        assert_eq!(ValueFloat::parse("-74.50").unwrap().value(), -74.5);

        assert_eq!(ValueFloat::new(2.5).unwrap().as_str(), "2.5");
        assert_eq!(ValueFloat::new(1e21).unwrap().as_str(), "1000000000000000000000");
        assert!(ValueFloat::new(f64::NAN).is_err());
        assert!(ValueFloat::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn binary_keeps_encoded_form() {
        let binary = ValueBinary::parse("aGVsbG8=", &DEFAULT_CAPABILITIES).unwrap();
        assert_eq!(binary.encoded(), "aGVsbG8=");
        assert_eq!(binary.decode(&DEFAULT_CAPABILITIES).unwrap(), b"hello");
        assert_eq!(ValueBinary::from_bytes(b"hello"), binary);
        assert!(ValueBinary::parse("***", &DEFAULT_CAPABILITIES).is_err());
    }

    #[test]
    fn uri_requires_absolute_form() {
        let uri: Uri = "mailto:jsmith@example.com".parse().unwrap();
        assert_eq!(uri.as_str(), "mailto:jsmith@example.com");
        assert!("not a uri".parse::<Uri>().is_err());
    }
}
