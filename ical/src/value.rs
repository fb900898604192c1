// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value type parsing module for iCalendar property values.
//!
//! This module handles the parsing and validation of iCalendar value types
//! as defined in RFC 5545 Section 3.3. Grammar shape is checked with
//! `chumsky` combinators; field ranges are checked afterwards so that they
//! surface as [`ErrorKind::OutOfRange`].

mod datetime;
mod duration;
mod miscellaneous;
mod period;
mod rrule;
mod text;
mod types;

use std::fmt::{self, Display};

use chumsky::prelude::*;

pub use crate::value::datetime::{DateOrDateTime, ValueDate, ValueDateTime, ValueTime};
pub use crate::value::duration::ValueDuration;
pub use crate::value::miscellaneous::{
    Uri, ValueBinary, ValueFloat, ValueUtcOffset, parse_boolean, parse_float, parse_integer,
};
pub use crate::value::period::ValuePeriod;
pub use crate::value::rrule::{RecurrenceFrequency, ValueRecurrenceRule, WeekDay, WeekDayNum};
pub use crate::value::text::ValueText;
pub use crate::value::types::ValueType;

use crate::capability::Capabilities;
use crate::error::ErrorKind;

pub(crate) type Extra<'src> = extra::Err<Rich<'src, char>>;

/// Exactly `n` decimal digits.
pub(crate) fn fixed_digits<'src, T: lexical::FromLexical>(
    n: usize,
) -> impl Parser<'src, &'src str, T, Extra<'src>> + Clone {
    one_of("0123456789")
        .repeated()
        .exactly(n)
        .to_slice()
        .try_map(|s: &str, span| lexical::parse::<T, _>(s).map_err(|e| Rich::custom(span, e)))
}

/// One or more decimal digits.
pub(crate) fn unsigned<'src, T: lexical::FromLexical>()
-> impl Parser<'src, &'src str, T, Extra<'src>> + Clone {
    one_of("0123456789")
        .repeated()
        .at_least(1)
        .to_slice()
        .try_map(|s: &str, span| lexical::parse::<T, _>(s).map_err(|e| Rich::custom(span, e)))
}

/// Runs `parser` over the whole of `raw`, reporting the first grammar error
/// as [`ErrorKind::MalformedValue`].
pub(crate) fn parse_with<'src, T>(
    parser: impl Parser<'src, &'src str, T, Extra<'src>>,
    kind: ValueType,
    raw: &'src str,
) -> Result<T, ErrorKind> {
    parser
        .then_ignore(end())
        .parse(raw)
        .into_result()
        .map_err(|errs| {
            let reason = errs
                .first()
                .map_or_else(|| "invalid syntax".to_string(), ToString::to_string);
            ErrorKind::malformed(kind, raw, reason)
        })
}

/// The properties in an iCalendar object are strongly typed.  The definition
/// of each property restricts the value to be one of the value data types, or
/// simply value types, defined in this section. The value type for a property
/// will either be specified implicitly as the default value type or will be
/// explicitly specified with the "VALUE" parameter.  If the value type of a
/// property is one of the alternate valid types, then it MUST be explicitly
/// specified with the "VALUE" parameter.
///
/// See RFC 5545 Section 3.3 for more details.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// This value type is used to identify properties that contain a character
    /// encoding of inline binary data.
    ///
    /// See RFC 5545 Section 3.3.1 for more details.
    Binary(ValueBinary),

    /// This value type is used to identify properties that contain either a
    /// "TRUE" or "FALSE" Boolean value.
    ///
    /// See RFC 5545 Section 3.3.2 for more details.
    Boolean(bool),

    /// This value type is used to identify properties that contain a calendar
    /// user address.
    ///
    /// See RFC 5545 Section 3.3.3 for more details.
    CalAddress(Uri),

    /// This value type is used to identify values that contain a calendar date.
    ///
    /// See RFC 5545 Section 3.3.4 for more details.
    Date(ValueDate),

    /// This value type is used to identify values that specify a precise
    /// calendar date and time of day.
    ///
    /// See RFC 5545 Section 3.3.5 for more details.
    DateTime(ValueDateTime),

    /// This value type is used to identify properties that contain a duration
    /// of time.
    ///
    /// See RFC 5545 Section 3.3.6 for more details.
    Duration(ValueDuration),

    /// This value type is used to identify properties that contain a real-
    /// number value.
    ///
    /// See RFC 5545 Section 3.3.7 for more details.
    Float(ValueFloat),

    /// This value type is used to identify properties that contain a signed
    /// integer value.
    ///
    /// See RFC 5545 Section 3.3.8 for more details.
    Integer(i32),

    /// This value type is used to identify values that contain a precise
    /// period of time.
    ///
    /// See RFC 5545 Section 3.3.9 for more details.
    Period(ValuePeriod),

    /// This value type is used to identify properties that contain a
    /// recurrence rule specification.
    ///
    /// See RFC 5545 Section 3.3.10 for more details.
    Recur(Box<ValueRecurrenceRule>),

    /// This value type is used to identify values that contain human-readable
    /// text.
    ///
    /// See RFC 5545 Section 3.3.11 for more details.
    Text(ValueText),

    /// This value type is used to identify values that contain a time of day.
    ///
    /// See RFC 5545 Section 3.3.12 for more details.
    Time(ValueTime),

    /// This value type is used to identify values that contain a uniform
    /// resource identifier (URI) type of reference to the property value.
    ///
    /// See RFC 5545 Section 3.3.13 for more details.
    Uri(Uri),

    /// This value type is used to identify properties that contain an offset
    /// from UTC to local time.
    ///
    /// See RFC 5545 Section 3.3.14 for more details.
    UtcOffset(ValueUtcOffset),
}

impl Value {
    /// Decodes `raw` as a value of type `ty`.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a valid value of that type.
    pub fn decode(ty: ValueType, raw: &str, caps: &dyn Capabilities) -> Result<Self, ErrorKind> {
        Ok(match ty {
            ValueType::Binary => Self::Binary(ValueBinary::parse(raw, caps)?),
            ValueType::Boolean => Self::Boolean(parse_boolean(raw)?),
            ValueType::CalAddress => Self::CalAddress(Uri::parse(raw, caps).map_err(|_| {
                ErrorKind::malformed(ValueType::CalAddress, raw, "not an absolute URI")
            })?),
            ValueType::Date => Self::Date(ValueDate::parse(raw)?),
            ValueType::DateTime => Self::DateTime(ValueDateTime::parse(raw)?),
            ValueType::Duration => Self::Duration(ValueDuration::parse(raw)?),
            ValueType::Float => Self::Float(ValueFloat::parse(raw)?),
            ValueType::Integer => Self::Integer(parse_integer(raw)?),
            ValueType::Period => Self::Period(ValuePeriod::parse(raw)?),
            ValueType::Recur => Self::Recur(Box::new(ValueRecurrenceRule::parse(raw)?)),
            ValueType::Text => Self::Text(ValueText::parse(raw)?),
            ValueType::Time => Self::Time(ValueTime::parse(raw)?),
            ValueType::Uri => Self::Uri(Uri::parse(raw, caps)?),
            ValueType::UtcOffset => Self::UtcOffset(ValueUtcOffset::parse(raw)?),
        })
    }

    /// The type of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueType {
        match self {
            Self::Binary(_) => ValueType::Binary,
            Self::Boolean(_) => ValueType::Boolean,
            Self::CalAddress(_) => ValueType::CalAddress,
            Self::Date(_) => ValueType::Date,
            Self::DateTime(_) => ValueType::DateTime,
            Self::Duration(_) => ValueType::Duration,
            Self::Float(_) => ValueType::Float,
            Self::Integer(_) => ValueType::Integer,
            Self::Period(_) => ValueType::Period,
            Self::Recur(_) => ValueType::Recur,
            Self::Text(_) => ValueType::Text,
            Self::Time(_) => ValueType::Time,
            Self::Uri(_) => ValueType::Uri,
            Self::UtcOffset(_) => ValueType::UtcOffset,
        }
    }

    /// The text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&ValueText> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The date-time, if this is a date-time value.
    #[must_use]
    pub const fn as_date_time(&self) -> Option<&ValueDateTime> {
        match self {
            Self::DateTime(datetime) => Some(datetime),
            _ => None,
        }
    }

    /// The date or date-time, if this is either.
    #[must_use]
    pub const fn as_date_or_date_time(&self) -> Option<DateOrDateTime> {
        match self {
            Self::Date(date) => Some(DateOrDateTime::Date(*date)),
            Self::DateTime(datetime) => Some(DateOrDateTime::DateTime(*datetime)),
            _ => None,
        }
    }

    /// The duration, if this is a duration value.
    #[must_use]
    pub const fn as_duration(&self) -> Option<&ValueDuration> {
        match self {
            Self::Duration(duration) => Some(duration),
            _ => None,
        }
    }

    /// The integer, if this is an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The URI, if this is a URI or calendar user address.
    #[must_use]
    pub const fn as_uri(&self) -> Option<&Uri> {
        match self {
            Self::Uri(uri) | Self::CalAddress(uri) => Some(uri),
            _ => None,
        }
    }

    /// Whether this is a UTC date-time, or a period starting at one.
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        match self {
            Self::DateTime(datetime) => datetime.is_utc(),
            Self::Period(period) => period.start().is_utc(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary(v) => v.fmt(f),
            Self::Boolean(true) => f.write_str(crate::keyword::KW_RSVP_TRUE),
            Self::Boolean(false) => f.write_str(crate::keyword::KW_RSVP_FALSE),
            Self::CalAddress(v) | Self::Uri(v) => v.fmt(f),
            Self::Date(v) => v.fmt(f),
            Self::DateTime(v) => v.fmt(f),
            Self::Duration(v) => v.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::Integer(v) => v.fmt(f),
            Self::Period(v) => v.fmt(f),
            Self::Recur(v) => v.fmt(f),
            Self::Text(v) => v.fmt(f),
            Self::Time(v) => v.fmt(f),
            Self::UtcOffset(v) => v.fmt(f),
        }
    }
}

impl From<ValueText> for Value {
    fn from(value: ValueText) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl From<ValueDate> for Value {
    fn from(value: ValueDate) -> Self {
        Self::Date(value)
    }
}

impl From<ValueDateTime> for Value {
    fn from(value: ValueDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateOrDateTime> for Value {
    fn from(value: DateOrDateTime) -> Self {
        match value {
            DateOrDateTime::Date(date) => Self::Date(date),
            DateOrDateTime::DateTime(datetime) => Self::DateTime(datetime),
        }
    }
}

impl From<ValueDuration> for Value {
    fn from(value: ValueDuration) -> Self {
        Self::Duration(value)
    }
}

impl From<ValuePeriod> for Value {
    fn from(value: ValuePeriod) -> Self {
        Self::Period(value)
    }
}

impl From<ValueRecurrenceRule> for Value {
    fn from(value: ValueRecurrenceRule) -> Self {
        Self::Recur(Box::new(value))
    }
}

impl From<ValueUtcOffset> for Value {
    fn from(value: ValueUtcOffset) -> Self {
        Self::UtcOffset(value)
    }
}

impl From<ValueBinary> for Value {
    fn from(value: ValueBinary) -> Self {
        Self::Binary(value)
    }
}

impl From<Uri> for Value {
    fn from(value: Uri) -> Self {
        Self::Uri(value)
    }
}

impl From<ValueFloat> for Value {
    fn from(value: ValueFloat) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::DEFAULT_CAPABILITIES;

    #[rustfmt::skip]
    #[test]
    fn decodes_every_type() {
        let success_cases = [
            (ValueType::Binary,     "aGVsbG8="),
            (ValueType::Boolean,    "TRUE"),
            (ValueType::CalAddress, "mailto:a@example.com"),
            (ValueType::Date,       "19970714"),
            (ValueType::DateTime,   "19970714T173000Z"),
            (ValueType::Duration,   "PT1H"),
            (ValueType::Float,      "-1.50"),
            (ValueType::Integer,    "42"),
            (ValueType::Period,     "19970101T180000Z/PT5H30M"),
            (ValueType::Recur,      "FREQ=YEARLY;BYMONTH=3"),
            (ValueType::Text,       r"a\, b"),
            (ValueType::Time,       "120000"),
            (ValueType::Uri,        "http://example.com/"),
            (ValueType::UtcOffset,  "-0800"),
        ];
        for (ty, raw) in success_cases {
            let value = Value::decode(ty, raw, &DEFAULT_CAPABILITIES).unwrap();
            assert_eq!(value.kind(), ty);
            assert_eq!(value.to_string(), raw);
        }
    }

    #[test]
    fn reports_value_type_in_errors() {
        let err = Value::decode(ValueType::DateTime, "2020-03-01", &DEFAULT_CAPABILITIES)
            .unwrap_err();
        match err {
            ErrorKind::MalformedValue { kind, raw, .. } => {
                assert_eq!(kind, "DATE-TIME");
                assert_eq!(raw, "2020-03-01");
            }
            err => panic!("unexpected error {err}"),
        }
    }
}
