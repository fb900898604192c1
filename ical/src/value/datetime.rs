// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date, time and date-time values as defined in RFC 5545 Sections 3.3.4,
//! 3.3.5 and 3.3.12.

use std::fmt::{self, Display};

use chumsky::prelude::*;

use crate::error::ErrorKind;
use crate::value::{Extra, ValueType, fixed_digits, parse_with};

/// Date value in the iCalendar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDate {
    /// Year component.
    pub year: i16,

    /// Month component, 1-12.
    pub month: i8,

    /// Day component, 1-31.
    pub day: i8,
}

impl ValueDate {
    /// Creates a date, rejecting days that do not exist (e.g. February 30).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`] for an impossible month or day.
    pub fn new(year: i16, month: i8, day: i8) -> Result<Self, ErrorKind> {
        let date = Self { year, month, day };
        date.check()?;
        Ok(date)
    }

    /// Parses `YYYYMMDD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid date.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let date = parse_with(value_date(), ValueType::Date, raw)?;
        date.check()?;
        Ok(date)
    }

    pub(crate) fn check(self) -> Result<(), ErrorKind> {
        if !(1..=12).contains(&self.month) {
            return Err(ErrorKind::out_of_range("month", self.month));
        }
        jiff::civil::Date::new(self.year, self.month, self.day)
            .map(|_| ())
            .map_err(|_| ErrorKind::out_of_range("day", self.day))
    }

    /// Convert to `jiff::civil::Date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields do not form a valid date.
    pub fn civil_date(self) -> Result<jiff::civil::Date, jiff::Error> {
        jiff::civil::Date::new(self.year, self.month, self.day)
    }
}

impl From<jiff::civil::Date> for ValueDate {
    fn from(value: jiff::civil::Date) -> Self {
        Self {
            year: value.year(),
            month: value.month(),
            day: value.day(),
        }
    }
}

impl fmt::Display for ValueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Time value, local unless `utc` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueTime {
    /// Hour component, 0-23.
    pub hour: i8,

    /// Minute component, 0-59.
    pub minute: i8,

    /// Second component, 0-60 (60 is a leap second).
    pub second: i8,

    /// Whether the time carries the `Z` suffix.
    pub utc: bool,
}

impl ValueTime {
    /// Creates a time of day.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`] for an impossible field.
    pub fn new(hour: i8, minute: i8, second: i8, utc: bool) -> Result<Self, ErrorKind> {
        let time = Self {
            hour,
            minute,
            second,
            utc,
        };
        time.check()?;
        Ok(time)
    }

    /// Parses `HHMMSS[Z]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid time.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let time = parse_with(value_time(), ValueType::Time, raw)?;
        time.check()?;
        Ok(time)
    }

    pub(crate) fn check(self) -> Result<(), ErrorKind> {
        if !(0..=23).contains(&self.hour) {
            Err(ErrorKind::out_of_range("hour", self.hour))
        } else if !(0..=59).contains(&self.minute) {
            Err(ErrorKind::out_of_range("minute", self.minute))
        } else if !(0..=60).contains(&self.second) {
            Err(ErrorKind::out_of_range("second", self.second))
        } else {
            Ok(())
        }
    }

    /// Convert to `jiff::civil::Time`, folding a leap second into second 59.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields do not form a valid time.
    pub fn civil_time(self) -> Result<jiff::civil::Time, jiff::Error> {
        jiff::civil::Time::new(self.hour, self.minute, self.second.min(59), 0)
    }
}

impl fmt::Display for ValueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
        if self.utc {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

/// Date-time value: a date and a time joined by `T`.
///
/// A trailing `Z` makes it UTC; otherwise it is floating, or local to the
/// zone named by a `TZID` parameter of the owning property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDateTime {
    /// Date part.
    pub date: ValueDate,

    /// Time part.
    pub time: ValueTime,
}

impl ValueDateTime {
    /// Creates a date-time from already validated parts.
    #[must_use]
    pub const fn new(date: ValueDate, time: ValueTime) -> Self {
        Self { date, time }
    }

    /// Parses `YYYYMMDDTHHMMSS[Z]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid date-time.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let datetime = parse_with(value_date_time(), ValueType::DateTime, raw)?;
        datetime.check()?;
        Ok(datetime)
    }

    pub(crate) fn check(self) -> Result<(), ErrorKind> {
        self.date.check()?;
        self.time.check()
    }

    /// Whether the value is in UTC.
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        self.time.utc
    }

    /// Convert to `jiff::civil::DateTime`, dropping the UTC marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the fields do not form a valid date-time.
    pub fn civil_datetime(self) -> Result<jiff::civil::DateTime, jiff::Error> {
        Ok(self.date.civil_date()?.to_datetime(self.time.civil_time()?))
    }
}

impl From<jiff::civil::DateTime> for ValueDateTime {
    /// A floating date-time.
    fn from(value: jiff::civil::DateTime) -> Self {
        Self {
            date: value.date().into(),
            time: ValueTime {
                hour: value.hour(),
                minute: value.minute(),
                second: value.second(),
                utc: false,
            },
        }
    }
}

impl From<jiff::Timestamp> for ValueDateTime {
    /// A UTC date-time, truncated to whole seconds.
    fn from(value: jiff::Timestamp) -> Self {
        let mut datetime = Self::from(value.to_zoned(jiff::tz::TimeZone::UTC).datetime());
        datetime.time.utc = true;
        datetime
    }
}

impl fmt::Display for ValueDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

/// Either a date or a date-time, as allowed by `UNTIL` and by the
/// time-valued properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrDateTime {
    /// A calendar date
    Date(ValueDate),
    /// A date-time
    DateTime(ValueDateTime),
}

impl DateOrDateTime {
    pub(crate) fn check(self) -> Result<(), ErrorKind> {
        match self {
            Self::Date(date) => date.check(),
            Self::DateTime(datetime) => datetime.check(),
        }
    }
}

impl fmt::Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => date.fmt(f),
            Self::DateTime(datetime) => datetime.fmt(f),
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// date               = date-value
///
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
pub(crate) fn value_date<'src>() -> impl Parser<'src, &'src str, ValueDate, Extra<'src>> + Clone {
    fixed_digits::<i16>(4)
        .then(fixed_digits::<i8>(2))
        .then(fixed_digits::<i8>(2))
        .map(|((year, month), day)| ValueDate { year, month, day })
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// time         = time-hour time-minute time-second [time-utc]
///
/// time-hour    = 2DIGIT        ;00-23
/// time-minute  = 2DIGIT        ;00-59
/// time-second  = 2DIGIT        ;00-60
/// time-utc     = "Z"
/// ```
pub(crate) fn value_time<'src>() -> impl Parser<'src, &'src str, ValueTime, Extra<'src>> + Clone {
    fixed_digits::<i8>(2)
        .then(fixed_digits::<i8>(2))
        .then(fixed_digits::<i8>(2))
        .then(just('Z').or_not().map(|z| z.is_some()))
        .map(|(((hour, minute), second), utc)| ValueTime {
            hour,
            minute,
            second,
            utc,
        })
}

/// ```txt
/// date-time  = date "T" time
/// ```
pub(crate) fn value_date_time<'src>()
-> impl Parser<'src, &'src str, ValueDateTime, Extra<'src>> + Clone {
    value_date()
        .then_ignore(just('T'))
        .then(value_time())
        .map(|(date, time)| ValueDateTime { date, time })
}

/// A date-time, or a date when no `T` follows.
pub(crate) fn value_date_or_date_time<'src>()
-> impl Parser<'src, &'src str, DateOrDateTime, Extra<'src>> + Clone {
    value_date()
        .then(just('T').ignore_then(value_time()).or_not())
        .map(|(date, time)| match time {
            Some(time) => DateOrDateTime::DateTime(ValueDateTime { date, time }),
            None => DateOrDateTime::Date(date),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    #[test]
    fn parses_dates() {
        let success_cases = [
            ("19970714", ValueDate { year: 1997, month: 7, day: 14 }),
            ("20000229", ValueDate { year: 2000, month: 2, day: 29 }),
            ("00010101", ValueDate { year: 1, month: 1, day: 1 }),
        ];
        for (src, expected) in success_cases {
            assert_eq!(ValueDate::parse(src), Ok(expected), "{src}");
            assert_eq!(expected.to_string(), src);
        }
    }

    #[rustfmt::skip]
    #[test]
    fn rejects_dates() {
        let fail_cases = [
            ("20200230", true),  // February 30
            ("20190229", true),  // not a leap year
            ("20201301", true),  // month 13
            ("20200001", true),  // month 0
            ("2020011",  false),
            ("2020-01-01", false),
            ("202001011", false),
        ];
        for (src, out_of_range) in fail_cases {
            let err = ValueDate::parse(src).unwrap_err();
            assert_eq!(matches!(err, ErrorKind::OutOfRange { .. }), out_of_range, "{src}: {err}");
        }
    }

    #[rustfmt::skip]
    #[test]
    fn parses_times() {
        let success_cases = [
            ("230000",  ValueTime { hour: 23, minute: 0, second: 0, utc: false }),
            ("070000Z", ValueTime { hour: 7, minute: 0, second: 0, utc: true }),
            ("235960",  ValueTime { hour: 23, minute: 59, second: 60, utc: false }),
        ];
        for (src, expected) in success_cases {
            assert_eq!(ValueTime::parse(src), Ok(expected), "{src}");
            assert_eq!(expected.to_string(), src);
        }

        let fail_cases = ["240000", "126000", "120061", "1200", "120000z"];
        for src in fail_cases {
            assert!(ValueTime::parse(src).is_err(), "{src}");
        }
    }

    #[test]
    fn parses_date_times() {
        let dt = ValueDateTime::parse("19980118T230000").unwrap();
        assert!(!dt.is_utc());
        assert_eq!(dt.to_string(), "19980118T230000");

        let dt = ValueDateTime::parse("19980119T070000Z").unwrap();
        assert!(dt.is_utc());
        assert_eq!(dt.to_string(), "19980119T070000Z");

        assert!(ValueDateTime::parse("19980119").is_err());
        assert!(ValueDateTime::parse("19980119T").is_err());
        assert!(ValueDateTime::parse("19980119 070000").is_err());
    }

    #[test]
    fn converts_with_jiff() {
        let dt = ValueDateTime::parse("20200301T130000Z").unwrap();
        let civil = dt.civil_datetime().unwrap();
        assert_eq!(civil, jiff::civil::date(2020, 3, 1).at(13, 0, 0, 0));
        assert_eq!(ValueDateTime::from(civil).to_string(), "20200301T130000");

        let ts: jiff::Timestamp = "2020-03-01T13:00:00Z".parse().unwrap();
        assert_eq!(ValueDateTime::from(ts), dt);
    }
}
