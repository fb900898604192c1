// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type parser as defined in RFC 5545 Section 3.3.6.

use std::fmt;

use chumsky::prelude::*;

use crate::error::ErrorKind;
use crate::value::{Extra, ValueType, parse_with, unsigned};

/// Duration Value defined in RFC 5545 Section 3.3.6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueDuration {
    /// Date and Time Duration
    DateTime {
        /// Whether the duration is positive
        positive: bool,
        /// Day Duration
        day: u32,
        /// Hour Duration
        hour: u32,
        /// Minute Duration
        minute: u32,
        /// Second Duration
        second: u32,
    },

    /// Week Duration
    Week {
        /// Whether the duration is positive
        positive: bool,
        /// Week Duration
        week: u32,
    },
}

impl ValueDuration {
    /// A duration of whole seconds, normalised into days, hours, minutes
    /// and seconds.
    #[must_use]
    pub fn from_seconds(seconds: i64) -> Self {
        let total = seconds.unsigned_abs();
        let part = |v: u64| u32::try_from(v).unwrap_or(u32::MAX);
        Self::DateTime {
            positive: seconds >= 0,
            day: part(total / 86_400),
            hour: part(total % 86_400 / 3_600),
            minute: part(total % 3_600 / 60),
            second: part(total % 60),
        }
    }

    /// Parses `[+-]P...`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid duration.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        parse_with(value_duration(), ValueType::Duration, raw)
    }

    /// Whether the duration runs forwards in time.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        match self {
            Self::DateTime { positive, .. } | Self::Week { positive, .. } => *positive,
        }
    }

    /// Total length in seconds, negative for negative durations.
    #[must_use]
    pub fn as_seconds(&self) -> i64 {
        let (positive, seconds) = match *self {
            Self::DateTime {
                positive,
                day,
                hour,
                minute,
                second,
            } => (
                positive,
                i64::from(day) * 86_400
                    + i64::from(hour) * 3_600
                    + i64::from(minute) * 60
                    + i64::from(second),
            ),
            Self::Week { positive, week } => (positive, i64::from(week) * 7 * 86_400),
        };
        if positive { seconds } else { -seconds }
    }
}

impl From<ValueDuration> for jiff::SignedDuration {
    fn from(value: ValueDuration) -> Self {
        Self::from_secs(value.as_seconds())
    }
}

impl fmt::Display for ValueDuration {
    /// Canonical form: zero is `PT0S`, and minutes are written whenever
    /// hours and seconds are both present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_positive() {
            f.write_str("-")?;
        }
        match *self {
            Self::Week { week, .. } => write!(f, "P{week}W"),
            Self::DateTime {
                day,
                hour,
                minute,
                second,
                ..
            } => {
                f.write_str("P")?;
                if day > 0 {
                    write!(f, "{day}D")?;
                }
                if hour == 0 && minute == 0 && second == 0 {
                    return if day == 0 { f.write_str("T0S") } else { Ok(()) };
                }
                f.write_str("T")?;
                if hour > 0 {
                    write!(f, "{hour}H")?;
                }
                if minute > 0 || (hour > 0 && second > 0) {
                    write!(f, "{minute}M")?;
                }
                if second > 0 {
                    write!(f, "{second}S")?;
                }
                Ok(())
            }
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
///
/// dur-date   = dur-day [dur-time]
/// dur-time   = "T" (dur-hour / dur-minute / dur-second)
/// dur-week   = 1*DIGIT "W"
/// dur-hour   = 1*DIGIT "H" [dur-minute]
/// dur-minute = 1*DIGIT "M" [dur-second]
/// dur-second = 1*DIGIT "S"
/// dur-day    = 1*DIGIT "D"
/// ```
pub(crate) fn value_duration<'src>()
-> impl Parser<'src, &'src str, ValueDuration, Extra<'src>> + Clone {
    let int = unsigned::<u32>();

    let week = int.clone().then_ignore(just('W'));

    let second_val = int.clone().then_ignore(just('S'));
    let minute_val = int.clone().then_ignore(just('M'));
    let hour_val = int.clone().then_ignore(just('H'));

    // dur-second = 1*DIGIT "S"
    let second_only = second_val.clone().map(|s| (0, 0, s));

    // dur-minute = 1*DIGIT "M" [dur-second]
    let minute_with_second = minute_val
        .clone()
        .then(second_val.clone().or_not())
        .map(|(m, s)| (0, m, s.unwrap_or(0)));

    // dur-hour = 1*DIGIT "H" [dur-minute]
    let hour_with_minute = hour_val
        .then(minute_val.then(second_val.or_not()).or_not())
        .map(|(h, ms)| match ms {
            Some((m, s)) => (h, m, s.unwrap_or(0)),
            None => (h, 0, 0),
        });

    // dur-time = "T" (dur-hour / dur-minute / dur-second)
    let time = just('T').ignore_then(choice((hour_with_minute, minute_with_second, second_only)));

    let day = int.then_ignore(just('D'));
    let date = day.then(time.clone().or_not());

    let sign = one_of("+-")
        .or_not()
        .map(|sign| !matches!(sign, Some('-')));
    let prefix = sign.then_ignore(just('P'));
    choice((
        prefix
            .clone()
            .then(date)
            .map(|(positive, (day, time))| {
                let (hour, minute, second) = time.unwrap_or((0, 0, 0));
                ValueDuration::DateTime {
                    positive,
                    day,
                    hour,
                    minute,
                    second,
                }
            }),
        prefix
            .clone()
            .then(time)
            .map(|(positive, (hour, minute, second))| ValueDuration::DateTime {
                positive,
                day: 0,
                hour,
                minute,
                second,
            }),
        prefix
            .then(week)
            .map(|(positive, week)| ValueDuration::Week { positive, week }),
    ))
}
