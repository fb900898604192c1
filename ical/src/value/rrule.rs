// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule value as defined in RFC 5545 Section 3.3.10.
//!
//! Only the rule itself is decoded; expanding it into occurrences is left
//! to the caller.

use std::fmt::{self, Display};
use std::ops::RangeInclusive;
use std::str::FromStr;

use chumsky::prelude::*;

use crate::error::ErrorKind;
use crate::keyword::{
    KW_FREQ_DAILY, KW_FREQ_HOURLY, KW_FREQ_MINUTELY, KW_FREQ_MONTHLY, KW_FREQ_SECONDLY,
    KW_FREQ_WEEKLY, KW_FREQ_YEARLY, KW_RRULE_BYDAY, KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE,
    KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY, KW_RRULE_BYSECOND, KW_RRULE_BYSETPOS,
    KW_RRULE_BYWEEKNO, KW_RRULE_BYYEARDAY, KW_RRULE_COUNT, KW_RRULE_FREQ, KW_RRULE_INTERVAL,
    KW_RRULE_UNTIL, KW_RRULE_WKST, keyword_enum,
};
use crate::value::datetime::value_date_or_date_time;
use crate::value::miscellaneous::parse_integer;
use crate::value::{DateOrDateTime, Extra, ValueType, parse_with};

keyword_enum! {
    /// Recurrence frequency (`FREQ`)
    pub enum RecurrenceFrequency {
        /// Every second
        Secondly => KW_FREQ_SECONDLY,
        /// Every minute
        Minutely => KW_FREQ_MINUTELY,
        /// Every hour
        Hourly   => KW_FREQ_HOURLY,
        /// Every day
        Daily    => KW_FREQ_DAILY,
        /// Every week
        Weekly   => KW_FREQ_WEEKLY,
        /// Every month
        Monthly  => KW_FREQ_MONTHLY,
        /// Every year
        Yearly   => KW_FREQ_YEARLY,
    }
}

/// Day of the week, written as its two-letter code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum WeekDay {
    #[strum(serialize = "SU")]
    Sunday,
    #[strum(serialize = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    Saturday,
}

impl From<WeekDay> for jiff::civil::Weekday {
    fn from(value: WeekDay) -> Self {
        match value {
            WeekDay::Sunday => Self::Sunday,
            WeekDay::Monday => Self::Monday,
            WeekDay::Tuesday => Self::Tuesday,
            WeekDay::Wednesday => Self::Wednesday,
            WeekDay::Thursday => Self::Thursday,
            WeekDay::Friday => Self::Friday,
            WeekDay::Saturday => Self::Saturday,
        }
    }
}

/// A `BYDAY` entry: a weekday with an optional occurrence within the
/// period (e.g. `-1SU` is the last Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekDayNum {
    /// Occurrence, ±1 to ±53
    pub occurrence: Option<i8>,
    /// Day of the week
    pub day: WeekDay,
}

impl Display for WeekDayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.occurrence {
            write!(f, "{n}")?;
        }
        self.day.fmt(f)
    }
}

/// Recurrence rule, with every `BY*` list in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueRecurrenceRule {
    /// `FREQ`, required
    pub freq: RecurrenceFrequency,
    /// `UNTIL`, exclusive with `count`
    pub until: Option<DateOrDateTime>,
    /// `COUNT`, positive
    pub count: Option<u32>,
    /// `INTERVAL`, positive
    pub interval: Option<u32>,
    /// `BYSECOND`, 0-60
    pub by_second: Vec<u8>,
    /// `BYMINUTE`, 0-59
    pub by_minute: Vec<u8>,
    /// `BYHOUR`, 0-23
    pub by_hour: Vec<u8>,
    /// `BYDAY`
    pub by_day: Vec<WeekDayNum>,
    /// `BYMONTHDAY`, ±1-31
    pub by_month_day: Vec<i8>,
    /// `BYYEARDAY`, ±1-366
    pub by_year_day: Vec<i16>,
    /// `BYWEEKNO`, ±1-53
    pub by_week_no: Vec<i8>,
    /// `BYMONTH`, 1-12
    pub by_month: Vec<u8>,
    /// `BYSETPOS`, ±1-366
    pub by_set_pos: Vec<i16>,
    /// `WKST`
    pub wkst: Option<WeekDay>,
}

impl ValueRecurrenceRule {
    /// A rule with only `FREQ` set.
    #[must_use]
    pub const fn new(freq: RecurrenceFrequency) -> Self {
        Self {
            freq,
            until: None,
            count: None,
            interval: None,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
            by_set_pos: Vec::new(),
            wkst: None,
        }
    }

    /// Parses a semicolon separated list of `KEY=VALUE` rule parts.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`] for a number outside its part's
    /// range and [`ErrorKind::MalformedValue`] for anything else.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let malformed = |reason: String| ErrorKind::malformed(ValueType::Recur, raw, reason);

        let mut freq = None;
        let mut rule = Self::new(RecurrenceFrequency::Yearly);
        let mut seen: Vec<String> = Vec::new();
        for part in raw.split(';') {
            let Some((key, value)) = part.split_once('=') else {
                return Err(malformed(format!("expected KEY=VALUE, found '{part}'")));
            };
            let key = key.to_ascii_uppercase();
            if seen.contains(&key) {
                return Err(malformed(format!("{key} given more than once")));
            }

            match key.as_str() {
                KW_RRULE_FREQ => {
                    freq = Some(
                        RecurrenceFrequency::from_keyword(value)
                            .ok_or_else(|| malformed(format!("unknown frequency '{value}'")))?,
                    );
                }
                KW_RRULE_UNTIL => {
                    let until = parse_with(value_date_or_date_time(), ValueType::Recur, value)?;
                    until.check()?;
                    rule.until = Some(until);
                }
                KW_RRULE_COUNT => rule.count = Some(positive(&key, value)?),
                KW_RRULE_INTERVAL => rule.interval = Some(positive(&key, value)?),
                KW_RRULE_BYSECOND => rule.by_second = numbers(&key, value, 0..=60, false)?,
                KW_RRULE_BYMINUTE => rule.by_minute = numbers(&key, value, 0..=59, false)?,
                KW_RRULE_BYHOUR => rule.by_hour = numbers(&key, value, 0..=23, false)?,
                KW_RRULE_BYDAY => {
                    rule.by_day = value
                        .split(',')
                        .map(parse_week_day_num)
                        .collect::<Result<_, _>>()?;
                }
                KW_RRULE_BYMONTHDAY => rule.by_month_day = numbers(&key, value, 1..=31, true)?,
                KW_RRULE_BYYEARDAY => rule.by_year_day = numbers(&key, value, 1..=366, true)?,
                KW_RRULE_BYWEEKNO => rule.by_week_no = numbers(&key, value, 1..=53, true)?,
                KW_RRULE_BYMONTH => rule.by_month = numbers(&key, value, 1..=12, false)?,
                KW_RRULE_BYSETPOS => rule.by_set_pos = numbers(&key, value, 1..=366, true)?,
                KW_RRULE_WKST => {
                    rule.wkst = Some(
                        WeekDay::from_str(value)
                            .map_err(|_| malformed(format!("unknown weekday '{value}'")))?,
                    );
                }
                _ => return Err(malformed(format!("unknown rule part '{key}'"))),
            }
            seen.push(key);
        }

        rule.freq = freq.ok_or_else(|| malformed("FREQ is required".to_string()))?;
        if rule.until.is_some() && rule.count.is_some() {
            return Err(malformed("UNTIL and COUNT are mutually exclusive".to_string()));
        }
        Ok(rule)
    }
}

fn positive(field: &str, value: &str) -> Result<u32, ErrorKind> {
    let n = parse_integer(value)?;
    u32::try_from(n)
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ErrorKind::out_of_range(field, n))
}

fn numbers<T: TryFrom<i32>>(
    field: &str,
    value: &str,
    range: RangeInclusive<i32>,
    signed: bool,
) -> Result<Vec<T>, ErrorKind> {
    value
        .split(',')
        .map(|item| {
            let n = parse_integer(item)?;
            let in_range = if signed {
                range.contains(&n.abs())
            } else {
                range.contains(&n)
            };
            in_range
                .then(|| T::try_from(n).ok())
                .flatten()
                .ok_or_else(|| ErrorKind::out_of_range(field, n))
        })
        .collect()
}

fn parse_week_day_num(raw: &str) -> Result<WeekDayNum, ErrorKind> {
    let day = num_week_day();
    let num = parse_with(day, ValueType::Recur, raw)?;
    match num.occurrence {
        Some(n) if !(1..=53).contains(&n.abs()) => Err(ErrorKind::out_of_range(KW_RRULE_BYDAY, n)),
        _ => Ok(num),
    }
}

/// ```txt
/// weekdaynum  = [[plus / minus] ordwk] weekday
/// ordwk       = 1*2DIGIT       ;1 to 53
/// weekday     = "SU" / "MO" / "TU" / "WE" / "TH" / "FR" / "SA"
/// ```
fn num_week_day<'src>() -> impl Parser<'src, &'src str, WeekDayNum, Extra<'src>> + Clone {
    let ordwk = one_of("+-")
        .or_not()
        .then(one_of("0123456789").repeated().at_least(1).at_most(2))
        .to_slice()
        .try_map(|s: &str, span| {
            let s = s.strip_prefix('+').unwrap_or(s);
            lexical::parse::<i8, _>(s).map_err(|e| Rich::custom(span, e))
        });
    let weekday = any()
        .repeated()
        .exactly(2)
        .to_slice()
        .try_map(|s: &str, span| WeekDay::from_str(s).map_err(|e| Rich::custom(span, e)));
    ordwk
        .or_not()
        .then(weekday)
        .map(|(occurrence, day)| WeekDayNum { occurrence, day })
}

fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, key: &str, items: &[T]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    write!(f, ";{key}=")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        item.fmt(f)?;
    }
    Ok(())
}

impl Display for ValueRecurrenceRule {
    /// Writes the rule parts in the order RFC 5545 lists them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KW_RRULE_FREQ}={}", self.freq)?;
        if let Some(until) = &self.until {
            write!(f, ";{KW_RRULE_UNTIL}={until}")?;
        }
        if let Some(count) = self.count {
            write!(f, ";{KW_RRULE_COUNT}={count}")?;
        }
        if let Some(interval) = self.interval {
            write!(f, ";{KW_RRULE_INTERVAL}={interval}")?;
        }
        write_list(f, KW_RRULE_BYSECOND, &self.by_second)?;
        write_list(f, KW_RRULE_BYMINUTE, &self.by_minute)?;
        write_list(f, KW_RRULE_BYHOUR, &self.by_hour)?;
        write_list(f, KW_RRULE_BYDAY, &self.by_day)?;
        write_list(f, KW_RRULE_BYMONTHDAY, &self.by_month_day)?;
        write_list(f, KW_RRULE_BYYEARDAY, &self.by_year_day)?;
        write_list(f, KW_RRULE_BYWEEKNO, &self.by_week_no)?;
        write_list(f, KW_RRULE_BYMONTH, &self.by_month)?;
        write_list(f, KW_RRULE_BYSETPOS, &self.by_set_pos)?;
        if let Some(wkst) = self.wkst {
            write!(f, ";{KW_RRULE_WKST}={wkst}")?;
        }
        Ok(())
    }
}
