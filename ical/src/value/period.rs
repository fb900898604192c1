// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Period of time value as defined in RFC 5545 Section 3.3.9.

use std::fmt;

use chumsky::prelude::*;

use crate::error::ErrorKind;
use crate::value::datetime::value_date_time;
use crate::value::duration::value_duration;
use crate::value::{Extra, ValueDateTime, ValueDuration, ValueType, parse_with};

/// Period of time, either bounded by two date-times or given as a start
/// and a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValuePeriod {
    /// `start "/" end`
    Explicit {
        /// Start of the period
        start: ValueDateTime,
        /// End of the period
        end: ValueDateTime,
    },

    /// `start "/" duration`
    Start {
        /// Start of the period
        start: ValueDateTime,
        /// Positive length of the period
        duration: ValueDuration,
    },
}

impl ValuePeriod {
    /// Parses `start "/" (end | duration)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid period.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let period = parse_with(value_period(), ValueType::Period, raw)?;
        period.check()?;
        Ok(period)
    }

    pub(crate) fn check(self) -> Result<(), ErrorKind> {
        match self {
            Self::Explicit { start, end } => {
                start.check()?;
                end.check()
            }
            Self::Start { start, duration } => {
                start.check()?;
                if duration.is_positive() {
                    Ok(())
                } else {
                    Err(ErrorKind::malformed(
                        ValueType::Period,
                        self.to_string(),
                        "duration must be positive",
                    ))
                }
            }
        }
    }

    /// Start of the period.
    #[must_use]
    pub const fn start(&self) -> &ValueDateTime {
        match self {
            Self::Explicit { start, .. } | Self::Start { start, .. } => start,
        }
    }
}

impl fmt::Display for ValuePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit { start, end } => write!(f, "{start}/{end}"),
            Self::Start { start, duration } => write!(f, "{start}/{duration}"),
        }
    }
}

/// Format Definition:  This value type is defined by the following notation:
///
/// ```txt
/// period     = period-explicit / period-start
///
/// period-explicit = date-time "/" date-time
/// period-start = date-time "/" dur-value
/// ```
pub(crate) fn value_period<'src>() -> impl Parser<'src, &'src str, ValuePeriod, Extra<'src>> + Clone
{
    value_date_time()
        .then_ignore(just('/'))
        .then(choice((
            value_date_time().map(Ok),
            value_duration().map(Err),
        )))
        .map(|(start, rest)| match rest {
            Ok(end) => ValuePeriod::Explicit { start, end },
            Err(duration) => ValuePeriod::Start { start, duration },
        })
}
