// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parameter parsing module for iCalendar parameters.
//!
//! This module handles the parsing and validation of iCalendar parameters
//! as defined in RFC 5545 Section 3.2.

mod decode;
mod definition;
mod kind;
mod set;

use std::borrow::Cow;

pub use crate::parameter::definition::{
    AlarmTriggerRelationship, CalendarUserType, Encoding, FreeBusyType, ParticipationRole,
    ParticipationStatus, RecurrenceIdRange, RelationshipType,
};
pub use crate::parameter::kind::ParameterKind;
pub use crate::parameter::set::Parameters;

pub(crate) use crate::parameter::decode::check_tzid;

use crate::error::ErrorKind;
use crate::keyword::{KW_RSVP_FALSE, KW_RSVP_TRUE};
use crate::syntax::is_iana_token;
use crate::value::{Uri, ValueType};

/// A typed property parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    /// Alternate text representation, RFC 5545 Section 3.2.1.
    AltRep(Uri),
    /// Common name of the calendar user, RFC 5545 Section 3.2.2.
    CommonName(String),
    /// Calendar user type, RFC 5545 Section 3.2.3.
    CalendarUserType(CalendarUserType),
    /// Delegators, RFC 5545 Section 3.2.4.
    DelegatedFrom(Vec<Uri>),
    /// Delegatees, RFC 5545 Section 3.2.5.
    DelegatedTo(Vec<Uri>),
    /// Directory entry reference, RFC 5545 Section 3.2.6.
    Directory(Uri),
    /// Inline encoding, RFC 5545 Section 3.2.7.
    Encoding(Encoding),
    /// Format type (a media type), RFC 5545 Section 3.2.8.
    FormatType(String),
    /// Free/busy time type, RFC 5545 Section 3.2.9.
    FreeBusyType(FreeBusyType),
    /// Language tag, RFC 5545 Section 3.2.10.
    Language(String),
    /// Group or list membership, RFC 5545 Section 3.2.11.
    Member(Vec<Uri>),
    /// Participation status, RFC 5545 Section 3.2.12.
    ParticipationStatus(ParticipationStatus),
    /// Recurrence identifier range, RFC 5545 Section 3.2.13.
    Range(RecurrenceIdRange),
    /// Alarm trigger relationship, RFC 5545 Section 3.2.14.
    Related(AlarmTriggerRelationship),
    /// Relationship type, RFC 5545 Section 3.2.15.
    RelationshipType(RelationshipType),
    /// Participation role, RFC 5545 Section 3.2.16.
    Role(ParticipationRole),
    /// RSVP expectation, RFC 5545 Section 3.2.17.
    Rsvp(bool),
    /// Sent by, RFC 5545 Section 3.2.18.
    SentBy(Uri),
    /// Time zone identifier, RFC 5545 Section 3.2.19.
    TzId(String),
    /// Value data type, RFC 5545 Section 3.2.20.
    Value(ValueType),
    /// An experimental (`X-`) or IANA parameter kept as written.
    Other {
        /// Upper-case parameter name.
        name: String,
        /// Values in source order.
        values: Vec<String>,
    },
}

impl Parameter {
    /// The registered kind, or `None` for experimental and IANA parameters.
    #[must_use]
    pub const fn kind(&self) -> Option<ParameterKind> {
        Some(match self {
            Self::AltRep(_) => ParameterKind::AltRep,
            Self::CommonName(_) => ParameterKind::CommonName,
            Self::CalendarUserType(_) => ParameterKind::CalendarUserType,
            Self::DelegatedFrom(_) => ParameterKind::DelegatedFrom,
            Self::DelegatedTo(_) => ParameterKind::DelegatedTo,
            Self::Directory(_) => ParameterKind::Directory,
            Self::Encoding(_) => ParameterKind::Encoding,
            Self::FormatType(_) => ParameterKind::FormatType,
            Self::FreeBusyType(_) => ParameterKind::FreeBusyType,
            Self::Language(_) => ParameterKind::Language,
            Self::Member(_) => ParameterKind::Member,
            Self::ParticipationStatus(_) => ParameterKind::ParticipationStatus,
            Self::Range(_) => ParameterKind::Range,
            Self::Related(_) => ParameterKind::Related,
            Self::RelationshipType(_) => ParameterKind::RelationshipType,
            Self::Role(_) => ParameterKind::Role,
            Self::Rsvp(_) => ParameterKind::Rsvp,
            Self::SentBy(_) => ParameterKind::SentBy,
            Self::TzId(_) => ParameterKind::TzId,
            Self::Value(_) => ParameterKind::Value,
            Self::Other { .. } => return None,
        })
    }

    /// The parameter name as written on the wire.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Other { name, .. } => name,
            _ => self.kind().map_or("", ParameterKind::as_str),
        }
    }

    /// The parameter values as written on the wire, unquoted.
    #[must_use]
    pub fn values(&self) -> Vec<Cow<'_, str>> {
        let one = |s: &'static str| vec![Cow::Borrowed(s)];
        match self {
            Self::AltRep(uri) | Self::Directory(uri) | Self::SentBy(uri) => {
                vec![Cow::Borrowed(uri.as_str())]
            }
            Self::CommonName(s) | Self::FormatType(s) | Self::Language(s) | Self::TzId(s) => {
                vec![Cow::Borrowed(s.as_str())]
            }
            Self::DelegatedFrom(uris) | Self::DelegatedTo(uris) | Self::Member(uris) => {
                uris.iter().map(|uri| Cow::Borrowed(uri.as_str())).collect()
            }
            Self::CalendarUserType(v) => vec![Cow::Borrowed(v.as_str())],
            Self::FreeBusyType(v) => vec![Cow::Borrowed(v.as_str())],
            Self::ParticipationStatus(v) => vec![Cow::Borrowed(v.as_str())],
            Self::RelationshipType(v) => vec![Cow::Borrowed(v.as_str())],
            Self::Role(v) => vec![Cow::Borrowed(v.as_str())],
            Self::Encoding(v) => one(v.as_str()),
            Self::Range(v) => one(v.as_str()),
            Self::Related(v) => one(v.as_str()),
            Self::Value(v) => one(v.as_str()),
            Self::Rsvp(true) => one(KW_RSVP_TRUE),
            Self::Rsvp(false) => one(KW_RSVP_FALSE),
            Self::Other { values, .. } => values.iter().map(|v| Cow::Borrowed(v.as_str())).collect(),
        }
    }

    /// Checks that the parameter can be written.
    ///
    /// A value may contain `;`, `:` and `,` (it is quoted on output) but
    /// never a double quote or a control character other than tab.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidToken`] for a bad name and
    /// [`ErrorKind::MalformedValue`] for a value that cannot be written.
    pub fn check(&self) -> Result<(), ErrorKind> {
        if !is_iana_token(self.name()) {
            return Err(ErrorKind::InvalidToken(self.name().to_string()));
        }
        for value in self.values() {
            let reason = if value.contains('"') {
                "double quote in parameter value"
            } else if value.chars().any(|c| c.is_control() && c != '\t') {
                "control character in parameter value"
            } else {
                continue;
            };
            return Err(ErrorKind::malformed(self.name(), value, reason));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_values() {
        let param = Parameter::Value(ValueType::DateTime);
        assert_eq!(param.kind(), Some(ParameterKind::Value));
        assert_eq!(param.name(), "VALUE");
        assert_eq!(param.values(), vec!["DATE-TIME"]);

        let param = Parameter::Other {
            name: "X-FOO".to_string(),
            values: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(param.kind(), None);
        assert_eq!(param.name(), "X-FOO");
        assert_eq!(param.values(), vec!["a", "b"]);

        assert_eq!(Parameter::Rsvp(true).values(), vec!["TRUE"]);
    }

    #[test]
    fn rejects_unwritable_parameters() {
        assert_eq!(Parameter::CommonName("Doe; Jane: x, y".to_string()).check(), Ok(()));
        assert_eq!(Parameter::CommonName("Tab\tName".to_string()).check(), Ok(()));

        let quoted = Parameter::CommonName("Jane \"JD\" Doe".to_string());
        assert!(matches!(quoted.check(), Err(ErrorKind::MalformedValue { .. })));

        let control = Parameter::Other {
            name: "X-NOTE".to_string(),
            values: vec!["a\nb".to_string()],
        };
        assert!(matches!(control.check(), Err(ErrorKind::MalformedValue { .. })));

        let bad_name = Parameter::Other {
            name: "X-A;B".to_string(),
            values: vec!["c".to_string()],
        };
        assert_eq!(bad_name.check(), Err(ErrorKind::InvalidToken("X-A;B".to_string())));
    }
}
