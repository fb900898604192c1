// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typing of raw parameters.

use crate::capability::Capabilities;
use crate::error::ErrorKind;
use crate::parameter::{
    AlarmTriggerRelationship, CalendarUserType, Encoding, FreeBusyType, Parameter, ParameterKind,
    ParticipationRole, ParticipationStatus, RecurrenceIdRange, RelationshipType,
};
use crate::syntax::RawParameter;
use crate::value::{Uri, ValueType, parse_boolean};

impl Parameter {
    /// Decodes a raw parameter.
    ///
    /// Registered parameters are typed; any other name is kept as written.
    ///
    /// # Errors
    ///
    /// Returns an error if a registered parameter has the wrong number of
    /// values or a value of the wrong shape.
    pub fn decode(raw: &RawParameter, caps: &dyn Capabilities) -> Result<Self, ErrorKind> {
        let Some(kind) = ParameterKind::from_keyword(&raw.name) else {
            return Ok(Self::Other {
                name: raw.name.to_ascii_uppercase(),
                values: raw.values.clone(),
            });
        };

        let values = raw.values.as_slice();
        if !kind.is_multi_valued() && values.len() != 1 {
            return Err(ErrorKind::InvalidValueCount {
                expected: 1,
                got: values.len(),
            });
        }
        let value = values.first().map_or("", String::as_str);
        let malformed = |reason: &str| ErrorKind::malformed(kind, value, reason);
        let unknown = || malformed("unknown value");
        let addresses = || {
            values
                .iter()
                .map(|v| uri(kind, v, caps))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(match kind {
            ParameterKind::AltRep => Self::AltRep(uri(kind, value, caps)?),
            ParameterKind::Directory => Self::Directory(uri(kind, value, caps)?),
            ParameterKind::SentBy => Self::SentBy(uri(kind, value, caps)?),
            ParameterKind::DelegatedFrom => Self::DelegatedFrom(addresses()?),
            ParameterKind::DelegatedTo => Self::DelegatedTo(addresses()?),
            ParameterKind::Member => Self::Member(addresses()?),
            ParameterKind::CommonName => Self::CommonName(value.to_string()),
            ParameterKind::CalendarUserType => {
                Self::CalendarUserType(CalendarUserType::from_token(value).map_err(|_| unknown())?)
            }
            ParameterKind::Encoding => {
                Self::Encoding(Encoding::from_keyword(value).ok_or_else(unknown)?)
            }
            ParameterKind::FormatType => {
                if !caps.is_mime_type(value) {
                    return Err(malformed("not a media type"));
                }
                Self::FormatType(value.to_string())
            }
            ParameterKind::FreeBusyType => {
                Self::FreeBusyType(FreeBusyType::from_token(value).map_err(|_| unknown())?)
            }
            ParameterKind::Language => Self::Language(
                caps.parse_language_tag(value)
                    .map_err(|e| malformed(&e.to_string()))?
                    .to_string(),
            ),
            ParameterKind::ParticipationStatus => Self::ParticipationStatus(
                ParticipationStatus::from_token(value).map_err(|_| unknown())?,
            ),
            ParameterKind::Range => {
                Self::Range(RecurrenceIdRange::from_keyword(value).ok_or_else(unknown)?)
            }
            ParameterKind::Related => {
                Self::Related(AlarmTriggerRelationship::from_keyword(value).ok_or_else(unknown)?)
            }
            ParameterKind::RelationshipType => {
                Self::RelationshipType(RelationshipType::from_token(value).map_err(|_| unknown())?)
            }
            ParameterKind::Role => {
                Self::Role(ParticipationRole::from_token(value).map_err(|_| unknown())?)
            }
            ParameterKind::Rsvp => {
                Self::Rsvp(parse_boolean(value).map_err(|_| malformed("expected TRUE or FALSE"))?)
            }
            ParameterKind::TzId => {
                check_tzid(value).map_err(malformed)?;
                Self::TzId(value.to_string())
            }
            ParameterKind::Value => Self::Value(ValueType::from_keyword(value).ok_or_else(unknown)?),
        })
    }
}

/// A time zone identifier may be any text except controls and the
/// characters that delimit parameters.
pub(crate) fn check_tzid(tzid: &str) -> Result<(), &'static str> {
    if tzid.is_empty() {
        Err("empty time zone identifier")
    } else if tzid.chars().any(char::is_control) {
        Err("control character in time zone identifier")
    } else if tzid.contains(['"', ';', ':', ',']) {
        Err("delimiter in time zone identifier")
    } else {
        Ok(())
    }
}

fn uri(kind: ParameterKind, value: &str, caps: &dyn Capabilities) -> Result<Uri, ErrorKind> {
    Uri::parse(value, caps).map_err(|_| ErrorKind::malformed(kind, value, "not an absolute URI"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::DEFAULT_CAPABILITIES;

    fn decode(name: &str, values: &[&str]) -> Result<Parameter, ErrorKind> {
        let raw = RawParameter {
            name: name.to_string(),
            values: values.iter().map(ToString::to_string).collect(),
        };
        Parameter::decode(&raw, &DEFAULT_CAPABILITIES)
    }

    #[rustfmt::skip]
    #[test]
    fn decodes_registered_parameters() {
        let success_cases = [
            ("CN",       vec!["John Doe"],                 Parameter::CommonName("John Doe".to_string())),
            ("RSVP",     vec!["true"],                     Parameter::Rsvp(true)),
            ("VALUE",    vec!["date-time"],                Parameter::Value(ValueType::DateTime)),
            ("TZID",     vec!["America/New_York"],         Parameter::TzId("America/New_York".to_string())),
            ("TZID",     vec!["/example.org/Zone"],        Parameter::TzId("/example.org/Zone".to_string())),
            ("ENCODING", vec!["BASE64"],                   Parameter::Encoding(Encoding::Base64)),
            ("RANGE",    vec!["THISANDFUTURE"],            Parameter::Range(RecurrenceIdRange::ThisAndFuture)),
            ("RELATED",  vec!["END"],                      Parameter::Related(AlarmTriggerRelationship::End)),
            ("PARTSTAT", vec!["X-VOTED"],                  Parameter::ParticipationStatus(ParticipationStatus::XName("X-VOTED".to_string()))),
            ("LANGUAGE", vec!["en-US"],                    Parameter::Language("en-US".to_string())),
            ("FMTTYPE",  vec!["text/plain"],               Parameter::FormatType("text/plain".to_string())),
        ];
        for (name, values, expected) in success_cases {
            assert_eq!(decode(name, &values), Ok(expected), "{name}");
        }
    }

    #[test]
    fn decodes_address_lists() {
        let param = decode(
            "DELEGATED-TO",
            &["mailto:jdoe@example.com", "mailto:jqpublic@example.com"],
        )
        .unwrap();
        let Parameter::DelegatedTo(uris) = param else {
            panic!("expected DELEGATED-TO");
        };
        assert_eq!(uris.len(), 2);
        assert_eq!(uris[1].as_str(), "mailto:jqpublic@example.com");
    }

    #[test]
    fn keeps_unknown_parameters() {
        assert_eq!(
            decode("X-ABC", &["1", "2"]),
            Ok(Parameter::Other {
                name: "X-ABC".to_string(),
                values: vec!["1".to_string(), "2".to_string()],
            })
        );
    }

    #[rustfmt::skip]
    #[test]
    fn rejects_malformed_parameters() {
        let fail_cases = [
            ("RSVP",     vec!["maybe"]),
            ("VALUE",    vec!["DATE-ISH"]),
            ("ENCODING", vec!["QUOTED-PRINTABLE"]),
            ("RANGE",    vec!["THISANDPRIOR"]),
            ("ALTREP",   vec!["not a uri"]),
            ("PARTSTAT", vec!["x-lower"]),
            ("TZID",     vec!["A;B"]),
            ("FMTTYPE",  vec!["plain"]),
            ("LANGUAGE", vec!["en_US"]),
        ];
        for (name, values) in fail_cases {
            assert!(
                matches!(decode(name, &values), Err(ErrorKind::MalformedValue { .. })),
                "{name}={values:?}"
            );
        }
    }

    #[test]
    fn rejects_value_lists_on_single_valued_parameters() {
        assert_eq!(
            decode("ROLE", &["CHAIR", "REQ-PARTICIPANT"]),
            Err(ErrorKind::InvalidValueCount {
                expected: 1,
                got: 2
            })
        );
    }
}
