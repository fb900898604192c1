// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typing of content lines into properties.

use crate::capability::Capabilities;
use crate::error::ErrorKind;
use crate::parameter::Parameters;
use crate::property::{
    AlarmAction, Classification, Geo, Property, PropertyName, PropertySpec, PropertyValue,
    RequestStatus, Shape, Status, TimeTransparency, Version,
};
use crate::syntax::ContentLine;
use crate::value::{Value, ValueType};

impl Property {
    /// Decodes a content line into a property.
    ///
    /// The value type is taken from the `VALUE` parameter when present and
    /// from the property default otherwise. Single-valued properties whose
    /// grammar admits commas (text, recurrence rules and URIs) keep them;
    /// every other single-valued property must carry exactly one value.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter or value is malformed, or the value
    /// breaks a rule of the property.
    pub fn decode(line: &ContentLine, caps: &dyn Capabilities) -> Result<Self, ErrorKind> {
        let name = PropertyName::parse(&line.name);
        let parameters = Parameters::decode(&line.parameters, caps)?;
        let Some(kind) = name.kind() else {
            return Ok(Self {
                name,
                parameters,
                value: PropertyValue::Raw(line.values.clone()),
            });
        };

        let spec = kind.spec();
        let ty = match parameters.value_type() {
            Some(ty) if !spec.allows(ty) => {
                return Err(ErrorKind::ValueTypeMismatch {
                    expected: spec.default_type(),
                    got: ty,
                });
            }
            Some(ty) => ty,
            None => spec.default_type(),
        };

        let values = line.values.as_slice();
        let joined = || values.join(",");
        let unknown = |raw: &str| ErrorKind::malformed(kind, raw, "unknown value");
        let value = match spec.shape() {
            Shape::Single if owns_commas(ty) => {
                PropertyValue::Single(typed(spec, ty, &joined(), caps)?)
            }
            Shape::Single => PropertyValue::Single(typed(spec, ty, single(values)?, caps)?),
            Shape::List => PropertyValue::List(
                values
                    .iter()
                    .map(|raw| typed(spec, ty, raw, caps))
                    .collect::<Result<_, _>>()?,
            ),
            Shape::Geo => PropertyValue::Geo(Geo::parse(single(values)?)?),
            Shape::RequestStatus => PropertyValue::RequestStatus(RequestStatus::parse(&joined())?),
            Shape::Version => PropertyValue::Version(Version::parse(single(values)?)?),
            Shape::Class => PropertyValue::Class(Classification::parse(single(values)?)?),
            Shape::Status => {
                let raw = single(values)?;
                PropertyValue::Status(Status::from_keyword(raw).ok_or_else(|| unknown(raw))?)
            }
            Shape::Transparency => {
                let raw = single(values)?;
                PropertyValue::Transparency(
                    TimeTransparency::from_keyword(raw).ok_or_else(|| unknown(raw))?,
                )
            }
            Shape::Action => {
                let raw = single(values)?;
                PropertyValue::Action(AlarmAction::from_keyword(raw).ok_or_else(|| unknown(raw))?)
            }
        };

        let property = Self {
            name,
            parameters,
            value,
        };
        property.validate()?;
        Ok(property)
    }
}

/// Value types whose grammar uses commas internally rather than as a value
/// separator.
fn owns_commas(ty: ValueType) -> bool {
    matches!(
        ty,
        ValueType::Text | ValueType::Recur | ValueType::Uri | ValueType::CalAddress
    )
}

fn single(values: &[String]) -> Result<&str, ErrorKind> {
    match values {
        [value] => Ok(value),
        values => Err(ErrorKind::InvalidValueCount {
            expected: 1,
            got: values.len(),
        }),
    }
}

/// Decodes `raw` as `ty`; when that fails but another allowed type fits,
/// reports the mismatch instead of the grammar error.
fn typed(
    spec: PropertySpec,
    ty: ValueType,
    raw: &str,
    caps: &dyn Capabilities,
) -> Result<Value, ErrorKind> {
    Value::decode(ty, raw, caps).map_err(|err| {
        if !matches!(err, ErrorKind::MalformedValue { .. }) {
            return err;
        }
        spec.value_types()
            .iter()
            .copied()
            .filter(|&other| other != ty)
            .find(|&other| Value::decode(other, raw, caps).is_ok())
            .map_or(err, |got| ErrorKind::ValueTypeMismatch { expected: ty, got })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::DEFAULT_CAPABILITIES;
    use crate::property::PropertyKind;
    use crate::value::{ValueDuration, ValuePeriod};

    fn decode(src: &str) -> Result<Property, ErrorKind> {
        let line = ContentLine::parse(src, 1).map_err(crate::error::Error::into_kind)?;
        Property::decode(&line, &DEFAULT_CAPABILITIES)
    }

    #[test]
    fn decodes_zoned_start() {
        let prop = decode("DTSTART;TZID=Asia/Tokyo:20200301T090000").unwrap();
        assert_eq!(prop.kind(), Some(PropertyKind::DtStart));
        assert_eq!(prop.tzid(), Some("Asia/Tokyo"));
        let datetime = prop.date_time().unwrap();
        assert!(!datetime.is_utc());
        assert_eq!(datetime.to_string(), "20200301T090000");
    }

    #[test]
    fn decodes_trigger_union() {
        let prop = decode("TRIGGER:-PT15M").unwrap();
        assert_eq!(prop.duration(), Some(&ValueDuration::from_seconds(-900)));

        let prop = decode("TRIGGER;VALUE=DATE-TIME:19980101T050000Z").unwrap();
        assert!(prop.date_time().unwrap().is_utc());
    }

    #[test]
    fn decodes_rdate_periods() {
        let prop = decode("RDATE;VALUE=PERIOD:19960403T020000Z/19960403T040000Z,19960404T010000Z/PT3H").unwrap();
        assert_eq!(prop.values().len(), 2);
        assert!(matches!(prop.values()[1], Value::Period(ValuePeriod::Start { .. })));
    }

    #[test]
    fn joins_commas_in_single_text() {
        let prop = decode("SUMMARY:a,b").unwrap();
        assert_eq!(prop.text().unwrap().as_str(), "a,b");

        let prop = decode(r"CATEGORIES:APPOINTMENT,EDUCATION,a\,b").unwrap();
        assert_eq!(prop.values().len(), 3);
    }

    #[test]
    fn joins_commas_in_recurrence_rules() {
        let prop = decode("RRULE:FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-1,1").unwrap();
        let Some(Value::Recur(rule)) = prop.single() else {
            panic!("expected a recurrence rule, got {:?}", prop.value());
        };
        assert_eq!(rule.by_day.len(), 5);
        assert_eq!(rule.by_set_pos, vec![-1, 1]);

        let prop = decode("URL:http://example.com/a,b").unwrap();
        assert_eq!(prop.uri().map(ToString::to_string).as_deref(), Some("http://example.com/a,b"));
    }

    #[test]
    fn keeps_experimental_values() {
        let prop = decode("X-ABC-MMSUBJ;VALUE=URI;FMTTYPE=audio/basic:http://www.example.org/mysubj.au").unwrap();
        assert_eq!(prop.name().as_str(), "X-ABC-MMSUBJ");
        assert_eq!(prop.value(), &PropertyValue::Raw(vec!["http://www.example.org/mysubj.au".to_string()]));
    }

    #[test]
    fn decodes_structured_values() {
        let prop = decode("GEO:37.386013;-122.082932").unwrap();
        assert!(matches!(prop.value(), PropertyValue::Geo(_)));
        let prop = decode("CLASS:CONFIDENTIAL").unwrap();
        assert_eq!(prop.value(), &PropertyValue::Class(Classification::Confidential));
        let prop = decode("STATUS:needs-action").unwrap();
        assert_eq!(prop.value(), &PropertyValue::Status(Status::NeedsAction));
        let prop = decode("VERSION:2.0").unwrap();
        assert_eq!(prop.value(), &PropertyValue::Version(Version::V2_0));
        let prop = decode("ATTACH;ENCODING=BASE64;VALUE=BINARY:aGVsbG8=").unwrap();
        assert_eq!(prop.single().map(Value::kind), Some(ValueType::Binary));
    }

    #[rustfmt::skip]
    #[test]
    fn reports_typed_failures() {
        let fail_cases = [
            ("DTSTART:20200301",                          ErrorKind::ValueTypeMismatch { expected: ValueType::DateTime, got: ValueType::Date }),
            ("DTSTART;VALUE=DATE:20200301T090000",        ErrorKind::ValueTypeMismatch { expected: ValueType::Date, got: ValueType::DateTime }),
            ("DTSTART;VALUE=DURATION:PT1H",               ErrorKind::ValueTypeMismatch { expected: ValueType::DateTime, got: ValueType::Duration }),
            ("DTSTART;TZID=Asia/Tokyo:20200301T090000Z",  ErrorKind::TimezoneConflict),
            ("DTSTART;TZID=Asia/Tokyo;VALUE=DATE:20200301", ErrorKind::TimezoneConflict),
            ("PRIORITY:1,2",                              ErrorKind::InvalidValueCount { expected: 1, got: 2 }),
            ("ATTACH;ENCODING=BASE64:aGVsbG8=",           ErrorKind::ValueTypeMismatch { expected: ValueType::Uri, got: ValueType::Binary }),
            ("VERSION:2.1;2.0",                           ErrorKind::VersionOrdering),
        ];
        for (src, expected) in fail_cases {
            assert_eq!(decode(src), Err(expected), "{src}");
        }

        assert!(matches!(decode("PRIORITY:10"), Err(ErrorKind::OutOfRange { .. })));
        assert!(matches!(decode("DTSTAMP:20200301T120000"), Err(ErrorKind::MalformedValue { .. })));
        assert!(matches!(decode("TRANSP:SOMETIMES"), Err(ErrorKind::MalformedValue { .. })));
        assert!(matches!(decode("ACTION:PROCEDURE"), Err(ErrorKind::MalformedValue { .. })));
    }
}
