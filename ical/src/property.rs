// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property module for iCalendar properties.
//!
//! A [`Property`] is a name, its [`Parameters`] and a [`PropertyValue`].
//! Registered properties are typed according to the rules of their
//! [`PropertyKind`]; experimental and IANA properties keep their values as
//! written so they survive a round trip.
//!
//! Both the decoder and the builders end in [`Property::validate`], so a
//! property that exists satisfies:
//!
//! - every value has the declared `VALUE` type, or the default type;
//! - integer values are within range (`PRIORITY`, `PERCENT-COMPLETE`, ...);
//! - `DTSTAMP`, `CREATED`, `LAST-MODIFIED`, `COMPLETED` and date-time
//!   `TRIGGER`s are in UTC;
//! - a `TZID` parameter is never combined with a UTC time or a date;
//! - `BINARY` values are marked `ENCODING=BASE64`, and only they are.

mod decode;
mod kind;
mod spec;
mod value;

pub use crate::property::kind::{PropertyKind, PropertyName};
pub use crate::property::spec::{PropertySpec, Shape};
pub use crate::property::value::{
    AlarmAction, Classification, Geo, PropertyValue, RequestStatus, Status, TimeTransparency,
    Version, VersionNumber,
};

use crate::error::ErrorKind;
use crate::parameter::{Encoding, Parameter, Parameters, check_tzid};
use crate::syntax::is_iana_token;
use crate::value::{DateOrDateTime, Uri, Value, ValueDateTime, ValueDuration, ValueText, ValueType};

/// A property: name, parameters and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    name: PropertyName,
    parameters: Parameters,
    value: PropertyValue,
}

impl Property {
    /// Creates a registered property.
    ///
    /// A `VALUE` parameter is added when the value type differs from the
    /// default type of the property, and `ENCODING=BASE64` for binary values.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the rules of `kind`.
    pub fn new(kind: PropertyKind, value: impl Into<PropertyValue>) -> Result<Self, ErrorKind> {
        let value = value.into();
        let mut parameters = Parameters::new();
        if let Some(ty) = value.values().first().map(Value::kind) {
            if ty != kind.default_type() {
                parameters.set(Parameter::Value(ty));
            }
            if ty == ValueType::Binary {
                parameters.set(Parameter::Encoding(Encoding::Base64));
            }
        }

        let property = Self {
            name: kind.into(),
            parameters,
            value,
        };
        property.validate()?;
        Ok(property)
    }

    /// Creates a date-time property local to the time zone `tzid`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date-time is in UTC, the identifier is not
    /// safe to write, or `kind` does not take date-times.
    pub fn zoned(
        kind: PropertyKind,
        datetime: ValueDateTime,
        tzid: impl Into<String>,
    ) -> Result<Self, ErrorKind> {
        let tzid = tzid.into();
        check_tzid(&tzid).map_err(|reason| ErrorKind::malformed("TZID", tzid.as_str(), reason))?;
        Self::new(kind, Value::DateTime(datetime))?.with_parameter(Parameter::TzId(tzid))
    }

    /// Creates an experimental or IANA property with values kept as written.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidToken`] if `name` is a registered property
    /// or not an IANA token.
    pub fn other(name: &str, values: Vec<String>) -> Result<Self, ErrorKind> {
        let name = PropertyName::parse(name);
        if name.kind().is_some() || !is_iana_token(name.as_str()) {
            return Err(ErrorKind::InvalidToken(name.to_string()));
        }
        Ok(Self {
            name,
            parameters: Parameters::new(),
            value: PropertyValue::Raw(values),
        })
    }

    /// Sets a parameter, replacing one of the same kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter cannot be written or the property
    /// no longer validates.
    pub fn with_parameter(mut self, parameter: Parameter) -> Result<Self, ErrorKind> {
        parameter.check()?;
        self.parameters.set(parameter);
        self.validate()?;
        Ok(self)
    }

    /// The property name.
    #[must_use]
    pub const fn name(&self) -> &PropertyName {
        &self.name
    }

    /// The registered kind, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<PropertyKind> {
        self.name.kind()
    }

    /// The parameters in order.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The value.
    #[must_use]
    pub const fn value(&self) -> &PropertyValue {
        &self.value
    }

    /// The typed values, for single and list values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        self.value.values()
    }

    /// The single typed value.
    #[must_use]
    pub fn single(&self) -> Option<&Value> {
        match &self.value {
            PropertyValue::Single(value) => Some(value),
            _ => None,
        }
    }

    /// The text, for single text values.
    #[must_use]
    pub fn text(&self) -> Option<&ValueText> {
        self.single().and_then(Value::as_text)
    }

    /// The date or date-time, for single date values.
    #[must_use]
    pub fn date_or_date_time(&self) -> Option<DateOrDateTime> {
        self.single().and_then(Value::as_date_or_date_time)
    }

    /// The date-time, for single date-time values.
    #[must_use]
    pub fn date_time(&self) -> Option<&ValueDateTime> {
        self.single().and_then(Value::as_date_time)
    }

    /// The duration, for single duration values.
    #[must_use]
    pub fn duration(&self) -> Option<&ValueDuration> {
        self.single().and_then(Value::as_duration)
    }

    /// The integer, for single integer values.
    #[must_use]
    pub fn integer(&self) -> Option<i32> {
        self.single().and_then(Value::as_integer)
    }

    /// The URI, for single URI or calendar-address values.
    #[must_use]
    pub fn uri(&self) -> Option<&Uri> {
        self.single().and_then(Value::as_uri)
    }

    /// The `TZID` parameter.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        self.parameters.tzid()
    }

    /// Whether the value is empty text or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.value {
            PropertyValue::Single(Value::Text(text)) => text.is_empty(),
            PropertyValue::List(values) => values.is_empty(),
            PropertyValue::Raw(values) => values.iter().all(String::is_empty),
            _ => false,
        }
    }

    /// Checks the value against the rules of the property.
    ///
    /// # Errors
    ///
    /// Returns the first rule that does not hold.
    pub fn validate(&self) -> Result<(), ErrorKind> {
        let Some(kind) = self.name.kind() else {
            return Ok(());
        };
        let spec = kind.spec();
        let fits = matches!(
            (spec.shape(), &self.value),
            (Shape::Single, PropertyValue::Single(_))
                | (Shape::List, PropertyValue::List(_))
                | (Shape::Geo, PropertyValue::Geo(_))
                | (Shape::RequestStatus, PropertyValue::RequestStatus(_))
                | (Shape::Version, PropertyValue::Version(_))
                | (Shape::Class, PropertyValue::Class(_))
                | (Shape::Status, PropertyValue::Status(_))
                | (Shape::Transparency, PropertyValue::Transparency(_))
                | (Shape::Action, PropertyValue::Action(_))
        );
        if !fits {
            return Err(ErrorKind::malformed(
                kind,
                self.value.to_string(),
                "value does not fit the property",
            ));
        }

        match &self.value {
            PropertyValue::List(values) if values.is_empty() => {
                return Err(ErrorKind::InvalidValueCount {
                    expected: 1,
                    got: 0,
                });
            }
            PropertyValue::Geo(geo) => geo.check()?,
            PropertyValue::Version(version) => version.check()?,
            PropertyValue::Class(class) => {
                Classification::parse(class.as_str())?;
            }
            _ => {}
        }

        let declared = self.parameters.value_type();
        let expected = match declared {
            Some(ty) if !spec.allows(ty) => {
                return Err(ErrorKind::ValueTypeMismatch {
                    expected: spec.default_type(),
                    got: ty,
                });
            }
            Some(ty) => ty,
            None => spec.default_type(),
        };

        let zoned = self.parameters.tzid().is_some();
        for value in self.values() {
            if value.kind() != expected {
                return Err(ErrorKind::ValueTypeMismatch {
                    expected,
                    got: value.kind(),
                });
            }
            if let (Some((min, max)), Value::Integer(n)) = (kind.range(), value)
                && !(min..=max).contains(n)
            {
                return Err(ErrorKind::out_of_range(kind, n));
            }
            if kind.requires_utc()
                && matches!(value, Value::DateTime(_) | Value::Period(_))
                && !value.is_utc()
            {
                return Err(ErrorKind::malformed(
                    value.kind(),
                    value.to_string(),
                    "must be a UTC date-time",
                ));
            }
            if zoned && (value.is_utc() || matches!(value, Value::Date(_))) {
                return Err(ErrorKind::TimezoneConflict);
            }
        }

        let base64 = self.parameters.encoding() == Some(Encoding::Base64);
        if expected == ValueType::Binary && !base64 {
            return Err(ErrorKind::malformed(
                ValueType::Binary,
                self.value.to_string(),
                "requires ENCODING=BASE64",
            ));
        }
        if base64 && expected != ValueType::Binary {
            return Err(ErrorKind::ValueTypeMismatch {
                expected: ValueType::Binary,
                got: expected,
            });
        }
        Ok(())
    }
}
