// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Structured property values.

use std::fmt::{self, Display};

use crate::error::ErrorKind;
use crate::keyword::{
    KW_ACTION_AUDIO, KW_ACTION_DISPLAY, KW_ACTION_EMAIL, KW_CLASS_CONFIDENTIAL, KW_CLASS_PRIVATE,
    KW_CLASS, KW_CLASS_PUBLIC, KW_GEO, KW_REQUEST_STATUS, KW_STATUS_CANCELLED, KW_STATUS_COMPLETED,
    KW_STATUS_CONFIRMED, KW_STATUS_DRAFT, KW_STATUS_FINAL, KW_STATUS_IN_PROCESS,
    KW_STATUS_NEEDS_ACTION, KW_STATUS_TENTATIVE, KW_TRANSP_OPAQUE, KW_TRANSP_TRANSPARENT,
    KW_VERSION, extensible_enum, keyword_enum,
};
use crate::value::{
    DateOrDateTime, Uri, Value, ValueBinary, ValueDate, ValueDateTime, ValueDuration, ValueFloat,
    ValuePeriod, ValueRecurrenceRule, ValueText, ValueUtcOffset,
};

/// The decoded value of a property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A single typed value.
    Single(Value),
    /// A comma-separated list of typed values.
    List(Vec<Value>),
    /// `GEO`.
    Geo(Geo),
    /// `REQUEST-STATUS`.
    RequestStatus(RequestStatus),
    /// `VERSION`.
    Version(Version),
    /// `CLASS`.
    Class(Classification),
    /// `STATUS`.
    Status(Status),
    /// `TRANSP`.
    Transparency(TimeTransparency),
    /// `ACTION`.
    Action(AlarmAction),
    /// The values of an experimental or IANA property, escapes untouched.
    Raw(Vec<String>),
}

impl PropertyValue {
    /// The typed values, for single and list values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::List(values) => values,
            _ => &[],
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<Value>> for PropertyValue {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

macro_rules! impl_from_single {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    Self::Single(value.into())
                }
            }
        )+
    };
}

impl_from_single!(
    &str,
    String,
    ValueText,
    ValueDate,
    ValueDateTime,
    DateOrDateTime,
    ValueDuration,
    ValuePeriod,
    ValueRecurrenceRule,
    ValueUtcOffset,
    ValueBinary,
    ValueFloat,
    Uri,
    i32,
);

impl From<Geo> for PropertyValue {
    fn from(value: Geo) -> Self {
        Self::Geo(value)
    }
}

impl From<RequestStatus> for PropertyValue {
    fn from(value: RequestStatus) -> Self {
        Self::RequestStatus(value)
    }
}

impl From<Version> for PropertyValue {
    fn from(value: Version) -> Self {
        Self::Version(value)
    }
}

impl From<Classification> for PropertyValue {
    fn from(value: Classification) -> Self {
        Self::Class(value)
    }
}

impl From<Status> for PropertyValue {
    fn from(value: Status) -> Self {
        Self::Status(value)
    }
}

impl From<TimeTransparency> for PropertyValue {
    fn from(value: TimeTransparency) -> Self {
        Self::Transparency(value)
    }
}

impl From<AlarmAction> for PropertyValue {
    fn from(value: AlarmAction) -> Self {
        Self::Action(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => value.fmt(f),
            Self::List(values) => write_list(f, values),
            Self::Raw(values) => write_list(f, values),
            Self::Geo(geo) => geo.fmt(f),
            Self::RequestStatus(status) => status.fmt(f),
            Self::Version(version) => version.fmt(f),
            Self::Class(class) => class.fmt(f),
            Self::Status(status) => status.fmt(f),
            Self::Transparency(transp) => transp.fmt(f),
            Self::Action(action) => action.fmt(f),
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        value.fmt(f)?;
    }
    Ok(())
}

/// Global position, RFC 5545 Section 3.8.1.6.
///
/// Both coordinates keep the text they were written as.
#[derive(Debug, Clone, PartialEq)]
pub struct Geo {
    latitude: ValueFloat,
    longitude: ValueFloat,
}

impl Geo {
    /// A position from coordinates in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is not finite or out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ErrorKind> {
        let geo = Self {
            latitude: ValueFloat::new(latitude)?,
            longitude: ValueFloat::new(longitude)?,
        };
        geo.check()?;
        Ok(geo)
    }

    /// Parses `latitude;longitude`.
    ///
    /// # Errors
    ///
    /// Returns an error if either part is not a float or out of range.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let (lat, lon) = raw
            .split_once(';')
            .ok_or_else(|| ErrorKind::malformed(KW_GEO, raw, "expected latitude;longitude"))?;
        let geo = Self {
            latitude: ValueFloat::parse(lat)?,
            longitude: ValueFloat::parse(lon)?,
        };
        geo.check()?;
        Ok(geo)
    }

    /// Latitude in degrees, -90 to 90.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude.value()
    }

    /// Longitude in degrees, -180 to 180.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude.value()
    }

    pub(crate) fn check(&self) -> Result<(), ErrorKind> {
        let (latitude, longitude) = (self.latitude(), self.longitude());
        if !(-90.0..=90.0).contains(&latitude) {
            Err(ErrorKind::out_of_range("latitude", latitude))
        } else if !(-180.0..=180.0).contains(&longitude) {
            Err(ErrorKind::out_of_range("longitude", longitude))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Geo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.latitude, self.longitude)
    }
}

/// Request status, RFC 5545 Section 3.8.8.3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestStatus {
    /// Hierarchical status code such as `2.0` or `3.1.1`.
    pub code: String,
    /// Status description.
    pub description: ValueText,
    /// Exception data.
    pub data: Option<ValueText>,
}

impl RequestStatus {
    /// Parses `code;description[;data]`.
    ///
    /// # Errors
    ///
    /// Returns an error on a malformed code or text.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let malformed = |reason| ErrorKind::malformed(KW_REQUEST_STATUS, raw, reason);
        let mut parts = split_unescaped(raw, ';');
        let code = parts.next().unwrap_or_default();
        let description = parts.next().ok_or_else(|| malformed("missing description"))?;
        let data = parts.next();

        let mut numbers = code.split('.');
        let well_formed = numbers.clone().count() >= 2
            && numbers.all(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed || code.split('.').count() > 3 {
            return Err(malformed("status code must be digits separated by '.'"));
        }

        Ok(Self {
            code: code.to_string(),
            description: ValueText::parse(description)?,
            data: data.map(ValueText::parse).transpose()?,
        })
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.code, self.description)?;
        if let Some(data) = &self.data {
            write!(f, ";{data}")?;
        }
        Ok(())
    }
}

/// Splits at most twice on `sep` characters that are not escaped.
#[expect(clippy::indexing_slicing)]
fn split_unescaped(raw: &str, sep: char) -> impl Iterator<Item = &str> {
    let mut parts = Vec::with_capacity(3);
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in raw.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            c if c == sep && parts.len() < 2 => {
                parts.push(&raw[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);
    parts.into_iter()
}

/// A `major.minor` iCalendar version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionNumber {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
}

impl VersionNumber {
    /// Creates a version number.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    fn parse(raw: &str) -> Result<Self, ErrorKind> {
        let malformed = || ErrorKind::malformed(KW_VERSION, raw, "expected MAJOR.MINOR");
        let (major, minor) = raw.split_once('.').ok_or_else(malformed)?;
        let number = |s: &str| {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            lexical::parse::<u32, _>(s).map_err(|_| malformed())
        };
        Ok(Self::new(number(major)?, number(minor)?))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Version, RFC 5545 Section 3.7.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    /// Minimum version, when a range is given.
    pub min: Option<VersionNumber>,
    /// Maximum version.
    pub max: VersionNumber,
}

impl Version {
    /// Version 2.0, the version of RFC 5545.
    pub const V2_0: Self = Self {
        min: None,
        max: VersionNumber::new(2, 0),
    };

    /// Parses `max` or `min;max`.
    ///
    /// # Errors
    ///
    /// Returns an error if a version number is malformed.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        Ok(match raw.split_once(';') {
            Some((min, max)) => Self {
                min: Some(VersionNumber::parse(min)?),
                max: VersionNumber::parse(max)?,
            },
            None => Self {
                min: None,
                max: VersionNumber::parse(raw)?,
            },
        })
    }

    pub(crate) fn check(self) -> Result<(), ErrorKind> {
        match self.min {
            Some(min) if min > self.max => Err(ErrorKind::VersionOrdering),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(min) = self.min {
            write!(f, "{min};")?;
        }
        self.max.fmt(f)
    }
}

extensible_enum! {
    /// Access classification, RFC 5545 Section 3.8.1.3.
    #[expect(missing_docs)]
    pub enum Classification {
        Public       => KW_CLASS_PUBLIC,
        Private      => KW_CLASS_PRIVATE,
        Confidential => KW_CLASS_CONFIDENTIAL,
    }
}

impl Classification {
    /// Parses a `CLASS` value: one of the three literals or an `x-name`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedValue`] for any other token.
    pub fn parse(s: &str) -> Result<Self, ErrorKind> {
        match Self::from_token(s)? {
            Self::Iana(token) => Err(ErrorKind::malformed(
                KW_CLASS,
                token,
                "expected PUBLIC, PRIVATE, CONFIDENTIAL or an x-name",
            )),
            class => Ok(class),
        }
    }
}

keyword_enum! {
    /// Status, RFC 5545 Section 3.8.1.11.
    ///
    /// Which values are allowed depends on the component.
    #[expect(missing_docs)]
    pub enum Status {
        Tentative   => KW_STATUS_TENTATIVE,
        Confirmed   => KW_STATUS_CONFIRMED,
        Cancelled   => KW_STATUS_CANCELLED,
        NeedsAction => KW_STATUS_NEEDS_ACTION,
        Completed   => KW_STATUS_COMPLETED,
        InProcess   => KW_STATUS_IN_PROCESS,
        Draft       => KW_STATUS_DRAFT,
        Final       => KW_STATUS_FINAL,
    }
}

keyword_enum! {
    /// Time transparency, RFC 5545 Section 3.8.2.7.
    pub enum TimeTransparency {
        /// Blocks or opaque on busy time searches.
        Opaque      => KW_TRANSP_OPAQUE,
        /// Transparent on busy time searches.
        Transparent => KW_TRANSP_TRANSPARENT,
    }
}

keyword_enum! {
    /// Alarm action, RFC 5545 Section 3.8.6.1.
    #[expect(missing_docs)]
    pub enum AlarmAction {
        Audio   => KW_ACTION_AUDIO,
        Display => KW_ACTION_DISPLAY,
        Email   => KW_ACTION_EMAIL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_geo() {
        let geo = Geo::parse("37.386013;-122.082932").unwrap();
        assert!((geo.latitude() - 37.386_013).abs() < 1e-9);
        assert_eq!(geo.to_string(), "37.386013;-122.082932");
        assert_eq!(Geo::parse("40.0;-74.50").unwrap().to_string(), "40.0;-74.50");
        assert_eq!(Geo::new(40.0, -74.5).unwrap().to_string(), "40;-74.5");
        assert!(matches!(Geo::new(0.0, 181.0), Err(ErrorKind::OutOfRange { .. })));
        assert!(matches!(
            Geo::parse("91;0"),
            Err(ErrorKind::OutOfRange { field, .. }) if field == "latitude"
        ));
        assert!(matches!(Geo::parse("1.0"), Err(ErrorKind::MalformedValue { .. })));
    }

    #[rustfmt::skip]
    #[test]
    fn parses_request_status() {
        let success_cases = [
            "2.0;Success",
            r"3.1;Invalid property value;DTSTART:96-Apr-01",
            r"2.8; Success\, repeating event ignored. Scheduled as a single event.;RRULE:FREQ=WEEKLY",
            r"4.1;Event conflict.  Date-time is busy.",
            "3.7;Invalid calendar user;ATTENDEE:mailto:jsmith@example.com",
        ];
        for src in success_cases {
            let status = RequestStatus::parse(src).unwrap();
            assert_eq!(status.to_string(), src);
        }

        let status = RequestStatus::parse(r"3.1;Invalid;DTSTART:96-Apr-01").unwrap();
        assert_eq!(status.code, "3.1");
        assert_eq!(status.data.unwrap().as_str(), "DTSTART:96-Apr-01");

        let fail_cases = ["2.0", "2;Success", "2.x;Success", "1.2.3.4;Too deep"];
        for src in fail_cases {
            assert!(RequestStatus::parse(src).is_err(), "{src}");
        }
    }

    #[test]
    fn parses_versions() {
        assert_eq!(Version::parse("2.0"), Ok(Version::V2_0));
        let range = Version::parse("1.0;2.0").unwrap();
        assert_eq!(range.to_string(), "1.0;2.0");
        assert_eq!(range.check(), Ok(()));
        assert_eq!(Version::parse("2.1;2.0").unwrap().check(), Err(ErrorKind::VersionOrdering));
        assert!(Version::parse("two").is_err());
    }

    #[test]
    fn classification_accepts_strict_x_names_only() {
        assert_eq!(Classification::from_token("private"), Ok(Classification::Private));
        assert!(Classification::from_token("X-INTERNAL").is_ok());
        assert!(Classification::from_token("x-internal").is_err());
        assert_eq!(
            Classification::parse("X-INTERNAL"),
            Ok(Classification::XName("X-INTERNAL".to_string()))
        );
        assert!(Classification::parse("SECRET").is_err());
    }
}
