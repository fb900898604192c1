// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property kinds and names for iCalendar properties.
//!
//! This module defines the `PropertyKind` enum that represents all standard
//! iCalendar properties defined in RFC 5545, along with their value rules.

use std::fmt;

use crate::keyword::{
    KW_ACTION, KW_ATTACH, KW_ATTENDEE, KW_CALSCALE, KW_CATEGORIES, KW_CLASS, KW_COMMENT,
    KW_COMPLETED, KW_CONTACT, KW_CREATED, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_DUE,
    KW_DURATION, KW_EXDATE, KW_FREEBUSY, KW_GEO, KW_LAST_MODIFIED, KW_LOCATION, KW_METHOD,
    KW_ORGANIZER, KW_PERCENT_COMPLETE, KW_PRIORITY, KW_PRODID, KW_RDATE, KW_RECURRENCE_ID,
    KW_RELATED_TO, KW_REPEAT, KW_REQUEST_STATUS, KW_RESOURCES, KW_RRULE, KW_SEQUENCE, KW_STATUS,
    KW_SUMMARY, KW_TRANSP, KW_TRIGGER, KW_TZID, KW_TZNAME, KW_TZOFFSETFROM, KW_TZOFFSETTO,
    KW_TZURL, KW_UID, KW_URL, KW_VERSION, KW_X_PREFIX, keyword_enum,
};
use crate::property::spec::{PropertySpec, Shape};
use crate::value::ValueType::{
    self, Binary, CalAddress, Date, DateTime, Duration, Float, Integer, Period, Recur, Text, Uri,
    UtcOffset,
};

/// Defines `PropertyKind` together with its value rules.
///
/// Usage: `property_kind!(Variant => KW => [types...], shape, ...)`
macro_rules! property_kind {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident => $kw:ident => [$($ty:expr),+], $shape:expr
        ),+ $(,)?
    ) => {
        keyword_enum! {
            /// Kind of iCalendar property.
            /// Represents all standard properties defined in RFC 5545.
            #[expect(missing_docs)]
            pub enum PropertyKind {
                $(
                    $(#[$attr])*
                    $variant => $kw,
                )+
            }
        }

        impl PropertyKind {
            /// The value rules of this property.
            #[must_use]
            pub const fn spec(self) -> PropertySpec {
                match self {
                    $(
                        Self::$variant => PropertySpec::new(&[$($ty),+], $shape),
                    )+
                }
            }
        }
    };
}

property_kind! {
    // 3.7.1.  Calendar Scale
    CalScale        => KW_CALSCALE          => [Text], Shape::Single,
    // 3.7.2.  Method
    Method          => KW_METHOD            => [Text], Shape::Single,
    // 3.7.3.  Product Identifier
    ProdId          => KW_PRODID            => [Text], Shape::Single,
    // 3.7.4.  Version
    Version         => KW_VERSION           => [Text], Shape::Version,
    // 3.8.1.1.  Attachment
    Attach          => KW_ATTACH            => [Uri, Binary], Shape::Single,
    // 3.8.1.2.  Categories
    Categories      => KW_CATEGORIES        => [Text], Shape::List,
    // 3.8.1.3.  Classification
    Class           => KW_CLASS             => [Text], Shape::Class,
    // 3.8.1.4.  Comment
    Comment         => KW_COMMENT           => [Text], Shape::Single,
    // 3.8.1.5.  Description
    Description     => KW_DESCRIPTION       => [Text], Shape::Single,
    // 3.8.1.6.  Geographic Position
    Geo             => KW_GEO               => [Float], Shape::Geo,
    // 3.8.1.7.  Location
    Location        => KW_LOCATION          => [Text], Shape::Single,
    // 3.8.1.8.  Percent Complete
    PercentComplete => KW_PERCENT_COMPLETE  => [Integer], Shape::Single,
    // 3.8.1.9.  Priority
    Priority        => KW_PRIORITY          => [Integer], Shape::Single,
    // 3.8.1.10.  Resources
    Resources       => KW_RESOURCES         => [Text], Shape::List,
    // 3.8.1.11.  Status
    Status          => KW_STATUS            => [Text], Shape::Status,
    // 3.8.1.12.  Summary
    Summary         => KW_SUMMARY           => [Text], Shape::Single,
    // 3.8.2.1.  Date-Time Completed
    Completed       => KW_COMPLETED         => [DateTime], Shape::Single,
    // 3.8.2.2.  Date-Time End
    DtEnd           => KW_DTEND             => [DateTime, Date], Shape::Single,
    // 3.8.2.3.  Date-Time Due
    Due             => KW_DUE               => [DateTime, Date], Shape::Single,
    // 3.8.2.4.  Date-Time Start
    DtStart         => KW_DTSTART           => [DateTime, Date], Shape::Single,
    // 3.8.2.5.  Duration
    Duration        => KW_DURATION          => [Duration], Shape::Single,
    // 3.8.2.6.  Free/Busy Time
    FreeBusy        => KW_FREEBUSY          => [Period], Shape::List,
    // 3.8.2.7.  Time Transparency
    Transp          => KW_TRANSP            => [Text], Shape::Transparency,
    // 3.8.3.1.  Time Zone Identifier
    TzId            => KW_TZID              => [Text], Shape::Single,
    // 3.8.3.2.  Time Zone Name
    TzName          => KW_TZNAME            => [Text], Shape::Single,
    // 3.8.3.3.  Time Zone Offset From
    TzOffsetFrom    => KW_TZOFFSETFROM      => [UtcOffset], Shape::Single,
    // 3.8.3.4.  Time Zone Offset To
    TzOffsetTo      => KW_TZOFFSETTO        => [UtcOffset], Shape::Single,
    // 3.8.3.5.  Time Zone URL
    TzUrl           => KW_TZURL             => [Uri], Shape::Single,
    // 3.8.4.1.  Attendee
    Attendee        => KW_ATTENDEE          => [CalAddress], Shape::Single,
    // 3.8.4.2.  Contact
    Contact         => KW_CONTACT           => [Text], Shape::Single,
    // 3.8.4.3.  Organizer
    Organizer       => KW_ORGANIZER         => [CalAddress], Shape::Single,
    // 3.8.4.4.  Recurrence ID
    RecurrenceId    => KW_RECURRENCE_ID     => [DateTime, Date], Shape::Single,
    // 3.8.4.5.  Related To
    RelatedTo       => KW_RELATED_TO        => [Text], Shape::Single,
    // 3.8.4.6.  Uniform Resource Locator
    Url             => KW_URL               => [Uri], Shape::Single,
    // 3.8.4.7.  Unique Identifier
    Uid             => KW_UID               => [Text], Shape::Single,
    // 3.8.5.1.  Exception Date-Times
    ExDate          => KW_EXDATE            => [DateTime, Date], Shape::List,
    // 3.8.5.2.  Recurrence Date-Times
    RDate           => KW_RDATE             => [DateTime, Date, Period], Shape::List,
    // 3.8.5.3.  Recurrence Rule
    RRule           => KW_RRULE             => [Recur], Shape::Single,
    // 3.8.6.1.  Action
    Action          => KW_ACTION            => [Text], Shape::Action,
    // 3.8.6.2.  Repeat Count
    Repeat          => KW_REPEAT            => [Integer], Shape::Single,
    // 3.8.6.3.  Trigger
    Trigger         => KW_TRIGGER           => [Duration, DateTime], Shape::Single,
    // 3.8.7.1.  Date-Time Created
    Created         => KW_CREATED           => [DateTime], Shape::Single,
    // 3.8.7.2.  Date-Time Stamp
    DtStamp         => KW_DTSTAMP           => [DateTime], Shape::Single,
    // 3.8.7.3.  Last Modified
    LastModified    => KW_LAST_MODIFIED     => [DateTime], Shape::Single,
    // 3.8.7.4.  Sequence Number
    Sequence        => KW_SEQUENCE          => [Integer], Shape::Single,
    // 3.8.8.3.  Request Status
    RequestStatus   => KW_REQUEST_STATUS    => [Text], Shape::RequestStatus,
}

impl PropertyKind {
    /// Inclusive bounds of an integer value.
    #[must_use]
    pub const fn range(self) -> Option<(i32, i32)> {
        match self {
            Self::Priority => Some((0, 9)),
            Self::PercentComplete => Some((0, 100)),
            Self::Sequence | Self::Repeat => Some((0, i32::MAX)),
            _ => None,
        }
    }

    /// Whether date-time values must be in UTC.
    #[must_use]
    pub const fn requires_utc(self) -> bool {
        matches!(
            self,
            Self::Completed
                | Self::Created
                | Self::DtStamp
                | Self::LastModified
                | Self::FreeBusy
                | Self::Trigger
        )
    }

    /// The default value type.
    #[must_use]
    pub const fn default_type(self) -> ValueType {
        self.spec().default_type()
    }
}

/// The name of a property: registered, experimental or IANA.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyName {
    /// A property registered by RFC 5545.
    Known(PropertyKind),
    /// An experimental property, named `X-...`.
    X(String),
    /// Any other IANA token.
    Iana(String),
}

impl PropertyName {
    /// Classifies a property name, normalising it to upper case.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if let Some(kind) = PropertyKind::from_keyword(name) {
            return Self::Known(kind);
        }
        let name = name.to_ascii_uppercase();
        if name.starts_with(KW_X_PREFIX) {
            Self::X(name)
        } else {
            Self::Iana(name)
        }
    }

    /// The registered kind, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<PropertyKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::X(_) | Self::Iana(_) => None,
        }
    }

    /// The name as written on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_str(),
            Self::X(name) | Self::Iana(name) => name,
        }
    }
}

impl From<PropertyKind> for PropertyName {
    fn from(kind: PropertyKind) -> Self {
        Self::Known(kind)
    }
}

impl PartialEq<PropertyKind> for PropertyName {
    fn eq(&self, other: &PropertyKind) -> bool {
        self.kind() == Some(*other)
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_have_value_types() {
        for kind in PropertyKind::ALL {
            let spec = kind.spec();
            assert!(
                !spec.value_types().is_empty(),
                "Property {kind:?}: value_types must not be empty",
            );
            assert_eq!(spec.value_types()[0], kind.default_type());
        }
    }

    #[rustfmt::skip]
    #[test]
    fn classifies_names() {
        let cases = [
            ("dtstart",     PropertyName::Known(PropertyKind::DtStart)),
            ("X-WR-CALNAME", PropertyName::X("X-WR-CALNAME".to_string())),
            ("x-foo",       PropertyName::X("X-FOO".to_string())),
            ("EXAMPLE",     PropertyName::Iana("EXAMPLE".to_string())),
        ];
        for (src, expected) in cases {
            assert_eq!(PropertyName::parse(src), expected);
        }
    }
}
