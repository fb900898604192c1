// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::component::rules::{self, ComponentRules};
use crate::component::{CalendarComponent, ComponentKind, PropertyList, Rules, property_access};
use crate::error::{Error, ErrorKind, ValidationError};
use crate::value::{ValueDateTime, ValueText, ValueUtcOffset};

/// `VTIMEZONE`, RFC 5545 Section 3.6.5.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timezone {
    properties: PropertyList,
    observances: Vec<Observance>,
}

impl Timezone {
    /// Creates a time zone definition with its `TZID`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tzid` does not fit the `TZID` property.
    pub fn new(tzid: impl Into<ValueText>) -> Result<Self, Error> {
        let mut tz = Self::default();
        tz.set_tzid(tzid.into())?;
        Ok(tz)
    }

    /// The identifier that `TZID` parameters refer to.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.tzid().and_then(|p| p.text()).map(ValueText::as_str)
    }

    /// The `STANDARD` and `DAYLIGHT` observances in build order.
    #[must_use]
    pub fn observances(&self) -> &[Observance] {
        &self.observances
    }

    /// Adds an observance.
    ///
    /// # Errors
    ///
    /// Returns an error if the observance is incomplete.
    pub fn add_observance(&mut self, observance: Observance) -> Result<(), Error> {
        observance.validate()?;
        self.observances.push(observance);
        Ok(())
    }

    pub(crate) fn push_observance(&mut self, observance: Observance) {
        self.observances.push(observance);
    }

    /// Checks the properties and that there is at least one observance.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.properties.validate(self.rules())?;
        if self.observances.is_empty() {
            return Err(ValidationError::new(
                ComponentKind::Timezone,
                ErrorKind::MissingComponent {
                    parent: ComponentKind::Timezone,
                    child: "STANDARD or DAYLIGHT".to_string(),
                },
            ));
        }
        self.observances.iter().try_for_each(Observance::validate)
    }
}

impl Rules for Timezone {
    fn rules(&self) -> &'static ComponentRules {
        &rules::TIMEZONE
    }
}

impl From<Timezone> for CalendarComponent {
    fn from(tz: Timezone) -> Self {
        Self::Timezone(tz)
    }
}

property_access! {
    Timezone {
        one tzid, set_tzid => TzId;
        one last_modified, set_last_modified => LastModified;
        one tzurl, set_tzurl => TzUrl;
    }
}

/// Whether an observance describes standard or daylight saving time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservanceKind {
    /// `STANDARD`
    Standard,
    /// `DAYLIGHT`
    Daylight,
}

impl ObservanceKind {
    /// The component kind written in `BEGIN` and `END`.
    #[must_use]
    pub const fn component_kind(self) -> ComponentKind {
        match self {
            Self::Standard => ComponentKind::Standard,
            Self::Daylight => ComponentKind::Daylight,
        }
    }

    pub(crate) const fn from_component_kind(kind: ComponentKind) -> Option<Self> {
        match kind {
            ComponentKind::Standard => Some(Self::Standard),
            ComponentKind::Daylight => Some(Self::Daylight),
            _ => None,
        }
    }
}

/// A `STANDARD` or `DAYLIGHT` sub-component of a time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Observance {
    kind: ObservanceKind,
    properties: PropertyList,
}

impl Observance {
    /// Creates an observance with its required properties.
    ///
    /// # Errors
    ///
    /// Returns an error if a value does not fit its property.
    pub fn new(
        kind: ObservanceKind,
        dtstart: ValueDateTime,
        offset_from: ValueUtcOffset,
        offset_to: ValueUtcOffset,
    ) -> Result<Self, Error> {
        let mut observance = Self::empty(kind);
        observance.set_dtstart(dtstart)?;
        observance.set_tzoffsetto(offset_to)?;
        observance.set_tzoffsetfrom(offset_from)?;
        Ok(observance)
    }

    pub(crate) const fn empty(kind: ObservanceKind) -> Self {
        Self {
            kind,
            properties: PropertyList::new(),
        }
    }

    /// Standard or daylight.
    #[must_use]
    pub const fn kind(&self) -> ObservanceKind {
        self.kind
    }

    /// Checks the required properties.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.properties.validate(self.rules())
    }
}

impl Rules for Observance {
    fn rules(&self) -> &'static ComponentRules {
        match self.kind {
            ObservanceKind::Standard => &rules::STANDARD,
            ObservanceKind::Daylight => &rules::DAYLIGHT,
        }
    }
}

property_access! {
    Observance {
        one dtstart, set_dtstart => DtStart;
        one tzoffsetto, set_tzoffsetto => TzOffsetTo;
        one tzoffsetfrom, set_tzoffsetfrom => TzOffsetFrom;
        one rrule, set_rrule => RRule;
        many comments, add_comment => Comment;
        many rdates, add_rdate => RDate;
        many tznames, add_tzname => TzName;
    }
}
