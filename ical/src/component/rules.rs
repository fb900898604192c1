// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Per-component property tables, RFC 5545 Section 3.6.

use crate::component::ComponentKind;
use crate::error::{ErrorKind, ValidationError};
use crate::property::PropertyKind::{
    self, Action, Attach, Attendee, CalScale, Categories, Class, Comment, Completed, Contact,
    Created, Description, DtEnd, DtStamp, DtStart, Due, Duration, ExDate, FreeBusy, Geo,
    LastModified, Location, Method, Organizer, PercentComplete, Priority, ProdId, RDate, RRule,
    RecurrenceId, RelatedTo, Repeat, RequestStatus, Resources, Sequence, Summary, Transp, Trigger,
    TzId, TzName, TzOffsetFrom, TzOffsetTo, TzUrl, Uid, Url, Version,
};
use crate::property::{Property, PropertyValue, Status};

/// How often a property may occur in a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Occurrence {
    /// Exactly once.
    Required,
    /// At most once.
    Optional,
    /// At least once.
    OneOrMore,
    /// Any number of times.
    Many,
}

impl Occurrence {
    const fn is_singleton(self) -> bool {
        matches!(self, Self::Required | Self::Optional)
    }

    const fn is_required(self) -> bool {
        matches!(self, Self::Required | Self::OneOrMore)
    }
}

use Occurrence::{Many, OneOrMore, Optional, Required};

/// The property rules of one component kind.
#[derive(Debug)]
pub(crate) struct ComponentRules {
    pub kind: ComponentKind,
    pub properties: &'static [(PropertyKind, Occurrence)],
    /// Pairs that must not both occur.
    pub exclusive: &'static [(PropertyKind, PropertyKind)],
    /// Pairs that must occur together or not at all.
    pub coupled: &'static [(PropertyKind, PropertyKind)],
    /// When the first occurs, the second is required.
    pub dependent: &'static [(PropertyKind, PropertyKind)],
    /// Allowed `STATUS` values.
    pub statuses: &'static [Status],
}

impl ComponentRules {
    fn occurrence(&self, kind: PropertyKind) -> Option<Occurrence> {
        self.properties
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, occurrence)| *occurrence)
    }

    /// Whether `kind` may occur at most once.
    pub fn is_singleton(&self, kind: PropertyKind) -> bool {
        self.occurrence(kind).is_some_and(Occurrence::is_singleton)
    }

    /// Checks that `property` may be added next to `existing`.
    ///
    /// With `replacing`, an existing singleton of the same kind is about to
    /// be replaced and does not count.
    pub fn check_property(
        &self,
        existing: &[Property],
        property: &Property,
        replacing: bool,
    ) -> Result<(), ErrorKind> {
        let Some(kind) = property.kind() else {
            return Ok(());
        };
        let Some(occurrence) = self.occurrence(kind) else {
            return Err(ErrorKind::PropertyNotAllowed {
                component: self.kind,
                property: kind.into(),
            });
        };
        if occurrence.is_singleton() && !replacing && existing.iter().any(|p| p.kind() == Some(kind))
        {
            return Err(ErrorKind::DuplicateProperty(kind.into()));
        }
        if let PropertyValue::Status(status) = property.value()
            && !self.statuses.contains(status)
        {
            return Err(ErrorKind::malformed(
                PropertyKind::Status,
                status.as_str(),
                format!("not a {} status", self.kind),
            ));
        }
        Ok(())
    }

    /// Checks required, exclusive, coupled and dependent properties.
    pub fn validate(&self, properties: &[Property]) -> Result<(), ValidationError> {
        let has = |kind: PropertyKind| properties.iter().any(|p| p.kind() == Some(kind));
        let error = |reason: ErrorKind, property: PropertyKind| {
            ValidationError::new(self.kind, reason).with_property(property)
        };

        for (kind, occurrence) in self.properties {
            if !occurrence.is_required() {
                continue;
            }
            let present = properties
                .iter()
                .any(|p| p.kind() == Some(*kind) && !p.is_empty());
            if !present {
                return Err(error(
                    ErrorKind::MissingRequiredProperty {
                        component: self.kind,
                        property: (*kind).into(),
                    },
                    *kind,
                ));
            }
        }

        for &(a, b) in self.exclusive {
            if has(a) && has(b) {
                return Err(error(ErrorKind::MutuallyExclusive(a.into(), b.into()), b));
            }
        }

        for &(a, b) in self.coupled {
            let (present, missing) = match (has(a), has(b)) {
                (true, false) => (a, b),
                (false, true) => (b, a),
                _ => continue,
            };
            return Err(error(
                ErrorKind::MissingRequiredProperty {
                    component: self.kind,
                    property: missing.into(),
                },
                present,
            ));
        }

        for &(a, b) in self.dependent {
            if has(a) && !has(b) {
                return Err(error(
                    ErrorKind::MissingRequiredProperty {
                        component: self.kind,
                        property: b.into(),
                    },
                    a,
                ));
            }
        }
        Ok(())
    }
}

pub(crate) static CALENDAR: ComponentRules = ComponentRules {
    kind: ComponentKind::Calendar,
    properties: &[
        (Version, Required),
        (ProdId, Required),
        (CalScale, Optional),
        (Method, Optional),
    ],
    exclusive: &[],
    coupled: &[],
    dependent: &[],
    statuses: &[],
};

pub(crate) static EVENT: ComponentRules = ComponentRules {
    kind: ComponentKind::Event,
    properties: &[
        (Uid, Required),
        (DtStamp, Required),
        (DtStart, Optional),
        (Class, Optional),
        (Created, Optional),
        (Description, Optional),
        (Geo, Optional),
        (LastModified, Optional),
        (Location, Optional),
        (Organizer, Optional),
        (Priority, Optional),
        (Sequence, Optional),
        (PropertyKind::Status, Optional),
        (Summary, Optional),
        (Transp, Optional),
        (Url, Optional),
        (RecurrenceId, Optional),
        (RRule, Optional),
        (DtEnd, Optional),
        (Duration, Optional),
        (Attach, Many),
        (Attendee, Many),
        (Categories, Many),
        (Comment, Many),
        (Contact, Many),
        (ExDate, Many),
        (RequestStatus, Many),
        (RelatedTo, Many),
        (Resources, Many),
        (RDate, Many),
    ],
    exclusive: &[(DtEnd, Duration)],
    coupled: &[],
    dependent: &[],
    statuses: &[Status::Tentative, Status::Confirmed, Status::Cancelled],
};

pub(crate) static TODO: ComponentRules = ComponentRules {
    kind: ComponentKind::Todo,
    properties: &[
        (Uid, Required),
        (DtStamp, Required),
        (Class, Optional),
        (Completed, Optional),
        (Created, Optional),
        (Description, Optional),
        (DtStart, Optional),
        (Geo, Optional),
        (LastModified, Optional),
        (Location, Optional),
        (Organizer, Optional),
        (PercentComplete, Optional),
        (Priority, Optional),
        (RecurrenceId, Optional),
        (Sequence, Optional),
        (PropertyKind::Status, Optional),
        (Summary, Optional),
        (Url, Optional),
        (RRule, Optional),
        (Due, Optional),
        (Duration, Optional),
        (Attach, Many),
        (Attendee, Many),
        (Categories, Many),
        (Comment, Many),
        (Contact, Many),
        (ExDate, Many),
        (RequestStatus, Many),
        (RelatedTo, Many),
        (Resources, Many),
        (RDate, Many),
    ],
    exclusive: &[(Due, Duration)],
    coupled: &[],
    dependent: &[(Duration, DtStart)],
    statuses: &[
        Status::NeedsAction,
        Status::Completed,
        Status::InProcess,
        Status::Cancelled,
    ],
};

pub(crate) static JOURNAL: ComponentRules = ComponentRules {
    kind: ComponentKind::Journal,
    properties: &[
        (Uid, Required),
        (DtStamp, Required),
        (Class, Optional),
        (Created, Optional),
        (DtStart, Optional),
        (LastModified, Optional),
        (Organizer, Optional),
        (RecurrenceId, Optional),
        (Sequence, Optional),
        (PropertyKind::Status, Optional),
        (Summary, Optional),
        (Url, Optional),
        (RRule, Optional),
        (Attach, Many),
        (Attendee, Many),
        (Categories, Many),
        (Comment, Many),
        (Contact, Many),
        (Description, Many),
        (ExDate, Many),
        (RelatedTo, Many),
        (RDate, Many),
        (RequestStatus, Many),
    ],
    exclusive: &[],
    coupled: &[],
    dependent: &[],
    statuses: &[Status::Draft, Status::Final, Status::Cancelled],
};

pub(crate) static FREEBUSY: ComponentRules = ComponentRules {
    kind: ComponentKind::FreeBusy,
    properties: &[
        (Uid, Required),
        (DtStamp, Required),
        (Contact, Optional),
        (DtStart, Optional),
        (DtEnd, Optional),
        (Organizer, Optional),
        (Url, Optional),
        (Attendee, Many),
        (Comment, Many),
        (FreeBusy, Many),
        (RequestStatus, Many),
    ],
    exclusive: &[],
    coupled: &[],
    dependent: &[],
    statuses: &[],
};

pub(crate) static TIMEZONE: ComponentRules = ComponentRules {
    kind: ComponentKind::Timezone,
    properties: &[(TzId, Required), (LastModified, Optional), (TzUrl, Optional)],
    exclusive: &[],
    coupled: &[],
    dependent: &[],
    statuses: &[],
};

const OBSERVANCE_PROPERTIES: &[(PropertyKind, Occurrence)] = &[
    (DtStart, Required),
    (TzOffsetTo, Required),
    (TzOffsetFrom, Required),
    (RRule, Optional),
    (Comment, Many),
    (RDate, Many),
    (TzName, Many),
];

pub(crate) static STANDARD: ComponentRules = ComponentRules {
    kind: ComponentKind::Standard,
    properties: OBSERVANCE_PROPERTIES,
    exclusive: &[],
    coupled: &[],
    dependent: &[],
    statuses: &[],
};

pub(crate) static DAYLIGHT: ComponentRules = ComponentRules {
    kind: ComponentKind::Daylight,
    properties: OBSERVANCE_PROPERTIES,
    exclusive: &[],
    coupled: &[],
    dependent: &[],
    statuses: &[],
};

pub(crate) static ALARM_AUDIO: ComponentRules = ComponentRules {
    kind: ComponentKind::Alarm,
    properties: &[
        (Action, Required),
        (Trigger, Required),
        (Duration, Optional),
        (Repeat, Optional),
        (Attach, Optional),
    ],
    exclusive: &[],
    coupled: &[(Duration, Repeat)],
    dependent: &[],
    statuses: &[],
};

pub(crate) static ALARM_DISPLAY: ComponentRules = ComponentRules {
    kind: ComponentKind::Alarm,
    properties: &[
        (Action, Required),
        (Description, Required),
        (Trigger, Required),
        (Duration, Optional),
        (Repeat, Optional),
    ],
    exclusive: &[],
    coupled: &[(Duration, Repeat)],
    dependent: &[],
    statuses: &[],
};

pub(crate) static ALARM_EMAIL: ComponentRules = ComponentRules {
    kind: ComponentKind::Alarm,
    properties: &[
        (Action, Required),
        (Description, Required),
        (Trigger, Required),
        (Summary, Required),
        (Attendee, OneOrMore),
        (Duration, Optional),
        (Repeat, Optional),
        (Attach, Many),
    ],
    exclusive: &[],
    coupled: &[(Duration, Repeat)],
    dependent: &[],
    statuses: &[],
};
