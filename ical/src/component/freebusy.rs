// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::component::rules::{self, ComponentRules};
use crate::component::{CalendarComponent, PropertyList, Rules, property_access};
use crate::error::{Error, ValidationError};
use crate::value::{ValueDateTime, ValueText};

/// `VFREEBUSY`, RFC 5545 Section 3.6.4.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreeBusy {
    properties: PropertyList,
}

impl FreeBusy {
    /// Creates a free/busy component with its required `UID` and `DTSTAMP`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dtstamp` is not in UTC.
    pub fn new(uid: impl Into<ValueText>, dtstamp: ValueDateTime) -> Result<Self, Error> {
        let mut freebusy = Self::default();
        freebusy.set_uid(uid.into())?;
        freebusy.set_dtstamp(dtstamp)?;
        Ok(freebusy)
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

impl Rules for FreeBusy {
    fn rules(&self) -> &'static ComponentRules {
        &rules::FREEBUSY
    }
}

impl From<FreeBusy> for CalendarComponent {
    fn from(freebusy: FreeBusy) -> Self {
        Self::FreeBusy(freebusy)
    }
}

property_access! {
    FreeBusy {
        one uid, set_uid => Uid;
        one dtstamp, set_dtstamp => DtStamp;
        one contact, set_contact => Contact;
        one dtstart, set_dtstart => DtStart;
        one dtend, set_dtend => DtEnd;
        one organizer, set_organizer => Organizer;
        one url, set_url => Url;
        many attendees, add_attendee => Attendee;
        many comments, add_comment => Comment;
        many periods, add_periods => FreeBusy;
        many request_statuses, add_request_status => RequestStatus;
    }
}
