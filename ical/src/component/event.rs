// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::component::rules::{self, ComponentRules};
use crate::component::{Alarm, CalendarComponent, PropertyList, Rules, property_access};
use crate::error::{Error, ValidationError};
use crate::value::{ValueDateTime, ValueText};

/// `VEVENT`, RFC 5545 Section 3.6.1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    properties: PropertyList,
    alarms: Vec<Alarm>,
}

impl Event {
    /// Creates an event with its required `UID` and `DTSTAMP`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dtstamp` is not in UTC.
    pub fn new(uid: impl Into<ValueText>, dtstamp: ValueDateTime) -> Result<Self, Error> {
        let mut event = Self::default();
        event.set_uid(uid.into())?;
        event.set_dtstamp(dtstamp)?;
        Ok(event)
    }

    /// The alarms in build order.
    #[must_use]
    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    /// Adds an alarm.
    ///
    /// # Errors
    ///
    /// Returns an error if the alarm is incomplete.
    pub fn add_alarm(&mut self, alarm: Alarm) -> Result<(), Error> {
        alarm.validate()?;
        self.alarms.push(alarm);
        Ok(())
    }

    pub(crate) fn push_alarm(&mut self, alarm: Alarm) {
        self.alarms.push(alarm);
    }

    /// Checks required properties, exclusions and the alarms.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.properties.validate(self.rules())?;
        self.alarms.iter().try_for_each(Alarm::validate)
    }
}

impl Rules for Event {
    fn rules(&self) -> &'static ComponentRules {
        &rules::EVENT
    }
}

impl From<Event> for CalendarComponent {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

property_access! {
    Event {
        one uid, set_uid => Uid;
        one dtstamp, set_dtstamp => DtStamp;
        one dtstart, set_dtstart => DtStart;
        one dtend, set_dtend => DtEnd;
        one duration, set_duration => Duration;
        one class, set_class => Class;
        one created, set_created => Created;
        one description, set_description => Description;
        one geo, set_geo => Geo;
        one last_modified, set_last_modified => LastModified;
        one location, set_location => Location;
        one organizer, set_organizer => Organizer;
        one priority, set_priority => Priority;
        one sequence, set_sequence => Sequence;
        one status, set_status => Status;
        one summary, set_summary => Summary;
        one transp, set_transp => Transp;
        one url, set_url => Url;
        one recurrence_id, set_recurrence_id => RecurrenceId;
        one rrule, set_rrule => RRule;
        many attachments, add_attachment => Attach;
        many attendees, add_attendee => Attendee;
        many categories, add_categories => Categories;
        many comments, add_comment => Comment;
        many contacts, add_contact => Contact;
        many exdates, add_exdate => ExDate;
        many request_statuses, add_request_status => RequestStatus;
        many related_to, add_related_to => RelatedTo;
        many resources, add_resources => Resources;
        many rdates, add_rdate => RDate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;
    use crate::error::ErrorKind;
    use crate::property::{PropertyKind, Status};
    use crate::value::{ValueDate, ValueDuration, ValueTime};

    fn utc(hour: i8) -> ValueDateTime {
        ValueDateTime::new(
            ValueDate::new(2020, 3, 1).unwrap(),
            ValueTime::new(hour, 0, 0, true).unwrap(),
        )
    }

    #[test]
    fn builds_in_required_first_order() {
        let mut event = Event::new("a@b", utc(12)).unwrap();
        event.set_dtstart(utc(13)).unwrap();
        event.set_summary("Lunch").unwrap();
        let kinds: Vec<_> = event.properties().iter().filter_map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            [
                PropertyKind::Uid,
                PropertyKind::DtStamp,
                PropertyKind::DtStart,
                PropertyKind::Summary
            ]
        );
        assert_eq!(event.validate(), Ok(()));
    }

    #[test]
    fn rejects_end_with_duration() {
        let mut event = Event::new("a@b", utc(12)).unwrap();
        event.set_dtend(utc(14)).unwrap();
        event.set_duration(ValueDuration::from_seconds(3600)).unwrap();
        let err = event.validate().unwrap_err();
        assert_eq!(
            err.reason,
            ErrorKind::MutuallyExclusive(PropertyKind::DtEnd.into(), PropertyKind::Duration.into())
        );
    }

    #[test]
    fn rejects_todo_status() {
        let mut event = Event::new("a@b", utc(12)).unwrap();
        let err = event.set_status(Status::NeedsAction).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MalformedValue { .. }));
        assert_eq!(err.component(), Some(ComponentKind::Event));
        event.set_status(Status::Confirmed).unwrap();
    }

    #[test]
    fn rejects_properties_of_other_components() {
        let mut event = Event::new("a@b", utc(12)).unwrap();
        let err = event
            .add(crate::property::Property::new(PropertyKind::PercentComplete, 10).unwrap())
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::PropertyNotAllowed { .. }));
    }
}
