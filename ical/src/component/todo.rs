// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::component::rules::{self, ComponentRules};
use crate::component::{Alarm, CalendarComponent, PropertyList, Rules, property_access};
use crate::error::{Error, ValidationError};
use crate::value::{ValueDateTime, ValueText};

/// `VTODO`, RFC 5545 Section 3.6.2.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Todo {
    properties: PropertyList,
    alarms: Vec<Alarm>,
}

impl Todo {
    /// Creates a to-do with its required `UID` and `DTSTAMP`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dtstamp` is not in UTC.
    pub fn new(uid: impl Into<ValueText>, dtstamp: ValueDateTime) -> Result<Self, Error> {
        let mut todo = Self::default();
        todo.set_uid(uid.into())?;
        todo.set_dtstamp(dtstamp)?;
        Ok(todo)
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

impl Rules for Todo {
    fn rules(&self) -> &'static ComponentRules {
        &rules::TODO
    }
}

impl From<Todo> for CalendarComponent {
    fn from(todo: Todo) -> Self {
        Self::Todo(todo)
    }
}

property_access! {
    Todo {
        one uid, set_uid => Uid;
        one dtstamp, set_dtstamp => DtStamp;
        one dtstart, set_dtstart => DtStart;
        one due, set_due => Due;
        one duration, set_duration => Duration;
        one class, set_class => Class;
        one completed, set_completed => Completed;
        one created, set_created => Created;
        one description, set_description => Description;
        one geo, set_geo => Geo;
        one last_modified, set_last_modified => LastModified;
        one location, set_location => Location;
        one organizer, set_organizer => Organizer;
        one percent_complete, set_percent_complete => PercentComplete;
        one priority, set_priority => Priority;
        one recurrence_id, set_recurrence_id => RecurrenceId;
        one sequence, set_sequence => Sequence;
        one status, set_status => Status;
        one summary, set_summary => Summary;
        one url, set_url => Url;
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
