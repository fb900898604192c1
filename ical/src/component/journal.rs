// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::component::rules::{self, ComponentRules};
use crate::component::{CalendarComponent, PropertyList, Rules, property_access};
use crate::error::{Error, ValidationError};
use crate::value::{ValueDateTime, ValueText};

/// `VJOURNAL`, RFC 5545 Section 3.6.3.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    properties: PropertyList,
}

impl Journal {
    /// Creates a journal entry with its required `UID` and `DTSTAMP`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dtstamp` is not in UTC.
    pub fn new(uid: impl Into<ValueText>, dtstamp: ValueDateTime) -> Result<Self, Error> {
        let mut journal = Self::default();
        journal.set_uid(uid.into())?;
        journal.set_dtstamp(dtstamp)?;
        Ok(journal)
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

impl Rules for Journal {
    fn rules(&self) -> &'static ComponentRules {
        &rules::JOURNAL
    }
}

impl From<Journal> for CalendarComponent {
    fn from(journal: Journal) -> Self {
        Self::Journal(journal)
    }
}

property_access! {
    Journal {
        one uid, set_uid => Uid;
        one dtstamp, set_dtstamp => DtStamp;
        one dtstart, set_dtstart => DtStart;
        one class, set_class => Class;
        one created, set_created => Created;
        one last_modified, set_last_modified => LastModified;
        one organizer, set_organizer => Organizer;
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
        many descriptions, add_description => Description;
        many exdates, add_exdate => ExDate;
        many related_to, add_related_to => RelatedTo;
        many rdates, add_rdate => RDate;
        many request_statuses, add_request_status => RequestStatus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ValueDate, ValueTime};

    #[test]
    fn allows_several_descriptions() {
        let stamp = ValueDateTime::new(
            ValueDate::new(2022, 1, 2).unwrap(),
            ValueTime::new(0, 0, 0, true).unwrap(),
        );
        let mut journal = Journal::new("j@b", stamp).unwrap();
        journal.add_description("first").unwrap();
        journal.add_description("second").unwrap();
        assert_eq!(journal.descriptions().count(), 2);
        assert_eq!(journal.validate(), Ok(()));
    }
}
