// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::keyword::{
    KW_CUTYPE_GROUP, KW_CUTYPE_INDIVIDUAL, KW_CUTYPE_RESOURCE, KW_CUTYPE_ROOM, KW_CUTYPE_UNKNOWN,
    KW_ENCODING_8BIT, KW_ENCODING_BASE64, KW_FBTYPE_BUSY, KW_FBTYPE_BUSY_TENTATIVE,
    KW_FBTYPE_BUSY_UNAVAILABLE, KW_FBTYPE_FREE, KW_PARTSTAT_ACCEPTED, KW_PARTSTAT_COMPLETED,
    KW_PARTSTAT_DECLINED, KW_PARTSTAT_DELEGATED, KW_PARTSTAT_IN_PROCESS, KW_PARTSTAT_NEEDS_ACTION,
    KW_PARTSTAT_TENTATIVE, KW_RANGE_THISANDFUTURE, KW_RELATED_END, KW_RELATED_START,
    KW_RELTYPE_CHILD, KW_RELTYPE_PARENT, KW_RELTYPE_SIBLING, KW_ROLE_CHAIR,
    KW_ROLE_NON_PARTICIPANT, KW_ROLE_OPT_PARTICIPANT, KW_ROLE_REQ_PARTICIPANT, extensible_enum,
    keyword_enum,
};

extensible_enum! {
    /// This parameter identifies the type of calendar user specified by the
    /// property.
    ///
    /// See RFC 5545 Section 3.2.3.
    pub enum CalendarUserType {
        /// An individual
        Individual => KW_CUTYPE_INDIVIDUAL,
        /// A group of individuals
        Group      => KW_CUTYPE_GROUP,
        /// A physical resource
        Resource   => KW_CUTYPE_RESOURCE,
        /// A room resource
        Room       => KW_CUTYPE_ROOM,
        /// Otherwise not known
        Unknown    => KW_CUTYPE_UNKNOWN,
    }
}

keyword_enum! {
    /// This parameter identifies the inline encoding used in a property value.
    pub enum Encoding {
        /// The default encoding is "8BIT", corresponding to a property value
        /// consisting of text.
        Bit8   => KW_ENCODING_8BIT,
        /// The "BASE64" encoding type corresponds to a property value encoded
        /// using the "BASE64" encoding defined in RFC 2045.
        Base64 => KW_ENCODING_BASE64,
    }
}

extensible_enum! {
    /// This parameter defines the free or busy time type for a time
    /// interval.
    pub enum FreeBusyType {
        /// The time interval is free for scheduling
        Free             => KW_FBTYPE_FREE,
        /// The time interval is busy because one or more events have been
        /// scheduled for that interval
        Busy             => KW_FBTYPE_BUSY,
        /// The time interval is busy and that the interval can not be scheduled.
        BusyUnavailable  => KW_FBTYPE_BUSY_UNAVAILABLE,
        /// The time interval is busy because one or more events have been
        /// tentatively scheduled for that interval.
        BusyTentative    => KW_FBTYPE_BUSY_TENTATIVE,
    }
}

extensible_enum! {
    /// This parameter identifies the participation status for the calendar
    /// user specified by the property value.
    #[expect(missing_docs)]
    pub enum ParticipationStatus {
        NeedsAction  => KW_PARTSTAT_NEEDS_ACTION,
        Accepted     => KW_PARTSTAT_ACCEPTED,
        Declined     => KW_PARTSTAT_DECLINED,
        Tentative    => KW_PARTSTAT_TENTATIVE,
        Delegated    => KW_PARTSTAT_DELEGATED,
        Completed    => KW_PARTSTAT_COMPLETED,
        InProcess    => KW_PARTSTAT_IN_PROCESS,
    }
}

keyword_enum! {
    /// This parameter specifies the effective range of recurrence instances
    /// from the instance specified by the recurrence identifier.
    pub enum RecurrenceIdRange {
        /// A range defined by the recurrence identifier and all subsequent
        /// instances
        ThisAndFuture => KW_RANGE_THISANDFUTURE,

        // The value "THISANDPRIOR" is deprecated by this revision of iCalendar
        // and MUST NOT be generated by applications.
    }
}

keyword_enum! {
    /// This parameter defines the relationship of the alarm trigger to the
    /// start or end of the calendar component.
    pub enum AlarmTriggerRelationship {
        /// The parameter value START will set the alarm to trigger off the
        /// start of the calendar component;
        Start => KW_RELATED_START,
        /// the parameter value END will set the alarm to trigger off the end
        /// of the calendar component.
        End   => KW_RELATED_END,
    }
}

extensible_enum! {
    /// This parameter specifies the type of hierarchical relationship
    /// associated with the calendar component specified by the property.
    pub enum RelationshipType {
        /// The referenced calendar component is a superior of calendar component
        Parent  => KW_RELTYPE_PARENT,
        /// The referenced calendar component is a subordinate of the calendar
        /// component
        Child   => KW_RELTYPE_CHILD,
        /// The referenced calendar component is a peer of the calendar component
        Sibling => KW_RELTYPE_SIBLING,
    }
}

extensible_enum! {
    /// This parameter specifies the participation role for the calendar user
    /// specified by the property.
    #[expect(missing_docs)]
    pub enum ParticipationRole {
        Chair             => KW_ROLE_CHAIR,
        ReqParticipant    => KW_ROLE_REQ_PARTICIPANT,
        OptParticipant    => KW_ROLE_OPT_PARTICIPANT,
        NonParticipant    => KW_ROLE_NON_PARTICIPANT,
    }
}
