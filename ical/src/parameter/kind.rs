// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::keyword::{
    KW_ALTREP, KW_CN, KW_CUTYPE, KW_DELEGATED_FROM, KW_DELEGATED_TO, KW_DIR, KW_ENCODING,
    KW_FBTYPE, KW_FMTTYPE, KW_LANGUAGE, KW_MEMBER, KW_PARTSTAT, KW_RANGE, KW_RELATED, KW_RELTYPE,
    KW_ROLE, KW_RSVP, KW_SENT_BY, KW_TZID, KW_VALUE, keyword_enum,
};

keyword_enum! {
    /// Kinds of iCalendar parameters registered by RFC 5545.
    #[expect(missing_docs)]
    pub enum ParameterKind {
        AltRep              => KW_ALTREP,
        CommonName          => KW_CN,
        CalendarUserType    => KW_CUTYPE,
        DelegatedFrom       => KW_DELEGATED_FROM,
        DelegatedTo         => KW_DELEGATED_TO,
        Directory           => KW_DIR,
        Encoding            => KW_ENCODING,
        FormatType          => KW_FMTTYPE,
        FreeBusyType        => KW_FBTYPE,
        Language            => KW_LANGUAGE,
        Member              => KW_MEMBER,
        ParticipationStatus => KW_PARTSTAT,
        Range               => KW_RANGE,
        Related             => KW_RELATED,
        RelationshipType    => KW_RELTYPE,
        Role                => KW_ROLE,
        Rsvp                => KW_RSVP,
        SentBy              => KW_SENT_BY,
        TzId                => KW_TZID,
        Value               => KW_VALUE,
    }
}

impl ParameterKind {
    /// Whether the parameter takes a comma-separated list of values.
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::DelegatedFrom | Self::DelegatedTo | Self::Member)
    }
}
