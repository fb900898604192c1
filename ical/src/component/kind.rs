// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::keyword::{
    KW_DAYLIGHT, KW_STANDARD, KW_VALARM, KW_VCALENDAR, KW_VEVENT, KW_VFREEBUSY, KW_VJOURNAL,
    KW_VTIMEZONE, KW_VTODO, keyword_enum,
};

keyword_enum! {
    /// Kinds of iCalendar components, RFC 5545 Section 3.6.
    pub enum ComponentKind {
        /// `VCALENDAR`, the iCalendar object itself.
        Calendar => KW_VCALENDAR,
        /// `VEVENT`
        Event    => KW_VEVENT,
        /// `VTODO`
        Todo     => KW_VTODO,
        /// `VJOURNAL`
        Journal  => KW_VJOURNAL,
        /// `VFREEBUSY`
        FreeBusy => KW_VFREEBUSY,
        /// `VTIMEZONE`
        Timezone => KW_VTIMEZONE,
        /// `STANDARD`, a time zone observance.
        Standard => KW_STANDARD,
        /// `DAYLIGHT`, a time zone observance.
        Daylight => KW_DAYLIGHT,
        /// `VALARM`
        Alarm    => KW_VALARM,
    }
}

impl ComponentKind {
    /// Whether `child` may be nested directly inside this component.
    #[must_use]
    pub const fn allows_child(self, child: Self) -> bool {
        matches!(
            (self, child),
            (
                Self::Calendar,
                Self::Event | Self::Todo | Self::Journal | Self::FreeBusy | Self::Timezone
            ) | (Self::Event | Self::Todo, Self::Alarm)
                | (Self::Timezone, Self::Standard | Self::Daylight)
        )
    }
}
