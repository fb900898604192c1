// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Decode, validate and encode iCalendar (RFC 5545) data.
//!
//! Decoding runs in layers: [`syntax`] unfolds lines and splits each into a
//! [`ContentLine`], [`parameter`] and [`value`] give the parts their types,
//! [`property`] applies per-property rules, and the structural parser
//! assembles the [`component`] tree. [`formatter`] writes the tree back.
//!
//! ```
//! use calcore_ical::{decode_str, encode_to_string};
//!
//! let src = "\
//! BEGIN:VCALENDAR\r\n\
//! VERSION:2.0\r\n\
//! PRODID:-//Ex//EN\r\n\
//! BEGIN:VEVENT\r\n\
//! UID:a@b\r\n\
//! DTSTAMP:20200301T120000Z\r\n\
//! DTSTART:20200301T130000Z\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n\
//! ";
//! let calendar = decode_str(src).unwrap();
//! assert_eq!(calendar.validate(), Ok(()));
//! assert_eq!(encode_to_string(&calendar).unwrap(), src);
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

pub mod capability;
pub mod component;
pub mod error;
pub mod formatter;
pub mod keyword;
pub mod parameter;
mod parser;
pub mod property;
pub mod syntax;
pub mod value;

pub use crate::capability::{
    Capabilities, CapabilityError, DEFAULT_CAPABILITIES, DefaultCapabilities,
};
pub use crate::component::{
    Alarm, Calendar, CalendarComponent, ComponentKind, Event, FreeBusy, Journal, Observance,
    ObservanceKind, OtherComponent, PropertyList, Timezone, Todo,
};
pub use crate::error::{Error, ErrorKind, ValidationError};
pub use crate::formatter::{
    FoldingStyle, FormatOptions, Formatter, encode_to_string, encode_writer,
};
pub use crate::parameter::{
    AlarmTriggerRelationship, CalendarUserType, Encoding, FreeBusyType, Parameter, ParameterKind,
    Parameters, ParticipationRole, ParticipationStatus, RecurrenceIdRange, RelationshipType,
};
pub use crate::parser::{
    CancellationToken, DecodeOptions, Decoder, decode_reader, decode_str,
};
pub use crate::property::{
    AlarmAction, Classification, Geo, Property, PropertyKind, PropertyName, PropertyValue,
    RequestStatus, Status, TimeTransparency, Version, VersionNumber,
};
pub use crate::syntax::{ContentLine, RawParameter, content_lines};
pub use crate::value::{
    DateOrDateTime, RecurrenceFrequency, Uri, Value, ValueBinary, ValueDate, ValueDateTime,
    ValueDuration, ValueFloat, ValuePeriod, ValueRecurrenceRule, ValueText, ValueTime, ValueType,
    ValueUtcOffset, WeekDay, WeekDayNum,
};
