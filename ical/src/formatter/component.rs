// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting, RFC 5545 Section 3.6.
//!
//! Properties are written in build order, followed by sub-components.

use std::io::{self, Write};

use crate::component::{
    Alarm, Calendar, CalendarComponent, ComponentKind, Event, OtherComponent, PropertyList,
    Timezone, Todo,
};
use crate::formatter::Formatter;
use crate::formatter::property::{write_content_line, write_property};
use crate::keyword::{KW_BEGIN, KW_END};

/// Format a `VCALENDAR`.
pub fn write_calendar<W: Write>(f: &mut Formatter<W>, calendar: &Calendar) -> io::Result<()> {
    with_block(f, ComponentKind::Calendar.as_str(), |f| {
        write_properties(f, calendar.properties())?;
        for component in calendar.components() {
            write_calendar_component(f, component)?;
        }
        Ok(())
    })
}

fn write_calendar_component<W: Write>(
    f: &mut Formatter<W>,
    component: &CalendarComponent,
) -> io::Result<()> {
    match component {
        CalendarComponent::Event(event) => write_event(f, event),
        CalendarComponent::Todo(todo) => write_todo(f, todo),
        CalendarComponent::Journal(journal) => {
            with_block(f, ComponentKind::Journal.as_str(), |f| {
                write_properties(f, journal.properties())
            })
        }
        CalendarComponent::FreeBusy(freebusy) => {
            with_block(f, ComponentKind::FreeBusy.as_str(), |f| {
                write_properties(f, freebusy.properties())
            })
        }
        CalendarComponent::Timezone(tz) => write_timezone(f, tz),
        CalendarComponent::Other(other) => write_other(f, other),
    }
}

fn write_event<W: Write>(f: &mut Formatter<W>, event: &Event) -> io::Result<()> {
    with_block(f, ComponentKind::Event.as_str(), |f| {
        write_properties(f, event.properties())?;
        write_alarms(f, event.alarms())
    })
}

fn write_todo<W: Write>(f: &mut Formatter<W>, todo: &Todo) -> io::Result<()> {
    with_block(f, ComponentKind::Todo.as_str(), |f| {
        write_properties(f, todo.properties())?;
        write_alarms(f, todo.alarms())
    })
}

fn write_alarms<W: Write>(f: &mut Formatter<W>, alarms: &[Alarm]) -> io::Result<()> {
    for alarm in alarms {
        with_block(f, ComponentKind::Alarm.as_str(), |f| {
            write_properties(f, alarm.properties())
        })?;
    }
    Ok(())
}

fn write_timezone<W: Write>(f: &mut Formatter<W>, tz: &Timezone) -> io::Result<()> {
    with_block(f, ComponentKind::Timezone.as_str(), |f| {
        write_properties(f, tz.properties())?;
        for observance in tz.observances() {
            with_block(f, observance.kind().component_kind().as_str(), |f| {
                write_properties(f, observance.properties())
            })?;
        }
        Ok(())
    })
}

fn write_other<W: Write>(f: &mut Formatter<W>, other: &OtherComponent) -> io::Result<()> {
    with_block(f, &other.name, |f| {
        for line in &other.lines {
            write_content_line(f, line)?;
        }
        for child in &other.children {
            write_other(f, child)?;
        }
        Ok(())
    })
}

fn write_properties<W: Write>(f: &mut Formatter<W>, properties: &PropertyList) -> io::Result<()> {
    for property in properties {
        write_property(f, property)?;
    }
    Ok(())
}

fn with_block<W: Write, F: FnOnce(&mut Formatter<W>) -> io::Result<()>>(
    f: &mut Formatter<W>,
    name: &str,
    write_content: F,
) -> io::Result<()> {
    write!(f, "{KW_BEGIN}:{name}")?;
    f.writeln()?;

    write_content(f)?;

    write!(f, "{KW_END}:{name}")?;
    f.writeln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::FormatOptions;
    use crate::parser::decode_str;

    #[test]
    fn writes_nested_blocks_in_order() {
        let src = "BEGIN:VCALENDAR\r\n\
                   VERSION:2.0\r\n\
                   PRODID:-//Ex//EN\r\n\
                   BEGIN:VTODO\r\n\
                   UID:t@b\r\n\
                   DTSTAMP:20200301T120000Z\r\n\
                   BEGIN:VALARM\r\n\
                   ACTION:AUDIO\r\n\
                   TRIGGER:-PT15M\r\n\
                   END:VALARM\r\n\
                   END:VTODO\r\n\
                   BEGIN:X-VENDOR\r\n\
                   X-A:1\r\n\
                   END:X-VENDOR\r\n\
                   END:VCALENDAR\r\n";
        let calendar = decode_str(src).unwrap();
        let mut buffer = Vec::new();
        write_calendar(&mut Formatter::new(&mut buffer, FormatOptions::default()), &calendar)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), src);
    }
}
