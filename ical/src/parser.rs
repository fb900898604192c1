// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Structural parser: content lines to calendars.
//!
//! The parser walks the content-line stream once, keeping the open
//! components on the call stack. Properties are decoded as they are read and
//! collected per component; when a component closes, its properties are
//! added through the same insertion path the builders use, which rejects
//! duplicate singletons and properties the component does not permit, and
//! the component is validated. Errors carry the physical line of the
//! offending content line, or of the `END` line when the problem is an
//! absence.

use std::fmt;
use std::io::Read;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::capability::{Capabilities, DEFAULT_CAPABILITIES};
use crate::component::{
    Alarm, Calendar, CalendarComponent, ComponentKind, Event, FreeBusy, Journal, Observance,
    ObservanceKind, OtherComponent, Timezone, Todo,
};
use crate::error::{Error, ErrorKind, ValidationError};
use crate::keyword::{KW_BEGIN, KW_END};
use crate::property::{Property, PropertyName};
use crate::syntax::{ContentLine, content_lines, is_x_name};

/// A flag shared between a decoder and the code that may cancel it.
///
/// The decoder checks the flag before each logical line.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Creates a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Decoder configuration.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Require every `TZID` parameter to name a `VTIMEZONE` of the same
    /// calendar or a zone known to the capabilities.
    ///
    /// Default: `false`.
    pub resolve_timezones: bool,

    /// Checked before each logical line.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub cancellation: Option<CancellationToken>,
}

impl DecodeOptions {
    /// Set whether `TZID` references are resolved.
    #[must_use]
    pub const fn resolve_timezones(mut self, resolve: bool) -> Self {
        self.resolve_timezones = resolve;
        self
    }

    /// Set the cancellation token.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

/// Decodes iCalendar text into [`Calendar`]s.
///
/// # Example
///
/// ```
/// # use calcore_ical::{DEFAULT_CAPABILITIES, Decoder};
/// let src = "\
/// BEGIN:VCALENDAR\r\n\
/// VERSION:2.0\r\n\
/// PRODID:-//Ex//EN\r\n\
/// BEGIN:VEVENT\r\n\
/// UID:a@b\r\n\
/// DTSTAMP:20200301T120000Z\r\n\
/// DTSTART:20200301T130000Z\r\n\
/// END:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let calendar = Decoder::new(&DEFAULT_CAPABILITIES).decode(src).unwrap();
/// assert_eq!(calendar.events().count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'c> {
    caps: &'c dyn Capabilities,
    options: DecodeOptions,
}

impl<'c> Decoder<'c> {
    /// Creates a decoder with default options.
    #[must_use]
    pub fn new(caps: &'c dyn Capabilities) -> Self {
        Self {
            caps,
            options: DecodeOptions::default(),
        }
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Decodes exactly one calendar.
    ///
    /// # Errors
    ///
    /// Returns the first error, annotated with its physical line.
    #[tracing::instrument(skip_all, fields(len = src.len()))]
    pub fn decode(&self, src: &str) -> Result<Calendar, Error> {
        self.decode_lines(content_lines(src))
    }

    /// Decodes a stream of one or more calendars.
    ///
    /// # Errors
    ///
    /// Returns the first error, annotated with its physical line.
    #[tracing::instrument(skip_all, fields(len = src.len()))]
    pub fn decode_all(&self, src: &str) -> Result<Vec<Calendar>, Error> {
        Session::new(self, content_lines(src)).document(false)
    }

    /// Decodes exactly one calendar from assembled content lines.
    ///
    /// # Errors
    ///
    /// Returns the first error, annotated with its physical line.
    pub fn decode_lines<I>(&self, lines: I) -> Result<Calendar, Error>
    where
        I: IntoIterator<Item = Result<ContentLine, Error>>,
    {
        let calendars = Session::new(self, lines.into_iter()).document(true)?;
        calendars
            .into_iter()
            .next()
            .ok_or_else(|| Error::new(ErrorKind::UnexpectedEof))
    }

    /// Reads UTF-8 text and decodes exactly one calendar.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Io`] if reading fails or the input is not UTF-8,
    /// otherwise the first decoding error.
    pub fn decode_reader(&self, mut reader: impl Read) -> Result<Calendar, Error> {
        let mut src = String::new();
        reader.read_to_string(&mut src)?;
        self.decode(&src)
    }
}

/// Decodes exactly one calendar with the default capabilities.
///
/// # Errors
///
/// Returns the first error, annotated with its physical line.
pub fn decode_str(src: &str) -> Result<Calendar, Error> {
    Decoder::new(&DEFAULT_CAPABILITIES).decode(src)
}

/// Reads and decodes exactly one calendar with the default capabilities.
///
/// # Errors
///
/// Returns [`ErrorKind::Io`] if reading fails, otherwise the first decoding
/// error.
pub fn decode_reader(reader: impl Read) -> Result<Calendar, Error> {
    Decoder::new(&DEFAULT_CAPABILITIES).decode_reader(reader)
}

/// The collected content of one component, before it is built.
#[derive(Debug, Default)]
struct Body {
    end: usize,
    properties: Vec<(usize, Property)>,
    children: Vec<Child>,
}

#[derive(Debug)]
enum Child {
    Known {
        kind: ComponentKind,
        line: usize,
        body: Body,
    },
    Other {
        line: usize,
        component: OtherComponent,
    },
}

/// Property lines of a component, used to place validation errors.
#[derive(Debug)]
struct Located {
    lines: Vec<(PropertyName, usize)>,
    end: usize,
}

impl Body {
    fn locate(&self) -> Located {
        Located {
            lines: self
                .properties
                .iter()
                .map(|(line, p)| (p.name().clone(), *line))
                .collect(),
            end: self.end,
        }
    }
}

impl Located {
    fn error(&self, err: ValidationError) -> Error {
        let line = err
            .property
            .as_ref()
            .and_then(|name| self.lines.iter().find(|(n, _)| n == name))
            .map_or(self.end, |(_, line)| *line);
        Error::from(err).at_line(line)
    }
}

struct Session<'d, 'c, I> {
    decoder: &'d Decoder<'c>,
    lines: I,
    tzids: Vec<(usize, String)>,
}

impl<'d, 'c, I> Session<'d, 'c, I>
where
    I: Iterator<Item = Result<ContentLine, Error>>,
{
    const fn new(decoder: &'d Decoder<'c>, lines: I) -> Self {
        Self {
            decoder,
            lines,
            tzids: Vec::new(),
        }
    }

    fn next_line(&mut self) -> Result<Option<ContentLine>, Error> {
        if let Some(token) = &self.decoder.options.cancellation
            && token.is_cancelled()
        {
            return Err(Error::new(ErrorKind::Cancelled));
        }
        self.lines.next().transpose()
    }

    fn document(mut self, single: bool) -> Result<Vec<Calendar>, Error> {
        let mut calendars = Vec::new();
        while let Some(line) = self.next_line()? {
            if !calendars.is_empty() && (single || line.name != KW_BEGIN) {
                return Err(Error::new(ErrorKind::TrailingContent).at_line(line.line));
            }
            if line.name != KW_BEGIN {
                return Err(Error::new(ErrorKind::InvalidToken(line.name)).at_line(line.line));
            }
            let name = line
                .single_value_upper()
                .map_err(|e| Error::new(e).at_line(line.line))?;
            match ComponentKind::from_keyword(&name) {
                Some(ComponentKind::Calendar) => {
                    let body = self.body(ComponentKind::Calendar, line.line)?;
                    calendars.push(self.calendar(body)?);
                }
                Some(_) => {
                    let err = ErrorKind::MisplacedComponent {
                        parent: "document".to_string(),
                        child: name,
                    };
                    return Err(Error::new(err).at_line(line.line));
                }
                None if is_x_name(&name) => {
                    let err = ErrorKind::MisplacedComponent {
                        parent: "document".to_string(),
                        child: name,
                    };
                    return Err(Error::new(err).at_line(line.line));
                }
                None => {
                    return Err(Error::new(ErrorKind::UnknownComponent(name)).at_line(line.line));
                }
            }
        }

        if calendars.is_empty() {
            return Err(Error::new(ErrorKind::UnexpectedEof));
        }
        Ok(calendars)
    }

    /// Collects a component up to its `END` line.
    fn body(&mut self, kind: ComponentKind, begin: usize) -> Result<Body, Error> {
        tracing::debug!(component = %kind, line = begin, "begin component");
        let mut body = Body::default();
        loop {
            let Some(line) = self.next_line()? else {
                let err = ErrorKind::NoEndOfComponent(kind.to_string());
                return Err(Error::new(err).at_line(begin).in_component(kind));
            };
            let number = line.line;
            let at = move |e: ErrorKind| Error::new(e).at_line(number).in_component(kind);

            match line.name.as_str() {
                KW_BEGIN => {
                    let name = line.single_value_upper().map_err(at)?;
                    let child = match ComponentKind::from_keyword(&name) {
                        Some(child) if kind.allows_child(child) => Child::Known {
                            kind: child,
                            line: number,
                            body: self.body(child, number)?,
                        },
                        None if kind == ComponentKind::Calendar && is_x_name(&name) => {
                            Child::Other {
                                line: number,
                                component: self.other(name, number)?,
                            }
                        }
                        Some(_) => {
                            return Err(at(ErrorKind::MisplacedComponent {
                                parent: kind.to_string(),
                                child: name,
                            }));
                        }
                        None if is_x_name(&name) => {
                            return Err(at(ErrorKind::MisplacedComponent {
                                parent: kind.to_string(),
                                child: name,
                            }));
                        }
                        None => return Err(at(ErrorKind::UnknownComponent(name))),
                    };
                    body.children.push(child);
                }
                KW_END => {
                    let name = line.single_value_upper().map_err(at)?;
                    if name != kind.as_str() {
                        return Err(at(ErrorKind::MismatchedEnd {
                            expected: kind.to_string(),
                            found: name,
                        }));
                    }
                    tracing::debug!(component = %kind, line = number, "end component");
                    body.end = number;
                    return Ok(body);
                }
                _ => {
                    let property = Property::decode(&line, self.decoder.caps).map_err(|e| {
                        at(e).for_property(&PropertyName::parse(&line.name))
                    })?;
                    tracing::trace!(property = %property.name(), line = number, "property");
                    if self.decoder.options.resolve_timezones
                        && let Some(tzid) = property.parameters().tzid()
                    {
                        self.tzids.push((number, tzid.to_string()));
                    }
                    body.properties.push((number, property));
                }
            }
        }
    }

    /// Collects an experimental component without interpreting it.
    fn other(&mut self, name: String, begin: usize) -> Result<OtherComponent, Error> {
        tracing::debug!(component = %name, line = begin, "begin experimental component");
        let mut component = OtherComponent::new(name);
        loop {
            let Some(mut line) = self.next_line()? else {
                let err = ErrorKind::NoEndOfComponent(component.name);
                return Err(Error::new(err).at_line(begin));
            };
            let number = line.line;
            let at = move |e: ErrorKind| Error::new(e).at_line(number);
            match line.name.as_str() {
                KW_BEGIN => {
                    let name = line.single_value_upper().map_err(at)?;
                    component.children.push(self.other(name, number)?);
                }
                KW_END => {
                    let name = line.single_value_upper().map_err(at)?;
                    if name != component.name {
                        return Err(at(ErrorKind::MismatchedEnd {
                            expected: component.name,
                            found: name,
                        }));
                    }
                    return Ok(component);
                }
                _ => {
                    line.line = 0;
                    component.lines.push(line);
                }
            }
        }
    }

    fn calendar(&mut self, body: Body) -> Result<Calendar, Error> {
        let located = body.locate();
        let mut calendar = Calendar::default();
        insert_all(ComponentKind::Calendar, body.properties, |p| calendar.insert(p))?;

        let mut event_lines = Vec::new();
        for child in body.children {
            let component = match child {
                Child::Known { kind, line, body } => match kind {
                    ComponentKind::Event => {
                        event_lines.push(line);
                        CalendarComponent::Event(event(body)?)
                    }
                    ComponentKind::Todo => CalendarComponent::Todo(todo(body)?),
                    ComponentKind::Journal => CalendarComponent::Journal(journal(body)?),
                    ComponentKind::FreeBusy => CalendarComponent::FreeBusy(freebusy(body)?),
                    ComponentKind::Timezone => CalendarComponent::Timezone(timezone(body)?),
                    kind => return Err(misplaced(ComponentKind::Calendar, kind, line)),
                },
                Child::Other { component, .. } => CalendarComponent::Other(component),
            };
            calendar.push_component(component);
        }

        calendar.validate().map_err(|err| {
            if err.component == ComponentKind::Calendar {
                return located.error(err);
            }
            // Components were validated when they closed, so only the
            // calendar-wide start requirement can remain.
            let line = calendar
                .events()
                .zip(&event_lines)
                .find(|(event, _)| event.dtstart().is_none())
                .map_or(located.end, |(_, line)| *line);
            Error::from(err).at_line(line)
        })?;

        for (line, tzid) in std::mem::take(&mut self.tzids) {
            if calendar.timezone(&tzid).is_none() && self.decoder.caps.resolve_tz(&tzid).is_err() {
                return Err(Error::new(ErrorKind::UnknownTimezone(tzid))
                    .at_line(line)
                    .in_component(ComponentKind::Calendar));
            }
        }
        Ok(calendar)
    }
}

fn insert_all(
    kind: ComponentKind,
    properties: Vec<(usize, Property)>,
    mut insert: impl FnMut(Property) -> Result<(), ErrorKind>,
) -> Result<(), Error> {
    for (line, property) in properties {
        let name = property.name().clone();
        insert(property).map_err(|e| {
            Error::new(e)
                .at_line(line)
                .in_component(kind)
                .for_property(&name)
        })?;
    }
    Ok(())
}

fn misplaced(parent: ComponentKind, child: impl fmt::Display, line: usize) -> Error {
    let err = ErrorKind::MisplacedComponent {
        parent: parent.to_string(),
        child: child.to_string(),
    };
    Error::new(err).at_line(line).in_component(parent)
}

fn alarms(parent: ComponentKind, children: Vec<Child>) -> Result<Vec<Alarm>, Error> {
    children
        .into_iter()
        .map(|child| match child {
            Child::Known {
                kind: ComponentKind::Alarm,
                body,
                ..
            } => alarm(body),
            Child::Known { kind, line, .. } => Err(misplaced(parent, kind, line)),
            Child::Other { line, component } => Err(misplaced(parent, component.name, line)),
        })
        .collect()
}

fn alarm(body: Body) -> Result<Alarm, Error> {
    let located = body.locate();
    let alarm = Alarm::from_properties(body.properties).map_err(|e| e.at_line(located.end))?;
    alarm.validate().map_err(|e| located.error(e))?;
    Ok(alarm)
}

fn event(body: Body) -> Result<Event, Error> {
    let located = body.locate();
    let mut event = Event::default();
    insert_all(ComponentKind::Event, body.properties, |p| event.insert(p))?;
    for alarm in alarms(ComponentKind::Event, body.children)? {
        event.push_alarm(alarm);
    }
    event.validate().map_err(|e| located.error(e))?;
    Ok(event)
}

fn todo(body: Body) -> Result<Todo, Error> {
    let located = body.locate();
    let mut todo = Todo::default();
    insert_all(ComponentKind::Todo, body.properties, |p| todo.insert(p))?;
    for alarm in alarms(ComponentKind::Todo, body.children)? {
        todo.push_alarm(alarm);
    }
    todo.validate().map_err(|e| located.error(e))?;
    Ok(todo)
}

fn journal(body: Body) -> Result<Journal, Error> {
    let located = body.locate();
    let mut journal = Journal::default();
    insert_all(ComponentKind::Journal, body.properties, |p| journal.insert(p))?;
    journal.validate().map_err(|e| located.error(e))?;
    Ok(journal)
}

fn freebusy(body: Body) -> Result<FreeBusy, Error> {
    let located = body.locate();
    let mut freebusy = FreeBusy::default();
    insert_all(ComponentKind::FreeBusy, body.properties, |p| freebusy.insert(p))?;
    freebusy.validate().map_err(|e| located.error(e))?;
    Ok(freebusy)
}

fn timezone(body: Body) -> Result<Timezone, Error> {
    let located = body.locate();
    let mut tz = Timezone::default();
    insert_all(ComponentKind::Timezone, body.properties, |p| tz.insert(p))?;
    for child in body.children {
        let (kind, line, body) = match child {
            Child::Known { kind, line, body } => (kind, line, body),
            Child::Other { line, component } => {
                return Err(misplaced(ComponentKind::Timezone, component.name, line));
            }
        };
        let Some(observance_kind) = ObservanceKind::from_component_kind(kind) else {
            return Err(misplaced(ComponentKind::Timezone, kind, line));
        };
        let observed = body.locate();
        let mut observance = Observance::empty(observance_kind);
        insert_all(kind, body.properties, |p| observance.insert(p))?;
        observance.validate().map_err(|e| observed.error(e))?;
        tz.push_observance(observance);
    }
    tz.validate().map_err(|e| located.error(e))?;
    Ok(tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyKind;

    fn calendar(body: &str) -> String {
        format!("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Ex//EN\r\n{body}END:VCALENDAR\r\n")
    }

    fn event(extra: &str) -> String {
        calendar(&format!(
            "BEGIN:VEVENT\r\nUID:a@b\r\nDTSTAMP:20200301T120000Z\r\n\
             DTSTART:20200301T130000Z\r\n{extra}END:VEVENT\r\n"
        ))
    }

    #[test]
    fn decodes_minimal_event() {
        let calendar = decode_str(&event("")).unwrap();
        let event = calendar.events().next().unwrap();
        assert_eq!(
            event.uid().and_then(Property::text).map(crate::value::ValueText::as_str),
            Some("a@b")
        );
        assert_eq!(calendar.validate(), Ok(()));
    }

    #[rustfmt::skip]
    #[test]
    fn reports_structural_errors() {
        let fail_cases = [
            ("",                                                                 None),
            ("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n",                               Some(1)),
            ("BEGIN:VCALENDAR\r\nEND:VEVENT\r\n",                                Some(2)),
            ("BEGIN:VEVENT\r\nEND:VEVENT\r\n",                                   Some(1)),
            ("BEGIN:FOO\r\nEND:FOO\r\n",                                         Some(1)),
            ("SUMMARY:x\r\n",                                                    Some(1)),
        ];
        for (src, line) in fail_cases {
            let err = decode_str(src).unwrap_err();
            assert_eq!(err.line(), line, "{src:?}: {err}");
        }

        assert!(matches!(
            decode_str("BEGIN:VCALENDAR\r\nEND:VEVENT\r\n").unwrap_err().kind(),
            ErrorKind::MismatchedEnd { .. }
        ));
        assert!(matches!(
            decode_str("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n").unwrap_err().kind(),
            ErrorKind::NoEndOfComponent(name) if name == "VCALENDAR"
        ));
        assert!(matches!(
            decode_str("BEGIN:VEVENT\r\nEND:VEVENT\r\n").unwrap_err().kind(),
            ErrorKind::MisplacedComponent { .. }
        ));
        assert!(matches!(
            decode_str("BEGIN:FOO\r\nEND:FOO\r\n").unwrap_err().kind(),
            ErrorKind::UnknownComponent(name) if name == "FOO"
        ));
    }

    #[test]
    fn rejects_trailing_content() {
        let src = format!("{}SUMMARY:x\r\n", calendar(""));
        let err = decode_str(&src).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::TrailingContent);
        assert_eq!(err.line(), Some(5));
    }

    #[test]
    fn decodes_several_calendars() {
        let src = format!("{}{}", calendar(""), calendar(""));
        let calendars = Decoder::new(&DEFAULT_CAPABILITIES).decode_all(&src).unwrap();
        assert_eq!(calendars.len(), 2);
        assert_eq!(decode_str(&src).unwrap_err().kind(), &ErrorKind::TrailingContent);
    }

    #[test]
    fn reports_duplicate_singleton_at_second_line() {
        let err = decode_str(&event("SUMMARY:a\r\nSUMMARY:b\r\n")).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::DuplicateProperty(PropertyKind::Summary.into())
        );
        assert_eq!(err.line(), Some(9));
        assert_eq!(err.component(), Some(ComponentKind::Event));
    }

    #[test]
    fn reports_missing_property_at_end_line() {
        let src = calendar("BEGIN:VEVENT\r\nUID:a@b\r\nDTSTART:20200301T130000Z\r\nEND:VEVENT\r\n");
        let err = decode_str(&src).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MissingRequiredProperty { .. }));
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn keeps_experimental_components() {
        let src = calendar("BEGIN:X-FOO\r\nX-A;B=c:d,e\r\nBEGIN:X-BAR\r\nEND:X-BAR\r\nEND:X-FOO\r\n");
        let calendar = decode_str(&src).unwrap();
        let Some(CalendarComponent::Other(other)) = calendar.components().first() else {
            panic!("expected an experimental component");
        };
        assert_eq!(other.name, "X-FOO");
        assert_eq!(other.lines.len(), 1);
        assert_eq!(other.lines[0].values, ["d", "e"]);
        assert_eq!(other.children.len(), 1);
    }

    #[test]
    fn alarm_without_action() {
        let err = decode_str(&event("BEGIN:VALARM\r\nTRIGGER:-PT15M\r\nEND:VALARM\r\n")).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingAction);
        assert_eq!(err.component(), Some(ComponentKind::Alarm));
        assert_eq!(err.line(), Some(10));
    }

    #[test]
    fn misplaced_children_carry_their_begin_line() {
        let children = vec![Child::Other {
            line: 12,
            component: OtherComponent::new("X-NOTE"),
        }];
        let err = alarms(ComponentKind::Event, children).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MisplacedComponent {
                parent: "VEVENT".to_string(),
                child: "X-NOTE".to_string(),
            }
        );
        assert_eq!(err.line(), Some(12));
        assert_eq!(err.component(), Some(ComponentKind::Event));

        let nested = "BEGIN:VALARM\r\nACTION:AUDIO\r\nTRIGGER:-PT15M\r\n\
                      BEGIN:X-NOTE\r\nEND:X-NOTE\r\nEND:VALARM\r\n";
        let err = decode_str(&event(nested)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MisplacedComponent { .. }));
        assert_eq!(err.line(), Some(11));

        let nested = "BEGIN:VALARM\r\nACTION:AUDIO\r\nTRIGGER:-PT15M\r\n\
                      BEGIN:VTODO\r\nEND:VTODO\r\nEND:VALARM\r\n";
        let err = decode_str(&event(nested)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MisplacedComponent { .. }));
        assert_eq!(err.line(), Some(11));
        assert_eq!(err.component(), Some(ComponentKind::Alarm));
    }

    #[test]
    fn honours_cancellation() {
        let token = CancellationToken::new();
        token.cancel();
        let options = DecodeOptions::default().cancellation(token);
        let err = Decoder::new(&DEFAULT_CAPABILITIES)
            .with_options(options)
            .decode(&event(""))
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Cancelled);
    }

    #[test]
    fn resolves_timezones_when_asked() {
        let src = event("DTEND;TZID=Not/AZone:20200301T150000\r\n");
        assert!(decode_str(&src).is_ok());

        let decoder = Decoder::new(&DEFAULT_CAPABILITIES)
            .with_options(DecodeOptions::default().resolve_timezones(true));
        let err = decoder.decode(&src).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnknownTimezone("Not/AZone".to_string()));
        assert_eq!(err.line(), Some(8));
    }
}
