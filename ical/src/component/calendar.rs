// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use crate::capability::DEFAULT_CAPABILITIES;
use crate::component::rules::{self, ComponentRules};
use crate::component::{
    ComponentKind, Event, FreeBusy, Journal, PropertyList, Rules, Timezone, Todo, property_access,
};
use crate::error::{Error, ErrorKind, ValidationError};
use crate::formatter::{FormatOptions, Formatter};
use crate::keyword::KW_CALSCALE_GREGORIAN;
use crate::parser::Decoder;
use crate::property::{PropertyKind, Version};
use crate::syntax::ContentLine;
use crate::value::ValueText;

/// `VCALENDAR`, the iCalendar object of RFC 5545 Section 3.4.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calendar {
    properties: PropertyList,
    components: Vec<CalendarComponent>,
}

/// A component nested directly in a calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarComponent {
    /// `VEVENT`
    Event(Event),
    /// `VTODO`
    Todo(Todo),
    /// `VJOURNAL`
    Journal(Journal),
    /// `VFREEBUSY`
    FreeBusy(FreeBusy),
    /// `VTIMEZONE`
    Timezone(Timezone),
    /// An experimental `X-` component, kept as written.
    Other(OtherComponent),
}

impl CalendarComponent {
    /// The registered kind, or `None` for experimental components.
    #[must_use]
    pub const fn kind(&self) -> Option<ComponentKind> {
        match self {
            Self::Event(_) => Some(ComponentKind::Event),
            Self::Todo(_) => Some(ComponentKind::Todo),
            Self::Journal(_) => Some(ComponentKind::Journal),
            Self::FreeBusy(_) => Some(ComponentKind::FreeBusy),
            Self::Timezone(_) => Some(ComponentKind::Timezone),
            Self::Other(_) => None,
        }
    }

    /// Validates the component.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Event(event) => event.validate(),
            Self::Todo(todo) => todo.validate(),
            Self::Journal(journal) => journal.validate(),
            Self::FreeBusy(freebusy) => freebusy.validate(),
            Self::Timezone(tz) => tz.validate(),
            Self::Other(_) => Ok(()),
        }
    }
}

/// A component this crate does not interpret.
///
/// Its content lines and nested components are re-encoded unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherComponent {
    /// The component name, upper case.
    pub name: String,
    /// The content lines between `BEGIN` and `END`, without line numbers.
    pub lines: Vec<ContentLine>,
    /// Nested components.
    pub children: Vec<OtherComponent>,
}

impl OtherComponent {
    /// Creates an empty component.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            lines: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl From<OtherComponent> for CalendarComponent {
    fn from(component: OtherComponent) -> Self {
        Self::Other(component)
    }
}

impl Calendar {
    /// Creates a calendar with `VERSION:2.0` and the given `PRODID`.
    ///
    /// # Errors
    ///
    /// Returns an error if `prodid` is not a valid `PRODID` value.
    pub fn new(prodid: impl Into<ValueText>) -> Result<Self, Error> {
        let mut calendar = Self::default();
        calendar.set_version(Version::V2_0)?;
        calendar.set_prodid(prodid.into())?;
        Ok(calendar)
    }

    /// Builds one calendar from assembled content lines, such as those of
    /// [`crate::syntax::content_lines`].
    ///
    /// # Errors
    ///
    /// Returns the first decoding or validation error, annotated with its
    /// physical line.
    pub fn build<I>(lines: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Result<ContentLine, Error>>,
    {
        Decoder::new(&DEFAULT_CAPABILITIES).decode_lines(lines)
    }

    /// Sub-components in build order.
    #[must_use]
    pub fn components(&self) -> &[CalendarComponent] {
        &self.components
    }

    /// Adds a sub-component after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the component does not validate.
    pub fn add_component(&mut self, component: impl Into<CalendarComponent>) -> Result<(), Error> {
        let component = component.into();
        component.validate()?;
        self.components.push(component);
        Ok(())
    }

    pub(crate) fn push_component(&mut self, component: CalendarComponent) {
        self.components.push(component);
    }

    /// Every `VEVENT`.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.components.iter().filter_map(|c| match c {
            CalendarComponent::Event(event) => Some(event),
            _ => None,
        })
    }

    /// Every `VTODO`.
    pub fn todos(&self) -> impl Iterator<Item = &Todo> {
        self.components.iter().filter_map(|c| match c {
            CalendarComponent::Todo(todo) => Some(todo),
            _ => None,
        })
    }

    /// Every `VJOURNAL`.
    pub fn journals(&self) -> impl Iterator<Item = &Journal> {
        self.components.iter().filter_map(|c| match c {
            CalendarComponent::Journal(journal) => Some(journal),
            _ => None,
        })
    }

    /// Every `VFREEBUSY`.
    pub fn freebusys(&self) -> impl Iterator<Item = &FreeBusy> {
        self.components.iter().filter_map(|c| match c {
            CalendarComponent::FreeBusy(freebusy) => Some(freebusy),
            _ => None,
        })
    }

    /// Every `VTIMEZONE`.
    pub fn timezones(&self) -> impl Iterator<Item = &Timezone> {
        self.components.iter().filter_map(|c| match c {
            CalendarComponent::Timezone(tz) => Some(tz),
            _ => None,
        })
    }

    /// The `VTIMEZONE` with the given `TZID`.
    #[must_use]
    pub fn timezone(&self, tzid: &str) -> Option<&Timezone> {
        self.timezones().find(|tz| tz.id() == Some(tzid))
    }

    /// Checks the calendar and every sub-component.
    ///
    /// Without a `METHOD`, every event must have a `DTSTART`.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.properties.validate(self.rules())?;

        if let Some(calscale) = self.calscale().and_then(|p| p.text())
            && !calscale.as_str().eq_ignore_ascii_case(KW_CALSCALE_GREGORIAN)
        {
            return Err(ValidationError::new(
                ComponentKind::Calendar,
                ErrorKind::malformed(
                    PropertyKind::CalScale,
                    calscale.as_str(),
                    "only GREGORIAN is supported",
                ),
            )
            .with_property(PropertyKind::CalScale));
        }

        for component in &self.components {
            component.validate()?;
        }

        if self.method().is_none()
            && self.events().any(|event| event.dtstart().is_none())
        {
            return Err(ValidationError::new(
                ComponentKind::Event,
                ErrorKind::MissingRequiredProperty {
                    component: ComponentKind::Event,
                    property: PropertyKind::DtStart.into(),
                },
            )
            .with_property(PropertyKind::DtStart));
        }
        Ok(())
    }

    /// Writes the calendar as folded iCalendar text with CRLF line endings.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `sink` fails.
    pub fn encode(&self, sink: &mut impl Write) -> io::Result<()> {
        Formatter::new(sink, FormatOptions::default()).write(self)
    }
}

impl Rules for Calendar {
    fn rules(&self) -> &'static ComponentRules {
        &rules::CALENDAR
    }
}

property_access! {
    Calendar {
        one version, set_version => Version;
        one prodid, set_prodid => ProdId;
        one calscale, set_calscale => CalScale;
        one method, set_method => Method;
    }
}
