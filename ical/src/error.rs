// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decoding, validating and building calendars.

use std::fmt::{self, Display};
use std::io;

use crate::component::ComponentKind;
use crate::property::PropertyName;
use crate::value::ValueType;

/// What went wrong, independent of where it happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    // Lexical
    /// A character that is not allowed at this position of a content line.
    #[error("illegal character {0:?}")]
    IllegalCharacter(char),

    /// A quoted parameter value without its closing quote.
    #[error("unterminated quoted string")]
    UnterminatedString,

    // Structural
    /// The content line ended before the `:` that introduces its value.
    #[error("expected ':' before the property value")]
    ExpectedColon,

    /// A token that cannot appear at this position.
    #[error("invalid token '{0}'")]
    InvalidToken(String),

    /// A content line or parameter without a name.
    #[error("missing name")]
    EmptyName,

    /// The content line ended in the middle of a parameter.
    #[error("unexpected end of content line")]
    UnexpectedEof,

    /// A continuation line with no content line to continue.
    #[error("continuation line without a preceding content line")]
    MalformedFold,

    /// `END` names a different component than the open one.
    #[error("expected END:{expected}, found END:{found}")]
    MismatchedEnd {
        /// The component that is open.
        expected: String,
        /// The component named by `END`.
        found: String,
    },

    /// The input ended while the named component was still open.
    #[error("missing END:{0}")]
    NoEndOfComponent(String),

    /// A component name that is neither registered nor an `X-` name.
    #[error("unknown component '{0}'")]
    UnknownComponent(String),

    /// A known component nested where it may not appear.
    #[error("component {child} is not allowed inside {parent}")]
    MisplacedComponent {
        /// The enclosing component, or `document` at the top level.
        parent: String,
        /// The nested component.
        child: String,
    },

    /// A required sub-component is absent.
    #[error("{parent} requires at least one {child} component")]
    MissingComponent {
        /// The enclosing component.
        parent: ComponentKind,
        /// The sub-components of which one is required.
        child: String,
    },

    /// Content lines after the final `END:VCALENDAR`.
    #[error("content after the end of the calendar")]
    TrailingContent,

    // Semantic
    /// A singleton property occurs more than once.
    #[error("property {0} occurs more than once")]
    DuplicateProperty(PropertyName),

    /// A known parameter occurs more than once on one property.
    #[error("parameter {0} occurs more than once")]
    DuplicateParameter(String),

    /// A required property is absent or empty.
    #[error("{component} is missing required property {property}")]
    MissingRequiredProperty {
        /// The component that lacks the property.
        component: ComponentKind,
        /// The missing property.
        property: PropertyName,
    },

    /// A registered property that the component does not permit.
    #[error("property {property} is not allowed in {component}")]
    PropertyNotAllowed {
        /// The component.
        component: ComponentKind,
        /// The offending property.
        property: PropertyName,
    },

    /// Two properties that must not occur together.
    #[error("{0} and {1} are mutually exclusive")]
    MutuallyExclusive(PropertyName, PropertyName),

    /// A `VALARM` closed before its `ACTION` was seen.
    #[error("VALARM has no ACTION property")]
    MissingAction,

    /// A property or parameter carries the wrong number of values.
    #[error("expected {expected} value(s), got {got}")]
    InvalidValueCount {
        /// The number of values allowed.
        expected: usize,
        /// The number of values found.
        got: usize,
    },

    // Type
    /// A value whose type differs from the declared or permitted one.
    #[error("expected a {expected} value, got {got}")]
    ValueTypeMismatch {
        /// The declared or default type.
        expected: ValueType,
        /// The type actually found.
        got: ValueType,
    },

    /// A numeric field outside its permitted range.
    #[error("{field} value {value} is out of range")]
    OutOfRange {
        /// The field name.
        field: String,
        /// The offending value.
        value: String,
    },

    /// A value that does not follow the grammar of its type.
    #[error("malformed {kind} value '{raw}': {reason}")]
    MalformedValue {
        /// The value type or parameter name being decoded.
        kind: String,
        /// The raw text.
        raw: String,
        /// Why decoding failed.
        reason: String,
    },

    // Integrity
    /// A `TZID` on a UTC date-time or on a date.
    #[error("TZID cannot be combined with a UTC time or a date")]
    TimezoneConflict,

    /// A `VERSION` whose minimum exceeds its maximum.
    #[error("VERSION minimum is greater than its maximum")]
    VersionOrdering,

    /// A `TZID` that no `VTIMEZONE` defines and the resolver does not know.
    #[error("time zone '{0}' is neither defined nor resolvable")]
    UnknownTimezone(String),

    // Operational
    /// Decoding was cancelled by the caller.
    #[error("decoding was cancelled")]
    Cancelled,

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ErrorKind {
    pub(crate) fn malformed(
        kind: impl fmt::Display,
        raw: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self::MalformedValue {
            kind: kind.to_string(),
            raw: raw.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn out_of_range(field: impl fmt::Display, value: impl fmt::Display) -> Self {
        Self::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// A decode or build error annotated with its location.
///
/// The line is the 1-based physical line on which the originating content
/// line starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    line: Option<usize>,
    component: Option<ComponentKind>,
    property: Option<PropertyName>,
}

impl Error {
    /// Creates an error without location.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            line: None,
            component: None,
            property: None,
        }
    }

    /// The kind of the error.
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consumes the error, returning its kind.
    #[must_use]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// 1-based physical line of the offending content line, if known.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    /// The innermost component being decoded when the error occurred.
    #[must_use]
    pub const fn component(&self) -> Option<ComponentKind> {
        self.component
    }

    /// The property being decoded when the error occurred.
    #[must_use]
    pub const fn property(&self) -> Option<&PropertyName> {
        self.property.as_ref()
    }

    // The innermost annotation wins, so these only fill empty slots.

    pub(crate) fn at_line(mut self, line: usize) -> Self {
        self.line.get_or_insert(line);
        self
    }

    pub(crate) fn in_component(mut self, component: ComponentKind) -> Self {
        self.component.get_or_insert(component);
        self
    }

    pub(crate) fn for_property(mut self, property: &PropertyName) -> Self {
        if self.property.is_none() {
            self.property = Some(property.clone());
        }
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {line}: ")?;
        }
        match (&self.component, &self.property) {
            (Some(component), Some(property)) => write!(f, "{component}.{property}: ")?,
            (Some(component), None) => write!(f, "{component}: ")?,
            (None, Some(property)) => write!(f, "{property}: ")?,
            (None, None) => {}
        }
        self.kind.fmt(f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        let mut error = Self::new(err.reason).in_component(err.component);
        error.property = err.property;
        error
    }
}

/// A violated component invariant, as reported by `validate()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {component}: {reason}")]
pub struct ValidationError {
    /// The component whose invariant does not hold.
    pub component: ComponentKind,
    /// The property involved, when there is one.
    pub property: Option<PropertyName>,
    /// What is wrong.
    pub reason: ErrorKind,
}

impl ValidationError {
    pub(crate) const fn new(component: ComponentKind, reason: ErrorKind) -> Self {
        Self {
            component,
            property: None,
            reason,
        }
    }

    pub(crate) fn with_property(mut self, property: impl Into<PropertyName>) -> Self {
        self.property = Some(property.into());
        self
    }
}
