// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::component::rules::{self, ComponentRules};
use crate::component::{ComponentKind, PropertyList, Rules, property_access};
use crate::error::{Error, ErrorKind, ValidationError};
use crate::property::{AlarmAction, Property, PropertyKind, PropertyValue};
use crate::value::{Uri, Value, ValueText};

/// `VALARM`, RFC 5545 Section 3.6.6.
///
/// The `ACTION` property selects which other properties are required, so it
/// is fixed when the alarm is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Alarm {
    action: AlarmAction,
    properties: PropertyList,
}

impl Alarm {
    /// Creates an alarm with its `ACTION` and `TRIGGER`.
    ///
    /// # Errors
    ///
    /// Returns an error if `trigger` is neither a duration nor a UTC
    /// date-time.
    pub fn new(action: AlarmAction, trigger: impl Into<PropertyValue>) -> Result<Self, Error> {
        let mut alarm = Self::empty(action);
        let property = Property::new(PropertyKind::Action, action)?;
        alarm.add(property)?;
        alarm.set_trigger(trigger)?;
        Ok(alarm)
    }

    /// Creates an `AUDIO` alarm.
    ///
    /// # Errors
    ///
    /// See [`Alarm::new`].
    pub fn audio(trigger: impl Into<PropertyValue>) -> Result<Self, Error> {
        Self::new(AlarmAction::Audio, trigger)
    }

    /// Creates a `DISPLAY` alarm.
    ///
    /// # Errors
    ///
    /// See [`Alarm::new`].
    pub fn display(
        trigger: impl Into<PropertyValue>,
        description: impl Into<ValueText>,
    ) -> Result<Self, Error> {
        let mut alarm = Self::new(AlarmAction::Display, trigger)?;
        alarm.set_description(description.into())?;
        Ok(alarm)
    }

    /// Creates an `EMAIL` alarm addressed to `attendee`.
    ///
    /// # Errors
    ///
    /// See [`Alarm::new`].
    pub fn email(
        trigger: impl Into<PropertyValue>,
        description: impl Into<ValueText>,
        summary: impl Into<ValueText>,
        attendee: Uri,
    ) -> Result<Self, Error> {
        let mut alarm = Self::new(AlarmAction::Email, trigger)?;
        alarm.set_description(description.into())?;
        alarm.set_summary(summary.into())?;
        alarm.add_attendee(Value::CalAddress(attendee))?;
        Ok(alarm)
    }

    const fn empty(action: AlarmAction) -> Self {
        Self {
            action,
            properties: PropertyList::new(),
        }
    }

    /// Builds an alarm from decoded properties.
    ///
    /// The properties are scanned for `ACTION` first, then added in source
    /// order against the table of that action.
    pub(crate) fn from_properties(properties: Vec<(usize, Property)>) -> Result<Self, Error> {
        let action = properties
            .iter()
            .find_map(|(_, p)| match p.value() {
                PropertyValue::Action(action) if p.kind() == Some(PropertyKind::Action) => {
                    Some(*action)
                }
                _ => None,
            })
            .ok_or_else(|| Error::new(ErrorKind::MissingAction).in_component(ComponentKind::Alarm))?;

        let mut alarm = Self::empty(action);
        for (line, property) in properties {
            let name = property.name().clone();
            alarm.insert(property).map_err(|kind| {
                Error::new(kind)
                    .at_line(line)
                    .in_component(ComponentKind::Alarm)
                    .for_property(&name)
            })?;
        }
        Ok(alarm)
    }

    /// The alarm action.
    #[must_use]
    pub const fn action(&self) -> AlarmAction {
        self.action
    }

    /// Checks the properties required by the action.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.properties.validate(self.rules())
    }
}

impl Rules for Alarm {
    fn rules(&self) -> &'static ComponentRules {
        match self.action {
            AlarmAction::Audio => &rules::ALARM_AUDIO,
            AlarmAction::Display => &rules::ALARM_DISPLAY,
            AlarmAction::Email => &rules::ALARM_EMAIL,
        }
    }

    fn check_replacement(&self, property: &Property) -> Result<(), ErrorKind> {
        match property.value() {
            PropertyValue::Action(action) if *action != self.action => Err(ErrorKind::malformed(
                PropertyKind::Action,
                action.as_str(),
                format!("alarm action is {}", self.action),
            )),
            _ => Ok(()),
        }
    }
}

property_access! {
    Alarm {
        one trigger, set_trigger => Trigger;
        one description, set_description => Description;
        one summary, set_summary => Summary;
        one duration, set_duration => Duration;
        one repeat, set_repeat => Repeat;
        many attachments, add_attachment => Attach;
        many attendees, add_attendee => Attendee;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::DefaultCapabilities;
    use crate::syntax::ContentLine;
    use crate::value::ValueDuration;

    fn decoded(name: &str, value: &str) -> Property {
        Property::decode(&ContentLine::new(name, value), &DefaultCapabilities).unwrap()
    }

    #[test]
    fn selects_rules_by_action() {
        let alarm = Alarm::from_properties(vec![
            (2, decoded("TRIGGER", "-PT15M")),
            (3, decoded("ACTION", "AUDIO")),
        ])
        .unwrap();
        assert_eq!(alarm.action(), AlarmAction::Audio);
        assert_eq!(
            alarm.trigger().and_then(Property::duration),
            Some(&ValueDuration::from_seconds(-15 * 60))
        );
        assert_eq!(alarm.validate(), Ok(()));
    }

    #[test]
    fn requires_action() {
        let err = Alarm::from_properties(vec![(2, decoded("TRIGGER", "-PT15M"))]).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingAction);
    }

    #[test]
    fn email_requires_attendee() {
        let err = Alarm::from_properties(vec![
            (1, decoded("ACTION", "EMAIL")),
            (2, decoded("TRIGGER", "PT0S")),
            (3, decoded("DESCRIPTION", "d")),
            (4, decoded("SUMMARY", "s")),
        ])
        .unwrap()
        .validate()
        .unwrap_err();
        assert_eq!(err.property, Some(PropertyKind::Attendee.into()));
    }

    #[test]
    fn duration_and_repeat_are_coupled() {
        let mut alarm = Alarm::display(ValueDuration::from_seconds(-300), "wake up").unwrap();
        alarm.set_duration(ValueDuration::from_seconds(300)).unwrap();
        assert!(alarm.validate().is_err());
        alarm.set_repeat(2).unwrap();
        assert_eq!(alarm.validate(), Ok(()));
    }

    #[test]
    fn action_cannot_change() {
        let mut alarm = Alarm::audio(ValueDuration::from_seconds(0)).unwrap();
        let display = Property::new(PropertyKind::Action, AlarmAction::Display).unwrap();
        assert!(alarm.set(display).is_err());
        let audio = Property::new(PropertyKind::Action, AlarmAction::Audio).unwrap();
        alarm.set(audio).unwrap();
    }

    #[test]
    fn audio_takes_a_single_attachment() {
        let mut alarm = Alarm::audio(ValueDuration::from_seconds(0)).unwrap();
        let uri = Uri::parse("ftp://example.com/ring.wav", &DefaultCapabilities).unwrap();
        alarm.add_attachment(uri.clone()).unwrap();
        let err = alarm.add_attachment(uri).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::DuplicateProperty(_)));
    }
}
