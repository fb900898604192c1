// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::slice;

use crate::component::rules::ComponentRules;
use crate::error::{ErrorKind, ValidationError};
use crate::property::{Property, PropertyKind};

/// The properties of a component, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyList(Vec<Property>);

impl PropertyList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a property; a second singleton is an error.
    pub(crate) fn insert(
        &mut self,
        rules: &ComponentRules,
        property: Property,
    ) -> Result<(), ErrorKind> {
        rules.check_property(&self.0, &property, false)?;
        self.0.push(property);
        Ok(())
    }

    /// Replaces a singleton in place, or appends.
    pub(crate) fn set(&mut self, rules: &ComponentRules, property: Property) -> Result<(), ErrorKind> {
        let slot = match property.kind() {
            Some(kind) if rules.is_singleton(kind) => {
                self.0.iter().position(|p| p.kind() == Some(kind))
            }
            _ => None,
        };
        rules.check_property(&self.0, &property, slot.is_some())?;
        match slot.and_then(|i| self.0.get_mut(i)) {
            Some(existing) => *existing = property,
            None => self.0.push(property),
        }
        Ok(())
    }

    pub(crate) fn validate(&self, rules: &ComponentRules) -> Result<(), ValidationError> {
        for property in &self.0 {
            property.validate().map_err(|reason| {
                ValidationError::new(rules.kind, reason).with_property(property.name().clone())
            })?;
        }
        rules.validate(&self.0)
    }

    /// Removes every property of the given kind, returning how many were
    /// removed.
    pub fn remove(&mut self, kind: PropertyKind) -> usize {
        let before = self.0.len();
        self.0.retain(|p| p.kind() != Some(kind));
        before - self.0.len()
    }

    /// The first property of the given kind.
    #[must_use]
    pub fn get(&self, kind: PropertyKind) -> Option<&Property> {
        self.0.iter().find(|p| p.kind() == Some(kind))
    }

    /// Every property of the given kind, in order.
    pub fn get_all(&self, kind: PropertyKind) -> impl Iterator<Item = &Property> {
        self.0.iter().filter(move |p| p.kind() == Some(kind))
    }

    /// Every property with the given name, compared case-insensitively.
    pub fn get_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> + 'a {
        self.0
            .iter()
            .filter(move |p| p.name().as_str().eq_ignore_ascii_case(name))
    }

    /// Iterates in order.
    pub fn iter(&self) -> slice::Iter<'_, Property> {
        self.0.iter()
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a Property;
    type IntoIter = slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::rules::{ALARM_AUDIO, EVENT};
    use crate::component::ComponentKind;
    use crate::property::{AlarmAction, PropertyName};
    use crate::value::Value;

    fn summary(text: &str) -> Property {
        Property::new(PropertyKind::Summary, Value::from(text)).unwrap()
    }

    #[test]
    fn insert_rejects_second_singleton() {
        let mut list = PropertyList::new();
        list.insert(&EVENT, summary("a")).unwrap();
        assert_eq!(
            list.insert(&EVENT, summary("b")),
            Err(ErrorKind::DuplicateProperty(PropertyKind::Summary.into()))
        );
    }

    #[test]
    fn set_replaces_in_place() {
        let mut list = PropertyList::new();
        list.set(&EVENT, summary("a")).unwrap();
        list.insert(&EVENT, Property::other("X-A", vec!["1".to_string()]).unwrap()).unwrap();
        list.set(&EVENT, summary("b")).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().next().and_then(Property::text).unwrap().as_str(), "b");
    }

    #[test]
    fn rejects_properties_the_component_does_not_permit() {
        let mut list = PropertyList::new();
        assert_eq!(
            list.insert(&ALARM_AUDIO, summary("a")),
            Err(ErrorKind::PropertyNotAllowed {
                component: ComponentKind::Alarm,
                property: PropertyName::Known(PropertyKind::Summary),
            })
        );
        list.insert(&ALARM_AUDIO, Property::new(PropertyKind::Action, AlarmAction::Audio).unwrap())
            .unwrap();
        let err = list.validate(&ALARM_AUDIO).unwrap_err();
        assert_eq!(err.property, Some(PropertyKind::Trigger.into()));
    }
}
