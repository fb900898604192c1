// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The calendar object model, RFC 5545 Section 3.6.
//!
//! Components own their properties in a [`PropertyList`] that keeps build
//! order. Every mutation goes through the property table of the component,
//! so a property that the component does not permit, or a second occurrence
//! of a singleton, is rejected when it is added rather than when the
//! calendar is written. `validate()` checks what can only be known once the
//! component is complete: required properties, exclusions and couplings.

mod alarm;
mod calendar;
mod event;
mod freebusy;
mod journal;
mod kind;
mod list;
pub(crate) mod rules;
mod timezone;
mod todo;

pub use crate::component::alarm::Alarm;
pub use crate::component::calendar::{Calendar, CalendarComponent, OtherComponent};
pub use crate::component::event::Event;
pub use crate::component::freebusy::FreeBusy;
pub use crate::component::journal::Journal;
pub use crate::component::kind::ComponentKind;
pub use crate::component::list::PropertyList;
pub use crate::component::timezone::{Observance, ObservanceKind, Timezone};
pub use crate::component::todo::Todo;

use crate::error::ErrorKind;
use crate::property::Property;

/// Implements property access for a component with a `properties` field and
/// a `rules()` method.
macro_rules! property_access {
    (
        $ty:ident {
            $( one $get:ident, $set:ident => $kind:ident; )*
            $( many $get_all:ident, $add:ident => $mkind:ident; )*
        }
    ) => {
        impl $ty {
            /// The properties in build order.
            #[must_use]
            pub const fn properties(&self) -> &$crate::component::PropertyList {
                &self.properties
            }

            /// Sets a property, replacing a singleton of the same kind in place.
            ///
            /// # Errors
            ///
            /// Returns an error if the component does not permit the property.
            pub fn set(
                &mut self,
                property: $crate::property::Property,
            ) -> Result<(), $crate::error::Error> {
                let rules = $crate::component::Rules::rules(self);
                let name = property.name().clone();
                $crate::component::Rules::check_replacement(self, &property)
                    .and_then(|()| self.properties.set(rules, property))
                    .map_err(|kind| {
                        $crate::error::Error::new(kind)
                            .in_component(rules.kind)
                            .for_property(&name)
                    })
            }

            /// Adds a property after the existing ones.
            ///
            /// # Errors
            ///
            /// Returns an error if the component does not permit the property,
            /// or it is a singleton that is already present.
            pub fn add(
                &mut self,
                property: $crate::property::Property,
            ) -> Result<(), $crate::error::Error> {
                let rules = $crate::component::Rules::rules(self);
                let name = property.name().clone();
                self.insert(property).map_err(|kind| {
                    $crate::error::Error::new(kind)
                        .in_component(rules.kind)
                        .for_property(&name)
                })
            }

            /// Removes every property of the given kind.
            pub fn remove(&mut self, kind: $crate::property::PropertyKind) -> usize {
                self.properties.remove(kind)
            }

            pub(crate) fn insert(
                &mut self,
                property: $crate::property::Property,
            ) -> Result<(), $crate::error::ErrorKind> {
                $crate::component::Rules::check_replacement(self, &property)?;
                let rules = $crate::component::Rules::rules(self);
                self.properties.insert(rules, property)
            }

            $(
                #[doc = concat!("The `", stringify!($kind), "` property.")]
                #[must_use]
                pub fn $get(&self) -> Option<&$crate::property::Property> {
                    self.properties.get($crate::property::PropertyKind::$kind)
                }

                #[doc = concat!("Sets the `", stringify!($kind), "` property.")]
                ///
                /// # Errors
                ///
                /// Returns an error if the value does not fit the property.
                pub fn $set(
                    &mut self,
                    value: impl Into<$crate::property::PropertyValue>,
                ) -> Result<(), $crate::error::Error> {
                    let kind = $crate::property::PropertyKind::$kind;
                    let property = $crate::property::Property::new(kind, value).map_err(|e| {
                        $crate::error::Error::new(e)
                            .in_component($crate::component::Rules::rules(self).kind)
                            .for_property(&kind.into())
                    })?;
                    self.set(property)
                }
            )*

            $(
                #[doc = concat!("Every `", stringify!($mkind), "` property.")]
                pub fn $get_all(&self) -> impl Iterator<Item = &$crate::property::Property> {
                    self.properties.get_all($crate::property::PropertyKind::$mkind)
                }

                #[doc = concat!("Adds a `", stringify!($mkind), "` property.")]
                ///
                /// # Errors
                ///
                /// Returns an error if the value does not fit the property.
                pub fn $add(
                    &mut self,
                    value: impl Into<$crate::property::PropertyValue>,
                ) -> Result<(), $crate::error::Error> {
                    let kind = $crate::property::PropertyKind::$mkind;
                    let property = $crate::property::Property::new(kind, value).map_err(|e| {
                        $crate::error::Error::new(e)
                            .in_component($crate::component::Rules::rules(self).kind)
                            .for_property(&kind.into())
                    })?;
                    self.add(property)
                }
            )*
        }
    };
}

pub(crate) use property_access;

/// The property table a component is checked against.
pub(crate) trait Rules {
    fn rules(&self) -> &'static rules::ComponentRules;

    /// Rejects a property that would change what the component is.
    fn check_replacement(&self, _property: &Property) -> Result<(), ErrorKind> {
        Ok(())
    }
}
