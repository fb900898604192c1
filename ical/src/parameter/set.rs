// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::slice;

use crate::capability::Capabilities;
use crate::error::ErrorKind;
use crate::parameter::{Encoding, Parameter, ParameterKind};
use crate::syntax::RawParameter;
use crate::value::ValueType;

/// The parameters of one property, in source order.
///
/// Registered parameters occur at most once; experimental and IANA
/// parameters may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(Vec<Parameter>);

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Decodes raw parameters, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is malformed or a registered
    /// parameter is repeated.
    pub fn decode(raw: &[RawParameter], caps: &dyn Capabilities) -> Result<Self, ErrorKind> {
        let mut parameters = Self::new();
        for param in raw {
            parameters.insert(Parameter::decode(param, caps)?)?;
        }
        Ok(parameters)
    }

    /// Appends a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateParameter`] if a registered parameter of
    /// the same kind is already present.
    pub fn insert(&mut self, parameter: Parameter) -> Result<(), ErrorKind> {
        if let Some(kind) = parameter.kind()
            && self.get(kind).is_some()
        {
            return Err(ErrorKind::DuplicateParameter(kind.to_string()));
        }
        self.0.push(parameter);
        Ok(())
    }

    /// Replaces the parameter of the same kind in place, or appends it.
    pub fn set(&mut self, parameter: Parameter) {
        let slot = parameter
            .kind()
            .and_then(|kind| self.0.iter_mut().find(|p| p.kind() == Some(kind)));
        match slot {
            Some(slot) => *slot = parameter,
            None => self.0.push(parameter),
        }
    }

    /// Removes the parameter of the given kind.
    pub fn remove(&mut self, kind: ParameterKind) -> Option<Parameter> {
        let index = self.0.iter().position(|p| p.kind() == Some(kind))?;
        Some(self.0.remove(index))
    }

    /// The parameter of the given kind.
    #[must_use]
    pub fn get(&self, kind: ParameterKind) -> Option<&Parameter> {
        self.0.iter().find(|p| p.kind() == Some(kind))
    }

    /// Every parameter with the given name, compared case-insensitively.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Parameter> + 'a {
        self.0.iter().filter(move |p| p.name().eq_ignore_ascii_case(name))
    }

    /// The `TZID` parameter value.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match self.get(ParameterKind::TzId) {
            Some(Parameter::TzId(tzid)) => Some(tzid),
            _ => None,
        }
    }

    /// The `VALUE` parameter value.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        match self.get(ParameterKind::Value) {
            Some(Parameter::Value(ty)) => Some(*ty),
            _ => None,
        }
    }

    /// The `ENCODING` parameter value.
    #[must_use]
    pub fn encoding(&self) -> Option<Encoding> {
        match self.get(ParameterKind::Encoding) {
            Some(Parameter::Encoding(encoding)) => Some(*encoding),
            _ => None,
        }
    }

    /// Iterates in source order.
    pub fn iter(&self) -> slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::DEFAULT_CAPABILITIES;

    #[test]
    fn keeps_source_order_and_unknown_repeats() {
        let raw = [
            RawParameter::new("X-A", "1"),
            RawParameter::new("TZID", "Europe/Paris"),
            RawParameter::new("X-A", "2"),
        ];
        let params = Parameters::decode(&raw, &DEFAULT_CAPABILITIES).unwrap();
        let names: Vec<_> = params.iter().map(Parameter::name).collect();
        assert_eq!(names, ["X-A", "TZID", "X-A"]);
        assert_eq!(params.get_all("x-a").count(), 2);
        assert_eq!(params.tzid(), Some("Europe/Paris"));
    }

    #[test]
    fn rejects_repeated_registered_parameter() {
        let raw = [
            RawParameter::new("VALUE", "DATE"),
            RawParameter::new("value", "DATE-TIME"),
        ];
        assert_eq!(
            Parameters::decode(&raw, &DEFAULT_CAPABILITIES),
            Err(ErrorKind::DuplicateParameter("VALUE".to_string()))
        );
    }

    #[test]
    fn set_replaces_in_place() {
        let mut params = Parameters::new();
        params.set(Parameter::CommonName("A".to_string()));
        params.set(Parameter::Value(ValueType::Date));
        params.set(Parameter::CommonName("B".to_string()));
        assert_eq!(
            params.iter().cloned().collect::<Vec<_>>(),
            vec![
                Parameter::CommonName("B".to_string()),
                Parameter::Value(ValueType::Date)
            ]
        );
        assert_eq!(params.remove(ParameterKind::Value), Some(Parameter::Value(ValueType::Date)));
        assert_eq!(params.value_type(), None);
    }
}
