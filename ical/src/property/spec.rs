// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::value::ValueType;

/// How the values of a property are structured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Exactly one value of one of the allowed types.
    Single,
    /// One or more comma-separated values.
    List,
    /// `latitude;longitude`.
    Geo,
    /// `code;description[;data]`.
    RequestStatus,
    /// `max` or `min;max`.
    Version,
    /// A classification keyword.
    Class,
    /// A status keyword.
    Status,
    /// `OPAQUE` or `TRANSPARENT`.
    Transparency,
    /// An alarm action keyword.
    Action,
}

/// The value rules of one registered property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    value_types: &'static [ValueType],
    shape: Shape,
}

impl PropertySpec {
    pub(crate) const fn new(value_types: &'static [ValueType], shape: Shape) -> Self {
        Self { value_types, shape }
    }

    /// Allowed value types; the first one is the default.
    #[must_use]
    pub const fn value_types(&self) -> &'static [ValueType] {
        self.value_types
    }

    /// The type assumed when no `VALUE` parameter is given.
    #[must_use]
    pub const fn default_type(&self) -> ValueType {
        match self.value_types.first() {
            Some(ty) => *ty,
            None => ValueType::Text,
        }
    }

    /// Whether `ty` is one of the allowed types.
    #[must_use]
    pub fn allows(&self, ty: ValueType) -> bool {
        self.value_types.contains(&ty)
    }

    /// How the values are structured.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }
}
