//! Model and enum definitions for the schema IR.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{LineRange, Property};

/// A model definition with its classified properties in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Model name.
    pub name: SmolStr,
    /// Properties in declaration order.
    pub properties: Vec<Property>,
    /// Body lines of the declaration.
    pub body: LineRange,
}

impl Model {
    /// Create a new model with no properties.
    pub fn new(name: impl Into<SmolStr>, body: LineRange) -> Self {
        Self {
            name: name.into(),
            properties: vec![],
            body,
        }
    }

    /// Get the model name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Add a property to the model.
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Get a property by name.
    pub fn get_property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key() == key)
    }

    /// Get the first primary key property.
    pub fn id_property(&self) -> Option<&Property> {
        self.properties.iter().find(|p| p.is_id)
    }

    /// All relation properties.
    pub fn relation_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_relation())
    }

    /// Relation properties without a list suffix.
    pub fn to_one(&self) -> impl Iterator<Item = &Property> {
        self.relation_properties().filter(|p| !p.is_array)
    }

    /// Relation properties with a list suffix.
    pub fn to_many(&self) -> impl Iterator<Item = &Property> {
        self.relation_properties().filter(|p| p.is_array)
    }

    /// Distinct enum names used by this model, in first-use order.
    pub fn enum_references(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter_map(|p| p.enum_name())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

/// An enum definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    /// Enum name.
    pub name: SmolStr,
    /// Value tokens in declaration order.
    pub values: Vec<SmolStr>,
    /// Body lines of the declaration.
    pub body: LineRange,
}

impl Enum {
    /// Create a new enum with no values.
    pub fn new(name: impl Into<SmolStr>, body: LineRange) -> Self {
        Self {
            name: name.into(),
            values: vec![],
            body,
        }
    }

    /// Get the enum name as a string.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Add a value.
    pub fn add_value(&mut self, value: impl Into<SmolStr>) {
        self.values.push(value.into());
    }

    /// Check if a value is declared.
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}
