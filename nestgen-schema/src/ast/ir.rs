//! The compiled intermediate representation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{Enum, Model, Property, RelationRecord};
use crate::error::{SchemaError, SchemaResult};

/// Immutable output of one compilation run.
///
/// Built once by the compiler and handed read-only to generators. Maps keep
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ir {
    enums: IndexMap<SmolStr, Enum>,
    models: IndexMap<SmolStr, Model>,
    relations: IndexMap<SmolStr, RelationRecord>,
}

impl Ir {
    pub(crate) fn new(
        enums: IndexMap<SmolStr, Enum>,
        models: IndexMap<SmolStr, Model>,
        relations: IndexMap<SmolStr, RelationRecord>,
    ) -> Self {
        Self {
            enums,
            models,
            relations,
        }
    }

    /// Enum names in declaration order.
    pub fn enum_names(&self) -> impl Iterator<Item = &str> {
        self.enums.keys().map(|s| s.as_str())
    }

    /// Model names in declaration order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(|s| s.as_str())
    }

    /// All enums in declaration order.
    pub fn enums(&self) -> impl Iterator<Item = &Enum> {
        self.enums.values()
    }

    /// All models in declaration order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get an enum by name.
    pub fn get_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.get(name)
    }

    /// Get a model by name.
    pub fn get_model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Relation record of a model.
    pub fn relations(&self, model: &str) -> Option<&RelationRecord> {
        self.relations.get(model)
    }

    /// Ordered properties of a model.
    pub fn properties(&self, model: &str) -> Option<&[Property]> {
        self.models.get(model).map(|m| m.properties.as_slice())
    }

    /// Ordered properties of a model, failing for undeclared models.
    pub fn require_properties(&self, model: &str) -> SchemaResult<&[Property]> {
        self.properties(model)
            .ok_or_else(|| SchemaError::unknown_model(model))
    }

    /// Check if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.enums.is_empty()
    }

    /// Counts for logs and debugging.
    pub fn stats(&self) -> IrStats {
        IrStats {
            model_count: self.models.len(),
            enum_count: self.enums.len(),
            property_count: self.models.values().map(|m| m.properties.len()).sum(),
            relation_count: self.relations.values().map(|r| r.len()).sum(),
        }
    }
}

/// Summary counts of an [`Ir`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IrStats {
    /// Number of models.
    pub model_count: usize,
    /// Number of enums.
    pub enum_count: usize,
    /// Total number of properties across all models.
    pub property_count: usize,
    /// Number of classified relation entries.
    pub relation_count: usize,
}

impl std::fmt::Display for Ir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        write!(
            f,
            "Ir({} models, {} enums, {} properties, {} relations)",
            stats.model_count, stats.enum_count, stats.property_count, stats.relation_count
        )
    }
}
