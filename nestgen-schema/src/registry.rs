//! Enum and model name registry.
//!
//! A single pass over every scanned line collects declared model and enum
//! names in declaration order. Field classification needs both sets before
//! it can tell an enum reference from a relation, so the registry always
//! completes before any field is extracted.

use indexmap::IndexSet;
use smol_str::SmolStr;

use crate::config::AttributeMarkers;
use crate::scanner::{BlockKind, ScannedSchema, parse_header};

/// Declared names, in declaration order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    /// Model names.
    pub models: Vec<SmolStr>,
    /// Enum names.
    pub enums: Vec<SmolStr>,
}

impl Registry {
    /// Collect names from scanned lines.
    pub fn collect(scanned: &ScannedSchema) -> Self {
        let mut registry = Self::default();

        for line in &scanned.lines {
            match parse_header(line) {
                Some((BlockKind::Model, name)) => registry.models.push(SmolStr::new(name)),
                Some((BlockKind::Enum, name)) => registry.enums.push(SmolStr::new(name)),
                None => {}
            }
        }

        registry
    }

    /// Model names declared more than once.
    pub fn duplicate_models(&self) -> Vec<&str> {
        duplicates(&self.models)
    }

    /// Enum names declared more than once.
    pub fn duplicate_enums(&self) -> Vec<&str> {
        duplicates(&self.enums)
    }
}

fn duplicates(names: &[SmolStr]) -> Vec<&str> {
    let mut seen = IndexSet::new();
    let mut dups = IndexSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            dups.insert(name.as_str());
        }
    }
    dups.into_iter().collect()
}

/// Read-only lookup state shared by field extraction and relation resolution.
#[derive(Debug, Clone, Default)]
pub struct SchemaContext {
    models: IndexSet<SmolStr>,
    enums: IndexSet<SmolStr>,
    markers: AttributeMarkers,
}

impl SchemaContext {
    /// Build the context from a registry and the configured markers.
    pub fn new(registry: &Registry, markers: AttributeMarkers) -> Self {
        Self {
            models: registry.models.iter().cloned().collect(),
            enums: registry.enums.iter().cloned().collect(),
            markers,
        }
    }

    /// Check if a name is a declared model.
    pub fn is_model(&self, name: &str) -> bool {
        self.models.contains(name)
    }

    /// Check if a name is a declared enum.
    pub fn is_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    /// Distinct model names in first-declaration order.
    pub fn models(&self) -> impl Iterator<Item = &SmolStr> {
        self.models.iter()
    }

    /// Distinct enum names in first-declaration order.
    pub fn enums(&self) -> impl Iterator<Item = &SmolStr> {
        self.enums.iter()
    }

    /// Configured attribute markers.
    pub fn markers(&self) -> &AttributeMarkers {
        &self.markers
    }
}
