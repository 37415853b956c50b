//! Property definitions for the schema IR.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{Attribute, DataType, FieldType, LanguageType, ScalarType};

/// A classified field on a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Field name.
    pub key: SmolStr,
    /// Classified type, carrying the enum/model reference when there is one.
    pub field_type: FieldType,
    /// Declared with a `?` suffix.
    pub nullable: bool,
    /// Declared with a `[]` suffix.
    pub is_array: bool,
    /// Carries a uniqueness marker.
    pub is_unique: bool,
    /// Carries a default/autoincrement marker.
    pub is_auto_generated: bool,
    /// Carries a primary key marker.
    pub is_id: bool,
    /// Name passed to `@relation(...)`, used to pair reverse relations.
    pub relation_label: Option<SmolStr>,
    /// Raw attributes as parsed.
    pub attributes: Vec<Attribute>,
    /// Zero-based line index in the schema source.
    pub line: usize,
}

impl Property {
    /// Create a required, non-list property with no markers.
    pub fn new(key: impl Into<SmolStr>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            field_type,
            nullable: false,
            is_array: false,
            is_unique: false,
            is_auto_generated: false,
            is_id: false,
            relation_label: None,
            attributes: vec![],
            line: 0,
        }
    }

    /// Get the property name as a string.
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Get the flat data type.
    pub fn data_type(&self) -> DataType {
        self.field_type.data_type()
    }

    /// Name of the referenced enum, if this is an enum property.
    pub fn enum_name(&self) -> Option<&str> {
        self.field_type.enum_name()
    }

    /// Name of the referenced model, if this is a relation property.
    pub fn relation_name(&self) -> Option<&str> {
        self.field_type.relation_name()
    }

    /// Check if this is a relation property.
    pub fn is_relation(&self) -> bool {
        self.field_type.is_relation()
    }

    /// API-facing type name. Enum and relation properties use the
    /// referenced type's own name.
    pub fn wire_type(&self) -> &str {
        match &self.field_type {
            FieldType::Scalar(s) => s.wire_type().as_str(),
            FieldType::Enum(name) | FieldType::Relation(name) => name.as_str(),
        }
    }

    /// In-memory representation, for scalar properties only.
    pub fn language_type(&self) -> Option<LanguageType> {
        match &self.field_type {
            FieldType::Scalar(s) => Some(s.language_type()),
            _ => None,
        }
    }

    /// Check if this is a `Money` property.
    pub fn is_money(&self) -> bool {
        self.field_type == FieldType::Scalar(ScalarType::Money)
    }

    /// Mark as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark as a list.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Set the `@relation` label.
    pub fn with_relation_label(mut self, label: impl Into<SmolStr>) -> Self {
        self.relation_label = Some(label.into());
        self
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.key, self.field_type)?;
        if self.is_array {
            write!(f, "[]")?;
        }
        if self.nullable {
            write!(f, "?")?;
        }
        for attr in &self.attributes {
            write!(f, " {}", attr)?;
        }
        Ok(())
    }
}
