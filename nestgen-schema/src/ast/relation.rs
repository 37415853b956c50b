//! Relation types for the schema IR.

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::Property;

/// The cardinality of a relation edge, seen from the owning model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    /// One-to-one relation.
    OneToOne,
    /// One-to-many relation (the owner holds the collection).
    OneToMany,
    /// Many-to-one relation (the owner holds the foreign key).
    ManyToOne,
    /// Many-to-many relation.
    ManyToMany,
}

impl Cardinality {
    /// All cardinalities, in bucket order.
    pub const ALL: [Cardinality; 4] = [
        Self::OneToOne,
        Self::OneToMany,
        Self::ManyToOne,
        Self::ManyToMany,
    ];

    /// Check if this is a "to-one" relation.
    pub fn is_to_one(&self) -> bool {
        matches!(self, Self::OneToOne | Self::ManyToOne)
    }

    /// Check if this is a "to-many" relation.
    pub fn is_to_many(&self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneToOne => write!(f, "1:1"),
            Self::OneToMany => write!(f, "1:n"),
            Self::ManyToOne => write!(f, "n:1"),
            Self::ManyToMany => write!(f, "m:n"),
        }
    }
}

/// A directed relation from an owning property to a target model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEdge {
    /// Model declaring the property.
    pub source_model: SmolStr,
    /// The property name.
    pub field_key: SmolStr,
    /// The referenced model.
    pub target_model: SmolStr,
    /// Declared as a list.
    pub is_array: bool,
    /// `@relation` label, if any.
    pub label: Option<SmolStr>,
}

impl RelationEdge {
    /// Build an edge from a relation property. Returns `None` for
    /// properties that do not reference a model.
    pub fn from_property(source_model: impl Into<SmolStr>, property: &Property) -> Option<Self> {
        let target = property.relation_name()?;
        Some(Self {
            source_model: source_model.into(),
            field_key: property.key.clone(),
            target_model: SmolStr::new(target),
            is_array: property.is_array,
            label: property.relation_label.clone(),
        })
    }

    /// Check if the edge points back at its own model.
    pub fn is_self_relation(&self) -> bool {
        self.source_model == self.target_model
    }
}

/// One classified relation in a [`RelationRecord`] bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEntry {
    /// The relation property name.
    pub key: SmolStr,
    /// The target model name.
    pub value: SmolStr,
    /// Sibling many-to-one fields on the target that do not belong to this
    /// collection. Only set on one-to-many entries when the target has more
    /// than one many-to-one field back to this model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_key: Option<Vec<SmolStr>>,
}

impl RelationEntry {
    /// Create an entry without a deep key.
    pub fn new(key: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            deep_key: None,
        }
    }

    /// Set the deep key.
    pub fn with_deep_key(mut self, deep_key: Vec<SmolStr>) -> Self {
        self.deep_key = Some(deep_key);
        self
    }

    /// Lower camel case form of the target model name.
    pub fn accessor(&self) -> String {
        self.value.as_str().to_case(Case::Camel)
    }
}

/// Classified relations of a single model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    /// One-to-one entries.
    pub one_to_one: Vec<RelationEntry>,
    /// One-to-many entries, possibly carrying a deep key.
    pub one_to_many: Vec<RelationEntry>,
    /// Many-to-one entries.
    pub many_to_one: Vec<RelationEntry>,
    /// Many-to-many entries.
    pub many_to_many: Vec<RelationEntry>,
}

impl RelationRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for a cardinality.
    pub fn bucket(&self, cardinality: Cardinality) -> &[RelationEntry] {
        match cardinality {
            Cardinality::OneToOne => &self.one_to_one,
            Cardinality::OneToMany => &self.one_to_many,
            Cardinality::ManyToOne => &self.many_to_one,
            Cardinality::ManyToMany => &self.many_to_many,
        }
    }

    /// Append an entry to the bucket for a cardinality.
    pub fn push(&mut self, cardinality: Cardinality, entry: RelationEntry) {
        let bucket = match cardinality {
            Cardinality::OneToOne => &mut self.one_to_one,
            Cardinality::OneToMany => &mut self.one_to_many,
            Cardinality::ManyToOne => &mut self.many_to_one,
            Cardinality::ManyToMany => &mut self.many_to_many,
        };
        bucket.push(entry);
    }

    /// Find the bucket and entry for a relation property.
    pub fn find(&self, key: &str) -> Option<(Cardinality, &RelationEntry)> {
        Cardinality::ALL.into_iter().find_map(|c| {
            self.bucket(c)
                .iter()
                .find(|e| e.key == key)
                .map(|e| (c, e))
        })
    }

    /// Cardinality of a relation property, if classified.
    pub fn cardinality_of(&self, key: &str) -> Option<Cardinality> {
        self.find(key).map(|(c, _)| c)
    }

    /// Iterate all entries with their cardinality, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (Cardinality, &RelationEntry)> {
        Cardinality::ALL
            .into_iter()
            .flat_map(move |c| self.bucket(c).iter().map(move |e| (c, e)))
    }

    /// Total number of classified entries.
    pub fn len(&self) -> usize {
        self.one_to_one.len()
            + self.one_to_many.len()
            + self.many_to_one.len()
            + self.many_to_many.len()
    }

    /// Check if every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
