//! Relation cardinality inference.
//!
//! Every relation property is classified on its own, from the shape of the
//! two models involved:
//!
//! | owning field | target has a to-one field back | cardinality |
//! |--------------|--------------------------------|-------------|
//! | to-one       | yes                            | one-to-one  |
//! | to-one       | no                             | many-to-one |
//! | to-many      | yes                            | one-to-many |
//! | to-many      | no                             | many-to-many|
//!
//! Self-relations follow the same table; the field being classified is never
//! its own back reference.
//!
//! One-to-many collections then get a deep key when the target holds more
//! than one many-to-one field back to the owner. Each collection is paired
//! with the many-to-one field it mirrors, first by `@relation` name and then
//! by declaration order, and the deep key lists the other fields.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::ast::{Cardinality, Model, Property, RelationEdge, RelationEntry, RelationRecord};

/// Classified edges of one model, in declaration order.
type ClassifiedEdges = Vec<(Cardinality, RelationEdge)>;

/// Resolve the relation record of every model.
///
/// Every model in `models` gets a record, empty when it has no relation
/// properties. Targets missing from `models` count as having no back
/// reference.
pub fn resolve_relations(models: &IndexMap<SmolStr, Model>) -> IndexMap<SmolStr, RelationRecord> {
    let classified: IndexMap<&str, ClassifiedEdges> = models
        .values()
        .map(|model| (model.name(), classify_model(models, model)))
        .collect();

    classified
        .iter()
        .map(|(name, edges)| {
            let mut record = RelationRecord::new();

            for (cardinality, edge) in edges {
                let mut entry = RelationEntry::new(edge.field_key.clone(), edge.target_model.clone());
                if *cardinality == Cardinality::OneToMany {
                    if let Some(deep_key) = deep_key(&classified, edges, edge) {
                        entry = entry.with_deep_key(deep_key);
                    }
                }
                record.push(*cardinality, entry);
            }

            (SmolStr::new(*name), record)
        })
        .collect()
}

/// Classify a single relation property of `source`.
///
/// Returns `None` when the property does not reference a model.
pub fn classify_edge(
    models: &IndexMap<SmolStr, Model>,
    source: &Model,
    property: &Property,
) -> Option<Cardinality> {
    let edge = RelationEdge::from_property(source.name.clone(), property)?;
    let is_self = edge.is_self_relation();

    let has_back_reference = models.get(edge.target_model.as_str()).is_some_and(|target| {
        target.to_one().any(|p| {
            p.relation_name() == Some(source.name()) && !(is_self && p.key == edge.field_key)
        })
    });

    let cardinality = match (edge.is_array, has_back_reference) {
        (false, true) => Cardinality::OneToOne,
        (false, false) => Cardinality::ManyToOne,
        (true, true) => Cardinality::OneToMany,
        (true, false) => Cardinality::ManyToMany,
    };
    Some(cardinality)
}

fn classify_model(models: &IndexMap<SmolStr, Model>, model: &Model) -> ClassifiedEdges {
    model
        .relation_properties()
        .filter_map(|property| {
            let cardinality = classify_edge(models, model, property)?;
            let edge = RelationEdge::from_property(model.name.clone(), property)?;
            tracing::trace!(
                model = %edge.source_model,
                field = %edge.field_key,
                target = %edge.target_model,
                %cardinality,
                "classified relation"
            );
            Some((cardinality, edge))
        })
        .collect()
}

/// Many-to-one fields on the target that a one-to-many collection must
/// filter out, or `None` when the reverse reference is unambiguous.
fn deep_key(
    classified: &IndexMap<&str, ClassifiedEdges>,
    own: &[(Cardinality, RelationEdge)],
    collection: &RelationEdge,
) -> Option<Vec<SmolStr>> {
    let back: Vec<&RelationEdge> = classified
        .get(collection.target_model.as_str())?
        .iter()
        .filter(|(c, e)| *c == Cardinality::ManyToOne && e.target_model == collection.source_model)
        .map(|(_, e)| e)
        .collect();

    if back.len() < 2 {
        return None;
    }

    let collections: Vec<&RelationEdge> = own
        .iter()
        .filter(|(c, e)| *c == Cardinality::OneToMany && e.target_model == collection.target_model)
        .map(|(_, e)| e)
        .collect();

    let position = collections
        .iter()
        .position(|c| c.field_key == collection.field_key)?;
    let paired = pair_collections(&collections, &back)[position];

    let remaining: Vec<SmolStr> = back
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != paired)
        .map(|(_, e)| e.field_key.clone())
        .collect();

    (!remaining.is_empty()).then_some(remaining)
}

/// Pair each collection with the index of the back field it mirrors.
///
/// Matching `@relation` names win; unmatched collections take the remaining
/// back fields in declaration order.
fn pair_collections(collections: &[&RelationEdge], back: &[&RelationEdge]) -> Vec<Option<usize>> {
    let mut taken = vec![false; back.len()];
    let mut pairs = vec![None; collections.len()];

    for (i, collection) in collections.iter().enumerate() {
        let Some(label) = &collection.label else {
            continue;
        };
        if let Some(j) = (0..back.len()).find(|&j| !taken[j] && back[j].label.as_ref() == Some(label)) {
            taken[j] = true;
            pairs[i] = Some(j);
        }
    }

    for pair in pairs.iter_mut().filter(|p| p.is_none()) {
        if let Some(j) = (0..back.len()).find(|&j| !taken[j]) {
            taken[j] = true;
            *pair = Some(j);
        }
    }

    pairs
}
