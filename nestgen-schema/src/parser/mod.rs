//! Field extraction for model and enum bodies.
//!
//! Each non-empty body line that is not attribute-only is parsed into a
//! [`FieldDecl`] and then classified into a [`Property`]. Lines that do not
//! parse are skipped; extraction never fails.

mod grammar;

use pest::Parser;
use pest::iterators::Pair;
use smol_str::SmolStr;

use crate::ast::{Attribute, FieldAttributes, Property};
use crate::classifier::classify;
use crate::registry::SchemaContext;
use crate::scanner::{Block, ScannedSchema};

pub use grammar::{FieldLineParser, Rule};

/// A parsed but not yet classified field line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name.
    pub name: SmolStr,
    /// Type token including any `?`/`[]` suffix.
    pub raw_type: SmolStr,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
}

/// Parse one normalized body line into a field declaration.
///
/// Returns `None` for empty lines, attribute-only lines (`@@index(...)`) and
/// anything the field grammar does not accept.
pub fn parse_field_line(line: &str) -> Option<FieldDecl> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('@') {
        return None;
    }

    let pairs = FieldLineParser::parse(Rule::field_line, line).ok()?;
    let mut inner = pairs.into_iter().next()?.into_inner();

    let name = SmolStr::new(inner.next()?.as_str());
    let raw_type = SmolStr::new(inner.next()?.as_str());
    let attributes = inner
        .filter(|p| p.as_rule() == Rule::attribute)
        .filter_map(parse_attribute)
        .collect();

    Some(FieldDecl {
        name,
        raw_type,
        attributes,
    })
}

/// Parse an attribute pair.
fn parse_attribute(pair: Pair<'_, Rule>) -> Option<Attribute> {
    let mut inner = pair.into_inner();
    let path = inner.next()?.as_str();

    let args = inner.next().map(|p| {
        let s = p.as_str();
        // Remove the outer parentheses
        s[1..s.len() - 1].trim().to_string()
    });

    Some(Attribute::new(path, args))
}

/// Build a property from a parsed declaration.
pub fn build_property(decl: FieldDecl, line: usize, ctx: &SchemaContext) -> Property {
    let flags = FieldAttributes::extract(&decl.attributes, ctx.markers());
    let class = classify(&decl.raw_type, flags.is_money, ctx);

    Property {
        key: decl.name,
        field_type: class.field_type,
        nullable: class.nullable,
        is_array: class.is_array,
        is_unique: flags.is_unique,
        is_auto_generated: flags.is_auto_generated,
        is_id: flags.is_id,
        relation_label: flags.relation_name,
        attributes: decl.attributes,
        line,
    }
}

/// Extract the ordered properties of a model block.
pub fn extract_properties(
    scanned: &ScannedSchema,
    block: &Block,
    ctx: &SchemaContext,
) -> Vec<Property> {
    scanned
        .body_lines(block.body)
        .filter_map(|(i, line)| match parse_field_line(line) {
            Some(decl) => Some(build_property(decl, i, ctx)),
            None => {
                tracing::trace!(model = %block.name, line = i, "skipping non-field line");
                None
            }
        })
        .collect()
}

/// Extract the ordered values of an enum block.
///
/// The first token of each body line is the value; attribute-only lines are
/// skipped.
pub fn extract_enum_values(scanned: &ScannedSchema, block: &Block) -> Vec<SmolStr> {
    scanned
        .body_lines(block.body)
        .filter_map(|(_, line)| line.split_whitespace().next())
        .filter(|token| !token.starts_with('@'))
        .map(SmolStr::new)
        .collect()
}
