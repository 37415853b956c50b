//! Field attribute definitions.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::config::AttributeMarkers;

/// An attribute applied to a field, e.g. `@default(now())` or `@db.Money`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Dotted attribute path without the `@` prefix (`db.Money`).
    pub path: SmolStr,
    /// Raw argument text between the outer parentheses, if any.
    pub args: Option<String>,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new(path: impl Into<SmolStr>, args: Option<String>) -> Self {
        Self {
            path: path.into(),
            args,
        }
    }

    /// Create an attribute with no arguments.
    pub fn simple(path: impl Into<SmolStr>) -> Self {
        Self::new(path, None)
    }

    /// Get the attribute path as a string.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Check if this attribute has the given path.
    pub fn is(&self, path: &str) -> bool {
        self.path.as_str() == path
    }

    /// Check if this attribute matches a marker such as `@db.Money`.
    pub fn matches_marker(&self, marker: &str) -> bool {
        marker.strip_prefix('@').is_some_and(|m| self.is(m))
    }

    /// Relation name argument, positional or passed as `name:`.
    ///
    /// `@relation("Reporter", fields: [reporterId])`,
    /// `@relation(name: "Reporter")` and
    /// `@relation(fields: [reporterId], references: [id], name: "Reporter")`
    /// all yield `Reporter`.
    pub fn name_arg(&self) -> Option<&str> {
        let args = split_args(self.args.as_deref()?);

        if let Some(name) = args.first().copied().and_then(string_literal) {
            return Some(name);
        }

        args.into_iter().find_map(|arg| {
            let (key, value) = arg.split_once(':')?;
            if key.trim() != "name" {
                return None;
            }
            string_literal(value)
        })
    }
}

/// Split an argument list on commas outside brackets, parentheses and strings.
fn split_args(args: &str) -> Vec<&str> {
    let mut parts = vec![];
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in args.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(args[start..].trim());

    parts.retain(|p| !p.is_empty());
    parts
}

/// Contents of a value that is a single string literal.
fn string_literal(value: &str) -> Option<&str> {
    value
        .trim()
        .strip_prefix('"')?
        .strip_suffix('"')
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.path)?;
        if let Some(args) = &self.args {
            write!(f, "({})", args)?;
        }
        Ok(())
    }
}

/// Flags derived from a field's attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttributes {
    /// Primary key marker present.
    pub is_id: bool,
    /// Uniqueness marker present.
    pub is_unique: bool,
    /// Default/autoincrement marker present.
    pub is_auto_generated: bool,
    /// Currency storage marker present.
    pub is_money: bool,
    /// Relation name given to `@relation`, if any.
    pub relation_name: Option<SmolStr>,
}

impl FieldAttributes {
    /// Extract structured flags from raw attributes.
    pub fn extract(attributes: &[Attribute], markers: &AttributeMarkers) -> Self {
        let mut attrs = Self::default();

        for attr in attributes {
            let hit = |list: &[String]| list.iter().any(|m| attr.matches_marker(m));

            attrs.is_id |= hit(&markers.id);
            attrs.is_unique |= hit(&markers.unique);
            attrs.is_auto_generated |= hit(&markers.auto);
            attrs.is_money |= hit(&markers.money);

            if attr.is("relation") && attrs.relation_name.is_none() {
                attrs.relation_name = attr.name_arg().map(SmolStr::new);
            }
        }

        attrs
    }
}
