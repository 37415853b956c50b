//! Pest grammar parser for field declaration lines.

use pest_derive::Parser;

/// Parser for one field declaration line.
#[derive(Parser)]
#[grammar = "parser/field.pest"]
pub struct FieldLineParser;
