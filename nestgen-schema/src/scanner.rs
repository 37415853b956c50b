//! Line scanner for schema source text.
//!
//! The scanner normalizes the source into one entry per physical line and
//! locates the body of every `model` and `enum` block. Blocks are flat: a
//! body ends at the first following line that is exactly `}`.
//!
//! Any line containing `//` is blanked entirely. This also drops real content
//! that precedes a trailing comment (`name String // display name`); trailing
//! comments are not supported.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::ast::LineRange;

/// Kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// `model Name { ... }`
    Model,
    /// `enum Name { ... }`
    Enum,
}

impl BlockKind {
    /// Every block kind.
    pub const ALL: [BlockKind; 2] = [BlockKind::Model, BlockKind::Enum];

    /// Keyword introducing the block.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Enum => "enum",
        }
    }
}

/// A located `model` or `enum` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block kind.
    pub kind: BlockKind,
    /// Declared name.
    pub name: SmolStr,
    /// Index of the header line.
    pub header: usize,
    /// Body lines, excluding the header and the closing brace.
    pub body: LineRange,
}

/// Normalized schema lines plus located blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedSchema {
    /// One entry per source line; comment lines are empty.
    pub lines: Vec<String>,
    /// Blocks in declaration order.
    pub blocks: Vec<Block>,
}

impl ScannedSchema {
    /// Get a normalized line.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Non-empty lines of a body, with their indices.
    pub fn body_lines(&self, body: LineRange) -> impl Iterator<Item = (usize, &str)> {
        body.iter()
            .filter_map(move |i| self.line(i).map(|l| (i, l)))
            .filter(|(_, l)| !l.is_empty())
    }

    /// First block of the given kind and name.
    pub fn find_block(&self, kind: BlockKind, name: &str) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|b| b.kind == kind && b.name == name)
    }
}

/// Scan schema source into normalized lines and blocks.
pub fn scan(source: &str) -> ScannedSchema {
    let lines: Vec<String> = source.lines().map(normalize_line).collect();
    let blocks = locate_blocks(&lines);

    ScannedSchema { lines, blocks }
}

/// Trim a line and collapse whitespace runs; comment lines become empty.
pub fn normalize_line(line: &str) -> String {
    if line.contains("//") {
        return String::new();
    }
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a header line into its kind and declared name.
///
/// Only the first two tokens matter: `model User {`, `model User{` and a bare
/// `model User` all yield `User`.
pub fn parse_header(line: &str) -> Option<(BlockKind, &str)> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?;
    let kind = BlockKind::ALL.into_iter().find(|k| k.keyword() == keyword)?;
    let name = tokens.next()?.trim_end_matches(['{', '}']);
    if name.is_empty() {
        return None;
    }
    Some((kind, name))
}

fn locate_blocks(lines: &[String]) -> Vec<Block> {
    let mut blocks = vec![];

    for (i, line) in lines.iter().enumerate() {
        let Some((kind, name)) = parse_header(line) else {
            continue;
        };
        let Some(brace) = line.find('{') else {
            tracing::trace!(line = i, "header without opening brace");
            continue;
        };

        let start = i + 1;
        let end = if line[brace..].contains('}') {
            // `model Empty {}` closes on its own line
            start
        } else {
            lines[start..]
                .iter()
                .position(|l| l == "}")
                .map_or(lines.len(), |offset| start + offset)
        };

        blocks.push(Block {
            kind,
            name: SmolStr::new(name),
            header: i,
            body: LineRange::new(start, end),
        });
    }

    blocks
}
