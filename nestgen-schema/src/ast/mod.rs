//! Intermediate representation types produced by the schema compiler.
//!
//! This module contains all the types that represent a compiled schema.

mod attribute;
mod ir;
mod model;
mod property;
mod relation;
mod types;

pub use attribute::*;
pub use ir::*;
pub use model::*;
pub use property::*;
pub use relation::*;
pub use types::*;
