//! # nestgen
//!
//! Compiles Prisma-style schema files into a typed intermediate
//! representation that code generators consume.
//!
//! nestgen provides:
//! - Lenient parsing of `model` and `enum` blocks
//! - Scalar, enum and relation classification with `Money` detection
//! - Four-way relation cardinality inference with deep keys
//! - `nestgen.toml` configuration for schema location and attribute markers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nestgen::prelude::*;
//!
//! fn main() -> Result<(), SchemaError> {
//!     let config = CompilerConfig::from_file("nestgen.toml")?;
//!     let ir = compile_configured(&config)?;
//!
//!     for model in ir.models() {
//!         let count = ir.relations(model.name()).map_or(0, |r| r.len());
//!         println!("{}: {} relations", model.name(), count);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Schema compilation and IR types.
pub mod schema {
    pub use nestgen_schema::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::schema::{
        Cardinality, CompilerConfig, Ir, Model, Property, RelationRecord, SchemaError,
        compile_configured, compile_schema, compile_schema_file,
    };
}

// Re-export key types at the crate root
pub use schema::{Ir, SchemaError, compile_schema};
