//! # nestgen-schema
//!
//! Schema compiler for Prisma-style schema files.
//!
//! This crate provides:
//! - A line scanner and name registry for `model` and `enum` blocks
//! - Field extraction and type classification, including `Money` detection
//! - Relation cardinality inference with deep-key disambiguation
//! - An immutable intermediate representation ([`Ir`]) for code generators
//! - Configuration parser for `nestgen.toml` files
//!
//! Compilation is lenient: unknown types become `Unsupported`, malformed
//! lines are skipped and an empty schema yields an empty IR. Only file I/O
//! and configuration loading can fail.
//!
//! ## Example
//!
//! ```rust
//! use nestgen_schema::{Cardinality, compile_schema};
//!
//! let ir = compile_schema(r#"
//! model User {
//!   id    Int    @id @default(autoincrement())
//!   email String @unique
//!   posts Post[]
//! }
//!
//! model Post {
//!   id       Int  @id
//!   authorId Int
//!   author   User @relation(fields: [authorId], references: [id])
//! }
//! "#);
//!
//! assert_eq!(ir.model_names().collect::<Vec<_>>(), vec!["User", "Post"]);
//! let user = ir.relations("User").unwrap();
//! assert_eq!(user.cardinality_of("posts"), Some(Cardinality::OneToMany));
//! ```

pub mod ast;
pub mod classifier;
pub mod compiler;
pub mod config;
pub mod error;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use ast::*;
pub use compiler::{
    compile_configured, compile_schema, compile_schema_file, compile_schema_file_with,
    compile_schema_with,
};
pub use config::{AttributeMarkers, CompilerConfig};
pub use error::{SchemaError, SchemaResult};
pub use registry::{Registry, SchemaContext};
pub use resolver::resolve_relations;
pub use scanner::{ScannedSchema, scan};
