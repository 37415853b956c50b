//! Schema compilation entry points.
//!
//! Compilation runs the stages in a fixed order: scan, register names,
//! extract properties per model, resolve relations, assemble the [`Ir`].
//! Malformed input never fails; only reading a schema file can.

use std::path::Path;

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::ast::{Enum, Ir, LineRange, Model};
use crate::config::CompilerConfig;
use crate::error::{SchemaError, SchemaResult};
use crate::parser::{extract_enum_values, extract_properties};
use crate::registry::{Registry, SchemaContext};
use crate::resolver::resolve_relations;
use crate::scanner::{BlockKind, ScannedSchema, scan};

/// Compile schema source with the default attribute markers.
pub fn compile_schema(source: &str) -> Ir {
    compile_schema_with(source, &CompilerConfig::default())
}

/// Compile schema source with the markers from `config`.
pub fn compile_schema_with(source: &str, config: &CompilerConfig) -> Ir {
    let scanned = scan(source);
    let registry = Registry::collect(&scanned);

    for name in registry.duplicate_models() {
        tracing::warn!(model = name, "model declared more than once, keeping the first");
    }
    for name in registry.duplicate_enums() {
        tracing::warn!(enum_name = name, "enum declared more than once, keeping the first");
    }

    let ctx = SchemaContext::new(&registry, config.attributes.clone());

    let enums: IndexMap<SmolStr, Enum> = ctx
        .enums()
        .map(|name| (name.clone(), build_enum(&scanned, name)))
        .collect();

    let models: IndexMap<SmolStr, Model> = ctx
        .models()
        .map(|name| (name.clone(), build_model(&scanned, name, &ctx)))
        .collect();

    let relations = resolve_relations(&models);
    let ir = Ir::new(enums, models, relations);

    let stats = ir.stats();
    tracing::debug!(
        models = stats.model_count,
        enums = stats.enum_count,
        properties = stats.property_count,
        relations = stats.relation_count,
        "compiled schema"
    );

    ir
}

/// Read and compile a schema file with the default attribute markers.
pub fn compile_schema_file(path: impl AsRef<Path>) -> SchemaResult<Ir> {
    compile_schema_file_with(path, &CompilerConfig::default())
}

/// Read and compile a schema file with the markers from `config`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn compile_schema_file_with(path: impl AsRef<Path>, config: &CompilerConfig) -> SchemaResult<Ir> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| SchemaError::io(path.display().to_string(), e))?;

    Ok(compile_schema_with(&content, config))
}

/// Compile the schema file named by `config`.
pub fn compile_configured(config: &CompilerConfig) -> SchemaResult<Ir> {
    compile_schema_file_with(config.schema_path(), config)
}

fn build_model(scanned: &ScannedSchema, name: &SmolStr, ctx: &SchemaContext) -> Model {
    let Some(block) = scanned.find_block(BlockKind::Model, name) else {
        // declared without a body
        return Model::new(name.clone(), LineRange::new(0, 0));
    };

    let mut model = Model::new(name.clone(), block.body);
    for property in extract_properties(scanned, block, ctx) {
        model.add_property(property);
    }
    model
}

fn build_enum(scanned: &ScannedSchema, name: &SmolStr) -> Enum {
    let Some(block) = scanned.find_block(BlockKind::Enum, name) else {
        return Enum::new(name.clone(), LineRange::new(0, 0));
    };

    let mut e = Enum::new(name.clone(), block.body);
    for value in extract_enum_values(scanned, block) {
        e.add_value(value);
    }
    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Cardinality, DataType};
    use pretty_assertions::assert_eq;

    const BLOG: &str = r#"
// Blog schema
model User {
  id        Int      @id @default(autoincrement())
  email     String   @unique
  role      Role     @default(USER)
  posts     Post[]
}

model Post {
  id        Int      @id
  title     String
  price     Decimal  @db.Money
  authorId  Int
  author    User     @relation(fields: [authorId], references: [id])
}

enum Role {
  USER
  ADMIN
}
"#;

    // ==================== Assembly ====================

    #[test]
    fn test_compile_blog() {
        let ir = compile_schema(BLOG);

        assert_eq!(ir.model_names().collect::<Vec<_>>(), vec!["User", "Post"]);
        assert_eq!(ir.enum_names().collect::<Vec<_>>(), vec!["Role"]);
        assert_eq!(ir.get_enum("Role").unwrap().values, vec!["USER", "ADMIN"]);

        let user = ir.get_model("User").unwrap();
        assert_eq!(user.id_property().map(|p| p.key()), Some("id"));
        assert_eq!(user.enum_references(), vec!["Role"]);

        let post = ir.properties("Post").unwrap();
        assert_eq!(post[2].data_type(), DataType::Money);

        assert_eq!(
            ir.relations("User").unwrap().cardinality_of("posts"),
            Some(Cardinality::OneToMany)
        );
        assert_eq!(
            ir.relations("Post").unwrap().cardinality_of("author"),
            Some(Cardinality::ManyToOne)
        );
    }

    #[test]
    fn test_compile_empty_schema() {
        let ir = compile_schema("");
        assert!(ir.is_empty());
        assert_eq!(ir.model_names().count(), 0);
        assert_eq!(ir.enum_names().count(), 0);
        assert!(ir.relations("User").is_none());
    }

    #[test]
    fn test_compile_is_idempotent() {
        assert_eq!(compile_schema(BLOG), compile_schema(BLOG));
    }

    #[test]
    fn test_model_without_body_is_present() {
        let ir = compile_schema("model Draft\nmodel Empty {}\n");
        assert_eq!(ir.model_names().collect::<Vec<_>>(), vec!["Draft", "Empty"]);
        for name in ["Draft", "Empty"] {
            assert_eq!(ir.properties(name).map(<[_]>::len), Some(0));
            assert!(ir.relations(name).unwrap().is_empty());
        }
    }

    #[test]
    fn test_duplicate_model_first_wins() {
        let ir = compile_schema("model A {\n  first Int\n}\nmodel A {\n  second Int\n}");
        assert_eq!(ir.model_names().collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(ir.properties("A").unwrap()[0].key(), "first");
    }

    #[test]
    fn test_commented_fields_are_excluded() {
        let ir = compile_schema("model A {\n  id Int\n  // old String\n  note String // temp\n}");
        let keys: Vec<_> = ir.properties("A").unwrap().iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec!["id"]);
    }

    #[test]
    fn test_custom_markers() {
        let config = CompilerConfig::from_str(
            "[attributes]\nunique = [\"@unique\", \"@natural\"]\nmoney = [\"@currency\"]\n",
        )
        .unwrap();
        let ir = compile_schema_with(
            "model Item {\n  sku String @natural\n  price Decimal @currency\n  cost Decimal @db.Money\n}",
            &config,
        );
        let props = ir.properties("Item").unwrap();
        assert!(props[0].is_unique);
        assert_eq!(props[1].data_type(), DataType::Money);
        assert_eq!(props[2].data_type(), DataType::Decimal);
    }

    // ==================== Files ====================

    #[test]
    fn test_compile_missing_file() {
        let err = compile_schema_file("/nonexistent/schema.prisma").unwrap_err();
        assert!(err.is_io());
    }
}
