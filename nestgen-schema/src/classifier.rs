//! Type token classification.
//!
//! Turns a raw type token such as `String?`, `Role[]` or `Decimal` into a
//! [`FieldType`] plus nullable/list flags. Unknown tokens never fail; they
//! classify as [`ScalarType::Unsupported`].

use smol_str::SmolStr;

use crate::ast::{FieldType, ScalarType};
use crate::registry::SchemaContext;

/// Result of classifying one type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Classified type.
    pub field_type: FieldType,
    /// `?` suffix present.
    pub nullable: bool,
    /// `[]` suffix present.
    pub is_array: bool,
}

/// Strip the `?` suffix, then the `[]` suffix, from a raw type token.
pub fn split_modifiers(raw: &str) -> (&str, bool, bool) {
    let (rest, nullable) = match raw.strip_suffix('?') {
        Some(rest) => (rest, true),
        None => (raw, false),
    };
    let (bare, is_array) = match rest.strip_suffix("[]") {
        Some(bare) => (bare, true),
        None => (rest, false),
    };
    (bare, nullable, is_array)
}

/// Classify a bare type token.
///
/// Lookup order: `Decimal` with a money marker, the scalar keyword table,
/// declared enums, declared models. Anything else is `Unsupported`. A model
/// that shares its name with a scalar keyword is shadowed by the keyword.
pub fn classify_bare(bare: &str, is_money: bool, ctx: &SchemaContext) -> FieldType {
    if is_money && bare == ScalarType::Decimal.as_str() {
        return FieldType::Scalar(ScalarType::Money);
    }

    if let Some(scalar) = ScalarType::from_keyword(bare) {
        return FieldType::Scalar(scalar);
    }

    if ctx.is_enum(bare) {
        return FieldType::Enum(SmolStr::new(bare));
    }

    if ctx.is_model(bare) {
        return FieldType::Relation(SmolStr::new(bare));
    }

    tracing::trace!(token = bare, "unrecognized type token, treating as Unsupported");
    FieldType::Scalar(ScalarType::Unsupported)
}

/// Classify a raw type token including its modifiers.
pub fn classify(raw: &str, is_money: bool, ctx: &SchemaContext) -> Classification {
    let (bare, nullable, is_array) = split_modifiers(raw);

    Classification {
        field_type: classify_bare(bare, is_money, ctx),
        nullable,
        is_array,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AttributeMarkers;
    use crate::registry::Registry;
    use crate::scanner::scan;

    fn make_ctx() -> SchemaContext {
        let registry = Registry::collect(&scan(
            "model User {\n}\nmodel Post {\n}\nenum Role {\n}\nmodel String {\n}",
        ));
        SchemaContext::new(&registry, AttributeMarkers::default())
    }

    // ==================== Modifiers ====================

    #[test]
    fn test_split_modifiers() {
        assert_eq!(split_modifiers("Int"), ("Int", false, false));
        assert_eq!(split_modifiers("String?"), ("String", true, false));
        assert_eq!(split_modifiers("Post[]"), ("Post", false, true));
        assert_eq!(split_modifiers("Post[]?"), ("Post", true, true));
    }

    #[test]
    fn test_split_modifiers_only_suffixes() {
        assert_eq!(split_modifiers("?Int"), ("?Int", false, false));
        assert_eq!(split_modifiers("[]"), ("", false, true));
    }

    // ==================== Scalars ====================

    #[test]
    fn test_classify_scalars() {
        let ctx = make_ctx();
        for (token, scalar) in [
            ("Boolean", ScalarType::Boolean),
            ("Int", ScalarType::Int),
            ("BigInt", ScalarType::BigInt),
            ("Float", ScalarType::Float),
            ("Decimal", ScalarType::Decimal),
            ("DateTime", ScalarType::DateTime),
            ("Json", ScalarType::Json),
            ("Bytes", ScalarType::Bytes),
            ("Unsupported", ScalarType::Unsupported),
        ] {
            assert_eq!(
                classify_bare(token, false, &ctx),
                FieldType::Scalar(scalar),
                "token {token}"
            );
        }
    }

    #[test]
    fn test_classify_money() {
        let ctx = make_ctx();
        assert_eq!(
            classify_bare("Decimal", true, &ctx),
            FieldType::Scalar(ScalarType::Money)
        );
        assert_eq!(
            classify_bare("Decimal", false, &ctx),
            FieldType::Scalar(ScalarType::Decimal)
        );
    }

    #[test]
    fn test_money_marker_only_affects_decimal() {
        let ctx = make_ctx();
        assert_eq!(
            classify_bare("Float", true, &ctx),
            FieldType::Scalar(ScalarType::Float)
        );
    }

    // ==================== References ====================

    #[test]
    fn test_classify_enum_and_relation() {
        let ctx = make_ctx();
        assert_eq!(classify_bare("Role", false, &ctx), FieldType::Enum("Role".into()));
        assert_eq!(
            classify_bare("User", false, &ctx),
            FieldType::Relation("User".into())
        );
    }

    #[test]
    fn test_scalar_keyword_shadows_model() {
        let ctx = make_ctx();
        assert_eq!(
            classify_bare("String", false, &ctx),
            FieldType::Scalar(ScalarType::String)
        );
    }

    #[test]
    fn test_classify_unknown_is_unsupported() {
        let ctx = make_ctx();
        for token in ["Geometry", "Unsupported(\"circle\")", "user", ""] {
            assert_eq!(
                classify_bare(token, false, &ctx),
                FieldType::Scalar(ScalarType::Unsupported),
                "token {token}"
            );
        }
    }

    // ==================== Full Tokens ====================

    #[test]
    fn test_classify_with_modifiers() {
        let ctx = make_ctx();

        let c = classify("Post[]", false, &ctx);
        assert_eq!(c.field_type, FieldType::Relation("Post".into()));
        assert!(c.is_array);
        assert!(!c.nullable);

        let c = classify("Role?", false, &ctx);
        assert_eq!(c.field_type, FieldType::Enum("Role".into()));
        assert!(c.nullable);
        assert!(!c.is_array);

        let c = classify("Decimal?", true, &ctx);
        assert_eq!(c.field_type, FieldType::Scalar(ScalarType::Money));
        assert!(c.nullable);
    }
}
