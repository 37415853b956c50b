//! Structured fuzzing for the schema compiler.
//!
//! Generates well-formed schemas with random relation shapes and checks that
//! every relation property is classified exactly once.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_schema_structured
//! ```

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use nestgen_schema::compile_schema;

const MODEL_NAMES: [&str; 4] = ["User", "Post", "Tag", "Team"];

/// A generated field type.
#[derive(Debug, Arbitrary)]
enum FuzzFieldType {
    Int,
    String,
    Decimal,
    DateTime,
    Unknown,
    Model(u8),
}

impl FuzzFieldType {
    fn render(&self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::String => "String",
            Self::Decimal => "Decimal",
            Self::DateTime => "DateTime",
            Self::Unknown => "Geometry",
            Self::Model(i) => MODEL_NAMES[*i as usize % MODEL_NAMES.len()],
        }
    }
}

/// A generated field modifier.
#[derive(Debug, Arbitrary)]
enum FuzzFieldModifier {
    None,
    Optional,
    List,
}

/// A generated field.
#[derive(Debug, Arbitrary)]
struct FuzzField {
    field_type: FuzzFieldType,
    modifier: FuzzFieldModifier,
    money: bool,
    comment: bool,
}

/// A generated model.
#[derive(Debug, Arbitrary)]
struct FuzzModel {
    fields: Vec<FuzzField>,
}

fn render(models: &[FuzzModel]) -> String {
    let mut out = String::new();
    for (m, model) in models.iter().take(MODEL_NAMES.len()).enumerate() {
        out.push_str(&format!("model {} {{\n", MODEL_NAMES[m]));
        for (f, field) in model.fields.iter().take(16).enumerate() {
            let suffix = match field.modifier {
                FuzzFieldModifier::None => "",
                FuzzFieldModifier::Optional => "?",
                FuzzFieldModifier::List => "[]",
            };
            out.push_str(&format!("  f{f} {}{suffix}", field.field_type.render()));
            if field.money {
                out.push_str(" @db.Money");
            }
            if field.comment {
                out.push_str(" // note");
            }
            out.push('\n');
        }
        out.push_str("}\n");
    }
    out
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(models) = Vec::<FuzzModel>::arbitrary(&mut u) else {
        return;
    };

    let ir = compile_schema(&render(&models));

    for model in ir.models() {
        let record = ir.relations(model.name()).expect("record per model");
        assert_eq!(record.len(), model.relation_properties().count());
        for property in model.relation_properties() {
            assert!(record.cardinality_of(property.key()).is_some());
        }
    }
});
