//! Compiles a schema file and prints the IR.
//!
//! ```bash
//! # Compile the bundled helpdesk schema
//! cargo run --example compile_demo
//!
//! # Compile another schema with debug logging
//! NESTGEN_LOG_LEVEL=debug cargo run --example compile_demo -- prisma/schema.prisma
//!
//! # Dump the IR as JSON for an external generator
//! NESTGEN_OUTPUT=json cargo run --example compile_demo
//! ```

use nestgen::schema::{CompilerConfig, compile_schema_file_with, config::CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var("NESTGEN_LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let filter = EnvFilter::try_new(format!("nestgen={level},nestgen_schema={level}"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = if std::path::Path::new(CONFIG_FILE_NAME).exists() {
        CompilerConfig::from_file(CONFIG_FILE_NAME)?
    } else {
        CompilerConfig::default()
    };

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/helpdesk.prisma").into());

    let ir = compile_schema_file_with(&path, &config)?;

    if std::env::var("NESTGEN_OUTPUT").as_deref() == Ok("json") {
        println!("{}", serde_json::to_string_pretty(&ir)?);
        return Ok(());
    }

    println!("=== {} ===\n", ir);

    for e in ir.enums() {
        println!("enum {} {:?}", e.name(), e.values);
    }

    for model in ir.models() {
        println!("\nmodel {}", model.name());
        for property in &model.properties {
            println!("  {:<40} -> {}", property.to_string(), property.wire_type());
        }

        let Some(record) = ir.relations(model.name()) else {
            continue;
        };
        for (cardinality, entry) in record.iter() {
            match &entry.deep_key {
                Some(deep_key) => println!(
                    "  [{}] {} -> {} (deep key: {})",
                    cardinality,
                    entry.key,
                    entry.value,
                    deep_key.join(", ")
                ),
                None => println!("  [{}] {} -> {}", cardinality, entry.key, entry.value),
            }
        }
    }

    Ok(())
}
