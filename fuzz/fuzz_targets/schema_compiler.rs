//! Fuzz target for the schema compiler.
//!
//! Compilation is lenient, so arbitrary text must always produce an IR.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_schema_compiler
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use nestgen_schema::compile_schema;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let ir = compile_schema(input);

        // Every model has a record
        for name in ir.model_names() {
            assert!(ir.relations(name).is_some());
        }
    }
});
