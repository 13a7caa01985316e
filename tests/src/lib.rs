#[macro_use]
mod macros;

pub mod setup;
pub use setup::Setup;

mod store_test;
pub use store_test::StoreTest;

use jobstore::{Params, Writer};

/// Sets the three properties every saved job needs.
pub fn stage(writer: &mut Writer, name: &str) {
    writer.set_prop("name", name).unwrap();
    writer.set_prop("input", "csv").unwrap();
    writer.set_prop("output", "rest").unwrap();
}

/// Builds a parameter map from a JSON object literal.
pub fn params(value: serde_json::Value) -> Params {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
