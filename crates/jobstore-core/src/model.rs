mod field;
pub use field::Field;

mod hook;
pub use hook::Hook;

mod job;
pub use job::Job;

mod mode;
pub use mode::Mode;

mod rule;
pub use rule::Rule;

/// Open-shaped structured data attached to a job's connectors and to rules.
///
/// Stored as JSON text and parsed back on read.
pub type Params = serde_json::Map<String, serde_json::Value>;
