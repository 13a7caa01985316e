/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Signed 64-bit integer
    Integer,

    /// Boolean, persisted as `0` / `1`
    Boolean,

    /// UTF-8 text
    Text,

    /// Structured data, persisted as JSON text
    Json,
}
