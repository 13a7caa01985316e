mod deletions;
pub use deletions::Deletions;

use crate::{schema::db::Schema, Job, Result};

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to a concrete store.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the location the driver connects to.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection. Every reader and writer owns its own.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single connection to the store.
///
/// `save_job` and `delete_job` each run inside one transaction: either the
/// whole change is durable or none of it is.
pub trait Connection: Debug + Send {
    /// Creates the tables and indices of `schema` that do not exist yet.
    fn push_schema(&mut self, schema: &Schema) -> Result<()>;

    /// Loads the job called `name` with its fields, rules and hooks.
    fn load_job(&mut self, name: &str) -> Result<Option<Job>>;

    /// Reconciles the stored rows with `job`, applying `deletions` first.
    ///
    /// Existing field, rule and hook rows are kept as they are; only missing
    /// ones are inserted. Returns `job` with every store-assigned key filled in.
    fn save_job(&mut self, job: &Job, deletions: &Deletions) -> Result<Job>;

    /// Removes the job called `name` and everything it owns.
    fn delete_job(&mut self, name: &str) -> Result<()>;
}
