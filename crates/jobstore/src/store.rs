use crate::{Config, Reader, Writer};

use jobstore_core::{driver::Driver, err, schema::db::Schema, Connection, Result};
use jobstore_driver_sqlite::Sqlite;

use std::path::Path;
use url::Url;

/// A handle to one job store location.
///
/// Creating the handle creates the schema; readers and writers handed out
/// afterwards each open their own connection.
#[derive(Debug)]
pub struct Store {
    driver: Box<dyn Driver>,

    /// Holds the store open. An in-memory database disappears with its last
    /// connection.
    _anchor: Box<dyn Connection>,
}

impl Store {
    /// Opens (creating if needed) the SQLite database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Store> {
        Store::with_driver(Sqlite::open(path))
    }

    /// Opens a private in-memory store.
    pub fn in_memory() -> Result<Store> {
        Store::with_driver(Sqlite::in_memory())
    }

    /// Opens the store named by a connection URL, e.g. `sqlite:jobs.db` or
    /// `sqlite::memory:`.
    pub fn connect(url: &str) -> Result<Store> {
        let parsed = Url::parse(url).map_err(|e| err!("invalid store URL; url={url}; {e}"))?;

        match parsed.scheme() {
            "sqlite" => Store::with_driver(Sqlite::new(url)?),
            scheme => Err(err!("unsupported store; scheme={scheme}; url={url}")),
        }
    }

    /// Opens the store at the configured `job.db` path.
    pub fn from_config(config: &Config) -> Result<Store> {
        Store::open(&config.job.db)
    }

    pub fn with_driver(driver: impl Driver) -> Result<Store> {
        let mut anchor = driver.connect()?;
        anchor.push_schema(&Schema::job_store())?;

        tracing::debug!(url = %driver.url(), "opened job store");

        Ok(Store {
            driver: Box::new(driver),
            _anchor: anchor,
        })
    }

    pub fn url(&self) -> std::borrow::Cow<'_, str> {
        self.driver.url()
    }

    /// Loads the job called `name` for reading.
    pub fn reader(&self, name: &str) -> Result<Reader> {
        Reader::load(self, name)
    }

    /// Starts a new job with default properties.
    pub fn writer(&self) -> Result<Writer> {
        Writer::new(self)
    }

    /// Loads the job called `name` as the target of further edits.
    pub fn writer_for(&self, name: &str) -> Result<Writer> {
        Writer::load(self, name)
    }

    pub(crate) fn connect_driver(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect()
    }
}
