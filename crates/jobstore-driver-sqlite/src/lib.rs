mod load;
mod reconcile;
mod serializer;
mod value;

pub(crate) use serializer::Serializer;

use jobstore_core::{
    driver::{Deletions, Driver},
    schema::db::Schema,
    Error, Job, Result,
};
use rusqlite::{Connection as RusqliteConnection, OpenFlags, TransactionBehavior};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};
use url::Url;

/// How long a connection waits on another process holding the write lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

static NEXT_IN_MEMORY: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),

    /// A named in-memory database shared by every connection of this driver.
    /// It lives as long as at least one connection stays open.
    InMemory(String),
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(jobstore_core::err!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            ));
        }

        if url.path() == ":memory:" {
            Ok(Self::in_memory())
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        let n = NEXT_IN_MEMORY.fetch_add(1, Ordering::Relaxed);
        Self::InMemory(format!(
            "file:jobstore-{}-{}?mode=memory&cache=shared",
            std::process::id(),
            n
        ))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory(_) => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn jobstore_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory(uri) => Connection::open_uri(uri)?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Self::configure(connection)
    }

    fn open_uri(uri: &str) -> Result<Self> {
        let connection =
            RusqliteConnection::open_with_flags(uri, OpenFlags::default() | OpenFlags::SQLITE_OPEN_URI)
                .map_err(Error::driver_operation_failed)?;
        Self::configure(connection)
    }

    fn configure(connection: RusqliteConnection) -> Result<Self> {
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .map_err(Error::driver_operation_failed)?;
        connection
            .execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }
}

impl jobstore_core::Connection for Connection {
    fn push_schema(&mut self, schema: &Schema) -> Result<()> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(Error::driver_operation_failed)?;

        for table in &schema.tables {
            tx.execute(&Serializer::create_table(table), [])
                .map_err(Error::driver_operation_failed)?;

            for index in &table.indices {
                tx.execute(&Serializer::create_index(index), [])
                    .map_err(Error::driver_operation_failed)?;
            }
        }

        tx.commit().map_err(Error::driver_operation_failed)
    }

    fn load_job(&mut self, name: &str) -> Result<Option<Job>> {
        // A deferred transaction never takes the write lock; it only pins one
        // snapshot across the per-table reads.
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Deferred)
            .map_err(Error::driver_operation_failed)?;

        let job = load::job(&tx, name)?;

        tx.commit().map_err(Error::driver_operation_failed)?;
        Ok(job)
    }

    fn save_job(&mut self, job: &Job, deletions: &Deletions) -> Result<Job> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(Error::driver_operation_failed)?;

        let saved = reconcile::save(&tx, job, deletions)?;

        tx.commit().map_err(Error::driver_operation_failed)?;
        Ok(saved)
    }

    fn delete_job(&mut self, name: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(Error::driver_operation_failed)?;

        reconcile::delete(&tx, name)?;

        tx.commit().map_err(Error::driver_operation_failed)
    }
}
