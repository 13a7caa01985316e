use crate::Setup;

use jobstore::{Result, Store};
use jobstore_driver_sqlite::Sqlite;
use rusqlite::OpenFlags;

/// A named in-memory database private to the test.
///
/// The database lives as long as one connection to it stays open, which the
/// first store handle of a [`crate::StoreTest`] guarantees.
pub struct SetupMemory {
    uri: String,
}

impl SetupMemory {
    pub fn new() -> SetupMemory {
        let Sqlite::InMemory(uri) = Sqlite::in_memory() else {
            unreachable!("in_memory always names a shared in-memory database")
        };
        SetupMemory { uri }
    }
}

impl Default for SetupMemory {
    fn default() -> Self {
        SetupMemory::new()
    }
}

impl Setup for SetupMemory {
    fn open(&self) -> Result<Store> {
        Store::with_driver(Sqlite::InMemory(self.uri.clone()))
    }

    fn raw(&self) -> rusqlite::Connection {
        rusqlite::Connection::open_with_flags(
            &self.uri,
            OpenFlags::default() | OpenFlags::SQLITE_OPEN_URI,
        )
        .unwrap()
    }
}
