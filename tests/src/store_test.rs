use crate::Setup;

use jobstore::{Reader, Result, Store, Writer};

/// Per-test fixture: an isolated store plus helpers to inspect its rows.
pub struct StoreTest {
    setup: Box<dyn Setup>,
    store: Store,
}

impl StoreTest {
    pub fn new(setup: impl Setup) -> StoreTest {
        let store = setup.open().expect("failed to open test store");
        StoreTest {
            setup: Box::new(setup),
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Opens a second, independent handle on the same data.
    pub fn reopen(&self) -> Store {
        self.setup.open().expect("failed to reopen test store")
    }

    pub fn writer(&self) -> Writer {
        self.store.writer().unwrap()
    }

    pub fn writer_for(&self, name: &str) -> Result<Writer> {
        self.store.writer_for(name)
    }

    pub fn reader(&self, name: &str) -> Result<Reader> {
        self.store.reader(name)
    }

    /// Number of rows currently stored in `table`.
    pub fn count(&self, table: &str) -> i64 {
        self.setup
            .raw()
            .query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| {
                row.get(0)
            })
            .unwrap()
    }

    /// Row counts of job, field, rule and hook, in that order.
    pub fn counts(&self) -> [i64; 4] {
        ["job", "field", "rule", "hook"].map(|table| self.count(table))
    }

    /// Runs `sql` and returns the first column of the first row.
    pub fn raw_text(&self, sql: &str) -> String {
        self.setup.raw().query_row(sql, [], |row| row.get(0)).unwrap()
    }
}
