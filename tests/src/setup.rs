pub use file::SetupFile;

mod memory;
pub use memory::SetupMemory;

use jobstore::{Result, Store};

/// Provides an isolated store location for one test.
pub trait Setup: 'static {
    /// Opens a new handle on the test's store. Every call reaches the same
    /// data.
    fn open(&self) -> Result<Store>;

    /// Opens a raw connection for checking stored rows.
    fn raw(&self) -> rusqlite::Connection;
}
