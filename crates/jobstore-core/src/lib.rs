pub mod driver;
pub use driver::{Connection, Deletions, Driver};

mod error;
pub use error::{Entity, Error, IntoError};

pub mod model;
pub use model::{Field, Hook, Job, Mode, Params, Rule};

pub mod schema;

pub mod validate;

mod value;
pub use value::{Type, Value};

/// A Result type alias that uses the job store's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
