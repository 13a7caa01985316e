pub mod config;
pub use config::Config;

pub mod logging;

mod reader;
pub use reader::Reader;

mod store;
pub use store::Store;

mod writer;
pub use writer::Writer;

pub use jobstore_core::{
    schema::PropType, Entity, Error, Field, Hook, Job, Mode, Params, Result, Rule, Type, Value,
};
