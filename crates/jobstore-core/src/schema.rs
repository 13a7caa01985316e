//! Declarative descriptions of the job property table and of the relational
//! layout the job aggregate is persisted into.

pub mod db;
pub use db::Schema;

pub mod prop;
pub use prop::{PropType, Property};
