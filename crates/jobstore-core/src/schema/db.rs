mod column;
pub use column::{Column, ForeignKey};

mod index;
pub use index::Index;

mod schema;
pub use schema::Schema;

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;
