use super::{Column, Index};

/// A database table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    pub indices: Vec<Index>,
}

impl Table {
    /// A table holding only the surrogate key column.
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            columns: vec![Column::id()],
            indices: vec![],
        }
    }

    pub fn column(mut self, column: Column) -> Table {
        self.columns.push(column);
        self
    }

    /// Adds a unique index over `columns`.
    pub fn unique_index(mut self, columns: &[&str]) -> Table {
        self.indices.push(Index::unique(&self.name, columns));
        self
    }

    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn primary_key_column(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.primary_key)
    }
}
