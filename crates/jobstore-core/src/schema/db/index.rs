/// A secondary index over one or more columns of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub name: String,

    /// Name of the indexed table
    pub on: String,

    /// Indexed columns, in order
    pub columns: Vec<String>,

    pub unique: bool,
}

impl Index {
    pub fn unique(on: &str, columns: &[&str]) -> Index {
        Index {
            name: format!("index_{}_by_{}", on, columns.join("_and_")),
            on: on.to_string(),
            columns: columns.iter().map(|column| column.to_string()).collect(),
            unique: true,
        }
    }
}
