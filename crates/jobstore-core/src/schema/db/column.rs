use super::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The database storage type of the column.
    pub storage_ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is the table's primary key
    pub primary_key: bool,

    /// True if the column is an integer that should be auto-incremented
    /// with each insertion of a new row.
    pub auto_increment: bool,

    /// True if values must be unique across the table
    pub unique: bool,

    /// Row-level reference to an owning table
    pub references: Option<ForeignKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
}

impl Column {
    /// A non-null column of the given type.
    pub fn new(name: impl Into<String>, storage_ty: Type) -> Column {
        Column {
            name: name.into(),
            storage_ty,
            nullable: false,
            primary_key: false,
            auto_increment: false,
            unique: false,
            references: None,
        }
    }

    /// The auto-incremented integer surrogate key every table carries.
    pub fn id() -> Column {
        Column {
            primary_key: true,
            auto_increment: true,
            ..Column::new("id", Type::Integer)
        }
    }

    pub fn nullable(mut self) -> Column {
        self.nullable = true;
        self
    }

    pub fn unique(mut self) -> Column {
        self.unique = true;
        self
    }

    pub fn references(mut self, table: &str, column: &str) -> Column {
        self.references = Some(ForeignKey {
            table: table.to_string(),
            column: column.to_string(),
        });
        self
    }
}
