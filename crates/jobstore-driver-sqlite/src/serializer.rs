use jobstore_core::schema::db::{Column, Index, Table, Type};

use std::fmt::{self, Write};

/// Serializes schema definitions to SQLite DDL.
///
/// Statements are idempotent so the schema can be pushed on every start.
#[derive(Debug)]
pub(crate) struct Serializer;

/// A quoted identifier. `when` is a keyword, so every name is quoted.
struct Ident<S>(S);

struct ColumnDef<'a>(&'a Column);

struct Comma<'a, T>(&'a [T]);

impl Serializer {
    pub(crate) fn create_table(table: &Table) -> String {
        let columns: Vec<_> = table.columns.iter().map(ColumnDef).collect();

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            Ident(&table.name),
            Comma(&columns)
        )
    }

    pub(crate) fn create_index(index: &Index) -> String {
        let columns: Vec<_> = index.columns.iter().map(Ident).collect();

        format!(
            "CREATE {}INDEX IF NOT EXISTS {} ON {} ({})",
            if index.unique { "UNIQUE " } else { "" },
            Ident(&index.name),
            Ident(&index.on),
            Comma(&columns)
        )
    }
}

impl<S: AsRef<str>> fmt::Display for Ident<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.as_ref().chars() {
            if c == '"' {
                f.write_char('"')?;
            }
            f.write_char(c)?;
        }
        f.write_char('"')
    }
}

impl fmt::Display for ColumnDef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = self.0;

        write!(f, "{} {}", Ident(&column.name), storage_ty(column.storage_ty))?;

        if column.primary_key {
            f.write_str(" PRIMARY KEY")?;
            if column.auto_increment {
                f.write_str(" AUTOINCREMENT")?;
            }
        } else if !column.nullable {
            f.write_str(" NOT NULL")?;
        }

        if column.unique {
            f.write_str(" UNIQUE")?;
        }

        if let Some(fk) = &column.references {
            write!(f, " REFERENCES {} ({})", Ident(&fk.table), Ident(&fk.column))?;
        }

        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Comma<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for item in self.0 {
            write!(f, "{s}{item}")?;
            s = ", ";
        }
        Ok(())
    }
}

fn storage_ty(ty: Type) -> &'static str {
    match ty {
        // Booleans are stored as 0 / 1
        Type::Integer | Type::Boolean => "INTEGER",
        Type::Text | Type::Json => "TEXT",
    }
}
