use super::{Column, Table, Type};

/// The relational layout a job aggregate is persisted into.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    /// The four tables of the job store, parents before children.
    pub fn job_store() -> Schema {
        let job = Table::new("job")
            .column(Column::new("name", Type::Text).unique())
            .column(Column::new("description", Type::Text).nullable())
            .column(Column::new("priority", Type::Integer))
            .column(Column::new("mode", Type::Text))
            .column(Column::new("active", Type::Boolean))
            .column(Column::new("input", Type::Text))
            .column(Column::new("input_parameters", Type::Json))
            .column(Column::new("output", Type::Text))
            .column(Column::new("output_parameters", Type::Json));

        let field = Table::new("field")
            .column(Column::new("job_id", Type::Integer).references("job", "id"))
            .column(Column::new("input", Type::Text))
            .column(Column::new("output", Type::Text))
            .unique_index(&["job_id", "output"]);

        let rule = Table::new("rule")
            .column(Column::new("field_id", Type::Integer).references("field", "id"))
            .column(Column::new("name", Type::Text))
            .column(Column::new("method", Type::Text))
            .column(Column::new("params", Type::Json))
            .column(Column::new("active", Type::Boolean))
            .column(Column::new("blocking", Type::Boolean))
            .column(Column::new("priority", Type::Integer))
            .column(Column::new("description", Type::Text).nullable())
            .unique_index(&["field_id", "name"]);

        let hook = Table::new("hook")
            .column(Column::new("job_id", Type::Integer).references("job", "id"))
            .column(Column::new("name", Type::Text))
            .column(Column::new("method", Type::Text))
            .column(Column::new("when", Type::Text))
            .column(Column::new("active", Type::Boolean))
            .column(Column::new("priority", Type::Integer))
            .column(Column::new("description", Type::Text).nullable())
            .unique_index(&["job_id", "name"]);

        Schema {
            tables: vec![job, field, rule, hook],
        }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}
