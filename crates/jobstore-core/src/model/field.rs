use super::Rule;

use std::collections::BTreeMap;

/// Maps an input column to an output field and carries the rules applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Store-assigned key, `None` until persisted.
    pub id: Option<i64>,

    /// Source column or field name
    pub input: String,

    /// Destination field name, unique within the owning job
    pub output: String,

    /// Rules keyed by name
    pub rules: BTreeMap<String, Rule>,
}

impl Field {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Field {
        Field {
            id: None,
            input: input.into(),
            output: output.into(),
            rules: BTreeMap::new(),
        }
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }
}
