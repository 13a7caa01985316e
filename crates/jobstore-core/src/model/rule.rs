use super::Params;

/// A transform or validation step applied to a field by the execution engine.
///
/// Only the definition lives here; `method` is opaque to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Store-assigned key, `None` until persisted.
    pub id: Option<i64>,

    /// Unique within the owning field
    pub name: String,

    pub method: String,

    pub params: Params,

    pub active: bool,

    /// A failing blocking rule halts processing of the record.
    pub blocking: bool,

    pub priority: i64,

    pub description: Option<String>,
}

impl Rule {
    /// Returns an active, non-blocking rule with priority 1 and no params.
    pub fn new(name: impl Into<String>, method: impl Into<String>) -> Rule {
        Rule {
            id: None,
            name: name.into(),
            method: method.into(),
            params: Params::new(),
            active: true,
            blocking: false,
            priority: 1,
            description: None,
        }
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
