/// A lifecycle callback attached to a job.
#[derive(Debug, Clone, PartialEq)]
pub struct Hook {
    /// Store-assigned key, `None` until persisted.
    pub id: Option<i64>,

    /// Unique within the owning job
    pub name: String,

    pub method: String,

    /// Trigger point, an application-defined tag such as `before` or `after`
    pub when: String,

    pub active: bool,

    pub priority: i64,

    pub description: Option<String>,
}

impl Hook {
    /// Returns an active hook with priority 1.
    pub fn new(name: impl Into<String>, method: impl Into<String>, when: impl Into<String>) -> Hook {
        Hook {
            id: None,
            name: name.into(),
            method: method.into(),
            when: when.into(),
            active: true,
            priority: 1,
            description: None,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
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
