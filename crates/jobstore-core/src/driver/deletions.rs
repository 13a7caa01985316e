use std::collections::BTreeSet;

/// Removals staged on a job since it was loaded or last saved.
///
/// Applied before any insert so that removing and re-adding a key replaces
/// the stored row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deletions {
    /// Hook names
    pub hooks: BTreeSet<String>,

    /// Field output names. Removing a field removes its rules.
    pub fields: BTreeSet<String>,

    /// `(field output, rule name)` pairs
    pub rules: BTreeSet<(String, String)>,
}

impl Deletions {
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty() && self.fields.is_empty() && self.rules.is_empty()
    }

    pub fn clear(&mut self) {
        self.hooks.clear();
        self.fields.clear();
        self.rules.clear();
    }

    pub fn hook(&mut self, name: impl Into<String>) {
        self.hooks.insert(name.into());
    }

    pub fn field(&mut self, output: impl Into<String>) {
        self.fields.insert(output.into());
    }

    pub fn rule(&mut self, output: impl Into<String>, name: impl Into<String>) {
        self.rules.insert((output.into(), name.into()));
    }
}
