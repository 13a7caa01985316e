use crate::Store;

use jobstore_core::{Entity, Error, Field, Hook, Job, Result, Rule};

use std::collections::BTreeMap;

/// Read-only view of one stored job and everything it owns.
#[derive(Debug, Clone)]
pub struct Reader {
    job: Job,
}

impl Reader {
    /// Loads the job called `name`, failing with a not-found error when no
    /// such job is stored.
    pub fn load(store: &Store, name: &str) -> Result<Reader> {
        let mut connection = store.connect_driver()?;

        let Some(job) = connection.load_job(name)? else {
            return Err(Error::not_found(Entity::Job, name));
        };

        Ok(Reader { job })
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn into_job(self) -> Job {
        self.job
    }

    /// Fields keyed by output name
    pub fn fields(&self) -> &BTreeMap<String, Field> {
        &self.job.fields
    }

    pub fn field(&self, output: &str) -> Result<&Field> {
        self.job
            .field(output)
            .ok_or_else(|| Error::not_found(Entity::Field, output))
    }

    /// Rules of the field `output`, keyed by name
    pub fn rules(&self, output: &str) -> Result<&BTreeMap<String, Rule>> {
        self.field(output).map(|field| &field.rules)
    }

    pub fn hooks(&self) -> &BTreeMap<String, Hook> {
        &self.job.hooks
    }

    pub fn hook(&self, name: &str) -> Result<&Hook> {
        self.job
            .hook(name)
            .ok_or_else(|| Error::not_found(Entity::Hook, name))
    }
}
