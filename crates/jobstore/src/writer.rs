use crate::Store;

use jobstore_core::{
    driver::Deletions,
    schema::{prop, PropType},
    validate, Connection, Entity, Error, Field, Hook, Job, Result, Rule, Value,
};

use std::collections::BTreeMap;

/// Stages changes to one job and persists them on [`Writer::save`].
///
/// Nothing reaches the store before `save` or `delete`. Once saved, the
/// writer stays bound to the persisted job and further saves update it.
#[derive(Debug)]
pub struct Writer {
    connection: Box<dyn Connection>,
    job: Job,
    deletions: Deletions,
}

impl Writer {
    /// Starts a new job with default properties.
    pub fn new(store: &Store) -> Result<Writer> {
        Ok(Writer {
            connection: store.connect_driver()?,
            job: Job::new(),
            deletions: Deletions::default(),
        })
    }

    /// Loads the job called `name` as the target of further edits.
    pub fn load(store: &Store, name: &str) -> Result<Writer> {
        let mut connection = store.connect_driver()?;

        let Some(job) = connection.load_job(name)? else {
            return Err(Error::not_found(Entity::Job, name));
        };

        Ok(Writer {
            connection,
            job,
            deletions: Deletions::default(),
        })
    }

    /// The staged job
    pub fn get_job(&self) -> &Job {
        &self.job
    }

    /// Whether the writer targets a job that is in the store.
    pub fn is_bound(&self) -> bool {
        self.job.is_persisted()
    }

    pub fn get_prop(&self, name: &str) -> Result<Value> {
        self.job.get_prop(name)
    }

    pub fn set_prop(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.job.set_prop(name, value)
    }

    pub fn prop_type(&self, name: &str) -> Result<PropType> {
        prop::prop_type(name)
    }

    pub fn add_hook(&mut self, hook: Hook) -> Result<()> {
        if self.job.hooks.contains_key(&hook.name) {
            return Err(Error::already_exists(Entity::Hook, &hook.name[..]));
        }
        self.job.hooks.insert(hook.name.clone(), hook);
        Ok(())
    }

    pub fn get_hook(&self, name: &str) -> Result<&Hook> {
        self.job
            .hook(name)
            .ok_or_else(|| Error::not_found(Entity::Hook, name))
    }

    pub fn hook_exists(&self, name: &str) -> bool {
        self.job.hooks.contains_key(name)
    }

    /// Unstages the hook. A stored hook is removed from the store on the next
    /// save.
    pub fn del_hook(&mut self, name: &str) -> Result<()> {
        let Some(hook) = self.job.hooks.remove(name) else {
            return Err(Error::not_found(Entity::Hook, name));
        };
        if hook.id.is_some() {
            self.deletions.hook(name);
        }
        Ok(())
    }

    pub fn hooks(&self) -> &BTreeMap<String, Hook> {
        &self.job.hooks
    }

    pub fn add_field(&mut self, input: impl Into<String>, output: impl Into<String>) -> Result<()> {
        let field = Field::new(input, output);
        if self.job.fields.contains_key(&field.output) {
            return Err(Error::already_exists(Entity::Field, &field.output[..]));
        }
        self.job.fields.insert(field.output.clone(), field);
        Ok(())
    }

    pub fn get_field(&self, output: &str) -> Result<&Field> {
        self.job
            .field(output)
            .ok_or_else(|| Error::not_found(Entity::Field, output))
    }

    pub fn field_exists(&self, output: &str) -> bool {
        self.job.fields.contains_key(output)
    }

    /// Unstages the field and every rule under it. A stored field is removed,
    /// rules included, on the next save.
    pub fn del_field(&mut self, output: &str) -> Result<()> {
        let Some(field) = self.job.fields.remove(output) else {
            return Err(Error::not_found(Entity::Field, output));
        };
        if field.id.is_some() {
            self.deletions.field(output);
        }
        Ok(())
    }

    /// Fields keyed by output name
    pub fn fields(&self) -> &BTreeMap<String, Field> {
        &self.job.fields
    }

    /// Adds `rule` under the staged field `output`.
    pub fn add_rule(&mut self, output: &str, rule: Rule) -> Result<()> {
        let field = self.field_mut(output)?;
        if field.rules.contains_key(&rule.name) {
            return Err(Error::already_exists_in(Entity::Rule, &rule.name[..], output));
        }
        field.rules.insert(rule.name.clone(), rule);
        Ok(())
    }

    pub fn get_rules(&self, output: &str) -> Result<&BTreeMap<String, Rule>> {
        self.get_field(output).map(|field| &field.rules)
    }

    pub fn rule_exists(&self, output: &str, name: &str) -> bool {
        self.job
            .field(output)
            .is_some_and(|field| field.rules.contains_key(name))
    }

    pub fn del_rule(&mut self, output: &str, name: &str) -> Result<()> {
        let field = self.field_mut(output)?;
        let Some(rule) = field.rules.remove(name) else {
            return Err(Error::not_found_in(Entity::Rule, name, output));
        };
        if rule.id.is_some() {
            self.deletions.rule(output, name);
        }
        Ok(())
    }

    /// Validates the staged job and writes it in one transaction.
    ///
    /// Returns the job as stored afterwards, including children kept from
    /// earlier saves, and binds the writer to it. In mode `d` the stored job
    /// is removed instead and the snapshot carries no keys.
    pub fn save(&mut self) -> Result<Job> {
        validate::job(&self.job)?;

        let saved = self.connection.save_job(&self.job, &self.deletions)?;

        tracing::debug!(
            job = saved.name(),
            mode = %saved.mode,
            fields = saved.fields.len(),
            hooks = saved.hooks.len(),
            deletions = !self.deletions.is_empty(),
            "saved job"
        );

        self.job = saved.clone();
        self.deletions.clear();

        Ok(saved)
    }

    /// Removes the bound job and everything it owns from the store.
    pub fn delete(&mut self) -> Result<()> {
        if !self.is_bound() {
            return Err(Error::not_bound(self.job.name()));
        }

        let name = self.job.name().unwrap_or_default();
        self.connection.delete_job(name)?;

        self.job.forget_ids();
        self.deletions.clear();
        Ok(())
    }

    /// Unwraps the staged job.
    pub fn into_job(self) -> Job {
        self.job
    }

    fn field_mut(&mut self, output: &str) -> Result<&mut Field> {
        self.job
            .fields
            .get_mut(output)
            .ok_or_else(|| Error::not_found(Entity::Field, output))
    }
}
