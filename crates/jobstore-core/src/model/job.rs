use super::{Field, Hook, Mode, Params, Rule};
use crate::{
    schema::prop::{self, Prop},
    Error, Result, Value,
};

use std::collections::BTreeMap;

/// A job definition: the aggregate root owning fields (and through them,
/// rules) and hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// Store-assigned key, `None` until the job is persisted.
    pub id: Option<i64>,

    /// Unique name of the job. Required to save.
    pub name: Option<String>,

    pub description: Option<String>,

    pub priority: i64,

    pub mode: Mode,

    pub active: bool,

    /// Input connector type, e.g. `csv`. Required to save.
    pub input: Option<String>,

    pub input_parameters: Params,

    /// Output connector type, e.g. `rest`. Required to save.
    pub output: Option<String>,

    pub output_parameters: Params,

    /// Fields keyed by their output name
    pub fields: BTreeMap<String, Field>,

    /// Hooks keyed by name
    pub hooks: BTreeMap<String, Hook>,
}

impl Job {
    /// Returns a job carrying the property table's defaults.
    pub fn new() -> Job {
        Job {
            id: None,
            name: None,
            description: None,
            priority: 1,
            mode: Mode::default(),
            active: true,
            input: None,
            input_parameters: Params::new(),
            output: None,
            output_parameters: Params::new(),
            fields: BTreeMap::new(),
            hooks: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn field(&self, output: &str) -> Option<&Field> {
        self.fields.get(output)
    }

    pub fn rules(&self, output: &str) -> Option<&BTreeMap<String, Rule>> {
        self.fields.get(output).map(|field| &field.rules)
    }

    pub fn hook(&self, name: &str) -> Option<&Hook> {
        self.hooks.get(name)
    }

    /// Drops every store-assigned key, e.g. after the job was deleted.
    pub fn forget_ids(&mut self) {
        self.id = None;
        for field in self.fields.values_mut() {
            field.id = None;
            for rule in field.rules.values_mut() {
                rule.id = None;
            }
        }
        for hook in self.hooks.values_mut() {
            hook.id = None;
        }
    }

    /// Reads a property through the property table.
    pub fn get_prop(&self, name: &str) -> Result<Value> {
        let prop = prop::property(name)?;

        Ok(match prop.key {
            Prop::Name => self.name.clone().into(),
            Prop::Description => self.description.clone().into(),
            Prop::Priority => self.priority.into(),
            Prop::Mode => self.mode.as_str().into(),
            Prop::Active => self.active.into(),
            Prop::Input => self.input.clone().into(),
            Prop::InputParameters => self.input_parameters.clone().into(),
            Prop::Output => self.output.clone().into(),
            Prop::OutputParameters => self.output_parameters.clone().into(),
        })
    }

    /// Writes a property through the property table, rejecting undeclared
    /// names, mistyped values and unknown enumeration literals.
    pub fn set_prop(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let prop = prop::property(name)?;
        let value = value.into();
        prop.check(&value)?;

        match (prop.key, value) {
            (Prop::Name, Value::String(name)) => {
                if self.is_persisted() && self.name.as_deref() != Some(&name[..]) {
                    return Err(Error::immutable_property(prop.name));
                }
                self.name = Some(name);
            }
            (Prop::Description, Value::String(description)) => {
                self.description = Some(description)
            }
            (Prop::Description, Value::Null) => self.description = None,
            (Prop::Priority, Value::Integer(priority)) => self.priority = priority,
            (Prop::Mode, Value::String(mode)) => self.mode = mode.parse()?,
            (Prop::Active, Value::Bool(active)) => self.active = active,
            (Prop::Input, Value::String(input)) => self.input = Some(input),
            (Prop::InputParameters, Value::Map(params)) => self.input_parameters = params,
            (Prop::Output, Value::String(output)) => self.output = Some(output),
            (Prop::OutputParameters, Value::Map(params)) => self.output_parameters = params,
            (_, value) => {
                return Err(Error::type_mismatch(
                    prop.name,
                    prop.ty.value_type(),
                    value.ty(),
                ))
            }
        }

        Ok(())
    }
}

impl Default for Job {
    fn default() -> Self {
        Job::new()
    }
}
