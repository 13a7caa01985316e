//! Checks a staged job before it is handed to a driver.

use crate::{bail, schema::prop, Error, Job, Result};

/// Verifies that every required property is set, in property-table order,
/// and that each nested entity sits under its own identity key.
pub fn job(job: &Job) -> Result<()> {
    for prop in prop::required() {
        if job.get_prop(prop.name)?.is_null() {
            return Err(Error::missing_required_property(prop.name));
        }
    }

    for (output, field) in &job.fields {
        if *output != field.output {
            bail!("field `{}` is staged under key `{}`", field.output, output);
        }

        for (name, rule) in &field.rules {
            if *name != rule.name {
                bail!(
                    "rule `{}` of field `{}` is staged under key `{}`",
                    rule.name,
                    output,
                    name
                );
            }
        }
    }

    for (name, hook) in &job.hooks {
        if *name != hook.name {
            bail!("hook `{}` is staged under key `{}`", hook.name, name);
        }
    }

    Ok(())
}
