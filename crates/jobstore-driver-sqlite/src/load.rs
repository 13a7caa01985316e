use crate::value;

use jobstore_core::{Error, Field, Hook, Job, Result, Rule};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;

/// Raw `job` row; parameter columns are still JSON text.
struct JobRow {
    id: i64,
    name: String,
    description: Option<String>,
    priority: i64,
    mode: String,
    active: bool,
    input: String,
    input_parameters: String,
    output: String,
    output_parameters: String,
}

/// Loads the whole aggregate: fields ordered by output, their rules and the
/// job's hooks ordered by name.
pub(crate) fn job(conn: &Connection, name: &str) -> Result<Option<Job>> {
    let row = conn
        .query_row(
            "SELECT id, name, description, priority, mode, active, input, input_parameters, \
             output, output_parameters FROM job WHERE name = ?1",
            params![name],
            |row| {
                Ok(JobRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    priority: row.get(3)?,
                    mode: row.get(4)?,
                    active: row.get(5)?,
                    input: row.get(6)?,
                    input_parameters: row.get(7)?,
                    output: row.get(8)?,
                    output_parameters: row.get(9)?,
                })
            },
        )
        .optional()
        .map_err(Error::driver_operation_failed)?;

    let Some(row) = row else {
        tracing::debug!(job = name, "job not stored");
        return Ok(None);
    };

    let mut job = Job {
        id: Some(row.id),
        name: Some(row.name),
        description: row.description,
        priority: row.priority,
        mode: row.mode.parse()?,
        active: row.active,
        input: Some(row.input),
        input_parameters: value::decode(&row.input_parameters)?,
        output: Some(row.output),
        output_parameters: value::decode(&row.output_parameters)?,
        fields: BTreeMap::new(),
        hooks: BTreeMap::new(),
    };

    job.fields = fields(conn, row.id)?;
    job.hooks = hooks(conn, row.id)?;

    tracing::debug!(
        job = name,
        fields = job.fields.len(),
        hooks = job.hooks.len(),
        "loaded job"
    );

    Ok(Some(job))
}

fn fields(conn: &Connection, job_id: i64) -> Result<BTreeMap<String, Field>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, input, output FROM field WHERE job_id = ?1 ORDER BY output ASC")
        .map_err(Error::driver_operation_failed)?;

    let rows = stmt
        .query_map(params![job_id], |row| {
            Ok(Field {
                id: Some(row.get(0)?),
                input: row.get(1)?,
                output: row.get(2)?,
                rules: BTreeMap::new(),
            })
        })
        .map_err(Error::driver_operation_failed)?;

    let mut ret = BTreeMap::new();
    for field in rows {
        let mut field = field.map_err(Error::driver_operation_failed)?;
        if let Some(field_id) = field.id {
            field.rules = rules(conn, field_id)?;
        }
        ret.insert(field.output.clone(), field);
    }
    Ok(ret)
}

fn rules(conn: &Connection, field_id: i64) -> Result<BTreeMap<String, Rule>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, name, method, params, active, blocking, priority, description \
             FROM rule WHERE field_id = ?1 ORDER BY name ASC",
        )
        .map_err(Error::driver_operation_failed)?;

    let rows = stmt
        .query_map(params![field_id], |row| {
            let params: String = row.get(3)?;
            Ok((rule_from_row(row)?, params))
        })
        .map_err(Error::driver_operation_failed)?;

    let mut ret = BTreeMap::new();
    for row in rows {
        let (mut rule, params) = row.map_err(Error::driver_operation_failed)?;
        rule.params = value::decode(&params)?;
        ret.insert(rule.name.clone(), rule);
    }
    Ok(ret)
}

fn rule_from_row(row: &Row<'_>) -> rusqlite::Result<Rule> {
    Ok(Rule {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        method: row.get(2)?,
        params: Default::default(),
        active: row.get(4)?,
        blocking: row.get(5)?,
        priority: row.get(6)?,
        description: row.get(7)?,
    })
}

fn hooks(conn: &Connection, job_id: i64) -> Result<BTreeMap<String, Hook>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, name, method, \"when\", active, priority, description \
             FROM hook WHERE job_id = ?1 ORDER BY name ASC",
        )
        .map_err(Error::driver_operation_failed)?;

    let rows = stmt
        .query_map(params![job_id], |row| {
            Ok(Hook {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                method: row.get(2)?,
                when: row.get(3)?,
                active: row.get(4)?,
                priority: row.get(5)?,
                description: row.get(6)?,
            })
        })
        .map_err(Error::driver_operation_failed)?;

    let mut ret = BTreeMap::new();
    for hook in rows {
        let hook = hook.map_err(Error::driver_operation_failed)?;
        ret.insert(hook.name.clone(), hook);
    }
    Ok(ret)
}
