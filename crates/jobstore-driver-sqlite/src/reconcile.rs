//! Reconciles stored rows with a staged job aggregate.
//!
//! Field, rule and hook rows are add-only: an existing row keyed by its
//! identity (`output` for fields, `name` for rules and hooks) is kept as
//! stored even when the staged copy differs. Editing one takes an explicit
//! deletion followed by a re-add.

use crate::{load, value};

use jobstore_core::{
    driver::Deletions, Entity, Error, Field, Hook, Job, Mode, Result, Rule,
};
use rusqlite::{params, Connection, OptionalExtension};

pub(crate) fn save(conn: &Connection, job: &Job, deletions: &Deletions) -> Result<Job> {
    let Some(name) = job.name() else {
        return Err(Error::missing_required_property("name"));
    };

    if job.mode == Mode::Delete {
        delete(conn, name)?;
        let mut deleted = job.clone();
        deleted.forget_ids();
        return Ok(deleted);
    }

    let job_id = match (job_id(conn, name)?, job.mode) {
        (Some(id), mode) if mode.allows_update() => {
            update_job(conn, id, job)?;
            tracing::info!(job = name, id, "updated job");
            id
        }
        (Some(_), _) => return Err(Error::already_exists(Entity::Job, name)),
        (None, mode) if mode.allows_insert() => {
            let id = insert_job(conn, job)?;
            tracing::info!(job = name, id, "created job");
            id
        }
        (None, _) => return Err(Error::not_found(Entity::Job, name)),
    };

    apply_deletions(conn, job_id, deletions)?;

    for field in job.fields.values() {
        let field_id = field_row(conn, job_id, field)?;

        for rule in field.rules.values() {
            rule_row(conn, field_id, rule)?;
        }
    }

    for hook in job.hooks.values() {
        hook_row(conn, job_id, hook)?;
    }

    // Rows kept from earlier saves are part of the result.
    load::job(conn, name)?.ok_or_else(|| Error::not_found(Entity::Job, name))
}

/// Removes the job and, children first, every row it owns.
pub(crate) fn delete(conn: &Connection, name: &str) -> Result<()> {
    let Some(id) = job_id(conn, name)? else {
        return Err(Error::not_found(Entity::Job, name));
    };

    let rules = conn
        .execute(
            "DELETE FROM rule WHERE field_id IN (SELECT id FROM field WHERE job_id = ?1)",
            params![id],
        )
        .map_err(Error::driver_operation_failed)?;
    let fields = conn
        .execute("DELETE FROM field WHERE job_id = ?1", params![id])
        .map_err(Error::driver_operation_failed)?;
    let hooks = conn
        .execute("DELETE FROM hook WHERE job_id = ?1", params![id])
        .map_err(Error::driver_operation_failed)?;
    conn.execute("DELETE FROM job WHERE id = ?1", params![id])
        .map_err(Error::driver_operation_failed)?;

    tracing::info!(job = name, id, fields, rules, hooks, "deleted job");
    Ok(())
}

fn job_id(conn: &Connection, name: &str) -> Result<Option<i64>> {
    conn.query_row(
        "SELECT id FROM job WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )
    .optional()
    .map_err(Error::driver_operation_failed)
}

fn insert_job(conn: &Connection, job: &Job) -> Result<i64> {
    conn.execute(
        "INSERT INTO job (name, description, priority, mode, active, input, input_parameters, \
         output, output_parameters) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            job.name,
            job.description,
            job.priority,
            job.mode.as_str(),
            job.active,
            required(job.input.as_deref(), "input")?,
            value::encode(&job.input_parameters)?,
            required(job.output.as_deref(), "output")?,
            value::encode(&job.output_parameters)?,
        ],
    )
    .map_err(Error::driver_operation_failed)?;

    Ok(conn.last_insert_rowid())
}

fn update_job(conn: &Connection, id: i64, job: &Job) -> Result<()> {
    conn.execute(
        "UPDATE job SET description = ?2, priority = ?3, mode = ?4, active = ?5, input = ?6, \
         input_parameters = ?7, output = ?8, output_parameters = ?9 WHERE id = ?1",
        params![
            id,
            job.description,
            job.priority,
            job.mode.as_str(),
            job.active,
            required(job.input.as_deref(), "input")?,
            value::encode(&job.input_parameters)?,
            required(job.output.as_deref(), "output")?,
            value::encode(&job.output_parameters)?,
        ],
    )
    .map_err(Error::driver_operation_failed)?;

    Ok(())
}

fn required<'a>(value: Option<&'a str>, property: &'static str) -> Result<&'a str> {
    value.ok_or_else(|| Error::missing_required_property(property))
}

fn apply_deletions(conn: &Connection, job_id: i64, deletions: &Deletions) -> Result<()> {
    for (output, name) in &deletions.rules {
        let n = conn
            .execute(
                "DELETE FROM rule WHERE name = ?3 AND field_id IN \
                 (SELECT id FROM field WHERE job_id = ?1 AND output = ?2)",
                params![job_id, output, name],
            )
            .map_err(Error::driver_operation_failed)?;
        tracing::debug!(field = %output, rule = %name, rows = n, "deleted rule");
    }

    for name in &deletions.hooks {
        let n = conn
            .execute(
                "DELETE FROM hook WHERE job_id = ?1 AND name = ?2",
                params![job_id, name],
            )
            .map_err(Error::driver_operation_failed)?;
        tracing::debug!(hook = %name, rows = n, "deleted hook");
    }

    for output in &deletions.fields {
        conn.execute(
            "DELETE FROM rule WHERE field_id IN \
             (SELECT id FROM field WHERE job_id = ?1 AND output = ?2)",
            params![job_id, output],
        )
        .map_err(Error::driver_operation_failed)?;
        let n = conn
            .execute(
                "DELETE FROM field WHERE job_id = ?1 AND output = ?2",
                params![job_id, output],
            )
            .map_err(Error::driver_operation_failed)?;
        tracing::debug!(field = %output, rows = n, "deleted field");
    }

    Ok(())
}

fn field_row(conn: &Connection, job_id: i64, field: &Field) -> Result<i64> {
    let existing = conn
        .query_row(
            "SELECT id FROM field WHERE job_id = ?1 AND output = ?2",
            params![job_id, field.output],
            |row| row.get(0),
        )
        .optional()
        .map_err(Error::driver_operation_failed)?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO field (job_id, input, output) VALUES (?1, ?2, ?3)",
        params![job_id, field.input, field.output],
    )
    .map_err(Error::driver_operation_failed)?;

    let id = conn.last_insert_rowid();
    tracing::debug!(field = %field.output, id, "inserted field");
    Ok(id)
}

fn rule_row(conn: &Connection, field_id: i64, rule: &Rule) -> Result<i64> {
    let existing = conn
        .query_row(
            "SELECT id FROM rule WHERE field_id = ?1 AND name = ?2",
            params![field_id, rule.name],
            |row| row.get(0),
        )
        .optional()
        .map_err(Error::driver_operation_failed)?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO rule (field_id, name, method, params, active, blocking, priority, description) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            field_id,
            rule.name,
            rule.method,
            value::encode(&rule.params)?,
            rule.active,
            rule.blocking,
            rule.priority,
            rule.description,
        ],
    )
    .map_err(Error::driver_operation_failed)?;

    let id = conn.last_insert_rowid();
    tracing::debug!(rule = %rule.name, id, "inserted rule");
    Ok(id)
}

fn hook_row(conn: &Connection, job_id: i64, hook: &Hook) -> Result<i64> {
    let existing = conn
        .query_row(
            "SELECT id FROM hook WHERE job_id = ?1 AND name = ?2",
            params![job_id, hook.name],
            |row| row.get(0),
        )
        .optional()
        .map_err(Error::driver_operation_failed)?;

    if let Some(id) = existing {
        return Ok(id);
    }

    conn.execute(
        "INSERT INTO hook (job_id, name, method, \"when\", active, priority, description) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            job_id,
            hook.name,
            hook.method,
            hook.when,
            hook.active,
            hook.priority,
            hook.description,
        ],
    )
    .map_err(Error::driver_operation_failed)?;

    let id = conn.last_insert_rowid();
    tracing::debug!(hook = %hook.name, id, "inserted hook");
    Ok(id)
}
