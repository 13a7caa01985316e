//! Loads and validates the TOML configuration file.
//!
//! ```toml
//! [logger]
//! level = "debug"
//!
//! [job]
//! db = "/var/lib/jobs/jobs.db"
//! ```

use jobstore_core::{Error, Result};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// Level names accepted in `logger.level`, compared case-insensitively.
pub const LEVELS: &[&str] = &[
    "trace", "debug", "info", "warning", "warn", "error", "critical",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub job: JobConfig,
    pub logger: LoggerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobConfig {
    /// Path of the job store database file
    pub db: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerConfig {
    pub level: String,
}

impl Config {
    /// Reads the file at `path` and validates its shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::config_access_missing(path));
        }

        let contents =
            std::fs::read_to_string(path).map_err(|err| Error::config_access(path, err))?;

        let config = Config::parse(&contents)?;
        tracing::debug!(path = %path.display(), db = %config.job.db.display(), "loaded config");
        Ok(config)
    }

    /// Validates a configuration document, reporting the first violation.
    pub fn parse(contents: &str) -> Result<Config> {
        let document: Value = match contents.parse::<Table>() {
            Ok(table) => Value::Table(table),
            Err(err) => return Err(Error::config_validation(err.message().trim())),
        };

        check(&document)?;

        document
            .try_into()
            .map_err(|err: toml::de::Error| Error::config_validation(err.message().trim()))
    }
}

impl LoggerConfig {
    /// The `tracing` filter directive for the configured level.
    pub fn directive(&self) -> &'static str {
        match &self.level.to_ascii_lowercase()[..] {
            "trace" => "trace",
            "debug" => "debug",
            "warning" | "warn" => "warn",
            "error" | "critical" => "error",
            _ => "info",
        }
    }
}

fn check(document: &Value) -> Result<()> {
    let root = object(document)?;

    let job = object(required(root, "job")?)?;
    string(required(job, "db")?)?;

    let logger = object(required(root, "logger")?)?;
    let level = string(required(logger, "level")?)?;

    if !LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level)) {
        let accepted: Vec<_> = LEVELS.iter().map(|level| format!("'{level}'")).collect();
        return Err(Error::config_validation(format!(
            "'{level}' is not one of [{}]",
            accepted.join(", ")
        )));
    }

    Ok(())
}

fn required<'a>(table: &'a Table, key: &str) -> Result<&'a Value> {
    table
        .get(key)
        .ok_or_else(|| Error::config_validation(format!("'{key}' is a required property")))
}

fn object(value: &Value) -> Result<&Table> {
    value
        .as_table()
        .ok_or_else(|| Error::config_validation(format!("{value} is not of type 'object'")))
}

fn string(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| Error::config_validation(format!("{value} is not of type 'string'")))
}
