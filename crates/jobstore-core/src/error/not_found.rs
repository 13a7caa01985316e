use super::{Entity, Error};

/// Error when a job is absent from the store, or a hook, field or rule is
/// absent from the staged aggregate.
#[derive(Debug)]
pub(super) struct NotFoundError {
    pub(super) entity: Entity,
    pub(super) key: Box<str>,
    pub(super) owner: Option<Box<str>>,

    /// The job was never stored, so there was nothing to look up.
    pub(super) unbound: bool,
}

impl std::error::Error for NotFoundError {}

impl core::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.unbound {
            f.write_str("writer is not bound to a stored job")?;
            if !self.key.is_empty() {
                write!(f, "; save job `{}` first", self.key)?;
            }
            return Ok(());
        }

        if self.entity == Entity::Job {
            return write!(f, "Can't retrieve Job `{}`", self.key);
        }

        write!(f, "{} `{}` does not exist", self.entity, self.key)?;
        if let Some(ref owner) = self.owner {
            write!(f, " for field `{}`", owner)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a missing job, field or hook.
    pub fn not_found(entity: Entity, key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFoundError {
            entity,
            key: key.into().into(),
            owner: None,
            unbound: false,
        }))
    }

    /// Creates an error for a job-level operation on a writer whose job was
    /// never loaded from or saved to the store.
    pub fn not_bound(name: Option<&str>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFoundError {
            entity: Entity::Job,
            key: name.unwrap_or_default().into(),
            owner: None,
            unbound: true,
        }))
    }

    /// Creates an error for a missing entity scoped to an owning field.
    pub fn not_found_in(entity: Entity, key: impl Into<String>, owner: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFoundError {
            entity,
            key: key.into().into(),
            owner: Some(owner.into().into()),
            unbound: false,
        }))
    }

    /// Returns `true` if this error is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotFound(_))
    }

    /// The kind of entity that was not found, if this is a not-found error.
    pub fn not_found_entity(&self) -> Option<Entity> {
        match self.kind() {
            super::ErrorKind::NotFound(err) => Some(err.entity),
            _ => None,
        }
    }
}
