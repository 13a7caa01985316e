use super::{Entity, Error};

/// Error when an add operation targets a key that is already staged, or a
/// create-only save targets a job name that is already stored.
#[derive(Debug)]
pub(super) struct AlreadyExistsError {
    pub(super) entity: Entity,
    pub(super) key: Box<str>,
    pub(super) owner: Option<Box<str>>,
}

impl std::error::Error for AlreadyExistsError {}

impl core::fmt::Display for AlreadyExistsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} `{}` already exists", self.entity, self.key)?;
        if let Some(ref owner) = self.owner {
            write!(f, " for field `{}`", owner)?;
        }
        if self.entity != Entity::Job {
            f.write_str("; delete it first")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a duplicate job, field or hook key.
    pub fn already_exists(entity: Entity, key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AlreadyExists(AlreadyExistsError {
            entity,
            key: key.into().into(),
            owner: None,
        }))
    }

    /// Creates an error for a duplicate key scoped to an owning field.
    pub fn already_exists_in(
        entity: Entity,
        key: impl Into<String>,
        owner: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::AlreadyExists(AlreadyExistsError {
            entity,
            key: key.into().into(),
            owner: Some(owner.into().into()),
        }))
    }

    /// Returns `true` if this error is an already-exists error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AlreadyExists(_))
    }
}
