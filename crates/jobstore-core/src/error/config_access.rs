use super::Error;

use std::path::Path;

/// Error when the configuration file is missing or cannot be read.
#[derive(Debug)]
pub(super) struct ConfigAccessError {
    pub(super) path: Box<str>,
    pub(super) io: Option<std::io::Error>,
}

impl std::error::Error for ConfigAccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.io
            .as_ref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for ConfigAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.io {
            None => write!(f, "Missing config file: \"{}\" does not exist", self.path),
            Some(err) => write!(f, "Can't read config file \"{}\": {}", self.path, err),
        }
    }
}

impl Error {
    /// Creates an error for a configuration path that does not exist.
    pub fn config_access_missing(path: impl AsRef<Path>) -> Error {
        Error::from(super::ErrorKind::ConfigAccess(ConfigAccessError {
            path: path.as_ref().display().to_string().into(),
            io: None,
        }))
    }

    /// Creates an error for a configuration file that exists but cannot be read.
    pub fn config_access(path: impl AsRef<Path>, io: std::io::Error) -> Error {
        Error::from(super::ErrorKind::ConfigAccess(ConfigAccessError {
            path: path.as_ref().display().to_string().into(),
            io: Some(io),
        }))
    }

    /// Returns `true` if this error is a configuration access error.
    pub fn is_config_access(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConfigAccess(_))
    }
}
