use super::Error;

/// Error when a configuration document does not have the expected shape.
#[derive(Debug)]
pub(super) struct ConfigValidationError {
    pub(super) violation: Box<str>,
}

impl std::error::Error for ConfigValidationError {}

impl core::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Your config is not valid: {}", self.violation)
    }
}

impl Error {
    /// Creates a configuration validation error naming the first violated constraint.
    pub fn config_validation(violation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConfigValidation(ConfigValidationError {
            violation: violation.into().into(),
        }))
    }

    /// Returns `true` if this error is a configuration validation error.
    pub fn is_config_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConfigValidation(_))
    }
}
