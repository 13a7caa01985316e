use super::Error;

/// Error when a job is saved while a required property is still unset.
#[derive(Debug)]
pub(super) struct MissingRequiredPropertyError {
    pub(super) property: &'static str,
}

impl std::error::Error for MissingRequiredPropertyError {}

impl core::fmt::Display for MissingRequiredPropertyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Property {} is required", self.property)
    }
}

impl Error {
    pub fn missing_required_property(property: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingRequiredProperty(
            MissingRequiredPropertyError { property },
        ))
    }

    pub fn is_missing_required_property(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingRequiredProperty(_))
    }

    /// The offending property, if this is a missing-required-property error.
    pub fn missing_property(&self) -> Option<&'static str> {
        match self.kind() {
            super::ErrorKind::MissingRequiredProperty(err) => Some(err.property),
            _ => None,
        }
    }
}
