use super::Error;
use crate::Type;

/// Error when a property is assigned a value of the wrong type.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    pub(super) property: &'static str,
    pub(super) expected: Type,
    pub(super) actual: Type,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} must be of type {}, got {}",
            self.property, self.expected, self.actual
        )
    }
}

impl Error {
    pub fn type_mismatch(property: &'static str, expected: Type, actual: Type) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            property,
            expected,
            actual,
        }))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
