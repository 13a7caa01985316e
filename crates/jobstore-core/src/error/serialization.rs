use super::Error;

/// Error when structured parameters cannot be encoded to, or decoded from,
/// their stored text form.
#[derive(Debug)]
pub(super) struct SerializationError {
    pub(super) inner: serde_json::Error,
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl core::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid stored parameters: {}", self.inner)
    }
}

impl Error {
    pub fn serialization(inner: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::Serialization(SerializationError { inner }))
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Serialization(_))
    }
}
