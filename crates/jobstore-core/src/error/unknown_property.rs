use super::Error;

/// Error when a property name is absent from the job property table.
#[derive(Debug)]
pub(super) struct UnknownPropertyError {
    pub(super) name: Box<str>,
}

impl std::error::Error for UnknownPropertyError {}

impl core::fmt::Display for UnknownPropertyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "`{}` is not a valid job property", self.name)
    }
}

impl Error {
    pub fn unknown_property(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownProperty(UnknownPropertyError {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_property(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownProperty(_))
    }
}
