use super::Error;

#[derive(Debug)]
pub(super) struct ImmutablePropertyError {
    pub(super) property: &'static str,
}

impl std::error::Error for ImmutablePropertyError {}

impl core::fmt::Display for ImmutablePropertyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "property {} cannot be changed once the job is persisted",
            self.property
        )
    }
}

impl Error {
    pub fn immutable_property(property: &'static str) -> Error {
        Error::from(super::ErrorKind::ImmutableProperty(ImmutablePropertyError {
            property,
        }))
    }

    pub fn is_immutable_property(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ImmutableProperty(_))
    }
}
