use super::Error;

/// Error when a value is not one of the literals an enumerated property accepts.
#[derive(Debug)]
pub(super) struct InvalidEnumValueError {
    pub(super) property: &'static str,
    pub(super) value: Box<str>,
    pub(super) accepted: &'static [&'static str],
}

impl std::error::Error for InvalidEnumValueError {}

impl core::fmt::Display for InvalidEnumValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} is not a valid {} (expected one of: {})",
            self.value,
            self.property,
            self.accepted.join(", ")
        )
    }
}

impl Error {
    pub fn invalid_enum_value(
        property: &'static str,
        value: impl Into<String>,
        accepted: &'static [&'static str],
    ) -> Error {
        Error::from(super::ErrorKind::InvalidEnumValue(InvalidEnumValueError {
            property,
            value: value.into().into(),
            accepted,
        }))
    }

    pub fn is_invalid_enum_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidEnumValue(_))
    }
}
