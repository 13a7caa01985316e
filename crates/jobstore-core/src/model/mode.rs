use crate::Error;

use std::{fmt, str::FromStr};

/// Controls what `save` does with the job row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Insert only; the job must not exist yet.
    Create,

    /// Update only; the job must already exist.
    Update,

    /// Insert if absent, else update.
    #[default]
    CreateOrUpdate,

    /// Saving removes the job and everything it owns.
    Delete,
}

impl Mode {
    /// The literals accepted for the `mode` property, in declaration order.
    pub const LITERALS: &'static [&'static str] = &["c", "u", "cu", "d"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Create => "c",
            Mode::Update => "u",
            Mode::CreateOrUpdate => "cu",
            Mode::Delete => "d",
        }
    }

    pub const fn allows_insert(self) -> bool {
        matches!(self, Mode::Create | Mode::CreateOrUpdate)
    }

    pub const fn allows_update(self) -> bool {
        matches!(self, Mode::Update | Mode::CreateOrUpdate)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(Mode::Create),
            "u" => Ok(Mode::Update),
            "cu" => Ok(Mode::CreateOrUpdate),
            "d" => Ok(Mode::Delete),
            _ => Err(Error::invalid_enum_value("mode", s, Self::LITERALS)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
