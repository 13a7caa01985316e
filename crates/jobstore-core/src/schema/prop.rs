use crate::{Error, Mode, Result, Type, Value};

/// Identifies a job property independently of its textual name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prop {
    Name,
    Description,
    Priority,
    Mode,
    Active,
    Input,
    InputParameters,
    Output,
    OutputParameters,
}

/// The declared type of a job property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropType {
    /// A string that must be set before the first save if the property is required
    String,

    /// A string that may be null
    OptionalString,

    Integer,

    Boolean,

    /// Open-shaped structured data
    Map,

    /// A string restricted to the given literals
    Enum(&'static [&'static str]),
}

/// One row of the job property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    pub key: Prop,
    pub name: &'static str,
    pub ty: PropType,
    pub required: bool,
}

/// Every declared job property. Required properties are checked on save in
/// this order.
pub const JOB_PROPERTIES: &[Property] = &[
    Property::new(Prop::Name, "name", PropType::String, true),
    Property::new(Prop::Description, "description", PropType::OptionalString, false),
    Property::new(Prop::Priority, "priority", PropType::Integer, false),
    Property::new(Prop::Mode, "mode", PropType::Enum(Mode::LITERALS), false),
    Property::new(Prop::Active, "active", PropType::Boolean, false),
    Property::new(Prop::Input, "input", PropType::String, true),
    Property::new(Prop::InputParameters, "input_parameters", PropType::Map, false),
    Property::new(Prop::Output, "output", PropType::String, true),
    Property::new(Prop::OutputParameters, "output_parameters", PropType::Map, false),
];

/// Looks up a property by name.
pub fn property(name: &str) -> Result<&'static Property> {
    JOB_PROPERTIES
        .iter()
        .find(|prop| prop.name == name)
        .ok_or_else(|| Error::unknown_property(name))
}

/// Returns the declared type of the named property.
pub fn prop_type(name: &str) -> Result<PropType> {
    property(name).map(|prop| prop.ty)
}

/// Properties that must be set before a job can be saved, in check order.
pub fn required() -> impl Iterator<Item = &'static Property> {
    JOB_PROPERTIES.iter().filter(|prop| prop.required)
}

impl Property {
    const fn new(key: Prop, name: &'static str, ty: PropType, required: bool) -> Property {
        Property {
            key,
            name,
            ty,
            required,
        }
    }

    /// Checks that `value` may be assigned to this property.
    pub fn check(&self, value: &Value) -> Result<()> {
        match (self.ty, value) {
            (PropType::String | PropType::OptionalString, Value::String(_))
            | (PropType::OptionalString, Value::Null)
            | (PropType::Integer, Value::Integer(_))
            | (PropType::Boolean, Value::Bool(_))
            | (PropType::Map, Value::Map(_)) => Ok(()),
            (PropType::Enum(accepted), Value::String(literal)) => {
                if accepted.iter().any(|candidate| *candidate == literal.as_str()) {
                    Ok(())
                } else {
                    Err(Error::invalid_enum_value(self.name, &literal[..], accepted))
                }
            }
            _ => Err(Error::type_mismatch(
                self.name,
                self.ty.value_type(),
                value.ty(),
            )),
        }
    }
}

impl PropType {
    /// The value type a property of this type holds once set.
    pub const fn value_type(self) -> Type {
        match self {
            PropType::String | PropType::OptionalString | PropType::Enum(_) => Type::String,
            PropType::Integer => Type::Integer,
            PropType::Boolean => Type::Bool,
            PropType::Map => Type::Map,
        }
    }
}
