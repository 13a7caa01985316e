use jobstore_core::{Params, Result};

/// Encodes structured parameters to the JSON text stored in `*_parameters`
/// and `params` columns.
pub(crate) fn encode(params: &Params) -> Result<String> {
    Ok(serde_json::to_string(params)?)
}

/// Parses a stored parameter column. A JSON `null` reads back as an empty
/// mapping.
pub(crate) fn decode(text: &str) -> Result<Params> {
    match serde_json::from_str(text)? {
        serde_json::Value::Null => Ok(Params::new()),
        value => Ok(serde_json::from_value(value)?),
    }
}
