//! Decoding validator options from JSON.
//!
//! Option structs deserialize with `#[serde(default)]`, so a partial JSON
//! object is merged over the documented defaults. `null` means "all
//! defaults". Unknown keys are rejected so a misspelled option never passes
//! silently.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Errors raised while decoding validator options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// The JSON could not be decoded into the option struct.
    #[error("invalid {validator} options: {source}")]
    Decode {
        /// Which validator the options were meant for.
        validator: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl OptionsError {
    /// The validator the rejected options belonged to.
    pub fn validator(&self) -> &'static str {
        match self {
            Self::Decode { validator, .. } => *validator,
        }
    }
}

pub(crate) fn decode<T>(validator: &'static str, value: &Value) -> Result<T, OptionsError>
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }
    T::deserialize(value).map_err(|source| {
        tracing::debug!(validator, error = %source, "rejected validator options");
        OptionsError::Decode { validator, source }
    })
}
