use serde::{Deserialize, Serialize};
use std::fmt;

/// The measured quantity an answer describes.
///
/// The backend only answers for temperature and salinity, but unknown names
/// are kept verbatim so a newer backend does not break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Parameter {
    Temperature,
    Salinity,
    Other(String),
}

impl Parameter {
    pub fn as_str(&self) -> &str {
        match self {
            Parameter::Temperature => "temperature",
            Parameter::Salinity => "salinity",
            Parameter::Other(name) => name.as_str(),
        }
    }

    pub fn is_temperature(&self) -> bool {
        matches!(self, Parameter::Temperature)
    }
}

impl From<String> for Parameter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "temperature" => Parameter::Temperature,
            "salinity" => Parameter::Salinity,
            _ => Parameter::Other(value),
        }
    }
}

impl From<&str> for Parameter {
    fn from(value: &str) -> Self {
        Parameter::from(value.to_string())
    }
}

impl From<Parameter> for String {
    fn from(value: Parameter) -> Self {
        match value {
            Parameter::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
