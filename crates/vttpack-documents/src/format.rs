//! Structured text formats documents are exported to.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FormatError;

/// Output (and re-import) format of exported documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Pretty-printed JSON, 2-space indentation.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl Format {
    /// Pick the format from the CLI's YAML switch.
    #[inline]
    pub fn from_yaml_flag(yaml: bool) -> Self {
        if yaml {
            Format::Yaml
        } else {
            Format::Json
        }
    }

    /// File extension used for exported files, without the dot.
    #[inline]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yml",
        }
    }

    /// Decode a value from bytes in this format.
    pub fn from_slice<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, FormatError> {
        Ok(match self {
            Format::Json => serde_json::from_slice(bytes)?,
            Format::Yaml => serde_yaml::from_slice(bytes)?,
        })
    }

    /// Encode a value in this format.
    ///
    /// The output always ends with exactly one newline.
    pub fn to_vec<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>, FormatError> {
        let mut output = match self {
            Format::Json => serde_json::to_vec_pretty(value)?,
            Format::Yaml => serde_yaml::to_string(value)?.into_bytes(),
        };

        while output.last() == Some(&b'\n') {
            output.pop();
        }
        output.push(b'\n');

        Ok(output)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Yaml => write!(f, "YAML"),
        }
    }
}
