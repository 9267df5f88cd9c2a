use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::read_to_string;
use std::path::Path;

#[cfg(not(feature = "log"))]
use crate::{debug, info};
#[cfg(feature = "log")]
use log::{debug, info};

use crate::address::Address;

macro_rules! impl_from_parse_error {
    ($variant:path, $ty:path) => {
        impl From<$ty> for ParseError {
            fn from(value: $ty) -> Self {
                $variant(value)
            }
        }
    };
}

#[derive(Debug)]
pub enum ParseError {
    IOError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    SerdeTomlError(toml::de::Error),
    SerdeYamlError(serde_yml::Error),
    FileNotFound(String),
    PathIsDirectory(String),
}

use ParseError::*;
impl_from_parse_error!(IOError, std::io::Error);
impl_from_parse_error!(SerdeJsonError, serde_json::Error);
impl_from_parse_error!(SerdeTomlError, toml::de::Error);
impl_from_parse_error!(SerdeYamlError, serde_yml::Error);

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IOError(e) => write!(f, "{}", e),
            SerdeJsonError(e) => write!(f, "invalid json: {}", e),
            SerdeTomlError(e) => write!(f, "invalid toml: {}", e),
            SerdeYamlError(e) => write!(f, "invalid yaml: {}", e),
            FileNotFound(p) => write!(f, "no such file or directory: {}", p),
            PathIsDirectory(p) => write!(f, "path is a directory: {}", p),
        }
    }
}

impl Error for ParseError {}

/// Serialization format of an address list file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Picks the format from the file extension, defaulting to json.
    pub fn from_path(path: &str) -> Format {
        if path.ends_with(".yml") || path.ends_with(".yaml") {
            Format::Yaml
        } else if path.ends_with(".toml") {
            Format::Toml
        } else {
            Format::Json
        }
    }
}

/// Ordered addresses loaded from a file.
///
/// Json and yaml files hold either a bare list of addresses or a table with an
/// `addresses` key; toml needs the table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddressList {
    pub addresses: Vec<Address>,
}

impl AddressList {
    pub fn from_str_format(content: &str, format: Format) -> Result<Self, ParseError> {
        match format {
            Format::Toml => Ok(toml::from_str(content)?),
            Format::Yaml => {
                let root: serde_yml::Value = serde_yml::from_str(content)?;
                if root.is_sequence() {
                    Ok(AddressList { addresses: serde_yml::from_value(root)? })
                } else {
                    Ok(serde_yml::from_value(root)?)
                }
            }
            Format::Json => {
                if content.trim_start().starts_with('[') {
                    Ok(AddressList { addresses: serde_json::from_str(content)? })
                } else {
                    Ok(serde_json::from_str(content)?)
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.addresses.iter()
    }
}

impl From<Vec<Address>> for AddressList {
    fn from(addresses: Vec<Address>) -> Self {
        AddressList { addresses }
    }
}

impl IntoIterator for AddressList {
    type Item = Address;
    type IntoIter = std::vec::IntoIter<Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}

impl<'a> TryFrom<&'a str> for AddressList {
    type Error = ParseError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        let path = Path::new(value);
        if !path.exists() {
            return Err(FileNotFound(value.to_owned()));
        }
        if !path.is_file() {
            return Err(PathIsDirectory(value.to_owned()));
        }
        let format = Format::from_path(value);
        debug!("reading {:?} as {:?}", value, format);
        let list = AddressList::from_str_format(&read_to_string(path)?, format)?;
        info!("loaded {} addresses from {}", list.len(), value);
        Ok(list)
    }
}

impl TryFrom<String> for AddressList {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
