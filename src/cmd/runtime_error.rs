use std::error::Error;
use std::fmt::{Display, Formatter};
#[cfg(not(feature = "log"))]
use crate::error;
#[cfg(feature = "log")]
use log::error;
use crate::address::ParseError;

#[derive(Debug)]
pub enum RuntimeError {
    NoSuchFile(String),
    PathIsDirectory(String),
    IOError(String),
    ParseError(String),
}

impl RuntimeError {
    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    pub fn print_error(&self) {
        match self {
            RuntimeError::NoSuchFile(p) => error!("no such file or directory: {}", p),
            RuntimeError::PathIsDirectory(p) => error!("specified path is a directory: {}", p),
            RuntimeError::IOError(e) => error!("error reading/writing: {}", e),
            RuntimeError::ParseError(e) => error!("parse error: {}", e),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RuntimeError::NoSuchFile(..) => 1,
            RuntimeError::IOError(..) => 3,
            RuntimeError::ParseError(..) => 4,
            RuntimeError::PathIsDirectory(..) => 8,
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for RuntimeError {}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        RuntimeError::IOError(value.to_string())
    }
}

impl From<ParseError> for RuntimeError {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::IOError(e) => RuntimeError::IOError(e.to_string()),
            ParseError::FileNotFound(p) => RuntimeError::NoSuchFile(p),
            ParseError::PathIsDirectory(p) => RuntimeError::PathIsDirectory(p),
            e @ (ParseError::SerdeJsonError(..)
            | ParseError::SerdeTomlError(..)
            | ParseError::SerdeYamlError(..)) => RuntimeError::ParseError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_keep_their_exit_code() {
        let e = RuntimeError::from(ParseError::FileNotFound("a.json".to_owned()));
        assert!(matches!(e, RuntimeError::NoSuchFile(ref p) if p == "a.json"));
        assert_eq!(e.exit_code(), 1);

        let e = RuntimeError::from(ParseError::PathIsDirectory("/tmp".to_owned()));
        assert_eq!(e.exit_code(), 8);

        let json = serde_json::from_str::<u8>("x").unwrap_err();
        assert_eq!(RuntimeError::from(ParseError::from(json)).exit_code(), 4);
    }
}
