use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum UniverseError {
    /// A constituent document could not be retrieved. Carries whatever the
    /// fetch collaborator reported.
    #[error("Document fetch error: {0}")]
    Fetch(String),
    /// A document recursively references one of the documents currently
    /// being resolved above it.
    #[error("Reference cycle while resolving '{url}'")]
    Cycle { url: String },
    #[error("File System error: {0}")]
    Io(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid URL: {0}")]
    Url(String),
}

impl From<JsonError> for UniverseError {
    fn from(src: JsonError) -> UniverseError {
        UniverseError::Serialization(format!("JSON (de)serialization error: {src}"))
    }
}

impl From<toml::de::Error> for UniverseError {
    fn from(src: toml::de::Error) -> UniverseError {
        UniverseError::Serialization(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for UniverseError {
    fn from(src: toml::ser::Error) -> UniverseError {
        UniverseError::Serialization(format!("Toml serialization error: {src}"))
    }
}

impl From<UrlParseError> for UniverseError {
    fn from(src: UrlParseError) -> UniverseError {
        UniverseError::Url(format!("{src}"))
    }
}

impl From<io::Error> for UniverseError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => UniverseError::NotFound(format!("{x}")),
            _ => UniverseError::Io(format!("IOError: {}", x.kind())),
        }
    }
}
