//! Content configuration: where the universe documents live and which
//! languages are available.

use serde::{Deserialize, Serialize};
use std::{
    fs::{read_to_string, write},
    path::Path,
};
use url::Url;

use crate::error::UniverseError;

fn default_entry_document() -> String {
    "universe.json".to_string()
}

/// Where to fetch universe content from. Entry documents live at
/// `{content_root}/{language}/{entry_document}`, matching the layout the
/// authoring side publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// Base URL of the published content, e.g. `https://example.org/data/`.
    pub content_root: String,
    /// Entry document filename within a language directory.
    #[serde(default = "default_entry_document")]
    pub entry_document: String,
    /// Languages the content is published in.
    pub languages: Vec<String>,
    pub default_language: String,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        UniverseConfig {
            content_root: "http://localhost/data/".to_string(),
            entry_document: default_entry_document(),
            languages: vec!["en".to_string()],
            default_language: "en".to_string(),
        }
    }
}

impl UniverseConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, UniverseError> {
        tracing::debug!("Reading universe config from {:?}", path.as_ref());
        let content = read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn store<P: AsRef<Path>>(&self, path: P) -> Result<(), UniverseError> {
        tracing::debug!("Writing universe config to {:?}", path.as_ref());
        let toml_string = toml::to_string(self)?;
        write(path, toml_string)?;
        Ok(())
    }

    /// The entry document URL for `language`. Fails when `language` is not
    /// a published language or the content root is not a valid base URL.
    pub fn entry_url(&self, language: &str) -> Result<Url, UniverseError> {
        if !self.languages.iter().any(|lang| lang == language) {
            return Err(UniverseError::NotFound(format!(
                "language '{language}' is not published (available: {})",
                self.languages.join(", ")
            )));
        }
        let mut root = Url::parse(&self.content_root)?;
        // Url::join treats a path without a trailing slash as a file.
        if !root.path().ends_with('/') {
            root.set_path(&format!("{}/", root.path()));
        }
        Ok(root.join(&format!("{language}/{}", self.entry_document))?)
    }
}
