//! Framework configuration, loaded from YAML or built in code.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration for a [`Framework`](crate::Framework).
///
/// Every field has a default, so a YAML file only needs the keys it changes:
///
/// ```yaml
/// title: Counter
/// web_dir: web
/// debug: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Window and document title.
    pub title: String,
    /// Directory the document and stylesheet are served from.
    pub web_dir: PathBuf,
    /// Directory of static assets (images, fonts).
    pub assets_dir: PathBuf,
    /// Port of the local asset server.
    pub assets_server_port: u16,
    /// File name of the generated stylesheet inside `web_dir`.
    pub stylesheet_name: String,
    /// Enables the host's developer tools.
    pub debug: bool,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            title: "weft".to_owned(),
            web_dir: PathBuf::from("web"),
            assets_dir: PathBuf::from("assets"),
            assets_server_port: 8008,
            stylesheet_name: "styles.css".to_owned(),
            debug: false,
        }
    }
}

impl FrameworkConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the web directory (builder).
    pub fn with_web_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.web_dir = dir.into();
        self
    }

    /// Set the assets directory (builder).
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Set the asset server port (builder).
    pub fn with_assets_server_port(mut self, port: u16) -> Self {
        self.assets_server_port = port;
        self
    }

    /// Set the stylesheet file name (builder).
    pub fn with_stylesheet_name(mut self, name: impl Into<String>) -> Self {
        self.stylesheet_name = name.into();
        self
    }

    /// Enable or disable debug mode (builder).
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Where the stylesheet is written.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.web_dir.join(&self.stylesheet_name)
    }
}
