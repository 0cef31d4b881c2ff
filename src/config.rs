//! Demo configuration.
//!
//! Every snippet binary accepts an optional path to a TOML or JSON file. Any
//! missing key falls back to the values the snippets were written with.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::html::{ElementSpec, HtmlType};
use crate::product::{Product, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is not set.
    pub log_level: String,
    pub color: bool,
    pub products: Vec<Product>,
    pub elements: Vec<ElementSpec>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: true,
            products: vec![Product::new("Blue pants", 10.0, Size::L)],
            elements: vec![ElementSpec {
                id: "txtName".to_string(),
                html_type: HtmlType::Input,
                placeholder: "Enter first name".to_string(),
                value: "Fernando".to_string(),
            }],
        }
    }
}

impl DemoConfig {
    /// Defaults when `path` is `None`, otherwise the parsed file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reads the config path from the first argument after the program name.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, ConfigError> {
        let path = args.nth(1);
        Self::load(path.as_deref().map(Path::new))
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validated()
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::from_toml(&err, content))?;
        config.validated()
    }

    /// Picks the format from the extension, or sniffs the content when there
    /// is none.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        tracing::debug!(path = %path.display(), format = ?format, "loading demo config");
        match format.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json(&content)
                } else {
                    Self::from_toml(&content)
                }
            }
        }
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::invalid("log_level", "must not be empty"));
        }
        Ok(self)
    }
}
