use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemecutError};
use crate::theme::ThemeSet;

/// Root config structure deserialized from themecut.toml.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemecutConfig {
    #[serde(default)]
    pub engine: EngineSection,

    #[serde(default)]
    pub themes: ThemeSet,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineSection {
    /// Base path for template lookups, relative to the browser roots.
    pub path: Option<String>,

    /// Extension of template files, without the dot (default: "tera").
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Extra browser roots searched after the project root.
    #[serde(default)]
    pub include: Vec<String>,
}

pub(crate) fn default_extension() -> String {
    "tera".to_string()
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            path: None,
            extension: default_extension(),
            include: Vec::new(),
        }
    }
}

impl ThemecutConfig {
    /// Validate the config for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if matches!(self.engine.path.as_deref(), Some("")) {
            return Err(ThemecutError::InvalidConfiguration {
                reason: "engine.path must not be empty".into(),
            });
        }

        validate_extension(&self.engine.extension)?;

        if self.engine.include.iter().any(String::is_empty) {
            return Err(ThemecutError::InvalidConfiguration {
                reason: "engine.include entries must not be empty".into(),
            });
        }

        self.themes.validate()
    }
}

pub(crate) fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(ThemecutError::InvalidConfiguration {
            reason: "the template extension must not be empty".into(),
        });
    }
    if extension.starts_with('.') {
        return Err(ThemecutError::InvalidConfiguration {
            reason: format!("the template extension '{extension}' must not start with a dot"),
        });
    }
    Ok(())
}
