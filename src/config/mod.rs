pub mod schema;

use std::path::Path;

use crate::error::{Result, ThemecutError};

pub use schema::{EngineSection, ThemecutConfig};

pub const CONFIG_FILE: &str = "themecut.toml";

/// Load and validate a ThemecutConfig from a themecut.toml file.
pub fn load_config(path: &Path) -> Result<ThemecutConfig> {
    let config_path = if path.ends_with(CONFIG_FILE) {
        path.to_path_buf()
    } else {
        path.join(CONFIG_FILE)
    };

    if !config_path.exists() {
        return Err(ThemecutError::ConfigNotFound { path: config_path });
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| ThemecutError::Io {
        context: format!("reading {}", config_path.display()),
        source: e,
    })?;

    let config: ThemecutConfig =
        toml::from_str(&content).map_err(|e| ThemecutError::ConfigParse { source: e })?;

    config.validate()?;

    tracing::debug!(
        config = %config_path.display(),
        themes = config.themes.themes.len(),
        "loaded engine config"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ThemecutError::ConfigNotFound { .. }));
    }

    #[test]
    fn malformed_config_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "not valid [[ toml").unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ThemecutError::ConfigParse { .. }));
    }

    #[test]
    fn accepts_direct_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONFIG_FILE);
        std::fs::write(&file, "[engine]\npath = \"themes\"\n").unwrap();
        let config = load_config(&file).unwrap();
        assert_eq!(config.engine.path.as_deref(), Some("themes"));
    }
}
