use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ThemeDescriptor, ThemeModel, DEFAULT_THEME};
use crate::error::{Result, ThemecutError};

/// One `[themes.<name>]` entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Theme searched after this one.
    pub parent: Option<String>,

    /// Human-readable name.
    pub display_name: Option<String>,
}

/// Themes declared in `themecut.toml`, chained through their `parent` entries.
///
/// The `default` key shares the `[themes]` table with the theme entries, so
/// no theme may be named `default`. Without a configured default, templates
/// that name no theme resolve against the theme-less base only.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeSet {
    /// Theme used when a template does not name one.
    #[serde(default)]
    pub default: Option<String>,

    #[serde(flatten)]
    pub themes: BTreeMap<String, ThemeConfig>,
}

impl ThemeSet {
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Check that the default and every parent are declared and that no
    /// parent chain loops.
    pub fn validate(&self) -> Result<()> {
        if let Some(default) = &self.default {
            self.descriptor(default)?;
        }

        for (name, theme) in &self.themes {
            if name.is_empty() || name == DEFAULT_THEME {
                return Err(ThemecutError::InvalidConfiguration {
                    reason: format!("'{name}' is not a valid theme name"),
                });
            }
            if let Some(parent) = &theme.parent {
                if !self.themes.contains_key(parent) {
                    return Err(ThemecutError::UnknownTheme {
                        name: parent.clone(),
                    });
                }
            }
            self.chain(name)?;
        }

        Ok(())
    }

    fn descriptor(&self, name: &str) -> Result<ThemeDescriptor> {
        let theme = self
            .themes
            .get(name)
            .ok_or_else(|| ThemecutError::UnknownTheme {
                name: name.to_string(),
            })?;

        Ok(ThemeDescriptor {
            name: name.to_string(),
            parent: theme.parent.clone(),
            display_name: theme.display_name.clone(),
        })
    }

    /// `name` followed by its ancestors.
    fn chain(&self, name: &str) -> Result<Vec<String>> {
        let mut chain: Vec<String> = Vec::new();
        let mut current = Some(name.to_string());

        while let Some(theme) = current {
            if chain.contains(&theme) {
                chain.push(theme);
                return Err(ThemecutError::CircularTheme { chain });
            }
            current = self
                .themes
                .get(&theme)
                .ok_or_else(|| ThemecutError::UnknownTheme {
                    name: theme.clone(),
                })?
                .parent
                .clone();
            chain.push(theme);
        }

        Ok(chain)
    }
}

impl ThemeModel for ThemeSet {
    fn get_theme(&self, name: Option<&str>) -> Result<ThemeDescriptor> {
        match name {
            Some("") => Err(ThemecutError::InvalidConfiguration {
                reason: "could not get the theme: provided theme is empty".into(),
            }),
            Some(name) => self.descriptor(name),
            None => match &self.default {
                Some(default) => self.descriptor(default),
                None => Ok(ThemeDescriptor::new(DEFAULT_THEME)),
            },
        }
    }

    fn get_theme_hierarchy(&self, theme: &ThemeDescriptor) -> Result<Vec<String>> {
        if theme.name == DEFAULT_THEME && !self.themes.contains_key(DEFAULT_THEME) {
            return Ok(Vec::new());
        }
        self.chain(&theme.name)
    }
}
