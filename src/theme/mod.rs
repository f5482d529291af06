pub mod set;

use serde::{Deserialize, Serialize};

pub use set::ThemeSet;

use crate::error::{Result, ThemecutError};

/// Name used for the theme descriptor when no theme was asked for.
pub const DEFAULT_THEME: &str = "default";

/// A theme as handed out by a [`ThemeModel`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeDescriptor {
    pub name: String,
    pub parent: Option<String>,
    pub display_name: Option<String>,
}

impl ThemeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            display_name: None,
        }
    }
}

/// Source of themes and their fallback order.
pub trait ThemeModel {
    /// Look up a theme by name; `None` asks for the model's default theme.
    fn get_theme(&self, name: Option<&str>) -> Result<ThemeDescriptor>;

    /// Themes to search for `theme`, most specific first. Empty when the
    /// model has no theme layering.
    fn get_theme_hierarchy(&self, theme: &ThemeDescriptor) -> Result<Vec<String>>;
}

/// A model without layering: every lookup ends at the theme-less base.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThemeModel;

impl ThemeModel for NoThemeModel {
    fn get_theme(&self, name: Option<&str>) -> Result<ThemeDescriptor> {
        match name {
            Some("") => Err(ThemecutError::InvalidConfiguration {
                reason: "could not get the theme: provided theme is empty".into(),
            }),
            Some(name) => Ok(ThemeDescriptor::new(name)),
            None => Ok(ThemeDescriptor::new(DEFAULT_THEME)),
        }
    }

    fn get_theme_hierarchy(&self, _theme: &ThemeDescriptor) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}
