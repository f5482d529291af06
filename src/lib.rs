pub mod browser;
pub mod config;
pub mod engine;
pub mod error;
pub mod render;
pub mod template;
pub mod theme;

use std::path::Path;

pub use browser::{FileBrowser, FileHandle, LocalFileBrowser};
pub use engine::{Engine, EngineConfig, Resolver, TeraEngine};
pub use error::{Result, ThemecutError};
pub use template::Template;
pub use theme::{NoThemeModel, ThemeDescriptor, ThemeModel, ThemeSet};

/// Load `themecut.toml` from `root` and build an engine browsing that directory.
pub fn open(root: &Path) -> Result<TeraEngine> {
    let config = config::load_config(root)?;
    TeraEngine::from_config(root, &config)
}
