pub mod resolve;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

pub use resolve::Resolver;

use crate::browser::{FileBrowser, FileHandle, LocalFileBrowser};
use crate::config::schema::{default_extension, validate_extension};
use crate::config::ThemecutConfig;
use crate::error::{Result, ThemecutError};
use crate::render::{build_context, render_file, render_file_to};
use crate::template::Template;
use crate::theme::{NoThemeModel, ThemeModel};

/// A template engine: turns a [`Template`] into output by way of a themed
/// file lookup.
pub trait Engine {
    /// Machine name of the engine.
    fn name(&self) -> &str;

    fn render(&self, template: &Template) -> Result<String>;

    fn render_to(&self, template: &Template, out: &mut dyn Write) -> Result<()>;

    /// Absolute path of the file `template` resolves to.
    fn resolve_file(&self, template: &Template) -> Result<PathBuf>;

    /// Resources available below `namespace` for `theme`, see
    /// [`Resolver::list_resources`].
    fn list_resources(
        &self,
        namespace: &str,
        theme: Option<&str>,
    ) -> Result<BTreeMap<String, String>>;
}

/// Base path and file extension an engine resolves templates with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    path: Option<String>,
    extension: String,
}

impl EngineConfig {
    pub fn new(path: Option<&str>) -> Result<Self> {
        let mut config = Self {
            path: None,
            extension: default_extension(),
        };
        config.set_path(path)?;
        Ok(config)
    }

    pub fn with_extension(mut self, extension: &str) -> Result<Self> {
        validate_extension(extension)?;
        self.extension = extension.to_string();
        Ok(self)
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Set the base path; `None` searches directly in the browser roots.
    pub fn set_path(&mut self, path: Option<&str>) -> Result<()> {
        if path == Some("") {
            return Err(ThemecutError::InvalidConfiguration {
                reason: "could not set the path for the file browser: provided path is empty"
                    .into(),
            });
        }
        self.path = path.map(str::to_string);
        Ok(())
    }
}

/// Engine rendering template files with Tera.
pub struct TeraEngine {
    config: EngineConfig,
    browser: Box<dyn FileBrowser + Send + Sync>,
    themes: Box<dyn ThemeModel + Send + Sync>,
}

impl TeraEngine {
    pub const NAME: &'static str = "tera";

    pub fn new(
        browser: impl FileBrowser + Send + Sync + 'static,
        themes: impl ThemeModel + Send + Sync + 'static,
        config: EngineConfig,
    ) -> Self {
        Self {
            config,
            browser: Box::new(browser),
            themes: Box::new(themes),
        }
    }

    /// Build an engine browsing `root` (plus its configured includes).
    pub fn from_config(root: &Path, config: &ThemecutConfig) -> Result<Self> {
        let mut roots = vec![root.to_path_buf()];
        roots.extend(config.engine.include.iter().map(|inc| root.join(inc)));
        let browser = LocalFileBrowser::with_roots(roots)?;

        let engine_config = EngineConfig::new(config.engine.path.as_deref())?
            .with_extension(&config.engine.extension)?;

        let engine = if config.themes.is_empty() {
            Self::new(browser, NoThemeModel, engine_config)
        } else {
            Self::new(browser, config.themes.clone(), engine_config)
        };
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_path(&mut self, path: Option<&str>) -> Result<()> {
        self.config.set_path(path)
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(
            self.browser.as_ref(),
            self.config.path(),
            self.config.extension(),
        )
    }

    /// Themes searched for `theme`, most specific first.
    pub fn theme_hierarchy(&self, theme: Option<&str>) -> Result<Vec<String>> {
        let descriptor = self.themes.get_theme(theme)?;
        self.themes.get_theme_hierarchy(&descriptor)
    }

    /// Resolve `template` to its file handle.
    pub fn resolve(&self, template: &Template) -> Result<FileHandle> {
        if template.resource().is_empty() {
            return Err(ThemecutError::ResourceNotSet);
        }
        let hierarchy = self.theme_hierarchy(template.theme())?;
        self.resolver().resolve(template.resource(), &hierarchy)
    }
}

impl Engine for TeraEngine {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, template: &Template) -> Result<String> {
        let file = self.resolve(template)?;
        let context = build_context(template.variables());
        let rendered = render_file(&file, &context)?;
        tracing::debug!(
            resource = template.resource(),
            bytes = rendered.len(),
            "rendered template"
        );
        Ok(rendered)
    }

    fn render_to(&self, template: &Template, out: &mut dyn Write) -> Result<()> {
        let file = self.resolve(template)?;
        let context = build_context(template.variables());
        render_file_to(&file, &context, out)
    }

    fn resolve_file(&self, template: &Template) -> Result<PathBuf> {
        Ok(self.resolve(template)?.absolute_path().to_path_buf())
    }

    fn list_resources(
        &self,
        namespace: &str,
        theme: Option<&str>,
    ) -> Result<BTreeMap<String, String>> {
        let hierarchy = self.theme_hierarchy(theme)?;
        self.resolver().list_resources(namespace, &hierarchy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeSet;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn themes() -> ThemeSet {
        toml::from_str(
            r#"
default = "dark"

[dark]
parent = "light"

[light]
"#,
        )
        .unwrap()
    }

    fn engine(root: &Path) -> TeraEngine {
        let config = EngineConfig::new(Some("themes"))
            .unwrap()
            .with_extension("php")
            .unwrap();
        TeraEngine::new(LocalFileBrowser::new(root), themes(), config)
    }

    #[test]
    fn set_path_rejects_empty_string() {
        let mut config = EngineConfig::new(None).unwrap();
        let err = config.set_path(Some("")).unwrap_err();
        assert!(matches!(err, ThemecutError::InvalidConfiguration { .. }));
        assert_eq!(config.path(), None);

        config.set_path(Some("views")).unwrap();
        assert_eq!(config.path(), Some("views"));
        config.set_path(None).unwrap();
        assert_eq!(config.path(), None);
    }

    #[test]
    fn constructor_rejects_empty_path() {
        assert!(EngineConfig::new(Some("")).is_err());
    }

    #[test]
    fn render_uses_theme_file_and_variables() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "themes/dark/page/header.php", "dark {{ title }}");
        write(root.path(), "themes/page/header.php", "base {{ title }}");

        let template = Template::new("page/header").with_variable("title", "Home");
        let rendered = engine(root.path()).render(&template).unwrap();
        assert_eq!(rendered, "dark Home");
    }

    #[test]
    fn explicit_theme_overrides_default() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "themes/dark/page.php", "dark");
        write(root.path(), "themes/light/page.php", "light");

        let template = Template::new("page").with_theme("light").unwrap();
        assert_eq!(engine(root.path()).render(&template).unwrap(), "light");
    }

    #[test]
    fn render_with_empty_resource_is_not_set() {
        let root = tempfile::tempdir().unwrap();
        let template = Template::default().with_variable("title", "ignored");
        let err = engine(root.path()).render(&template).unwrap_err();
        assert!(matches!(err, ThemecutError::ResourceNotSet));
    }

    #[test]
    fn render_to_streams_into_writer() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "themes/light/mail.php", "Dear {{ name }},");

        let template = Template::new("mail").with_variable("name", "Ada");
        let mut out = Vec::new();
        engine(root.path()).render_to(&template, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Dear Ada,");
    }

    #[test]
    fn resolve_file_is_absolute() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "themes/page.php", "x");

        let path = engine(root.path())
            .resolve_file(&Template::new("page"))
            .unwrap();
        assert_eq!(path, root.path().join("themes/page.php"));
        assert!(path.is_absolute());
    }

    #[test]
    fn unknown_template_theme_is_error() {
        let root = tempfile::tempdir().unwrap();
        let template = Template::new("page").with_theme("neon").unwrap();
        let err = engine(root.path()).render(&template).unwrap_err();
        assert!(matches!(err, ThemecutError::UnknownTheme { .. }));
    }

    #[test]
    fn list_resources_first_theme_wins() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "themes/dark/page/header.php", "");
        write(root.path(), "themes/light/page/header.php", "");
        write(root.path(), "themes/light/page/blocks/footer.php", "");
        write(root.path(), "themes/light/page/notes.txt", "");
        write(root.path(), "themes/page/base-only.php", "");

        let resources = engine(root.path()).list_resources("page", None).unwrap();

        let expected: BTreeMap<String, String> = [
            ("page/header", "header"),
            ("page/blocks/footer", "blocks/footer"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(resources, expected);
    }

    #[test]
    fn list_resources_without_themes_uses_base() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "mail/welcome.tera", "");
        write(root.path(), "mail/reset/password.tera", "");
        write(root.path(), "other/skip.tera", "");

        let engine = TeraEngine::new(
            LocalFileBrowser::new(root.path()),
            NoThemeModel,
            EngineConfig::new(None).unwrap(),
        );
        let resources = engine.list_resources("mail", None).unwrap();

        assert_eq!(resources.len(), 2);
        assert_eq!(resources["mail/welcome"], "welcome");
        assert_eq!(resources["mail/reset/password"], "reset/password");
    }

    #[test]
    fn multi_part_extension_resolves_and_lists() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "views/mail/welcome.html.tera", "hi {{ name }}");
        write(root.path(), "views/mail/plain.tera", "");

        let config = EngineConfig::new(Some("views"))
            .unwrap()
            .with_extension("html.tera")
            .unwrap();
        let engine = TeraEngine::new(LocalFileBrowser::new(root.path()), NoThemeModel, config);

        let template = Template::new("mail/welcome").with_variable("name", "Ada");
        assert_eq!(engine.render(&template).unwrap(), "hi Ada");

        let resources = engine.list_resources("mail", None).unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources["mail/welcome"], "welcome");
    }

    #[test]
    fn themes_without_default_render_base_file() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "themes/dark/page.tera", "dark");
        write(root.path(), "themes/page.tera", "base");

        let themes: ThemeSet = toml::from_str("[dark]\n").unwrap();
        let engine = TeraEngine::new(
            LocalFileBrowser::new(root.path()),
            themes,
            EngineConfig::new(Some("themes")).unwrap(),
        );

        assert!(engine.theme_hierarchy(None).unwrap().is_empty());
        assert_eq!(engine.render(&Template::new("page")).unwrap(), "base");

        let dark = Template::new("page").with_theme("dark").unwrap();
        assert_eq!(engine.render(&dark).unwrap(), "dark");
    }

    #[test]
    fn resources_outside_the_root_are_not_found() {
        let outer = tempfile::tempdir().unwrap();
        let site = outer.path().join("site");
        write(&site, "page.tera", "inside");
        write(outer.path(), "secret.tera", "SECRET");

        let engine = TeraEngine::new(
            LocalFileBrowser::new(&site),
            NoThemeModel,
            EngineConfig::new(None).unwrap(),
        );

        let err = engine.render(&Template::new("../secret")).unwrap_err();
        assert!(matches!(err, ThemecutError::ResourceNotFound { .. }));
        assert_eq!(engine.render(&Template::new("page")).unwrap(), "inside");
    }

    #[test]
    fn from_config_without_themes_has_empty_hierarchy() {
        let root = tempfile::tempdir().unwrap();
        let config = ThemecutConfig::default();
        let engine = TeraEngine::from_config(root.path(), &config).unwrap();
        assert!(engine.theme_hierarchy(None).unwrap().is_empty());
        assert_eq!(engine.name(), "tera");
        assert_eq!(engine.config().extension(), "tera");
    }
}
