use std::collections::BTreeMap;

use crate::browser::{FileBrowser, FileHandle};
use crate::error::{Result, ThemecutError};

/// Theme-aware lookup of template files below a base path.
pub struct Resolver<'a> {
    browser: &'a dyn FileBrowser,
    path: Option<&'a str>,
    extension: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(browser: &'a dyn FileBrowser, path: Option<&'a str>, extension: &'a str) -> Self {
        Self {
            browser,
            path,
            extension,
        }
    }

    /// `{path/}{theme/}`, the directory every lookup for `theme` happens in.
    fn prefix(&self, theme: Option<&str>) -> String {
        let mut prefix = String::new();
        if let Some(path) = self.path {
            prefix.push_str(path.trim_end_matches('/'));
            prefix.push('/');
        }
        if let Some(theme) = theme {
            prefix.push_str(theme);
            prefix.push('/');
        }
        prefix
    }

    /// Candidate paths for `resource`, in search order. The theme-less
    /// candidate is always last.
    pub fn candidates(&self, resource: &str, hierarchy: &[String]) -> Vec<String> {
        hierarchy
            .iter()
            .map(|theme| Some(theme.as_str()))
            .chain(std::iter::once(None))
            .map(|theme| format!("{}{}.{}", self.prefix(theme), resource, self.extension))
            .collect()
    }

    /// Find the first existing candidate for `resource`.
    pub fn resolve(&self, resource: &str, hierarchy: &[String]) -> Result<FileHandle> {
        if resource.is_empty() {
            return Err(ThemecutError::ResourceNotSet);
        }

        let mut last = String::new();
        for candidate in self.candidates(resource, hierarchy) {
            tracing::trace!(%candidate, "checking template candidate");
            if let Some(file) = self.browser.get_file(&candidate) {
                tracing::debug!(
                    resource,
                    file = %file.absolute_path().display(),
                    "resolved template"
                );
                return Ok(file);
            }
            last = candidate;
        }

        Err(ThemecutError::ResourceNotFound { path: last })
    }

    /// Map of every template below `namespace`, keyed by its resource name
    /// (path relative to the theme directory, extension stripped) with the
    /// path relative to `namespace` as value. The first theme to provide a
    /// resource wins.
    pub fn list_resources(
        &self,
        namespace: &str,
        hierarchy: &[String],
    ) -> Result<BTreeMap<String, String>> {
        let namespace = namespace.trim_matches('/');
        let mut resources = BTreeMap::new();

        let themes: Vec<Option<&str>> = if hierarchy.is_empty() {
            vec![None]
        } else {
            hierarchy.iter().map(|theme| Some(theme.as_str())).collect()
        };

        for theme in themes {
            let prefix = self.prefix(theme);
            let directory = format!("{prefix}{namespace}");
            self.collect_directory(&prefix, &directory, &mut resources)?;
        }

        tracing::debug!(namespace, count = resources.len(), "listed template resources");

        Ok(resources)
    }

    fn collect_directory(
        &self,
        prefix: &str,
        directory: &str,
        resources: &mut BTreeMap<String, String>,
    ) -> Result<()> {
        let directory = directory.trim_end_matches('/');
        let suffix = format!(".{}", self.extension);

        for dir in self.browser.get_files(directory) {
            for entry in dir.read()? {
                if entry.is_directory() || !entry.has_extension(self.extension) {
                    continue;
                }
                let Some(file) = self.browser.get_relative_file(&entry) else {
                    continue;
                };

                let file_path = file.path();
                let Some(stem) = file_path.strip_suffix(&suffix) else {
                    continue;
                };
                let key = stem.strip_prefix(prefix).unwrap_or(stem);
                let name = if directory.is_empty() {
                    stem
                } else {
                    stem.strip_prefix(directory)
                        .map(|rest| rest.trim_start_matches('/'))
                        .unwrap_or(stem)
                };

                resources
                    .entry(key.to_string())
                    .or_insert_with(|| name.to_string());
            }
        }

        Ok(())
    }
}
