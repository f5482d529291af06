use std::path::{Component, Path, PathBuf};

use super::{FileBrowser, FileHandle};
use crate::error::{Result, ThemecutError};

/// A [`FileBrowser`] over an ordered list of directories on the local disk.
///
/// Earlier roots shadow later ones in [`FileBrowser::get_file`].
#[derive(Debug, Clone)]
pub struct LocalFileBrowser {
    roots: Vec<PathBuf>,
}

impl LocalFileBrowser {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    pub fn with_roots(roots: Vec<PathBuf>) -> Result<Self> {
        if roots.is_empty() {
            return Err(ThemecutError::InvalidConfiguration {
                reason: "a file browser needs at least one root directory".into(),
            });
        }
        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl FileBrowser for LocalFileBrowser {
    fn get_file(&self, path: &str) -> Option<FileHandle> {
        let relative = normalize(path)?;
        self.roots.iter().find_map(|root| {
            let absolute = root.join(&relative);
            absolute
                .is_file()
                .then(|| FileHandle::new(relative.clone(), absolute, false))
        })
    }

    fn get_files(&self, path: &str) -> Vec<FileHandle> {
        let Some(relative) = normalize(path) else {
            return Vec::new();
        };
        self.roots
            .iter()
            .map(|root| root.join(&relative))
            .filter(|absolute| absolute.is_dir())
            .map(|absolute| FileHandle::new(relative.clone(), absolute, true))
            .collect()
    }

    fn get_relative_file(&self, file: &FileHandle) -> Option<FileHandle> {
        let absolute = file.absolute_path();
        // Roots may nest (an include directory inside the project root), so
        // the deepest matching root gives the right relative path.
        let rel = self
            .roots
            .iter()
            .filter_map(|root| absolute.strip_prefix(root).ok())
            .min_by_key(|rel| rel.components().count())?;

        Some(FileHandle::new(
            to_slash(rel),
            absolute.to_path_buf(),
            file.is_directory(),
        ))
    }
}

/// Collapse duplicate and leading separators so `a//b` and `/a/b` both become
/// `a/b`. Paths climbing out with `..` never resolve inside a root.
fn normalize(path: &str) -> Option<String> {
    let mut parts = Vec::new();
    for part in path.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." => return None,
            part => parts.push(part),
        }
    }
    Some(parts.join("/"))
}

fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
