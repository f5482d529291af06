pub mod local;

use std::path::{Path, PathBuf};

pub use local::LocalFileBrowser;

use crate::error::{Result, ThemecutError};

/// A file or directory found by a [`FileBrowser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: String,
    absolute_path: PathBuf,
    is_dir: bool,
}

impl FileHandle {
    pub fn new(path: impl Into<String>, absolute_path: impl Into<PathBuf>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            absolute_path: absolute_path.into(),
            is_dir,
        }
    }

    /// Path relative to the browser root, `/`-separated.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn is_directory(&self) -> bool {
        self.is_dir
    }

    /// Extension without the leading dot, or `""` when there is none.
    pub fn extension(&self) -> &str {
        self.absolute_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
    }

    /// Whether the file name ends in `.{extension}`. Unlike [`Self::extension`]
    /// this also matches multi-part extensions such as `html.tera`.
    pub fn has_extension(&self, extension: &str) -> bool {
        let Some(name) = self.absolute_path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        name.len() > extension.len() + 1
            && name
                .strip_suffix(extension)
                .is_some_and(|rest| rest.ends_with('.'))
    }

    /// Every entry below this directory, recursively. Paths of the returned
    /// handles are absolute; pass them through
    /// [`FileBrowser::get_relative_file`] to get root-relative ones.
    pub fn read(&self) -> Result<Vec<FileHandle>> {
        if !self.is_dir {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in walkdir::WalkDir::new(&self.absolute_path)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ThemecutError::Io {
                context: format!("reading directory {}", self.absolute_path.display()),
                source: e.into(),
            })?;
            let absolute = entry.path().to_path_buf();
            entries.push(FileHandle {
                path: absolute.to_string_lossy().into_owned(),
                absolute_path: absolute,
                is_dir: entry.file_type().is_dir(),
            });
        }

        Ok(entries)
    }
}

/// Lookup of files by paths relative to one or more browsing roots.
pub trait FileBrowser {
    /// The first regular file found at `path`, if any.
    fn get_file(&self, path: &str) -> Option<FileHandle>;

    /// Every directory found at `path`, one per root that has it.
    fn get_files(&self, path: &str) -> Vec<FileHandle>;

    /// Convert a handle with an absolute path into one relative to the root
    /// it lives under.
    fn get_relative_file(&self, file: &FileHandle) -> Option<FileHandle>;
}
