//! Skill package loading and file inventory.

use std::collections::BTreeSet;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, SkillcheckError};
use crate::utils::fs::{is_hidden, read_optional};

/// File name of the primary document.
pub const PRIMARY_DOCUMENT: &str = "SKILL.md";

/// A skill package directory opened for analysis.
#[derive(Debug, Clone)]
pub struct SkillPackage {
    root: PathBuf,
    name: String,
}

impl SkillPackage {
    /// Open the package at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SkillcheckError::NotADirectory`] when `path` is not an
    /// existing directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(SkillcheckError::NotADirectory(path.to_path_buf()));
        }
        let root = path.canonicalize()?;
        let name = package_name(path, &root);
        debug!(root = %root.display(), name = %name, "opened skill package");
        Ok(Self { root, name })
    }

    /// Canonical package root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Display name (directory base name).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn document_path(&self) -> PathBuf {
        self.root.join(PRIMARY_DOCUMENT)
    }

    /// Read the primary document. `Ok(None)` means it does not exist.
    ///
    /// Line endings are normalized to `\n` before any check sees the text.
    ///
    /// # Errors
    ///
    /// Returns [`SkillcheckError::DocumentUnreadable`] when the file exists
    /// but is not readable UTF-8 text.
    pub fn read_document(&self) -> Result<Option<String>> {
        let path = self.document_path();
        let content = read_optional(&path).map_err(|err| match err {
            SkillcheckError::Io(io_err) => SkillcheckError::DocumentUnreadable {
                reason: io_err.to_string(),
                path,
            },
            other => other,
        })?;
        Ok(content.map(normalize_newlines))
    }

    /// Resolve a package-relative href against the root.
    #[must_use]
    pub fn resolve(&self, href: &str) -> PathBuf {
        self.root.join(href)
    }

    /// Walk the package and collect every non-hidden file.
    #[must_use]
    pub fn inventory(&self) -> FileInventory {
        FileInventory::collect(&self.root)
    }
}

/// `\r\n` and lone `\r` become `\n`.
fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

/// Base name of the argument as given; falls back to the canonical root
/// when the argument has no final component (e.g. `.`).
fn package_name(path: &Path, root: &Path) -> String {
    let last_is_normal = matches!(path.components().next_back(), Some(Component::Normal(_)));
    let named = if last_is_normal { path } else { root };
    named
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Flat list of non-hidden files, relative to the package root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInventory {
    files: Vec<String>,
}

impl FileInventory {
    /// Depth-first walk of `root`, pruning hidden entries before descending.
    #[must_use]
    pub fn collect(root: &Path) -> Self {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 || !counts_as_file(&entry) {
                continue;
            }
            match relative_path(root, entry.path()) {
                Ok(rel) => files.push(rel),
                Err(err) => warn!(path = %entry.path().display(), error = %err, "skipping entry"),
            }
        }

        debug!(count = files.len(), "collected file inventory");
        Self { files }
    }

    #[must_use]
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: paths.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Top-level directories that contain at least one file, sorted.
    #[must_use]
    pub fn top_level_dirs(&self) -> Vec<String> {
        self.files
            .iter()
            .filter_map(|file| file.split_once('/').map(|(dir, _)| dir.to_string()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Files whose base name is in `names`, in inventory order.
    #[must_use]
    pub fn with_base_names<'a>(&'a self, names: &[String]) -> Vec<&'a str> {
        self.files
            .iter()
            .filter(|file| {
                let base = file.rsplit('/').next().unwrap_or(file);
                names.iter().any(|name| name == base)
            })
            .map(String::as_str)
            .collect()
    }
}

/// Regular files and symlinks that do not resolve to a directory.
fn counts_as_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && !entry.path().is_dir()
}

fn relative_path(root: &Path, path: &Path) -> io::Result<String> {
    let rel = path
        .strip_prefix(root)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    Ok(rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
