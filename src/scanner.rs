/*!
 * Directory traversal and file selection
 *
 * Walks the scan root in pre-order, pruning ignored directories, and keeps
 * every file whose extension is allowed. Entries are visited files-first,
 * then subdirectories, each group sorted by name, so output order does not
 * depend on the platform's directory listing order.
 */

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{ReadError, Result};
use crate::types::{SkippedFile, SourceFile};

/// Files selected by a scan plus entries the walker could not enter
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to merge, in traversal order
    pub files: Vec<SourceFile>,
    /// Directories or entries below the root that could not be read
    pub walk_errors: Vec<SkippedFile>,
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Canonical path of the output file, never selected
    output: Option<PathBuf>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self {
            config,
            output: None,
        }
    }

    /// Leave `output` out of the scan even if it matches the filters.
    ///
    /// The file must already exist for identity matching to work.
    pub fn excluding_output(mut self, output: &Path) -> Self {
        self.output = fs::canonicalize(output).ok();
        self
    }

    /// Walk the configured root and select files
    pub fn scan(&self) -> Result<ScanResult> {
        let root = self.config.target_dir.as_path();

        // An unreadable root is fatal, unlike anything below it
        fs::read_dir(root)?;

        let mut result = ScanResult::default();
        if self.config.respect_gitignore {
            self.walk_gitignore(root, &mut result);
        } else {
            self.walk_plain(root, &mut result)?;
        }
        Ok(result)
    }

    fn walk_plain(&self, root: &Path, result: &mut ScanResult) -> Result<()> {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by(|a, b| {
                files_first(
                    a.file_type().is_dir(),
                    b.file_type().is_dir(),
                    a.file_name(),
                    b.file_name(),
                )
            })
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !(e.file_type().is_dir()
                        && self.config.ignores_dir(&e.file_name().to_string_lossy()))
            });

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_dir()
                        && !is_dir_link(entry.path_is_symlink(), entry.path())
                    {
                        self.consider(root, entry.path(), result);
                    }
                }
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    let path = e.path().unwrap_or(root).to_path_buf();
                    result.walk_errors.push(walk_error(root, &path, e.to_string()));
                }
            }
        }
        Ok(())
    }

    fn walk_gitignore(&self, root: &Path, result: &mut ScanResult) {
        let ignore_dirs = self.config.ignore_dirs.clone();
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(false)
            .follow_links(false)
            .parents(false)
            .git_global(false)
            .ignore(false)
            .git_ignore(true)
            .git_exclude(true)
            .require_git(false)
            .sort_by_file_path(|a, b| {
                files_first(
                    a.is_dir(),
                    b.is_dir(),
                    a.file_name().unwrap_or_default(),
                    b.file_name().unwrap_or_default(),
                )
            })
            .filter_entry(move |e| {
                e.depth() == 0
                    || !(e.file_type().map_or(false, |ft| ft.is_dir())
                        && ignore_dirs.contains(&*e.file_name().to_string_lossy()))
            });

        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().map_or(false, |ft| ft.is_dir())
                        && !is_dir_link(entry.path_is_symlink(), entry.path())
                    {
                        self.consider(root, entry.path(), result);
                    }
                }
                Err(e) => {
                    let path = ignore_error_path(&e).unwrap_or(root).to_path_buf();
                    result.walk_errors.push(walk_error(root, &path, e.to_string()));
                }
            }
        }
    }

    /// Apply the file filters to a non-directory entry
    fn consider(&self, root: &Path, path: &Path, result: &mut ScanResult) {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return,
        };

        if !self.config.allows_file(&name) || self.config.excluded_names.contains(&*name) {
            return;
        }
        if self.is_output(path) {
            return;
        }

        result.files.push(SourceFile {
            abs_path: path.to_path_buf(),
            rel_path: relative_to(root, path),
        });
    }

    /// Check whether `path` is the file being written
    pub fn is_output(&self, path: &Path) -> bool {
        match &self.output {
            Some(output) => {
                path.file_name() == output.file_name()
                    && fs::canonicalize(path).map_or(false, |p| &p == output)
            }
            None => false,
        }
    }
}

/// Read a whole file as UTF-8 text
pub fn read_source(path: &Path) -> std::result::Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}

fn files_first(a_dir: bool, b_dir: bool, a: &std::ffi::OsStr, b: &std::ffi::OsStr) -> Ordering {
    a_dir.cmp(&b_dir).then_with(|| a.cmp(b))
}

/// Links to directories are neither descended into nor read
fn is_dir_link(is_symlink: bool, path: &Path) -> bool {
    is_symlink && path.is_dir()
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

fn walk_error(root: &Path, path: &Path, reason: String) -> SkippedFile {
    SkippedFile {
        path: relative_to(root, path).display().to_string(),
        reason,
    }
}

fn ignore_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            ignore_error_path(err)
        }
        _ => None,
    }
}
