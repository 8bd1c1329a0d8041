/*!
 * Core types for the mergecode collector
 */

use std::path::{Path, PathBuf};
use std::time::Duration;

/// A file that passed every traversal filter and is due to be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as reached by the walker
    pub abs_path: PathBuf,
    /// Path relative to the scan root
    pub rel_path: PathBuf,
}

impl SourceFile {
    /// Relative path as written into the output header
    pub fn display_path(&self) -> String {
        self.rel_path.display().to_string()
    }
}

/// A file whose contents made it into the output
#[derive(Debug, Clone, Default)]
pub struct IncludedFile {
    /// Relative path
    pub path: String,
    /// Size in bytes
    pub bytes: u64,
    /// Number of lines
    pub lines: usize,
    /// Number of characters
    pub chars: usize,
}

/// A file or directory left out because it could not be read
#[derive(Debug, Clone)]
pub struct SkippedFile {
    /// Relative path
    pub path: String,
    /// Error description
    pub reason: String,
}

/// Outcome of one collector run
#[derive(Debug, Clone)]
pub struct CollectSummary {
    /// Where the merged text was written
    pub output_file: PathBuf,
    /// Files merged, in output order
    pub included: Vec<IncludedFile>,
    /// Files skipped with a warning, in traversal order
    pub skipped: Vec<SkippedFile>,
    /// Wall time of the run
    pub duration: Duration,
}

/// Progress notifications emitted while collecting
#[derive(Debug, Clone, Copy)]
pub enum CollectEvent<'a> {
    /// Traversal is about to start
    Started { root: &'a Path },
    /// Traversal finished; this many `Included`/`Skipped` events follow
    Planned { files: usize },
    /// A file block was appended
    Included { path: &'a str, bytes: u64 },
    /// A file was left out
    Skipped { path: &'a str, reason: &'a str },
}
