/*!
 * Configuration handling for mergecode
 */

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::utils::{
    normalize_extension, DEFAULT_EXCLUDED_NAMES, DEFAULT_EXTENSIONS, DEFAULT_IGNORE_DIRS,
    DEFAULT_OUTPUT_FILE,
};
use crate::{bail, ensure};

/// Command-line arguments for mergecode
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "mergecode",
    version = env!("CARGO_PKG_VERSION"),
    about = "Merge a project's source files into one annotated text file for LLM context",
    long_about = "Recursively collects source-like files under a directory and concatenates them into a single text file, each preceded by its relative path, ready to paste into a language-model prompt."
)]
pub struct Args {
    /// Directory to scan
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output text file name
    #[clap(default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Comma-separated list of extra file extensions to include
    #[clap(long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Comma-separated list of extra directory names to skip
    #[clap(long, value_delimiter = ',')]
    pub ignore_dirs: Vec<String>,

    /// Comma-separated list of extra file names to leave out
    #[clap(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Also honor .gitignore files while walking
    #[clap(long)]
    pub respect_gitignore: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    /// Copy output to clipboard
    #[clap(long, help = "Copy output to system clipboard")]
    pub clip: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Scan root
    pub target_dir: PathBuf,

    /// Output text file path
    pub output_file: PathBuf,

    /// Allowed extensions, lower-cased with the leading dot
    pub extensions: BTreeSet<String>,

    /// Directory names pruned from traversal
    pub ignore_dirs: BTreeSet<String>,

    /// File names never merged
    pub excluded_names: BTreeSet<String>,

    /// Whether to honor .gitignore files
    pub respect_gitignore: bool,

    /// Copy output to clipboard
    pub clip: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|d| d.to_string()).collect(),
            excluded_names: DEFAULT_EXCLUDED_NAMES.iter().map(|n| n.to_string()).collect(),
            respect_gitignore: false,
            clip: false,
        }
    }
}

impl Config {
    /// Create a default configuration scanning `target_dir`
    pub fn for_dir(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Self::default()
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut config = Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
            respect_gitignore: args.respect_gitignore,
            clip: args.clip,
            ..Self::default()
        };

        config
            .extensions
            .extend(args.extensions.iter().filter_map(|e| normalize_extension(e)));
        config.ignore_dirs.extend(non_empty(args.ignore_dirs));
        config.excluded_names.extend(non_empty(args.exclude));
        config
    }

    /// Whether `name` (a file name) carries an allowed extension
    pub fn allows_file(&self, name: &str) -> bool {
        match Path::new(name).extension() {
            Some(ext) => {
                let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
                self.extensions.contains(&ext)
            }
            None => false,
        }
    }

    /// Whether a directory called `name` is pruned
    pub fn ignores_dir(&self, name: &str) -> bool {
        self.ignore_dirs.contains(name)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.exists() {
            bail!(
                PathNotFound,
                "Target directory not found: {}",
                self.target_dir.display()
            );
        }
        ensure!(
            self.target_dir.is_dir(),
            Config,
            "Target is not a directory: {}",
            self.target_dir.display()
        );

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != Path::new("") {
                bail!(
                    PathNotFound,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
        }

        ensure!(
            !self.extensions.is_empty(),
            Config,
            "No file extensions to include"
        );

        Ok(())
    }
}

fn non_empty(values: Vec<String>) -> impl Iterator<Item = String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
