/*!
 * mergecode - Merge a project's source files into one text file for LLM context
 *
 * Walks a directory tree, keeps files with source-like extensions outside
 * ignored folders, and writes them into a single text file where each file
 * is introduced by its relative path.
 *
 * ```no_run
 * use mergecode::{Collector, Config, NoProgress};
 *
 * let summary = Collector::new(Config::for_dir("."))
 *     .run(&NoProgress)
 *     .expect("merge failed");
 * println!("merged {} files", summary.included.len());
 * ```
 */

pub mod clipboard;
pub mod collector;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use collector::{Collector, NoProgress, ProgressReporter};
pub use config::Config;
pub use error::{MergeError, ReadError, Result};
pub use report::Reporter;
pub use scanner::{ScanResult, Scanner};
pub use types::{CollectEvent, CollectSummary, IncludedFile, SkippedFile, SourceFile};
pub use writer::TextWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
