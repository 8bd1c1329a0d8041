/*!
 * Utility functions and compiled-in defaults for mergecode
 */

use once_cell::sync::Lazy;

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "project_all_code.txt";

/// File names never merged by default: this tool and its script predecessor
pub static DEFAULT_EXCLUDED_NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![env!("CARGO_PKG_NAME"), "merge_code.py"]);

/// File extensions merged by default
pub static DEFAULT_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".py", ".js", ".html", ".css", ".json", ".md", ".txt", ".sql", ".ts", ".tsx",
    ]
});

/// Directory names pruned from traversal by default
pub static DEFAULT_IGNORE_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        // Python
        "__pycache__",
        "venv",
        // Dependencies
        "node_modules",
        // Build & Dist
        "dist",
        "build",
        // IDEs & Editors
        ".idea",
        ".vscode",
    ]
});

/// Normalize a user-supplied extension to the lower-cased `.ext` form.
///
/// Returns `None` for empty input.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Format a count with K/M suffixes
pub fn format_number(num: usize) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}
