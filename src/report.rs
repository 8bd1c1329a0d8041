/*!
 * Reporting functionality for mergecode
 *
 * Renders the end-of-run summary with the tabled library.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::CollectSummary;
use crate::utils::{format_file_size, format_number};

/// Above this many files only the largest ten are listed
const FULL_LISTING_LIMIT: usize = 15;

/// Report generator for collector results
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// Print the report to stdout
    pub fn print_report(&self, summary: &CollectSummary) {
        println!("\n{}", self.generate_report(summary));
    }

    /// Generate the report text
    pub fn generate_report(&self, summary: &CollectSummary) -> String {
        let mut sections = Vec::new();

        if !summary.included.is_empty() {
            let title = if summary.included.len() > FULL_LISTING_LIMIT {
                "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT"
            } else {
                "📋  MERGED FILES"
            };
            sections.push(format!("{}\n{}", title, self.create_files_table(summary)));
        }

        if !summary.skipped.is_empty() {
            sections.push(format!(
                "⚠️  SKIPPED\n{}",
                self.create_skipped_table(summary)
            ));
        }

        sections.push(format!(
            "✅  MERGE COMPLETE\n{}",
            self.create_summary_table(summary)
        ));

        sections.join("\n\n")
    }

    fn create_summary_table(&self, summary: &CollectSummary) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let total_lines: usize = summary.included.iter().map(|f| f.lines).sum();
        let total_chars: usize = summary.included.iter().map(|f| f.chars).sum();
        let total_bytes: u64 = summary.included.iter().map(|f| f.bytes).sum();

        let rows = vec![
            SummaryRow {
                key: "📂 Output File",
                value: summary.output_file.display().to_string(),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", summary.duration),
            },
            SummaryRow {
                key: "📄 Files Merged",
                value: format_number(summary.included.len()),
            },
            SummaryRow {
                key: "🚫 Files Skipped",
                value: format_number(summary.skipped.len()),
            },
            SummaryRow {
                key: "📝 Total Lines",
                value: format_number(total_lines),
            },
            SummaryRow {
                key: "💾 Total Size",
                value: format_file_size(total_bytes),
            },
            SummaryRow {
                key: "📦 LLM Tokens",
                value: format!("{} tokens (estimated)", format_number(total_chars / 4)),
            },
        ];

        styled(Table::new(rows))
    }

    fn create_files_table(&self, summary: &CollectSummary) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        let mut files: Vec<_> = summary.included.iter().collect();
        if files.len() > FULL_LISTING_LIMIT {
            files.sort_by(|a, b| b.chars.cmp(&a.chars));
            files.truncate(10);
        }

        let rows: Vec<FileRow> = files
            .into_iter()
            .map(|f| FileRow {
                path: truncate_path(&f.path, 60),
                lines: format_number(f.lines),
                tokens: format_number(f.chars / 4),
            })
            .collect();

        styled(Table::new(rows))
    }

    fn create_skipped_table(&self, summary: &CollectSummary) -> String {
        #[derive(Tabled)]
        struct SkippedRow {
            #[tabled(rename = "Path")]
            path: String,

            #[tabled(rename = "Reason")]
            reason: String,
        }

        let rows: Vec<SkippedRow> = summary
            .skipped
            .iter()
            .map(|s| SkippedRow {
                path: truncate_path(&s.path, 60),
                reason: s.reason.clone(),
            })
            .collect();

        styled(Table::new(rows))
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));
    table.to_string()
}

/// Keep the tail of an over-long path, prefixed with "..."
fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - (max_len - 3)).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IncludedFile, SkippedFile};
    use std::path::PathBuf;
    use std::time::Duration;

    fn summary(files: usize) -> CollectSummary {
        CollectSummary {
            output_file: PathBuf::from("project_all_code.txt"),
            included: (0..files)
                .map(|i| IncludedFile {
                    path: format!("file{}.py", i),
                    bytes: 40,
                    lines: 2,
                    chars: 40 + i,
                })
                .collect(),
            skipped: vec![SkippedFile {
                path: "blob.txt".to_string(),
                reason: "not valid UTF-8 text".to_string(),
            }],
            duration: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_report_lists_files_and_skips() {
        let report = Reporter::new().generate_report(&summary(3));
        assert!(report.contains("MERGED FILES"));
        assert!(report.contains("file2.py"));
        assert!(report.contains("blob.txt"));
        assert!(report.contains("project_all_code.txt"));
    }

    #[test]
    fn test_report_limits_large_listings() {
        let report = Reporter::new().generate_report(&summary(20));
        assert!(report.contains("TOP 10"));
        // largest by chars is the last one
        assert!(report.contains("file19.py"));
        assert!(!report.contains("file0.py"));
    }

    #[test]
    fn test_truncate_path() {
        assert_eq!(truncate_path("a/b.py", 60), "a/b.py");
        let long = "x".repeat(80);
        let short = truncate_path(&long, 20);
        assert_eq!(short.chars().count(), 20);
        assert!(short.starts_with("..."));
    }
}
