/*!
 * Collector: scan, read and merge in one sequential pass
 */

use std::time::Instant;

use crate::config::Config;
use crate::error::Result;
use crate::scanner::{read_source, Scanner};
use crate::types::{CollectEvent, CollectSummary, IncludedFile, SkippedFile};
use crate::writer::TextWriter;

/// Receives progress notifications from a collector run
pub trait ProgressReporter {
    /// Called once per event, in order
    fn report(&self, event: &CollectEvent<'_>);
}

/// Reporter that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _event: &CollectEvent<'_>) {}
}

/// Merges every selected file under the root into the output file
pub struct Collector {
    config: Config,
}

impl Collector {
    /// Create a new collector
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the collector, overwriting the output file.
    ///
    /// Files that cannot be read are reported and left out; any other
    /// failure aborts the run and may leave a partial output file behind.
    pub fn run(&self, reporter: &dyn ProgressReporter) -> Result<CollectSummary> {
        let start_time = Instant::now();
        self.config.validate()?;

        let mut writer = TextWriter::create(&self.config.output_file)?;
        writer.write_banner()?;

        reporter.report(&CollectEvent::Started {
            root: &self.config.target_dir,
        });

        let scanner = Scanner::new(self.config.clone()).excluding_output(&self.config.output_file);
        let scan = scanner.scan()?;

        reporter.report(&CollectEvent::Planned {
            files: scan.files.len() + scan.walk_errors.len(),
        });

        let mut skipped = Vec::new();
        for entry in scan.walk_errors {
            reporter.report(&CollectEvent::Skipped {
                path: &entry.path,
                reason: &entry.reason,
            });
            skipped.push(entry);
        }

        let mut included = Vec::with_capacity(scan.files.len());
        for file in &scan.files {
            let path = file.display_path();

            match read_source(&file.abs_path) {
                Ok(content) => {
                    writer.write_block(&path, &content)?;
                    let bytes = content.len() as u64;
                    reporter.report(&CollectEvent::Included { path: &path, bytes });
                    included.push(IncludedFile {
                        path,
                        bytes,
                        lines: content.lines().count(),
                        chars: content.chars().count(),
                    });
                }
                Err(e) => {
                    let reason = e.to_string();
                    reporter.report(&CollectEvent::Skipped {
                        path: &path,
                        reason: &reason,
                    });
                    skipped.push(SkippedFile { path, reason });
                }
            }
        }

        writer.finish()?;

        Ok(CollectSummary {
            output_file: self.config.output_file.clone(),
            included,
            skipped,
            duration: start_time.elapsed(),
        })
    }
}
