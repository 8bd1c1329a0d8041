/*!
 * Command-line interface for mergecode
 */

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use mergecode::clipboard::copy_to_clipboard;
use mergecode::config::{Args, Config};
use mergecode::{CollectEvent, Collector, ProgressReporter, Reporter};

/// Prints collector events above an indicatif progress bar
struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
        {
            bar.set_style(style);
        }
        bar.set_prefix("📂 Scanning");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Print an informational line to stdout above the bar
    fn line(&self, text: String) {
        self.bar.suspend(|| println!("{}", text));
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&self, event: &CollectEvent<'_>) {
        match *event {
            CollectEvent::Started { root } => {
                let root = std::fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
                self.line(format!("Scanning folder: {} ...", root.display()));
            }
            CollectEvent::Planned { files } => {
                self.bar.set_length(files as u64);
                self.bar.set_prefix("📊 Merging");
            }
            CollectEvent::Included { path, .. } => {
                self.line(format!("Added: {}", path));
                self.bar.set_message(path.to_string());
                self.bar.inc(1);
            }
            CollectEvent::Skipped { path, reason } => {
                self.bar
                    .suspend(|| eprintln!("⚠️ Could not read {}: {}", path, reason));
                self.bar.inc(1);
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "mergecode", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = Config::from_args(args);
    let progress = ConsoleProgress::new();

    let summary = match Collector::new(config.clone()).run(&progress) {
        Ok(summary) => summary,
        Err(e) => {
            progress.bar.abandon();
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    progress.bar.finish_and_clear();
    Reporter::new().print_report(&summary);

    if config.clip {
        match std::fs::read_to_string(&config.output_file) {
            Ok(text) => match copy_to_clipboard(&text) {
                Ok(()) => println!("📋 Copied output to clipboard"),
                Err(e) => eprintln!("Warning: Failed to copy to clipboard: {}", e),
            },
            Err(e) => eprintln!("Warning: Failed to read output for clipboard: {}", e),
        }
    }

    println!(
        "\n✅ Done! Upload '{}' to your AI assistant.",
        config.output_file.display()
    );

    ExitCode::SUCCESS
}
