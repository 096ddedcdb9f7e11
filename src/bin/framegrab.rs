use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use colored::Colorize;
use framegrab::{FfmpegLogLevel, ProgressCallback, ProgressInfo, RunOutcome};
use indicatif::{ProgressBar, ProgressStyle};

const CLI_AFTER_HELP: &str = "Examples:\n  framegrab ~/Videos\n  framegrab            (prompts for a directory)\n\nEach video in the directory produces <name>_first_frame.png next to it.";

#[derive(Debug, Parser)]
#[command(
    name = "framegrab",
    version,
    about = "Extract the first frame of every video in a directory as PNG images",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Directory containing video files. Prompted for on stdin when omitted.
    directory: Option<PathBuf>,
}

fn prompt_for_directory() -> Result<PathBuf, Box<dyn std::error::Error>> {
    print!("Please enter the directory path containing video files: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(PathBuf::from(line.trim()))
}

struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let bar = ProgressBar::no_length();
        let style =
            ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}")?;
        bar.set_style(style.progress_chars("##-"));
        Ok(Self { bar })
    }
}

impl ProgressCallback for TerminalProgress {
    fn on_progress(&self, info: &ProgressInfo) {
        if self.bar.length() != Some(info.total) {
            self.bar.set_length(info.total);
        }
        self.bar.set_position(info.current);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let directory = match cli.directory {
        Some(directory) => directory,
        None => prompt_for_directory()?,
    };

    // Corrupt inputs make FFmpeg spray its own diagnostics; per-file
    // failures are already logged with their reason.
    framegrab::set_ffmpeg_log_level(FfmpegLogLevel::Error);

    let progress = TerminalProgress::new()?;

    match framegrab::run_with_progress(&directory, &progress)? {
        RunOutcome::NoCandidates => {
            progress.bar.finish_and_clear();
            println!(
                "{}",
                format!("No video files found in {}", directory.display()).yellow()
            );
        }
        RunOutcome::Completed(summary) => {
            progress.bar.finish_and_clear();
            println!("{}", "Processing complete:".green().bold());
            println!("  Total videos processed: {}", summary.total);
            println!(
                "  Successful extractions: {}",
                summary.successful.to_string().green()
            );
            let failed = if summary.failed > 0 {
                summary.failed.to_string().red().to_string()
            } else {
                summary.failed.to_string()
            };
            println!("  Failed extractions: {failed}");
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
