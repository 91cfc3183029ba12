//! Clean command implementation
//!
//! Sanitizes record text and prints it, with no counting or pruning.
//! Useful for inspecting what the normalization stage actually feeds
//! the tokenizer.

use crate::error::{CliError, CliResult};
use crate::input;
use anyhow::Context;
use bibscrub_core::{MarkupSanitizer, SpecialCharCleaner};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Strip every `<...>` span instead of the known wrapper vocabulary
    #[arg(short, long)]
    pub all_tags: bool,

    /// Skip the special-character cleanup pass
    #[arg(long)]
    pub raw: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.verbose, self.quiet);

        let files = input::resolve_patterns(&self.input)?;
        let sanitizer = MarkupSanitizer::default();
        let cleaner = SpecialCharCleaner::default();

        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(std::fs::File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(std::io::stdout().lock()),
        };

        for path in &files {
            // Nothing is written for a record that failed; the pass
            // moves on to the next one.
            match self.sanitize_one(path, &sanitizer, &cleaner) {
                Ok(text) => writeln!(writer, "{}", text.trim_end())?,
                Err(err) => {
                    log::warn!("{err}");
                    continue;
                }
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn sanitize_one(
        &self,
        path: &Path,
        sanitizer: &MarkupSanitizer,
        cleaner: &SpecialCharCleaner,
    ) -> Result<String, CliError> {
        let raw = input::read_record(path)
            .map_err(|err| CliError::RecordError(format!("{}: {err:#}", path.display())))?;

        let sanitized = if self.all_tags {
            sanitizer.strip_all_tags(&raw)
        } else {
            sanitizer.sanitize_abstract(&raw)
        }
        .map_err(|err| CliError::RecordError(format!("{}: {err}", path.display())))?;

        Ok(if self.raw {
            sanitized
        } else {
            cleaner.clean(&sanitized)
        })
    }
}
