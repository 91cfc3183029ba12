//! Process command implementation
//!
//! Drives one corpus pass: every input file is one record whose text is
//! sanitized, cleaned, stop-filtered and counted into an aggregated
//! feature mapping. Pruning runs once, after all counting is done, and
//! the surviving counts are exported.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input;
use crate::progress::PassProgress;
use anyhow::{bail, Context, Result};
use bibscrub_core::{
    prune_by_min_frequency, remove_stop_words, write_counts, FeatureKey, LineMode,
    MarkupSanitizer, SpecialCharCleaner, StopVocabulary,
};
use clap::Args;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "tsv")]
    pub format: OutputFormat,

    /// Stop-word list file (no stop filtering when absent)
    #[arg(short, long, value_name = "FILE")]
    pub stop_list: Option<PathBuf>,

    /// How multi-line stop lists are read
    #[arg(long, value_enum)]
    pub stop_list_mode: Option<StopListMode>,

    /// Minimum occurrence count a feature needs to survive pruning
    #[arg(short, long, value_name = "N")]
    pub min_frequency: Option<u32>,

    /// Size of the n-grams counted from filtered tokens
    #[arg(short = 'n', long, value_name = "N")]
    pub ngram_size: Option<usize>,

    /// Process records in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing (0 = all cores)
    #[arg(long, default_value = "0")]
    pub threads: usize,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated `key<TAB>count` lines
    Tsv,
    /// JSON object of key to count
    Json,
}

/// Stop-list line handling
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StopListMode {
    /// Only the last non-empty line's tokens are kept
    LastLine,
    /// Tokens from every line are unioned
    Union,
}

impl From<StopListMode> for LineMode {
    fn from(mode: StopListMode) -> Self {
        match mode {
            StopListMode::LastLine => LineMode::LastLine,
            StopListMode::Union => LineMode::Union,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.verbose, self.quiet);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let min_frequency = self
            .min_frequency
            .unwrap_or(file_config.filtering.min_frequency);
        let ngram_size = self.ngram_size.unwrap_or(file_config.processing.ngram_size);
        if ngram_size == 0 {
            bail!(CliError::ConfigError(
                "ngram_size must be at least 1".to_string()
            ));
        }

        // Stop-list problems are fatal before the pass starts; there is
        // no silent empty-vocabulary fallback.
        let line_mode = match self.stop_list_mode {
            Some(mode) => mode.into(),
            None => parse_line_mode(&file_config.filtering.stop_list_mode)?,
        };
        let stop_list = self
            .stop_list
            .clone()
            .or(file_config.filtering.stop_list);
        let vocabulary = stop_list
            .map(|path| StopVocabulary::from_file(&path, line_mode))
            .transpose()
            .context("stop-word filtering cannot run without its vocabulary")?;
        if vocabulary.is_none() {
            log::info!("No stop-word list configured; stop filtering disabled");
        }

        let files = input::resolve_patterns(&self.input)?;
        log::info!("Processing {} record file(s)", files.len());

        let progress = PassProgress::new(files.len() as u64, self.quiet);

        let sanitizer = MarkupSanitizer::default();
        let cleaner = SpecialCharCleaner::default();

        let process_one = |path: &PathBuf| -> Option<HashMap<FeatureKey, u32>> {
            match process_record(path, &sanitizer, &cleaner, vocabulary.as_ref(), ngram_size) {
                Ok(counts) => {
                    progress.record_done();
                    Some(counts)
                }
                Err(err) => {
                    log::warn!("{err}");
                    progress.record_skipped();
                    None
                }
            }
        };

        let mut counts = if self.parallel {
            let threads = if self.threads == 0 {
                num_cpus::get()
            } else {
                self.threads
            };
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("failed to build worker pool")?;
            // Per-worker maps are merged here before pruning ever sees
            // them; the pruner only runs on the fully aggregated map.
            pool.install(|| {
                files
                    .par_iter()
                    .filter_map(process_one)
                    .reduce(HashMap::new, merge_counts)
            })
        } else {
            files
                .iter()
                .filter_map(process_one)
                .fold(HashMap::new(), merge_counts)
        };

        progress.finish();

        let before = counts.len();
        prune_by_min_frequency(&mut counts, min_frequency);
        log::info!(
            "Pruned {} of {before} features below frequency {min_frequency}",
            before - counts.len()
        );

        self.write_output(&counts)
    }

    fn write_output(&self, counts: &HashMap<FeatureKey, u32>) -> Result<()> {
        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(std::fs::File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(std::io::stdout().lock()),
        };

        match self.format {
            OutputFormat::Tsv => write_counts(&mut writer, counts)?,
            OutputFormat::Json => {
                let rendered: BTreeMap<String, u32> = counts
                    .iter()
                    .map(|(key, count)| (key.to_string(), *count))
                    .collect();
                serde_json::to_writer_pretty(&mut writer, &rendered)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

/// Runs one record through the normalization stage.
///
/// Failures are isolated as [`CliError::RecordError`]s naming the
/// offending file: the caller logs them and skips the record, and the
/// pass continues with the next one. A failed record contributes
/// nothing to the aggregate.
fn process_record(
    path: &Path,
    sanitizer: &MarkupSanitizer,
    cleaner: &SpecialCharCleaner,
    vocabulary: Option<&StopVocabulary>,
    ngram_size: usize,
) -> Result<HashMap<FeatureKey, u32>, CliError> {
    let raw = input::read_record(path)
        .map_err(|err| CliError::RecordError(format!("{}: {err:#}", path.display())))?;

    let sanitized = sanitizer
        .sanitize_abstract(&raw)
        .map_err(|err| CliError::RecordError(format!("{}: {err}", path.display())))?;

    let cleaned = cleaner.clean(&sanitized);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let filtered = match vocabulary {
        Some(vocabulary) => remove_stop_words(&tokens, vocabulary),
        None => tokens.join(" "),
    };
    let filtered_tokens: Vec<&str> = filtered.split_whitespace().collect();

    Ok(count_ngrams(&filtered_tokens, ngram_size))
}

/// Counts lower-cased n-grams over a token sequence.
fn count_ngrams(tokens: &[&str], n: usize) -> HashMap<FeatureKey, u32> {
    let mut counts = HashMap::new();
    for window in tokens.windows(n) {
        let gram = window.join(" ").to_lowercase();
        *counts.entry(FeatureKey::from(gram)).or_insert(0) += 1;
    }
    counts
}

fn merge_counts(
    mut left: HashMap<FeatureKey, u32>,
    right: HashMap<FeatureKey, u32>,
) -> HashMap<FeatureKey, u32> {
    for (key, count) in right {
        *left.entry(key).or_insert(0) += count;
    }
    left
}

fn parse_line_mode(mode: &str) -> Result<LineMode> {
    match mode {
        "last-line" => Ok(LineMode::LastLine),
        "union" => Ok(LineMode::Union),
        other => bail!(CliError::ConfigError(format!(
            "unknown stop_list_mode: {other} (expected \"last-line\" or \"union\")"
        ))),
    }
}
