//! Corpus pass progress reporting
//!
//! A pass has two outcomes per record: processed or skipped. Skips are
//! counted even in quiet mode so the end-of-pass summary can report
//! them; the bar itself only exists when output is wanted.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};

/// Tracks one corpus pass over a known number of records.
pub struct PassProgress {
    bar: Option<ProgressBar>,
    skipped: AtomicU64,
}

impl PassProgress {
    /// Creates a reporter for `total` records, silent when `quiet`.
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = (!quiet).then(|| {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40.green/white} {pos}/{len} records ({msg} skipped)")
                    .unwrap()
                    .progress_chars("=> "),
            );
            bar.set_message("0");
            bar
        });
        Self {
            bar,
            skipped: AtomicU64::new(0),
        }
    }

    /// Marks one record as processed.
    pub fn record_done(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Marks one record as skipped; it still advances the pass.
    pub fn record_skipped(&self) {
        let skipped = self.skipped.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(bar) = &self.bar {
            bar.set_message(skipped.to_string());
            bar.inc(1);
        }
    }

    /// Number of records skipped so far.
    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }

    /// Ends the pass and surfaces the skip count.
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        let skipped = self.skipped();
        if skipped > 0 {
            log::warn!("{skipped} record(s) skipped during the pass");
        }
    }
}
