//! Text normalization and feature pruning for bibliographic records
//!
//! This crate is the normalization stage of a document feature-extraction
//! pipeline: it sanitizes markup out of free-text fields (abstracts and
//! similar), cleans special characters ahead of tokenization, filters
//! stop words from token sequences, and prunes aggregated feature counts
//! below a minimum frequency before export.
//!
//! Record iteration, configuration files, and output destinations belong
//! to callers; everything here is an in-memory transformation except the
//! stop-list loader and the count exporter, which are generic over
//! `BufRead` and `Write`.

#![warn(missing_docs)]

pub mod cleaner;
pub mod error;
pub mod export;
pub mod prune;
pub mod sanitize;
pub mod scanner;
pub mod stopwords;

pub use cleaner::SpecialCharCleaner;
pub use error::{Error, Result};
pub use export::write_counts;
pub use prune::{prune_by_min_frequency, FeatureKey};
pub use sanitize::{MarkupSanitizer, TagVocabulary};
pub use scanner::skip_spans;
pub use stopwords::{remove_stop_words, LineMode, StopVocabulary};
