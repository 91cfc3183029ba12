//! Skip-scan over delimited spans
//!
//! A single left-to-right pass that copies every character outside a
//! marker-delimited span and drops everything inside, markers included.
//! This is the primitive behind both tag stripping and copyright-clause
//! excision; it is a lexical scan, not a parser.

use crate::error::{Error, Result};

/// Removes every span delimited by `start` and `end` from `text`.
///
/// Marker matching is ASCII case-insensitive. The first occurrence of
/// `end` after a `start` closes the span; nested or overlapping markers
/// are not supported. A `start` with no subsequent `end` is an
/// [`Error::UnterminatedSpan`] for the whole input.
///
/// Operates on byte offsets into the original text; nothing is copied
/// per character and the cursor never advances past the end of the text.
pub fn skip_spans(text: &str, start: &str, end: &str) -> Result<String> {
    // ASCII lowercasing preserves byte offsets, so positions found in
    // the folded copy index directly into the original text.
    let folded = text.to_ascii_lowercase();
    let start_folded = start.to_ascii_lowercase();
    let end_folded = end.to_ascii_lowercase();

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(offset) = folded[cursor..].find(&start_folded) {
        let open = cursor + offset;
        output.push_str(&text[cursor..open]);

        let resume = open + start_folded.len();
        match folded[resume..].find(&end_folded) {
            Some(close) => cursor = resume + close + end_folded.len(),
            None => {
                return Err(Error::UnterminatedSpan {
                    start: start.to_string(),
                    end: end.to_string(),
                    position: open,
                })
            }
        }
    }

    output.push_str(&text[cursor..]);
    Ok(output)
}
