//! Stop-word vocabulary and token filtering

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Token a matched stop word is replaced with before reassembly.
const SENTINEL: &str = "*";

/// How the loader combines the lines of a stop-word file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Only the last non-empty line's tokens become the vocabulary.
    ///
    /// This reproduces the historical loader, whose parse loop
    /// reassigned the vocabulary on every line instead of accumulating.
    /// Kept as the default so existing single-line stop lists behave
    /// identically.
    #[default]
    LastLine,
    /// Tokens from every line are unioned into one vocabulary.
    Union,
}

/// A set of case-insensitive stop-word tokens.
///
/// Loaded once per corpus pass from a line-based file where each line
/// is a comma-separated token list. Tokens are stored lower-cased;
/// membership checks fold the probe the same way.
#[derive(Debug, Clone, Default)]
pub struct StopVocabulary {
    tokens: HashSet<String>,
}

impl StopVocabulary {
    /// Loads a vocabulary from a file in the given line mode.
    ///
    /// A missing or unreadable file is [`Error::StopList`]; a readable
    /// file yielding no tokens is [`Error::EmptyStopList`]. There is no
    /// silent empty-vocabulary fallback.
    pub fn from_file(path: &Path, mode: LineMode) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::StopList {
            path: path.to_path_buf(),
            source,
        })?;
        let vocabulary =
            Self::from_reader(BufReader::new(file), mode).map_err(|source| match source {
                Error::StopList { source, .. } => Error::StopList {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;
        if vocabulary.is_empty() {
            return Err(Error::EmptyStopList {
                path: path.to_path_buf(),
            });
        }
        Ok(vocabulary)
    }

    /// Loads a vocabulary from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, mode: LineMode) -> Result<Self> {
        let mut tokens = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(|source| Error::StopList {
                path: "<reader>".into(),
                source,
            })?;
            let parsed = parse_line(&line);
            if parsed.is_empty() {
                continue;
            }
            if mode == LineMode::LastLine {
                tokens.clear();
            }
            tokens.extend(parsed);
        }
        Ok(Self { tokens })
    }

    /// Builds a vocabulary directly from tokens (mainly for tests and
    /// embedded defaults).
    pub fn from_tokens<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: iter
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Case-insensitive membership check.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(&token.to_lowercase())
    }

    /// Number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the vocabulary holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn parse_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Removes stop words from a token sequence and re-joins the rest.
///
/// Matching is case-insensitive; kept tokens come through with their
/// original casing, in order, separated by single spaces. Matched
/// tokens are first replaced by the `"*"` sentinel, then dropped when
/// the output is rebuilt; a residual double space is collapsed to one.
pub fn remove_stop_words<S: AsRef<str>>(tokens: &[S], vocabulary: &StopVocabulary) -> String {
    let marked: Vec<&str> = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            if vocabulary.contains(token) {
                SENTINEL
            } else {
                token
            }
        })
        .collect();

    let joined = marked
        .iter()
        .filter(|token| **token != SENTINEL)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    joined.replace("  ", " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn filters_case_insensitively_preserving_kept_casing() {
        let vocabulary = StopVocabulary::from_tokens(["the"]);
        let out = remove_stop_words(&["The", "quick", "fox"], &vocabulary);
        assert_eq!(out, "quick fox");
    }

    #[test]
    fn keeps_order_of_surviving_tokens() {
        let vocabulary = StopVocabulary::from_tokens(["a", "of"]);
        let out = remove_stop_words(&["Signs", "of", "a", "Response"], &vocabulary);
        assert_eq!(out, "Signs Response");
    }

    #[test]
    fn empty_token_slice_gives_empty_string() {
        let vocabulary = StopVocabulary::from_tokens(["the"]);
        assert_eq!(remove_stop_words::<&str>(&[], &vocabulary), "");
    }

    #[test]
    fn last_line_wins_by_default() {
        let reader = Cursor::new("a,b\nc,d\n");
        let vocabulary = StopVocabulary::from_reader(reader, LineMode::LastLine).unwrap();
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("c"));
        assert!(vocabulary.contains("d"));
        assert!(!vocabulary.contains("a"));
    }

    #[test]
    fn union_mode_accumulates_all_lines() {
        let reader = Cursor::new("a,b\nc,d\n");
        let vocabulary = StopVocabulary::from_reader(reader, LineMode::Union).unwrap();
        assert_eq!(vocabulary.len(), 4);
        assert!(vocabulary.contains("a"));
        assert!(vocabulary.contains("d"));
    }

    #[test]
    fn blank_lines_do_not_reset_last_line_mode() {
        let reader = Cursor::new("a,b\n\n");
        let vocabulary = StopVocabulary::from_reader(reader, LineMode::LastLine).unwrap();
        assert!(vocabulary.contains("a"));
        assert!(vocabulary.contains("b"));
    }

    #[test]
    fn tokens_are_trimmed_and_lowercased() {
        let reader = Cursor::new(" The , AND ,or\n");
        let vocabulary = StopVocabulary::from_reader(reader, LineMode::LastLine).unwrap();
        assert!(vocabulary.contains("the"));
        assert!(vocabulary.contains("The"));
        assert!(vocabulary.contains("and"));
        assert!(vocabulary.contains("or"));
    }

    #[test]
    fn missing_file_is_a_fatal_error() {
        let err =
            StopVocabulary::from_file(Path::new("/no/such/stoplist.txt"), LineMode::LastLine)
                .unwrap_err();
        assert!(matches!(err, Error::StopList { .. }));
    }

    #[test]
    fn file_without_tokens_is_a_fatal_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        let err = StopVocabulary::from_file(file.path(), LineMode::LastLine).unwrap_err();
        assert!(matches!(err, Error::EmptyStopList { .. }));
    }

    #[test]
    fn loads_from_file_on_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "the,and,of").unwrap();
        let vocabulary = StopVocabulary::from_file(file.path(), LineMode::LastLine).unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("of"));
    }
}
