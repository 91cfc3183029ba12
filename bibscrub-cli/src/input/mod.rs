//! Input file handling: pattern resolution and record reading

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Expands glob patterns into the sorted, deduplicated set of record
/// files they match.
///
/// Matching nothing at all is [`CliError::NoInput`]: a corpus pass over
/// zero records is a misconfiguration, not an empty result.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    for pattern in patterns {
        let matches = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        for entry in matches {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.insert(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInput(patterns.join(", ")).into());
    }

    Ok(files.into_iter().collect())
}

/// Read one record file to a string
pub fn read_record(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read record: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_and_sorts_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "two").unwrap();
        fs::write(dir.path().join("a.txt"), "one").unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn no_matches_is_a_no_input_error() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.xml", dir.path().display());
        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err
            .downcast_ref::<CliError>()
            .is_some_and(|e| matches!(e, CliError::NoInput(_))));
        assert!(err.to_string().contains("No input files matched"));
    }

    #[test]
    fn duplicate_matches_are_deduplicated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "one").unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn reads_record_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rec.txt");
        fs::write(&path, "abstract body").unwrap();
        assert_eq!(read_record(&path).unwrap(), "abstract body");
    }
}
