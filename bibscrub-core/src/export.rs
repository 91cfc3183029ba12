//! Tab-separated export of pruned count mappings

use crate::error::Result;
use crate::prune::FeatureKey;
use std::collections::HashMap;
use std::io::Write;

const SEPARATOR: char = '\t';

/// Writes one `key<TAB>count` line per feature.
///
/// Any literal `=` or `,` inside a rendered key becomes a tab before
/// writing, so keys that already carry separator-adjacent characters
/// cannot corrupt the column layout. Lines are sorted by rendered key
/// so output is deterministic across map iteration orders. The writer
/// is flushed before returning.
pub fn write_counts<W: Write>(writer: &mut W, counts: &HashMap<FeatureKey, u32>) -> Result<()> {
    let mut lines: Vec<(String, u32)> = counts
        .iter()
        .map(|(key, count)| (escape_key(&key.to_string()), *count))
        .collect();
    lines.sort();

    for (key, count) in lines {
        writeln!(writer, "{key}{SEPARATOR}{count}")?;
    }
    writer.flush()?;
    Ok(())
}

fn escape_key(key: &str) -> String {
    key.replace(['=', ','], "\t")
}
