//! Special-character cleanup
//!
//! A fixed, ordered table of literal substitutions applied to text
//! before tokenization. The ordering is load-bearing: later rules can
//! act on patterns earlier rules expose (hyphen replacement runs after
//! the entity removals, the final double-space collapse runs last).

/// The default substitution table, in application order.
///
/// Commas and periods are deliberately kept: downstream tokenization
/// relies on them.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("}", ""),
    ("{", ""),
    ("]", ""),
    ("[", ""),
    ("\"", ""),
    ("<", ""),
    (">", ""),
    ("/", " "),
    ("\\", " "),
    ("#", ""),
    ("*", ""),
    ("&gt", ""),
    ("&apos", ""),
    ("%", ""),
    ("&quot", ""),
    ("&", ""),
    ("=", ""),
    ("?", ""),
    ("!", ""),
    (";", ""),
    (":", ""),
    (")", ""),
    ("(", ""),
    ("\t\t", "\t"),
    // Hyphenated names would otherwise split an n-gram in two.
    ("-", " "),
    ("  ", ""),
];

/// Applies the fixed literal-substitution sequence to text.
///
/// Not idempotent in general: the final rule collapses a double space
/// to nothing, so runs of three or more spaces give different results
/// on repeated application. Callers apply it exactly once.
#[derive(Debug, Clone)]
pub struct SpecialCharCleaner {
    rules: Vec<(String, String)>,
}

impl Default for SpecialCharCleaner {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES
                .iter()
                .map(|(p, r)| (p.to_string(), r.to_string()))
                .collect(),
        }
    }
}

impl SpecialCharCleaner {
    /// Runs every rule over the text, in table order.
    pub fn clean(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (pattern, replacement)| {
                acc.replace(pattern.as_str(), replacement)
            })
    }

    /// The substitution rules, in application order.
    pub fn rules(&self) -> &[(String, String)] {
        &self.rules
    }
}
