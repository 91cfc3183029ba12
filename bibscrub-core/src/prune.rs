//! Frequency-based feature pruning
//!
//! After a corpus pass has aggregated feature occurrence counts, every
//! feature seen fewer times than the configured minimum is dropped as
//! statistically insignificant before vector building.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

/// Identity of one countable feature.
///
/// Either a plain n-gram or a structured annotation (named attributes
/// to values, e.g. type and value). Equality is exact; no normalization
/// happens at this layer. Attributes live in a `BTreeMap` so equal
/// attribute sets hash and compare equal regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKey {
    /// A plain n-gram feature
    Ngram(String),
    /// A structured annotation feature
    Annotation(BTreeMap<String, String>),
}

impl FeatureKey {
    /// Builds an annotation key from attribute pairs.
    pub fn annotation<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        FeatureKey::Annotation(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKey::Ngram(text) => write!(f, "{text}"),
            FeatureKey::Annotation(attrs) => {
                let rendered: Vec<String> =
                    attrs.iter().map(|(k, v)| format!("{k}={v}")).collect();
                write!(f, "{}", rendered.join(","))
            }
        }
    }
}

impl From<&str> for FeatureKey {
    fn from(value: &str) -> Self {
        FeatureKey::Ngram(value.to_string())
    }
}

impl From<String> for FeatureKey {
    fn from(value: String) -> Self {
        FeatureKey::Ngram(value)
    }
}

/// Removes every entry whose count is strictly below `minimum`.
///
/// Generic over the key shape, so annotation maps and plain n-gram
/// maps go through the same threshold rule and necessarily agree on
/// equal counts. Entries equal to the threshold are retained. The
/// mapping is mutated in place; no keys are added and no counts
/// change.
pub fn prune_by_min_frequency<K>(counts: &mut HashMap<K, u32>, minimum: u32)
where
    K: Eq + Hash,
{
    counts.retain(|_, count| *count >= minimum);
}
