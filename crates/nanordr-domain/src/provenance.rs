//! Provenance trail
//!
//! Ordered, de-duplicated record of how the facts a rule consumed were derived.

use serde::{Deserialize, Serialize};

/// De-duplicated provenance entries in first-seen order
///
/// Entries have the form `"{section}.{field}:{value}"`, e.g.
/// `"nanoparticle.type_provenance:keywords"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvenanceTrail {
    entries: Vec<String>,
}

impl ProvenanceTrail {
    /// Create an empty trail
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless it was already recorded
    ///
    /// Returns `true` when the entry was new.
    pub fn record(&mut self, entry: impl Into<String>) -> bool {
        let entry = entry.into();
        if self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the trail into its entries
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

impl FromIterator<String> for ProvenanceTrail {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut trail = Self::new();
        for entry in iter {
            trail.record(entry);
        }
        trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates_preserving_first_seen_order() {
        let mut trail = ProvenanceTrail::new();
        assert!(trail.record("ligand.type_provenance:keywords"));
        assert!(trail.record("nanoparticle.type_provenance:inferred"));
        assert!(!trail.record("ligand.type_provenance:keywords"));

        assert_eq!(
            trail.entries(),
            ["ligand.type_provenance:keywords", "nanoparticle.type_provenance:inferred"]
        );
    }

    #[test]
    fn test_collect() {
        let trail: ProvenanceTrail = ["a", "b", "a", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.into_vec(), ["a", "b", "c"]);
    }
}
