//! Replacement candidates for a query that failed verification

use crate::format::{fallback_replacements, parse_file, GraphRecord};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{debug, warn};

/// Which database graphs qualify and how many to offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPolicy {
    pub node_range: RangeInclusive<usize>,
    pub count: usize,
}

impl Default for ReplacementPolicy {
    fn default() -> Self {
        Self {
            node_range: 3..=8,
            count: 3,
        }
    }
}

impl ReplacementPolicy {
    /// Random sample of qualifying records, at most `count` of them
    pub fn select<R: Rng + ?Sized>(&self, records: &[GraphRecord], rng: &mut R) -> Vec<GraphRecord> {
        let eligible: Vec<&GraphRecord> = records
            .iter()
            .filter(|r| self.node_range.contains(&r.node_count()))
            .collect();
        eligible
            .choose_multiple(rng, self.count)
            .map(|r| (*r).clone())
            .collect()
    }

    /// Sample from a database file, falling back to the built-in graphs
    pub fn select_from_file<R: Rng + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        rng: &mut R,
    ) -> Vec<GraphRecord> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "database file not found, using fallback replacements");
            return fallback_replacements();
        }

        let selected = self.select(&parse_file(path), rng);
        if selected.is_empty() {
            debug!(path = %path.display(), "no graph in size range, using fallback replacements");
            return fallback_replacements();
        }
        debug!(count = selected.len(), "selected replacement graphs");
        selected
    }
}
