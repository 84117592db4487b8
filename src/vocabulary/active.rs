//! Opt-in shared dataset selection

use super::{DatabaseChoice, Dataset, LabelVocabulary};
use std::sync::RwLock;
use tracing::info;

/// A dataset selection shared by everyone holding the same instance
///
/// `select` is one transition seen by every later lookup through this
/// holder. Requests that must not observe each other's selection should
/// carry their own [`LabelVocabulary`] instead.
#[derive(Debug, Default)]
pub struct ActiveDataset {
    current: RwLock<Dataset>,
}

impl ActiveDataset {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: RwLock::new(dataset),
        }
    }

    /// Switch to the dataset matching `name`; returns the detected dataset
    pub fn select(&self, name: &str) -> Dataset {
        self.set(Dataset::detect(name))
    }

    /// Switch to the dataset behind a numbered UI choice
    pub fn select_choice(&self, choice: DatabaseChoice) -> Dataset {
        self.set(choice.dataset())
    }

    pub fn current(&self) -> Dataset {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn vocabulary(&self) -> LabelVocabulary {
        LabelVocabulary::new(self.current())
    }

    fn set(&self, dataset: Dataset) -> Dataset {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        let previous = *current;
        if previous != dataset {
            info!(from = %previous, to = %dataset, "switching active dataset");
        }
        *current = dataset;
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_on_default() {
        assert_eq!(ActiveDataset::default().current(), Dataset::Default);
    }

    #[test]
    fn test_selection_is_shared() {
        let active = Arc::new(ActiveDataset::default());
        let other = Arc::clone(&active);

        assert_eq!(active.select("AIDS10K.txt"), Dataset::Aids);
        assert_eq!(other.vocabulary().forward("O"), Some(1));

        other.select_choice(DatabaseChoice::Pubchem);
        assert_eq!(active.current(), Dataset::Pubchem);
    }

    #[test]
    fn test_explicit_vocabulary_is_unaffected() {
        let active = ActiveDataset::new(Dataset::Aids);
        let pinned = active.vocabulary();
        active.select("pubchem");
        assert_eq!(pinned.dataset(), Dataset::Aids);
        assert_eq!(pinned.reverse(0), Some("C"));
    }
}
