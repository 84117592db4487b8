//! Per-dataset atomic label vocabularies
//!
//! Each dataset numbers its atomic symbols differently. A [`LabelVocabulary`]
//! is a cheap, copyable view over one dataset's fixed table; forward and
//! reverse maps are derived from that table on every call, so they can never
//! drift apart.
//!
//! Pass a vocabulary (or a [`Dataset`]) explicitly wherever a lookup happens.
//! [`ActiveDataset`] exists for callers that want one process-wide selection.

mod active;
mod tables;

pub use active::ActiveDataset;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A dataset family with its own symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dataset {
    #[serde(rename = "AIDS")]
    Aids,
    #[serde(rename = "emolecule")]
    Emolecule,
    #[serde(rename = "pubchem")]
    Pubchem,
    #[default]
    #[serde(rename = "default")]
    Default,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [Self::Aids, Self::Emolecule, Self::Pubchem, Self::Default];

    /// Classify a free-text dataset or file name
    ///
    /// Matching is a case-insensitive substring test; unknown names select
    /// the small default table.
    pub fn detect(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("aids") {
            Self::Aids
        } else if name.contains("emolecule") || name.contains("emol") || name.contains("emodulo") {
            Self::Emolecule
        } else if name.contains("pubchem") {
            Self::Pubchem
        } else {
            Self::Default
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Aids => "AIDS",
            Self::Emolecule => "emolecule",
            Self::Pubchem => "pubchem",
            Self::Default => "default",
        }
    }

    /// Atomic symbols; position is the numeric label
    pub fn symbols(self) -> &'static [&'static str] {
        match self {
            Self::Aids => tables::AIDS_SYMBOLS,
            Self::Emolecule => tables::EMOLECULE_SYMBOLS,
            Self::Pubchem => tables::PUBCHEM_SYMBOLS,
            Self::Default => tables::DEFAULT_SYMBOLS,
        }
    }

    /// Original symbol indices, most frequent first
    pub fn frequency_order(self) -> &'static [usize] {
        match self {
            Self::Aids => tables::AIDS_FREQUENCY,
            Self::Emolecule => tables::EMOLECULE_FREQUENCY,
            Self::Pubchem => tables::PUBCHEM_FREQUENCY,
            Self::Default => tables::DEFAULT_FREQUENCY,
        }
    }

    pub fn vocabulary(self) -> LabelVocabulary {
        LabelVocabulary::new(self)
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown database choice: {0:?}")]
pub struct UnknownDatabaseChoice(pub String);

/// The numbered database options offered by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseChoice {
    Aids10k,
    Emolecule,
    Pubchem,
}

impl DatabaseChoice {
    /// Database file handed to the matcher
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Aids10k => "AIDS10K.txt",
            Self::Emolecule => "emodulo.txt",
            Self::Pubchem => "pubchem23238",
        }
    }

    /// File holding the dataset's starter patterns
    pub fn default_pattern_file(self) -> &'static str {
        match self {
            Self::Aids10k => "AIDS_defaultpattern.rtf",
            Self::Emolecule => "emo_defaultpattern.rtf",
            Self::Pubchem => "pubchem_defaultpattern.rtf",
        }
    }

    /// File replacement graphs are drawn from
    pub fn replacement_source(self) -> &'static str {
        match self {
            Self::Aids10k => "AIDS10K.txt",
            Self::Emolecule => "emolecul.rtf",
            Self::Pubchem => "pubchem23238",
        }
    }

    pub fn dataset(self) -> Dataset {
        Dataset::detect(self.file_name())
    }
}

impl FromStr for DatabaseChoice {
    type Err = UnknownDatabaseChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Aids10k),
            "2" => Ok(Self::Emolecule),
            "3" => Ok(Self::Pubchem),
            other => Err(UnknownDatabaseChoice(other.to_string())),
        }
    }
}

/// Symbol/index translation for one dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelVocabulary {
    dataset: Dataset,
}

impl LabelVocabulary {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Vocabulary for a free-text dataset name
    pub fn for_name(name: &str) -> Self {
        Self::new(Dataset::detect(name))
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn symbols(&self) -> &'static [&'static str] {
        self.dataset.symbols()
    }

    pub fn len(&self) -> usize {
        self.symbols().len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols().is_empty()
    }

    /// Numeric label of a symbol (the last position if it repeats)
    pub fn forward(&self, symbol: &str) -> Option<usize> {
        self.symbols().iter().rposition(|s| *s == symbol)
    }

    /// Symbol for a numeric label
    pub fn reverse(&self, index: usize) -> Option<&'static str> {
        self.symbols().get(index).copied()
    }

    /// Symbol → label for the whole table, in table order
    pub fn forward_map(&self) -> IndexMap<&'static str, usize> {
        let mut map = IndexMap::with_capacity(self.len());
        for (index, symbol) in self.symbols().iter().enumerate() {
            map.insert(*symbol, index);
        }
        map
    }

    /// Label → symbol for the whole table
    pub fn reverse_map(&self) -> IndexMap<usize, &'static str> {
        self.symbols().iter().copied().enumerate().collect()
    }

    /// Symbols in frequency order, each with its original label as text
    ///
    /// Ranks pointing past the end of the table are skipped.
    pub fn ordered_by_frequency(&self) -> IndexMap<&'static str, String> {
        let symbols = self.symbols();
        let mut ordered = IndexMap::new();
        for &index in self.dataset.frequency_order() {
            if let Some(symbol) = symbols.get(index) {
                ordered.insert(*symbol, index.to_string());
            }
        }
        ordered
    }

    /// Everything the UI needs to render the label palette
    pub fn snapshot(&self) -> VocabularySnapshot {
        VocabularySnapshot {
            dataset: self.dataset,
            atomic_labels: self.forward_map(),
            reverse_atomic_labels: self.reverse_map(),
            labels: self.symbols().to_vec(),
            ordered_labels: self.ordered_by_frequency(),
        }
    }
}

/// Serializable view of a vocabulary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularySnapshot {
    pub dataset: Dataset,
    pub atomic_labels: IndexMap<&'static str, usize>,
    pub reverse_atomic_labels: IndexMap<usize, &'static str>,
    pub labels: Vec<&'static str>,
    pub ordered_labels: IndexMap<&'static str, String>,
}
