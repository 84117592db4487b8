//! Per-variant decode rules
//!
//! The three grammars share a tokenizer but differ in how ids, edge types and
//! empty records are treated. Each difference is a method on [`Variant`] so
//! the assembler in `parser` never branches on ad-hoc flags.

use super::line::Header;
use super::record::{GraphRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Grammar variant of an exchange file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Mined pattern files: `t # <id> <n>`, sparse vertex ids, untyped edges
    PatternSet,
    /// Matcher output: `Final t # <id> * <sup>`, verbatim ids, typed edges
    Result,
    /// Dataset files and written queries: `t # <id>`, closed by `t # -1`
    Database,
}

impl Variant {
    /// Pick the variant from the first header of a file
    pub fn detect(header: &Header<'_>) -> Self {
        if header.prefixed {
            Self::Result
        } else if header
            .count_token()
            .is_some_and(|n| n.parse::<i64>().is_ok())
        {
            Self::PatternSet
        } else {
            Self::Database
        }
    }

    /// Vertex ids are rewritten to `0..n-1` in first-seen order
    pub fn remaps_ids(self) -> bool {
        matches!(self, Self::PatternSet)
    }

    /// The optional fourth edge field is read as the edge type
    pub fn reads_edge_type(self) -> bool {
        !matches!(self, Self::PatternSet)
    }

    /// Headers followed by no vertices still produce a record
    pub fn emits_empty_records(self) -> bool {
        !matches!(self, Self::PatternSet)
    }

    /// Identifier carried by a header under this variant
    pub fn record_id(self, header: &Header<'_>) -> RecordId {
        match self {
            Self::Result => RecordId::Text(header.id_text().to_string()),
            Self::PatternSet | Self::Database => {
                RecordId::parse(header.id_token().unwrap_or_default())
            }
        }
    }

    /// Start a new record for a header line
    pub fn open(self, header: &Header<'_>) -> GraphRecord {
        let mut record = GraphRecord::new(self.record_id(header));
        match self {
            Self::PatternSet => {
                record.declared_nodes = header.count_token().and_then(|n| n.parse().ok());
            }
            Self::Result => {
                record.support = header.support_token().and_then(|s| s.parse().ok());
            }
            Self::Database => {}
        }
        record
    }

    /// Decode an edge type field; missing or unparseable types are 0
    pub fn edge_type(self, field: Option<&str>) -> i64 {
        if !self.reads_edge_type() {
            return 0;
        }
        field.and_then(|t| t.parse().ok()).unwrap_or(0)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::PatternSet => "pattern-set",
            Self::Result => "result",
            Self::Database => "database",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::line::{classify, LineClass};

    fn header(line: &str) -> Header<'_> {
        match classify(line) {
            LineClass::Header(h) => h,
            other => panic!("not a header: {:?}", other),
        }
    }

    #[test]
    fn test_detect_variants() {
        assert_eq!(Variant::detect(&header("t # 5 3")), Variant::PatternSet);
        assert_eq!(Variant::detect(&header("Final t # 2 * 0")), Variant::Result);
        assert_eq!(Variant::detect(&header("t # 0")), Variant::Database);
        assert_eq!(Variant::detect(&header("t # 0 * 4")), Variant::Database);
    }

    #[test]
    fn test_record_ids() {
        assert_eq!(
            Variant::Result.record_id(&header("Final t # 7 * 1")),
            RecordId::Text("7".into())
        );
        assert_eq!(
            Variant::Database.record_id(&header("t # 42")),
            RecordId::Int(42)
        );
        assert_eq!(
            Variant::PatternSet.record_id(&header("t # 3 4")),
            RecordId::Int(3)
        );
    }

    #[test]
    fn test_open_records_header_extras() {
        let r = Variant::PatternSet.open(&header("t # 3 4"));
        assert_eq!(r.declared_nodes, Some(4));
        let r = Variant::Result.open(&header("Final t # 3 * 9"));
        assert_eq!(r.support, Some(9));
        assert_eq!(r.declared_nodes, None);
    }

    #[test]
    fn test_edge_type_defaults() {
        assert_eq!(Variant::Result.edge_type(None), 0);
        assert_eq!(Variant::Result.edge_type(Some("x")), 0);
        assert_eq!(Variant::Database.edge_type(Some("2")), 2);
        assert_eq!(Variant::PatternSet.edge_type(Some("2")), 0);
    }
}
