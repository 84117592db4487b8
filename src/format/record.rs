//! Graph records decoded from the exchange grammar

use serde::{Deserialize, Serialize};

/// Identifier of a graph record
///
/// Pattern-set and database headers carry numeric ids; result headers carry
/// the raw text between `#` and `*`. Serializes as a bare number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Parse a header token as an integer id, falling back to text
    pub fn parse(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Text(token.to_string()),
        }
    }

    /// True for the `t # -1` end marker
    pub fn is_terminator(&self) -> bool {
        matches!(self, Self::Int(-1))
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A labelled vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordNode {
    pub id: i64,
    pub label: i64,
}

/// A typed edge between two vertex ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordEdge {
    pub source: i64,
    pub target: i64,
    #[serde(rename = "type")]
    pub kind: i64,
}

impl RecordEdge {
    pub fn new(source: i64, target: i64, kind: i64) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }

    /// Endpoint pair, as the UI draws pattern-set edges
    pub fn endpoints(&self) -> (i64, i64) {
        (self.source, self.target)
    }
}

/// One graph or pattern in the exchange format
///
/// Node order is encounter order and is meaningful. Duplicate edges are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub id: RecordId,
    /// Vertex count announced by a pattern-set header (`t # <id> <n>`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_nodes: Option<usize>,
    /// Support figure following `*` in a result header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<i64>,
    /// Display title, set for starter patterns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub nodes: Vec<RecordNode>,
    pub edges: Vec<RecordEdge>,
}

impl GraphRecord {
    /// Create an empty record
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            declared_nodes: None,
            support: None,
            title: None,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_node(mut self, id: i64, label: i64) -> Self {
        self.nodes.push(RecordNode { id, label });
        self
    }

    pub fn with_edge(mut self, source: i64, target: i64, kind: i64) -> Self {
        self.edges.push(RecordEdge::new(source, target, kind));
        self
    }

    /// Node labels in encounter order
    pub fn labels(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.label).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_node(&self, id: i64) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Drop edges whose endpoints are not vertices of this record.
    /// Returns how many were removed.
    pub(crate) fn retain_connected_edges(&mut self) -> usize {
        let before = self.edges.len();
        let ids: std::collections::HashSet<i64> = self.nodes.iter().map(|n| n.id).collect();
        self.edges
            .retain(|e| ids.contains(&e.source) && ids.contains(&e.target));
        before - self.edges.len()
    }
}
