//! Canonical writer for user-drawn query graphs
//!
//! The UI hands over vertices with arbitrary ids. The writer renumbers them
//! by position, sorts edges by `(source, target)` and wraps the result in a
//! `t # 0` / `t # -1` database block, so identical drawings always produce
//! identical matcher input.

use super::{FormatError, FormatResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

/// A vertex as submitted by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryNode {
    pub id: i64,
    pub label: i64,
}

/// An edge as submitted by the UI; a missing type is 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryEdge {
    pub source: i64,
    pub target: i64,
    #[serde(rename = "type", default)]
    pub kind: i64,
}

/// A query graph drawn by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryGraph {
    pub nodes: Vec<QueryNode>,
    #[serde(default)]
    pub edges: Vec<QueryEdge>,
}

impl QueryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, id: i64, label: i64) -> Self {
        self.nodes.push(QueryNode { id, label });
        self
    }

    pub fn with_edge(mut self, source: i64, target: i64, kind: i64) -> Self {
        self.edges.push(QueryEdge {
            source,
            target,
            kind,
        });
        self
    }
}

/// Edge after renumbering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalEdge {
    pub source: usize,
    pub target: usize,
    pub kind: i64,
}

/// A query graph with dense vertex ids and ordered edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalQuery {
    /// Labels indexed by new vertex id
    pub labels: Vec<i64>,
    /// Edges sorted ascending by `(source, target)`, ties in input order
    pub edges: Vec<CanonicalEdge>,
}

impl CanonicalQuery {
    /// Renumber vertices by position and order the edges
    ///
    /// If an id occurs twice in the node list, edges bind to its later
    /// position; both vertices are still written.
    pub fn from_graph(graph: &QueryGraph) -> FormatResult<Self> {
        let remap: HashMap<i64, usize> = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id, index))
            .collect();

        let lookup = |id: i64| {
            remap
                .get(&id)
                .copied()
                .ok_or(FormatError::UnknownEndpoint(id))
        };

        let mut edges = graph
            .edges
            .iter()
            .map(|edge| {
                Ok(CanonicalEdge {
                    source: lookup(edge.source)?,
                    target: lookup(edge.target)?,
                    kind: edge.kind,
                })
            })
            .collect::<FormatResult<Vec<_>>>()?;
        edges.sort_by_key(|e| (e.source, e.target));

        Ok(Self {
            labels: graph.nodes.iter().map(|n| n.label).collect(),
            edges,
        })
    }

    /// Render as a database-variant block
    pub fn render(&self) -> String {
        let mut out = String::from("t # 0\n");
        for (id, label) in self.labels.iter().enumerate() {
            let _ = writeln!(out, "v {} {}", id, label);
        }
        for edge in &self.edges {
            let _ = writeln!(out, "e {} {} {}", edge.source, edge.target, edge.kind);
        }
        out.push_str("t # -1\n");
        out
    }
}

/// Canonical exchange text for a query graph
pub fn write_query(graph: &QueryGraph) -> FormatResult<String> {
    Ok(CanonicalQuery::from_graph(graph)?.render())
}

/// Write the canonical query text to `path`, replacing any previous query
pub fn save_query(graph: &QueryGraph, path: impl AsRef<Path>) -> FormatResult<()> {
    let path = path.as_ref();
    let text = write_query(graph)?;
    debug!(path = %path.display(), bytes = text.len(), "writing query graph");
    std::fs::write(path, text)?;
    Ok(())
}
