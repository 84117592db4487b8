//! Built-in graphs offered when no dataset file supplies them

use super::parser::parse_str;
use super::record::{GraphRecord, RecordId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// An entry of the starter-pattern palette
///
/// Concrete graphs serialize with `"type": "default"`; hub and ring entries
/// are parametric templates the user sizes before drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StarterPattern {
    #[serde(rename = "default")]
    Graph(GraphRecord),
    Hub { title: String, degree: usize },
    Ring { title: String, length: usize },
}

impl StarterPattern {
    pub fn title(&self) -> &str {
        match self {
            Self::Graph(record) => record.title.as_deref().unwrap_or_default(),
            Self::Hub { title, .. } | Self::Ring { title, .. } => title,
        }
    }

    /// Expand into a concrete graph, every vertex carrying `label`
    ///
    /// A hub is vertex 0 joined to `degree` spokes; a ring is a cycle of
    /// `length` vertices. Concrete graphs are returned unchanged.
    pub fn to_record(&self, label: i64) -> GraphRecord {
        match self {
            Self::Graph(record) => record.clone(),
            Self::Hub { title, degree } => {
                let mut record = GraphRecord::new(RecordId::Text("hub".into()))
                    .with_title(title.clone())
                    .with_node(0, label);
                for spoke in 1..=*degree as i64 {
                    record = record.with_node(spoke, label).with_edge(0, spoke, 0);
                }
                record
            }
            Self::Ring { title, length } => {
                let n = *length as i64;
                let mut record =
                    GraphRecord::new(RecordId::Text("ring".into())).with_title(title.clone());
                for v in 0..n {
                    record = record.with_node(v, label);
                }
                if n > 1 {
                    for v in 0..n {
                        record = record.with_edge(v, (v + 1) % n, 0);
                    }
                }
                record
            }
        }
    }
}

/// The fixed starter palette
pub fn default_patterns() -> Vec<StarterPattern> {
    vec![
        StarterPattern::Graph(
            GraphRecord::new(0)
                .with_title("Single node")
                .with_node(0, 1),
        ),
        StarterPattern::Graph(
            GraphRecord::new(1)
                .with_title("Edge")
                .with_node(0, 1)
                .with_node(1, 1)
                .with_edge(0, 1, 0),
        ),
        StarterPattern::Graph(
            GraphRecord::new(2)
                .with_title("Triangle")
                .with_node(0, 1)
                .with_node(1, 1)
                .with_node(2, 1)
                .with_edge(0, 1, 0)
                .with_edge(1, 2, 0)
                .with_edge(2, 0, 0),
        ),
        StarterPattern::Hub {
            title: "Customized ego".into(),
            degree: 4,
        },
        StarterPattern::Ring {
            title: "Customized ring".into(),
            length: 6,
        },
    ]
}

/// Starter patterns from a dataset's pattern file, titled `Pattern <k>`
///
/// Pattern files are usually saved as RTF; the markup is stripped with
/// [`strip_rtf`] before parsing. Records without vertices are dropped, and
/// [`default_patterns`] is returned when the file is missing or nothing is
/// left.
pub fn load_default_patterns(path: impl AsRef<Path>) -> Vec<StarterPattern> {
    let path = path.as_ref();
    let records: Vec<GraphRecord> = match std::fs::read(path) {
        Ok(bytes) => parse_str(&strip_rtf(&String::from_utf8_lossy(&bytes)))
            .into_iter()
            .filter(|record| !record.nodes.is_empty())
            .collect(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot read pattern file");
            Vec::new()
        }
    };
    if records.is_empty() {
        debug!(path = %path.display(), "no dataset patterns, using built-in palette");
        return default_patterns();
    }
    records
        .into_iter()
        .enumerate()
        .map(|(k, record)| StarterPattern::Graph(record.with_title(format!("Pattern {}", k + 1))))
        .collect()
}

/// Plain exchange text from RTF-wrapped content
///
/// Leading control words and braces are removed from every line, as are
/// trailing `\` line breaks and closing braces. Lines that were pure markup
/// come out blank. Plain text passes through unchanged.
pub fn strip_rtf(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for raw in text.lines() {
        out.push_str(rtf_line_content(raw));
        out.push('\n');
    }
    out
}

fn rtf_line_content(raw: &str) -> &str {
    let mut rest = raw.trim();
    loop {
        rest = rest.trim_start_matches(|c: char| c == '{' || c == '}').trim_start();
        match rest.strip_prefix('\\') {
            Some(word) if word.starts_with(|c: char| c.is_ascii_alphabetic() || c == '*') => {
                let end = word
                    .find(|c: char| c.is_whitespace() || matches!(c, '\\' | '{' | '}'))
                    .unwrap_or(word.len());
                rest = &word[end..];
            }
            _ => break,
        }
    }
    rest.trim_end_matches(|c: char| c == '\\' || c == '}' || c.is_whitespace())
}

/// Replacement graphs used when a database cannot supply any
pub fn fallback_replacements() -> Vec<GraphRecord> {
    vec![
        GraphRecord::new("default1")
            .with_node(0, 1)
            .with_node(1, 1)
            .with_node(2, 2)
            .with_edge(0, 1, 0)
            .with_edge(1, 2, 0),
        GraphRecord::new("default2")
            .with_node(0, 1)
            .with_node(1, 1)
            .with_node(2, 1)
            .with_node(3, 2)
            .with_edge(0, 1, 0)
            .with_edge(1, 2, 0)
            .with_edge(2, 3, 0)
            .with_edge(3, 0, 0),
    ]
}
