//! One-line pattern lists
//!
//! Some pattern miners print each pattern on a single line:
//!
//! ```text
//! <id> <type> <n> <m> s1 t1 s2 t2 ...
//! ```
//!
//! Vertices are implicit (`0..n`) and carry no labels. Blank lines and lines
//! with fewer than two fields are skipped.

use super::record::{GraphRecord, RecordId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;
use tracing::warn;

/// An unlabeled pattern from a one-line listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactPattern {
    pub id: String,
    /// Miner-specific pattern type; `None` when the field is not an integer
    #[serde(rename = "type")]
    pub kind: Option<i64>,
    pub node_count: usize,
    pub edges: Vec<(i64, i64)>,
}

impl CompactPattern {
    /// Decode one line. `None` for blank or short lines.
    ///
    /// A non-integer vertex or edge count reads as zero. Edges whose
    /// endpoints are missing or not integers are skipped.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            return None;
        }

        let count = |i: usize| {
            fields
                .get(i)
                .and_then(|f| f.parse::<usize>().ok())
                .unwrap_or(0)
        };
        let node_count = count(2);
        let edge_count = count(3);

        let mut edges = Vec::with_capacity(edge_count);
        for k in 0..edge_count {
            let endpoint = |i: usize| fields.get(i).and_then(|f| f.parse::<i64>().ok());
            match (endpoint(4 + 2 * k), endpoint(5 + 2 * k)) {
                (Some(s), Some(t)) => edges.push((s, t)),
                _ => warn!(id = fields[0], edge = k, "skipping incomplete edge"),
            }
        }

        Some(Self {
            id: fields[0].to_string(),
            kind: fields[1].parse().ok(),
            node_count,
            edges,
        })
    }

    /// Expand into a record whose vertices all carry `label`
    ///
    /// Edges naming a vertex outside `0..node_count` are dropped.
    pub fn to_record(&self, label: i64) -> GraphRecord {
        let mut record = GraphRecord::new(RecordId::parse(&self.id));
        for v in 0..self.node_count as i64 {
            record = record.with_node(v, label);
        }
        for &(s, t) in &self.edges {
            record = record.with_edge(s, t, 0);
        }
        record.retain_connected_edges();
        record
    }
}

/// Decode every pattern line of `text`
pub fn parse_compact_str(text: &str) -> Vec<CompactPattern> {
    CompactPatterns::new(text.as_bytes()).collect()
}

/// Lazy reader over a one-line pattern listing
///
/// Undecodable bytes are replaced, so a garbled line is skipped or read
/// partially rather than ending the listing.
pub struct CompactPatterns<R> {
    reader: Option<R>,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> CompactPatterns<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            buf: Vec::new(),
            line_no: 0,
        }
    }
}

impl CompactPatterns<BufReader<File>> {
    /// Read patterns from a file; an unopenable file yields nothing
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => Self::new(BufReader::new(file)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open pattern list");
                Self {
                    reader: None,
                    buf: Vec::new(),
                    line_no: 0,
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for CompactPatterns<R> {
    type Item = CompactPattern;

    fn next(&mut self) -> Option<CompactPattern> {
        loop {
            let reader = self.reader.as_mut()?;
            self.buf.clear();
            match reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.reader = None;
                    return None;
                }
                Ok(_) => {
                    self.line_no += 1;
                    let line = String::from_utf8_lossy(&self.buf);
                    if line.trim().is_empty() {
                        continue;
                    }
                    match CompactPattern::parse_line(&line) {
                        Some(pattern) => return Some(pattern),
                        None => warn!(line = self.line_no, "skipping short pattern line"),
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    warn!(error = %e, "read error, ending pattern list");
                    self.reader = None;
                    return None;
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for CompactPatterns<R> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let pattern = CompactPattern::parse_line("p7 2 3 2 0 1 1 2").unwrap();
        assert_eq!(pattern.id, "p7");
        assert_eq!(pattern.kind, Some(2));
        assert_eq!(pattern.node_count, 3);
        assert_eq!(pattern.edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_short_and_blank_lines() {
        assert!(CompactPattern::parse_line("").is_none());
        assert!(CompactPattern::parse_line("   ").is_none());
        assert!(CompactPattern::parse_line("42").is_none());

        let bare = CompactPattern::parse_line("42 x").unwrap();
        assert_eq!(bare.kind, None);
        assert_eq!(bare.node_count, 0);
        assert!(bare.edges.is_empty());
    }

    #[test]
    fn test_truncated_edge_list() {
        let pattern = CompactPattern::parse_line("1 0 3 3 0 1 1 2 2").unwrap();
        assert_eq!(pattern.edges, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_listing_skips_blank_and_short_lines() {
        let text = "0 1 2 1 0 1\n\nbad\n1 1 3 3 0 1 1 2 2 0\n";
        let patterns = parse_compact_str(text);
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[1].id, "1");
        assert_eq!(patterns[1].edges.len(), 3);
    }

    #[test]
    fn test_to_record() {
        let pattern = CompactPattern::parse_line("5 0 3 3 0 1 1 2 2 9").unwrap();
        let record = pattern.to_record(1);
        assert_eq!(record.id, RecordId::Int(5));
        assert_eq!(record.labels(), vec![1, 1, 1]);
        assert_eq!(record.edge_count(), 2);
    }

    #[test]
    fn test_garbled_line_keeps_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.txt");
        let mut bytes = b"0 1 2 1 0 1\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"1 1 2 1 1 0\n");
        std::fs::write(&path, bytes).unwrap();

        let ids: Vec<_> = CompactPatterns::open(&path).map(|p| p.id).collect();
        assert_eq!(ids, vec!["0", "1"]);
        assert_eq!(CompactPatterns::open(dir.path().join("absent")).count(), 0);
    }
}
