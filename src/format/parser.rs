//! Record assembly for all three exchange variants
//!
//! One state machine ([`RecordAssembler`]) consumes classified lines and emits
//! records as terminators are seen. [`parse_str`], [`parse_file`] and
//! [`RecordStream`] are thin drivers around it.
//!
//! The parser never fails: malformed lines are skipped with a warning and an
//! unreadable source yields no records.

use super::line::{classify, Header, LineClass};
use super::record::{GraphRecord, RecordEdge, RecordNode};
use super::variant::Variant;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;
use tracing::{debug, warn};

/// A record being filled, plus the vertex remap for pattern-set input
#[derive(Debug)]
struct OpenRecord {
    record: GraphRecord,
    remap: HashMap<i64, i64>,
}

/// Line-at-a-time record builder
///
/// The variant is fixed by the first header line and applies to the rest of
/// the input.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    variant: Option<Variant>,
    current: Option<OpenRecord>,
    line_no: usize,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variant detected so far, if a header has been seen
    pub fn variant(&self) -> Option<Variant> {
        self.variant
    }

    /// Feed one line. Returns a record when this line closed one.
    pub fn push_line(&mut self, raw: &str) -> Option<GraphRecord> {
        self.line_no += 1;
        match classify(raw) {
            LineClass::Blank => {
                let has_nodes = self
                    .current
                    .as_ref()
                    .is_some_and(|open| !open.record.nodes.is_empty());
                if has_nodes {
                    self.close()
                } else {
                    None
                }
            }
            LineClass::Header(header) => self.start(&header),
            LineClass::Node { id, label } => {
                self.push_node(id, label);
                None
            }
            LineClass::Edge {
                source,
                target,
                kind,
            } => {
                self.push_edge(source, target, kind);
                None
            }
            LineClass::Unrecognized => {
                warn!(line = self.line_no, text = raw.trim(), "skipping unrecognized line");
                None
            }
        }
    }

    /// Flush the record still open at end of input
    pub fn finish(&mut self) -> Option<GraphRecord> {
        self.close()
    }

    fn start(&mut self, header: &Header<'_>) -> Option<GraphRecord> {
        let line_no = self.line_no;
        let variant = *self.variant.get_or_insert_with(|| {
            let detected = Variant::detect(header);
            debug!(line = line_no, variant = %detected, "detected exchange variant");
            detected
        });

        let closed = self.close();
        if !header.is_terminator() {
            self.current = Some(OpenRecord {
                record: variant.open(header),
                remap: HashMap::new(),
            });
        }
        closed
    }

    fn push_node(&mut self, id: &str, label: &str) {
        let line_no = self.line_no;
        let Some(open) = self.current.as_mut() else {
            warn!(line = line_no, "skipping vertex outside of a record");
            return;
        };
        let (Ok(orig), Ok(label)) = (id.parse::<i64>(), label.parse::<i64>()) else {
            warn!(line = line_no, id, label, "skipping vertex with non-integer fields");
            return;
        };

        let variant = self.variant.unwrap_or(Variant::Database);
        let id = if variant.remaps_ids() {
            let dense = open.record.nodes.len() as i64;
            open.remap.insert(orig, dense);
            dense
        } else {
            orig
        };
        open.record.nodes.push(RecordNode { id, label });
    }

    fn push_edge(&mut self, source: &str, target: &str, kind: Option<&str>) {
        let line_no = self.line_no;
        let Some(open) = self.current.as_mut() else {
            warn!(line = line_no, "skipping edge outside of a record");
            return;
        };
        let (Ok(s), Ok(t)) = (source.parse::<i64>(), target.parse::<i64>()) else {
            warn!(line = line_no, source, target, "skipping edge with non-integer endpoints");
            return;
        };

        let variant = self.variant.unwrap_or(Variant::Database);
        let (s, t) = if variant.remaps_ids() {
            match (open.remap.get(&s), open.remap.get(&t)) {
                (Some(&s), Some(&t)) => (s, t),
                _ => {
                    warn!(line = line_no, source, target, "skipping edge to undeclared vertex");
                    return;
                }
            }
        } else {
            (s, t)
        };
        open.record
            .edges
            .push(RecordEdge::new(s, t, variant.edge_type(kind)));
    }

    fn close(&mut self) -> Option<GraphRecord> {
        let open = self.current.take()?;
        let variant = self.variant?;
        let mut record = open.record;

        if record.nodes.is_empty() && !variant.emits_empty_records() {
            return None;
        }

        let dropped = record.retain_connected_edges();
        if dropped > 0 {
            warn!(id = %record.id, dropped, "dropped edges with endpoints outside the record");
        }
        debug!(
            id = %record.id,
            nodes = record.node_count(),
            edges = record.edge_count(),
            "closed record"
        );
        Some(record)
    }
}

/// Parse exchange text of any variant
pub fn parse_str(text: &str) -> Vec<GraphRecord> {
    let mut assembler = RecordAssembler::new();
    let mut records: Vec<GraphRecord> = text
        .lines()
        .filter_map(|line| assembler.push_line(line))
        .collect();
    records.extend(assembler.finish());
    records
}

/// Parse an exchange file; an unreadable file yields no records
pub fn parse_file(path: impl AsRef<Path>) -> Vec<GraphRecord> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => parse_str(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read graph file");
            Vec::new()
        }
    }
}

/// Variant of the first header in `text`, if any
pub fn detect_variant(text: &str) -> Option<Variant> {
    text.lines().find_map(|line| match classify(line) {
        LineClass::Header(header) => Some(Variant::detect(&header)),
        _ => None,
    })
}

/// Single-pass record iterator over a line source
///
/// Lines are pulled on demand; the source is consumed once and the stream
/// cannot be restarted. A trailing record without a closing blank line is
/// still yielded. Bytes that are not UTF-8 are decoded lossily, so a garbled
/// line is skipped like any other malformed line. A read error ends the
/// stream after flushing the open record.
pub struct RecordStream<R> {
    reader: Option<R>,
    buf: Vec<u8>,
    assembler: RecordAssembler,
}

impl<R: BufRead> RecordStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            buf: Vec::new(),
            assembler: RecordAssembler::new(),
        }
    }

    /// Variant detected so far
    pub fn variant(&self) -> Option<Variant> {
        self.assembler.variant()
    }

    fn end(&mut self) -> Option<GraphRecord> {
        self.reader = None;
        self.assembler.finish()
    }
}

impl RecordStream<BufReader<File>> {
    /// Stream records from a file; an unopenable file yields an empty stream
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => Self::new(BufReader::new(file)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open graph file");
                Self {
                    reader: None,
                    buf: Vec::new(),
                    assembler: RecordAssembler::new(),
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for RecordStream<R> {
    type Item = GraphRecord;

    fn next(&mut self) -> Option<GraphRecord> {
        loop {
            let reader = self.reader.as_mut()?;
            self.buf.clear();
            match reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return self.end(),
                Ok(_) => {
                    let line = String::from_utf8_lossy(&self.buf);
                    if let Some(record) = self.assembler.push_line(&line) {
                        return Some(record);
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    warn!(error = %e, "read error, ending record stream");
                    return self.end();
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for RecordStream<R> {}
