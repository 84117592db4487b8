//! The line-oriented graph exchange format
//!
//! Dataset uploads, mined pattern sets, matcher results and user queries all
//! travel in one whitespace-tokenized grammar (see [`line`]). Three dialects
//! of it exist; [`Variant`] captures how each one is decoded. Mined patterns
//! can also arrive as one-line listings, read by [`CompactPatterns`].

mod compact;
mod defaults;
mod line;
mod parser;
mod record;
mod variant;
mod writer;


use thiserror::Error;

pub use compact::{parse_compact_str, CompactPattern, CompactPatterns};
pub use defaults::{
    default_patterns, fallback_replacements, load_default_patterns, strip_rtf, StarterPattern,
};
pub use line::{classify, Header, LineClass};
pub use parser::{detect_variant, parse_file, parse_str, RecordAssembler, RecordStream};
pub use record::{GraphRecord, RecordEdge, RecordId, RecordNode};
pub use variant::Variant;
pub use writer::{save_query, write_query, CanonicalEdge, CanonicalQuery, QueryEdge, QueryGraph, QueryNode};

/// Errors raised while producing exchange text
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Edge references vertex {0}, which is not in the node list")]
    UnknownEndpoint(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for format operations
pub type FormatResult<T> = Result<T, FormatError>;
