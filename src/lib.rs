//! Graphex: Graph Exchange Format Engine
//!
//! The data layer between a graph-query front end and the external engines
//! it drives (subgraph matcher, pattern miner, TED verifier).
//!
//! # Core Concepts
//!
//! - **Exchange format**: one line grammar (`t #`, `v`, `e`) in three
//!   dialects, parsed into [`GraphRecord`]s and written canonically from a
//!   [`QueryGraph`]
//! - **Vocabularies**: per-dataset atomic symbol tables ([`LabelVocabulary`])
//! - **Session state**: the persisted "reuse previous matches" flag
//!   ([`SessionState`])
//! - **Reports**: structured views of verifier and matcher output
//!   ([`VerificationReport`], [`MatcherTimings`])
//!
//! # Example
//!
//! ```
//! use graphex::{parse_str, write_query, QueryGraph};
//!
//! let query = QueryGraph::new()
//!     .with_node(17, 0)
//!     .with_node(4, 3)
//!     .with_edge(4, 17, 0);
//! let text = write_query(&query).unwrap();
//! assert_eq!(text, "t # 0\nv 0 0\nv 1 3\ne 1 0 0\nt # -1\n");
//!
//! let records = parse_str(&text);
//! assert_eq!(records[0].labels(), vec![0, 3]);
//! ```

pub mod config;
pub mod format;
pub mod report;
pub mod session;
pub mod vocabulary;

pub use config::{Config, ConfigError, ConfigResult};
pub use format::{
    default_patterns, detect_variant, load_default_patterns, parse_compact_str, parse_file,
    parse_str, save_query, write_query, CompactPattern, CompactPatterns, FormatError,
    FormatResult, GraphRecord, QueryGraph, RecordEdge, RecordId, RecordNode, RecordStream,
    StarterPattern, Variant,
};
pub use report::{Decision, MatcherTimings, ReplacementPolicy, VerificationReport};
pub use session::{
    FileFlagStore, FlagStore, MemoryFlagStore, OpenFlagStore, SearchMode, SessionError,
    SessionResult, SessionState,
};
pub use vocabulary::{ActiveDataset, DatabaseChoice, Dataset, LabelVocabulary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
