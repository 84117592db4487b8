//! Shared fixtures for integration tests
//!
//! Small exchange files in each dialect, written to a scratch directory so
//! the file-based entry points see real paths.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Two-graph AIDS-style database with an end marker
pub const DATABASE: &str = "\
t # 0
v 0 0
v 1 1
v 2 0
e 0 1 0
e 1 2 1
t # 1
v 0 3
v 1 0
v 2 0
v 3 1
e 0 1 0
e 1 2 0
e 2 3 0
t # 2
v 0 4
t # -1
";

/// Mined patterns with sparse vertex ids and support counts
pub const PATTERN_SET: &str = "\
t # 0 3
v 5 0
v 9 1
v 14 0
e 5 9
e 9 14

t # 1 2
v 2 3
v 7 0
e 7 2
";

/// Two matches reported by the subgraph matcher
pub const RESULT: &str = "\
Final t # 0 * 12
v 0 0
v 1 1
v 2 0
e 0 1 0
e 1 2 1
Final t # 3 * 12
v 0 0
v 1 1
e 0 1 2
";

/// Scratch directory holding named fixture files
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create scratch dir"),
        }
    }

    /// Write `contents` to `name` inside the directory
    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
