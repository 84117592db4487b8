//! Shared tokenizer for the exchange grammar
//!
//! Every variant is built from the same four line shapes:
//!
//! ```text
//! t # <id> [<n>]            header (pattern-set / database)
//! Final t # <id> * <sup>    header (result)
//! v <id> <label>            node
//! e <source> <target> [<t>] edge
//! ```
//!
//! Classification is purely lexical. Numbers stay as text here; each variant
//! decides how to read them.

/// A classified input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming
    Blank,
    Header(Header<'a>),
    Node {
        id: &'a str,
        label: &'a str,
    },
    Edge {
        source: &'a str,
        target: &'a str,
        kind: Option<&'a str>,
    },
    /// Anything else, including `v`/`e` lines with too few fields
    Unrecognized,
}

/// A record header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Whether the line carried the `Final` prefix of matcher results
    pub prefixed: bool,
    /// Text after the first `#`, trimmed
    pub body: &'a str,
}

impl<'a> Header<'a> {
    /// Everything before `*`, trimmed (the full result id)
    pub fn id_text(&self) -> &'a str {
        self.body.split('*').next().unwrap_or("").trim()
    }

    /// First whitespace token of the id text
    pub fn id_token(&self) -> Option<&'a str> {
        self.id_text().split_whitespace().next()
    }

    /// Second token of the id text, the node count of a pattern-set header
    pub fn count_token(&self) -> Option<&'a str> {
        self.id_text().split_whitespace().nth(1)
    }

    /// First token after `*`
    pub fn support_token(&self) -> Option<&'a str> {
        let (_, rest) = self.body.split_once('*')?;
        rest.split_whitespace().next()
    }

    /// `t # -1` closes the open record instead of starting one
    pub fn is_terminator(&self) -> bool {
        self.id_token() == Some("-1")
    }
}

/// Classify one raw line. Surrounding whitespace is ignored.
pub fn classify(raw: &str) -> LineClass<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return LineClass::Blank;
    }

    if let Some(header) = parse_header(line) {
        return LineClass::Header(header);
    }

    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some("v"), Some(id), Some(label)) => LineClass::Node { id, label },
        (Some("e"), Some(source), Some(target)) => LineClass::Edge {
            source,
            target,
            kind: tokens.next(),
        },
        _ => LineClass::Unrecognized,
    }
}

fn parse_header(line: &str) -> Option<Header<'_>> {
    let (prefixed, rest) = match line.strip_prefix("Final") {
        Some(rest) if rest.starts_with(char::is_whitespace) => (true, rest.trim_start()),
        _ => (false, line),
    };
    let rest = rest.strip_prefix('t')?.trim_start();
    let body = rest.strip_prefix('#')?.trim();
    let header = Header { prefixed, body };
    header.id_token()?;
    Some(header)
}
