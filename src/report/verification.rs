//! Verifier report analysis
//!
//! The TED verifier prints a free-form log. Each field of
//! [`VerificationReport`] is pulled from it by an independent scan over all
//! lines, the last matching line winning. Nothing here can fail: a field whose
//! line never appears keeps its zero/false default.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Phrases announcing that the verifier ran its filtering pass
const FILTERING_PHRASES: &[&str] = &[
    "Using comprehensive verification with filtering",
    "Starting TED graph filtering",
];

/// Phrases asserting the query is a subgraph of the TED graphs.
/// The empty phrase matches every line, so a negative phrase never wins.
const SUBGRAPH_YES_PHRASES: &[&str] = &["", "All TED graphs contain query graph: Yes"];

const SUBGRAPH_NO_PHRASES: &[&str] = &[
    "Query graph is TED subgraph: No",
    "All TED graphs contain query graph: No",
];

/// Phrases that require the query graph to be replaced
const REPLACEMENT_PHRASES: &[&str] = &[" Verification failed:", " Structure verification failed:"];

static ORIGINAL_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Original TED graph count: ([0-9]+)").expect("static pattern"));
static FILTERED_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Retained TED graph count: ([0-9]+)|Filtered TED graph count: ([0-9]+)")
        .expect("static pattern")
});
static TED_TOTAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"TED graph total: ([0-9]+)|Filtered TED graph count: ([0-9]+)").expect("static pattern")
});
static TED_MATCHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TED graphs with matches in AIDS: ([0-9]+)").expect("static pattern"));
static MATCH_RATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Subgraph match rate: ([0-9.]+)%").expect("static pattern"));

/// What the caller should do with the verified query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    Accept,
    NeedsReplacement,
}

/// Structured result of a verifier run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub subgraph_valid: bool,
    pub ted_matches: i64,
    pub total_ted: i64,
    pub match_rate_percent: f64,
    pub was_filtered: bool,
    pub original_count: i64,
    pub filtered_count: i64,
    pub needs_replacement: bool,
    pub is_perfect: bool,
    pub summary_text: String,
}

impl VerificationReport {
    /// Analyze the complete stdout of a verifier run
    pub fn analyze(output: &str) -> Self {
        let mut report = Self::default();

        for line in output.split('\n') {
            if contains_any(line, FILTERING_PHRASES) {
                report.was_filtered = true;
            }
            if let Some(n) = first_int(ORIGINAL_COUNT.captures(line)) {
                report.original_count = n;
            }
            if let Some(n) = first_int(FILTERED_COUNT.captures(line)) {
                report.filtered_count = n;
            }
            if contains_any(line, SUBGRAPH_YES_PHRASES) {
                report.subgraph_valid = true;
            } else if contains_any(line, SUBGRAPH_NO_PHRASES) {
                report.subgraph_valid = false;
            }
            if let Some(n) = first_int(TED_TOTAL.captures(line)) {
                report.total_ted = n;
            }
            if let Some(n) = first_int(TED_MATCHES.captures(line)) {
                report.ted_matches = n;
            }
            if let Some(rate) = MATCH_RATE
                .captures(line)
                .and_then(|c| leading_float(c.get(1)?.as_str()))
            {
                report.match_rate_percent = rate;
            }
            if contains_any(line, REPLACEMENT_PHRASES) {
                report.needs_replacement = true;
            }
        }

        report.is_perfect = report.subgraph_valid
            && report.ted_matches == report.total_ted
            && report.match_rate_percent >= 50.0;
        report.summary_text = report.summary();
        report
    }

    pub fn decision(&self) -> Decision {
        if self.needs_replacement {
            Decision::NeedsReplacement
        } else {
            Decision::Accept
        }
    }

    /// Accepted without replacement and perfect
    pub fn passed(&self) -> bool {
        !self.needs_replacement && self.is_perfect
    }

    fn summary(&self) -> String {
        let has_matches = self.ted_matches > 0;

        if self.was_filtered {
            let filter_info = if self.original_count > 0 {
                format!(
                    "(filtered from {} to {})",
                    self.original_count, self.filtered_count
                )
            } else {
                String::new()
            };
            let none_retained = self.filtered_count == 0;

            match (self.is_perfect, self.subgraph_valid, has_matches, none_retained) {
                (true, ..) => format!(
                    " Perfect verification: TED graphs filtered{}, all retained TED graphs have matches in database",
                    filter_info
                ),
                (false, true, true, _) => format!(
                    " Filter successful, partial database match: TED graphs filtered{}, {}/{} TED graphs have matches in database",
                    filter_info, self.ted_matches, self.total_ted
                ),
                (false, true, false, _) => format!(
                    " Filter successful but no database match: TED graphs filtered{}, but no matches found in database",
                    filter_info
                ),
                (false, false, _, true) => {
                    " Filter failed: No TED graphs contain query graph as subgraph, all TED graphs removed".to_string()
                }
                (false, false, _, false) => {
                    "Filter exception: After filtering, some TED graphs still don't contain query graph".to_string()
                }
            }
        } else {
            match (self.is_perfect, self.subgraph_valid, has_matches) {
                (true, ..) => {
                    " Perfect verification: Query graph is subgraph of TED graphs, all TED graphs have matches in database".to_string()
                }
                (false, true, true) => format!(
                    " Partial verification passed: Query graph is subgraph of TED graphs ({}%), {}/{} TED graphs have matches in database",
                    one_decimal(self.match_rate_percent), self.ted_matches, self.total_ted
                ),
                (false, true, false) => {
                    " Structure verification passed but database match failed: Query graph is subgraph of TED graphs, but TED graphs not found in database".to_string()
                }
                (false, false, true) => {
                    "Structure verification failed: Query graph is not subgraph of TED graphs, but some TED graphs have matches in database".to_string()
                }
                (false, false, false) => {
                    " Complete verification failed: Query graph is not subgraph of TED graphs, and TED graphs not found in database".to_string()
                }
            }
        }
    }
}

fn contains_any(line: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| line.contains(p))
}

/// Integer from whichever capture group of an alternation matched
fn first_int(caps: Option<Captures<'_>>) -> Option<i64> {
    let caps = caps?;
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .and_then(|m| m.as_str().parse().ok())
}

/// Longest numeric prefix of a `[0-9.]+` match, e.g. `75.0.1` reads as 75.0
fn leading_float(text: &str) -> Option<f64> {
    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f64>().ok())
}

/// One decimal place, ties rounded away from zero
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_defaults() {
        let report = VerificationReport::analyze("");
        assert_eq!(report.ted_matches, 0);
        assert_eq!(report.total_ted, 0);
        assert_eq!(report.match_rate_percent, 0.0);
        assert!(!report.was_filtered);
        assert!(!report.needs_replacement);
        assert_eq!(report.decision(), Decision::Accept);
    }

    #[test]
    fn test_every_line_asserts_subgraph_validity() {
        let report = VerificationReport::analyze("Query graph is TED subgraph: No\n");
        assert!(report.subgraph_valid);

        let report = VerificationReport::analyze("");
        assert!(report.subgraph_valid);
    }

    #[test]
    fn test_count_mismatch_is_not_perfect() {
        let output = "All TED graphs contain query graph: Yes\n\
                      TED graph total: 4\n\
                      TED graphs with matches in AIDS: 3\n\
                      Subgraph match rate: 75.0%\n";
        let report = VerificationReport::analyze(output);
        assert!(report.subgraph_valid);
        assert_eq!(report.ted_matches, 3);
        assert_eq!(report.total_ted, 4);
        assert_eq!(report.match_rate_percent, 75.0);
        assert!(!report.is_perfect);
        assert_eq!(
            report.summary_text,
            " Partial verification passed: Query graph is subgraph of TED graphs (75.0%), 3/4 TED graphs have matches in database"
        );
    }

    #[test]
    fn test_perfect_report() {
        let output = "TED graph total: 5\nTED graphs with matches in AIDS: 5\nSubgraph match rate: 100%\n";
        let report = VerificationReport::analyze(output);
        assert!(report.is_perfect);
        assert!(report.passed());
        assert!(report.summary_text.starts_with(" Perfect verification: Query graph"));
    }

    #[test]
    fn test_low_rate_is_not_perfect() {
        let output = "TED graph total: 2\nTED graphs with matches in AIDS: 2\nSubgraph match rate: 49.9%\n";
        assert!(!VerificationReport::analyze(output).is_perfect);
    }

    #[test]
    fn test_last_match_wins() {
        let output = "TED graph total: 9\nTED graph total: 2\nOriginal TED graph count: 7\nOriginal TED graph count: 6\n";
        let report = VerificationReport::analyze(output);
        assert_eq!(report.total_ted, 2);
        assert_eq!(report.original_count, 6);
    }

    #[test]
    fn test_filtered_report() {
        let output = "Using comprehensive verification with filtering\n\
                      Original TED graph count: 10\n\
                      Filtered TED graph count: 4\n\
                      TED graphs with matches in AIDS: 2\n\
                      Subgraph match rate: 100.0%\n";
        let report = VerificationReport::analyze(output);
        assert!(report.was_filtered);
        assert_eq!(report.original_count, 10);
        assert_eq!(report.filtered_count, 4);
        // the filtered count line also reports the TED total
        assert_eq!(report.total_ted, 4);
        assert_eq!(
            report.summary_text,
            " Filter successful, partial database match: TED graphs filtered(filtered from 10 to 4), 2/4 TED graphs have matches in database"
        );
    }

    #[test]
    fn test_filtered_without_original_count() {
        let output = "Starting TED graph filtering\nRetained TED graph count: 3\n";
        let report = VerificationReport::analyze(output);
        assert_eq!(report.filtered_count, 3);
        assert_eq!(
            report.summary_text,
            " Filter successful but no database match: TED graphs filtered, but no matches found in database"
        );
    }

    #[test]
    fn test_replacement_phrases() {
        let report = VerificationReport::analyze("[x] Verification failed: TED graph 2\n");
        assert!(report.needs_replacement);
        assert_eq!(report.decision(), Decision::NeedsReplacement);
        assert!(!report.passed());

        let report = VerificationReport::analyze("Verification failed: no leading space\n");
        assert!(!report.needs_replacement);
    }

    #[test]
    fn test_malformed_rate_reads_prefix() {
        let report = VerificationReport::analyze("Subgraph match rate: 62.5.1%\n");
        assert_eq!(report.match_rate_percent, 62.5);
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        let report = VerificationReport::analyze(
            "Subgraph match rate: \u{0667}\u{0665}%\nTED graph total: \u{0663}\n",
        );
        assert_eq!(report.match_rate_percent, 0.0);
        assert_eq!(report.total_ted, 0);
        assert_eq!(leading_float("7\u{0665}"), Some(7.0));
    }

    #[test]
    fn test_partial_rate_rounds_half_up() {
        for (rate, shown) in [("62.25", "62.3"), ("0.25", "0.3"), ("12.75", "12.8")] {
            let output = format!(
                "TED graph total: 4\nTED graphs with matches in AIDS: 3\nSubgraph match rate: {}%\n",
                rate
            );
            let report = VerificationReport::analyze(&output);
            assert!(
                report.summary_text.contains(&format!("TED graphs ({}%)", shown)),
                "{} -> {}",
                rate,
                report.summary_text
            );
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(VerificationReport::analyze("TED graph total: 1\n")).unwrap();
        assert_eq!(value["totalTed"], 1);
        assert_eq!(value["subgraphValid"], true);
        assert!(value.get("summaryText").is_some());
    }
}
