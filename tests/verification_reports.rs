//! Verifier and matcher output interpretation, plus label palettes

use graphex::{
    ActiveDataset, DatabaseChoice, Dataset, Decision, LabelVocabulary, MatcherTimings,
    VerificationReport,
};

const PARTIAL_REPORT: &str = "\
Loading query graph...
Query graph is TED subgraph: Yes
TED graph total: 4
TED graphs with matches in AIDS: 3
Subgraph match rate: 75.0%
";

const FILTERED_REPORT: &str = "\
Using comprehensive verification with filtering
Starting TED graph filtering
Original TED graph count: 5
Retained TED graph count: 2
TED graph total: 2
TED graphs with matches in AIDS: 2
Subgraph match rate: 100.0%
All TED graphs contain query graph: Yes
";

const REJECTED_REPORT: &str = "\
Query graph is TED subgraph: No
TED graph total: 3
TED graphs with matches in AIDS: 0
Subgraph match rate: 0.0%
[verify] Verification failed: query graph too small
";

#[test]
fn test_partial_match_is_not_perfect() {
    let report = VerificationReport::analyze(PARTIAL_REPORT);
    assert!(report.subgraph_valid);
    assert_eq!(report.ted_matches, 3);
    assert_eq!(report.total_ted, 4);
    assert_eq!(report.match_rate_percent, 75.0);
    assert!(!report.was_filtered);
    assert!(!report.is_perfect);
    assert_eq!(report.decision(), Decision::Accept);
    assert!(!report.passed());
    assert_eq!(
        report.summary_text,
        " Partial verification passed: Query graph is subgraph of TED graphs (75.0%), 3/4 TED graphs have matches in database"
    );
}

#[test]
fn test_filtered_perfect_run() {
    let report = VerificationReport::analyze(FILTERED_REPORT);
    assert!(report.was_filtered);
    assert_eq!(report.original_count, 5);
    assert_eq!(report.filtered_count, 2);
    assert!(report.is_perfect);
    assert!(report.passed());
    assert_eq!(
        report.summary_text,
        " Perfect verification: TED graphs filtered(filtered from 5 to 2), all retained TED graphs have matches in database"
    );
}

#[test]
fn test_failure_line_requests_replacement() {
    let report = VerificationReport::analyze(REJECTED_REPORT);
    assert!(report.needs_replacement);
    assert_eq!(report.decision(), Decision::NeedsReplacement);
    assert!(!report.passed());
    assert_eq!(report.total_ted, 3);
    assert_eq!(report.ted_matches, 0);
}

#[test]
fn test_empty_output() {
    let report = VerificationReport::analyze("");
    assert!(report.subgraph_valid);
    assert_eq!(report.total_ted, 0);
    assert!(!report.is_perfect);
    assert_eq!(report.decision(), Decision::Accept);
}

#[test]
fn test_report_json_uses_camel_case() {
    let report = VerificationReport::analyze(PARTIAL_REPORT);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["tedMatches"], 3);
    assert_eq!(json["matchRatePercent"], 75.0);
    assert_eq!(json["isPerfect"], false);
}

#[test]
fn test_matcher_timings() {
    let stdout = "Loading graphs\nVF2 Time(s): 0.125\nMatches: 17\nTime(s): 1.5\n";
    let timings = MatcherTimings::parse(stdout);
    assert_eq!(timings.vf2_seconds, Some(0.125));
    assert_eq!(timings.total_seconds, Some(1.5));

    assert_eq!(MatcherTimings::parse("no timing here"), MatcherTimings::default());
}

#[test]
fn test_palette_for_selected_database() {
    let choice: DatabaseChoice = "1".parse().unwrap();
    let active = ActiveDataset::new(Dataset::Default);
    assert_eq!(active.select_choice(choice), Dataset::Aids);

    let vocabulary = active.vocabulary();
    assert_eq!(vocabulary.forward("C"), Some(0));
    assert_eq!(vocabulary.reverse(3), Some("N"));

    let ordered = vocabulary.ordered_by_frequency();
    let (first, rank) = ordered.get_index(0).unwrap();
    assert_eq!((*first, rank.as_str()), ("C", "0"));

    let snapshot = LabelVocabulary::for_name("AIDS10K.txt").snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["dataset"], "AIDS");
    assert_eq!(json["atomicLabels"]["O"], 1);
    assert_eq!(json["reverseAtomicLabels"]["2"], "Cu");
}
