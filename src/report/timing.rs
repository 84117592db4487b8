//! Timing figures printed by the matcher

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static VF2_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"VF2 Time\(s\): ([0-9.]+)").expect("static pattern"));
static TOTAL_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*Time\(s\): ([0-9.]+)").expect("static pattern"));

/// Seconds reported by a matcher run; `None` when the line never appeared
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatcherTimings {
    pub vf2_seconds: Option<f64>,
    pub total_seconds: Option<f64>,
}

impl MatcherTimings {
    /// Scan matcher stdout; later lines override earlier ones
    pub fn parse(output: &str) -> Self {
        let mut timings = Self::default();
        for line in output.lines() {
            if let Some(secs) = capture_seconds(&VF2_TIME, line) {
                timings.vf2_seconds = Some(secs);
            }
            if let Some(secs) = capture_seconds(&TOTAL_TIME, line) {
                timings.total_seconds = Some(secs);
            }
        }
        timings
    }
}

fn capture_seconds(pattern: &Regex, line: &str) -> Option<f64> {
    pattern.captures(line)?.get(1)?.as_str().parse().ok()
}
