//! Interpretation of external tool output
//!
//! The matcher and the TED verifier only talk through their stdout. This
//! module turns that text into typed values.

mod replacement;
mod timing;
mod verification;

pub use replacement::ReplacementPolicy;
pub use timing::MatcherTimings;
pub use verification::{Decision, VerificationReport};
