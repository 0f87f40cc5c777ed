use super::super::domain::Decision;
use super::config::ScoringConfig;

/// Absorbs floating-point noise so a weighted sum that should land on a threshold does.
const THRESHOLD_TOLERANCE: f64 = 1e-9;

/// Score-threshold policy: the composite alone decides.
pub(crate) fn decide(composite: f64, config: &ScoringConfig) -> Decision {
    if composite + THRESHOLD_TOLERANCE >= config.shortlist_threshold {
        Decision::Shortlist
    } else if composite + THRESHOLD_TOLERANCE >= config.review_threshold {
        Decision::Review
    } else {
        Decision::Reject
    }
}
