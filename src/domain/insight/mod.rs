//! Insight module - Derived recommendations.
//!
//! Consumes the score, the responses, and the selected archetype to
//! synthesize quick-win recommendations, red flags, strategic insights,
//! and the meeting-preparation bundle. All derivations are pure and
//! template-driven; the templates live in `templates` as static data.

mod generator;
mod templates;
mod types;

pub use generator::{
    InsightGenerator, BASE_CLOSE_PROBABILITY, LOW_COMPONENT_SCORE, MAX_CLOSE_PROBABILITY,
    MAX_QUICK_WINS, SECOND_URGENCY_CLOSE_BONUS, SOLE_DECISION_MAKER_CLOSE_BONUS,
    STRONG_INVESTMENT_THRESHOLD, TIER_A_CLOSE_BONUS, TIER_B_CLOSE_BONUS,
    TOP_URGENCY_CLOSE_BONUS, WEAK_MATURITY_THRESHOLD, WEAK_VIABILITY_THRESHOLD,
};
pub use types::{
    Insight, InsightCategory, MeetingPrep, ObjectionResponse, QuickWin, RedFlag, Severity,
};
