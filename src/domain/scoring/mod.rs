//! Scoring module - Pure domain services for readiness scoring.
//!
//! Maps categorical questionnaire answers and company attributes to
//! three bounded dimension sub-scores and an aggregate score with a
//! motivation bonus, a priority tier, and a classification-confidence
//! estimate.
//!
//! # Components
//!
//! - `tables` - Answer-to-points lookup tables (auditable data)
//! - `DigitalMaturity` / `InvestmentCapacity` / `CommercialViability` - dimension sub-scores
//! - `DiagnosticScore` - the aggregate score value object
//! - `ScoringEngine` - the scoring computation
//!
//! All functions are pure and stateless; the lookup tables are constant
//! data so scoring content and scoring logic version independently.

mod dimensions;
mod engine;
mod score;
pub mod tables;

pub use dimensions::{CommercialViability, DigitalMaturity, InvestmentCapacity};
pub use engine::{
    ScoringEngine, ScoringOutcome, UnrecognizedAnswer, BASE_CONFIDENCE, BOARD_MANDATE_BONUS,
    COMPETITIVE_PRESSURE_BONUS, CONSISTENT_SIGNALS_BONUS, COST_REDUCTION_BONUS,
    DECISIVE_HIGH_SCORE, DECISIVE_LOW_SCORE, DECISIVE_SCORE_BONUS,
    INVESTMENT_CONSISTENCY_THRESHOLD, MATURITY_CONSISTENCY_THRESHOLD, MOTIVATION_BONUS_CAP,
    SLOW_PROCESSES_BONUS, SOLE_CURIOSITY_PENALTY, SPECIFIC_PROBLEM_BONUS,
    UNKNOWN_ANSWER_PENALTY, URGENCY_CONSISTENCY_THRESHOLD, VIABILITY_CONSISTENCY_THRESHOLD,
};
pub use score::{ComponentPoints, DiagnosticScore, DimensionBreakdown, ScoreBreakdown};
