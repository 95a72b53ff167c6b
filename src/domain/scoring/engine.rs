//! The scoring computation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::foundation::Confidence;
use crate::domain::prospect::{answers, DiagnosticResponses, ProspectInfo, ResponseField};

use super::{
    tables, CommercialViability, DiagnosticScore, DigitalMaturity, InvestmentCapacity,
};

// Motivation bonus adjustments, clamped to [0, MOTIVATION_BONUS_CAP]
// after summation.
pub const COMPETITIVE_PRESSURE_BONUS: i8 = 2;
pub const SLOW_PROCESSES_BONUS: i8 = 2;
pub const SPECIFIC_PROBLEM_BONUS: i8 = 2;
pub const COST_REDUCTION_BONUS: i8 = 1;
pub const BOARD_MANDATE_BONUS: i8 = 1;
pub const SOLE_CURIOSITY_PENALTY: i8 = -2;
pub const MOTIVATION_BONUS_CAP: i8 = 5;

// Confidence estimation. High confidence means consistent answers.
pub const BASE_CONFIDENCE: f64 = 0.5;
pub const DECISIVE_SCORE_BONUS: f64 = 0.2;
pub const UNKNOWN_ANSWER_PENALTY: f64 = 0.1;
pub const CONSISTENT_SIGNALS_BONUS: f64 = 0.1;

/// A final score at or above this mark is far from the tier boundaries.
pub const DECISIVE_HIGH_SCORE: u8 = 80;
/// A final score at or below this mark is far from the tier boundaries.
pub const DECISIVE_LOW_SCORE: u8 = 30;

pub const MATURITY_CONSISTENCY_THRESHOLD: u8 = 30;
pub const INVESTMENT_CONSISTENCY_THRESHOLD: u8 = 20;
pub const VIABILITY_CONSISTENCY_THRESHOLD: u8 = 20;
pub const URGENCY_CONSISTENCY_THRESHOLD: u8 = 7;

/// An answer the lookup tables did not recognize: a typo, a stale
/// option no longer configured, or free text. It scored zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnrecognizedAnswer {
    pub field: ResponseField,
    pub value: String,
}

/// The scoring result plus the unrecognized answers encountered, so the
/// intake layer can distinguish "scored zero" from "not recognized".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOutcome {
    pub score: DiagnosticScore,
    pub unrecognized: Vec<UnrecognizedAnswer>,
}

impl ScoringOutcome {
    /// Discards the warnings and keeps the score.
    pub fn into_score(self) -> DiagnosticScore {
        self.score
    }
}

/// Readiness scoring over the questionnaire lookup tables.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes the full diagnostic score.
    ///
    /// Unrecognized answers score zero and are logged; use [`Self::evaluate`]
    /// to also receive them as data.
    pub fn calculate_full_score(
        responses: &DiagnosticResponses,
        prospect_info: &ProspectInfo,
    ) -> DiagnosticScore {
        Self::evaluate(responses, prospect_info).into_score()
    }

    /// Computes the full diagnostic score along with any unrecognized
    /// answers.
    pub fn evaluate(
        responses: &DiagnosticResponses,
        prospect_info: &ProspectInfo,
    ) -> ScoringOutcome {
        let mut unrecognized = Vec::new();

        let maturity = Self::digital_maturity(responses, &mut unrecognized);
        let capacity = Self::investment_capacity(responses, prospect_info, &mut unrecognized);
        let viability = Self::commercial_viability(responses, &mut unrecognized);

        // Recognition check only; these two fields feed no dimension.
        let _ = Self::looked_up(
            ResponseField::TechnicalTeam,
            tables::TECHNICAL_TEAM_POINTS,
            &responses.technical_team,
            &mut unrecognized,
        );
        let _ = Self::looked_up(
            ResponseField::ImplementationCapacity,
            tables::IMPLEMENTATION_CAPACITY_POINTS,
            &responses.implementation_capacity,
            &mut unrecognized,
        );

        let bonus = Self::motivation_bonus(&responses.motivations);
        let provisional = DiagnosticScore::new(
            maturity,
            capacity,
            viability,
            bonus,
            Confidence::new(BASE_CONFIDENCE),
        );
        let confidence = Self::confidence_estimate(&provisional, responses);

        ScoringOutcome {
            score: provisional.with_confidence(confidence),
            unrecognized,
        }
    }

    /// Digital maturity (0-40).
    fn digital_maturity(
        responses: &DiagnosticResponses,
        unrecognized: &mut Vec<UnrecognizedAnswer>,
    ) -> DigitalMaturity {
        let decisions = Self::looked_up(
            ResponseField::DecisionMaking,
            tables::DECISION_MAKING_POINTS,
            &responses.decision_making,
            unrecognized,
        );
        let processes = Self::looked_up(
            ResponseField::CriticalProcesses,
            tables::CRITICAL_PROCESSES_POINTS,
            &responses.critical_processes,
            unrecognized,
        );
        let integration = Self::looked_up(
            ResponseField::InformationSharing,
            tables::INFORMATION_SHARING_POINTS,
            &responses.information_sharing,
            unrecognized,
        );
        let efficiency = Self::looked_up(
            ResponseField::RepetitiveTasks,
            tables::REPETITIVE_TASKS_POINTS,
            &responses.repetitive_tasks,
            unrecognized,
        );

        DigitalMaturity::new(decisions, processes, integration, efficiency)
    }

    /// Investment capacity (0-30). The company-size component takes the
    /// maximum of the revenue and headcount lookups, so a large
    /// headcount with modest revenue still counts as large.
    fn investment_capacity(
        responses: &DiagnosticResponses,
        prospect_info: &ProspectInfo,
        unrecognized: &mut Vec<UnrecognizedAnswer>,
    ) -> InvestmentCapacity {
        let budget = Self::looked_up(
            ResponseField::BudgetBracket,
            tables::BUDGET_POINTS,
            &responses.budget_bracket,
            unrecognized,
        );
        let history = Self::looked_up(
            ResponseField::RecentInvestment,
            tables::RECENT_INVESTMENT_POINTS,
            &responses.recent_investment,
            unrecognized,
        );

        let size = tables::revenue_size_points(prospect_info.revenue_bracket)
            .max(tables::headcount_size_points(prospect_info.headcount_bracket));

        InvestmentCapacity::new(budget, history, size)
    }

    /// Commercial viability (0-30).
    fn commercial_viability(
        responses: &DiagnosticResponses,
        unrecognized: &mut Vec<UnrecognizedAnswer>,
    ) -> CommercialViability {
        let problem = Self::looked_up(
            ResponseField::PrimaryFrustration,
            tables::PRIMARY_FRUSTRATION_POINTS,
            &responses.primary_frustration,
            unrecognized,
        );
        let urgency = Self::looked_up(
            ResponseField::Urgency,
            tables::URGENCY_POINTS,
            &responses.urgency,
            unrecognized,
        );
        let decision = Self::looked_up(
            ResponseField::ApprovalProcess,
            tables::APPROVAL_PROCESS_POINTS,
            &responses.approval_process,
            unrecognized,
        );

        CommercialViability::new(problem, urgency, decision)
    }

    /// Bonus in [0,5] from the motivation multi-select.
    pub fn motivation_bonus(motivations: &[String]) -> u8 {
        let has = |tag: &str| motivations.iter().any(|m| m == tag);

        let mut bonus: i8 = 0;
        if has(answers::motivation::COMPETITIVE_PRESSURE) {
            bonus += COMPETITIVE_PRESSURE_BONUS;
        }
        if has(answers::motivation::SLOW_PROCESSES) {
            bonus += SLOW_PROCESSES_BONUS;
        }
        if has(answers::motivation::COST_REDUCTION) {
            bonus += COST_REDUCTION_BONUS;
        }
        if has(answers::motivation::SPECIFIC_PROBLEM) {
            bonus += SPECIFIC_PROBLEM_BONUS;
        }
        if motivations.len() == 1 && motivations[0] == answers::motivation::CURIOSITY {
            bonus += SOLE_CURIOSITY_PENALTY;
        }
        // Neutral signal: someone else holds the urgency.
        if has(answers::motivation::BOARD_MANDATE) {
            bonus += BOARD_MANDATE_BONUS;
        }

        bonus.clamp(0, MOTIVATION_BONUS_CAP) as u8
    }

    /// Classification confidence in [0,1], computed from the post-bonus
    /// score and the answer set.
    fn confidence_estimate(
        score: &DiagnosticScore,
        responses: &DiagnosticResponses,
    ) -> Confidence {
        let mut confidence = BASE_CONFIDENCE;

        if score.score_final() >= DECISIVE_HIGH_SCORE || score.score_final() <= DECISIVE_LOW_SCORE
        {
            confidence += DECISIVE_SCORE_BONUS;
        }

        if responses.repetitive_tasks == answers::repetitive_tasks::UNKNOWN {
            confidence -= UNKNOWN_ANSWER_PENALTY;
        }
        if responses.budget_bracket == answers::budget::UNDISCLOSED {
            confidence -= UNKNOWN_ANSWER_PENALTY;
        }

        if score.digital_maturity().total() >= MATURITY_CONSISTENCY_THRESHOLD
            && score.investment_capacity().total() >= INVESTMENT_CONSISTENCY_THRESHOLD
        {
            confidence += CONSISTENT_SIGNALS_BONUS;
        }
        if score.commercial_viability().total() >= VIABILITY_CONSISTENCY_THRESHOLD
            && score.commercial_viability().real_urgency() >= URGENCY_CONSISTENCY_THRESHOLD
        {
            confidence += CONSISTENT_SIGNALS_BONUS;
        }

        Confidence::new(confidence)
    }

    fn looked_up(
        field: ResponseField,
        table: &[(&str, u8)],
        answer: &str,
        unrecognized: &mut Vec<UnrecognizedAnswer>,
    ) -> u8 {
        match tables::lookup(table, answer) {
            Some(points) => points,
            None => {
                warn!(field = %field, value = %answer, "unrecognized questionnaire answer");
                unrecognized.push(UnrecognizedAnswer {
                    field,
                    value: answer.to_string(),
                });
                0
            }
        }
    }
}
