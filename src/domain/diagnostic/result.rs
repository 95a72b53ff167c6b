//! The complete diagnostic result.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::classification::{Archetype, ArchetypeClassifier};
use crate::domain::foundation::{DiagnosticId, Timestamp};
use crate::domain::insight::{Insight, InsightGenerator, MeetingPrep, QuickWin, RedFlag};
use crate::domain::prospect::{DiagnosticResponses, ProspectInfo};
use crate::domain::scoring::{DiagnosticScore, ScoringEngine, UnrecognizedAnswer};

use super::ServiceRecommendation;

/// Everything one diagnostic run produced. Constructed once and treated
/// as immutable; downstream persistence and notification collaborators
/// consume it as an opaque, fully-populated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub id: DiagnosticId,
    pub prospect_info: ProspectInfo,
    pub responses: DiagnosticResponses,
    pub score: DiagnosticScore,
    pub archetype: Archetype,
    pub quick_wins: Vec<QuickWin>,
    pub red_flags: Vec<RedFlag>,
    pub insights: Vec<Insight>,
    pub service: ServiceRecommendation,
    pub meeting_prep: MeetingPrep,
    /// Answers the lookup tables did not recognize, surfaced for the
    /// intake layer.
    pub unrecognized_answers: Vec<UnrecognizedAnswer>,
    pub created_at: Timestamp,
}

impl DiagnosticResult {
    /// Runs the full pipeline: scoring, classification, insight
    /// generation, and service recommendation.
    pub fn generate(prospect_info: ProspectInfo, responses: DiagnosticResponses) -> Self {
        let outcome = ScoringEngine::evaluate(&responses, &prospect_info);
        let score = outcome.score;
        let archetype = ArchetypeClassifier::classify(&score, &responses, &prospect_info);

        let quick_wins = InsightGenerator::quick_wins(&score, &responses);
        let red_flags = InsightGenerator::red_flags(&responses);
        let insights = InsightGenerator::insights(&score);
        let meeting_prep =
            InsightGenerator::meeting_prep(&score, &responses, &archetype, &prospect_info);
        let service = ServiceRecommendation::for_tier(score.tier());

        let id = DiagnosticId::new();
        info!(
            diagnostic_id = %id,
            company = %prospect_info.company_name,
            tier = %score.tier(),
            score = score.score_final(),
            archetype = archetype.id.key(),
            "diagnostic generated"
        );

        Self {
            id,
            prospect_info,
            responses,
            score,
            archetype,
            quick_wins,
            red_flags,
            insights,
            service,
            meeting_prep,
            unrecognized_answers: outcome.unrecognized,
            created_at: Timestamp::now(),
        }
    }
}
