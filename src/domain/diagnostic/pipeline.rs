//! Pipeline roll-up over a batch of diagnostic results.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::Tier;

use super::DiagnosticResult;

/// Aggregated view of a set of diagnostics for reporting. Pure
/// computation; the caller supplies the results.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub total_diagnostics: usize,
    pub tier_a_count: usize,
    pub tier_b_count: usize,
    pub tier_c_count: usize,
    /// Diagnostics per archetype key.
    pub archetype_distribution: BTreeMap<String, usize>,
    /// Diagnostics per sector label.
    pub sector_distribution: BTreeMap<String, usize>,
    pub average_score: f64,
    pub average_close_probability: f64,
    /// Share of Tier A diagnostics, in percent.
    pub tier_a_conversion_rate: f64,
    /// Sum of amount-band midpoints weighted by close probability.
    pub estimated_pipeline_value_cop: u64,
}

impl PipelineSummary {
    /// Aggregates a batch of results. An empty batch yields zero counts
    /// and rates.
    pub fn from_results(results: &[DiagnosticResult]) -> Self {
        let total = results.len();

        let mut tier_a_count = 0;
        let mut tier_b_count = 0;
        let mut tier_c_count = 0;
        let mut archetype_distribution: BTreeMap<String, usize> = BTreeMap::new();
        let mut sector_distribution: BTreeMap<String, usize> = BTreeMap::new();
        let mut score_sum: u64 = 0;
        let mut probability_sum: u64 = 0;
        let mut pipeline_value = 0.0_f64;

        for result in results {
            match result.score.tier() {
                Tier::A => tier_a_count += 1,
                Tier::B => tier_b_count += 1,
                Tier::C => tier_c_count += 1,
            }

            *archetype_distribution
                .entry(result.archetype.id.key().to_string())
                .or_insert(0) += 1;
            *sector_distribution
                .entry(result.prospect_info.sector.label().to_string())
                .or_insert(0) += 1;

            score_sum += u64::from(result.score.score_final());
            let close_probability = result.meeting_prep.close_probability;
            probability_sum += u64::from(close_probability);
            pipeline_value += result.service.amount_midpoint_cop() as f64
                * (f64::from(close_probability) / 100.0);
        }

        let (average_score, average_close_probability, tier_a_conversion_rate) = if total > 0 {
            (
                score_sum as f64 / total as f64,
                probability_sum as f64 / total as f64,
                tier_a_count as f64 / total as f64 * 100.0,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        Self {
            total_diagnostics: total,
            tier_a_count,
            tier_b_count,
            tier_c_count,
            archetype_distribution,
            sector_distribution,
            average_score,
            average_close_probability,
            tier_a_conversion_rate,
            estimated_pipeline_value_cop: pipeline_value.round() as u64,
        }
    }
}
