//! The aggregate diagnostic score value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, Tier};

use super::{CommercialViability, DigitalMaturity, InvestmentCapacity};

/// Full diagnostic score: the three dimension sub-scores, the final
/// 0-100 score, the derived tier, and the classification confidence.
///
/// `score_final` and `tier` are derived at construction from the
/// sub-score totals and the motivation bonus; neither is settable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticScore {
    digital_maturity: DigitalMaturity,
    investment_capacity: InvestmentCapacity,
    commercial_viability: CommercialViability,
    motivation_bonus: u8,
    score_final: u8,
    tier: Tier,
    confidence: Confidence,
}

impl DiagnosticScore {
    /// Maximum final score.
    pub const MAX: u8 = 100;

    /// Creates the score. The final score is
    /// `min(100, sum of dimension totals + motivation bonus)` and the
    /// tier is derived from it.
    pub fn new(
        digital_maturity: DigitalMaturity,
        investment_capacity: InvestmentCapacity,
        commercial_viability: CommercialViability,
        motivation_bonus: u8,
        confidence: Confidence,
    ) -> Self {
        let raw = u16::from(digital_maturity.total())
            + u16::from(investment_capacity.total())
            + u16::from(commercial_viability.total())
            + u16::from(motivation_bonus);
        let score_final = raw.min(u16::from(Self::MAX)) as u8;
        Self {
            digital_maturity,
            investment_capacity,
            commercial_viability,
            motivation_bonus,
            score_final,
            tier: Tier::from_score(score_final),
            confidence,
        }
    }

    /// Returns a copy with the confidence replaced. Score and tier are
    /// untouched.
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn digital_maturity(&self) -> &DigitalMaturity {
        &self.digital_maturity
    }

    pub fn investment_capacity(&self) -> &InvestmentCapacity {
        &self.investment_capacity
    }

    pub fn commercial_viability(&self) -> &CommercialViability {
        &self.commercial_viability
    }

    pub fn motivation_bonus(&self) -> u8 {
        self.motivation_bonus
    }

    pub fn score_final(&self) -> u8 {
        self.score_final
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Returns a per-component breakdown for downstream reporting.
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            score_final: self.score_final,
            tier: self.tier,
            confidence: self.confidence,
            motivation_bonus: self.motivation_bonus,
            digital_maturity: DimensionBreakdown {
                total: self.digital_maturity.total(),
                max: DigitalMaturity::MAX,
                components: vec![
                    ComponentPoints {
                        name: "data_driven_decisions",
                        points: self.digital_maturity.data_driven_decisions(),
                    },
                    ComponentPoints {
                        name: "standardized_processes",
                        points: self.digital_maturity.standardized_processes(),
                    },
                    ComponentPoints {
                        name: "integrated_systems",
                        points: self.digital_maturity.integrated_systems(),
                    },
                    ComponentPoints {
                        name: "operational_efficiency",
                        points: self.digital_maturity.operational_efficiency(),
                    },
                ],
            },
            investment_capacity: DimensionBreakdown {
                total: self.investment_capacity.total(),
                max: InvestmentCapacity::MAX,
                components: vec![
                    ComponentPoints {
                        name: "available_budget",
                        points: self.investment_capacity.available_budget(),
                    },
                    ComponentPoints {
                        name: "investment_history",
                        points: self.investment_capacity.investment_history(),
                    },
                    ComponentPoints {
                        name: "company_size",
                        points: self.investment_capacity.company_size(),
                    },
                ],
            },
            commercial_viability: DimensionBreakdown {
                total: self.commercial_viability.total(),
                max: CommercialViability::MAX,
                components: vec![
                    ComponentPoints {
                        name: "clear_problem",
                        points: self.commercial_viability.clear_problem(),
                    },
                    ComponentPoints {
                        name: "real_urgency",
                        points: self.commercial_viability.real_urgency(),
                    },
                    ComponentPoints {
                        name: "decision_power",
                        points: self.commercial_viability.decision_power(),
                    },
                ],
            },
        }
    }
}

/// Serializable per-component view of a [`DiagnosticScore`].
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub score_final: u8,
    pub tier: Tier,
    pub confidence: Confidence,
    pub motivation_bonus: u8,
    pub digital_maturity: DimensionBreakdown,
    pub investment_capacity: DimensionBreakdown,
    pub commercial_viability: DimensionBreakdown,
}

/// One dimension inside a [`ScoreBreakdown`].
#[derive(Debug, Clone, Serialize)]
pub struct DimensionBreakdown {
    pub total: u8,
    pub max: u8,
    pub components: Vec<ComponentPoints>,
}

/// A named component contribution.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentPoints {
    pub name: &'static str,
    pub points: u8,
}
