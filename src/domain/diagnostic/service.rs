//! Tier-based service recommendation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Tier;

/// The suggested engagement and its amount band (COP).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecommendation {
    pub service: String,
    pub amount_min_cop: u64,
    pub amount_max_cop: u64,
}

impl ServiceRecommendation {
    /// Returns the engagement suggested for a tier.
    pub fn for_tier(tier: Tier) -> Self {
        let (service, amount_min_cop, amount_max_cop) = match tier {
            Tier::A => ("Implementación Completa", 25_000_000, 45_000_000),
            Tier::B => ("Diagnóstico Profundo + Roadmap", 12_000_000, 25_000_000),
            Tier::C => ("Workshop Educativo", 0, 5_000_000),
        };
        Self {
            service: service.to_string(),
            amount_min_cop,
            amount_max_cop,
        }
    }

    /// Midpoint of the amount band, used for pipeline estimates.
    pub fn amount_midpoint_cop(&self) -> u64 {
        (self.amount_min_cop + self.amount_max_cop) / 2
    }
}
