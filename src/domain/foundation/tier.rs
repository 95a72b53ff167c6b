//! Priority tier derived from the final readiness score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum final score for Tier A.
pub const TIER_A_THRESHOLD: u8 = 70;

/// Minimum final score for Tier B.
pub const TIER_B_THRESHOLD: u8 = 40;

/// Coarse priority bucket for a qualified prospect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Ideal client (70-100).
    A,
    /// Worth nurturing (40-69).
    B,
    /// Deprioritize (0-39).
    C,
}

impl Tier {
    /// Derives the tier from a final score. Pure step function, no hysteresis.
    pub fn from_score(score: u8) -> Self {
        if score >= TIER_A_THRESHOLD {
            Tier::A
        } else if score >= TIER_B_THRESHOLD {
            Tier::B
        } else {
            Tier::C
        }
    }

    /// Returns the single-letter label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
